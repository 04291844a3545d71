/// Static catalog published alongside the original page.
pub const DATA_URL: &str = "https://clarencenorcio.github.io/libara/data.json";
