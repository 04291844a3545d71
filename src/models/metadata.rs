/// Columns of the results table, in display order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metadata {
    Title,
    Author,
    Genre,
    Status,
}

impl Metadata {
    pub const COLUMNS: [Metadata; 4] = [
        Metadata::Title,
        Metadata::Author,
        Metadata::Genre,
        Metadata::Status,
    ];

    /// Text columns a search term is matched against.
    pub const SEARCHABLE: [Metadata; 3] = [Metadata::Title, Metadata::Author, Metadata::Genre];

    pub fn as_str(&self) -> &str {
        match self {
            Metadata::Title => "Title",
            Metadata::Author => "Author",
            Metadata::Genre => "Genre",
            Metadata::Status => "Status",
        }
    }
}
