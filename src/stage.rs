use std::fmt;

use log::{error, info};

pub fn update(stage: Stage) {
    match stage {
        Stage::Fail(err) => error!("{}: {:#}", stage, err),
        other => info!("{}", other),
    }
}

pub enum Stage<'a> {
    Loading(&'a str),
    Loaded(usize),
    Searching(&'a str),
    Cleared,
    Rendered(usize),
    Fail(&'a anyhow::Error),
}

impl<'a> fmt::Display for Stage<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading(url) => write!(f, "Loading {}", url),
            Self::Loaded(count) => write!(f, "Loaded {} books", count),
            Self::Searching(term) => write!(f, "Searching {:?}", term),
            Self::Cleared => write!(f, "Cleared"),
            Self::Rendered(count) => write!(f, "Rendered {} rows", count),
            Self::Fail(_) => write!(f, "Fail"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Stage;

    #[test]
    fn stage_labels() {
        let err = anyhow::Error::msg("boom");

        assert_eq!("Loaded 3 books", Stage::Loaded(3).to_string());
        assert_eq!("Searching \"dune\"", Stage::Searching("dune").to_string());
        assert_eq!("Fail", Stage::Fail(&err).to_string());
    }
}
