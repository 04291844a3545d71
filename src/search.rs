use crate::models::{Book, Metadata};

#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Blank term: results cleared, initial message restored.
    Cleared,
    Matches(Vec<Book>),
}

pub fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

/// `term` must already be normalized. Missing fields never match.
pub fn matches(book: &Book, term: &str) -> bool {
    Metadata::SEARCHABLE
        .iter()
        .filter_map(|metadata| book.text(*metadata))
        .any(|text| text.to_lowercase().contains(term))
}

pub fn search(term: &str, books: &[Book]) -> Outcome {
    let term = normalize(term);

    if term.is_empty() {
        return Outcome::Cleared;
    }

    let filtered = books
        .iter()
        .filter(|book| matches(book, &term))
        .cloned()
        .collect::<Vec<_>>();

    Outcome::Matches(filtered)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{search, Outcome};
    use crate::loader::normalize;
    use crate::models::{Book, Metadata};

    fn catalog() -> Vec<Book> {
        normalize(json!([
            { "title": "The Hobbit", "author": "J.R.R. Tolkien", "genre": "Fantasy" },
            { "title": "Dune", "author": "Frank Herbert", "genre": "Science Fiction" },
            { "title": "Tolkien: A Biography", "genre": "Biography" },
            { "title": "The Silmarillion", "author": "J.R.R. Tolkien" },
            { "genre": "fantasy" }
        ]))
    }

    fn titles(outcome: Outcome) -> Vec<String> {
        match outcome {
            Outcome::Matches(books) => books
                .iter()
                .map(|book| book.display(Metadata::Title).to_string())
                .collect(),
            Outcome::Cleared => panic!("expected matches"),
        }
    }

    #[test]
    fn blank_term_clears() {
        let books = catalog();

        assert_eq!(Outcome::Cleared, search("", &books));
        assert_eq!(Outcome::Cleared, search("   \t ", &books));
    }

    #[test]
    fn case_insensitive_author() {
        let books = catalog();

        let expected = vec!["The Hobbit", "Tolkien: A Biography", "The Silmarillion"];

        assert_eq!(expected, titles(search("  TOLKIEN ", &books)));
    }

    #[test]
    fn missing_author_never_matches_on_author() {
        let books = normalize(json!([{ "title": "Untitled", "genre": "Poetry" }]));

        assert_eq!(Outcome::Matches(vec![]), search("n/a", &books));
        assert_eq!(Outcome::Matches(vec![]), search("herbert", &books));
    }

    #[test]
    fn stable_order_across_fields() {
        let books = catalog();

        assert_eq!(vec!["The Hobbit", "N/A"], titles(search("fantasy", &books)));
        assert_eq!(vec!["Dune"], titles(search("fiction", &books)));
    }

    #[test]
    fn empty_working_set() {
        assert_eq!(Outcome::Matches(vec![]), search("anything", &[]));
    }
}
