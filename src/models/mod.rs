mod book;
mod metadata;

pub use book::Book;
pub use metadata::Metadata;
