//! HTML for the results area and the page around it.

use anyhow::{Context, Result};
use log::error;
use minijinja::{context, Environment};
use serde::Serialize;
use serde_json::Value;

use crate::models::{Book, Metadata};
use crate::widget::Screen;

pub const INITIAL_MESSAGE: &str = "Enter a title, author or genre to search the catalog.";
pub const NO_RESULTS: &str = "No books found matching your criteria.";
pub const DISPLAY_ERROR: &str = "Error displaying data.";

const TABLE_TEMPLATE: &str = include_str!("templates/table.html");
const MESSAGE_TEMPLATE: &str = include_str!("templates/message.html");
const LOAD_ERROR_TEMPLATE: &str = include_str!("templates/load_error.html");
const FRAGMENT_TEMPLATE: &str = include_str!("templates/fragment.html");
const PAGE_TEMPLATE: &str = include_str!("templates/page.html");

/// Template names end in `.html` so every `{{ .. }}` is escaped.
fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();

    env.add_template("table.html", TABLE_TEMPLATE)
        .context("Failed to add table template")?;
    env.add_template("message.html", MESSAGE_TEMPLATE)
        .context("Failed to add message template")?;
    env.add_template("load_error.html", LOAD_ERROR_TEMPLATE)
        .context("Failed to add load error template")?;
    env.add_template("fragment.html", FRAGMENT_TEMPLATE)
        .context("Failed to add fragment template")?;
    env.add_template("page.html", PAGE_TEMPLATE)
        .context("Failed to add page template")?;

    Ok(env)
}

fn render<S: Serialize>(name: &str, ctx: S) -> Result<String> {
    let env = environment()?;
    let template = env.get_template(name)?;

    template
        .render(ctx)
        .with_context(|| format!("Failed to render {}", name))
}

#[derive(Serialize)]
struct Row<'a> {
    title: &'a str,
    author: &'a str,
    genre: &'a str,
    status: &'static str,
    status_class: &'static str,
}

impl<'a> From<&'a Book> for Row<'a> {
    fn from(book: &'a Book) -> Self {
        Row {
            title: book.display(Metadata::Title),
            author: book.display(Metadata::Author),
            genre: book.display(Metadata::Genre),
            status: book.status(),
            status_class: if book.is_available() {
                "status-available"
            } else {
                "status-checked-out"
            },
        }
    }
}

/// Results table, or the no-results message for an empty slice.
pub fn table(books: &[Book]) -> Result<String> {
    if books.is_empty() {
        return no_results();
    }

    let columns = Metadata::COLUMNS
        .iter()
        .map(|metadata| metadata.as_str())
        .collect::<Vec<_>>();
    let books = books.iter().map(Row::from).collect::<Vec<_>>();

    render("table.html", context! { columns, books })
}

pub fn no_results() -> Result<String> {
    render(
        "message.html",
        context! { message => NO_RESULTS, danger => false },
    )
}

pub fn load_error(message: &str) -> Result<String> {
    render("load_error.html", context! { message })
}

pub fn display_error() -> Result<String> {
    render(
        "message.html",
        context! { message => DISPLAY_ERROR, danger => true },
    )
}

/// Renders untyped input. Anything but an array is a display error.
pub fn render_value(value: &Value) -> Result<String> {
    match value {
        Value::Array(values) => {
            let books = values
                .iter()
                .cloned()
                .map(Book::from_value)
                .collect::<Vec<_>>();
            table(&books)
        }
        _ => {
            error!("Invalid data passed to render. Expected an array.");
            display_error()
        }
    }
}

/// What a terminal shows for `screen`: the initial message if visible, then the results.
pub fn fragment(screen: &Screen) -> Result<String> {
    render(
        "fragment.html",
        context! { screen, initial_message => INITIAL_MESSAGE },
    )
}

/// Complete document with every element of the widget.
pub fn page(screen: &Screen) -> Result<String> {
    render(
        "page.html",
        context! { screen, initial_message => INITIAL_MESSAGE },
    )
}
