use std::sync::Arc;
use std::time::Duration;

use log::error;
use serde::Serialize;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::Instant;

use crate::loader::Loader;
use crate::models::Book;
use crate::search::{self, Outcome};
use crate::stage::{self, Stage};
use crate::view;

/// Visible state of the widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screen {
    pub initial_message: bool,
    pub loading: bool,
    pub results: String,
}

impl Default for Screen {
    fn default() -> Self {
        Screen {
            initial_message: true,
            loading: false,
            results: String::new(),
        }
    }
}

impl Screen {
    fn show_results(&mut self, results: String) {
        self.initial_message = false;
        self.loading = false;
        self.results = results;
    }

    fn show_loading(&mut self) {
        self.initial_message = false;
        self.loading = true;
        self.results.clear();
    }

    fn reset(&mut self) {
        self.initial_message = true;
        self.loading = false;
        self.results.clear();
    }
}

/// Falls back to the bare message when a template fails.
fn or_display_error(rendered: anyhow::Result<String>) -> String {
    rendered.unwrap_or_else(|err| {
        stage::update(Stage::Fail(&err));
        String::from(view::DISPLAY_ERROR)
    })
}

/// One scheduled search render.
struct Render {
    term: String,
    deadline: Instant,
    books: Arc<Vec<Book>>,
    done: oneshot::Sender<()>,
}

/// Renders scheduled searches one at a time, in the order they were started.
async fn render_in_order(
    mut renders: mpsc::UnboundedReceiver<Render>,
    screen: Arc<watch::Sender<Screen>>,
) {
    while let Some(render) = renders.recv().await {
        tokio::time::sleep_until(render.deadline).await;

        match search::search(&render.term, &render.books) {
            Outcome::Cleared => {
                stage::update(Stage::Cleared);
                screen.send_modify(Screen::reset);
            }
            Outcome::Matches(filtered) => {
                stage::update(Stage::Rendered(filtered.len()));
                let results = or_display_error(view::table(&filtered));
                screen.send_modify(|screen| screen.show_results(results));
            }
        }

        let _ = render.done.send(());
    }
}

pub struct Widget {
    books: Arc<Vec<Book>>,
    screen: Arc<watch::Sender<Screen>>,
    renders: mpsc::UnboundedSender<Render>,
    delay: Duration,
}

impl Widget {
    /// Must be called inside a tokio runtime; the renderer task is spawned here.
    pub fn new(delay: Duration) -> Widget {
        let (screen, _) = watch::channel(Screen::default());
        let screen = Arc::new(screen);

        let (renders, rx) = mpsc::unbounded_channel();
        tokio::spawn(render_in_order(rx, Arc::clone(&screen)));

        Widget {
            books: Arc::new(vec![]),
            screen,
            renders,
            delay,
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn screen(&self) -> Screen {
        self.screen.borrow().clone()
    }

    /// Receives every screen update until the widget and its pending searches are dropped.
    pub fn subscribe(&self) -> watch::Receiver<Screen> {
        self.screen.subscribe()
    }

    /// Fills the working set once. A failure leaves it empty and shows the error.
    pub async fn load<L>(&mut self, loader: &L)
    where
        L: Loader<ParseData = Vec<Book>>,
    {
        let url = loader.url().unwrap_or_default();
        stage::update(Stage::Loading(&url));

        match loader.load().await {
            Ok(books) => {
                stage::update(Stage::Loaded(books.len()));
                self.books = Arc::new(books);
                self.screen.send_modify(|screen| screen.loading = false);
            }
            Err(err) => {
                stage::update(Stage::Fail(&err));
                let results = or_display_error(view::load_error(&format!("{:#}", err)));
                self.screen
                    .send_modify(|screen| screen.show_results(results));
            }
        }
    }

    /// Shows the loading indicator now and renders after the delay. The returned
    /// receiver resolves once this search has rendered.
    /// Searches are never cancelled and render in the order they were started,
    /// so the latest search owns the screen.
    pub fn search(&self, term: &str) -> oneshot::Receiver<()> {
        let term = search::normalize(term);
        stage::update(Stage::Searching(&term));

        self.screen.send_modify(Screen::show_loading);

        let (done, rendered) = oneshot::channel();
        let render = Render {
            term,
            deadline: Instant::now() + self.delay,
            books: Arc::clone(&self.books),
            done,
        };

        if self.renders.send(render).is_err() {
            error!("renderer stopped, search dropped");
        }

        rendered
    }
}
