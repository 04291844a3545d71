extern crate libara_search;

use std::fs;
use std::path::PathBuf;

use anyhow;
use clap::Parser;
use env_logger::Env;
use log::debug;
use tokio::io::BufReader;
use tokio::sync::watch;

use crate::libara_search::config::Config;
use crate::libara_search::input::Terms;
use crate::libara_search::loader::Catalog;
use crate::libara_search::view;
use crate::libara_search::widget::{Screen, Widget};

/// Prints each settled screen and mirrors it to `output` as a full page.
async fn present(mut rx: watch::Receiver<Screen>, output: Option<PathBuf>) -> anyhow::Result<()> {
    loop {
        let screen = rx.borrow_and_update().clone();

        if !screen.loading {
            println!("{}", view::fragment(&screen)?);

            if let Some(ref path) = output {
                debug!("writing {}", path.display());
                fs::write(path, view::page(&screen)?)?;
            }
        }

        if rx.changed().await.is_err() {
            break;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let env = if config.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("info")
    };
    env_logger::Builder::from_env(env).init();

    let catalog = Catalog::new(config.url.as_str())?;
    let mut widget = Widget::new(config.delay());

    widget.load(&catalog).await;

    let printer = tokio::spawn(present(widget.subscribe(), config.output.clone()));

    let mut pending = vec![];

    match config.term {
        Some(ref term) => pending.push(widget.search(term)),
        None => {
            let mut terms = Terms::new(BufReader::new(tokio::io::stdin()));

            while let Some(term) = terms.next_term().await? {
                pending.push(widget.search(&term));
            }
        }
    }

    for handle in pending {
        handle.await?;
    }

    drop(widget);

    printer.await?
}
