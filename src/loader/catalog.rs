use anyhow;
use async_trait::async_trait;
use bytes::Bytes;
use log::{debug, trace, warn};
use reqwest;
use serde_json::Value;

use super::Loader;
use crate::models::Book;

/// # Catalog Loader
/// One `GET` to a static JSON file. No retry.
pub struct Catalog {
    url: String,
    client: reqwest::Client,
}

impl Catalog {
    pub fn new(url: impl Into<String>) -> anyhow::Result<Catalog> {
        let client = reqwest::Client::builder().build()?;

        Ok(Catalog::with_client(url, client))
    }

    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Catalog {
        Catalog {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl Loader for Catalog {
    type RequestData = Bytes;
    type ParseData = Vec<Book>;

    fn url(&self) -> anyhow::Result<String> {
        Ok(self.url.clone())
    }

    async fn request(&self) -> anyhow::Result<Self::RequestData> {
        trace!("Catalog::request()");
        let response = self.client.get(self.url()?.as_str()).send().await?;

        let status = response.status();
        debug!("status = {}", status);

        if !status.is_success() {
            return Err(anyhow::Error::msg(format!(
                "Network response was not ok ({})",
                status.as_u16()
            )));
        }

        Ok(response.bytes().await?)
    }

    fn parse(&self, request_data: Self::RequestData) -> anyhow::Result<Self::ParseData> {
        trace!("Catalog::parse()");
        let value = serde_json::from_slice::<Value>(&request_data)?;

        Ok(normalize(value))
    }
}

/// Arrays keep their order; any other value becomes a one-element working set.
pub fn normalize(value: Value) -> Vec<Book> {
    match value {
        Value::Array(values) => values.into_iter().map(Book::from_value).collect(),
        other => {
            warn!("Fetched data is not an array, using it as a single item array");
            vec![Book::from_value(other)]
        }
    }
}
