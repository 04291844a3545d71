use anyhow;
use async_trait::async_trait;

mod catalog;
#[cfg(test)]
pub(crate) mod test_server;

pub use catalog::{normalize, Catalog};

#[async_trait]
pub trait Loader: Send + Sync {
    type RequestData: Send;
    type ParseData: Send;

    fn url(&self) -> anyhow::Result<String>;

    async fn request(&self) -> anyhow::Result<Self::RequestData>;

    fn parse(&self, request_data: Self::RequestData) -> anyhow::Result<Self::ParseData>;

    async fn load(&self) -> anyhow::Result<Self::ParseData> {
        let request_data = self.request().await?;

        self.parse(request_data)
    }
}
