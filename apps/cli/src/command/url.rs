use super::Command;
use crate::error::Result;
use api::SearchRequest;

pub struct UrlCommand {
    base_url: String,
    request: SearchRequest,
}

impl UrlCommand {
    pub fn new(base_url: String, request: SearchRequest) -> Self {
        Self { base_url, request }
    }
}

#[async_trait::async_trait]
impl Command for UrlCommand {
    async fn execute(&self) -> Result<()> {
        let url = api::build_search_url(&self.base_url, &self.request)?;
        println!("{url}");
        Ok(())
    }
}
