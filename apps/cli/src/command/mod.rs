pub mod search;
pub mod url;

use crate::error::Result;

pub use search::SearchCommand;
pub use url::UrlCommand;

#[async_trait::async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}
