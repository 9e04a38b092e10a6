use super::Command;
use crate::error::{Result, WrapErr};
use crate::printer;
use api::{ClientConfig, SearchClient, SearchRequest};
use std::io::Write;
use tracing::info;
use view::{PlayerConfig, ResultsView};

pub struct SearchCommand {
    client_config: ClientConfig,
    player: PlayerConfig,
    request: SearchRequest,
    show_scores: bool,
    json: bool,
}

impl SearchCommand {
    pub fn new(
        client_config: ClientConfig,
        player: PlayerConfig,
        request: SearchRequest,
        show_scores: bool,
        json: bool,
    ) -> Self {
        Self {
            client_config,
            player,
            request,
            show_scores,
            json,
        }
    }
}

#[async_trait::async_trait]
impl Command for SearchCommand {
    async fn execute(&self) -> Result<()> {
        let client = SearchClient::new(&self.client_config)?;
        let entries = client
            .search(&self.request)
            .await
            .wrap_err_with(|| format!("Search against {} failed", client.base_url()))?;
        info!("{} episodes returned", entries.len());

        let mut stdout = std::io::stdout().lock();
        if self.json {
            serde_json::to_writer_pretty(&mut stdout, &entries)?;
            writeln!(stdout)?;
        } else {
            let results = ResultsView::build(false, true, &entries, self.show_scores, &self.player);
            printer::write_results(&mut stdout, &results)?;
        }
        stdout.flush()?;

        Ok(())
    }
}
