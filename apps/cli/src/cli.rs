use api::{ResultCount, SearchOptions, SnippetLength};
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search transcripts and print the matching episodes
    Search {
        #[command(flatten)]
        args: SearchArgs,

        /// Print the decoded entries as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the request URL without sending it
    Url {
        #[command(flatten)]
        args: SearchArgs,
    },
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    pub query: String,

    /// Snippet length in seconds: 30, 120 or 300
    #[arg(short, long, value_parser = parse_snippet_length)]
    pub length: Option<SnippetLength>,

    /// Number of episodes, snapped to a multiple of 10 within 10..=50
    #[arg(short, long)]
    pub results: Option<u32>,

    /// Let the service optimize the query with a language model
    #[arg(long)]
    pub openai: bool,

    /// Show relevance scores next to each clip
    #[arg(long)]
    pub scores: bool,
}

fn parse_snippet_length(value: &str) -> Result<SnippetLength, String> {
    let secs: u32 = value.parse().map_err(|e| format!("{e}"))?;
    SnippetLength::try_from(secs).map_err(|e| e.to_string())
}

impl SearchArgs {
    /// Command line flags layered over the configured defaults.
    pub fn options(&self, defaults: &SearchOptions) -> SearchOptions {
        SearchOptions {
            snippet_length: self.length.unwrap_or(defaults.snippet_length),
            result_count: self
                .results
                .map(ResultCount::new)
                .unwrap_or(defaults.result_count),
            show_scores: self.scores || defaults.show_scores,
            use_query_optimization: self.openai || defaults.use_query_optimization,
        }
    }
}
