//! Network side of the client.
//!
//! The UI thread never awaits anything: it sends a [`Request`] over a channel
//! and picks up the matching [`Response`] on a later frame.

use api::{ClientConfig, EpisodeResult, SearchClient, SearchRequest};
use std::sync::mpsc;
use std::thread;
use tracing::{error, info};

/// Monotonic id of a dispatched search
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::From)]
pub struct RequestSeq(pub u64);

impl RequestSeq {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Failures are already rendered to text, the UI only displays them
pub type SearchOutcome = Result<Vec<EpisodeResult>, String>;

#[derive(Debug)]
pub enum Request {
    Search {
        seq: RequestSeq,
        request: SearchRequest,
    },
}

#[derive(Debug)]
pub enum Response {
    Search {
        seq: RequestSeq,
        outcome: SearchOutcome,
    },
    /// The backend thread could not start, no request will ever be answered
    SpawnFailed(String),
}

pub struct BackendThread {
    client_config: ClientConfig,
    rx_request: mpsc::Receiver<Request>,
    tx_response: mpsc::Sender<Response>,
    egui_ctx: egui::Context,
}

impl BackendThread {
    pub fn new(
        client_config: ClientConfig,
        rx_request: mpsc::Receiver<Request>,
        tx_response: mpsc::Sender<Response>,
        egui_ctx: egui::Context,
    ) -> Self {
        Self {
            client_config,
            rx_request,
            tx_response,
            egui_ctx,
        }
    }

    /// Runs until every request sender is dropped.
    pub fn spawn(self) -> thread::JoinHandle<()> {
        let Self {
            client_config,
            rx_request,
            tx_response,
            egui_ctx,
        } = self;

        thread::spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to create Tokio runtime: {}", e);
                    let _ = tx_response.send(Response::SpawnFailed(e.to_string()));
                    egui_ctx.request_repaint();
                    return;
                }
            };

            rt.block_on(async move {
                // A bad base url is reported on every search instead of killing
                // the thread, so the user sees it in the status bar
                let client = SearchClient::new(&client_config).map_err(|e| e.to_string());
                match &client {
                    Ok(client) => info!("Backend thread ready, endpoint {}", client.base_url()),
                    Err(e) => error!("Search client unavailable: {e}"),
                }

                while let Ok(req) = rx_request.recv() {
                    let tx_response = tx_response.clone();
                    let egui_ctx = egui_ctx.clone();
                    let client = client.clone();

                    tokio::spawn(async move {
                        let response = handle_request(client, req).await;
                        let _ = tx_response.send(response);
                        egui_ctx.request_repaint();
                    });
                }
            });
        })
    }
}

async fn handle_request(client: Result<SearchClient, String>, request: Request) -> Response {
    match request {
        Request::Search { seq, request } => {
            let outcome = match client {
                Ok(client) => client.search(&request).await.map_err(|e| {
                    error!("Search {seq} failed: {e}");
                    e.to_string()
                }),
                Err(e) => Err(e),
            };
            Response::Search { seq, outcome }
        }
    }
}
