use super::{Action, Effect, SearchState, UserCommand, take_user_commands};
use crate::backend::{BackendThread, Request, Response};
use crate::component::{self, SearchBarEvent, SearchResultViewerEvent, SettingsWindowEvent, prelude::*};
use crate::config::Config;
use crate::constants;
use crate::ui;
use std::sync::mpsc;
use tracing::{error, info, warn};

pub struct App {
    config: Config,

    s: State,
    search: SearchState,

    search_bar: component::SearchBar,
    status_bar: component::StatusBar,
    settings_window: component::SettingsWindow,
    result_viewer: component::SearchResultViewer,

    tx_request: mpsc::Sender<Request>,
    rx_response: mpsc::Receiver<Response>,
}

#[derive(Default)]
pub struct State {
    /// Whether this application finishes initialization
    initialized: bool,
    settings_open: bool,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let (tx_request, rx_request) = mpsc::channel();
        let (tx_response, rx_response) = mpsc::channel();

        BackendThread::new(
            config.search.clone(),
            rx_request,
            tx_response,
            cc.egui_ctx.clone(),
        )
        .spawn();

        ui::setup_ui(&cc.egui_ctx, &config.ui);
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Self::setup_i18n();

        #[cfg(debug_assertions)]
        Self::setup_debug_options(&cc.egui_ctx);

        let search = SearchState::new(config.defaults.clone(), config.app.submit_empty_query);

        Self {
            config,
            s: State::default(),
            search,
            search_bar: Default::default(),
            status_bar: Default::default(),
            settings_window: Default::default(),
            result_viewer: Default::default(),
            tx_request,
            rx_response,
        }
    }

    fn setup_i18n() {
        let translations = [
            ("en", include_str!("../../assets/trans/en.ftl")),
            ("zh", include_str!("../../assets/trans/zh-hans.ftl")),
        ];
        for (lang, text) in translations {
            if let Err(e) = egui_i18n::load_translations_from_text(lang, text) {
                error!("Failed to load {lang} translations: {e:?}");
            }
        }

        egui_i18n::set_language("en");
        egui_i18n::set_fallback("en");
    }

    #[cfg(debug_assertions)]
    fn setup_debug_options(ctx: &egui::Context) {
        ctx.style_mut(|style| style.debug.debug_on_hover_with_all_modifiers = true);
    }

    /// Routes every state change through the reducer and performs its effect.
    fn dispatch(&mut self, action: Action) {
        let (search, effect) = std::mem::take(&mut self.search).reduce(action);
        self.search = search;

        let Some(Effect::Dispatch { seq, request }) = effect else {
            return;
        };
        if let Err(e) = self.tx_request.send(Request::Search { seq, request }) {
            error!("Backend is gone, cannot send search {seq}: {e}");
            let (search, _) = std::mem::take(&mut self.search).reduce(Action::SearchFinished {
                seq,
                outcome: Err(e.to_string()),
            });
            self.search = search;
        }
    }

    pub fn handle_backend_response(&mut self) {
        while let Ok(response) = self.rx_response.try_recv() {
            match response {
                Response::Search { seq, outcome } => {
                    self.dispatch(Action::SearchFinished { seq, outcome });
                }
                Response::SpawnFailed(e) => {
                    error!("Backend failed to start: {e}");
                    let seq = self.search.latest_seq;
                    self.dispatch(Action::SearchFinished {
                        seq,
                        outcome: Err(e),
                    });
                }
            }
        }
    }

    pub fn handle_user_commands(&mut self, ctx: &egui::Context) {
        for cmd in take_user_commands(ctx) {
            match cmd {
                UserCommand::QuitApplication => {
                    info!("Quit requested");
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                UserCommand::ToggleFullScreen => {
                    let fullscreen = ctx.input(|i| i.viewport().fullscreen.unwrap_or(false));
                    ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!fullscreen));
                }
                UserCommand::ToggleSettings => {
                    self.s.settings_open = !self.s.settings_open;
                }
                UserCommand::CloseSettings => {
                    self.s.settings_open = false;
                }
            }
        }
    }

    fn open_link(url: &str) {
        info!("Opening {url}");
        if let Err(e) = open::that(url) {
            warn!("Failed to open {url}: {e}");
        }
    }

    pub fn render_search_bar(&mut self, ctx: &egui::Context) {
        let props = component::SearchBarProps {
            query: &self.search.query,
            snippet_length: self.search.options.snippet_length,
            settings_open: self.s.settings_open,
        };
        let output = self.search_bar.render(ctx, props);

        for event in output.events {
            match event {
                SearchBarEvent::QueryChanged(query) => self.dispatch(Action::EditQuery(query)),
                SearchBarEvent::Submit => self.dispatch(Action::Submit),
                SearchBarEvent::ChangeSnippetLength(length) => {
                    self.dispatch(Action::SetSnippetLength(length))
                }
                SearchBarEvent::ToggleSettings => {
                    self.s.settings_open = !self.s.settings_open;
                }
            }
        }
    }

    pub fn render_settings_window(&mut self, ctx: &egui::Context) {
        let props = component::SettingsWindowProps {
            open: self.s.settings_open,
            options: &self.search.options,
        };
        let output = self.settings_window.render(ctx, props);

        for event in output.events {
            match event {
                SettingsWindowEvent::ChangeResultCount(count) => {
                    self.dispatch(Action::SetResultCount(count))
                }
                SettingsWindowEvent::ChangeShowScores(show) => {
                    self.dispatch(Action::SetShowScores(show))
                }
                SettingsWindowEvent::ChangeQueryOptimization(enabled) => {
                    self.dispatch(Action::SetQueryOptimization(enabled))
                }
                SettingsWindowEvent::Close => self.s.settings_open = false,
            }
        }
    }

    pub fn render_status_bar(&mut self, ctx: &egui::Context) {
        let props = component::StatusBarProps {
            status: &self.search.status,
            has_searched: self.search.has_searched,
            episode_count: self.search.entries.len(),
            endpoint: &self.config.search.base_url,
        };
        self.status_bar.render(ctx, props);
    }

    pub fn render_result_viewer(&mut self, ctx: &egui::Context) {
        let search = &self.search;
        let result_viewer = &mut self.result_viewer;
        let player = &self.config.player;

        let output = egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .inner_margin(egui::vec2(10.0, 6.0))
                    .fill(ctx.style().visuals.panel_fill),
            )
            .show(ctx, |ui| {
                let props = component::SearchResultViewerProps {
                    entries: &search.entries,
                    in_flight: search.in_flight(),
                    has_searched: search.has_searched,
                    show_scores: search.displayed_show_scores,
                    player,
                };
                result_viewer.render(ui, props)
            })
            .inner;

        for event in output.events {
            match event {
                SearchResultViewerEvent::OpenLink(url) => Self::open_link(&url),
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::finish_frame!();

        if !self.s.initialized {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(constants::APP_NAME.to_string()));
            self.search_bar.request_focus();
            self.s.initialized = true;
        }

        self.handle_user_commands(ctx);

        self.handle_backend_response();

        self.render_search_bar(ctx);

        self.render_status_bar(ctx);

        self.render_settings_window(ctx);

        self.render_result_viewer(ctx);
    }
}
