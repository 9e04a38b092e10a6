// hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod backend;
mod component;
mod config;
mod constants;
mod error;
mod ui;

use eframe::egui;
use mimalloc::MiMalloc;
use tracing::info;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = crate::config::Config::load()?;
    info!("Configuration loaded from {}", cfg.config_path.display());

    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = start_puffin_server()?;

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([cfg.app.width, cfg.app.height])
        .with_min_inner_size([480.0, 320.0])
         // Wayland user can use app-id to customize window's behavior
        .with_app_id(constants::APP_ID);

    let options = eframe::NativeOptions {
        viewport,
        centered: true,
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };

    eframe::run_native(
        constants::APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc, cfg)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(feature = "profile-with-puffin")]
fn start_puffin_server() -> anyhow::Result<puffin_http::Server> {
    let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    let server = puffin_http::Server::new(&addr)?;
    info!("Puffin profiler listening on {addr}");
    puffin::set_scopes_on(true);
    Ok(server)
}
