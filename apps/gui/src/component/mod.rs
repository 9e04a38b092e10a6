mod search_bar;
mod search_result_viewer;
mod settings_window;
mod status_bar;

pub use search_bar::{SearchBar, SearchBarEvent, SearchBarProps};
pub use search_result_viewer::{SearchResultViewer, SearchResultViewerEvent, SearchResultViewerProps};
pub use settings_window::{SettingsWindow, SettingsWindowEvent, SettingsWindowProps};
pub use status_bar::{StatusBar, StatusBarProps};

/// A component that owns a whole panel of the viewport.
pub trait ContextComponent {
    type Props<'a>;
    type Output;

    fn render(&mut self, ctx: &egui::Context, props: Self::Props<'_>) -> Self::Output;
}

/// A component drawn inside a parent `Ui`, keeping its own state between frames.
pub trait StatefulComponent {
    type Props<'a>;
    type Output;

    fn render(&mut self, ui: &mut egui::Ui, props: Self::Props<'_>) -> Self::Output;
}

pub mod prelude {
    pub use super::{ContextComponent, StatefulComponent};
}
