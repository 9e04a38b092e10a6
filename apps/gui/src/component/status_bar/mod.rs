mod status_widget;

use super::ContextComponent;
use crate::app::SearchStatus;
use crate::constants;
use egui::TextStyle;
use status_widget::SearchStatusWidget;

#[derive(Default)]
pub struct StatusBar;

pub struct StatusBarProps<'a> {
    pub status: &'a SearchStatus,
    pub has_searched: bool,
    pub episode_count: usize,
    /// Base url of the search service
    pub endpoint: &'a str,
}

/// Output from status bar component
pub struct StatusBarOutput {}

impl ContextComponent for StatusBar {
    type Props<'a> = StatusBarProps<'a>;
    type Output = StatusBarOutput;

    fn render(&mut self, ctx: &egui::Context, props: Self::Props<'_>) -> Self::Output {
        egui::TopBottomPanel::bottom(constants::ID_PANEL_STATUS_BAR)
            .show_separator_line(false)
            .frame(
                egui::Frame::NONE
                    .inner_margin(egui::vec2(4.0, 2.0))
                    .fill(ctx.style().visuals.extreme_bg_color),
            )
            .show(ctx, |ui| {
                let style = ui.style_mut();
                style.override_text_style =
                    Some(TextStyle::Name(constants::TEXT_STYLE_STATUS_BAR.into()));

                ui.horizontal(|ui| {
                    ui.add(SearchStatusWidget {
                        status: props.status,
                        has_searched: props.has_searched,
                        episode_count: props.episode_count,
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.weak(props.endpoint);
                    });
                });
            });

        StatusBarOutput {}
    }
}
