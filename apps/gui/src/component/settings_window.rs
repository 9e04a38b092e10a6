use super::ContextComponent;
use crate::constants;
use api::{ResultCount, SearchOptions};
use egui_i18n::tr;

#[derive(Default)]
pub struct SettingsWindow;

pub struct SettingsWindowProps<'a> {
    pub open: bool,
    pub options: &'a SearchOptions,
}

pub struct SettingsWindowOutput {
    pub events: Vec<SettingsWindowEvent>,
}

pub enum SettingsWindowEvent {
    ChangeResultCount(ResultCount),
    ChangeShowScores(bool),
    ChangeQueryOptimization(bool),
    Close,
}

impl ContextComponent for SettingsWindow {
    type Props<'a> = SettingsWindowProps<'a>;
    type Output = SettingsWindowOutput;

    fn render(&mut self, ctx: &egui::Context, props: Self::Props<'_>) -> Self::Output {
        let mut events = Vec::new();
        if !props.open {
            return SettingsWindowOutput { events };
        }

        let options = props.options;
        let mut open = true;

        egui::Window::new(tr!("settings-title"))
            .id(egui::Id::new(constants::ID_SETTINGS_WINDOW))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                let mut count = options.result_count.get();
                let slider = egui::Slider::new(&mut count, ResultCount::MIN..=ResultCount::MAX)
                    .step_by(ResultCount::STEP as f64)
                    .text(tr!("settings-result-count"));
                if ui.add(slider).changed() {
                    let count = ResultCount::new(count);
                    if count != options.result_count {
                        events.push(SettingsWindowEvent::ChangeResultCount(count));
                    }
                }

                let mut show_scores = options.show_scores;
                if ui
                    .checkbox(&mut show_scores, tr!("settings-show-scores"))
                    .changed()
                {
                    events.push(SettingsWindowEvent::ChangeShowScores(show_scores));
                }

                let mut optimize = options.use_query_optimization;
                if ui
                    .checkbox(&mut optimize, tr!("settings-query-optimization"))
                    .changed()
                {
                    events.push(SettingsWindowEvent::ChangeQueryOptimization(optimize));
                }

                ui.separator();
                ui.weak(tr!("settings-apply-note"));
            });

        if !open {
            events.push(SettingsWindowEvent::Close);
        }

        SettingsWindowOutput { events }
    }
}
