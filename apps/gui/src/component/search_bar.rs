use super::ContextComponent;
use crate::constants;
use api::SnippetLength;
use egui_i18n::tr;
use strum::IntoEnumIterator;

#[derive(Default)]
pub struct SearchBar {
    /// Local copy of the query, resynced from props every frame
    buffer: String,
    request_focus: bool,
}

pub struct SearchBarProps<'a> {
    pub query: &'a str,
    pub snippet_length: SnippetLength,
    pub settings_open: bool,
}

pub struct SearchBarOutput {
    pub events: Vec<SearchBarEvent>,
}

pub enum SearchBarEvent {
    QueryChanged(String),
    Submit,
    ChangeSnippetLength(SnippetLength),
    ToggleSettings,
}

impl SearchBar {
    pub fn request_focus(&mut self) {
        self.request_focus = true;
    }
}

fn setup_text_edit_style(style: &mut egui::Style) {
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::NONE;
    style.visuals.widgets.active.bg_stroke = egui::Stroke::NONE;
    style.visuals.widgets.inactive.bg_stroke = egui::Stroke::NONE;
    style.visuals.text_cursor.stroke = egui::Stroke::new(3.0, style.visuals.text_color());
}

fn render_snippet_length_selector(
    ui: &mut egui::Ui,
    current: SnippetLength,
) -> Option<SearchBarEvent> {
    let mut selected = current;

    egui::ComboBox::from_id_salt(constants::ID_SEARCH_BAR_SNIPPET_LENGTH)
        .selected_text(selected.to_string())
        .show_ui(ui, |ui| {
            for length in SnippetLength::iter() {
                ui.selectable_value(&mut selected, length, length.to_string());
            }
        })
        .response
        .on_hover_text(tr!("snippet-length"));

    (selected != current).then_some(SearchBarEvent::ChangeSnippetLength(selected))
}

impl ContextComponent for SearchBar {
    type Props<'a> = SearchBarProps<'a>;
    type Output = SearchBarOutput;

    fn render(&mut self, ctx: &egui::Context, props: Self::Props<'_>) -> Self::Output {
        let mut events = vec![];

        if self.buffer != props.query {
            self.buffer = props.query.to_owned();
        }

        egui::TopBottomPanel::top(constants::ID_PANEL_SEARCH_BAR)
            .frame(
                egui::Frame::NONE
                    .inner_margin(egui::vec2(10.0, 6.0))
                    .fill(ctx.style().visuals.panel_fill),
            )
            .show(ctx, |ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let settings_button = egui::Button::new("⚙").selected(props.settings_open);
                    if ui
                        .add(settings_button)
                        .on_hover_text(tr!("settings-button"))
                        .clicked()
                    {
                        events.push(SearchBarEvent::ToggleSettings);
                    }

                    if let Some(event) = render_snippet_length_selector(ui, props.snippet_length) {
                        events.push(event);
                    }

                    ui.scope(|ui| {
                        setup_text_edit_style(ui.style_mut());

                        let output = egui::TextEdit::singleline(&mut self.buffer)
                            .desired_width(f32::INFINITY)
                            .font(
                                egui::TextStyle::Name(constants::TEXT_STYLE_SEARCH_BAR.into())
                                    .resolve(ui.style()),
                            )
                            .background_color(egui::Color32::TRANSPARENT)
                            .hint_text(tr!("search-bar-hint"))
                            .show(ui);

                        if output.response.changed() {
                            events.push(SearchBarEvent::QueryChanged(self.buffer.clone()));
                        }

                        // Single-line edits give up focus on Enter
                        if output.response.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        {
                            events.push(SearchBarEvent::Submit);
                            output.response.request_focus();
                        }

                        if self.request_focus {
                            output.response.request_focus();
                            self.request_focus = false;
                        }
                    });
                });
            });

        SearchBarOutput { events }
    }
}
