use crate::app::SearchStatus;
use crate::constants;
use egui::{Color32, Painter, Pos2, Response, Sense, Stroke, TextStyle, Ui, Widget, pos2, vec2};
use egui_i18n::tr;
use std::f32::consts::{FRAC_PI_2, TAU};

const SPINNER_SPEED: f64 = 1.2; // rotations per second
const SPINNER_DOT_COUNT: usize = 8;

const COLOR_ERROR: Color32 = Color32::from_rgb(244, 67, 54);

pub struct SearchStatusWidget<'a> {
    pub status: &'a SearchStatus,
    pub has_searched: bool,
    pub episode_count: usize,
}

enum StatusPrefix {
    None,
    Spinner,
    Error,
}

impl Widget for SearchStatusWidget<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (text, prefix) = self.build_display();

        let font_id = TextStyle::Name(constants::TEXT_STYLE_STATUS_BAR.into()).resolve(ui.style());
        let icon_size = font_id.size * 0.8;
        let gap = ui.spacing().item_spacing.x;
        let text_color = match prefix {
            StatusPrefix::Error => COLOR_ERROR,
            _ => ui.visuals().text_color(),
        };

        let galley = ui.painter().layout_no_wrap(text, font_id, text_color);

        let prefix_width = match prefix {
            StatusPrefix::None => 0.0,
            _ => icon_size + gap,
        };
        let width = prefix_width + galley.size().x;
        let height = galley.size().y.max(icon_size);

        let (rect, response) = ui.allocate_exact_size(vec2(width, height), Sense::hover());

        if ui.is_rect_visible(rect) {
            let mut cursor_x = rect.min.x;
            let center_y = rect.center().y;
            let prefix_center = pos2(cursor_x + icon_size / 2.0, center_y);

            match prefix {
                StatusPrefix::Spinner => {
                    draw_spinner(ui, prefix_center, icon_size / 2.0, text_color);
                    cursor_x += icon_size + gap;
                }
                StatusPrefix::Error => {
                    draw_cross(ui.painter(), prefix_center, icon_size);
                    cursor_x += icon_size + gap;
                }
                StatusPrefix::None => {}
            }

            let text_pos = pos2(cursor_x, center_y - galley.size().y / 2.0);
            ui.painter().galley(text_pos, galley, text_color);
        }

        if matches!(prefix, StatusPrefix::Spinner) {
            ui.ctx().request_repaint();
        }

        response
    }
}

impl SearchStatusWidget<'_> {
    fn build_display(&self) -> (String, StatusPrefix) {
        let (text, prefix) = match self.status {
            SearchStatus::Searching { .. } => (tr!("status-searching"), StatusPrefix::Spinner),
            SearchStatus::Failed(message) => (
                tr!("status-failed", { message: message.as_str() }),
                StatusPrefix::Error,
            ),
            SearchStatus::Idle if self.has_searched => (
                tr!("status-episodes", { count: self.episode_count }),
                StatusPrefix::None,
            ),
            SearchStatus::Idle => (tr!("status-idle"), StatusPrefix::None),
        };
        (strip_bidi_isolation(text), prefix)
    }
}

/// Removes the FSI/PDI marks Fluent puts around placeables. The default
/// fonts have no glyphs for them.
fn strip_bidi_isolation(text: String) -> String {
    if text.contains(['\u{2068}', '\u{2069}']) {
        text.replace(['\u{2068}', '\u{2069}'], "")
    } else {
        text
    }
}

fn draw_spinner(ui: &Ui, center: Pos2, radius: f32, color: Color32) {
    let time = ui.input(|i| i.time);
    let rotation = (time * SPINNER_SPEED * TAU as f64) as f32;

    let dot_radius = radius * 0.2;
    let orbit_radius = radius * 0.65;

    for i in 0..SPINNER_DOT_COUNT {
        // Start at the top, go clockwise
        let base_angle = (i as f32 / SPINNER_DOT_COUNT as f32) * TAU - FRAC_PI_2;
        let angle = base_angle - rotation;

        let progress = i as f32 / SPINNER_DOT_COUNT as f32;
        let alpha = 1.0 - progress * 0.8;

        let dot_center = center + vec2(angle.cos(), angle.sin()) * orbit_radius;
        ui.painter()
            .circle_filled(dot_center, dot_radius, color.gamma_multiply(alpha));
    }
}

fn draw_cross(painter: &Painter, center: Pos2, size: f32) {
    let stroke = Stroke::new(1.8, COLOR_ERROR);
    let r = size * 0.25;
    painter.line_segment([center + vec2(-r, -r), center + vec2(r, r)], stroke);
    painter.line_segment([center + vec2(r, -r), center + vec2(-r, r)], stroke);
}
