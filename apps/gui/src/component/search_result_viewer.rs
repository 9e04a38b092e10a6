use super::StatefulComponent;
use crate::constants;
use api::EpisodeResult;
use egui_i18n::tr;
use std::sync::Arc;
use view::{ClipView, EpisodeView, PlayerConfig, ResultsView};

/// Inputs the rendered tree depends on
#[derive(Clone, Copy, PartialEq)]
struct ViewKey {
    in_flight: bool,
    has_searched: bool,
    show_scores: bool,
}

/// Last rendered tree. Holding the `Arc` keeps its address from being reused.
struct Memo {
    entries: Arc<[EpisodeResult]>,
    key: ViewKey,
    view: ResultsView,
}

#[derive(Default)]
pub struct SearchResultViewer {
    memo: Option<Memo>,
}

pub struct SearchResultViewerProps<'a> {
    pub entries: &'a Arc<[EpisodeResult]>,
    pub in_flight: bool,
    pub has_searched: bool,
    pub show_scores: bool,
    pub player: &'a PlayerConfig,
}

pub struct SearchResultViewerOutput {
    pub events: Vec<SearchResultViewerEvent>,
}

pub enum SearchResultViewerEvent {
    /// Open a player deep link
    OpenLink(String),
}

impl SearchResultViewer {
    fn view(&mut self, props: &SearchResultViewerProps<'_>) -> &ResultsView {
        let key = ViewKey {
            in_flight: props.in_flight,
            has_searched: props.has_searched,
            show_scores: props.show_scores,
        };

        let outdated = match &self.memo {
            Some(memo) => !Arc::ptr_eq(&memo.entries, props.entries) || memo.key != key,
            None => true,
        };

        if outdated {
            self.memo = None;
        }

        let memo = self.memo.get_or_insert_with(|| Memo {
            entries: Arc::clone(props.entries),
            view: ResultsView::build(
                key.in_flight,
                key.has_searched,
                props.entries,
                key.show_scores,
                props.player,
            ),
            key,
        });
        &memo.view
    }
}

fn render_placeholder(ui: &mut egui::Ui, text: String) {
    ui.centered_and_justified(|ui| {
        ui.weak(text);
    });
}

fn render_skeleton(ui: &mut egui::Ui, rows: usize) {
    let color = ui.visuals().faint_bg_color;
    for _ in 0..rows {
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), constants::SKELETON_ROW_HEIGHT),
            egui::Sense::hover(),
        );
        ui.painter().rect_filled(rect, 4.0, color);
    }
}

fn render_clip(
    ui: &mut egui::Ui,
    clip: &ClipView,
    events: &mut Vec<SearchResultViewerEvent>,
) {
    ui.horizontal_top(|ui| {
        if ui.link(&clip.timestamp).on_hover_text(&clip.url).clicked() {
            events.push(SearchResultViewerEvent::OpenLink(clip.url.clone()));
        }
        if let Some(score) = &clip.score_label {
            ui.monospace(score);
        }
        ui.add(egui::Label::new(&clip.transcript).wrap());
    });
}

fn render_episode(
    ui: &mut egui::Ui,
    episode: &EpisodeView,
    events: &mut Vec<SearchResultViewerEvent>,
) {
    egui::CollapsingHeader::new(egui::RichText::new(&episode.episode_name).strong())
        .id_salt(&episode.key)
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal_top(|ui| {
                ui.add(
                    egui::Image::new(&episode.picture_uri)
                        .fit_to_exact_size(egui::Vec2::splat(constants::THUMBNAIL_SIZE))
                        .corner_radius(egui::CornerRadius::same(4)),
                );
                ui.vertical(|ui| {
                    ui.label(&episode.show_name);
                    if let Some(summary) = &episode.summary {
                        ui.weak(summary);
                    }
                    if ui
                        .button(tr!("results-play"))
                        .on_hover_text(&episode.play_url)
                        .clicked()
                    {
                        events.push(SearchResultViewerEvent::OpenLink(episode.play_url.clone()));
                    }
                });
            });

            if !episode.description.is_empty() {
                ui.add(egui::Label::new(egui::RichText::new(&episode.description).small()).wrap());
            }

            ui.add_space(4.0);
            ui.strong(tr!("results-most-relevant"));
            render_clip(ui, &episode.most_relevant, events);

            if !episode.others.is_empty() {
                ui.add_space(4.0);
                ui.strong(tr!("results-other-relevant"));
                for clip in &episode.others {
                    render_clip(ui, clip, events);
                }
            }
        });
}

impl StatefulComponent for SearchResultViewer {
    type Props<'a> = SearchResultViewerProps<'a>;
    type Output = SearchResultViewerOutput;

    #[profiling::function]
    fn render(&mut self, ui: &mut egui::Ui, props: Self::Props<'_>) -> Self::Output {
        let mut events = Vec::new();

        match self.view(&props) {
            ResultsView::Idle => render_placeholder(ui, tr!("results-idle")),
            ResultsView::Empty => render_placeholder(ui, tr!("results-empty")),
            ResultsView::Loading { placeholder_rows } => {
                let rows = *placeholder_rows;
                egui::ScrollArea::vertical()
                    .auto_shrink(false)
                    .show(ui, |ui| render_skeleton(ui, rows));
            }
            ResultsView::Episodes(episodes) => {
                egui::ScrollArea::vertical()
                    .auto_shrink(false)
                    .show(ui, |ui| {
                        for episode in episodes {
                            render_episode(ui, episode, &mut events);
                            ui.separator();
                        }
                    });
            }
        }

        SearchResultViewerOutput { events }
    }
}
