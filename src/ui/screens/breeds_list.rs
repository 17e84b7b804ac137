//! Breeds List Screen
//!
//! Fetches every breed once per mount and shows breeds with their
//! sub-breeds indented below them. Tapping a row opens its image.

use crate::models::{BreedMap, BreedsResponse};
use crate::navigation::Route;
use crate::ui::state::{AppServices, NavIntent};
use eframe::egui;
use log::{error, info};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Breed,
    SubBreed,
}

/// One tappable line of the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedRow {
    pub label: String,
    pub kind: RowKind,
    /// Where tapping the row navigates to
    pub route: Route,
}

/// Flatten the breed map: each breed (upper-cased) followed by its sub-breeds (lower-cased)
pub fn breed_rows(breeds: &BreedMap) -> Vec<BreedRow> {
    let mut rows = Vec::new();
    for (breed, sub_breeds) in breeds.iter() {
        rows.push(BreedRow {
            label: breed.to_uppercase(),
            kind: RowKind::Breed,
            route: Route::breed_image(breed, ""),
        });
        for sub_breed in sub_breeds {
            rows.push(BreedRow {
                label: sub_breed.to_lowercase(),
                kind: RowKind::SubBreed,
                route: Route::breed_image(breed, sub_breed.as_str()),
            });
        }
    }
    rows
}

#[derive(Debug, PartialEq)]
pub enum ListPhase {
    Empty,
    Loaded(Vec<BreedRow>),
}

pub struct BreedsListState {
    phase: ListPhase,
    /// Delivers the breed list from the fetch task; dropped once it arrives
    receiver: Option<UnboundedReceiver<BreedsResponse>>,
}

impl Default for BreedsListState {
    fn default() -> Self {
        Self {
            phase: ListPhase::Empty,
            receiver: None,
        }
    }
}

impl BreedsListState {
    /// Create the screen state and start its one fetch
    pub fn mount(services: &AppServices, ctx: &egui::Context) -> Self {
        let (tx, rx) = unbounded_channel();
        let client = services.client.clone();
        let ctx = ctx.clone();

        services.runtime.spawn(async move {
            match client.fetch_breeds_list().await {
                Ok(breeds) => {
                    // The screen may already be gone; the update is dropped then
                    let _ = tx.send(breeds);
                }
                Err(e) => error!("Failed to fetch breed list: {}", e),
            }
            ctx.request_repaint();
        });

        Self {
            phase: ListPhase::Empty,
            receiver: Some(rx),
        }
    }

    pub fn phase(&self) -> &ListPhase {
        &self.phase
    }

    pub fn rows(&self) -> &[BreedRow] {
        match &self.phase {
            ListPhase::Loaded(rows) => rows,
            ListPhase::Empty => &[],
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.phase, ListPhase::Loaded(_))
    }

    /// Apply a fetched breed list. Only the first one counts.
    pub fn on_loaded(&mut self, breeds: &BreedsResponse) {
        if self.is_loaded() {
            return;
        }
        let rows = breed_rows(&breeds.message);
        info!("Breed list loaded with {} rows", rows.len());
        self.phase = ListPhase::Loaded(rows);
    }

    /// Drain the fetch result if it has arrived (non-blocking)
    pub fn poll(&mut self) {
        let Some(receiver) = self.receiver.as_mut() else {
            return;
        };
        if let Ok(breeds) = receiver.try_recv() {
            self.on_loaded(&breeds);
            self.receiver = None;
        }
    }
}

pub struct BreedsListScreen;

impl BreedsListScreen {
    const SUB_BREED_INDENT: f32 = 16.0;

    pub fn show(ctx: &egui::Context, state: &mut BreedsListState) -> Option<NavIntent> {
        state.poll();

        let mut intent = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for row in state.rows() {
                        let clicked = match row.kind {
                            RowKind::Breed => ui
                                .add(
                                    egui::Label::new(egui::RichText::new(row.label.as_str()).strong())
                                        .sense(egui::Sense::click()),
                                )
                                .clicked(),
                            RowKind::SubBreed => {
                                ui.horizontal(|ui| {
                                    ui.add_space(Self::SUB_BREED_INDENT);
                                    ui.add(
                                        egui::Label::new(row.label.as_str()).sense(egui::Sense::click()),
                                    )
                                    .clicked()
                                })
                                .inner
                            }
                        };

                        if clicked {
                            intent = Some(NavIntent::Navigate(row.route.clone()));
                        }
                    }
                });
        });

        intent
    }
}

#[cfg(test)]
#[path = "breeds_list_tests.rs"]
mod tests;
