//! Breed Image Screen
//!
//! Resolves one random image URL for a breed or sub-breed (cache first),
//! then downloads and shows the picture.

use crate::cache::{fetch_breed_image_cached, CacheKey};
use crate::error::ApiResult;
use crate::ui::state::{AppServices, NavIntent};
use eframe::egui;
use log::{debug, error, info, warn};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

/// Message sent from the background resolve task
#[derive(Debug)]
pub enum ImageEvent {
    /// The image URL is known (from cache or network)
    Resolved(String),
    /// The picture behind the URL was downloaded
    Downloaded(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePhase {
    Empty,
    Resolved(String),
}

/// Decode downloaded bytes into something egui can upload
pub fn decode_image(bytes: &[u8]) -> ApiResult<egui::ColorImage> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = rgba.into_raw();
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, &pixels))
}

pub struct BreedImageState {
    key: CacheKey,
    phase: ImagePhase,
    texture: Option<egui::TextureHandle>,
    receiver: Option<UnboundedReceiver<ImageEvent>>,
}

impl BreedImageState {
    /// Screen state without a background task
    pub fn new(key: CacheKey) -> Self {
        Self {
            key,
            phase: ImagePhase::Empty,
            texture: None,
            receiver: None,
        }
    }

    /// Create the screen state and start resolving its image
    pub fn mount(key: CacheKey, services: &AppServices, ctx: &egui::Context) -> Self {
        let (tx, rx) = unbounded_channel();
        let client = services.client.clone();
        let cache = services.image_cache.clone();
        let task_key = key.clone();
        let ctx = ctx.clone();

        services.runtime.spawn(async move {
            let url = match fetch_breed_image_cached(&client, &cache, &task_key).await {
                Ok(url) => url,
                Err(e) => {
                    error!(
                        "Failed to resolve image for {}/{}: {}",
                        task_key.breed, task_key.sub_breed, e
                    );
                    return;
                }
            };

            // Sends fail once the screen is gone; the cache write above still happened
            if tx.send(ImageEvent::Resolved(url.clone())).is_err() {
                debug!("Image screen closed before {} resolved", url);
                return;
            }
            ctx.request_repaint();

            match client.fetch_image_bytes(&url).await {
                Ok(bytes) => {
                    let _ = tx.send(ImageEvent::Downloaded(bytes));
                }
                Err(e) => error!("Failed to download image {}: {}", url, e),
            }
            ctx.request_repaint();
        });

        Self {
            receiver: Some(rx),
            ..Self::new(key)
        }
    }

    pub fn key(&self) -> &CacheKey {
        &self.key
    }

    pub fn phase(&self) -> &ImagePhase {
        &self.phase
    }

    pub fn texture(&self) -> Option<&egui::TextureHandle> {
        self.texture.as_ref()
    }

    /// Heading text: breed followed by the sub-breed, if any
    pub fn title(&self) -> String {
        format!("{} {}", self.key.breed, self.key.sub_breed)
            .trim_end()
            .to_string()
    }

    /// Move to `Resolved`. Later URLs are ignored.
    pub fn on_resolved(&mut self, url: String) {
        if self.phase == ImagePhase::Empty {
            info!("Resolved image for {}: {}", self.title(), url);
            self.phase = ImagePhase::Resolved(url);
        }
    }

    pub fn on_downloaded(&mut self, ctx: &egui::Context, bytes: &[u8]) {
        match decode_image(bytes) {
            Ok(color_image) => {
                let name = format!("breed_{}_{}", self.key.breed, self.key.sub_breed);
                self.texture =
                    Some(ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR));
            }
            Err(e) => warn!("Failed to decode image for {}: {}", self.title(), e),
        }
    }

    /// Drain events from the background task (non-blocking)
    pub fn poll(&mut self, ctx: &egui::Context) {
        let mut events = Vec::new();
        if let Some(receiver) = self.receiver.as_mut() {
            while let Ok(event) = receiver.try_recv() {
                events.push(event);
            }
        }

        for event in events {
            match event {
                ImageEvent::Resolved(url) => self.on_resolved(url),
                ImageEvent::Downloaded(bytes) => {
                    self.on_downloaded(ctx, &bytes);
                    self.receiver = None;
                }
            }
        }
    }
}

pub struct BreedImageScreen;

impl BreedImageScreen {
    pub fn show(ctx: &egui::Context, state: &mut BreedImageState) -> Option<NavIntent> {
        state.poll(ctx);

        let mut intent = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            if ui.button("← Back").clicked() {
                intent = Some(NavIntent::Back);
            }
            ui.add_space(10.0);

            ui.label(state.title());

            if let Some(texture) = state.texture() {
                ui.add(egui::Image::new(texture).shrink_to_fit());
            }
        });

        intent
    }
}

#[cfg(test)]
#[path = "breed_image_tests.rs"]
mod tests;
