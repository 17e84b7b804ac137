use crate::api::DogApiClient;
use crate::cache::{CacheKey, SharedImageCache};
use crate::navigation::Route;
use eframe::egui;
use tokio::runtime::Handle;

use super::screens::{BreedImageState, BreedsListState};

/// Dependencies handed to every screen mount
#[derive(Clone)]
pub struct AppServices {
    pub client: DogApiClient,
    pub image_cache: SharedImageCache,
    pub runtime: Handle,
}

/// What a screen asks the navigation host to do after a frame
#[derive(Debug, Clone, PartialEq)]
pub enum NavIntent {
    Navigate(Route),
    Back,
}

/// The state of the currently mounted screen.
/// A new value is created every time a route becomes current.
pub enum Screen {
    BreedsList(BreedsListState),
    BreedImage(BreedImageState),
}

impl Screen {
    pub fn mount(route: &Route, services: &AppServices, ctx: &egui::Context) -> Self {
        match route {
            Route::BreedsList => Screen::BreedsList(BreedsListState::mount(services, ctx)),
            Route::BreedImage { breed, sub_breed } => Screen::BreedImage(BreedImageState::mount(
                CacheKey::new(breed.as_str(), sub_breed.as_str()),
                services,
                ctx,
            )),
        }
    }
}
