use eframe::{self, egui};
use egui::ViewportBuilder;
use tokio::runtime::Runtime;

use super::{
    screens::{BreedImageScreen, BreedsListScreen},
    state::{AppServices, NavIntent, Screen},
};
use crate::api::DogApiClient;
use crate::cache::ImageCache;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::navigation::{NavStack, Route};

const APP_TITLE: &str = "Dog Breeds";

/// Navigation host: owns the back stack and the state of the mounted screen
pub struct DogBreedsApp {
    nav: NavStack,
    screen: Screen,
    services: AppServices,
    // Keeps the background tasks alive; `services` only holds a handle
    _runtime: Runtime,
}

impl DogBreedsApp {
    pub fn new(runtime: Runtime, config: &AppConfig, ctx: &egui::Context) -> Self {
        log::info!("Using dog.ceo API at {}", config.api_base_url);

        let services = AppServices {
            client: DogApiClient::from_config(config),
            image_cache: ImageCache::shared(),
            runtime: runtime.handle().clone(),
        };
        let nav = NavStack::default();
        let screen = Screen::mount(nav.current(), &services, ctx);

        Self {
            nav,
            screen,
            services,
            _runtime: runtime,
        }
    }

    pub fn current_route(&self) -> &Route {
        self.nav.current()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn services(&self) -> &AppServices {
        &self.services
    }

    /// Apply a navigation intent and mount the screen that becomes current
    pub fn handle_intent(&mut self, intent: NavIntent, ctx: &egui::Context) {
        let changed = match intent {
            NavIntent::Navigate(route) => {
                self.nav.navigate(route);
                true
            }
            NavIntent::Back => self.nav.back(),
        };

        if changed {
            self.screen = Screen::mount(self.nav.current(), &self.services, ctx);
        }
    }
}

impl eframe::App for DogBreedsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let intent = match &mut self.screen {
            Screen::BreedsList(state) => BreedsListScreen::show(ctx, state),
            Screen::BreedImage(state) => BreedImageScreen::show(ctx, state),
        };

        if let Some(intent) = intent {
            self.handle_intent(intent, ctx);
        }
    }
}

pub fn launch_gui() -> Result<(), AppError> {
    let config = AppConfig::from_env();
    let runtime = Runtime::new()?;

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size(config.window_size),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(DogBreedsApp::new(runtime, &config, &cc.egui_ctx)))),
    )?;
    Ok(())
}

#[cfg(target_os = "android")]
pub fn launch_gui_android(app: android_activity::AndroidApp) -> Result<(), AppError> {
    let config = AppConfig::from_env();
    let runtime = Runtime::new()?;

    let options = eframe::NativeOptions {
        android_app: Some(app),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(DogBreedsApp::new(runtime, &config, &cc.egui_ctx)))),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Port 9 refuses connections, so mounted screens fail fast and stay blank
    fn test_app(ctx: &egui::Context) -> DogBreedsApp {
        let runtime = Runtime::new().unwrap();
        let config = AppConfig {
            api_base_url: "http://127.0.0.1:9".to_string(),
            ..AppConfig::default()
        };
        DogBreedsApp::new(runtime, &config, ctx)
    }

    #[test]
    fn test_starts_on_breeds_list() {
        let ctx = egui::Context::default();
        let app = test_app(&ctx);

        assert_eq!(app.current_route(), &Route::BreedsList);
        assert!(matches!(app.screen(), Screen::BreedsList(_)));
    }

    #[test]
    fn test_navigate_mounts_image_screen_for_route() {
        let ctx = egui::Context::default();
        let mut app = test_app(&ctx);

        app.handle_intent(
            NavIntent::Navigate(Route::breed_image("poodle", "toy")),
            &ctx,
        );

        assert_eq!(app.current_route().path(), "breedsImage/poodle/toy");
        match app.screen() {
            Screen::BreedImage(state) => {
                assert_eq!(state.key().breed, "poodle");
                assert_eq!(state.key().sub_breed, "toy");
            }
            Screen::BreedsList(_) => panic!("expected the image screen"),
        }
    }

    #[test]
    fn test_back_remounts_breeds_list() {
        let ctx = egui::Context::default();
        let mut app = test_app(&ctx);

        app.handle_intent(
            NavIntent::Navigate(Route::breed_image("labrador", "")),
            &ctx,
        );
        app.handle_intent(NavIntent::Back, &ctx);

        assert_eq!(app.current_route(), &Route::BreedsList);
        assert!(matches!(app.screen(), Screen::BreedsList(_)));
    }

    #[test]
    fn test_back_on_start_keeps_screen() {
        let ctx = egui::Context::default();
        let mut app = test_app(&ctx);

        app.handle_intent(NavIntent::Back, &ctx);

        assert_eq!(app.current_route(), &Route::BreedsList);
    }

    #[test]
    fn test_screens_share_one_image_cache() {
        let ctx = egui::Context::default();
        let app = test_app(&ctx);

        let cache = app.services().image_cache.clone();
        app.services()
            .runtime
            .block_on(async { cache.write().await.put("akita", "", "akita.jpg") });

        let seen = app
            .services()
            .runtime
            .block_on(async { app.services().image_cache.read().await.len() });
        assert_eq!(seen, 1);
    }
}
