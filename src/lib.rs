pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod ui;

// Re-export commonly used items
pub use api::DogApiClient;
pub use cache::{fetch_breed_image_cached, CacheKey, ImageCache, SharedImageCache};
pub use config::AppConfig;
pub use error::{ApiError, ApiResult, AppError};
pub use models::{BreedImageResponse, BreedMap, BreedsResponse};
pub use navigation::{NavStack, Route};

/// Android entry point. Called by the NativeActivity runtime instead of main().
/// The `android-native-activity` feature in eframe wires this into the Android
/// activity lifecycle automatically.
#[cfg(target_os = "android")]
#[no_mangle]
fn android_main(app: android_activity::AndroidApp) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = ui::launch_gui_android(app) {
        log::error!("Application error: {e}");
    }
}
