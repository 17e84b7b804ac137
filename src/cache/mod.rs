//! In-memory cache of resolved breed image URLs

pub mod image_cache;

pub use image_cache::{fetch_breed_image_cached, CacheKey, ImageCache, SharedImageCache};
