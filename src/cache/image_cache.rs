use crate::api::DogApiClient;
use crate::error::ApiResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Identifies the image of a breed or of one of its sub-breeds
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub breed: String,
    /// Empty when the image is for the breed itself
    pub sub_breed: String,
}

impl CacheKey {
    pub fn new(breed: impl Into<String>, sub_breed: impl Into<String>) -> Self {
        Self {
            breed: breed.into(),
            sub_breed: sub_breed.into(),
        }
    }

    /// The sub-breed, `None` when empty
    pub fn sub_breed(&self) -> Option<&str> {
        Some(self.sub_breed.as_str()).filter(|s| !s.is_empty())
    }
}

/// Resolved image URLs, kept for the lifetime of the owner.
/// Entries are never evicted and never replaced.
#[derive(Debug, Default)]
pub struct ImageCache {
    urls: HashMap<CacheKey, String>,
}

/// Cache handle shared between the UI and background fetch tasks
pub type SharedImageCache = Arc<RwLock<ImageCache>>;

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a new cache for sharing with background tasks
    pub fn shared() -> SharedImageCache {
        Arc::new(RwLock::new(Self::new()))
    }

    pub fn get(&self, breed: &str, sub_breed: &str) -> Option<&str> {
        self.get_key(&CacheKey::new(breed, sub_breed))
    }

    pub fn get_key(&self, key: &CacheKey) -> Option<&str> {
        self.urls.get(key).map(String::as_str)
    }

    /// Store a URL. Returns false and keeps the existing URL if the key is already present.
    pub fn put(&mut self, breed: &str, sub_breed: &str, url: impl Into<String>) -> bool {
        self.put_key(CacheKey::new(breed, sub_breed), url)
    }

    pub fn put_key(&mut self, key: CacheKey, url: impl Into<String>) -> bool {
        if self.urls.contains_key(&key) {
            log::debug!(
                "Image URL for {}/{} already cached, keeping first",
                key.breed,
                key.sub_breed
            );
            return false;
        }
        log::debug!("Cached image URL for {}/{}", key.breed, key.sub_breed);
        self.urls.insert(key, url.into());
        true
    }

    pub fn contains(&self, breed: &str, sub_breed: &str) -> bool {
        self.urls.contains_key(&CacheKey::new(breed, sub_breed))
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Resolve the image URL for a key, checking the cache first
pub async fn fetch_breed_image_cached(
    client: &DogApiClient,
    cache: &SharedImageCache,
    key: &CacheKey,
) -> ApiResult<String> {
    let cached = cache.read().await.get_key(key).map(str::to_string);
    if let Some(url) = cached {
        log::info!("Image cache hit for {}/{}", key.breed, key.sub_breed);
        return Ok(url);
    }

    log::info!(
        "Image cache miss for {}/{}, fetching from dog.ceo",
        key.breed,
        key.sub_breed
    );
    let image = client.fetch_breed_image(&key.breed, key.sub_breed()).await?;

    cache.write().await.put_key(key.clone(), image.message.clone());

    Ok(image.message)
}
