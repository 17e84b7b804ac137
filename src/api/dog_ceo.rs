use crate::config::{AppConfig, DEFAULT_API_BASE_URL, DEFAULT_USER_AGENT};
use crate::error::{ApiError, ApiResult};
use crate::models::{BreedImageResponse, BreedsResponse, DogApiError};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Client for the dog.ceo breeds API
#[derive(Debug, Clone)]
pub struct DogApiClient {
    client: Client,
    base_url: String,
    user_agent: String,
}

impl Default for DogApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DogApiClient {
    /// Creates a client for the public API
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }

    /// Creates a client for the given API root (mock servers in tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            ..Self::with_base_url(config.api_base_url.as_str())
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the random image endpoint for a breed, or for a sub-breed when one is given
    pub fn breed_image_url(&self, breed: &str, sub_breed: Option<&str>) -> String {
        match sub_breed.filter(|s| !s.is_empty()) {
            Some(sub_breed) => format!(
                "{}/breed/{}/{}/images/random",
                self.base_url, breed, sub_breed
            ),
            None => format!("{}/breed/{}/images/random", self.base_url, breed),
        }
    }

    /// Fetch every breed with its sub-breeds
    pub async fn fetch_breeds_list(&self) -> ApiResult<BreedsResponse> {
        let url = format!("{}/breeds/list/all", self.base_url);
        log::info!("Fetching breed list: {}", url);

        let breeds: BreedsResponse = self.get_json(&url).await?;
        log::info!("Fetched {} breeds", breeds.message.len());
        Ok(breeds)
    }

    /// Fetch a random image URL for a breed, or for one of its sub-breeds.
    ///
    /// An empty `sub_breed` is treated like `None`.
    pub async fn fetch_breed_image(
        &self,
        breed: &str,
        sub_breed: Option<&str>,
    ) -> ApiResult<BreedImageResponse> {
        let url = self.breed_image_url(breed, sub_breed);
        log::info!("Fetching breed image: {}", url);
        self.get_json(&url).await
    }

    /// Download the picture behind a resolved image URL
    pub async fn fetch_image_bytes(&self, url: &str) -> ApiResult<Vec<u8>> {
        log::debug!("Fetching image: {}", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.bytes().await?.to_vec())
        } else {
            Err(ApiError::HttpStatus(response.status()))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }

        match serde_json::from_slice::<DogApiError>(&body) {
            Ok(error) => {
                log::warn!("dog.ceo returned {} for {}: {}", status, url, error.message);
                Err(ApiError::ApiResponse {
                    code: error
                        .code
                        .map(|code| code.to_string())
                        .unwrap_or_else(|| status.as_str().to_string()),
                    details: error.message,
                })
            }
            Err(_) => {
                log::warn!("dog.ceo returned {} for {}", status, url);
                Err(ApiError::HttpStatus(status))
            }
        }
    }
}
