//! API client for the dog.ceo service

pub mod dog_ceo;

pub use dog_ceo::DogApiClient;
