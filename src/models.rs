use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Breed names mapped to their sub-breeds, in the order the API sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreedMap {
    entries: Vec<(String, Vec<String>)>,
}

impl BreedMap {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(breed, subs)| (breed.as_str(), subs.as_slice()))
    }

    /// Sub-breeds of a breed, `None` if the breed is unknown
    pub fn sub_breeds(&self, breed: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == breed)
            .map(|(_, subs)| subs.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for BreedMap {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

struct BreedMapVisitor;

impl<'de> Visitor<'de> for BreedMapVisitor {
    type Value = BreedMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object of breed names to sub-breed arrays")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((breed, subs)) = access.next_entry::<String, Vec<String>>()? {
            entries.push((breed, subs));
        }
        Ok(BreedMap { entries })
    }
}

impl<'de> Deserialize<'de> for BreedMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(BreedMapVisitor)
    }
}

/// Response of `breeds/list/all`
#[derive(Debug, Deserialize, Clone)]
pub struct BreedsResponse {
    pub message: BreedMap,
    #[serde(default)]
    pub status: String,
}

/// Response of the random image endpoints; `message` holds the image URL
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BreedImageResponse {
    pub message: String,
    #[serde(default)]
    pub status: String,
}

/// Error envelope the API returns with non-success statuses
#[derive(Debug, Deserialize)]
pub struct DogApiError {
    #[serde(default)]
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub code: Option<u16>,
}
