//! Route patterns and the navigation back stack.
//!
//! Three path shapes are recognised:
//! `breedsList`, `breedsImage/{breed}` and `breedsImage/{breed}/{subBreed}`.

use std::fmt;

pub const BREEDS_LIST: &str = "breedsList";
pub const BREEDS_IMAGE: &str = "breedsImage";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    BreedsList,
    /// `sub_breed` is empty when the image is for the whole breed
    BreedImage { breed: String, sub_breed: String },
}

impl Route {
    pub fn breed_image(breed: impl Into<String>, sub_breed: impl Into<String>) -> Self {
        Route::BreedImage {
            breed: breed.into(),
            sub_breed: sub_breed.into(),
        }
    }

    /// Parse a route path. Parameters are taken positionally and default to
    /// an empty string when missing. Unknown paths return `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let mut segments = path.trim_matches('/').split('/');

        match segments.next()? {
            BREEDS_LIST => match segments.next() {
                None => Some(Route::BreedsList),
                Some(_) => None,
            },
            BREEDS_IMAGE => {
                let breed = segments.next().unwrap_or_default();
                let sub_breed = segments.next().unwrap_or_default();
                if segments.next().is_some() {
                    return None;
                }
                Some(Route::breed_image(breed, sub_breed))
            }
            _ => None,
        }
    }

    /// Render the route back to its path
    pub fn path(&self) -> String {
        match self {
            Route::BreedsList => BREEDS_LIST.to_string(),
            Route::BreedImage { breed, sub_breed } if sub_breed.is_empty() => {
                format!("{BREEDS_IMAGE}/{breed}")
            }
            Route::BreedImage { breed, sub_breed } => {
                format!("{BREEDS_IMAGE}/{breed}/{sub_breed}")
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Back stack of routes. The start destination is never popped.
#[derive(Debug)]
pub struct NavStack {
    stack: Vec<Route>,
}

impl Default for NavStack {
    fn default() -> Self {
        Self::new(Route::BreedsList)
    }
}

impl NavStack {
    pub fn new(start: Route) -> Self {
        Self { stack: vec![start] }
    }

    pub fn current(&self) -> &Route {
        // The stack always holds the start destination
        &self.stack[self.stack.len() - 1]
    }

    pub fn navigate(&mut self, route: Route) {
        log::info!("Navigating to {}", route);
        self.stack.push(route);
    }

    /// Navigate by path; unknown paths are ignored. Returns whether navigation happened.
    pub fn navigate_path(&mut self, path: &str) -> bool {
        match Route::parse(path) {
            Some(route) => {
                self.navigate(route);
                true
            }
            None => {
                log::warn!("Ignoring navigation to unknown route: {}", path);
                false
            }
        }
    }

    /// Pop the current route. Returns false at the start destination.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        if let Some(route) = self.stack.pop() {
            log::info!("Leaving {}, back to {}", route, self.current());
        }
        true
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_breeds_list() {
        assert_eq!(Route::parse("breedsList"), Some(Route::BreedsList));
    }

    #[test]
    fn test_parse_breed_only() {
        assert_eq!(
            Route::parse("breedsImage/labrador"),
            Some(Route::breed_image("labrador", ""))
        );
    }

    #[test]
    fn test_parse_breed_and_sub_breed() {
        assert_eq!(
            Route::parse("breedsImage/poodle/toy"),
            Some(Route::breed_image("poodle", "toy"))
        );
    }

    #[test]
    fn test_parse_missing_parameters_default_to_empty() {
        assert_eq!(
            Route::parse("breedsImage"),
            Some(Route::breed_image("", ""))
        );
        assert_eq!(
            Route::parse("breedsImage/"),
            Some(Route::breed_image("", ""))
        );
    }

    #[test]
    fn test_parse_unknown_routes() {
        assert_eq!(Route::parse(""), None);
        assert_eq!(Route::parse("settings"), None);
        assert_eq!(Route::parse("breedsList/extra"), None);
        assert_eq!(Route::parse("breedsImage/a/b/c"), None);
    }

    #[test]
    fn test_path_rendering() {
        assert_eq!(Route::BreedsList.path(), "breedsList");
        assert_eq!(
            Route::breed_image("labrador", "").path(),
            "breedsImage/labrador"
        );
        assert_eq!(
            Route::breed_image("poodle", "toy").to_string(),
            "breedsImage/poodle/toy"
        );
    }

    #[test]
    fn test_path_and_parse_agree() {
        for route in [
            Route::BreedsList,
            Route::breed_image("akita", ""),
            Route::breed_image("bulldog", "french"),
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_nav_stack_starts_at_breeds_list() {
        let nav = NavStack::default();
        assert_eq!(nav.current(), &Route::BreedsList);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_nav_stack_navigate_and_back() {
        let mut nav = NavStack::default();

        assert!(nav.navigate_path("breedsImage/poodle/toy"));
        assert_eq!(nav.current(), &Route::breed_image("poodle", "toy"));
        assert_eq!(nav.depth(), 2);

        assert!(nav.back());
        assert_eq!(nav.current(), &Route::BreedsList);
    }

    #[test]
    fn test_nav_stack_back_at_start_is_noop() {
        let mut nav = NavStack::default();
        assert!(!nav.back());
        assert_eq!(nav.current(), &Route::BreedsList);
    }

    #[test]
    fn test_nav_stack_ignores_unknown_path() {
        let mut nav = NavStack::default();
        assert!(!nav.navigate_path("nowhere"));
        assert_eq!(nav.depth(), 1);
    }
}
