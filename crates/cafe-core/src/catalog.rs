//! Static city catalog

use cafe_types::{normalize_city, CityEntry};

/// Image shown for cities that are not in the catalog
pub const DEFAULT_CITY_IMAGE: &str = "/images/default-city.jpg";

/// Cities shipped with the site
const BUILTIN_CITIES: &[(&str, &str)] = &[
    ("milano", "/images/cities/milan.jpg"),
    ("paris", "/images/cities/paris.jpg"),
    ("tel-aviv", "/images/cities/tel-aviv.jpg"),
    ("london", "/images/cities/london.jpg"),
    ("new-york", "/images/cities/new-york.jpg"),
    ("tokyo", "/images/cities/tokyo.jpg"),
];

/// Slug to display-image lookup, fixed at startup
#[derive(Debug, Clone)]
pub struct CityCatalog {
    entries: Vec<CityEntry>,
    default_image: String,
}

impl CityCatalog {
    pub fn new(entries: Vec<CityEntry>, default_image: impl Into<String>) -> Self {
        Self {
            entries,
            default_image: default_image.into(),
        }
    }

    pub fn find(&self, slug: &str) -> Option<&CityEntry> {
        let slug = normalize_city(slug);
        self.entries
            .iter()
            .find(|entry| normalize_city(&entry.name) == slug)
    }

    /// Image for a city, falling back to the default for unknown slugs
    pub fn image_for(&self, slug: &str) -> &str {
        self.find(slug)
            .map(|entry| entry.image.as_str())
            .unwrap_or(&self.default_image)
    }

    pub fn entries(&self) -> &[CityEntry] {
        &self.entries
    }

    pub fn default_image(&self) -> &str {
        &self.default_image
    }
}

impl Default for CityCatalog {
    fn default() -> Self {
        Self::new(
            BUILTIN_CITIES
                .iter()
                .map(|(name, image)| CityEntry::new(*name, *image))
                .collect(),
            DEFAULT_CITY_IMAGE,
        )
    }
}
