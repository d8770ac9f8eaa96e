//! City catalog entries

use serde::{Deserialize, Serialize};

/// One city in the catalog: its slug and the image shown on listing pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityEntry {
    pub name: String,
    pub image: String,
}

impl CityEntry {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }

    /// Human-readable name derived from the slug, e.g. `new-york` -> `New York`
    pub fn display_name(&self) -> String {
        display_city(&self.name)
    }
}

/// Turn a city slug into a title-cased label
pub fn display_city(slug: &str) -> String {
    slug.split(['-', ' '])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(CityEntry::new("new-york", "/x.jpg").display_name(), "New York");
        assert_eq!(display_city("milano"), "Milano");
        assert_eq!(display_city("tel-aviv"), "Tel Aviv");
        assert_eq!(display_city(""), "");
    }
}
