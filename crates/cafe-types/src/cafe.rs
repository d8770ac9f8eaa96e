//! Cafe types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{normalize_city, RecordId, Text};

/// Cafe rating as found in the data file.
///
/// Ratings typed into the add/edit forms arrive as text; hand-edited data
/// files may carry plain numbers or `null`. All are kept verbatim.
pub type Rating = Text;

/// A cafe record.
///
/// Field names follow the persisted document, including the `"opening Hours"`
/// and `"google-map"` keys. Keys this type does not know about are kept in
/// `extra` so that a rewrite never drops data. Any JSON value is accepted
/// for every field, so one odd entry never makes the whole file unreadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cafe {
    #[serde(default, skip_serializing_if = "RecordId::is_missing")]
    pub id: RecordId,
    #[serde(default)]
    pub name: Text,
    #[serde(default)]
    pub location: Text,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub image: Text,
    #[serde(rename = "opening Hours", default)]
    pub opening_hours: Text,
    #[serde(default)]
    pub contact: Text,
    #[serde(default)]
    pub website: Text,
    #[serde(rename = "google-map", default)]
    pub google_map: Text,
    #[serde(default)]
    pub review: Text,
    #[serde(default)]
    pub city: Text,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cafe {
    /// Build a new record from submitted fields. City is stored lowercase and
    /// a missing image becomes the empty string.
    pub fn from_fields(id: i64, fields: CafeFields, image: Option<String>) -> Self {
        Self {
            id: RecordId::from(id),
            name: fields.name.into(),
            location: fields.location.into(),
            rating: fields.rating.into(),
            image: image.unwrap_or_default().into(),
            opening_hours: fields.opening_hours.into(),
            contact: fields.contact.into(),
            website: fields.website.into(),
            google_map: fields.google_map.into(),
            review: fields.review.into(),
            city: normalize_city(&fields.city).into(),
            extra: Map::new(),
        }
    }

    /// Overwrite every submitted field. The image only changes when a new one
    /// is supplied; `id` and `extra` are untouched.
    pub fn apply(&mut self, fields: CafeFields, image: Option<String>) {
        self.name = fields.name.into();
        self.location = fields.location.into();
        self.rating = fields.rating.into();
        if let Some(image) = image {
            self.image = image.into();
        }
        self.opening_hours = fields.opening_hours.into();
        self.contact = fields.contact.into();
        self.website = fields.website.into();
        self.google_map = fields.google_map.into();
        self.review = fields.review.into();
        self.city = normalize_city(&fields.city).into();
    }

    /// Lowercase city used for grouping
    pub fn city_key(&self) -> String {
        normalize_city(&self.city)
    }
}

/// Editable cafe fields as submitted by the add/edit forms.
///
/// Names match the HTML form inputs (`openingHours`, `googleMap`). Missing
/// inputs default to the empty string; nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CafeFields {
    pub name: String,
    pub location: String,
    pub rating: String,
    pub opening_hours: String,
    pub contact: String,
    pub website: String,
    pub google_map: String,
    pub review: String,
    pub city: String,
}

impl CafeFields {
    /// Set a field by its form input name. Returns false for unknown names.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "name" => &mut self.name,
            "location" => &mut self.location,
            "rating" => &mut self.rating,
            "openingHours" => &mut self.opening_hours,
            "contact" => &mut self.contact,
            "website" => &mut self.website,
            "googleMap" => &mut self.google_map,
            "review" => &mut self.review,
            "city" => &mut self.city,
            _ => return false,
        };
        *slot = value;
        true
    }
}
