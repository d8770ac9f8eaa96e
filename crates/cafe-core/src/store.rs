//! Record store
//!
//! Owns the cafe and blog collections, keeps an id index and a city index
//! over the cafes, and writes the whole document back through a
//! [`DocumentStorage`] after every mutation. A mutation whose write fails is
//! undone in memory before the error is returned, so memory and disk never
//! disagree.
//!
//! A data file that exists but cannot be read or parsed is never overwritten:
//! the store starts empty and every write is refused until the file is fixed
//! and the server restarted.

use std::collections::{BTreeMap, HashMap};

use cafe_types::{normalize_city, Blog, Cafe, CafeFields, DataDocument, DataDocumentRef};
use tracing::{debug, error, info, warn};

use crate::error::{CafeError, Result};
use crate::ports::DocumentStorage;

pub struct RecordStore {
    storage: Box<dyn DocumentStorage>,
    cafes: Vec<Cafe>,
    blogs: Vec<Blog>,
    /// id -> position in `cafes` (first occurrence wins)
    cafe_positions: HashMap<i64, usize>,
    blog_positions: HashMap<i64, usize>,
    /// lowercase city -> positions in `cafes`, in document order
    by_city: BTreeMap<String, Vec<usize>>,
    /// Set when the existing document failed to load
    read_only: Option<String>,
}

impl RecordStore {
    /// Load the document, starting empty if it cannot be read or parsed.
    ///
    /// A missing or empty file gives a normal empty store. A file that is
    /// present but unreadable gives an empty store that refuses to persist.
    pub fn load(storage: impl DocumentStorage + 'static) -> Self {
        let storage: Box<dyn DocumentStorage> = Box::new(storage);
        match read_document(storage.as_ref()) {
            Ok(document) => Self::from_document(storage, document),
            Err(e) => {
                error!("{}; starting empty and refusing to write until it is fixed", e);
                let mut store = Self::from_document(storage, DataDocument::default());
                store.read_only = Some(e.to_string());
                store
            }
        }
    }

    /// Load the document, returning the failure instead of starting empty.
    pub fn try_load(storage: impl DocumentStorage + 'static) -> Result<Self> {
        let storage: Box<dyn DocumentStorage> = Box::new(storage);
        let document = read_document(storage.as_ref())?;
        Ok(Self::from_document(storage, document))
    }

    fn from_document(storage: Box<dyn DocumentStorage>, document: DataDocument) -> Self {
        info!(
            "Loaded {} cafes and {} blogs from {}",
            document.cafes.len(),
            document.blogs.len(),
            storage.location()
        );

        let mut store = Self {
            storage,
            cafes: document.cafes,
            blogs: document.blogs,
            cafe_positions: HashMap::new(),
            blog_positions: HashMap::new(),
            by_city: BTreeMap::new(),
            read_only: None,
        };

        for (pos, blog) in store.blogs.iter().enumerate() {
            if let Some(id) = blog.id.as_i64() {
                store.blog_positions.entry(id).or_insert(pos);
            }
        }
        store.rebuild_cafe_positions();
        store.reindex_cities();

        let numbered = store.cafes.iter().filter(|c| c.id.as_i64().is_some()).count();
        if numbered != store.cafes.len() {
            warn!(
                "{} cafes have no integer id and cannot be opened",
                store.cafes.len() - numbered
            );
        }
        if store.cafe_positions.len() != numbered {
            warn!("Data file contains duplicate cafe ids; lookups return the first match");
        }

        store
    }

    pub fn cafes(&self) -> &[Cafe] {
        &self.cafes
    }

    pub fn blogs(&self) -> &[Blog] {
        &self.blogs
    }

    /// Whether writes are refused because the existing data file failed to load
    pub fn is_read_only(&self) -> bool {
        self.read_only.is_some()
    }

    pub fn find_cafe(&self, id: i64) -> Result<&Cafe> {
        self.cafe_positions
            .get(&id)
            .map(|&pos| &self.cafes[pos])
            .ok_or(CafeError::CafeNotFound(id))
    }

    pub fn find_blog(&self, id: i64) -> Result<&Blog> {
        self.blog_positions
            .get(&id)
            .map(|&pos| &self.blogs[pos])
            .ok_or(CafeError::BlogNotFound(id))
    }

    /// Cafes whose city matches `city` case-insensitively, in document order
    pub fn list_by_city(&self, city: &str) -> Vec<&Cafe> {
        self.by_city
            .get(&normalize_city(city))
            .map(|positions| positions.iter().map(|&pos| &self.cafes[pos]).collect())
            .unwrap_or_default()
    }

    /// Distinct cities that have at least one cafe, sorted
    pub fn cities(&self) -> Vec<&str> {
        self.by_city.keys().map(String::as_str).collect()
    }

    /// One past the largest integer id, or 1 for an empty store
    pub fn next_cafe_id(&self) -> Result<i64> {
        match self.cafes.iter().filter_map(|c| c.id.as_i64()).max() {
            Some(max) => max.checked_add(1).ok_or(CafeError::IdsExhausted(max)),
            None => Ok(1),
        }
    }

    /// Append a new cafe and persist. Nothing is validated.
    pub fn create_cafe(&mut self, fields: CafeFields, image: Option<String>) -> Result<Cafe> {
        let id = self.next_cafe_id()?;
        let cafe = Cafe::from_fields(id, fields, image);

        self.cafes.push(cafe.clone());
        self.cafe_positions.insert(id, self.cafes.len() - 1);

        if let Err(e) = self.persist() {
            self.cafes.pop();
            self.cafe_positions.remove(&id);
            return Err(e);
        }

        self.reindex_cities();
        info!("Created cafe {} ({}) in {}", cafe.id, cafe.name, cafe.city);
        Ok(cafe)
    }

    /// Replace a cafe's fields and persist. The image is kept unless a new
    /// one is supplied.
    pub fn update_cafe(
        &mut self,
        id: i64,
        fields: CafeFields,
        image: Option<String>,
    ) -> Result<Cafe> {
        let pos = *self
            .cafe_positions
            .get(&id)
            .ok_or(CafeError::CafeNotFound(id))?;

        let previous = self.cafes[pos].clone();
        self.cafes[pos].apply(fields, image);

        if let Err(e) = self.persist() {
            self.cafes[pos] = previous;
            return Err(e);
        }

        self.reindex_cities();
        info!("Updated cafe {}", id);
        Ok(self.cafes[pos].clone())
    }

    /// Remove every cafe with `id` and persist.
    ///
    /// Deleting an id that does not exist succeeds and changes nothing.
    /// Returns the removed record, if there was one.
    pub fn delete_cafe(&mut self, id: i64) -> Result<Option<Cafe>> {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.cafes.len());
        for (pos, cafe) in std::mem::take(&mut self.cafes).into_iter().enumerate() {
            if cafe.id == id {
                removed.push((pos, cafe));
            } else {
                kept.push(cafe);
            }
        }
        self.cafes = kept;

        if let Err(e) = self.persist() {
            // ascending positions, so each insert lands where it was
            for (pos, cafe) in removed {
                self.cafes.insert(pos, cafe);
            }
            return Err(e);
        }

        if removed.is_empty() {
            debug!("Delete of unknown cafe {} was a no-op", id);
            return Ok(None);
        }

        self.rebuild_cafe_positions();
        self.reindex_cities();
        info!("Deleted cafe {}", id);
        Ok(removed.into_iter().next().map(|(_, cafe)| cafe))
    }

    /// Write cafes and blogs back as one pretty-printed document.
    pub fn persist(&self) -> Result<()> {
        let location = self.storage.location();
        if let Some(reason) = &self.read_only {
            warn!("Refusing to overwrite {} after failed load", location);
            return Err(CafeError::Persistence {
                location,
                message: format!("existing data file could not be loaded ({})", reason),
            });
        }
        let document = DataDocumentRef {
            cafes: &self.cafes,
            blogs: &self.blogs,
        };

        let written = serde_json::to_vec_pretty(&document)
            .map_err(CafeError::from)
            .and_then(|bytes| self.storage.write(&bytes));

        written.map_err(|e| {
            error!("Failed to write data file {}: {}", location, e);
            CafeError::Persistence {
                location,
                message: e.to_string(),
            }
        })
    }

    fn rebuild_cafe_positions(&mut self) {
        self.cafe_positions.clear();
        for (pos, cafe) in self.cafes.iter().enumerate() {
            if let Some(id) = cafe.id.as_i64() {
                self.cafe_positions.entry(id).or_insert(pos);
            }
        }
    }

    fn reindex_cities(&mut self) {
        self.by_city.clear();
        for (pos, cafe) in self.cafes.iter().enumerate() {
            self.by_city.entry(cafe.city_key()).or_default().push(pos);
        }
    }
}

/// A missing or blank file reads as an empty document; anything else that
/// fails is a `Load` error.
fn read_document(storage: &dyn DocumentStorage) -> Result<DataDocument> {
    let location = storage.location();
    let bytes = match storage.read() {
        Ok(bytes) => bytes,
        Err(CafeError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("No data file at {}; starting empty", location);
            return Ok(DataDocument::default());
        }
        Err(e) => {
            return Err(CafeError::Load {
                location,
                message: e.to_string(),
            })
        }
    };
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(DataDocument::default());
    }
    serde_json::from_slice(&bytes).map_err(|e| CafeError::Load {
        location,
        message: e.to_string(),
    })
}
