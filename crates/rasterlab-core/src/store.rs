//! Named image store
//!
//! The model half of the engine: a mapping from name to [`Image`].
//! The store never hands out references to its entries; `get` returns
//! a structural copy and `insert` takes its argument by value, so a
//! stored image can never be reached through a reference the caller
//! kept, and a retrieved image can never be changed by later store
//! operations.

use crate::error::{Error, Result};
use crate::image::Image;
use std::collections::HashMap;

/// In-memory mapping from image name to image value.
///
/// # Examples
///
/// ```
/// use rasterlab_core::{Image, ImageStore};
///
/// let mut store = ImageStore::new();
/// store.insert("blank", Image::new(2, 2, 255).unwrap()).unwrap();
/// let copy = store.get("blank").unwrap();
/// assert_eq!(copy.width(), 2);
/// assert!(store.get("missing").is_err());
/// ```
#[derive(Debug, Default)]
pub struct ImageStore {
    images: HashMap<String, Image>,
}

impl ImageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `image` under `name`, replacing any prior entry.
    ///
    /// The image is taken by value; ownership transfer gives the same
    /// no-aliasing guarantee a defensive copy would.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an empty name.
    pub fn insert(&mut self, name: &str, image: Image) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidArgument(
                "image name must not be empty".to_string(),
            ));
        }
        self.images.insert(name.to_string(), image);
        Ok(())
    }

    /// Retrieve an independent copy of the image stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImageNotFound`] if no entry exists.
    pub fn get(&self, name: &str) -> Result<Image> {
        self.images
            .get(name)
            .cloned()
            .ok_or_else(|| Error::ImageNotFound(name.to_string()))
    }

    /// Delete the entry under `name`. Removing an absent name is a
    /// no-op, not an error.
    pub fn remove(&mut self, name: &str) {
        self.images.remove(name);
    }

    /// Check whether an entry exists under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    /// Number of stored images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Check if the store holds no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// All stored names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.images.keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Rgb;

    fn gradient(w: u32, h: u32) -> Image {
        Image::from_fn(w, h, 255, |x, y| Rgb::gray((x + y) as u16)).unwrap()
    }

    #[test]
    fn test_insert_get_roundtrip() {
        let mut store = ImageStore::new();
        let img = gradient(3, 3);
        store.insert("g", img.clone()).unwrap();
        assert_eq!(store.get("g").unwrap(), img);
    }

    #[test]
    fn test_get_returns_independent_copy() {
        let mut store = ImageStore::new();
        store.insert("g", gradient(3, 3)).unwrap();

        // Two reads never alias each other or the stored entry.
        let a = store.get("g").unwrap();
        let b = store.get("g").unwrap();
        assert_ne!(a.samples().as_ptr(), b.samples().as_ptr());

        // Deriving a new image from a retrieved copy leaves the store
        // unchanged.
        let mutated = a.map_pixels(|p| p.map(|v| v.saturating_add(50)));
        assert_ne!(mutated, store.get("g").unwrap());
        assert_eq!(b, store.get("g").unwrap());
    }

    #[test]
    fn test_missing_name_is_not_found() {
        let store = ImageStore::new();
        assert!(matches!(
            store.get("missing"),
            Err(Error::ImageNotFound(name)) if name == "missing"
        ));
    }

    #[test]
    fn test_insert_overwrites() {
        let mut store = ImageStore::new();
        store.insert("x", gradient(2, 2)).unwrap();
        store.insert("x", gradient(5, 5)).unwrap();
        assert_eq!(store.get("x").unwrap().width(), 5);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut store = ImageStore::new();
        assert!(matches!(
            store.insert("", gradient(2, 2)),
            Err(Error::InvalidArgument(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = ImageStore::new();
        store.insert("keep", gradient(2, 2)).unwrap();
        store.remove("absent");
        store.remove("keep");
        store.remove("keep");
        assert!(!store.contains("keep"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_names_sorted() {
        let mut store = ImageStore::new();
        for name in ["zeta", "alpha", "mid"] {
            store.insert(name, gradient(1, 1)).unwrap();
        }
        assert_eq!(store.names(), vec!["alpha", "mid", "zeta"]);
    }
}
