use std::path::Path;

use crate::core::errors::{JaegerError, Result};
use crate::core::models::property::{Property, StoreDocument};

/// What `add` does when the property name is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Refuse the add. The default.
    Reject,
    /// Append anyway. Lookups (change/delete/render mapping) act on the
    /// first match, so the new entry stays shadowed until the entry in
    /// front of it is deleted.
    Shadow,
}

/// An ordered collection of named encrypted properties, persisted as a
/// JSON document.
///
/// Insertion order is preserved across load/save and is observable in
/// the persisted file. Every mutation rewrites the whole document;
/// there is no locking, so concurrent invocations against the same
/// file race and the last writer wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertyStore {
    properties: Vec<Property>,
}

impl PropertyStore {
    /// Create an empty store at `path` and persist it immediately.
    ///
    /// Refuses to overwrite an existing file.
    pub fn init(path: &Path) -> Result<Self> {
        if path.exists() {
            return Err(JaegerError::StoreAlreadyExists {
                path: path.to_path_buf(),
            });
        }
        let store = Self::default();
        store.save(path)?;
        Ok(store)
    }

    /// Load a store from its persisted JSON document.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => JaegerError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => JaegerError::Io(e),
        })?;

        let document: StoreDocument =
            serde_json::from_str(&content).map_err(|e| JaegerError::StoreParse {
                path: path.to_path_buf(),
                detail: e.to_string(),
            })?;

        Ok(Self {
            properties: document.properties,
        })
    }

    /// Serialize the full ordered sequence back to `path`.
    ///
    /// Overwrite is unconditional; the caller owns the file for the
    /// duration of the invocation.
    pub fn save(&self, path: &Path) -> Result<()> {
        let document = StoreDocument {
            properties: self.properties.clone(),
        };
        let mut json =
            serde_json::to_string_pretty(&document).map_err(std::io::Error::other)?;
        json.push('\n');
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Append a property to the end of the sequence.
    pub fn add(&mut self, name: &str, ciphertext: String, policy: DuplicatePolicy) -> Result<()> {
        if policy == DuplicatePolicy::Reject && self.get(name).is_some() {
            return Err(JaegerError::DuplicateProperty {
                name: name.to_string(),
            });
        }
        self.properties.push(Property {
            name: name.to_string(),
            encrypted_value: ciphertext,
        });
        Ok(())
    }

    /// Replace the ciphertext of the first property named `name`.
    ///
    /// Order and all other entries are unchanged.
    pub fn update(&mut self, name: &str, ciphertext: String) -> Result<()> {
        match self.properties.iter_mut().find(|p| p.name == name) {
            Some(property) => {
                property.encrypted_value = ciphertext;
                Ok(())
            }
            None => Err(JaegerError::PropertyNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Remove the first property named `name`, keeping the relative
    /// order of the remaining entries.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        let Some(index) = self.properties.iter().position(|p| p.name == name) else {
            return Err(JaegerError::PropertyNotFound {
                name: name.to_string(),
            });
        };

        // Filtered copy rather than in-place shifting; the original
        // backing storage is never aliased.
        self.properties = self
            .properties
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, p)| p.clone())
            .collect();

        Ok(())
    }

    /// First property named `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// All properties in insertion order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
