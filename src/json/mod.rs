//! JSON document manipulation
//!
//! A thin layer over `serde_json` for string-keyed JSON objects: text
//! round-tripping plus dot-path editing and merging. Values pass through
//! the codec untouched, with no validation or transformation beyond the
//! guards documented on each method.

mod path;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// Result type for JSON document operations
pub type JsonResult<T> = Result<T, JsonError>;

/// JSON document error types
#[derive(Error, Debug)]
pub enum JsonError {
    /// Input text was empty or whitespace
    #[error("JSON input is empty")]
    EmptyInput,

    /// Top-level value was not a JSON object
    #[error("Input is not a JSON object")]
    NotAnObject,

    /// Path contained no usable segments
    #[error("Invalid path '{0}'")]
    InvalidPath(String),

    /// Property already present at the path
    #[error("Property '{0}' already exists")]
    AlreadyExists(String),

    /// Underlying codec failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A mutable, string-keyed JSON object document.
///
/// Wraps a `serde_json` object map and exposes the manipulation surface on
/// top of it: parse/encode, dot-path `get`/`set`/`add`/`remove`, and
/// deep or shallow merging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonDocument {
    root: Map<String, Value>,
}

impl JsonDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self { root: Map::new() }
    }

    /// Parse JSON text into a document.
    ///
    /// Fails with [`JsonError::EmptyInput`] on empty or whitespace-only
    /// input and [`JsonError::NotAnObject`] when the top-level value is not
    /// a JSON object.
    pub fn parse(text: &str) -> JsonResult<Self> {
        if text.trim().is_empty() {
            return Err(JsonError::EmptyInput);
        }
        match serde_json::from_str(text)? {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(JsonError::NotAnObject),
        }
    }

    /// Encode the document as compact JSON text.
    pub fn to_json(&self) -> JsonResult<String> {
        Ok(serde_json::to_string(&self.root)?)
    }

    /// Encode the document as pretty-printed JSON text.
    pub fn to_json_pretty(&self) -> JsonResult<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    /// Number of top-level properties.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Whether the document has no properties.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Get a value by dot-path.
    ///
    /// Returns `None` when any segment is missing or a non-object value
    /// blocks traversal.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let segments = path::split(path);
        path::resolve(&self.root, &segments)
    }

    /// Set a value by dot-path, inserting or overwriting.
    ///
    /// Missing intermediate segments are created as objects; a non-object
    /// intermediate is replaced by a fresh object. Fails with
    /// [`JsonError::InvalidPath`] when the path has no segments.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> JsonResult<()> {
        let segments = path::split(path);
        let (parent, key) = path::resolve_parent_mut(&mut self.root, &segments, true)
            .ok_or_else(|| JsonError::InvalidPath(path.to_string()))?;
        parent.insert(key, value.into());
        Ok(())
    }

    /// Add a value by dot-path, failing if the final key already exists.
    ///
    /// Intermediates are created exactly as in [`JsonDocument::set`].
    pub fn add(&mut self, path: &str, value: impl Into<Value>) -> JsonResult<()> {
        let segments = path::split(path);
        let (parent, key) = path::resolve_parent_mut(&mut self.root, &segments, true)
            .ok_or_else(|| JsonError::InvalidPath(path.to_string()))?;
        if parent.contains_key(&key) {
            return Err(JsonError::AlreadyExists(path.to_string()));
        }
        parent.insert(key, value.into());
        Ok(())
    }

    /// Remove the value at a dot-path, returning it.
    ///
    /// Returns `None` when the path does not resolve to an existing
    /// property. No intermediate objects are created.
    pub fn remove(&mut self, path: &str) -> Option<Value> {
        let segments = path::split(path);
        let (parent, key) = path::resolve_parent_mut(&mut self.root, &segments, false)?;
        parent.remove(&key)
    }

    /// Merge another document into this one.
    ///
    /// With `deep`, nested objects are merged key-by-key and the source
    /// wins at leaves; otherwise top-level keys are overwritten wholesale.
    pub fn merge(&mut self, other: &JsonDocument, deep: bool) {
        debug!("Merging {} top-level properties (deep: {})", other.len(), deep);
        if deep {
            deep_merge(&mut self.root, &other.root);
        } else {
            for (key, value) in &other.root {
                self.root.insert(key.clone(), value.clone());
            }
        }
    }

    /// Borrow the underlying object map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Consume the document, yielding the underlying object map.
    pub fn into_map(self) -> Map<String, Value> {
        self.root
    }
}

impl From<Map<String, Value>> for JsonDocument {
    fn from(root: Map<String, Value>) -> Self {
        Self { root }
    }
}

/// Recursively merge `source` into `target`, object-by-object.
fn deep_merge(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        if let Value::Object(src) = value {
            if let Some(Value::Object(tgt)) = target.get_mut(key) {
                deep_merge(tgt, src);
                continue;
            }
        }
        target.insert(key.clone(), value.clone());
    }
}
