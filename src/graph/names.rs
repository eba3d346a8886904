//! Bidirectional mapping between external vertex names and dense vertex ids.
//!
//! Graph descriptions name their vertices with strings, while every algorithm in this crate
//! works on [`VertexId`]. [`VertexMap`] resolves names once, when the graph is built, so
//! traversals never look names up again. Results are mapped back to names through
//! [`VertexMap::name`] when they are presented.
//!
//! # Examples
//!
//! ```rust
//! use grlib::{VertexId, VertexMap};
//!
//! let mut names = VertexMap::new();
//! let a = names.push("A")?;
//! let b = names.push("B")?;
//!
//! assert_eq!(a, VertexId::new(0));
//! assert_eq!(names.index("B")?, b);
//! assert_eq!(names.name(a)?, "A");
//! # Ok::<(), grlib::Error>(())
//! ```

use std::collections::HashMap;

use crate::{graph::VertexId, Error, Result};

/// Bidirectional name ↔ id table.
///
/// Ids are handed out sequentially starting at 0 and are never reused or reassigned. The
/// name storage doubles its capacity whenever the next id would not fit.
#[derive(Debug, Clone, Default)]
pub struct VertexMap {
    /// Map from name to id
    indexes: HashMap<String, VertexId>,
    /// Names indexed by id
    names: Vec<String>,
}

impl VertexMap {
    /// Creates an empty vertex map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty vertex map with room for `capacity` names.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indexes: HashMap::with_capacity(capacity),
            names: Vec::with_capacity(capacity),
        }
    }

    /// Assigns the next unused id to `name`.
    ///
    /// # Arguments
    ///
    /// * `name` - The external vertex name, which must not be mapped yet
    ///
    /// # Returns
    ///
    /// The id assigned to `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateVertexName`] if `name` already has an id.
    pub fn push(&mut self, name: impl Into<String>) -> Result<VertexId> {
        let name = name.into();
        if self.indexes.contains_key(&name) {
            return Err(Error::DuplicateVertexName(name));
        }

        Ok(self.assign(name))
    }

    /// Returns the id of `name`, assigning the next unused id if it has none yet.
    ///
    /// This is the entry point used by graph loaders, where the same name appears in many
    /// edge pairs.
    pub fn get_or_push(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.indexes.get(name) {
            return id;
        }

        self.assign(name.to_string())
    }

    fn assign(&mut self, name: String) -> VertexId {
        // Double the name storage when the next id would exceed it
        if self.names.len() == self.names.capacity() {
            self.names.reserve_exact(self.names.capacity().max(1));
        }

        let id = VertexId::new(self.names.len());
        self.indexes.insert(name.clone(), id);
        self.names.push(name);
        id
    }

    /// Returns the id assigned to `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertexName`] if `name` was never pushed.
    pub fn index(&self, name: &str) -> Result<VertexId> {
        self.indexes
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownVertexName(name.to_string()))
    }

    /// Returns the name stored for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexOutOfRange`] if no name was assigned to `id`.
    pub fn name(&self, id: VertexId) -> Result<&str> {
        self.names
            .get(id.index())
            .map(String::as_str)
            .ok_or(Error::VertexOutOfRange {
                id,
                capacity: self.names.len(),
            })
    }

    /// Returns the number of mapped names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no names are mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the size of the underlying name storage.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.names.capacity()
    }

    /// Iterates over `(id, name)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (VertexId::new(i), name.as_str()))
    }
}
