//! Read-only searches over a store snapshot.
//!
//! A [`Lookup`] is computed on demand from
//! [`EntityStore::lookup`](crate::store::EntityStore::lookup); it never
//! observes writes made after it was taken.

use crate::error::{DeskError, Result};
use crate::text::is_blank;
use std::collections::HashSet;

/// Entities searchable by display name.
pub trait Named {
    /// The display name
    fn name(&self) -> &str;
}

/// Snapshot of a store's contents with search helpers.
#[derive(Debug, Clone)]
pub struct Lookup<T> {
    entries: Vec<T>,
}

fn search_term(field: &str, value: &str) -> Result<String> {
    if is_blank(value) {
        return Err(DeskError::invalid(format!("{field} search term must not be blank")));
    }
    Ok(value.to_lowercase())
}

impl<T: Clone> Lookup<T> {
    /// Wraps a snapshot.
    #[must_use]
    pub const fn new(entries: Vec<T>) -> Self {
        Self { entries }
    }

    /// Number of entries in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every entry whose `selector` field equals `value`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::InvalidArgument`] when `value` is blank.
    pub fn find_by_exact<F>(&self, field: &str, selector: F, value: &str) -> Result<Vec<T>>
    where
        F: Fn(&T) -> &str,
    {
        let wanted = search_term(field, value)?;
        let matches: Vec<T> = self
            .entries
            .iter()
            .filter(|entry| selector(entry).to_lowercase() == wanted)
            .cloned()
            .collect();
        tracing::debug!(field, value, matches = matches.len(), "Exact lookup");
        Ok(matches)
    }

    /// First entry whose `selector` field equals `value`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::InvalidArgument`] when `value` is blank.
    pub fn find_first_by_exact<F>(&self, field: &str, selector: F, value: &str) -> Result<Option<T>>
    where
        F: Fn(&T) -> &str,
    {
        let wanted = search_term(field, value)?;
        Ok(self
            .entries
            .iter()
            .find(|entry| selector(entry).to_lowercase() == wanted)
            .cloned())
    }

    /// Distinct values of `selector` in first-seen order.
    #[must_use]
    pub fn distinct_values<F>(&self, selector: F) -> Vec<String>
    where
        F: Fn(&T) -> &str,
    {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|entry| selector(entry))
            .filter(|value| seen.insert(*value))
            .map(str::to_owned)
            .collect()
    }

    /// Consumes the snapshot.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.entries
    }
}

impl<T: Named + Clone> Lookup<T> {
    /// Entries whose name contains `text`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::InvalidArgument`] when `text` is blank.
    pub fn find_by_name_containing(&self, text: &str) -> Result<Vec<T>> {
        let needle = search_term("name", text)?;
        let matches: Vec<T> = self
            .entries
            .iter()
            .filter(|entry| entry.name().to_lowercase().contains(&needle))
            .cloned()
            .collect();
        tracing::debug!(text, matches = matches.len(), "Name lookup");
        Ok(matches)
    }
}
