//! Generic in-memory entity storage.
//!
//! An [`EntityStore`] keeps entities in insertion order behind one
//! `RwLock`. Writes (`save`, `update`, `delete_by_id`, `clear`) hold the write
//! lock for the whole operation, so no partial state is ever observable.
//! Reads share the read lock.
//!
//! # Example
//!
//! ```
//! use helpdesk_core::{Client, DeskError, EntityStore};
//!
//! # fn main() -> helpdesk_core::Result<()> {
//! let store = EntityStore::<Client>::new();
//! let saved = store.save(Client::new("Ana", "ana@empresa.com", "555"))?;
//!
//! let id = saved.id.ok_or_else(|| DeskError::invalid("unsaved client"))?;
//! assert_eq!(store.find_by_id(id)?, Some(saved));
//! assert_eq!(store.count()?, 1);
//! # Ok(())
//! # }
//! ```

use crate::error::{DeskError, Result};
use crate::id::{EXHAUSTED, IdGenerator};
use crate::lookup::Lookup;
use std::fmt;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A record with a store-assigned identifier.
pub trait Entity: Clone + Send + Sync {
    /// Typed identifier
    type Id: Copy + Eq + fmt::Debug + fmt::Display + From<u64> + Into<u64> + Send + Sync;

    /// Kind label used in errors and logs
    const KIND: &'static str;

    /// Current identifier, `None` until saved
    fn id(&self) -> Option<Self::Id>;

    /// Sets the identifier
    fn assign_id(&mut self, id: Self::Id);
}

/// Lock-protected, insertion-ordered storage for one entity type.
pub struct EntityStore<T: Entity> {
    entities: RwLock<Vec<T>>,
    ids: IdGenerator,
}

impl<T: Entity> EntityStore<T> {
    /// Creates an empty store issuing ids from `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base(1)
    }

    /// Creates an empty store issuing ids from `base`.
    #[must_use]
    pub fn with_base(base: u64) -> Self {
        Self {
            entities: RwLock::new(Vec::new()),
            ids: IdGenerator::starting_at(base),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<T>>> {
        self.entities
            .read()
            .map_err(|_| DeskError::LockPoisoned { kind: T::KIND })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>> {
        self.entities
            .write()
            .map_err(|_| DeskError::LockPoisoned { kind: T::KIND })
    }

    fn not_found(id: T::Id) -> DeskError {
        DeskError::NotFound {
            kind: T::KIND,
            id: id.into(),
        }
    }

    /// Returns a copy of every entity in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::LockPoisoned`] if a writer panicked.
    pub fn find_all(&self) -> Result<Vec<T>> {
        Ok(self.read()?.clone())
    }

    /// Returns the entity with `id`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::LockPoisoned`] if a writer panicked.
    pub fn find_by_id(&self, id: T::Id) -> Result<Option<T>> {
        Ok(self
            .read()?
            .iter()
            .find(|entity| entity.id() == Some(id))
            .cloned())
    }

    /// Returns the entity with `id`, failing when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::NotFound`] when no entity has `id`.
    pub fn get(&self, id: T::Id) -> Result<T> {
        self.find_by_id(id)?.ok_or_else(|| Self::not_found(id))
    }

    /// Stores a new entity, assigning an identifier when it has none.
    ///
    /// An explicit identifier moves the generator past it so it is never
    /// issued again.
    ///
    /// # Errors
    ///
    /// - [`DeskError::DuplicateIdentifier`] when the identifier is already
    ///   stored
    /// - [`DeskError::InvalidArgument`] when the explicit identifier is
    ///   `u64::MAX` or the generator is exhausted
    pub fn save(&self, mut entity: T) -> Result<T> {
        let mut entities = self.write()?;

        match entity.id() {
            Some(id) => {
                let raw: u64 = id.into();
                if raw == EXHAUSTED {
                    return Err(DeskError::invalid(format!(
                        "{} identifier {raw} is reserved",
                        T::KIND
                    )));
                }
                if entities.iter().any(|existing| existing.id() == Some(id)) {
                    return Err(DeskError::DuplicateIdentifier {
                        kind: T::KIND,
                        id: raw,
                    });
                }
                self.ids.advance_past(raw);
            }
            None => {
                let raw = self.ids.next();
                if raw == EXHAUSTED {
                    return Err(DeskError::invalid(format!(
                        "{} identifiers exhausted",
                        T::KIND
                    )));
                }
                let id = T::Id::from(raw);
                if entities.iter().any(|existing| existing.id() == Some(id)) {
                    return Err(DeskError::DuplicateIdentifier {
                        kind: T::KIND,
                        id: id.into(),
                    });
                }
                tracing::debug!(kind = T::KIND, %id, "Assigned identifier");
                entity.assign_id(id);
            }
        }

        entities.push(entity.clone());
        Ok(entity)
    }

    /// Replaces the stored entity carrying the same identifier.
    ///
    /// The replacement is a remove-then-append under one write lock, so the
    /// updated entity moves to the end of iteration order.
    ///
    /// # Errors
    ///
    /// - [`DeskError::InvalidArgument`] if `entity` has no identifier
    /// - [`DeskError::NotFound`] if no stored entity has its identifier
    pub fn update(&self, entity: T) -> Result<T> {
        let Some(id) = entity.id() else {
            return Err(DeskError::invalid(format!(
                "{} identifier is required for update",
                T::KIND
            )));
        };

        let mut entities = self.write()?;
        let Some(position) = entities.iter().position(|existing| existing.id() == Some(id)) else {
            return Err(Self::not_found(id));
        };

        entities.remove(position);
        entities.push(entity.clone());
        Ok(entity)
    }

    /// Removes the entity with `id`. Removing a missing id is a no-op.
    ///
    /// Returns whether an entity was removed.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::LockPoisoned`] if a writer panicked.
    pub fn delete_by_id(&self, id: T::Id) -> Result<bool> {
        let mut entities = self.write()?;
        let before = entities.len();
        entities.retain(|entity| entity.id() != Some(id));
        Ok(entities.len() < before)
    }

    /// Returns whether an entity with `id` is stored.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::LockPoisoned`] if a writer panicked.
    pub fn exists_by_id(&self, id: T::Id) -> Result<bool> {
        Ok(self.read()?.iter().any(|entity| entity.id() == Some(id)))
    }

    /// Number of stored entities.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::LockPoisoned`] if a writer panicked.
    pub fn count(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    /// Removes every entity and restarts identifier issuance at the base.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::LockPoisoned`] if a writer panicked.
    pub fn clear(&self) -> Result<()> {
        let mut entities = self.write()?;
        entities.clear();
        self.ids.reset();
        Ok(())
    }

    /// Snapshot of the current contents for searching.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::LockPoisoned`] if a writer panicked.
    pub fn lookup(&self) -> Result<Lookup<T>> {
        Ok(Lookup::new(self.find_all()?))
    }
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> fmt::Debug for EntityStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityStore")
            .field("kind", &T::KIND)
            .field("next_id", &self.ids.peek())
            .finish_non_exhaustive()
    }
}
