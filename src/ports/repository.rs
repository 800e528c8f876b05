//! Repository port for policy persistence.
//!
//! This module defines the trait boundary between the learning core and the
//! storage layer for trained value tables.

use std::path::Path;

use crate::{Result, learning::PolicyTable};

/// Port for persisting and loading policy tables.
///
/// The storage location is always an explicit parameter: nothing in the crate
/// holds a process-wide policy path, so multiple tables, test isolation, and
/// in-memory stores all come for free.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use valueplay::{PolicyTable, ports::PolicyStore};
///
/// fn persist<S: PolicyStore>(
///     store: &S,
///     table: &PolicyTable,
///     path: &Path,
/// ) -> valueplay::Result<()> {
///     store.save(table, path)
/// }
/// ```
pub trait PolicyStore {
    /// Load a policy table from persistent storage.
    ///
    /// A location with no prior store is the normal cold-start condition and
    /// yields an empty table, not an error. A store that exists but cannot be
    /// decoded is a real persistence failure and must surface as
    /// [`Error::CorruptStore`](crate::Error::CorruptStore) rather than being
    /// silently replaced by an empty table.
    ///
    /// # Errors
    ///
    /// Returns an error if the store exists but cannot be read or decoded.
    fn load(&self, path: &Path) -> Result<PolicyTable>;

    /// Save a policy table, overwriting any existing store at `path`.
    ///
    /// Implementations must not leave a partial store behind on failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be written or serialization
    /// fails.
    fn save(&self, table: &PolicyTable, path: &Path) -> Result<()>;
}
