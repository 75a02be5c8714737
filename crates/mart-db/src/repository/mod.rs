//! # Repository Module
//!
//! Database repository implementations for Mart.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Caller                                                                 │
//! │       │                                                                 │
//! │       │  db.locations().add_product(&downtown, &cola)                   │
//! │       ▼                                                                 │
//! │  LocationRepository                                                     │
//! │  ├── get_by_name(&self, name)                                           │
//! │  ├── find_stocking(&self, product)                                      │
//! │  ├── add_product(&self, location, product)                              │
//! │  └── remove_products(&self, location, products)                         │
//! │       │                                                                 │
//! │       │  SQL, one transaction per mutation                              │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`location::LocationRepository`] - Location lookups plus the
//!   Location↔Product inventory surface
//! - [`product::ProductRepository`] - Product CRUD

use sqlx::{Sqlite, Transaction};
use tracing::warn;

pub mod location;
pub mod product;

/// Commits a transaction, collapsing the outcome to a boolean.
///
/// The inventory mutation API reports success as `true`/`false` rather than
/// a typed error: a `false` means "assume no state change occurred",
/// whatever the underlying cause. The swallowed error is logged here so it
/// is not lost entirely.
///
/// Shared across repositories instead of living on a base type; it is the
/// only commit behavior they have in common.
pub(crate) async fn commit_or_log(tx: Transaction<'_, Sqlite>) -> bool {
    match tx.commit().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Commit failed, staged changes discarded");
            false
        }
    }
}
