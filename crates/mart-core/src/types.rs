//! # Domain Types
//!
//! Core domain types for the Mart inventory layer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Location     │   │     Product     │   │ LocationProduct │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (i64)       │   │  id (i64)       │       │
//! │  │  name (unique)  │   │  name           │   │  location_id FK │       │
//! │  │  address        │   │  price_cents    │   │  product_id  FK │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity carries a storage-assigned integer surrogate key. Foreign
//! keys are plain ids, never embedded entity values: lookups go through the
//! repositories in mart-db, which keeps the object graph acyclic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Location
// =============================================================================

/// A store location.
///
/// The `name` column is unique and doubles as the business identifier used
/// for lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Location {
    /// Surrogate key, assigned by storage on insert.
    pub id: i64,

    /// Unique display name (e.g. "Downtown").
    pub name: String,

    /// Optional street address.
    pub address: Option<String>,

    /// When the location was created.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Product
// =============================================================================

/// A sellable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Surrogate key, assigned by storage on insert.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// When the product was created.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Location-Product Join
// =============================================================================

/// One stocking association between a [`Location`] and a [`Product`].
///
/// Pure data: a surrogate key plus the two foreign keys. Duplicate
/// (location_id, product_id) pairs are permitted, each row modelling one
/// stock slot. Removing a product from a location removes one slot, not
/// all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct LocationProduct {
    /// Surrogate key, assigned by storage on insert.
    pub id: i64,

    /// [`Location`] foreign key.
    pub location_id: i64,

    /// [`Product`] foreign key.
    pub product_id: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_product_is_plain_data() {
        let row = LocationProduct {
            id: 7,
            location_id: 1,
            product_id: 2,
        };
        assert_eq!(row.id, 7);
        assert_eq!(row.location_id, 1);
        assert_eq!(row.product_id, 2);
    }

    #[test]
    fn test_duplicate_pairs_compare_by_value() {
        // Two slots for the same pair differ only by surrogate key.
        let a = LocationProduct { id: 1, location_id: 1, product_id: 1 };
        let b = LocationProduct { id: 2, location_id: 1, product_id: 1 };
        assert_ne!(a, b);
        assert_eq!(a.location_id, b.location_id);
        assert_eq!(a.product_id, b.product_id);
    }
}
