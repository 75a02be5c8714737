//! # Location Repository
//!
//! Database operations for locations, including the inventory surface: the
//! Location↔Product stocking join.
//!
//! ## Stock Slots
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    The Stocking Join                                    │
//! │                                                                         │
//! │  locations            location_products            products            │
//! │  ┌──────────┐         ┌────────────────┐          ┌──────────┐         │
//! │  │ 1 Downtown│◄───────│ id  loc  prod  │─────────►│ 1 Cola   │         │
//! │  │ 2 Riverside│       │  1    1     1  │          │ 2 Trail  │         │
//! │  └──────────┘         │  2    1     1  │ ← same   └──────────┘         │
//! │                       │  3    1     2  │   pair,                       │
//! │                       │  ...           │   two slots                   │
//! │                       └────────────────┘                               │
//! │                                                                         │
//! │  Duplicate (location, product) pairs are allowed: each row is one      │
//! │  stock slot. add_product always inserts a new slot; remove_product     │
//! │  frees exactly one.                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Surface
//! Reads return `DbResult` and propagate typed errors. Inventory mutations
//! return a bare `bool`: each one stages its changes on a single
//! transaction and reports only whether the commit went through. A `false`
//! never distinguishes "nothing to remove" from a storage failure; callers
//! must treat it as "assume no state change occurred".

use std::collections::{hash_map::Entry, HashMap, VecDeque};

use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::DbResult;
use crate::repository::commit_or_log;
use mart_core::{Location, Product};

/// Repository for location database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.locations();
///
/// let downtown = repo.get_by_name("Downtown").await?;
/// let ok = repo.add_product(&downtown.unwrap(), &cola).await;
/// ```
#[derive(Debug, Clone)]
pub struct LocationRepository {
    pool: SqlitePool,
}

impl LocationRepository {
    /// Creates a new LocationRepository.
    pub fn new(pool: SqlitePool) -> Self {
        LocationRepository { pool }
    }

    // =========================================================================
    // Location CRUD
    // =========================================================================

    /// Inserts a new location.
    ///
    /// ## Returns
    /// * `Ok(Location)` - Inserted location with its storage-assigned id
    /// * `Err(DbError::UniqueViolation)` - Name already exists
    pub async fn insert(&self, location: &Location) -> DbResult<Location> {
        debug!(name = %location.name, "Inserting location");

        let result = sqlx::query(
            r#"
            INSERT INTO locations (name, address, created_at)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&location.name)
        .bind(&location.address)
        .bind(location.created_at)
        .execute(&self.pool)
        .await?;

        Ok(Location {
            id: result.last_insert_rowid(),
            ..location.clone()
        })
    }

    /// Gets a location by its id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Location>> {
        let location = sqlx::query_as::<_, Location>(
            r#"
            SELECT id, name, address, created_at
            FROM locations
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(location)
    }

    /// Gets a location by its name.
    ///
    /// Names are unique (enforced by the schema), so an exact match is
    /// either a single row or nothing.
    ///
    /// ## Returns
    /// * `Ok(Some(Location))` - Location found
    /// * `Ok(None)` - No location with that name
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Location>> {
        let location = sqlx::query_as::<_, Location>(
            r#"
            SELECT id, name, address, created_at
            FROM locations
            WHERE name = ?1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(location)
    }

    /// Lists all locations, sorted by name.
    pub async fn list(&self) -> DbResult<Vec<Location>> {
        let locations = sqlx::query_as::<_, Location>(
            r#"
            SELECT id, name, address, created_at
            FROM locations
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(locations)
    }

    /// Counts locations (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM locations")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    // =========================================================================
    // Inventory Surface
    // =========================================================================

    /// Finds every location where a product is in stock.
    ///
    /// Distinct by location identity: a location with several stock slots
    /// for the product appears once.
    pub async fn find_stocking(&self, product: &Product) -> DbResult<Vec<Location>> {
        debug!(product_id = product.id, "Finding locations stocking product");

        let locations = sqlx::query_as::<_, Location>(
            r#"
            SELECT DISTINCT l.id, l.name, l.address, l.created_at
            FROM locations l
            INNER JOIN location_products lp ON lp.location_id = l.id
            WHERE lp.product_id = ?1
            ORDER BY l.id
            "#,
        )
        .bind(product.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(locations)
    }

    /// Adds a product to a location's inventory.
    ///
    /// Always inserts a new stock row, even if an identical
    /// (location, product) pair already exists.
    ///
    /// ## Returns
    /// `true` if the row was committed, `false` on any persistence failure
    /// (e.g. a foreign key violation when either entity does not exist).
    pub async fn add_product(&self, location: &Location, product: &Product) -> bool {
        debug!(
            location_id = location.id,
            product_id = product.id,
            "Stocking product at location"
        );

        let mut tx = match self.pool.begin().await {
            Ok(tx) => tx,
            Err(e) => {
                warn!(error = %e, "Failed to open transaction");
                return false;
            }
        };

        if let Err(e) = sqlx::query(
            r#"
            INSERT INTO location_products (location_id, product_id)
            VALUES (?1, ?2)
            "#,
        )
        .bind(location.id)
        .bind(product.id)
        .execute(&mut *tx)
        .await
        {
            warn!(error = %e, "Failed to stage stock row");
            return false;
        }

        commit_or_log(tx).await
    }

    /// Removes a product from a location's inventory.
    ///
    /// Exactly one stock row is removed per call. When several rows match,
    /// the one with the lowest id goes first (stable selection, so repeated
    /// calls drain slots oldest-first).
    ///
    /// ## Returns
    /// * `true` - One row was removed and committed
    /// * `false` - No matching row, or the commit failed
    pub async fn remove_product(&self, location: &Location, product: &Product) -> bool {
        debug!(
            location_id = location.id,
            product_id = product.id,
            "Removing product from location"
        );

        let row_id: Option<i64> = match sqlx::query_scalar(
            r#"
            SELECT id FROM location_products
            WHERE location_id = ?1 AND product_id = ?2
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(location.id)
        .bind(product.id)
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row_id) => row_id,
            Err(e) => {
                warn!(error = %e, "Failed to look up stock row");
                return false;
            }
        };

        // Nothing to remove: storage untouched.
        let Some(row_id) = row_id else {
            return false;
        };

        let mut tx = match self.pool.begin().await {
            Ok(tx) => tx,
            Err(e) => {
                warn!(error = %e, "Failed to open transaction");
                return false;
            }
        };

        if let Err(e) = sqlx::query("DELETE FROM location_products WHERE id = ?1")
            .bind(row_id)
            .execute(&mut *tx)
            .await
        {
            warn!(error = %e, "Failed to stage stock row removal");
            return false;
        }

        commit_or_log(tx).await
    }

    /// Adds a batch of products to a location's inventory.
    ///
    /// One new stock row per product, staged in a single transaction and
    /// committed once: either every row persists or none do. An empty
    /// batch stages nothing but still commits.
    pub async fn add_products(&self, location: &Location, products: &[Product]) -> bool {
        debug!(
            location_id = location.id,
            count = products.len(),
            "Stocking product batch at location"
        );

        let mut tx = match self.pool.begin().await {
            Ok(tx) => tx,
            Err(e) => {
                warn!(error = %e, "Failed to open transaction");
                return false;
            }
        };

        for product in products {
            if let Err(e) = sqlx::query(
                r#"
                INSERT INTO location_products (location_id, product_id)
                VALUES (?1, ?2)
                "#,
            )
            .bind(location.id)
            .bind(product.id)
            .execute(&mut *tx)
            .await
            {
                warn!(error = %e, product_id = product.id, "Failed to stage stock row");
                return false;
            }
        }

        commit_or_log(tx).await
    }

    /// Removes a batch of products from a location's inventory.
    ///
    /// At most one stock row is selected per product in the batch, and a
    /// row is never selected twice: when the batch names the same product
    /// more than once, each occurrence consumes the next-lowest remaining
    /// slot. Products with no remaining slot are skipped.
    ///
    /// ## Returns
    /// * `true` - At least one row was selected and the commit succeeded
    /// * `false` - No rows matched any product, or the commit failed
    pub async fn remove_products(&self, location: &Location, products: &[Product]) -> bool {
        debug!(
            location_id = location.id,
            count = products.len(),
            "Removing product batch from location"
        );

        // Matching slot ids per product, fetched once and consumed
        // front-to-back so no row is ever chosen twice.
        let mut slots: HashMap<i64, VecDeque<i64>> = HashMap::new();
        let mut chosen: Vec<i64> = Vec::new();

        for product in products {
            let queue = match slots.entry(product.id) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let ids: Vec<i64> = match sqlx::query_scalar(
                        r#"
                        SELECT id FROM location_products
                        WHERE location_id = ?1 AND product_id = ?2
                        ORDER BY id
                        "#,
                    )
                    .bind(location.id)
                    .bind(product.id)
                    .fetch_all(&self.pool)
                    .await
                    {
                        Ok(ids) => ids,
                        Err(e) => {
                            warn!(error = %e, "Failed to look up stock rows");
                            return false;
                        }
                    };
                    entry.insert(ids.into())
                }
            };

            if let Some(id) = queue.pop_front() {
                chosen.push(id);
            }
        }

        // Nothing matched anywhere: storage untouched.
        if chosen.is_empty() {
            return false;
        }

        let mut tx = match self.pool.begin().await {
            Ok(tx) => tx,
            Err(e) => {
                warn!(error = %e, "Failed to open transaction");
                return false;
            }
        };

        for id in &chosen {
            if let Err(e) = sqlx::query("DELETE FROM location_products WHERE id = ?1")
                .bind(id)
                .execute(&mut *tx)
                .await
            {
                warn!(error = %e, row_id = id, "Failed to stage stock row removal");
                return false;
            }
        }

        commit_or_log(tx).await
    }

    /// Counts stock rows across all locations (for diagnostics and tests).
    pub async fn stock_count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM location_products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
