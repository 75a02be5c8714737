//! Integration tests for the inventory surface: location lookups plus the
//! Location↔Product stocking join.
//!
//! Every test runs against a fresh in-memory database with migrations
//! applied. Most use the deterministic fixtures from `mart_core::seed`:
//! two locations, two products, eight stock rows (every pair twice).

use mart_core::seed;
use mart_core::{Location, Product};
use mart_db::{Database, DbConfig, DbError};

/// Fresh, empty in-memory database.
async fn empty_db() -> Database {
    Database::new(DbConfig::in_memory())
        .await
        .expect("in-memory database")
}

/// In-memory database populated with the seed fixtures.
///
/// Returns the inserted locations and products with their
/// storage-assigned ids.
async fn seeded_db() -> (Database, Vec<Location>, Vec<Product>) {
    let db = empty_db().await;

    let mut locations = Vec::new();
    for location in seed::locations() {
        locations.push(db.locations().insert(&location).await.unwrap());
    }

    let mut products = Vec::new();
    for product in seed::products() {
        products.push(db.products().insert(&product).await.unwrap());
    }

    for row in seed::stock_rows(&locations, &products) {
        let location = locations.iter().find(|l| l.id == row.location_id).unwrap();
        let product = products.iter().find(|p| p.id == row.product_id).unwrap();
        assert!(db.locations().add_product(location, product).await);
    }

    (db, locations, products)
}

fn ids(locations: &[Location]) -> Vec<i64> {
    let mut ids: Vec<i64> = locations.iter().map(|l| l.id).collect();
    ids.sort_unstable();
    ids
}

// =============================================================================
// Lookups
// =============================================================================

#[tokio::test]
async fn get_by_name_returns_the_matching_location() {
    let (db, locations, _) = seeded_db().await;

    let found = db.locations().get_by_name("Downtown").await.unwrap();
    assert_eq!(found, Some(locations[0].clone()));
}

#[tokio::test]
async fn get_by_name_returns_none_for_absent_name() {
    let (db, _, _) = seeded_db().await;

    let found = db.locations().get_by_name("Nowhere").await.unwrap();
    assert_eq!(found, None);
}

#[tokio::test]
async fn duplicate_location_name_is_a_unique_violation() {
    let (db, locations, _) = seeded_db().await;

    let err = db.locations().insert(&locations[0]).await.unwrap_err();
    assert!(matches!(err, DbError::UniqueViolation { .. }));
}

#[tokio::test]
async fn find_stocking_is_distinct_per_location() {
    let (db, locations, products) = seeded_db().await;

    // Each location holds two slots for each product; every location must
    // still appear exactly once.
    for product in &products {
        let stockists = db.locations().find_stocking(product).await.unwrap();
        assert_eq!(ids(&stockists), ids(&locations));
    }
}

#[tokio::test]
async fn find_stocking_is_empty_for_unstocked_product() {
    let (db, _, _) = seeded_db().await;

    let lonely = db
        .products()
        .insert(&Product {
            id: 0,
            name: "Kale Chips 50g".to_string(),
            price_cents: 349,
            created_at: chrono::Utc::now(),
        })
        .await
        .unwrap();

    let stockists = db.locations().find_stocking(&lonely).await.unwrap();
    assert!(stockists.is_empty());
}

// =============================================================================
// Single add / remove
// =============================================================================

#[tokio::test]
async fn add_product_makes_the_location_a_stockist() {
    let (db, locations, products) = seeded_db().await;

    let aisle = db
        .products()
        .insert(&Product {
            id: 0,
            name: "Sparkling Water 1L".to_string(),
            price_cents: 129,
            created_at: chrono::Utc::now(),
        })
        .await
        .unwrap();

    assert!(db.locations().add_product(&locations[0], &aisle).await);

    let stockists = db.locations().find_stocking(&aisle).await.unwrap();
    assert_eq!(ids(&stockists), vec![locations[0].id]);

    // Unrelated product unaffected.
    let others = db.locations().find_stocking(&products[0]).await.unwrap();
    assert_eq!(ids(&others), ids(&locations));
}

#[tokio::test]
async fn add_product_always_creates_a_new_slot() {
    let (db, locations, products) = seeded_db().await;
    let before = db.locations().stock_count().await.unwrap();

    // The pair already exists twice; a third slot is still inserted.
    assert!(db.locations().add_product(&locations[0], &products[0]).await);

    let after = db.locations().stock_count().await.unwrap();
    assert_eq!(after, before + 1);
}

#[tokio::test]
async fn add_product_fails_for_unknown_product() {
    let (db, locations, products) = seeded_db().await;
    let before = db.locations().stock_count().await.unwrap();

    let ghost = Product {
        id: 9999,
        ..products[0].clone()
    };

    // Foreign keys are enforced: nothing is persisted.
    assert!(!db.locations().add_product(&locations[0], &ghost).await);
    assert_eq!(db.locations().stock_count().await.unwrap(), before);
}

#[tokio::test]
async fn remove_product_without_a_match_leaves_storage_unchanged() {
    let (db, locations, _) = seeded_db().await;
    let before = db.locations().stock_count().await.unwrap();

    let unstocked = db
        .products()
        .insert(&Product {
            id: 0,
            name: "Umbrella".to_string(),
            price_cents: 999,
            created_at: chrono::Utc::now(),
        })
        .await
        .unwrap();

    assert!(!db.locations().remove_product(&locations[0], &unstocked).await);
    assert_eq!(db.locations().stock_count().await.unwrap(), before);
}

#[tokio::test]
async fn remove_product_drains_one_slot_per_call() {
    let (db, locations, products) = seeded_db().await;
    let (downtown, cola) = (&locations[0], &products[0]);

    // Two slots seeded for (Downtown, Cola).
    assert!(db.locations().remove_product(downtown, cola).await);
    assert!(db.locations().remove_product(downtown, cola).await);
    assert!(!db.locations().remove_product(downtown, cola).await);
}

#[tokio::test]
async fn removing_one_duplicate_slot_keeps_the_location_a_stockist() {
    let (db, locations, products) = seeded_db().await;
    let (downtown, cola) = (&locations[0], &products[0]);
    let before = db.locations().stock_count().await.unwrap();

    // One of the two (Downtown, Cola) slots goes away...
    assert!(db.locations().remove_product(downtown, cola).await);
    assert_eq!(db.locations().stock_count().await.unwrap(), before - 1);

    // ...but the other still makes Downtown a stockist.
    let stockists = db.locations().find_stocking(cola).await.unwrap();
    assert_eq!(ids(&stockists), ids(&locations));
}

// =============================================================================
// Batch add / remove
// =============================================================================

#[tokio::test]
async fn add_products_inserts_one_slot_per_product() {
    let (db, locations, products) = seeded_db().await;
    let before = db.locations().stock_count().await.unwrap();

    let batch: Vec<Product> = products.clone();
    assert!(db.locations().add_products(&locations[1], &batch).await);
    assert_eq!(
        db.locations().stock_count().await.unwrap(),
        before + batch.len() as i64
    );
}

#[tokio::test]
async fn add_products_with_empty_batch_commits_a_no_op() {
    let (db, locations, _) = seeded_db().await;
    let before = db.locations().stock_count().await.unwrap();

    assert!(db.locations().add_products(&locations[0], &[]).await);
    assert_eq!(db.locations().stock_count().await.unwrap(), before);
}

#[tokio::test]
async fn add_products_is_atomic_when_one_row_is_invalid() {
    let (db, locations, products) = seeded_db().await;
    let before = db.locations().stock_count().await.unwrap();

    let ghost = Product {
        id: 9999,
        ..products[0].clone()
    };
    let batch = vec![products[0].clone(), ghost, products[1].clone()];

    // The middle row violates the foreign key; no row may survive.
    assert!(!db.locations().add_products(&locations[0], &batch).await);
    assert_eq!(db.locations().stock_count().await.unwrap(), before);
}

#[tokio::test]
async fn remove_products_round_trips_with_add_products() {
    let db = empty_db().await;

    let shop = db
        .locations()
        .insert(&seed::locations()[0])
        .await
        .unwrap();
    let mut batch = Vec::new();
    for product in seed::products() {
        batch.push(db.products().insert(&product).await.unwrap());
    }

    assert!(db.locations().add_products(&shop, &batch).await);
    assert_eq!(db.locations().stock_count().await.unwrap(), 2);

    assert!(db.locations().remove_products(&shop, &batch).await);
    assert_eq!(db.locations().stock_count().await.unwrap(), 0);

    // Nothing left to remove: storage untouched, no commit.
    assert!(!db.locations().remove_products(&shop, &batch).await);
}

#[tokio::test]
async fn remove_products_never_selects_the_same_slot_twice() {
    let (db, locations, products) = seeded_db().await;
    let (downtown, cola) = (&locations[0], &products[0]);

    // Two slots for (Downtown, Cola); naming the product twice must
    // consume both slots, one each.
    let batch = vec![cola.clone(), cola.clone()];
    assert!(db.locations().remove_products(downtown, &batch).await);
    assert!(!db.locations().remove_product(downtown, cola).await);
}

#[tokio::test]
async fn remove_products_skips_products_with_no_remaining_slot() {
    let (db, locations, products) = seeded_db().await;
    let (downtown, cola) = (&locations[0], &products[0]);
    let before = db.locations().stock_count().await.unwrap();

    // Three requests against two slots: the third is skipped.
    let batch = vec![cola.clone(), cola.clone(), cola.clone()];
    assert!(db.locations().remove_products(downtown, &batch).await);
    assert_eq!(db.locations().stock_count().await.unwrap(), before - 2);
}

// =============================================================================
// Seed fixtures end-to-end
// =============================================================================

#[tokio::test]
async fn seeded_store_matches_the_fixture_shape() {
    let (db, locations, products) = seeded_db().await;

    assert_eq!(db.locations().count().await.unwrap(), 2);
    assert_eq!(db.products().count().await.unwrap(), 2);
    assert_eq!(db.locations().stock_count().await.unwrap(), 8);

    // Fresh-store AUTOINCREMENT hands out the fixture ids.
    assert_eq!(ids(&locations), vec![1, 2]);
    assert_eq!(
        {
            let mut p: Vec<i64> = products.iter().map(|p| p.id).collect();
            p.sort_unstable();
            p
        },
        vec![1, 2]
    );
}
