//! # Seed Fixtures
//!
//! Deterministic demo data for populating a fresh store.
//!
//! The fixtures are intentionally tiny: two locations, two products, and
//! the full location×product cross-product with every pair appearing twice
//! (eight stock rows). Duplicated pairs exercise the "stock slot" model,
//! where the same product can occupy more than one slot at a location.
//!
//! Only the `seed` binary and tests consume this module; it is not part of
//! the runtime query surface.

use chrono::{DateTime, TimeZone, Utc};

use crate::types::{Location, LocationProduct, Product};

/// Number of times each (location, product) pair is duplicated in the
/// stock fixtures.
pub const SLOTS_PER_PAIR: usize = 2;

/// Fixed timestamp for all fixture rows, so repeated seeding of fresh
/// stores produces byte-identical data.
fn seeded_at() -> DateTime<Utc> {
    // 2020-01-01T00:00:00Z
    Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
}

/// Fixture locations with sequential ids starting at 1.
pub fn locations() -> Vec<Location> {
    let created_at = seeded_at();
    vec![
        Location {
            id: 1,
            name: "Downtown".to_string(),
            address: Some("100 Main St".to_string()),
            created_at,
        },
        Location {
            id: 2,
            name: "Riverside".to_string(),
            address: Some("2 Quay Rd".to_string()),
            created_at,
        },
    ]
}

/// Fixture products with sequential ids starting at 1.
pub fn products() -> Vec<Product> {
    let created_at = seeded_at();
    vec![
        Product {
            id: 1,
            name: "Cola 330ml".to_string(),
            price_cents: 199,
            created_at,
        },
        Product {
            id: 2,
            name: "Trail Mix 200g".to_string(),
            price_cents: 449,
            created_at,
        },
    ]
}

/// Builds the stock fixtures for the given locations and products.
///
/// Row ids are assigned sequentially starting at 1, walking the
/// location×product cross-product in order and emitting each pair
/// [`SLOTS_PER_PAIR`] times. For the default fixtures this yields:
///
/// ```text
/// id 1: (Downtown,  Cola)      id 5: (Riverside, Cola)
/// id 2: (Downtown,  Cola)      id 6: (Riverside, Cola)
/// id 3: (Downtown,  Trail Mix) id 7: (Riverside, Trail Mix)
/// id 4: (Downtown,  Trail Mix) id 8: (Riverside, Trail Mix)
/// ```
///
/// The ids are valid only against a fresh store, where AUTOINCREMENT hands
/// out the same sequence.
pub fn stock_rows(locations: &[Location], products: &[Product]) -> Vec<LocationProduct> {
    let mut rows = Vec::with_capacity(locations.len() * products.len() * SLOTS_PER_PAIR);
    let mut next_id = 1;
    for location in locations {
        for product in products {
            for _ in 0..SLOTS_PER_PAIR {
                rows.push(LocationProduct {
                    id: next_id,
                    location_id: location.id,
                    product_id: product.id,
                });
                next_id += 1;
            }
        }
    }
    rows
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_deterministic() {
        assert_eq!(locations(), locations());
        assert_eq!(products(), products());
        assert_eq!(
            stock_rows(&locations(), &products()),
            stock_rows(&locations(), &products())
        );
    }

    #[test]
    fn test_stock_rows_cover_cross_product_twice() {
        let rows = stock_rows(&locations(), &products());
        assert_eq!(rows.len(), 8);

        // Sequential ids from 1.
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.id, i as i64 + 1);
        }

        // Every pair appears exactly SLOTS_PER_PAIR times.
        for location in locations() {
            for product in products() {
                let slots = rows
                    .iter()
                    .filter(|r| r.location_id == location.id && r.product_id == product.id)
                    .count();
                assert_eq!(slots, SLOTS_PER_PAIR);
            }
        }
    }

    #[test]
    fn test_location_names_are_unique() {
        let names: Vec<_> = locations().into_iter().map(|l| l.name).collect();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }
}
