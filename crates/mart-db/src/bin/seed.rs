//! # Seed Data Generator
//!
//! Populates a fresh database with the deterministic demo fixtures from
//! `mart-core`: two locations, two products, and eight stock rows (every
//! location×product pair twice).
//!
//! ## Usage
//! ```bash
//! # Seed the default development database
//! cargo run -p mart-db --bin seed
//!
//! # Specify database path
//! cargo run -p mart-db --bin seed -- --db ./data/mart.db
//! ```

use std::env;

use mart_core::seed;
use mart_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./mart_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Mart Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./mart_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Mart Seed Data Generator");
    println!("========================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("Connected to database, migrations applied");

    // Refuse to reseed a non-empty store
    let existing = db.locations().count().await? + db.products().count().await?;
    if existing > 0 {
        println!("Database already has data, skipping seed.");
        println!("Delete the database file to regenerate.");
        return Ok(());
    }

    // Insert entities first; the join rows reference their assigned ids.
    println!();
    println!("Seeding locations and products...");

    let mut locations = Vec::new();
    for location in seed::locations() {
        locations.push(db.locations().insert(&location).await?);
    }

    let mut products = Vec::new();
    for product in seed::products() {
        products.push(db.products().insert(&product).await?);
    }

    println!("  {} locations, {} products", locations.len(), products.len());

    // Stock rows: the full cross-product, each pair twice.
    println!("Seeding stock rows...");

    let rows = seed::stock_rows(&locations, &products);
    for row in &rows {
        let location = locations
            .iter()
            .find(|l| l.id == row.location_id)
            .expect("fixture references a seeded location");
        let product = products
            .iter()
            .find(|p| p.id == row.product_id)
            .expect("fixture references a seeded product");

        if !db.locations().add_product(location, product).await {
            return Err(format!(
                "failed to stock product {} at location {}",
                product.name, location.name
            )
            .into());
        }
    }

    println!("  {} stock rows", rows.len());

    // Verify the join surface
    println!();
    println!("Verifying inventory queries...");
    for product in &products {
        let stockists = db.locations().find_stocking(product).await?;
        println!("  '{}' stocked at {} locations", product.name, stockists.len());
    }

    println!();
    println!("Seed complete!");

    Ok(())
}
