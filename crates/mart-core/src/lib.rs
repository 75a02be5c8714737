//! # mart-core: Pure Domain Types for Mart
//!
//! This crate holds the domain model for the Mart inventory data-access
//! layer. It contains no I/O: only type definitions and deterministic seed
//! fixtures.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Mart Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Higher-level service (out of scope)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ mart-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────────────┐  ┌──────────────────────┐           │   │
//! │  │   │        types         │  │         seed         │           │   │
//! │  │   │ Location, Product,   │  │ deterministic demo   │           │   │
//! │  │   │ LocationProduct      │  │ fixtures             │           │   │
//! │  │   └──────────────────────┘  └──────────────────────┘           │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE DATA                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    mart-db (Database Layer)                     │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Location, Product, LocationProduct)
//! - [`seed`] - Deterministic fixtures for populating a fresh store

// =============================================================================
// Module Declarations
// =============================================================================

pub mod seed;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use mart_core::Location` instead of
// `use mart_core::types::Location`

pub use types::{Location, LocationProduct, Product};
