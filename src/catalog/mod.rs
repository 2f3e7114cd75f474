//! Venue catalog loading and record conversion.
//!
//! This module loads the persisted venue catalog (rooms, packages, venue
//! metadata) from YAML files and converts its records into the plain
//! value objects the calculation core consumes. The conversion methods
//! are the only place raw tags and IDs are interpreted.
//!
//! # Example
//!
//! ```no_run
//! use pricing_engine::catalog::CatalogLoader;
//!
//! let catalog = CatalogLoader::load("./demo-catalog").unwrap();
//! println!("Loaded venue: {}", catalog.venue().name);
//! ```

mod loader;
mod types;

pub use loader::CatalogLoader;
pub use types::{
    PackageRecord, PackagesConfig, PricingRuleRecord, RoomRecord, RoomsConfig, VenueRecord,
};
