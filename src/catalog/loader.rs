//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading a venue
//! catalog from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PackageRecord, PackagesConfig, RoomRecord, RoomsConfig, VenueRecord};

/// Loads and provides access to a venue catalog.
///
/// The `CatalogLoader` reads YAML catalog files from a directory and
/// serves room and package lookups for quote requests.
///
/// # Directory Structure
///
/// The catalog directory should have the following structure:
/// ```text
/// demo-catalog/
/// ├── venue.yaml     # Venue metadata (name, currency)
/// ├── rooms.yaml     # Rooms with base pricing and pricing rules
/// └── packages.yaml  # Add-on packages with eligibility bounds
/// ```
///
/// # Example
///
/// ```no_run
/// use pricing_engine::catalog::CatalogLoader;
///
/// let catalog = CatalogLoader::load("./demo-catalog").unwrap();
///
/// let room = catalog.get_room("room_saal").unwrap();
/// println!("Room: {}", room.name);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    venue: VenueRecord,
    rooms: Vec<RoomRecord>,
    packages: Vec<PackageRecord>,
}

impl CatalogLoader {
    /// Loads a catalog from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the catalog directory (e.g., "./demo-catalog")
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CatalogNotFound`] when a required file is
    /// missing and [`EngineError::CatalogParseError`] when a file contains
    /// invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let venue = Self::load_yaml::<VenueRecord>(&path.join("venue.yaml"))?;
        let rooms_config = Self::load_yaml::<RoomsConfig>(&path.join("rooms.yaml"))?;
        let packages_config = Self::load_yaml::<PackagesConfig>(&path.join("packages.yaml"))?;

        Ok(Self {
            venue,
            rooms: rooms_config.rooms,
            packages: packages_config.packages,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::CatalogNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::CatalogParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the venue metadata.
    pub fn venue(&self) -> &VenueRecord {
        &self.venue
    }

    /// Gets a room record by its ID.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RoomNotFound`] when no room carries the ID.
    pub fn get_room(&self, id: &str) -> EngineResult<&RoomRecord> {
        self.rooms
            .iter()
            .find(|room| room.id == id)
            .ok_or_else(|| EngineError::RoomNotFound { id: id.to_string() })
    }

    /// Gets a package record by its ID.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PackageNotFound`] when no package carries
    /// the ID.
    pub fn get_package(&self, id: &str) -> EngineResult<&PackageRecord> {
        self.packages
            .iter()
            .find(|package| package.id == id)
            .ok_or_else(|| EngineError::PackageNotFound { id: id.to_string() })
    }

    /// Returns all room records.
    pub fn rooms(&self) -> &[RoomRecord] {
        &self.rooms
    }

    /// Returns all package records.
    pub fn packages(&self) -> &[PackageRecord] {
        &self.packages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_demo_catalog() -> CatalogLoader {
        CatalogLoader::load("./demo-catalog").expect("Failed to load demo catalog")
    }

    #[test]
    fn test_load_demo_catalog() {
        let catalog = load_demo_catalog();
        assert_eq!(catalog.venue().currency, "EUR");
        assert!(!catalog.rooms().is_empty());
        assert!(!catalog.packages().is_empty());
    }

    #[test]
    fn test_get_room_by_id() {
        let catalog = load_demo_catalog();
        let room = catalog.get_room("room_saal").unwrap();
        assert_eq!(room.id, "room_saal");
    }

    #[test]
    fn test_get_unknown_room_fails() {
        let catalog = load_demo_catalog();
        let err = catalog.get_room("room_999").unwrap_err();
        assert!(matches!(
            err,
            EngineError::RoomNotFound { id } if id == "room_999"
        ));
    }

    #[test]
    fn test_get_package_by_id() {
        let catalog = load_demo_catalog();
        let package = catalog.get_package("pkg_catering").unwrap();
        assert_eq!(package.id, "pkg_catering");
    }

    #[test]
    fn test_get_unknown_package_fails() {
        let catalog = load_demo_catalog();
        let err = catalog.get_package("pkg_999").unwrap_err();
        assert!(matches!(err, EngineError::PackageNotFound { .. }));
    }

    #[test]
    fn test_missing_directory_fails_with_catalog_not_found() {
        let err = CatalogLoader::load("./no-such-catalog").unwrap_err();
        assert!(matches!(err, EngineError::CatalogNotFound { .. }));
    }

    #[test]
    fn test_all_demo_rooms_convert_cleanly() {
        // Every record in the shipped catalog must pass the conversion
        // boundary, otherwise quoting would fail at request time.
        let catalog = load_demo_catalog();
        for room in catalog.rooms() {
            room.to_booking_room(false).unwrap();
        }
        for package in catalog.packages() {
            package.to_booking_package().unwrap();
        }
    }
}
