//! Shared test utilities for generator and command tests.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::db::SnapshotCatalog;
use crate::fixtures;

/// Catalog built from the storefront fixture.
pub fn fixture_catalog() -> SnapshotCatalog {
    SnapshotCatalog::from_json_str(fixtures::SHOP_CATALOG).expect("Fixture catalog should parse")
}

/// Write the storefront fixture to a temporary `.json` file.
///
/// Used where a catalog location is needed, e.g. `--db` for command tests.
pub fn fixture_catalog_file() -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(fixtures::SHOP_CATALOG.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}
