//! Test fixtures.
//!
//! Catalog snapshots loaded at compile time using `include_str!`.
//!
//! ## Available Fixtures
//!
//! - [`SHOP_CATALOG`] - A small storefront catalog across two schemas
//!
//! ## Usage
//!
//! ```ignore
//! use crate::test_utils::fixture_catalog;
//!
//! let catalog = fixture_catalog();
//! ```

/// Storefront catalog.
///
/// Contains:
/// - schema `public`: users, orders, products, line_items, audit_marker
///   (listed deliberately out of alphabetical order)
/// - schema `billing`: invoices, referencing `public.orders`
/// - one column per mapping rule in `products`, an enum column falling
///   back in `orders.status`, and a table with no columns
pub const SHOP_CATALOG: &str = include_str!("shop_catalog.json");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_catalog_is_valid_json() {
        let _: serde_json::Value = serde_json::from_str(SHOP_CATALOG)
            .expect("SHOP_CATALOG should be valid JSON");
    }
}
