//! schema_types library - type declarations from relational catalogs
//!
//! Reads table metadata from a PostgreSQL catalog (or a JSON snapshot of
//! one) and renders struct/class declarations for Python, Go, Swift, Dart
//! and TypeScript.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod generator;
pub mod output;
pub mod types;

pub use generator::{generate_schema_types, generate_table_type, GenerateError, Language};

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod fixtures;

#[cfg(test)]
pub mod test_utils;
