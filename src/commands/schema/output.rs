//! Output formatting for schema command results.

use super::execute::SchemaResult;
use crate::output::Outputable;

impl Outputable for SchemaResult {
    fn to_text(&self) -> String {
        self.types.to_source()
    }
}
