//! Output formatting for table command results.

use super::execute::TableResult;
use crate::output::Outputable;

impl Outputable for TableResult {
    fn to_text(&self) -> String {
        self.source.clone()
    }
}
