//! Output formatting for languages command results.

use super::execute::LanguagesResult;
use crate::output::Outputable;

impl Outputable for LanguagesResult {
    fn to_text(&self) -> String {
        let mut lines = Vec::new();

        for (i, lang) in self.languages.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }

            if lang.aliases.is_empty() {
                lines.push(lang.id.to_string());
            } else {
                lines.push(format!("{} ({})", lang.id, lang.aliases.join(", ")));
            }

            let t = &lang.profile.types;
            let rows = [
                ("integer", t.integer),
                ("float", t.float),
                ("boolean", t.boolean),
                ("json", t.json),
                ("array", t.array),
                ("binary", t.binary),
                ("string", t.string),
                ("void", t.void),
                ("time", t.time),
                ("timestamp", t.timestamp),
                ("fallback", t.fallback),
                ("comment", lang.profile.comment.marker),
                ("preamble", lang.profile.preamble.unwrap_or("-")),
            ];
            for (label, value) in rows {
                lines.push(format!("  {:<10} {}", label, value));
            }
        }

        lines.join("\n")
    }
}
