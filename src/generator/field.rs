//! Rendering of a single column into its field block.

use super::capitalize_first;
use super::language::LanguageProfile;
use super::mapper::{map_type, FallbackPolicy};
use crate::types::{ColumnDescriptor, ForeignKeyEdge};

/// Comment text describing one foreign-key edge.
pub fn foreign_key_comment(edge: &ForeignKeyEdge) -> String {
    format!(
        "{}.{} references {}.{}",
        capitalize_first(&edge.source_table),
        edge.constraint_name,
        capitalize_first(&edge.target_table),
        edge.target_column
    )
}

/// Render one column as a field block.
///
/// The block is one comment line per foreign-key edge (in edge order), then
/// a default-value comment if the column has a default, then the field line.
/// Every line carries the profile's field indent.
pub fn render_field(
    column: &ColumnDescriptor,
    profile: &LanguageProfile,
    fallback: FallbackPolicy,
) -> String {
    let indent = profile.field.indent;
    let mut lines = Vec::with_capacity(column.foreign_keys.len() + 2);

    for edge in &column.foreign_keys {
        lines.push(format!(
            "{}{}",
            indent,
            profile.comment.line(&foreign_key_comment(edge))
        ));
    }

    if let Some(default) = &column.default_expression {
        // Multi-line expressions get the marker on every line
        let text = format!("default value: {}", default);
        for part in text.lines() {
            lines.push(format!("{}{}", indent, profile.comment.line(part)));
        }
    }

    let mapped = map_type(&column.declared_type, profile, fallback);
    let mut field = format!(
        "{}{}{}: {}{}",
        indent, profile.field.prefix, column.column_name, mapped.spelling, profile.field.suffix
    );
    if let Some(comment) = mapped.comment {
        field.push(' ');
        field.push_str(&comment);
    }
    lines.push(field);

    lines.join("\n")
}
