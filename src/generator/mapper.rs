//! Catalog type name to target-language type spelling.

use super::language::LanguageProfile;

/// What to emit for a declared type that matches none of the mapping rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// `str # <declared>` for every language, regardless of its own
    /// fallback spelling or comment syntax.
    #[default]
    Reference,
    /// The language's own fallback type followed by its own comment marker.
    Native,
}

/// A mapped field type.
///
/// `comment` is a complete comment (marker included) that belongs after the
/// field terminator, so it never swallows a `;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    pub spelling: String,
    pub comment: Option<String>,
}

impl MappedType {
    fn plain(spelling: impl Into<String>) -> Self {
        Self {
            spelling: spelling.into(),
            comment: None,
        }
    }
}

/// Map a declared catalog type to a type spelling for `profile`.
///
/// Rules are tried in order and the first match wins; matching ignores case.
/// This never fails: unknown types fall through to the fallback spelling
/// with the declared type preserved as an inline comment.
///
/// Under `FallbackPolicy::Reference` the `# <declared>` part is part of the
/// spelling itself, so a field suffix still lands after it.
pub fn map_type(
    declared_type: &str,
    profile: &LanguageProfile,
    fallback: FallbackPolicy,
) -> MappedType {
    let t = declared_type.to_ascii_lowercase();
    let types = &profile.types;

    let mapped = if t.contains("int") {
        types.integer
    } else if t.starts_with("float") || t == "numeric" {
        types.float
    } else if t == "jsonb" || t == "json" {
        types.json
    } else if t == "vector" || t == "array" {
        types.array
    } else if t == "bytea" {
        types.binary
    } else if t.contains("char") || t.contains("text") || t == "uuid" {
        types.string
    } else if t == "bool" {
        types.boolean
    } else if t == "void" {
        types.void
    } else if t == "time" || t == "timez" {
        types.time
    } else if t.contains("timestamp") {
        types.timestamp
    } else {
        return match fallback {
            FallbackPolicy::Reference => MappedType::plain(format!("str # {}", declared_type)),
            FallbackPolicy::Native => MappedType {
                spelling: types.fallback.to_string(),
                comment: Some(profile.comment.line(declared_type)),
            },
        };
    };

    MappedType::plain(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::language::{Language, GO, PYTHON, TYPESCRIPT};
    use rstest::rstest;

    fn reference(t: &str, profile: &LanguageProfile) -> String {
        let mapped = map_type(t, profile, FallbackPolicy::Reference);
        assert_eq!(mapped.comment, None);
        mapped.spelling
    }

    #[rstest]
    #[case("int4", "number")]
    #[case("int8", "number")]
    #[case("bigint", "number")]
    #[case("float8", "number")]
    #[case("numeric", "number")]
    #[case("jsonb", "Json")]
    #[case("json", "Json")]
    #[case("vector", "unknown[]")]
    #[case("array", "unknown[]")]
    #[case("bytea", "string")]
    #[case("varchar", "string")]
    #[case("character varying", "string")]
    #[case("text", "string")]
    #[case("uuid", "string")]
    #[case("bool", "boolean")]
    #[case("void", "void")]
    #[case("time", "string")]
    #[case("timez", "string")]
    #[case("timestamp", "Date")]
    #[case("timestamptz", "Date")]
    fn test_typescript_mapping(#[case] declared: &str, #[case] expected: &str) {
        assert_eq!(reference(declared, &TYPESCRIPT), expected);
    }

    #[rstest]
    #[case("INT4", "int64")]
    #[case("Float4", "float64")]
    #[case("JSONB", "json.RawMessage")]
    #[case("UUID", "string")]
    #[case("TIMESTAMP", "time.Time")]
    fn test_matching_ignores_case(#[case] declared: &str, #[case] expected: &str) {
        assert_eq!(reference(declared, &GO), expected);
    }

    #[rstest]
    fn test_int_rule_wins_over_later_rules() {
        // "interval" and "point" both contain "int"
        assert_eq!(reference("interval", &PYTHON), "int");
        assert_eq!(reference("point", &PYTHON), "int");
    }

    #[rstest]
    fn test_char_rule_wins_over_bool() {
        assert_eq!(reference("bpchar", &GO), "string");
    }

    #[rstest]
    #[case("date")]
    #[case("boolean")]
    #[case("timetz")]
    #[case("double precision")]
    #[case("inet")]
    #[case("money")]
    fn test_reference_fallback_is_language_invariant(#[case] declared: &str) {
        for lang in Language::ALL {
            assert_eq!(
                reference(declared, lang.profile()),
                format!("str # {}", declared),
                "fallback for {} in {}",
                declared,
                lang
            );
        }
    }

    #[rstest]
    fn test_reference_fallback_keeps_original_case() {
        assert_eq!(reference("Money", &GO), "str # Money");
    }

    #[rstest]
    fn test_native_fallback_uses_profile() {
        assert_eq!(
            map_type("date", &GO, FallbackPolicy::Native),
            MappedType {
                spelling: "interface{}".to_string(),
                comment: Some("// date".to_string()),
            }
        );
        assert_eq!(
            map_type("date", &PYTHON, FallbackPolicy::Native),
            MappedType {
                spelling: "Any".to_string(),
                comment: Some("# date".to_string()),
            }
        );
    }

    #[rstest]
    fn test_native_policy_leaves_known_types_alone() {
        assert_eq!(
            map_type("text", &GO, FallbackPolicy::Native),
            MappedType::plain("string")
        );
    }
}
