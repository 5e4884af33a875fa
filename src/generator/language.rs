//! Language registry.
//!
//! Each supported target language resolves to exactly one immutable
//! [`LanguageProfile`]. Adding a language means adding a `Language` variant
//! and its profile constant; the generators never branch on the language.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::GenerateError;

/// Supported target languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Go,
    Swift,
    Dart,
    TypeScript,
}

impl Language {
    /// Every registered language, in registry order.
    pub const ALL: [Language; 5] = [
        Language::Python,
        Language::Go,
        Language::Swift,
        Language::Dart,
        Language::TypeScript,
    ];

    /// Canonical identifier used on the command line and in JSON output.
    pub fn id(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Go => "go",
            Language::Swift => "swift",
            Language::Dart => "dart",
            Language::TypeScript => "typescript",
        }
    }

    pub fn profile(self) -> &'static LanguageProfile {
        match self {
            Language::Python => &PYTHON,
            Language::Go => &GO,
            Language::Swift => &SWIFT,
            Language::Dart => &DART,
            Language::TypeScript => &TYPESCRIPT,
        }
    }

    /// Short alternative identifiers accepted by `from_str`.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Language::Python => &["py"],
            Language::Go => &["golang"],
            Language::Swift => &[],
            Language::Dart => &[],
            Language::TypeScript => &["ts"],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Language {
    type Err = GenerateError;

    /// Resolve an identifier (case-insensitive, short aliases accepted).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.id() == wanted || lang.aliases().contains(&wanted.as_str()))
            .ok_or_else(|| GenerateError::UnknownLanguage {
                name: s.to_string(),
            })
    }
}

/// Primitive type spellings for one language.
#[derive(Debug, Serialize)]
pub struct TypeSpellings {
    pub integer: &'static str,
    pub float: &'static str,
    pub boolean: &'static str,
    pub json: &'static str,
    pub array: &'static str,
    pub binary: &'static str,
    pub string: &'static str,
    pub void: &'static str,
    pub time: &'static str,
    pub timestamp: &'static str,
    pub fallback: &'static str,
}

/// How a single-line comment is written.
#[derive(Debug, Serialize)]
pub struct CommentStyle {
    pub marker: &'static str,
}

impl CommentStyle {
    pub fn line(&self, text: &str) -> String {
        format!("{} {}", self.marker, text)
    }
}

/// How a `name: type` field line is decorated.
#[derive(Debug, Serialize)]
pub struct FieldStyle {
    pub indent: &'static str,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

/// One piece of a body template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Slot {
    Text(&'static str),
    Name,
    Fields,
}

/// A class/struct template with named slots for the type name and the
/// rendered field blocks.
///
/// Filling is structural: slot values are never rescanned, so a column
/// or table named like a placeholder comes through verbatim.
#[derive(Debug, Serialize)]
pub struct BodyTemplate {
    pub segments: &'static [Slot],
}

impl BodyTemplate {
    pub fn render(&self, name: &str, fields: &str) -> String {
        let mut out = String::new();
        for segment in self.segments {
            match segment {
                Slot::Text(text) => out.push_str(text),
                Slot::Name => out.push_str(name),
                Slot::Fields => out.push_str(fields),
            }
        }
        out
    }

    pub fn has_slot(&self, slot: Slot) -> bool {
        self.segments.contains(&slot)
    }
}

/// Immutable per-language configuration.
#[derive(Debug, Serialize)]
pub struct LanguageProfile {
    pub types: TypeSpellings,
    pub comment: CommentStyle,
    pub field: FieldStyle,
    pub body: BodyTemplate,
    /// Emitted once before all types of a schema run.
    pub preamble: Option<&'static str>,
}

pub static PYTHON: LanguageProfile = LanguageProfile {
    types: TypeSpellings {
        integer: "int",
        float: "float",
        boolean: "bool",
        json: "dict",
        array: "list",
        binary: "bytes",
        string: "str",
        void: "None",
        time: "datetime.time",
        timestamp: "datetime.datetime",
        fallback: "Any",
    },
    comment: CommentStyle { marker: "#" },
    field: FieldStyle {
        indent: "    ",
        prefix: "",
        suffix: "",
    },
    body: BodyTemplate {
        segments: &[Slot::Text("class "), Slot::Name, Slot::Text(":\n"), Slot::Fields],
    },
    preamble: None,
};

pub static GO: LanguageProfile = LanguageProfile {
    types: TypeSpellings {
        integer: "int64",
        float: "float64",
        boolean: "bool",
        json: "json.RawMessage",
        array: "[]interface{}",
        binary: "[]byte",
        string: "string",
        void: "struct{}",
        time: "time.Time",
        timestamp: "time.Time",
        fallback: "interface{}",
    },
    comment: CommentStyle { marker: "//" },
    field: FieldStyle {
        indent: "\t",
        prefix: "",
        suffix: "",
    },
    body: BodyTemplate {
        segments: &[
            Slot::Text("type "),
            Slot::Name,
            Slot::Text(" struct {\n"),
            Slot::Fields,
            Slot::Text("\n}"),
        ],
    },
    preamble: None,
};

pub static SWIFT: LanguageProfile = LanguageProfile {
    types: TypeSpellings {
        integer: "Int",
        float: "Double",
        boolean: "Bool",
        json: "[String: Any]",
        array: "[Any]",
        binary: "Data",
        string: "String",
        void: "Void",
        time: "Date",
        timestamp: "Date",
        fallback: "Any",
    },
    comment: CommentStyle { marker: "//" },
    field: FieldStyle {
        indent: "    ",
        prefix: "var ",
        suffix: "",
    },
    body: BodyTemplate {
        segments: &[
            Slot::Text("struct "),
            Slot::Name,
            Slot::Text(" {\n"),
            Slot::Fields,
            Slot::Text("\n}"),
        ],
    },
    preamble: None,
};

pub static DART: LanguageProfile = LanguageProfile {
    types: TypeSpellings {
        integer: "int",
        float: "double",
        boolean: "bool",
        json: "Map<String, dynamic>",
        array: "List<dynamic>",
        binary: "Uint8List",
        string: "String",
        void: "void",
        time: "DateTime",
        timestamp: "DateTime",
        fallback: "dynamic",
    },
    comment: CommentStyle { marker: "//" },
    field: FieldStyle {
        indent: "  ",
        prefix: "",
        suffix: ";",
    },
    body: BodyTemplate {
        segments: &[
            Slot::Text("class "),
            Slot::Name,
            Slot::Text(" {\n"),
            Slot::Fields,
            Slot::Text("\n}"),
        ],
    },
    preamble: None,
};

pub static TYPESCRIPT: LanguageProfile = LanguageProfile {
    types: TypeSpellings {
        integer: "number",
        float: "number",
        boolean: "boolean",
        json: "Json",
        array: "unknown[]",
        binary: "string",
        string: "string",
        void: "void",
        time: "string",
        timestamp: "Date",
        fallback: "unknown",
    },
    comment: CommentStyle { marker: "//" },
    field: FieldStyle {
        indent: "  ",
        prefix: "",
        suffix: ";",
    },
    body: BodyTemplate {
        segments: &[
            Slot::Text("type "),
            Slot::Name,
            Slot::Text(" = {\n"),
            Slot::Fields,
            Slot::Text("\n};"),
        ],
    },
    preamble: Some(
        "type Json = string | number | boolean | null | { [key: string]: Json | undefined } | Json[];",
    ),
};
