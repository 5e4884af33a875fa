//! Execute tests for table command.

#[cfg(test)]
mod tests {
    use super::super::TableCmd;
    use crate::commands::GenerateArgs;
    use crate::generator::Language;
    use rstest::{fixture, rstest};

    crate::session_fixture! {
        fixture_name: session,
        schema: "public",
    }

    fn cmd(table: &str, lang: &str) -> TableCmd {
        TableCmd {
            table: table.to_string(),
            generate: GenerateArgs {
                lang: lang.to_string(),
                native_fallback: false,
            },
        }
    }

    crate::execute_test! {
        test_name: test_table_typescript,
        fixture: session,
        cmd: cmd("users", "typescript"),
        assertions: |result| {
            assert_eq!(result.language, Language::TypeScript);
            assert_eq!(result.schema, "public");
            assert_eq!(result.type_name, "Users");
            assert!(result.source.contains("  // default value: now()\n  created_at: Date;"));
        },
    }

    crate::execute_test! {
        test_name: test_table_qualified_name,
        fixture: session,
        cmd: cmd("billing.invoices", "python"),
        assertions: |result| {
            assert_eq!(result.schema, "billing");
            assert_eq!(result.table, "invoices");
            assert!(result.source.starts_with("class Invoices:"));
        },
    }

    crate::execute_test! {
        test_name: test_table_language_alias,
        fixture: session,
        cmd: cmd("orders", "golang"),
        assertions: |result| {
            assert_eq!(result.language, Language::Go);
            assert!(result.source.starts_with("type Orders struct {"));
        },
    }

    crate::execute_test! {
        test_name: test_table_native_fallback,
        fixture: session,
        cmd: TableCmd {
            table: "orders".to_string(),
            generate: GenerateArgs {
                lang: "dart".to_string(),
                native_fallback: true,
            },
        },
        assertions: |result| {
            assert!(result.source.contains("  status: dynamic; // order_status"));
        },
    }

    crate::execute_error_test! {
        test_name: test_table_unknown_language,
        fixture: session,
        cmd: cmd("users", "cobol"),
        contains: "Unknown language 'cobol'",
    }

    crate::execute_error_test! {
        test_name: test_table_missing,
        fixture: session,
        cmd: cmd("ghosts", "go"),
        contains: "'public.ghosts' does not exist",
    }

    #[rstest]
    fn test_table_text_output_is_source(session: crate::commands::Session) {
        use crate::commands::Execute;
        use crate::output::{OutputFormat, Outputable};

        let result = cmd("users", "swift").execute(&session).unwrap();
        assert_eq!(result.format(OutputFormat::Text), result.source);
        let json: serde_json::Value =
            serde_json::from_str(&result.format(OutputFormat::Json)).unwrap();
        assert_eq!(json["language"], "swift");
        assert_eq!(json["type_name"], "Users");
    }
}
