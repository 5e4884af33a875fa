//! Declarative macros for generating CLI parsing and execute tests.
//!
//! Instead of writing repetitive test functions, you can declare the test cases
//! and let the macro generate the actual test code.

/// Generate a single CLI option test.
#[macro_export]
macro_rules! cli_option_test {
    (
        command: $cmd:literal,
        variant: $variant:ident,
        test_name: $test_name:ident,
        args: [$($arg:literal),+],
        field: $field:ident,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let args = Args::try_parse_from([
                "schema_types",
                $cmd,
                $($arg),+
            ]).unwrap();
            match args.command {
                crate::commands::Command::$variant(cmd) => {
                    assert_eq!(cmd.$field, $expected,
                        concat!("Field ", stringify!($field), " mismatch"));
                }
                _ => panic!(concat!("Expected ", stringify!($variant), " command")),
            }
        }
    };
}

/// Generate a test that verifies a command requires a specific argument.
///
/// # Example
///
/// ```ignore
/// cli_required_arg_test! {
///     command: "schema",
///     test_name: test_requires_lang,
///     required_arg: "--lang",
/// }
/// ```
#[macro_export]
macro_rules! cli_required_arg_test {
    (
        command: $cmd:literal,
        test_name: $test_name:ident,
        required_arg: $arg:literal $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from(["schema_types", $cmd]);
            assert!(result.is_err(), concat!("Command should require ", $arg));
            assert!(
                result.unwrap_err().to_string().contains($arg),
                concat!("Error should mention ", $arg)
            );
        }
    };
}

/// Generate a test that verifies parsing fails with specific invalid args.
#[macro_export]
macro_rules! cli_error_test {
    (
        command: $cmd:literal,
        test_name: $test_name:ident,
        args: [$($arg:literal),+] $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from([
                "schema_types",
                $cmd,
                $($arg),+
            ]);
            assert!(result.is_err());
        }
    };
}

// =============================================================================
// Execute Test Macros
// =============================================================================

/// Generate a fixture providing a session over the storefront catalog.
#[macro_export]
macro_rules! session_fixture {
    (
        fixture_name: $name:ident,
        schema: $schema:literal $(,)?
    ) => {
        #[fixture]
        fn $name() -> crate::commands::Session {
            crate::commands::Session::with_catalog(
                Box::new(crate::test_utils::fixture_catalog()),
                $schema,
            )
        }
    };
}

/// Generate a test that executes a command and runs assertions on its result.
///
/// # Example
///
/// ```ignore
/// execute_test! {
///     test_name: test_users,
///     fixture: session,
///     cmd: TableCmd { .. },
///     assertions: |result| {
///         assert_eq!(result.type_name, "Users");
///     },
/// }
/// ```
#[macro_export]
macro_rules! execute_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        cmd: $cmd:expr,
        assertions: |$result:ident| $body:block $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: crate::commands::Session) {
            use crate::commands::Execute;
            let $result = $cmd.execute(&$fixture).expect("Execute should succeed");
            $body
        }
    };
}

/// Generate a test that verifies command execution fails with a message.
#[macro_export]
macro_rules! execute_error_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        cmd: $cmd:expr,
        contains: $needle:literal $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: crate::commands::Session) {
            use crate::commands::Execute;
            let result = $cmd.execute(&$fixture);
            match result {
                Ok(_) => panic!("Execute should fail"),
                Err(e) => assert!(
                    e.to_string().contains($needle),
                    "Error '{}' should contain '{}'",
                    e,
                    $needle
                ),
            }
        }
    };
}
