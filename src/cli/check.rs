//! Parse a query and render its IR

use super::CliError;
use crate::{ParseOptions, Parser, output};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The query text
    pub query: String,
    /// Pretty-print the output
    pub pretty: bool,
    /// Only validate syntax, don't print the IR
    pub syntax_only: bool,
    /// Parser configuration
    pub parse: ParseOptions,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// The IR as JSON text
    Success(String),
}

/// Execute a check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    if options.query.trim().is_empty() {
        return Err(CliError::NoInput);
    }

    let query = Parser::with_options(&options.query, options.parse).parse()?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let json = if options.pretty {
        output::to_json_pretty(&query)
    } else {
        output::to_json(&query)
    };
    Ok(CheckResult::Success(json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_only_reports_valid() {
        let options = CheckOptions {
            query: "FOR u IN users LIMIT 10".to_string(),
            syntax_only: true,
            ..Default::default()
        };
        assert!(matches!(execute_check(&options), Ok(CheckResult::SyntaxValid)));
    }

    #[test]
    fn renders_compact_json() {
        let options = CheckOptions {
            query: "FOR s IN sessions".to_string(),
            ..Default::default()
        };
        match execute_check(&options) {
            Ok(CheckResult::Success(json)) => {
                assert!(json.contains("\"ForStatement\""));
                assert!(!json.contains('\n'));
            }
            other => panic!("Expected JSON output, got {:?}", other),
        }
    }

    #[test]
    fn empty_query_is_rejected() {
        let options = CheckOptions {
            query: "   ".to_string(),
            ..Default::default()
        };
        assert!(matches!(execute_check(&options), Err(CliError::NoInput)));
    }

    #[test]
    fn parse_errors_surface() {
        let options = CheckOptions {
            query: "FOR".to_string(),
            ..Default::default()
        };
        let err = execute_check(&options).unwrap_err();
        assert!(err.to_string().starts_with("Parse error: Expected variable name"));
    }
}
