//! Error formatting and display.

use super::config::ErrorConfig;
use super::diagnostic::Diagnostic;
use owo_colors::OwoColorize;

/// Formatter for diagnostic messages.
pub struct DiagnosticFormatter {
    config: ErrorConfig,
}

impl DiagnosticFormatter {
    /// Create a new formatter with the given configuration.
    pub fn new(config: ErrorConfig) -> Self {
        DiagnosticFormatter { config }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> String) -> String {
        if self.config.use_colors {
            style(text)
        } else {
            text.to_string()
        }
    }

    /// Format a diagnostic for display.
    pub fn format(&self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();
        let bar = self.paint("|", |t| t.blue().to_string());

        // Header (Error: SyntaxError [E2001]: Unexpected token)
        let label = self.paint("Error", |t| t.bold().red().to_string());
        let error_type = diagnostic.error_type.as_deref().unwrap_or("Error");
        output.push_str(&format!(
            "{}: {}",
            label,
            self.paint(error_type, |t| t.bold().to_string())
        ));
        if let Some(code) = diagnostic.code.filter(|_| self.config.show_codes) {
            output.push_str(&format!(
                " [{}]",
                self.paint(&code.to_string(), |t| t.dimmed().to_string())
            ));
        }
        if let Some(title) = &diagnostic.title {
            output.push_str(&format!(": {}", title));
        }
        output.push('\n');

        output.push_str(&format!("  {}\n", bar));
        output.push_str(&format!(
            "  {} {}: {}\n",
            bar,
            self.paint("Message", |t| t.white().bold().to_string()),
            diagnostic.message
        ));

        if self.config.show_context
            && let Some(context) = &diagnostic.context
        {
            let (line, col) = context.line_and_column();
            output.push_str(&format!("  {}\n", bar));

            let location_str = if let Some(filename) = &context.filename {
                format!("{}:{}:{}", filename, line, col)
            } else {
                format!("line {}:{}", line, col)
            };
            output.push_str(&format!(
                "  +--> {}: {}\n",
                self.paint("Location", |t| t.cyan().bold().to_string()),
                location_str
            ));
            output.push_str(&format!("  {}\n", bar));

            for (line_num, line_text) in context.context_lines(self.config.context_lines) {
                if line_num != line {
                    output.push_str(&format!(
                        "  |{:5} | {}\n",
                        line_num,
                        self.paint(&line_text, |t| t.dimmed().to_string())
                    ));
                    continue;
                }

                output.push_str(&format!("  |{:5} | {}\n", line_num, line_text));

                let length = context.error_text().chars().count().max(1);
                output.push_str(&format!(
                    "  |      | {}{}\n",
                    " ".repeat(col - 1),
                    self.paint(&"^".repeat(length), |t| t.bright_yellow().bold().to_string())
                ));

                let error_text = context.error_text();
                let here = if error_text.is_empty() {
                    "Error at this location".to_string()
                } else {
                    format!("Error at '{}'", error_text)
                };
                output.push_str(&format!(
                    "  |      +-- {}: {}\n",
                    self.paint("Here", |t| t.bright_yellow().bold().to_string()),
                    here
                ));
            }

            output.push_str(&format!("  {}\n", bar));
        }

        if let Some(suggestion) = &diagnostic.suggestion {
            output.push_str(&format!(
                "  +--> {}: {}\n",
                self.paint("Suggestion", |t| t.green().bold().to_string()),
                suggestion
            ));
        }

        output
    }
}

impl Default for DiagnosticFormatter {
    fn default() -> Self {
        Self::new(ErrorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorCode, ErrorContext};
    use text_size::{TextRange, TextSize};

    #[test]
    fn plain_format_points_at_offending_text() {
        let source = "SELECT foo FROM board";
        let span = TextRange::new(TextSize::from(7), TextSize::from(10));
        let diagnostic = Diagnostic::new("Unknown column 'foo'".to_string())
            .with_code(ErrorCode::E3001)
            .with_error_type("SemanticError".to_string())
            .with_suggestion("did you mean 'din0'?".to_string())
            .with_context(ErrorContext::new(source.to_string(), span));

        let formatter = DiagnosticFormatter::new(ErrorConfig::new().without_colors());
        let output = formatter.format(&diagnostic);

        assert!(output.starts_with("Error: SemanticError [E3001]\n"));
        assert!(output.contains("Message: Unknown column 'foo'"));
        assert!(output.contains("Location: line 1:8"));
        assert!(output.contains("  |      |        ^^^\n"));
        assert!(output.contains("Here: Error at 'foo'"));
        assert!(output.contains("Suggestion: did you mean 'din0'?"));
    }

    #[test]
    fn minimal_format_has_no_context() {
        let diagnostic = Diagnostic::new("No output file".to_string())
            .with_code(ErrorCode::E4002)
            .with_error_type("BackendError".to_string());

        let output = DiagnosticFormatter::new(ErrorConfig::minimal()).format(&diagnostic);
        assert_eq!(
            output,
            "Error: BackendError [E4002]\n  |\n  | Message: No output file\n"
        );
    }

    #[test]
    fn title_follows_code_in_header() {
        let diagnostic = Diagnostic::new("Unexpected token ')'".to_string())
            .with_code(ErrorCode::E2007)
            .with_error_type("SyntaxError".to_string())
            .with_title("Unmatched closing parenthesis".to_string());

        let output = DiagnosticFormatter::new(ErrorConfig::minimal()).format(&diagnostic);
        assert!(output.starts_with("Error: SyntaxError [E2007]: Unmatched closing parenthesis\n"));

        let config = ErrorConfig {
            show_codes: false,
            ..ErrorConfig::minimal()
        };
        let output = DiagnosticFormatter::new(config).format(&diagnostic);
        assert!(output.starts_with("Error: SyntaxError: Unmatched closing parenthesis\n"));
    }
}
