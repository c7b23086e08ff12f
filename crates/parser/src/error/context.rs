//! Error context for rich diagnostics.

use text_size::TextRange;

/// Context information for an error.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// The input name, e.g. a query file (if available)
    pub filename: Option<String>,
    /// The query text
    pub source: String,
    /// The error location
    pub span: TextRange,
}

impl ErrorContext {
    /// Create a new error context.
    pub fn new(source: String, span: TextRange) -> Self {
        ErrorContext {
            filename: None,
            source,
            span,
        }
    }

    /// Set the filename.
    pub fn with_filename(mut self, filename: String) -> Self {
        self.filename = Some(filename);
        self
    }

    fn start(&self) -> usize {
        usize::from(self.span.start()).min(self.source.len())
    }

    fn end(&self) -> usize {
        usize::from(self.span.end()).clamp(self.start(), self.source.len())
    }

    /// Get the line and column number for the error, both 1-based.
    pub fn line_and_column(&self) -> (usize, usize) {
        let start = self.start();
        let line = self.source[..start].chars().filter(|&c| c == '\n').count() + 1;
        let line_start = self.source[..start].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let col = self.source[line_start..start].chars().count() + 1;
        (line, col)
    }

    /// Get the line containing the error.
    pub fn error_line(&self) -> &str {
        let start = self.start();
        let end = self.end();

        let line_start = self.source[..start].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let line_end = self.source[end..]
            .find('\n')
            .map(|i| end + i)
            .unwrap_or(self.source.len());

        &self.source[line_start..line_end]
    }

    /// Get the offending text, trimmed.
    pub fn error_text(&self) -> &str {
        self.source[self.start()..self.end()].trim()
    }

    /// Get context lines around the error.
    pub fn context_lines(&self, num_lines: usize) -> Vec<(usize, String)> {
        let start = self.start();
        let lines: Vec<&str> = self.source.lines().collect();
        let error_line_num = self.source[..start].chars().filter(|&c| c == '\n').count();

        let start_line = error_line_num.saturating_sub(num_lines);
        let end_line = (error_line_num + num_lines + 1).min(lines.len());

        lines
            .get(start_line..end_line)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(i, line)| (start_line + i + 1, line.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use text_size::TextSize;

    fn span(start: u32, end: u32) -> TextRange {
        TextRange::new(TextSize::from(start), TextSize::from(end))
    }

    #[test]
    fn line_and_column_on_second_line() {
        let context = ErrorContext::new("SELECT din1\nFROM nowhere".to_string(), span(17, 24));
        assert_eq!(context.line_and_column(), (2, 6));
        assert_eq!(context.error_line(), "FROM nowhere");
        assert_eq!(context.error_text(), "nowhere");
    }

    #[test]
    fn eof_span_is_clamped() {
        let source = "SELECT din1 FROM";
        let context = ErrorContext::new(source.to_string(), span(16, 16));
        assert_eq!(context.line_and_column(), (1, 17));
        assert_eq!(context.error_text(), "");
        assert_eq!(context.context_lines(2), vec![(1, source.to_string())]);
    }
}
