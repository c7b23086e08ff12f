//! Error codes for query diagnostics.

/// Stable error codes.
///
/// E1xxx are lexical, E2xxx syntax, E3xxx semantic and E4xxx backend errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // ===== Lexical Errors (E1xxx) =====
    E1001, // Invalid character
    E1003, // Invalid number literal

    // ===== Syntax Errors (E2xxx) =====
    E2001, // Unexpected token
    E2003, // Unexpected end of query
    E2006, // Unclosed delimiter
    E2007, // Unmatched closing delimiter
    E2009, // Expected condition

    // ===== Semantic Errors (E3xxx) =====
    E3001, // Unknown column
    E3002, // Unknown target
    E3003, // Unsupported expression

    // ===== Backend Errors (E4xxx) =====
    E4001, // Unknown target at generation time
    E4002, // No output path
    E4003, // Output file exists
    E4004, // Nothing generated
    E4005, // I/O failure
}

impl ErrorCode {
    /// Get the numeric code.
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::E1001 => 1001,
            ErrorCode::E1003 => 1003,

            ErrorCode::E2001 => 2001,
            ErrorCode::E2003 => 2003,
            ErrorCode::E2006 => 2006,
            ErrorCode::E2007 => 2007,
            ErrorCode::E2009 => 2009,

            ErrorCode::E3001 => 3001,
            ErrorCode::E3002 => 3002,
            ErrorCode::E3003 => 3003,

            ErrorCode::E4001 => 4001,
            ErrorCode::E4002 => 4002,
            ErrorCode::E4003 => 4003,
            ErrorCode::E4004 => 4004,
            ErrorCode::E4005 => 4005,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
