//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface output
//! across CLI commands, including error messages and warnings.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_applied() {
        let mut buf = Vec::new();
        write_error(&mut buf, "boom").unwrap();
        display_warning(&mut buf, "careful").unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Error: boom\nWARNING: careful\n"
        );
    }
}
