//! Input helpers shared by interactive commands.

use std::io::BufRead;

/// Read one line from `stdin`, trimmed.
///
/// Returns `Ok(None)` on EOF. Read failures (including input that is not
/// valid UTF-8) are returned to the caller instead of being taken for EOF.
///
/// # Example
///
/// ```rust
/// use jacks_cli::io_utils::read_stdin_line;
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("  hold 1 2 \n");
/// assert_eq!(read_stdin_line(&mut input).unwrap(), Some("hold 1 2".to_string()));
/// assert_eq!(read_stdin_line(&mut input).unwrap(), None);
///
/// let mut garbage = Cursor::new(vec![0xff, 0xfe, b'\n']);
/// assert!(read_stdin_line(&mut garbage).is_err());
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
