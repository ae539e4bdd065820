//! `paytable`: print what each winning hand pays at a given bet.

use crate::error::CliError;
use crate::formatters::format_paytable;
use std::io::Write;

pub fn handle_paytable_command(bet: u8, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "Pay table (bet {})", bet)?;
    for line in format_paytable(bet) {
        writeln!(out, "  {}", line)?;
    }
    Ok(())
}
