//! Interactive confirmation prompts

use crate::error::CliError;
use std::io::Write;

/// Ask a yes/no question on stdin; anything but `y` declines
pub fn confirm(question: &str) -> Result<bool, CliError> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim() == "y")
}
