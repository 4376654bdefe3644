//! Line-oriented REPL over the address book.
//!
//! The loop reads one line at a time, dispatches it through
//! [`crate::commands::execute`], and prints the reply. The reader and
//! writer are generic so a test can run a whole session over in-memory
//! buffers. The book is constructed by the caller and passed in; the REPL
//! holds no global state.

use crate::book::AddressBook;
use crate::commands::{execute, Command};
use std::io::{BufRead, Write};
use tracing::debug;

const GREETING: &str = "Hello! This is your address book.";
const PROMPT_HINT: &str = "Enter a command (type 'hello' for a list of commands):";

/// Run the REPL until `exit` or end of input.
///
/// Every reply, including error messages for bad input, goes to `output`;
/// nothing a user types can make this return early other than `exit`.
///
/// # Errors
///
/// Only I/O failures on the reader or writer surface as errors.
pub fn run<R, W>(book: &mut AddressBook, input: R, mut output: W) -> std::io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", GREETING)?;
    writeln!(output, "{}", PROMPT_HINT)?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match Command::parse(trimmed) {
            Some((Command::Exit, args)) if args.is_empty() => {
                writeln!(output, "{}", execute(Command::Exit, args, book))?;
                break;
            }
            Some((command, args)) => {
                writeln!(output, "{}", execute(command, args, book))?;
            }
            None => {
                let word = trimmed
                    .split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .to_lowercase();
                debug!(%word, "unknown command");
                writeln!(
                    output,
                    "Unknown command '{}'. Type 'hello' for a list of commands.",
                    word
                )?;
            }
        }
    }

    Ok(())
}
