//! REPL command handlers.
//!
//! One handler per command, each a function from (argument text, address
//! book) to a reply string or a [`CommandError`]. The [`execute`] wrapper
//! is the error boundary: it converts every error kind into the reply
//! string itself, so bad input can never crash the REPL.

use crate::book::{AddressBook, DEFAULT_PAGE_SIZE};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use tracing::debug;

/// A recognized REPL command.
///
/// Command words are matched case-insensitively; `show all` is the one
/// two-word form. Unknown words are reported by the dispatch loop itself,
/// not through the error boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    ShowAll,
    Search,
    Birthday,
    Exit,
}

impl Command {
    /// Parse an input line into a command and its argument text.
    ///
    /// Returns `None` for blank lines and unrecognized command words.
    pub fn parse(line: &str) -> Option<(Self, &str)> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "search" => Self::Search,
            "birthday" => Self::Birthday,
            "exit" => Self::Exit,
            "show" => {
                // "show all" is matched as the literal two-word prefix.
                let mut rest_words = rest.split_whitespace();
                if rest_words.next().map(str::to_lowercase).as_deref() == Some("all") {
                    return Some((Self::ShowAll, ""));
                }
                return None;
            }
            _ => return None,
        };

        Some((command, rest))
    }
}

/// Run a command against the book, converting any error into the reply.
pub fn execute(command: Command, args: &str, book: &mut AddressBook) -> String {
    debug!(?command, args, "dispatching command");
    let result = match command {
        Command::Hello => handle_hello(args),
        Command::Add => handle_add(args, book),
        Command::Change => handle_change(args, book),
        Command::Phone => handle_phone(args, book),
        Command::ShowAll => Ok(handle_show_all(book)),
        Command::Search => handle_search(args, book),
        Command::Birthday => handle_birthday(args, book),
        Command::Exit => handle_exit(args),
    };
    result.unwrap_or_else(|err| err.to_string())
}

/// `hello` - greeting. Takes no arguments.
pub fn handle_hello(args: &str) -> CommandResult<String> {
    let [] = exact_args(args, "hello takes no arguments")?;
    Ok("How can I help you?".to_string())
}

/// `add <name> <phone>` - create the contact if absent, append the phone.
pub fn handle_add(args: &str, book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = exact_args(args, "Please enter both name and phone number")?;

    if let Some(record) = book.get_mut(name) {
        record.add_phone(phone)?;
    } else {
        let mut record = Record::new(name)?;
        record.add_phone(phone)?;
        book.add_record(record);
    }

    Ok(format!("Added phone {} for contact {}", phone, name))
}

/// `change <name> <old> <new>` - replace an existing phone.
pub fn handle_change(args: &str, book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone] =
        exact_args(args, "Please enter name, old phone and new phone")?;

    let record = book
        .get_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound {
            name: name.to_string(),
        })?;

    if !record.edit_phone(old_phone, new_phone)? {
        return Err(CommandError::InvalidArguments(format!(
            "{} is not in {}'s phones",
            old_phone, name
        )));
    }

    Ok(format!(
        "Changed phone {} to {} for contact {}",
        old_phone, new_phone, name
    ))
}

/// `phone <name>` - list the contact's phones, one per line.
pub fn handle_phone(args: &str, book: &mut AddressBook) -> CommandResult<String> {
    let [name] = exact_args(args, "Please enter a contact name")?;

    let record = book.get(name).ok_or_else(|| CommandError::ContactNotFound {
        name: name.to_string(),
    })?;

    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    Ok(phones.join("\n"))
}

/// `show all` - every contact, in paged insertion-order blocks.
///
/// An empty book produces an empty string.
pub fn handle_show_all(book: &AddressBook) -> String {
    let pages: Vec<String> = book.pages(DEFAULT_PAGE_SIZE).collect();
    pages.join("\n")
}

/// `search <substring>` - contacts matching by name or phone substring.
pub fn handle_search(args: &str, book: &mut AddressBook) -> CommandResult<String> {
    let [query] = exact_args(args, "Please enter a search string")?;

    let results = book.search(query);
    if results.is_empty() {
        return Ok(format!("No matches found for '{}'", query));
    }

    let lines: Vec<String> = results.iter().map(|r| r.summary()).collect();
    Ok(lines.join("\n"))
}

/// `birthday` - contacts with a birthday set and their days-to-next.
/// Takes no arguments.
pub fn handle_birthday(args: &str, book: &AddressBook) -> CommandResult<String> {
    let [] = exact_args(args, "birthday takes no arguments")?;

    let lines: Vec<String> = book
        .records()
        .filter_map(|record| {
            record
                .days_to_birthday()
                .map(|days| format!("{}'s birthday is in {} days", record.name(), days))
        })
        .collect();

    if lines.is_empty() {
        Ok("No birthdays coming up".to_string())
    } else {
        Ok(lines.join("\n"))
    }
}

/// `exit` - farewell; the loop itself stops reading. Takes no arguments.
pub fn handle_exit(args: &str) -> CommandResult<String> {
    let [] = exact_args(args, "exit takes no arguments")?;
    Ok("Goodbye!".to_string())
}

/// Split argument text on whitespace into exactly `N` tokens.
///
/// Both too few and too many tokens fail with `message`, the
/// insufficient-arguments condition.
fn exact_args<'a, const N: usize>(args: &'a str, message: &str) -> CommandResult<[&'a str; N]> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    <[&str; N]>::try_from(tokens)
        .map_err(|_| CommandError::InvalidArguments(message.to_string()))
}
