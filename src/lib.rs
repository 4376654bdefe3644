//! Rolodex - a line-oriented address book REPL.
//!
//! Stores contacts (name, phone numbers, optional birthday) in memory,
//! supports add/edit/search/list commands, and computes days until the
//! next birthday.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (name, phone, birthday)
//! - **models**: the `Record` contact model
//! - **book**: the `AddressBook` store with search and paginated listing
//! - **commands**: one handler per REPL command, plus the error boundary
//! - **repl**: the line loop over generic reader/writer
//! - **storage**: JSON save/load contract over the book
//! - **config**: environment-driven settings
//! - **error**: error types for commands, config, and storage

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use book::AddressBook;
pub use commands::Command;
pub use config::Config;
pub use error::{CommandError, ConfigError, StorageError};
pub use models::Record;
