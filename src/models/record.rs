//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};

/// One contact: a name, an ordered list of phone numbers, and an optional
/// birthday.
///
/// The name is the record's immutable identity. Phones keep insertion
/// order and may contain duplicates; edits and removals act on the first
/// value match. Every phone that enters a record goes through
/// [`PhoneNumber::new`], so the list never holds an invalid number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for an empty name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The contact's phones in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number. Duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `value` is malformed.
    pub fn add_phone(&mut self, value: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(value)?);
        Ok(())
    }

    /// Remove the first phone whose value equals `value`.
    ///
    /// Returns whether a removal occurred.
    pub fn remove_phone(&mut self, value: &str) -> bool {
        match self.phones.iter().position(|p| p == value) {
            Some(idx) => {
                self.phones.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// Returns `Ok(true)` if a phone was edited, `Ok(false)` if `old` is
    /// not present (the list is left unchanged).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new` is malformed; the
    /// list is left unchanged in that case as well.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let replacement = PhoneNumber::new(new)?;
        match self.phones.iter().position(|p| p == old) {
            Some(idx) => {
                self.phones[idx] = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Set or replace the contact's birthday from `YYYY-MM-DD` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the text is malformed.
    pub fn set_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    /// Days until the next birthday, or `None` if no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.birthday.as_ref().map(Birthday::days_to_birthday)
    }

    /// One-line listing form: `Name: phone1, phone2`.
    pub fn summary(&self) -> String {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        format!("{}: {}", self.name, phones.join(", "))
    }
}
