use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContactError {
    #[error("Let us know who you are")]
    NameTooShort,

    #[error("Provide a valid email")]
    InvalidEmail,

    #[error("Phone number seems short")]
    PhoneTooShort,

    #[error("Phone number seems long")]
    PhoneTooLong,

    #[error("We need somewhere to deliver")]
    AddressTooShort,

    #[error("Address is a touch long")]
    AddressTooLong,

    #[error("Notes are too long (max 240 characters)")]
    NotesTooLong,
}

/// Raw checkout form input. Empty optional fields arrive as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub notes: String,
}

/// Validated contact details for an order.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutContact {
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: String,
    pub notes: Option<String>,
}

impl ContactForm {
    /// Validate the form, normalizing empty optional fields to absent.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`ContactError`].
    pub fn validate(self) -> Result<CheckoutContact, ContactError> {
        if self.name.chars().count() < 2 {
            return Err(ContactError::NameTooShort);
        }

        let email = if self.email.is_empty() {
            None
        } else if EMAIL_RE.is_match(&self.email) {
            Some(self.email)
        } else {
            return Err(ContactError::InvalidEmail);
        };

        let phone_len = self.phone.chars().count();
        if phone_len < 7 {
            return Err(ContactError::PhoneTooShort);
        }
        if phone_len > 32 {
            return Err(ContactError::PhoneTooLong);
        }

        let address_len = self.address.chars().count();
        if address_len < 5 {
            return Err(ContactError::AddressTooShort);
        }
        if address_len > 240 {
            return Err(ContactError::AddressTooLong);
        }

        if self.notes.chars().count() > 240 {
            return Err(ContactError::NotesTooLong);
        }
        let notes = if self.notes.is_empty() {
            None
        } else {
            Some(self.notes)
        };

        Ok(CheckoutContact {
            name: self.name,
            email,
            phone: self.phone,
            address: self.address,
            notes,
        })
    }
}
