//! Contact form validation.
//!
//! Field-level validation for the test-drive contact form and the newsletter
//! signup. Validation returns per-field error messages keyed by field name so
//! the presentation layer can attach each message to its input.

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A submitted test-drive contact form, unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Model id the customer wants to test drive, if preselected.
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub message: String,
}

/// Per-field validation errors, keyed by field name in form order.
pub type FieldErrors = IndexMap<&'static str, String>;

/// Validator with compiled patterns for email and phone fields.
#[derive(Debug)]
pub struct FormValidator {
    /// Matches `local@domain.tld` with no whitespace in any part
    email_pattern: Regex,

    /// Matches an optional `+` then 1-16 digits, first digit nonzero
    phone_pattern: Regex,
}

impl FormValidator {
    /// Create a new FormValidator with compiled regex patterns.
    pub fn new() -> Self {
        Self {
            email_pattern: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
                .expect("Invalid email regex"),
            phone_pattern: Regex::new(r"^\+?[1-9]\d{0,15}$").expect("Invalid phone regex"),
        }
    }

    /// True if `email` looks like a deliverable address.
    pub fn is_valid_email(&self, email: &str) -> bool {
        self.email_pattern.is_match(email)
    }

    /// True if `phone` is a plausible dialable number.
    ///
    /// Spaces, dashes and parentheses are stripped before matching, so
    /// `(416) 555-0187` and `+14165550187` both pass.
    pub fn is_valid_phone(&self, phone: &str) -> bool {
        let normalized: String = phone
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
            .collect();
        self.phone_pattern.is_match(&normalized)
    }

    /// Validate a contact form submission.
    ///
    /// Returns an empty map when the form is acceptable; otherwise one
    /// message per offending field. Name, email and phone are required,
    /// the message body is optional.
    pub fn validate_contact(&self, form: &ContactForm) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if form.name.trim().is_empty() {
            errors.insert("name", "Please enter your name".to_string());
        }

        if form.email.trim().is_empty() {
            errors.insert("email", "Please enter your email address".to_string());
        } else if !self.is_valid_email(form.email.trim()) {
            errors.insert("email", "Please enter a valid email address".to_string());
        }

        if form.phone.trim().is_empty() {
            errors.insert("phone", "Please enter your phone number".to_string());
        } else if !self.is_valid_phone(form.phone.trim()) {
            errors.insert("phone", "Please enter a valid phone number".to_string());
        }

        errors
    }

    /// Validate a newsletter signup address.
    pub fn validate_newsletter(&self, email: &str) -> Result<(), String> {
        let email = email.trim();
        if email.is_empty() {
            return Err("Please enter your email address".to_string());
        }
        if !self.is_valid_email(email) {
            return Err("Please enter a valid email address".to_string());
        }
        Ok(())
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}
