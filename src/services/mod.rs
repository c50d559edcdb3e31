//! Services module - Pure business logic behind the showroom pages.
//!
//! The services are **framework-agnostic** and have no dependencies on the
//! presentation layer, making them testable and reusable.
//!
//! # Components
//!
//! - [`FormValidator`]: Field-level validation for the test-drive contact
//!   form and the newsletter signup, with compiled email/phone patterns
//! - [`DealerDirectory`]: City-keyed dealer lookup with case-insensitive
//!   keys and an empty result for unknown cities

pub mod dealers;
pub mod validation;

pub use dealers::{Dealer, DealerDirectory, default_directory};
pub use validation::{ContactForm, FieldErrors, FormValidator};
