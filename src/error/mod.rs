//! Validation error values.
//!
//! This module provides the [`ValidateError`] capability that every recorded
//! failure implements, its two stock variants ([`SimpleError`] and
//! [`TemplateError`]), and the default messages used by the assertions.

pub mod messages;
mod validate_error;

pub use validate_error::{SimpleError, TemplateArg, TemplateError, ValidateError};
