//! Default messages recorded by the built-in assertions.
//!
//! Fixed messages are constants so tests can compare against them with
//! [`ErrorTree::is_error_at`](crate::ErrorTree::is_error_at). Messages that
//! carry bounds are built by the functions below; they produce
//! [`TemplateError`]s, which compare equal only when the bounds match too.

use std::fmt::Display;

use super::{SimpleError, TemplateArg, TemplateError};

/// Recorded by [`Validator::is_true`](crate::Validator::is_true).
pub const SHOULD_BE_TRUE: SimpleError = SimpleError::from_static("should be true");

/// Recorded by [`Validator::is_false`](crate::Validator::is_false).
pub const SHOULD_BE_FALSE: SimpleError = SimpleError::from_static("should be false");

/// Recorded by [`Validator::required`](crate::Validator::required).
pub const SHOULD_BE_PRESENT: SimpleError = SimpleError::from_static("should be present");

/// Recorded by [`Validator::not_empty`](crate::Validator::not_empty) and by
/// [`Validator::uri`](crate::Validator::uri) on an empty value.
pub const SHOULD_NOT_BE_EMPTY: SimpleError = SimpleError::from_static("should not be empty");

/// Recorded by [`Validator::matches`](crate::Validator::matches).
pub const SHOULD_BE_FORMATTED: TemplateError =
    TemplateError::from_static("should be formatted properly");

/// Recorded by [`Validator::email`](crate::Validator::email).
pub const SHOULD_BE_EMAIL: TemplateError =
    TemplateError::from_static("should be a valid email address");

/// Recorded by [`Validator::one_of`](crate::Validator::one_of).
pub const NOT_ACCEPTABLE: TemplateError = TemplateError::from_static("not an acceptable value");

/// Prefix applied to the numeric templates when the checked number is a length.
pub const LENGTH_PREFIX: &str = "length ";

/// "should be between {low} and {high}"
pub fn should_be_between(low: impl Into<TemplateArg>, high: impl Into<TemplateArg>) -> TemplateError {
    TemplateError::new("should be between {} and {}")
        .with_arg(low)
        .with_arg(high)
}

/// "should be greater than {low}"
pub fn should_be_greater_than(low: impl Into<TemplateArg>) -> TemplateError {
    TemplateError::new("should be greater than {}").with_arg(low)
}

/// "should be less than {high}"
pub fn should_be_less_than(high: impl Into<TemplateArg>) -> TemplateError {
    TemplateError::new("should be less than {}").with_arg(high)
}

/// "should be greater than or equal to {low}"
pub fn should_be_at_least(low: impl Into<TemplateArg>) -> TemplateError {
    TemplateError::new("should be greater than or equal to {}").with_arg(low)
}

/// "should be less than or equal to {high}"
pub fn should_be_at_most(high: impl Into<TemplateArg>) -> TemplateError {
    TemplateError::new("should be less than or equal to {}").with_arg(high)
}

/// "should be a valid URI: {reason}", where `reason` is the parser's
/// explanation of why the value is not a URI.
pub fn should_be_uri(reason: impl Display) -> TemplateError {
    TemplateError::new("should be a valid URI: {}").with_arg(reason.to_string())
}
