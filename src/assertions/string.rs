//! String assertions.
//!
//! Lengths are counted in Unicode scalar values, not bytes. Every check has
//! a `_with` form that records a caller-supplied error instead of the
//! default message.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::error::messages::{self, LENGTH_PREFIX};
use crate::error::ValidateError;
use crate::validator::Validator;

const EMAIL_PATTERN: &str = r"^[^@]+@.+\.[^.]{2,}$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

impl Validator {
    /// Records "length should be between {low} and {high}" unless the length
    /// of `value` is within the inclusive range.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validates::Validator;
    ///
    /// let mut is = Validator::new();
    /// assert!(is.length_between("zoey", 1, 4));
    /// assert!(!is.length_between("zoey", 5, 12));
    /// ```
    pub fn length_between(&mut self, value: &str, low: usize, high: usize) -> bool {
        self.length_between_with(value, low, high, || {
            messages::should_be_between(low, high).prefixed(LENGTH_PREFIX)
        })
    }

    /// Like [`length_between`](Self::length_between), recording the error
    /// built by `error` instead of the default message.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    pub fn length_between_with<E, F>(&mut self, value: &str, low: usize, high: usize, error: F) -> bool
    where
        E: ValidateError,
        F: FnOnce() -> E,
    {
        if low > high {
            panic!("low cannot be greater than high");
        }
        let len = value.chars().count();
        self.ensure(low <= len && len <= high, error)
    }

    /// Records "length should be greater than {low}" unless `value` is longer.
    pub fn length_greater_than(&mut self, value: &str, low: usize) -> bool {
        self.length_greater_than_with(value, low, || {
            messages::should_be_greater_than(low).prefixed(LENGTH_PREFIX)
        })
    }

    /// [`length_greater_than`](Self::length_greater_than) with a custom error.
    pub fn length_greater_than_with<E, F>(&mut self, value: &str, low: usize, error: F) -> bool
    where
        E: ValidateError,
        F: FnOnce() -> E,
    {
        self.ensure(value.chars().count() > low, error)
    }

    /// Records "length should be less than {high}" unless `value` is shorter.
    pub fn length_less_than(&mut self, value: &str, high: usize) -> bool {
        self.length_less_than_with(value, high, || {
            messages::should_be_less_than(high).prefixed(LENGTH_PREFIX)
        })
    }

    /// [`length_less_than`](Self::length_less_than) with a custom error.
    pub fn length_less_than_with<E, F>(&mut self, value: &str, high: usize, error: F) -> bool
    where
        E: ValidateError,
        F: FnOnce() -> E,
    {
        self.ensure(value.chars().count() < high, error)
    }

    /// Records "length should be greater than or equal to {low}" unless the
    /// length of `value` is at least `low`.
    pub fn length_at_least(&mut self, value: &str, low: usize) -> bool {
        self.length_at_least_with(value, low, || {
            messages::should_be_at_least(low).prefixed(LENGTH_PREFIX)
        })
    }

    /// [`length_at_least`](Self::length_at_least) with a custom error.
    pub fn length_at_least_with<E, F>(&mut self, value: &str, low: usize, error: F) -> bool
    where
        E: ValidateError,
        F: FnOnce() -> E,
    {
        self.ensure(value.chars().count() >= low, error)
    }

    /// Records "length should be less than or equal to {high}" unless the
    /// length of `value` is at most `high`.
    pub fn length_at_most(&mut self, value: &str, high: usize) -> bool {
        self.length_at_most_with(value, high, || {
            messages::should_be_at_most(high).prefixed(LENGTH_PREFIX)
        })
    }

    /// [`length_at_most`](Self::length_at_most) with a custom error.
    pub fn length_at_most_with<E, F>(&mut self, value: &str, high: usize, error: F) -> bool
    where
        E: ValidateError,
        F: FnOnce() -> E,
    {
        self.ensure(value.chars().count() <= high, error)
    }

    /// Records "should not be empty" if `value` is empty.
    pub fn not_empty(&mut self, value: &str) -> bool {
        self.not_empty_with(value, || messages::SHOULD_NOT_BE_EMPTY)
    }

    /// [`not_empty`](Self::not_empty) with a custom error.
    pub fn not_empty_with<E, F>(&mut self, value: &str, error: F) -> bool
    where
        E: ValidateError,
        F: FnOnce() -> E,
    {
        self.ensure(!value.is_empty(), error)
    }

    /// Records "not an acceptable value" unless `value` equals one of `allowed`.
    pub fn one_of<S: AsRef<str>>(&mut self, value: &str, allowed: &[S]) -> bool {
        self.one_of_with(value, allowed, || messages::NOT_ACCEPTABLE)
    }

    /// [`one_of`](Self::one_of) with a custom error.
    pub fn one_of_with<S, E, F>(&mut self, value: &str, allowed: &[S], error: F) -> bool
    where
        S: AsRef<str>,
        E: ValidateError,
        F: FnOnce() -> E,
    {
        let found = allowed.iter().any(|candidate| candidate.as_ref() == value);
        self.ensure(found, error)
    }

    /// Records "should be formatted properly" unless `pattern` matches `value`.
    pub fn matches(&mut self, value: &str, pattern: &Regex) -> bool {
        self.matches_with(value, pattern, || messages::SHOULD_BE_FORMATTED)
    }

    /// [`matches`](Self::matches) with a custom error.
    pub fn matches_with<E, F>(&mut self, value: &str, pattern: &Regex, error: F) -> bool
    where
        E: ValidateError,
        F: FnOnce() -> E,
    {
        self.ensure(pattern.is_match(value), error)
    }

    /// Records "should be a valid email address" unless `value` looks like one.
    ///
    /// The check is deliberately loose: something before an `@`, and a domain
    /// whose last label has at least two characters.
    pub fn email(&mut self, value: &str) -> bool {
        self.email_with(value, || messages::SHOULD_BE_EMAIL)
    }

    /// [`email`](Self::email) with a custom error.
    pub fn email_with<E, F>(&mut self, value: &str, error: F) -> bool
    where
        E: ValidateError,
        F: FnOnce() -> E,
    {
        self.matches_with(value, email_regex(), error)
    }

    /// Records an error unless `value` is an absolute URL or an absolute path.
    ///
    /// An empty value records "should not be empty"; anything the URL parser
    /// rejects records "should be a valid URI: {reason}".
    pub fn uri(&mut self, value: &str) -> bool {
        if !self.not_empty(value) {
            return false;
        }
        match check_uri(value) {
            Ok(()) => true,
            Err(err) => {
                self.invalid(messages::should_be_uri(err));
                false
            }
        }
    }

    /// Like [`uri`](Self::uri), but records the error built by `error` for
    /// both an empty value and one the URL parser rejects.
    ///
    /// ```rust
    /// use validates::error::SimpleError;
    /// use validates::{Path, Validator};
    ///
    /// let mut is = Validator::new();
    /// assert!(!is.uri_with("not a uri", || SimpleError::new("need a link")));
    /// assert!(is.errors().is_error_at(&Path::root(), &SimpleError::new("need a link")));
    /// ```
    pub fn uri_with<E, F>(&mut self, value: &str, error: F) -> bool
    where
        E: ValidateError,
        F: FnOnce() -> E,
    {
        let ok = !value.is_empty() && check_uri(value).is_ok();
        self.ensure(ok, error)
    }
}

fn check_uri(value: &str) -> Result<(), url::ParseError> {
    if value.starts_with('/') {
        return Ok(());
    }
    Url::parse(value).map(|_| ())
}
