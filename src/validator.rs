//! The validation cursor and the entry points of a validation run.
//!
//! A [`Validator`] tracks where in a structure validation currently is and
//! records failures there. User types implement [`Validate`] and call the
//! assertion methods while moving the cursor with
//! [`with_field`](Validator::with_field) and
//! [`with_index`](Validator::with_index).

use std::sync::{Arc, OnceLock};

use rayon::prelude::*;
use stillwater::Validation;

use crate::error::{messages, ValidateError};
use crate::path::Path;
use crate::tree::{ErrorNode, ErrorTree, SharedError};

/// The result of a finished validation run.
pub type ValidationResult = Validation<(), ErrorTree>;

/// A type that knows how to validate itself.
///
/// Validation failures are recorded on the [`Validator`]; they are not
/// returned. `Err` is for abnormal conditions that stop validation early,
/// such as a lookup that could not be performed.
///
/// # Example
///
/// ```rust
/// use std::convert::Infallible;
/// use validates::{on, Path, Validate, Validator};
///
/// struct User {
///     name: String,
///     age: i64,
/// }
///
/// impl Validate for User {
///     type Error = Infallible;
///
///     fn validate(&self, is: &mut Validator) -> Result<(), Infallible> {
///         is.with_field("name", |is| {
///             is.required(!self.name.is_empty());
///         });
///         is.with_field("age", |is| {
///             is.between(self.age, 0, 150);
///         });
///         Ok(())
///     }
/// }
///
/// let is = on(&User { name: String::new(), age: 200 }).unwrap();
/// assert_eq!(is.len(), 2);
/// assert!(is.errors().has_error_at(&Path::parse("/name").unwrap()));
/// ```
pub trait Validate {
    /// The error returned when validation cannot be carried out.
    type Error;

    /// Records every failure of `self` on `is`.
    fn validate(&self, is: &mut Validator) -> Result<(), Self::Error>;
}

/// Validates `value` from the root and returns the validator holding the
/// results.
pub fn on<T: Validate + ?Sized>(value: &T) -> Result<Validator, T::Error> {
    let mut is = Validator::new();
    value.validate(&mut is)?;
    if is.has_errors() {
        tracing::debug!(errors = is.len(), "validation finished with errors");
    }
    Ok(is)
}

/// Validates every value independently, in parallel.
///
/// Each value gets its own validator and tree; results are in input order.
pub fn validate_all<T>(values: &[T]) -> Vec<Result<Validator, T::Error>>
where
    T: Validate + Sync,
    T::Error: Send,
{
    values.par_iter().map(on).collect()
}

/// Returns true if `s` is not empty. Meant for [`Validator::required`].
pub fn is_present(s: &str) -> bool {
    !s.is_empty()
}

/// Records validation failures at the current path.
///
/// The error tree is created on the first failure. A validator only ever
/// adds errors; there is no way to take one back.
#[derive(Debug, Default)]
pub struct Validator {
    current_path: Path,
    errors: Option<ErrorTree>,
    count: usize,
}

impl Validator {
    /// Creates a validator positioned at the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator positioned at `path`.
    ///
    /// Useful when validating one part of a larger structure so that failures
    /// are reported under the part's location.
    pub fn at(path: Path) -> Self {
        Self {
            current_path: path,
            ..Self::default()
        }
    }

    /// Returns the path failures are currently recorded at.
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// Returns true if at least one failure was recorded.
    pub fn has_errors(&self) -> bool {
        self.count != 0
    }

    /// Returns the number of failures recorded.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no failure was recorded.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the root of the error tree.
    ///
    /// Before the first failure this is the root of an empty tree.
    pub fn errors(&self) -> ErrorNode<'_> {
        match &self.errors {
            Some(tree) => tree.root(),
            None => empty_tree().root(),
        }
    }

    /// Returns the error tree, or `None` if nothing failed yet.
    pub fn error_tree(&self) -> Option<&ErrorTree> {
        self.errors.as_ref()
    }

    /// Consumes the validator and returns its error tree.
    pub fn into_errors(self) -> ErrorTree {
        self.errors.unwrap_or_default()
    }

    /// Consumes the validator and returns `Success` if nothing failed.
    pub fn finish(self) -> ValidationResult {
        match self.errors {
            Some(tree) if self.count != 0 => Validation::Failure(tree),
            _ => Validation::Success(()),
        }
    }

    /// Runs `f` and then restores the current path, even if `f` panics.
    pub fn with<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let path = self.current_path.clone();
        self.scoped(path, f)
    }

    /// Runs `f` with the current path moved into field `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid field name (see [`Path::down_field`]).
    pub fn with_field<R>(&mut self, name: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        let path = self.current_path.down_field(name);
        self.scoped(path, f)
    }

    /// Runs `f` with the current path moved into array element `index`.
    pub fn with_index<R>(&mut self, index: usize, f: impl FnOnce(&mut Self) -> R) -> R {
        let path = self.current_path.down_index(index);
        self.scoped(path, f)
    }

    /// Records `error` at the current path.
    pub fn invalid<E: ValidateError>(&mut self, error: E) {
        self.invalid_shared(Arc::new(error));
    }

    /// Records an already shared error at the current path.
    pub fn invalid_shared(&mut self, error: SharedError) {
        tracing::trace!(path = %self.current_path, error = %error, "validation failed");
        self.count += 1;
        let path = self.current_path.clone();
        self.tree().root_mut().descend(&path).add_shared(error);
    }

    /// Records the error built by `error` unless `ok` holds.
    ///
    /// `error` only runs on failure. Returns `ok`.
    pub fn ensure<E, F>(&mut self, ok: bool, error: F) -> bool
    where
        E: ValidateError,
        F: FnOnce() -> E,
    {
        if !ok {
            self.invalid(error());
        }
        ok
    }

    /// Records "should be true" unless `value` is true.
    pub fn is_true(&mut self, value: bool) -> bool {
        self.ensure(value, || messages::SHOULD_BE_TRUE)
    }

    /// Records "should be false" unless `value` is false.
    pub fn is_false(&mut self, value: bool) -> bool {
        self.ensure(!value, || messages::SHOULD_BE_FALSE)
    }

    /// Records "should be present" unless `is_present` holds.
    ///
    /// Use the result to skip checks that only make sense for a present value:
    ///
    /// ```rust
    /// use validates::{is_present, Validator};
    ///
    /// let name = "";
    /// let mut is = Validator::new();
    /// is.with_field("name", |is| {
    ///     if is.required(is_present(name)) {
    ///         is.length_between(name, 1, 15);
    ///     }
    /// });
    /// assert_eq!(is.len(), 1);
    /// ```
    pub fn required(&mut self, is_present: bool) -> bool {
        self.ensure(is_present, || messages::SHOULD_BE_PRESENT)
    }

    /// Validates a nested value under field `name`.
    pub fn valid_field<T: Validate + ?Sized>(&mut self, name: &str, value: &T) -> Result<(), T::Error> {
        self.with_field(name, |is| value.validate(is))
    }

    /// Validates a nested value under array element `index`.
    pub fn valid_index<T: Validate + ?Sized>(&mut self, index: usize, value: &T) -> Result<(), T::Error> {
        self.with_index(index, |is| value.validate(is))
    }

    /// Validates every element of `values` under field `name`.
    ///
    /// Stops at the first `Err` and returns it; failures recorded before that
    /// are kept.
    pub fn valid_each<T: Validate>(&mut self, name: &str, values: &[T]) -> Result<(), T::Error> {
        self.with_field(name, |is| {
            values
                .iter()
                .enumerate()
                .try_for_each(|(index, value)| is.valid_index(index, value))
        })
    }

    fn tree(&mut self) -> &mut ErrorTree {
        self.errors.get_or_insert_with(ErrorTree::new)
    }

    fn scoped<R>(&mut self, path: Path, f: impl FnOnce(&mut Self) -> R) -> R {
        let previous = std::mem::replace(&mut self.current_path, path);
        let guard = CursorGuard {
            validator: self,
            previous,
        };
        f(&mut *guard.validator)
    }
}

// Puts the previous path back when dropped, including during unwinding.
struct CursorGuard<'a> {
    validator: &'a mut Validator,
    previous: Path,
}

impl Drop for CursorGuard<'_> {
    fn drop(&mut self) {
        self.validator.current_path = std::mem::take(&mut self.previous);
    }
}

fn empty_tree() -> &'static ErrorTree {
    static EMPTY: OnceLock<ErrorTree> = OnceLock::new();
    EMPTY.get_or_init(ErrorTree::new)
}
