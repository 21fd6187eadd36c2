//! Numeric range assertions.
//!
//! The checks are generic over any copyable, ordered number that can be
//! rendered into a [`TemplateArg`], so the same methods cover `i32`, `i64`,
//! `usize`, `f64` and friends. The `_with` forms take the error to record
//! and only need the value to be ordered.

use crate::error::{messages, TemplateArg, ValidateError};
use crate::validator::Validator;

impl Validator {
    /// Records "should be between {low} and {high}" unless `low <= value <= high`.
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
    /// assert!(is.between(5, 1, 10));
    /// assert!(!is.between(2.5, 3.0, 4.0));
    /// assert_eq!(is.len(), 1);
    /// ```
    pub fn between<T>(&mut self, value: T, low: T, high: T) -> bool
    where
        T: PartialOrd + Copy + Into<TemplateArg>,
    {
        self.between_with(value, low, high, || messages::should_be_between(low, high))
    }

    /// Like [`between`](Self::between), recording the error built by `error`
    /// instead of the default message.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    pub fn between_with<T, E, F>(&mut self, value: T, low: T, high: T, error: F) -> bool
    where
        T: PartialOrd,
        E: ValidateError,
        F: FnOnce() -> E,
    {
        if low > high {
            panic!("low cannot be greater than high");
        }
        self.ensure(low <= value && value <= high, error)
    }

    /// Records "should be greater than {low}" unless `value > low`.
    pub fn greater_than<T>(&mut self, value: T, low: T) -> bool
    where
        T: PartialOrd + Copy + Into<TemplateArg>,
    {
        self.greater_than_with(value, low, || messages::should_be_greater_than(low))
    }

    /// [`greater_than`](Self::greater_than) with a custom error.
    pub fn greater_than_with<T, E, F>(&mut self, value: T, low: T, error: F) -> bool
    where
        T: PartialOrd,
        E: ValidateError,
        F: FnOnce() -> E,
    {
        self.ensure(value > low, error)
    }

    /// Records "should be less than {high}" unless `value < high`.
    pub fn less_than<T>(&mut self, value: T, high: T) -> bool
    where
        T: PartialOrd + Copy + Into<TemplateArg>,
    {
        self.less_than_with(value, high, || messages::should_be_less_than(high))
    }

    /// [`less_than`](Self::less_than) with a custom error.
    pub fn less_than_with<T, E, F>(&mut self, value: T, high: T, error: F) -> bool
    where
        T: PartialOrd,
        E: ValidateError,
        F: FnOnce() -> E,
    {
        self.ensure(value < high, error)
    }

    /// Records "should be greater than or equal to {low}" unless `value >= low`.
    pub fn at_least<T>(&mut self, value: T, low: T) -> bool
    where
        T: PartialOrd + Copy + Into<TemplateArg>,
    {
        self.at_least_with(value, low, || messages::should_be_at_least(low))
    }

    /// [`at_least`](Self::at_least) with a custom error.
    pub fn at_least_with<T, E, F>(&mut self, value: T, low: T, error: F) -> bool
    where
        T: PartialOrd,
        E: ValidateError,
        F: FnOnce() -> E,
    {
        self.ensure(value >= low, error)
    }

    /// Records "should be less than or equal to {high}" unless `value <= high`.
    pub fn at_most<T>(&mut self, value: T, high: T) -> bool
    where
        T: PartialOrd + Copy + Into<TemplateArg>,
    {
        self.at_most_with(value, high, || messages::should_be_at_most(high))
    }

    /// [`at_most`](Self::at_most) with a custom error.
    pub fn at_most_with<T, E, F>(&mut self, value: T, high: T, error: F) -> bool
    where
        T: PartialOrd,
        E: ValidateError,
        F: FnOnce() -> E,
    {
        self.ensure(value <= high, error)
    }
}
