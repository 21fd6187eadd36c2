//! Built-in assertions.
//!
//! Every assertion is a method on [`Validator`](crate::Validator) that records
//! a default error at the current path when the check fails and returns
//! whether it passed. For a custom message use
//! [`Validator::ensure`](crate::Validator::ensure) with the same condition.

mod numeric;
mod string;
