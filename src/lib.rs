//! # Validates
//!
//! Programmatic struct validation that records every failure at the exact
//! place in the structure where it happened, instead of stopping at the
//! first one.
//!
//! ## Overview
//!
//! Types implement [`Validate`] and describe their checks in plain code: no
//! attributes, no reflection. While a [`Validator`] walks a structure it
//! keeps a current [`Path`]; each failed check is stored in an
//! [`ErrorTree`] at that path, so `/users[3]/email` holds exactly the
//! problems with the fourth user's e-mail address.
//!
//! ## Core Types
//!
//! - [`Path`]: a location such as `/user/phones[0]`
//! - [`ErrorTree`]: failures keyed by path, with deep equality for tests
//! - [`ValidateError`]: the capability every recorded failure implements
//! - [`Validator`]: the cursor and assertion methods
//!
//! ## Example
//!
//! ```rust
//! use std::convert::Infallible;
//! use validates::{on, Path, Validate, Validator};
//! use validates::error::messages;
//!
//! struct Signup {
//!     email: String,
//!     tags: Vec<String>,
//! }
//!
//! impl Validate for Signup {
//!     type Error = Infallible;
//!
//!     fn validate(&self, is: &mut Validator) -> Result<(), Infallible> {
//!         is.with_field("email", |is| is.email(&self.email));
//!         is.with_field("tags", |is| {
//!             for (i, tag) in self.tags.iter().enumerate() {
//!                 is.with_index(i, |is| is.not_empty(tag));
//!             }
//!         });
//!         Ok(())
//!     }
//! }
//!
//! let signup = Signup {
//!     email: "nope".to_string(),
//!     tags: vec!["rust".to_string(), String::new()],
//! };
//!
//! let is = on(&signup).unwrap();
//! assert_eq!(is.len(), 2);
//! let tags = Path::parse("/tags[1]").unwrap();
//! assert!(is.errors().is_error_at(&tags, &messages::SHOULD_NOT_BE_EMPTY));
//! ```

mod assertions;
pub mod error;
pub mod path;
pub mod tree;
pub mod validator;

pub use error::{SimpleError, TemplateArg, TemplateError, ValidateError};
pub use path::{ComponentVisitor, Path, PathError, PathSegment};
pub use tree::{ErrorNode, ErrorNodeMut, ErrorTree, NodeId, SharedError};
pub use validator::{is_present, on, validate_all, Validate, ValidationResult, Validator};
