//! The opaque error capability and its stock variants.

use std::any::Any;
use std::borrow::Cow;
use std::fmt::{self, Display};

/// A single validation failure recorded in an [`ErrorTree`](crate::ErrorTree).
///
/// The tree treats error values as opaque. All it needs is a rendering
/// (`Display`) and an equality test against another error of unknown
/// concrete type. `is_equal` must return false, never panic, when `other` is
/// a different variant.
///
/// # Example
///
/// ```rust
/// use validates::error::{SimpleError, TemplateError, ValidateError};
///
/// let present = SimpleError::from_static("should be present");
/// let between = TemplateError::new("should be between {} and {}")
///     .with_arg(1)
///     .with_arg(5);
///
/// assert_eq!(between.to_string(), "should be between 1 and 5");
/// assert!(present.is_equal(&SimpleError::new("should be present")));
/// assert!(!present.is_equal(&between));
/// ```
pub trait ValidateError: fmt::Debug + Display + Send + Sync + 'static {
    /// Returns true if `other` is the same variant and carries the same data.
    fn is_equal(&self, other: &dyn ValidateError) -> bool;

    /// Returns `self` as `Any` so implementations can downcast `other`.
    fn as_any(&self) -> &dyn Any;
}

impl PartialEq for dyn ValidateError {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

/// A plain message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleError(Cow<'static, str>);

impl SimpleError {
    /// Creates an error from a static message. Usable in constants.
    pub const fn from_static(message: &'static str) -> Self {
        Self(Cow::Borrowed(message))
    }

    /// Creates an error from any message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self(message.into())
    }

    /// Returns the message.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl Display for SimpleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValidateError for SimpleError {
    fn is_equal(&self, other: &dyn ValidateError) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| other == self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An argument substituted into a [`TemplateError`].
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateArg {
    /// A signed integer
    Int(i64),
    /// An unsigned integer
    UInt(u64),
    /// A floating point number
    Float(f64),
    /// Text
    Text(String),
}

impl Display for TemplateArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateArg::Int(value) => write!(f, "{}", value),
            TemplateArg::UInt(value) => write!(f, "{}", value),
            TemplateArg::Float(value) => write!(f, "{}", value),
            TemplateArg::Text(value) => f.write_str(value),
        }
    }
}

macro_rules! template_arg_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for TemplateArg {
                fn from(value: $source) -> Self {
                    TemplateArg::$variant(value as $target)
                }
            }
        )+
    };
}

template_arg_from!(Int as i64: i8, i16, i32, i64, isize);
template_arg_from!(UInt as u64: u8, u16, u32, u64, usize);
template_arg_from!(Float as f64: f32, f64);

impl From<&str> for TemplateArg {
    fn from(value: &str) -> Self {
        TemplateArg::Text(value.to_string())
    }
}

impl From<String> for TemplateArg {
    fn from(value: String) -> Self {
        TemplateArg::Text(value)
    }
}

/// A message template with positional `{}` placeholders and its arguments.
///
/// Two template errors are equal when both the template and the arguments
/// are equal, so "should be between 1 and 5" and "should be between 1 and 6"
/// are different failures.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateError {
    template: Cow<'static, str>,
    args: Vec<TemplateArg>,
}

impl TemplateError {
    /// Creates a template error from a static template with no arguments.
    /// Usable in constants.
    pub const fn from_static(template: &'static str) -> Self {
        Self {
            template: Cow::Borrowed(template),
            args: Vec::new(),
        }
    }

    /// Creates a template error with no arguments.
    pub fn new(template: impl Into<Cow<'static, str>>) -> Self {
        Self {
            template: template.into(),
            args: Vec::new(),
        }
    }

    /// Appends an argument and returns self for chaining.
    pub fn with_arg(mut self, arg: impl Into<TemplateArg>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Prepends `prefix` to the template.
    pub fn prefixed(mut self, prefix: &str) -> Self {
        self.template = Cow::Owned(format!("{}{}", prefix, self.template));
        self
    }

    /// Returns the unformatted template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the arguments in placeholder order.
    pub fn args(&self) -> &[TemplateArg] {
        &self.args
    }
}

impl Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut args = self.args.iter();
        let mut pieces = self.template.split("{}");
        if let Some(first) = pieces.next() {
            f.write_str(first)?;
        }
        for piece in pieces {
            match args.next() {
                Some(arg) => write!(f, "{}", arg)?,
                None => f.write_str("{}")?,
            }
            f.write_str(piece)?;
        }
        Ok(())
    }
}

impl ValidateError for TemplateError {
    fn is_equal(&self, other: &dyn ValidateError) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| other == self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
