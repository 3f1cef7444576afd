//! Error types for populating configuration from environment variables

use std::error::Error as StdError;

/// Boxed parser failure carried by [`Error::TypeCoercion`].
pub type CoercionSource = Box<dyn StdError + Send + Sync + 'static>;

/// Errors that can occur while populating a configuration struct.
///
/// Population is fail-fast: the first failure in field declaration order is
/// returned and no sibling fields are visited afterwards. Failures inside a
/// nested struct are wrapped in [`Error::Nested`] once per enclosing field,
/// so the chain of `Nested` layers spells the path back to the root.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The root reference handed to [`populate`](crate::populate) was absent.
    #[error("invalid configuration target: {reason}")]
    InvalidTarget {
        /// Why the target was rejected
        reason: String,
    },

    /// Neither the environment nor the fallback literal produced a value.
    ///
    /// An empty environment variable counts as unset.
    #[error("environment variable {var} is not set")]
    MissingRequiredVariable {
        /// Name of the environment variable (empty if the field only has a fallback)
        var: String,
    },

    /// The field exists but cannot be written through the parent.
    ///
    /// Shared references and `Rc`/`Arc` allocations that are aliased elsewhere
    /// end up here.
    #[error("field {field} is not settable")]
    UnsettableField {
        /// Name of the struct field
        field: String,
    },

    /// The resolved string could not be parsed into the field's type.
    #[error("failed to parse {var} as {expected} for field {field}: {source}")]
    TypeCoercion {
        /// Name of the struct field
        field: String,
        /// Name of the environment variable the value was looked up under
        var: String,
        /// Kind the value was expected to be (`"integer"` or `"boolean"`)
        expected: &'static str,
        /// Error reported by the underlying parser
        source: CoercionSource,
    },

    /// The field's declared type is not text, integer, boolean or a nested struct.
    #[error("unsupported type {kind} for field {field}")]
    UnsupportedFieldType {
        /// Name of the struct field
        field: String,
        /// Kind of the declared type (e.g. `"float"`, `"sequence"`)
        kind: String,
    },

    /// A field inside a nested struct failed.
    #[error("failed to load nested struct field {field}: {source}")]
    Nested {
        /// Name of the enclosing field in the parent struct
        field: String,
        /// Failure reported by the nested struct
        source: Box<Error>,
    },
}

impl Error {
    #[doc(hidden)]
    pub fn invalid_target(reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            reason: reason.into(),
        }
    }

    #[doc(hidden)]
    pub fn missing(var: impl Into<String>) -> Self {
        Self::MissingRequiredVariable { var: var.into() }
    }

    #[doc(hidden)]
    pub fn unsettable(field: impl Into<String>) -> Self {
        Self::UnsettableField {
            field: field.into(),
        }
    }

    #[doc(hidden)]
    pub fn coercion<E>(
        field: impl Into<String>,
        var: impl Into<String>,
        expected: &'static str,
        source: E,
    ) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::TypeCoercion {
            field: field.into(),
            var: var.into(),
            expected,
            source: Box::new(source),
        }
    }

    #[doc(hidden)]
    pub fn unsupported(field: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnsupportedFieldType {
            field: field.into(),
            kind: kind.into(),
        }
    }

    /// Wrap an error raised inside the struct held by `field`.
    #[doc(hidden)]
    pub fn nested(field: impl Into<String>, source: Error) -> Self {
        Self::Nested {
            field: field.into(),
            source: Box::new(source),
        }
    }

    /// Dotted path from the root struct to the failing field.
    ///
    /// Leaf errors that do not name a field (`InvalidTarget`,
    /// `MissingRequiredVariable`) contribute nothing, so a missing variable in
    /// `database.pool` yields `"database.pool"`.
    ///
    /// ```
    /// use envfill::Error;
    ///
    /// let err = Error::nested("database", Error::nested("pool", Error::unsettable("size")));
    /// assert_eq!(err.path(), "database.pool.size");
    /// ```
    pub fn path(&self) -> String {
        let mut segments = Vec::new();
        let mut current = self;
        loop {
            match current {
                Self::Nested { field, source } => {
                    segments.push(field.as_str());
                    current = source;
                }
                Self::UnsettableField { field }
                | Self::TypeCoercion { field, .. }
                | Self::UnsupportedFieldType { field, .. } => {
                    segments.push(field.as_str());
                    break;
                }
                Self::InvalidTarget { .. } | Self::MissingRequiredVariable { .. } => break,
            }
        }
        segments.join(".")
    }

    /// Innermost error, with every [`Error::Nested`] layer peeled off.
    pub fn root_cause(&self) -> &Error {
        let mut current = self;
        while let Self::Nested { source, .. } = current {
            current = source;
        }
        current
    }
}
