//! Populate nested configuration structs in place from environment variables
//!
//! `envfill` walks a caller-owned configuration struct field by field, looks
//! each annotated field up in the environment, falls back to a declared
//! literal when the variable is unset or empty, coerces the string to the
//! field's type and recurses into nested structs.
//!
//! # Features
//!
//! - **Declarative**: field walk generated by `#[derive(Populate)]`, no runtime reflection
//! - **In place**: mutates an existing value, allocating `Option` nested structs on demand
//! - **Quote tolerant**: one layer of `'`, `"` or `` ` `` quoting is stripped from values
//! - **Fail fast**: the first failure is returned, wrapped with the path of enclosing fields
//!
//! # Supported Field Types
//!
//! - Text: `String`
//! - Integers: `i8` .. `i128`, `isize`, `u8` .. `u128`, `usize` (base 10)
//! - Booleans: `bool` (`1 t T TRUE true True` / `0 f F FALSE false False`)
//! - Nested structs: any type deriving `Populate`, held by value, in a `Box`,
//!   in an `Option` (allocated with `Default` when `None`) or in an `Rc`/`Arc`
//!
//! # Example
//!
//! ```rust
//! use envfill::Populate;
//!
//! #[derive(Debug, Default, Populate)]
//! struct Config {
//!     #[env(var = "ENVFILL_DOC_DATABASE_URL")]
//!     pub database_url: String,
//!
//!     #[env(var = "ENVFILL_DOC_PORT", default = "8080")]
//!     pub port: u16,
//!
//!     // Not annotated: left alone
//!     pub runtime_only: u32,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("ENVFILL_DOC_DATABASE_URL", "\"postgres://localhost/db\"");
//! let mut config = Config::default();
//! envfill::populate(Some(&mut config))?;
//!
//! assert_eq!(config.database_url, "postgres://localhost/db");
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.runtime_only, 0);
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[env(var = "NAME")]`
//!
//! Read the field from the environment variable `NAME`. Without a
//! `default`, an unset or empty variable is an error.
//!
//! ## `#[env(default = "literal")]`
//!
//! Use `literal` when the variable is unset or empty. The literal is parsed
//! like an environment value would be. A field with only a `default` always
//! takes the literal.
//!
//! ## Nested structs
//!
//! Every annotated field resolves a value before its type is looked at, and
//! nested struct fields are no exception. A nested field is therefore usually
//! annotated with a marker default, which is then ignored:
//!
//! ```rust
//! use envfill::Populate;
//!
//! #[derive(Debug, Default, Populate)]
//! struct Database {
//!     #[env(var = "ENVFILL_DOC_DB_HOST", default = "localhost")]
//!     pub host: String,
//! }
//!
//! #[derive(Debug, Default, Populate)]
//! struct Config {
//!     #[env(default = "database")]
//!     pub database: Database,
//!
//!     #[env(default = "replica")]
//!     pub replica: Option<Database>,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! assert_eq!(config.database.host, "localhost");
//! assert_eq!(config.replica.map(|r| r.host).as_deref(), Some("localhost"));
//! #     Ok(())
//! # }
//! ```

pub mod coerce;
mod error;
mod lookup;
pub mod sanitize;
#[doc(hidden)]
pub mod walk;

pub use envfill_derive::Populate;
pub use error::{CoercionSource, Error};
pub use lookup::{Lookup, ProcessEnv};

/// Result alias used throughout `envfill`.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A configuration struct whose fields can be filled from the environment.
///
/// Implemented by `#[derive(Populate)]`; hand-written impls are possible but
/// rarely needed.
pub trait Populate {
    /// Populate annotated fields from `env`, in declaration order.
    ///
    /// Stops at the first failing field. Fields visited before the failure
    /// keep their new values.
    fn populate_from<L: Lookup + ?Sized>(&mut self, env: &L) -> Result<()>;

    /// Populate annotated fields from the process environment.
    fn populate(&mut self) -> Result<()> {
        self.populate_from(&ProcessEnv)
    }

    /// Build a `Default` instance and populate it from the process environment.
    fn from_env() -> Result<Self>
    where
        Self: Sized + Default,
    {
        let mut config = Self::default();
        config.populate()?;
        Ok(config)
    }
}

impl<T: Populate> Populate for Box<T> {
    fn populate_from<L: Lookup + ?Sized>(&mut self, env: &L) -> Result<()> {
        (**self).populate_from(env)
    }
}

/// Populate `target` from the process environment.
///
/// Fails with [`Error::InvalidTarget`] before touching anything when
/// `target` is `None`.
///
/// ```rust
/// use envfill::{Error, Populate};
///
/// #[derive(Default, Populate)]
/// struct Config {
///     #[env(default = "info")]
///     level: String,
/// }
///
/// let err = envfill::populate::<Config>(None).unwrap_err();
/// assert!(matches!(err, Error::InvalidTarget { .. }));
/// ```
pub fn populate<T: Populate>(target: Option<&mut T>) -> Result<()> {
    populate_from(target, &ProcessEnv)
}

/// Populate `target` from an arbitrary [`Lookup`].
pub fn populate_from<T, L>(target: Option<&mut T>, env: &L) -> Result<()>
where
    T: Populate,
    L: Lookup + ?Sized,
{
    let Some(target) = target else {
        return Err(Error::invalid_target("configuration target is absent"));
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target_type = std::any::type_name::<T>(),
        "populating configuration"
    );

    let result = target.populate_from(env);

    #[cfg(feature = "tracing")]
    match &result {
        Ok(()) => tracing::debug!(target_type = std::any::type_name::<T>(), "configuration populated"),
        Err(e) => tracing::debug!(target_type = std::any::type_name::<T>(), error = %e, "configuration failed"),
    }

    result
}
