//! Immutable, validated name→value mappings ("closed enums").
//!
//! The factory [`ClosedEnum::new`] takes an ordered collection of
//! `(name, value)` pairs and returns a frozen instance that exposes the
//! original entries alongside a fixed set of utility operations: membership
//! tests (`is_key`, `is_value`), reverse lookup (`key_of`), and ordered
//! enumeration (`keys`, `values`, `iter`). Construction fails if two names
//! share a value, if a name repeats, or if a name shadows one of the
//! operation names.
//!
//! ```
//! use closed_enum::ClosedEnum;
//!
//! let status = ClosedEnum::new([
//!     ("Active", "active"),
//!     ("Suspended", "suspended"),
//! ])?;
//!
//! assert_eq!(status["Active"], "active");
//! assert!(status.is_key("Active"));
//! assert_eq!(status.key_of(&"suspended"), Some("Suspended"));
//! assert_eq!(status.keys(), ["Active", "Suspended"]);
//! # Ok::<(), closed_enum::EnumError>(())
//! ```
//!
//! The instance has no mutating methods and owns its entries, so it is
//! immutable from construction onward and shareable across threads whenever
//! the value type is.

// The factory and the frozen instance it returns
pub mod enum_map;
pub use enum_map::ClosedEnum;

// Construction-time failure kinds and the reserved-name table
pub mod error;
pub use error::{EnumError, RESERVED_NAMES};

// f64 with identity semantics, usable as an enum value
pub mod number;
pub use number::Number;

// Process-unique opaque tokens, usable as enum values
pub mod symbol;
pub use symbol::Symbol;

// The closed set of admissible value kinds
pub mod value;
pub use value::Value;

// `closed_enum!` and its const-eval support
#[doc(hidden)]
pub mod macros;
