//! Const-eval support for [`closed_enum!`].
//!
//! The macro writes its keys out as string literals, which lets a `const fn`
//! scan them while the crate compiles: a duplicate key or a key shadowing a
//! reserved operation name fails the build instead of surfacing at run time.
//! Values are only known at run time in general, so duplicate values stay a
//! factory-level check.
//!
//! [`closed_enum!`]: crate::closed_enum

use crate::error::RESERVED_NAMES;

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn is_reserved(key: &str) -> bool {
    let mut i = 0;
    while i < RESERVED_NAMES.len() {
        if str_eq(key, RESERVED_NAMES[i]) {
            return true;
        }
        i += 1;
    }
    false
}

/// Compile-time scan over the keys of a `closed_enum!` invocation. Not part
/// of the public API.
#[doc(hidden)]
pub const fn verify_key_names(keys: &[&str]) {
    let mut i = 0;
    while i < keys.len() {
        if is_reserved(keys[i]) {
            panic!("closed_enum!: key shadows a reserved operation name");
        }
        let mut j = i + 1;
        while j < keys.len() {
            if str_eq(keys[i], keys[j]) {
                panic!("closed_enum!: key appears more than once");
            }
            j += 1;
        }
        i += 1;
    }
}

/// Build a [`ClosedEnum`](crate::ClosedEnum) from `key => value` pairs.
///
/// Keys are written as identifiers and checked while the crate compiles:
/// a repeated key or a key named after one of the utility operations is a
/// build error. Values go through the ordinary factory, so the expression
/// evaluates to the factory's `Result`.
///
/// ```
/// use closed_enum::closed_enum;
///
/// let status = closed_enum! {
///     Active => "active",
///     Suspended => "suspended",
/// }?;
/// assert_eq!(status.key_of(&"active"), Some("Active"));
/// # Ok::<(), closed_enum::EnumError>(())
/// ```
#[macro_export]
macro_rules! closed_enum {
    ($($key:ident => $value:expr),+ $(,)?) => {{
        const _: () = $crate::macros::verify_key_names(&[$(stringify!($key)),+]);
        $crate::ClosedEnum::new([$((stringify!($key), $value)),+])
    }};
}
