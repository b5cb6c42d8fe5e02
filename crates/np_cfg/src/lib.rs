#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Alias definition

/// Defines a set of compilation aliases.
///
/// Each `#[cfg(predicate)] => name` pair becomes a macro `name!` in the
/// invoking module, re-exporting [`enabled!`] when the predicate holds and
/// [`disabled!`] otherwise.
///
/// # Examples
///
/// ```
/// pub mod cfg {
///     np_cfg::define_alias! {
///         #[cfg(all())] => always,
///         #[cfg(any())] => never,
///     }
/// }
///
/// assert!(cfg::always!());
/// assert!(!cfg::never!());
/// ```
#[macro_export]
macro_rules! define_alias {
    ($(#[cfg($meta:meta)] => $name:ident),+ $(,)?) => {
        $(
            #[cfg($meta)]
            #[doc = concat!("Keeps the wrapped code, `#[cfg(", stringify!($meta), ")]` is active.")]
            pub use $crate::enabled as $name;

            #[cfg(not($meta))]
            #[doc = concat!("Drops the wrapped code, `#[cfg(", stringify!($meta), ")]` is inactive.")]
            pub use $crate::disabled as $name;
        )+
    };
}

// -----------------------------------------------------------------------------
// Alias targets

/// Expands to the wrapped code.
///
/// - `alias!()` is `true`.
/// - `alias! { if { .. } else { .. } }` keeps the first branch.
/// - `alias! { .. }` keeps everything.
#[macro_export]
macro_rules! enabled {
    () => { true };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($p)* };
    ($($p:tt)*) => { $($p)* };
}

/// Discards the wrapped code.
///
/// - `alias!()` is `false`.
/// - `alias! { if { .. } else { .. } }` keeps the second branch.
/// - `alias! { .. }` expands to nothing.
#[macro_export]
macro_rules! disabled {
    () => { false };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($n)* };
    ($($p:tt)*) => {};
}
