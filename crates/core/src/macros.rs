// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros for reducing boilerplate.
//!
//! - [`simple_display!`] — `Display` impl mapping enum variants to string literals
//! - [`setters!`] — fluent setter methods for production builder/config structs

/// Generate a `Display` impl that maps enum variants to string literals.
///
/// Unit variants match directly; data-carrying variants use `(..)` to ignore fields.
///
/// ```ignore
/// crate::simple_display! {
///     MyEnum {
///         Foo => "foo",
///         Bar(..) => "bar",
///     }
/// }
/// ```
#[macro_export]
macro_rules! simple_display {
    ($enum:ty { $( $variant:ident $(( $($ignore:tt)* ))? => $str:expr ),+ $(,)? }) => {
        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $( Self::$variant $(( $($ignore)* ))? => $str, )+
                })
            }
        }
    };
}

/// Generate fluent setter methods inside an existing `impl` block.
///
/// Three shapes, any combination of which may be used in one invocation:
/// - `into { field: Ty, .. }` — `fn field(self, impl Into<Ty>) -> Self`, direct assignment.
/// - `set { field: Ty, .. }` — `fn field(self, Ty) -> Self`, direct assignment.
/// - `option { field: Ty, .. }` — `fn field(self, impl Into<Ty>) -> Self`, wraps in `Some`.
///
/// ```ignore
/// impl MyBuilder {
///     crate::setters! {
///         into { name: String, }
///         set { retries: u32, }
///         option { timeout: Duration, }
///     }
/// }
/// ```
#[macro_export]
macro_rules! setters {
    (
        $(into { $( $into_field:ident : $into_ty:ty ),* $(,)? })?
        $(set { $( $set_field:ident : $set_ty:ty ),* $(,)? })?
        $(option { $( $opt_field:ident : $opt_ty:ty ),* $(,)? })?
    ) => {
        $($( pub fn $into_field(mut self, v: impl Into<$into_ty>) -> Self { self.$into_field = v.into(); self } )*)?
        $($( pub fn $set_field(mut self, v: $set_ty) -> Self { self.$set_field = v; self } )*)?
        $($( pub fn $opt_field(mut self, v: impl Into<$opt_ty>) -> Self { self.$opt_field = Some(v.into()); self } )*)?
    };
}
