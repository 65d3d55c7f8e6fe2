//! NodeKind predicate and enum accessor macros
//!
//! These macros eliminate repetitive match code on fieldless and tagged enums.
//! All macros use `paste` internally for identifier concatenation.

// =============================================================================
// NodeKind predicate generation
// =============================================================================

/// Generate `is_xxx` predicates for fieldless enum variants
///
/// # Generated methods per variant:
/// - `is_xxx(&self) -> bool` - variant check, snake-cased
///   (`BooleanOperation` becomes `is_boolean_operation`)
#[macro_export]
macro_rules! impl_kind_predicates {
    ($($variant:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is a " $variant " node"]
                #[inline]
                pub const fn [<is_ $variant:snake>](&self) -> bool {
                    matches!(self, Self::$variant)
                }
            )*
        }
    };
}

/// Generate `is_xxx` / `as_xxx` accessors for single-field tuple variants
///
/// # Example
/// ```ignore
/// impl_enum_accessors!(uniform => Uniform(T));
/// // Expands to: is_uniform(&self) -> bool, as_uniform(&self) -> Option<&T>
/// ```
#[macro_export]
macro_rules! impl_enum_accessors {
    ($($name:ident => $variant:ident($ty:ty)),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is the " $variant " variant"]
                #[inline]
                pub fn [<is_ $name>](&self) -> bool {
                    matches!(self, Self::$variant(_))
                }

                #[doc = "Get the " $variant " payload"]
                #[inline]
                pub fn [<as_ $name>](&self) -> Option<&$ty> {
                    match self { Self::$variant(v) => Some(v), _ => None }
                }
            )*
        }
    };
}
