//! Macros for defining rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: creates a complete rule (struct, constructor and `Rule` impl)
//!
//! # Examples
//!
//! ```rust,ignore
//! use tagval::reflect::Value;
//! use tagval::rule::Failure;
//!
//! tagval::rule! {
//!     /// Fails on odd integers.
//!     pub Even = "even", restrictions: 0;
//!     check(self, value) {
//!         match value {
//!             Value::Int(n) if n % 2 != 0 => Err(Failure::Violated),
//!             _ => Ok(()),
//!         }
//!     }
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete rule: struct definition, constructor and
/// [`Rule`](crate::rule::Rule) implementation.
///
/// The generated struct holds only its [`RuleContext`](crate::rule::RuleContext).
/// `NAME` is the name the rule is conventionally registered under;
/// `restrictions` is the minimum restriction count fixed at construction.
/// `#[derive(Debug, Clone)]` is always applied.
///
/// ```rust,ignore
/// tagval::rule! {
///     pub Positive = "positive", restrictions: 0;
///     check(self, value) {
///         match value {
///             Value::Int(n) if *n < 0 => Err(Failure::Violated),
///             _ => Ok(()),
///         }
///     }
/// }
/// ```
#[macro_export]
macro_rules! rule {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident = $key:literal, restrictions: $min:expr;
        check($self_:ident, $value:ident) $body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            context: $crate::rule::RuleContext,
        }

        impl $name {
            /// Name this rule is registered under by default.
            pub const NAME: &'static str = $key;

            /// Binds the rule to one field's context.
            #[must_use]
            pub fn new(context: $crate::rule::RuleContext) -> Self {
                Self {
                    context: context.require($min),
                }
            }
        }

        impl $crate::rule::Rule for $name {
            fn context(&self) -> &$crate::rule::RuleContext {
                &self.context
            }

            #[allow(unused_variables)]
            fn check(
                &$self_,
                $value: &$crate::reflect::Value<'_>,
            ) -> ::std::result::Result<(), $crate::rule::Failure> $body
        }
    };
}
