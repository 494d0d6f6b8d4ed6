//! # Attribute Type Composition
//!
//! An alternative produces one attribute type no matter which branch matched.
//! [`MoreGeneral`] names that type for a pair of branch types: the one both of
//! them convert into without loss. Pairs with no such type have no impl, so an
//! incompatible alternative is rejected by the compiler.

/// The attribute type that both `Self` and `Other` widen into.
///
/// ```
/// use pcomb::prelude::*;
///
/// let word = alt((ch('_'), literal("ab").map(String::from)));
/// let (_, value): (_, String) = word.parse_str("_").unwrap();
/// assert_eq!(value, "_");
/// ```
///
/// Branches without a common type are rejected when the alternative is used:
///
/// ```compile_fail
/// use pcomb::prelude::*;
///
/// let mixed = alt((ch('a'), rule(ch('b'), |_| 1.5f32)));
/// let _ = mixed.parse_str("a");
/// ```
pub trait MoreGeneral<Other> {
    type Output;

    fn widen_left(self) -> Self::Output;
    fn widen_right(other: Other) -> Self::Output;
}

impl<T> MoreGeneral<T> for T {
    type Output = T;

    fn widen_left(self) -> T {
        self
    }

    fn widen_right(other: T) -> T {
        other
    }
}

/// Declares that `$narrow` widens losslessly into `$wide`, in both argument
/// orders. `$wide` must implement `From<$narrow>`.
///
/// ```
/// use pcomb::prelude::*;
///
/// #[derive(Debug, PartialEq)]
/// struct Name(String);
///
/// #[derive(Debug, PartialEq)]
/// enum Atom {
///     Name(String),
///     Number(u32),
/// }
///
/// impl From<Name> for Atom {
///     fn from(name: Name) -> Self {
///         Atom::Name(name.0)
///     }
/// }
///
/// pcomb::more_general!(Name => Atom);
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let name = regex("[a-z]+")?.map(|word: Span| Name(word.into()));
/// let number = try_rule(regex("[0-9]+")?, |digits: Span| digits.parse().map(Atom::Number));
/// let atom = alt((name, number));
///
/// assert_eq!(atom.parse_str("abc")?.1, Atom::Name("abc".to_string()));
/// assert_eq!(atom.parse_str("17")?.1, Atom::Number(17));
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! more_general {
    ($($narrow:ty => $wide:ty),+ $(,)?) => {
        $(
            impl $crate::MoreGeneral<$wide> for $narrow {
                type Output = $wide;

                fn widen_left(self) -> $wide {
                    <$wide as ::std::convert::From<$narrow>>::from(self)
                }

                fn widen_right(other: $wide) -> $wide {
                    other
                }
            }

            impl $crate::MoreGeneral<$narrow> for $wide {
                type Output = $wide;

                fn widen_left(self) -> $wide {
                    self
                }

                fn widen_right(other: $narrow) -> $wide {
                    <$wide as ::std::convert::From<$narrow>>::from(other)
                }
            }
        )+
    };
}

more_general!(
    char => String,
    crate::Span => String,
    char => u32,
    u8 => u16,
    u8 => u32,
    u8 => u64,
    u8 => i16,
    u8 => i32,
    u8 => i64,
    u16 => u32,
    u16 => u64,
    u16 => i32,
    u16 => i64,
    u32 => u64,
    u32 => i64,
    u32 => f64,
    i8 => i16,
    i8 => i32,
    i8 => i64,
    i16 => i32,
    i16 => i64,
    i32 => i64,
    i32 => f64,
    f32 => f64,
);

// A character and a matched slice meet in `String`, which neither converts
// into the other.
impl MoreGeneral<crate::Span> for char {
    type Output = String;

    fn widen_left(self) -> String {
        self.to_string()
    }

    fn widen_right(other: crate::Span) -> String {
        other.into()
    }
}

impl MoreGeneral<char> for crate::Span {
    type Output = String;

    fn widen_left(self) -> String {
        self.into()
    }

    fn widen_right(other: char) -> String {
        other.to_string()
    }
}
