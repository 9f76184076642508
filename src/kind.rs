//! The closed classification of value shapes.
//!
//! Both sides of an assignment report a [`Kind`]: the destination kind drives
//! dispatch, the source kind is checked against it.

use std::fmt;

/// The shape of a source or destination value.
///
/// # Examples
///
/// ```rust
/// use assign::Kind;
///
/// assert!(Kind::Slice.is_list());
/// assert!(Kind::Pointer.has_identity());
/// assert!(!Kind::Struct.has_identity());
/// assert_eq!(Kind::Pointer.to_string(), "ptr");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// An absent value, such as a missing struct field or [`Nil`](crate::Nil).
    Invalid,
    /// `bool`.
    Bool,
    /// Signed integers.
    Int,
    /// Unsigned integers.
    Uint,
    /// `f32` and `f64`.
    Float,
    /// `char`.
    Char,
    /// Strings.
    String,
    /// A nullable or shared indirection (`Box`, `Option`, `Rc`, `RefCell`, ...).
    Pointer,
    /// A dynamically typed holder of another value.
    Interface,
    /// A record with named fields.
    Struct,
    /// A keyed collection.
    Map,
    /// A growable list.
    Slice,
    /// A fixed-size list.
    Array,
    /// Anything the engine has no shape operations for.
    Other,
}

impl Kind {
    /// Returns `true` for kinds whose values carry a reference identity.
    ///
    /// Only these kinds take part in cycle detection.
    #[inline]
    pub const fn has_identity(self) -> bool {
        matches!(self, Self::Pointer | Self::Map | Self::Slice)
    }

    /// Returns `true` for kinds that are unwrapped transparently on the
    /// source side.
    #[inline]
    pub const fn is_indirect(self) -> bool {
        matches!(self, Self::Pointer | Self::Interface)
    }

    /// Returns `true` for slices and arrays.
    #[inline]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::Slice | Self::Array)
    }

    /// Returns `true` for the scalar kinds handled by value conversion.
    #[inline]
    pub const fn is_basic(self) -> bool {
        matches!(
            self,
            Self::Bool | Self::Int | Self::Uint | Self::Float | Self::Char | Self::String
        )
    }

    /// Returns the lowercase name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Char => "char",
            Self::String => "string",
            Self::Pointer => "ptr",
            Self::Interface => "interface",
            Self::Struct => "struct",
            Self::Map => "map",
            Self::Slice => "slice",
            Self::Array => "array",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Kind::Pointer, true)]
    #[case(Kind::Map, true)]
    #[case(Kind::Slice, true)]
    #[case(Kind::Array, false)]
    #[case(Kind::Interface, false)]
    #[case(Kind::Struct, false)]
    #[case(Kind::Int, false)]
    #[case(Kind::Other, false)]
    fn test_has_identity(#[case] kind: Kind, #[case] expected: bool) {
        assert_eq!(kind.has_identity(), expected);
    }

    #[rstest]
    fn test_indirect_kinds() {
        assert!(Kind::Pointer.is_indirect());
        assert!(Kind::Interface.is_indirect());
        assert!(!Kind::Map.is_indirect());
    }

    #[rstest]
    fn test_display_uses_lowercase_names() {
        assert_eq!(format!("{}", Kind::Invalid), "invalid");
        assert_eq!(format!("{}", Kind::Interface), "interface");
        assert_eq!(format!("{}", Kind::Uint), "uint");
    }
}
