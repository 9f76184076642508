//! The read-only side of an assignment.
//!
//! A [`Source`] is a capability over a value of unknown concrete type. The
//! engine asks for its [`Kind`] first and then only calls the operations that
//! match that kind. Implementations may panic on mismatched calls; the
//! engine turns such panics into [`AssignError::Panic`](crate::AssignError).
//!
//! The crate implements `Source` for the basic types, strings, smart
//! pointers and std collections, and for user structs via
//! `#[derive(Source)]`. Any other
//! type, such as a view over a decoded document or a mock, can implement it
//! by hand:
//!
//! ```rust
//! use assign::{DynSource, Kind, Source, Value};
//!
//! /// Exposes every field as the same number.
//! struct Constant(i64);
//!
//! struct Everything(i64);
//!
//! impl Source for Constant {
//!     fn kind(&self) -> Kind {
//!         Kind::Int
//!     }
//!     fn skip(&self) -> bool {
//!         false
//!     }
//!     fn value(&self) -> Value {
//!         Value::I64(self.0)
//!     }
//! }
//!
//! impl Source for Everything {
//!     fn kind(&self) -> Kind {
//!         Kind::Struct
//!     }
//!     fn field_by_name(&self, _name: &str) -> DynSource<'_> {
//!         Box::new(Constant(self.0))
//!     }
//!     fn skip(&self) -> bool {
//!         false
//!     }
//! }
//!
//! #[derive(Default, assign::Destination)]
//! struct Pair {
//!     left: u8,
//!     right: f32,
//! }
//!
//! let mut pair = Pair::default();
//! assign::Assigner::new(&Everything(4)).to(&mut pair).unwrap();
//! assert_eq!(pair.left, 4);
//! assert_eq!(pair.right, 4.0);
//! ```

mod native;

use crate::identity::Identity;
use crate::kind::Kind;
use crate::value::Value;

/// A boxed, borrowed source.
pub type DynSource<'a> = Box<dyn Source + 'a>;

/// Iterator over the key/value pairs of a map source.
///
/// The iteration order is whatever the underlying map provides.
pub type MapEntries<'a> = Box<dyn Iterator<Item = (DynSource<'a>, DynSource<'a>)> + 'a>;

/// A value that can be assigned into a [`Destination`](crate::Destination).
///
/// Only [`kind`](Source::kind) and [`skip`](Source::skip) are required; the
/// remaining operations default to a panic and must be provided for the
/// kinds the implementation reports:
///
/// | kind                   | operations                              |
/// |------------------------|-----------------------------------------|
/// | `Pointer`, `Interface` | [`elem`](Source::elem)                  |
/// | `Struct`               | [`field_by_name`](Source::field_by_name)|
/// | `Slice`, `Array`       | [`len`](Source::len), [`index`](Source::index) |
/// | `Map`                  | [`len`](Source::len), [`map_range`](Source::map_range) |
/// | basic kinds            | [`value`](Source::value)                |
///
/// `Pointer`, `Map` and `Slice` sources should also provide
/// [`identity`](Source::identity) unless every caller disables cycle
/// detection.
pub trait Source {
    /// The shape of this value.
    fn kind(&self) -> Kind;

    /// Whether the destination should be left untouched.
    ///
    /// `true` for invalid (absent, nil) and zero values.
    fn skip(&self) -> bool;

    /// The value behind a pointer or interface.
    fn elem(&self) -> DynSource<'_> {
        unsupported(self.kind(), "elem")
    }

    /// The struct field with the given name, or [`Nil`] if there is none.
    fn field_by_name(&self, name: &str) -> DynSource<'_> {
        let _ = name;
        unsupported(self.kind(), "field_by_name")
    }

    /// The number of elements of a slice, array or map.
    fn len(&self) -> usize {
        unsupported(self.kind(), "len")
    }

    /// Returns `true` if [`len`](Source::len) is zero.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element of a slice or array at `index`.
    fn index(&self, index: usize) -> DynSource<'_> {
        let _ = index;
        unsupported(self.kind(), "index")
    }

    /// The reference identity of a pointer, map or slice.
    ///
    /// Never called when cycle detection is disabled.
    fn identity(&self) -> Identity {
        unsupported(self.kind(), "identity")
    }

    /// The entries of a map.
    fn map_range(&self) -> MapEntries<'_> {
        unsupported(self.kind(), "map_range")
    }

    /// The boxed basic value.
    fn value(&self) -> Value {
        unsupported(self.kind(), "value")
    }
}

/// The absent source.
///
/// Reports [`Kind::Invalid`] and is always skipped. Struct sources return it
/// for unknown field names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nil;

impl Source for Nil {
    fn kind(&self) -> Kind {
        Kind::Invalid
    }

    fn skip(&self) -> bool {
        true
    }
}

#[track_caller]
pub(crate) fn unsupported(kind: Kind, operation: &str) -> ! {
    panic!("{operation} is not supported by a source of kind {kind}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_nil_is_skipped() {
        assert_eq!(Nil.kind(), Kind::Invalid);
        assert!(Nil.skip());
    }

    #[rstest]
    #[should_panic(expected = "elem is not supported by a source of kind invalid")]
    fn test_default_operations_panic() {
        let _ = Nil.elem();
    }
}
