//! The writable side of an assignment.
//!
//! A [`Destination`] is a typed, settable slot in the destination value
//! graph. It exposes the same shape operations as a
//! [`Source`](crate::Source), but mutating: allocate nil pointers, size empty
//! lists, reach struct fields and list elements, insert map entries and set
//! basic values.
//!
//! Implementations are provided for the standard library types and generated
//! for user structs by `#[derive(Destination)]`; writing one by hand is rarely
//! needed.

mod native;

use std::any::type_name;

use crate::error::Result;
use crate::identity::Identity;
use crate::kind::Kind;
use crate::value::Value;

/// Callback filling a freshly created map key and value.
pub type EntryFill<'f> = dyn FnMut(&mut dyn Destination, &mut dyn Destination) -> Result<()> + 'f;

/// A typed slot that values can be assigned into.
///
/// As with [`Source`](crate::Source), only the operations matching the
/// reported [`kind`](Destination::kind) are called by the engine and the
/// defaults panic:
///
/// | kind              | operations                                                    |
/// |-------------------|---------------------------------------------------------------|
/// | `Pointer`         | [`is_nil`](Destination::is_nil), [`make`](Destination::make), [`elem_mut`](Destination::elem_mut) |
/// | `Struct`          | [`fields`](Destination::fields), [`field_mut`](Destination::field_mut) |
/// | `Slice`           | [`is_nil`](Destination::is_nil), [`make`](Destination::make), [`len`](Destination::len), [`index_mut`](Destination::index_mut) |
/// | `Array`           | [`len`](Destination::len), [`index_mut`](Destination::index_mut) |
/// | `Map`             | [`is_nil`](Destination::is_nil), [`make`](Destination::make), [`insert_with`](Destination::insert_with) |
/// | everything else   | [`set_value`](Destination::set_value)                         |
pub trait Destination {
    /// The shape of this slot.
    fn kind(&self) -> Kind;

    /// The Rust type name of this slot, used in errors.
    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }

    /// The reference identity of this slot's storage.
    fn identity(&self) -> Identity {
        Identity::of(self)
    }

    /// Whether a pointer, list or map slot is still unallocated.
    fn is_nil(&self) -> bool {
        false
    }

    /// Allocates a nil slot; `len` is the source length for lists and a
    /// capacity hint for maps.
    fn make(&mut self, len: usize) {
        let _ = len;
        unsupported(self.type_name(), "make")
    }

    /// The pointee of a pointer slot.
    fn elem_mut(&mut self) -> &mut dyn Destination {
        unsupported(self.type_name(), "elem_mut")
    }

    /// The field table of a struct slot.
    fn fields(&self) -> &'static [Field] {
        unsupported(self.type_name(), "fields")
    }

    /// The struct field at `index` of [`fields`](Destination::fields), or
    /// `None` if the field is not settable.
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Destination> {
        let _ = index;
        unsupported(self.type_name(), "field_mut")
    }

    /// The number of elements of a list slot.
    fn len(&self) -> usize {
        unsupported(self.type_name(), "len")
    }

    /// Returns `true` if [`len`](Destination::len) is zero.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element of a list slot at `index`.
    fn index_mut(&mut self, index: usize) -> &mut dyn Destination {
        let _ = index;
        unsupported(self.type_name(), "index_mut")
    }

    /// Creates a default key and value, lets `fill` assign both and inserts
    /// the pair into a map slot.
    ///
    /// # Errors
    ///
    /// Returns the error of `fill`; nothing is inserted in that case.
    fn insert_with(&mut self, fill: &mut EntryFill<'_>) -> Result<()> {
        let _ = fill;
        unsupported(self.type_name(), "insert_with")
    }

    /// Converts and stores a basic value.
    ///
    /// # Errors
    ///
    /// Hands `value` back if it is not convertible to this slot's type.
    fn set_value(&mut self, value: Value) -> std::result::Result<(), Value> {
        let _ = value;
        unsupported(self.type_name(), "set_value")
    }
}

/// Static description of one struct field.
///
/// Tables of fields are generated by `#[derive(Destination)]`.
///
/// # Examples
///
/// ```rust
/// use assign::Field;
///
/// const FIELD: Field = Field::new("user_name").with_tags(&[("json", "userName")]);
/// assert_eq!(FIELD.tag("json"), Some("userName"));
/// assert_eq!(FIELD.tag("assign"), None);
/// assert!(FIELD.is_settable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    name: &'static str,
    tags: &'static [(&'static str, &'static str)],
    settable: bool,
}

impl Field {
    /// A settable field without tags.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            tags: &[],
            settable: true,
        }
    }

    /// Attaches `(key, value)` tags.
    #[must_use]
    pub const fn with_tags(mut self, tags: &'static [(&'static str, &'static str)]) -> Self {
        self.tags = tags;
        self
    }

    /// Marks the field as never assigned.
    #[must_use]
    pub const fn unsettable(mut self) -> Self {
        self.settable = false;
        self
    }

    /// The declared field name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// All tags of the field.
    pub const fn tags(&self) -> &'static [(&'static str, &'static str)] {
        self.tags
    }

    /// Whether the field may be assigned.
    pub const fn is_settable(&self) -> bool {
        self.settable
    }

    /// The value of the tag `key`; empty values count as absent.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(tag, value)| *tag == key && !value.is_empty())
            .map(|(_, value)| *value)
    }
}

#[track_caller]
fn unsupported(type_name: &str, operation: &str) -> ! {
    panic!("{operation} is not supported by destination type {type_name}")
}
