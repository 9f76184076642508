//! `Destination` implementations for standard library types.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

use super::{Destination, EntryFill, Field};
use crate::error::Result;
use crate::kind::Kind;
use crate::value::{FromValue, Value};

fn store<T: FromValue>(slot: &mut T, value: Value) -> std::result::Result<(), Value> {
    match T::from_value(&value) {
        Some(converted) => {
            *slot = converted;
            Ok(())
        }
        None => Err(value),
    }
}

macro_rules! impl_basic_destination {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Destination for $ty {
                fn kind(&self) -> Kind {
                    Kind::$kind
                }

                fn set_value(&mut self, value: Value) -> std::result::Result<(), Value> {
                    store(self, value)
                }
            }
        )*
    };
}

impl_basic_destination! {
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    isize => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    usize => Uint,
    f32 => Float,
    f64 => Float,
    char => Char,
    String => String,
    Value => Interface,
}

impl Destination for () {
    fn kind(&self) -> Kind {
        Kind::Struct
    }

    fn fields(&self) -> &'static [Field] {
        &[]
    }

    fn field_mut(&mut self, _index: usize) -> Option<&mut dyn Destination> {
        None
    }
}

// =============================================================================
// Pointers
// =============================================================================

impl<T: Destination> Destination for Box<T> {
    fn kind(&self) -> Kind {
        Kind::Pointer
    }

    fn elem_mut(&mut self) -> &mut dyn Destination {
        &mut **self
    }
}

impl<T: Destination + Default> Destination for Option<T> {
    fn kind(&self) -> Kind {
        Kind::Pointer
    }

    fn is_nil(&self) -> bool {
        self.is_none()
    }

    fn make(&mut self, _len: usize) {
        *self = Some(T::default());
    }

    fn elem_mut(&mut self) -> &mut dyn Destination {
        self.get_or_insert_with(T::default)
    }
}

// Shared pointers are written copy-on-write: a pointee shared with other
// owners is cloned first, so other owners never observe the assignment.
impl<T: Destination + Clone> Destination for Rc<T> {
    fn kind(&self) -> Kind {
        Kind::Pointer
    }

    fn elem_mut(&mut self) -> &mut dyn Destination {
        Self::make_mut(self)
    }
}

impl<T: Destination + Clone> Destination for Arc<T> {
    fn kind(&self) -> Kind {
        Kind::Pointer
    }

    fn elem_mut(&mut self) -> &mut dyn Destination {
        Self::make_mut(self)
    }
}

impl<T: Destination> Destination for RefCell<T> {
    fn kind(&self) -> Kind {
        Kind::Pointer
    }

    fn elem_mut(&mut self) -> &mut dyn Destination {
        self.get_mut()
    }
}

// =============================================================================
// Lists
// =============================================================================

// An empty growable list plays the role of a nil slice: it is sized to the
// source. A non-empty one keeps its length.
impl<T: Destination + Default> Destination for Vec<T> {
    fn kind(&self) -> Kind {
        Kind::Slice
    }

    fn is_nil(&self) -> bool {
        self.is_empty()
    }

    fn make(&mut self, len: usize) {
        self.resize_with(len, T::default);
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn index_mut(&mut self, index: usize) -> &mut dyn Destination {
        &mut self[index]
    }
}

impl<T: Destination + Default> Destination for VecDeque<T> {
    fn kind(&self) -> Kind {
        Kind::Slice
    }

    fn is_nil(&self) -> bool {
        self.is_empty()
    }

    fn make(&mut self, len: usize) {
        self.resize_with(len, T::default);
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn index_mut(&mut self, index: usize) -> &mut dyn Destination {
        &mut self[index]
    }
}

impl<T: Destination, const N: usize> Destination for [T; N] {
    fn kind(&self) -> Kind {
        Kind::Array
    }

    fn len(&self) -> usize {
        N
    }

    fn index_mut(&mut self, index: usize) -> &mut dyn Destination {
        &mut self[index]
    }
}

// =============================================================================
// Maps
// =============================================================================

impl<K, V, S> Destination for HashMap<K, V, S>
where
    K: Destination + Default + Eq + Hash,
    V: Destination + Default,
    S: BuildHasher,
{
    fn kind(&self) -> Kind {
        Kind::Map
    }

    fn is_nil(&self) -> bool {
        self.is_empty()
    }

    fn make(&mut self, len: usize) {
        self.reserve(len);
    }

    fn insert_with(&mut self, fill: &mut EntryFill<'_>) -> Result<()> {
        let mut key = K::default();
        let mut value = V::default();
        fill(&mut key, &mut value)?;
        self.insert(key, value);
        Ok(())
    }
}

impl<K, V> Destination for BTreeMap<K, V>
where
    K: Destination + Default + Ord,
    V: Destination + Default,
{
    fn kind(&self) -> Kind {
        Kind::Map
    }

    fn is_nil(&self) -> bool {
        self.is_empty()
    }

    fn make(&mut self, _len: usize) {}

    fn insert_with(&mut self, fill: &mut EntryFill<'_>) -> Result<()> {
        let mut key = K::default();
        let mut value = V::default();
        fill(&mut key, &mut value)?;
        self.insert(key, value);
        Ok(())
    }
}
