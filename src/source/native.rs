//! `Source` implementations for standard library types.

use std::cell::{Ref, RefCell};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::{Rc, Weak};
use std::sync::Arc;

use super::{DynSource, MapEntries, Nil, Source};
use crate::identity::Identity;
use crate::kind::Kind;
use crate::value::Value;

// References are transparent: they are how sources are borrowed, not a shape.
macro_rules! forward_source {
    () => {
        fn kind(&self) -> Kind {
            T::kind(&**self)
        }

        fn skip(&self) -> bool {
            T::skip(&**self)
        }

        fn elem(&self) -> DynSource<'_> {
            T::elem(&**self)
        }

        fn field_by_name(&self, name: &str) -> DynSource<'_> {
            T::field_by_name(&**self, name)
        }

        fn len(&self) -> usize {
            T::len(&**self)
        }

        fn index(&self, index: usize) -> DynSource<'_> {
            T::index(&**self, index)
        }

        fn identity(&self) -> Identity {
            T::identity(&**self)
        }

        fn map_range(&self) -> MapEntries<'_> {
            T::map_range(&**self)
        }

        fn value(&self) -> Value {
            T::value(&**self)
        }
    };
}

impl<T: Source + ?Sized> Source for &T {
    forward_source!();
}

impl<T: Source + ?Sized> Source for &mut T {
    forward_source!();
}

// =============================================================================
// Basic values
// =============================================================================

macro_rules! impl_basic_source {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Source for $ty {
                fn kind(&self) -> Kind {
                    Value::from(*self).kind()
                }

                fn skip(&self) -> bool {
                    Value::from(*self).is_zero()
                }

                fn value(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

impl_basic_source!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, char);

impl Source for str {
    fn kind(&self) -> Kind {
        Kind::String
    }

    fn skip(&self) -> bool {
        self.is_empty()
    }

    fn value(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl Source for String {
    fn kind(&self) -> Kind {
        Kind::String
    }

    fn skip(&self) -> bool {
        self.is_empty()
    }

    fn value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Source for Value {
    fn kind(&self) -> Kind {
        Self::kind(self)
    }

    fn skip(&self) -> bool {
        self.is_zero()
    }

    fn value(&self) -> Value {
        self.clone()
    }
}

impl Source for () {
    fn kind(&self) -> Kind {
        Kind::Struct
    }

    fn skip(&self) -> bool {
        true
    }

    fn field_by_name(&self, _name: &str) -> DynSource<'_> {
        Box::new(Nil)
    }
}

// =============================================================================
// Pointers
// =============================================================================

impl<T: Source> Source for Box<T> {
    fn kind(&self) -> Kind {
        Kind::Pointer
    }

    fn skip(&self) -> bool {
        false
    }

    fn elem(&self) -> DynSource<'_> {
        Box::new(&**self)
    }

    fn identity(&self) -> Identity {
        Identity::of(&**self)
    }
}

macro_rules! impl_shared_pointer_source {
    ($($pointer:ident),* $(,)?) => {
        $(
            impl<T: Source + ?Sized> Source for $pointer<T> {
                fn kind(&self) -> Kind {
                    Kind::Pointer
                }

                fn skip(&self) -> bool {
                    false
                }

                fn elem(&self) -> DynSource<'_> {
                    Box::new(&**self)
                }

                fn identity(&self) -> Identity {
                    Identity::of(&**self)
                }
            }
        )*
    };
}

impl_shared_pointer_source!(Rc, Arc);

impl<T: Source> Source for Option<T> {
    fn kind(&self) -> Kind {
        Kind::Pointer
    }

    fn skip(&self) -> bool {
        self.is_none()
    }

    fn elem(&self) -> DynSource<'_> {
        match self {
            Some(value) => Box::new(value),
            None => Box::new(Nil),
        }
    }

    fn identity(&self) -> Identity {
        self.as_ref().map_or(Identity::NONE, Identity::of)
    }
}

impl<T: Source + ?Sized> Source for RefCell<T> {
    fn kind(&self) -> Kind {
        Kind::Pointer
    }

    fn skip(&self) -> bool {
        false
    }

    fn elem(&self) -> DynSource<'_> {
        Box::new(Borrowed(self.borrow()))
    }

    fn identity(&self) -> Identity {
        Identity::of(self)
    }
}

/// A shared borrow of a `RefCell`, held for as long as the traversal needs it.
struct Borrowed<'a, T: ?Sized>(Ref<'a, T>);

impl<T: Source + ?Sized> Source for Borrowed<'_, T> {
    fn kind(&self) -> Kind {
        T::kind(&self.0)
    }

    fn skip(&self) -> bool {
        T::skip(&self.0)
    }

    fn elem(&self) -> DynSource<'_> {
        T::elem(&self.0)
    }

    fn field_by_name(&self, name: &str) -> DynSource<'_> {
        T::field_by_name(&self.0, name)
    }

    fn len(&self) -> usize {
        T::len(&self.0)
    }

    fn index(&self, index: usize) -> DynSource<'_> {
        T::index(&self.0, index)
    }

    fn identity(&self) -> Identity {
        T::identity(&self.0)
    }

    fn map_range(&self) -> MapEntries<'_> {
        T::map_range(&self.0)
    }

    fn value(&self) -> Value {
        T::value(&self.0)
    }
}

impl<T: Source> Source for Weak<T> {
    fn kind(&self) -> Kind {
        Kind::Pointer
    }

    fn skip(&self) -> bool {
        self.strong_count() == 0
    }

    fn elem(&self) -> DynSource<'_> {
        match self.upgrade() {
            Some(strong) => Box::new(strong),
            None => Box::new(Nil),
        }
    }

    fn identity(&self) -> Identity {
        self.upgrade()
            .map_or(Identity::NONE, |strong| Identity::of(&*strong))
    }
}

// =============================================================================
// Lists
// =============================================================================

impl<T: Source> Source for [T] {
    fn kind(&self) -> Kind {
        Kind::Slice
    }

    fn skip(&self) -> bool {
        self.is_empty()
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn index(&self, index: usize) -> DynSource<'_> {
        Box::new(&self[index])
    }

    fn identity(&self) -> Identity {
        Identity::of(self)
    }
}

impl<T: Source> Source for Vec<T> {
    fn kind(&self) -> Kind {
        Kind::Slice
    }

    fn skip(&self) -> bool {
        self.is_empty()
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn index(&self, index: usize) -> DynSource<'_> {
        Box::new(&self[index])
    }

    fn identity(&self) -> Identity {
        Identity::of(self.as_slice())
    }
}

impl<T: Source> Source for VecDeque<T> {
    fn kind(&self) -> Kind {
        Kind::Slice
    }

    fn skip(&self) -> bool {
        self.is_empty()
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn index(&self, index: usize) -> DynSource<'_> {
        Box::new(&self[index])
    }

    fn identity(&self) -> Identity {
        Identity::of(self)
    }
}

impl<T: Source, const N: usize> Source for [T; N] {
    fn kind(&self) -> Kind {
        Kind::Array
    }

    fn skip(&self) -> bool {
        self.iter().all(Source::skip)
    }

    fn len(&self) -> usize {
        N
    }

    fn index(&self, index: usize) -> DynSource<'_> {
        Box::new(&self[index])
    }
}

// =============================================================================
// Maps
// =============================================================================

fn entries<'a, K, V>(iter: impl Iterator<Item = (&'a K, &'a V)> + 'a) -> MapEntries<'a>
where
    K: Source + 'a,
    V: Source + 'a,
{
    Box::new(iter.map(|(key, value)| {
        let key: DynSource<'a> = Box::new(key);
        let value: DynSource<'a> = Box::new(value);
        (key, value)
    }))
}

impl<K: Source, V: Source, S> Source for HashMap<K, V, S> {
    fn kind(&self) -> Kind {
        Kind::Map
    }

    fn skip(&self) -> bool {
        self.is_empty()
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn identity(&self) -> Identity {
        Identity::of(self)
    }

    fn map_range(&self) -> MapEntries<'_> {
        entries(self.iter())
    }
}

impl<K: Source, V: Source> Source for BTreeMap<K, V> {
    fn kind(&self) -> Kind {
        Kind::Map
    }

    fn skip(&self) -> bool {
        self.is_empty()
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn identity(&self) -> Identity {
        Identity::of(self)
    }

    fn map_range(&self) -> MapEntries<'_> {
        entries(self.iter())
    }
}
