//! Boxed basic values and the conversions between them.
//!
//! A [`Value`] is what a basic [`Source`](crate::Source) hands to the engine
//! through [`Source::value`](crate::Source::value). Basic destinations accept
//! it through [`FromValue`], which encodes which basic types are convertible
//! into which.
//!
//! # Conversion rules
//!
//! | destination          | accepted values                                  |
//! |----------------------|--------------------------------------------------|
//! | `bool`               | `Bool`                                           |
//! | integers and floats  | any integer, float or `Char` (`as` semantics)    |
//! | `char`               | `Char`, any integer (invalid code points → U+FFFD) |
//! | `String`             | `String`, `Char`                                 |
//! | [`Value`]            | any non-nil value, unchanged                     |

use std::fmt;

use crate::kind::Kind;

/// A dynamically typed basic value.
///
/// `Value` doubles as the dynamic "interface" slot: as a destination it
/// accepts any basic value and keeps its concrete type.
///
/// # Examples
///
/// ```rust
/// use assign::{FromValue, Kind, Value};
///
/// let value = Value::from(300_i32);
/// assert_eq!(value.kind(), Kind::Int);
/// assert_eq!(u8::from_value(&value), Some(44));
/// assert_eq!(String::from_value(&value), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value.
    #[default]
    Nil,
    /// A `bool`.
    Bool(bool),
    /// An `i8`.
    I8(i8),
    /// An `i16`.
    I16(i16),
    /// An `i32`.
    I32(i32),
    /// An `i64`.
    I64(i64),
    /// An `isize`.
    Isize(isize),
    /// A `u8`.
    U8(u8),
    /// A `u16`.
    U16(u16),
    /// A `u32`.
    U32(u32),
    /// A `u64`.
    U64(u64),
    /// A `usize`.
    Usize(usize),
    /// An `f32`.
    F32(f32),
    /// An `f64`.
    F64(f64),
    /// A `char`.
    Char(char),
    /// A `String`.
    String(String),
}

impl Value {
    /// Returns the kind of the contained value.
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Invalid,
            Self::Bool(_) => Kind::Bool,
            Self::I8(_) | Self::I16(_) | Self::I32(_) | Self::I64(_) | Self::Isize(_) => Kind::Int,
            Self::U8(_) | Self::U16(_) | Self::U32(_) | Self::U64(_) | Self::Usize(_) => {
                Kind::Uint
            }
            Self::F32(_) | Self::F64(_) => Kind::Float,
            Self::Char(_) => Kind::Char,
            Self::String(_) => Kind::String,
        }
    }

    /// Returns `true` for [`Value::Nil`].
    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns `true` when the value equals the default of its type.
    ///
    /// Floats are zero only when every bit is zero, so `-0.0` is not zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Nil => true,
            Self::Bool(value) => !value,
            Self::I8(value) => *value == 0,
            Self::I16(value) => *value == 0,
            Self::I32(value) => *value == 0,
            Self::I64(value) => *value == 0,
            Self::Isize(value) => *value == 0,
            Self::U8(value) => *value == 0,
            Self::U16(value) => *value == 0,
            Self::U32(value) => *value == 0,
            Self::U64(value) => *value == 0,
            Self::Usize(value) => *value == 0,
            Self::F32(value) => value.to_bits() == 0,
            Self::F64(value) => value.to_bits() == 0,
            Self::Char(value) => *value == '\0',
            Self::String(value) => value.is_empty(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => formatter.write_str("nil"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::I8(value) => write!(formatter, "{value}"),
            Self::I16(value) => write!(formatter, "{value}"),
            Self::I32(value) => write!(formatter, "{value}"),
            Self::I64(value) => write!(formatter, "{value}"),
            Self::Isize(value) => write!(formatter, "{value}"),
            Self::U8(value) => write!(formatter, "{value}"),
            Self::U16(value) => write!(formatter, "{value}"),
            Self::U32(value) => write!(formatter, "{value}"),
            Self::U64(value) => write!(formatter, "{value}"),
            Self::Usize(value) => write!(formatter, "{value}"),
            Self::F32(value) => write!(formatter, "{value}"),
            Self::F64(value) => write!(formatter, "{value}"),
            Self::Char(value) => write!(formatter, "{value:?}"),
            Self::String(value) => write!(formatter, "{value:?}"),
        }
    }
}

/// Conversion from a boxed [`Value`] into a basic Rust type.
///
/// Returns `None` when the value's type is not convertible.
pub trait FromValue: Sized {
    /// Converts the value, or returns `None` if it is not convertible.
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

macro_rules! impl_numeric {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl FromValue for $ty {
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss,
                    clippy::cast_possible_wrap,
                    clippy::cast_lossless,
                    clippy::unnecessary_cast
                )]
                fn from_value(value: &Value) -> Option<Self> {
                    match *value {
                        Value::I8(value) => Some(value as $ty),
                        Value::I16(value) => Some(value as $ty),
                        Value::I32(value) => Some(value as $ty),
                        Value::I64(value) => Some(value as $ty),
                        Value::Isize(value) => Some(value as $ty),
                        Value::U8(value) => Some(value as $ty),
                        Value::U16(value) => Some(value as $ty),
                        Value::U32(value) => Some(value as $ty),
                        Value::U64(value) => Some(value as $ty),
                        Value::Usize(value) => Some(value as $ty),
                        Value::F32(value) => Some(value as $ty),
                        Value::F64(value) => Some(value as $ty),
                        Value::Char(value) => Some(u32::from(value) as $ty),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_numeric! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}

impl FromValue for char {
    fn from_value(value: &Value) -> Option<Self> {
        let code = match *value {
            Value::Char(value) => return Some(value),
            Value::I8(value) => u32::try_from(value).ok(),
            Value::I16(value) => u32::try_from(value).ok(),
            Value::I32(value) => u32::try_from(value).ok(),
            Value::I64(value) => u32::try_from(value).ok(),
            Value::Isize(value) => u32::try_from(value).ok(),
            Value::U8(value) => Some(u32::from(value)),
            Value::U16(value) => Some(u32::from(value)),
            Value::U32(value) => Some(value),
            Value::U64(value) => u32::try_from(value).ok(),
            Value::Usize(value) => u32::try_from(value).ok(),
            _ => return None,
        };
        Some(
            code.and_then(Self::from_u32)
                .unwrap_or(Self::REPLACEMENT_CHARACTER),
        )
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(value) => Some(value.clone()),
            Value::Char(value) => Some(value.to_string()),
            _ => None,
        }
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        (!value.is_nil()).then(|| value.clone())
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Value {
    #[inline]
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}
