//! Reference identity tokens used for cycle detection.

use std::any::type_name;
use std::mem::size_of_val;

/// An opaque, comparable token standing in for the address of a value.
///
/// The token pairs the storage address with the name of the stored type, so
/// a container and its first element, which may share an address, are still
/// distinct. Zero-sized values all live at the same dangling address and
/// therefore have no identity: [`Identity::of`] returns [`Identity::NONE`]
/// for them.
///
/// Custom [`Source`](crate::Source) implementations that do not wrap Rust
/// memory can build tokens from any stable per-object number with
/// [`Identity::from_token`].
///
/// # Examples
///
/// ```rust
/// use assign::Identity;
///
/// let numbers = vec![1, 2, 3];
/// assert_eq!(Identity::of(numbers.as_slice()), Identity::of(&numbers[..]));
/// assert_ne!(Identity::of(&numbers), Identity::of(numbers.as_slice()));
/// assert!(Identity::of(&()).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity {
    address: usize,
    type_name: &'static str,
}

impl Identity {
    /// The absent identity.
    pub const NONE: Self = Self {
        address: 0,
        type_name: "",
    };

    /// Returns the identity of the value behind `value`.
    pub fn of<T: ?Sized>(value: &T) -> Self {
        if size_of_val(value) == 0 {
            return Self::NONE;
        }
        Self {
            address: std::ptr::from_ref(value).cast::<()>() as usize,
            type_name: type_name::<T>(),
        }
    }

    /// Builds an identity from a caller-chosen token.
    ///
    /// Tokens are only compared with tokens built the same way; `0` is
    /// reserved for [`Identity::NONE`].
    pub const fn from_token(token: usize) -> Self {
        Self {
            address: token,
            type_name: "token",
        }
    }

    /// Returns `true` for [`Identity::NONE`].
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.address == 0
    }
}
