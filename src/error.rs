//! Errors produced by an assignment run.
//!
//! Every error is terminal for the call that produced it. The destination may
//! already be partially written when an error is returned and should be
//! treated as undefined.

use thiserror::Error;

use crate::kind::Kind;

/// The result type of assignment operations.
pub type Result<T> = std::result::Result<T, AssignError>;

/// An assignment failure.
///
/// # Examples
///
/// ```rust
/// use assign::{AssignError, Kind};
///
/// let error = AssignError::Type {
///     destination: None,
///     source_kind: Kind::Int,
/// };
/// assert_eq!(
///     error.to_string(),
///     "failed to assign to type: nil from source kind: int"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    /// The destination type cannot hold a value of the source kind.
    ///
    /// `destination` is `None` when the destination root was a nil pointer.
    #[error(
        "failed to assign to type: {} from source kind: {source_kind}",
        .destination.unwrap_or("nil")
    )]
    Type {
        /// The destination type name.
        destination: Option<&'static str>,
        /// The kind of the offending source.
        source_kind: Kind,
    },

    /// A reference identity was visited twice during one traversal.
    #[error("cyclical assign found at type: \"{destination}\" and source kind: \"{source_kind}\"")]
    Cycle {
        /// The destination type name at the point of detection.
        destination: &'static str,
        /// The kind of the revisited source.
        source_kind: Kind,
    },

    /// A panic escaped from a source or destination during traversal.
    ///
    /// This indicates a defect in a [`Source`](crate::Source) implementation
    /// or in this crate and should be reported rather than recovered from.
    #[error("unexpected panic: {message}")]
    Panic {
        /// The panic payload rendered as text.
        message: String,
    },
}

impl AssignError {
    pub(crate) const fn mismatch(destination: &'static str, source_kind: Kind) -> Self {
        Self::Type {
            destination: Some(destination),
            source_kind,
        }
    }

    /// Returns `true` for [`AssignError::Type`].
    pub const fn is_type(&self) -> bool {
        matches!(self, Self::Type { .. })
    }

    /// Returns `true` for [`AssignError::Cycle`].
    pub const fn is_cycle(&self) -> bool {
        matches!(self, Self::Cycle { .. })
    }

    /// Returns `true` for [`AssignError::Panic`].
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panic { .. })
    }
}

static_assertions::assert_impl_all!(AssignError: Send, Sync, Clone);
