//! # assign
//!
//! Structural assignment from type-erased sources into typed Rust values.
//!
//! ## Overview
//!
//! A [`Source`] describes a value of unknown type through its [`Kind`] and a
//! handful of shape operations. An [`Assigner`] walks a source and a typed
//! [`Destination`] together and copies what fits:
//!
//! - **Structs** are matched field by field, by tag or by declared name.
//! - **Lists** are copied positionally; an empty `Vec` is sized to the source.
//! - **Maps** receive one converted entry per source entry.
//! - **Pointers** are unwrapped on the source side and allocated on the
//!   destination side.
//! - **Basic values** are converted as described in [`value`].
//!
//! Zero and absent source values are skipped, leaving the destination as it
//! was. Cyclic sources are reported as [`AssignError::Cycle`] and panics in
//! sources are returned as [`AssignError::Panic`].
//!
//! ## Feature Flags
//!
//! - `derive` (default): `#[derive(Source, Destination)]` for structs
//! - `serde`: `Serialize`/`Deserialize` for [`Options`]
//! - `fxhash`: tracks visited references in an `FxHashSet`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use assign::prelude::*;
//!
//! #[derive(Source)]
//! struct Record {
//!     id: u64,
//!     name: &'static str,
//!     scores: Vec<i64>,
//! }
//!
//! #[derive(Debug, Default, PartialEq, Destination)]
//! struct Summary {
//!     #[assign(rename = "id")]
//!     key: Option<u32>,
//!     name: String,
//!     scores: [f64; 2],
//! }
//!
//! let record = Record {
//!     id: 7,
//!     name: "seven",
//!     scores: vec![3, 4, 5],
//! };
//!
//! let mut summary = Summary::default();
//! Assigner::new(&record).to(&mut summary).unwrap();
//! assert_eq!(
//!     summary,
//!     Summary {
//!         key: Some(7),
//!         name: "seven".to_string(),
//!         scores: [3.0, 4.0],
//!     }
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

extern crate self as assign;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use assign::prelude::*;
/// ```
pub mod prelude {
    pub use crate::assigner::{Assigner, prepare, to_from};
    pub use crate::destination::Destination;
    pub use crate::error::AssignError;
    pub use crate::kind::Kind;
    pub use crate::option::Options;
    pub use crate::source::Source;
    pub use crate::value::Value;

    #[cfg(feature = "derive")]
    pub use assign_derive::{Destination, Source};
}

pub mod assigner;
pub mod destination;
pub mod error;
pub mod identity;
pub mod kind;
mod metadata;
pub mod option;
pub mod source;
pub mod value;

pub use assigner::{Assigner, prepare, to_from};
pub use destination::{Destination, EntryFill, Field};
pub use error::{AssignError, Result};
pub use identity::Identity;
pub use kind::Kind;
pub use option::{DEFAULT_TAG, Options};
pub use source::{DynSource, MapEntries, Nil, Source};
pub use value::{FromValue, Value};

#[cfg(feature = "derive")]
pub use assign_derive::{Destination, Source};
