//! Derive macros for `assign` sources and destinations.
//!
//! # Available Derive Macros
//!
//! - [`Source`]: exposes a struct's fields by name to the assignment engine
//! - [`Destination`]: lets the engine write a struct field by field
//!
//! Both macros accept `#[assign(...)]` on fields:
//!
//! - `rename = "name"`: the lookup name under the default `assign` tag key
//! - `tag(json = "name", ...)`: lookup names under other tag keys
//! - `skip`: the field is neither read nor written
//!
//! # Example
//!
//! ```rust,ignore
//! use assign::{Destination, Source};
//!
//! #[derive(Source)]
//! struct Input {
//!     user_name: String,
//! }
//!
//! #[derive(Default, Destination)]
//! struct Output {
//!     #[assign(rename = "user_name")]
//!     name: String,
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod attributes;
mod destination;
mod source;

use proc_macro::TokenStream;

/// Derive macro implementing `assign::Source` for a struct.
///
/// The generated source reports `Kind::Struct`, is skipped when every field
/// is skipped, and resolves `field_by_name` against the declared field names
/// (raw identifiers without `r#`). Unknown names yield `assign::Nil`.
///
/// # Requirements
///
/// - The struct must have named fields or be a unit struct
/// - Every field not marked `#[assign(skip)]` must implement `Source`
///
/// Tags are ignored on the source side: the destination decides which name
/// it looks up.
///
/// # Example
///
/// ```rust,ignore
/// use assign::Source;
///
/// #[derive(Source)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let point = Point { x: 1, y: 0 };
/// assert_eq!(point.field_by_name("x").value(), assign::Value::I32(1));
/// assert!(point.field_by_name("z").skip());
/// ```
///
/// # Generics
///
/// Generic structs get a `FieldType: Source` bound for every field:
///
/// ```rust,ignore
/// #[derive(Source)]
/// struct Wrapper<T> {
///     inner: T,
/// }
/// ```
#[proc_macro_derive(Source, attributes(assign))]
pub fn derive_source(input: TokenStream) -> TokenStream {
    source::derive_source_impl(input)
}

/// Derive macro implementing `assign::Destination` for a struct.
///
/// The generated destination reports `Kind::Struct`, exposes a constant
/// field table carrying names and tags, and hands out each settable field
/// by index.
///
/// # Requirements
///
/// - The struct must have named fields or be a unit struct
/// - Every field not marked `#[assign(skip)]` must implement `Destination`
///
/// # Example
///
/// ```rust,ignore
/// use assign::Destination;
///
/// #[derive(Default, Destination)]
/// struct Account {
///     #[assign(rename = "ID", tag(json = "id"))]
///     id: u64,
///     #[assign(skip)]
///     cache: Vec<u8>,
/// }
///
/// let account = Account::default();
/// assert_eq!(account.fields()[0].tag("json"), Some("id"));
/// assert!(!account.fields()[1].is_settable());
/// ```
#[proc_macro_derive(Destination, attributes(assign))]
pub fn derive_destination(input: TokenStream) -> TokenStream {
    destination::derive_destination_impl(input)
}
