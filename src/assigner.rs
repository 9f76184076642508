//! The recursive assignment engine.
//!
//! An [`Assigner`] walks a destination and a [`Source`] in lockstep. The
//! destination kind drives dispatch; the source is unwrapped through pointers
//! and interfaces transparently and checked against what the destination
//! expects at every step.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use assign::{Assigner, Options};
//!
//! let source: BTreeMap<&str, Vec<i64>> = [("a", vec![1, 2]), ("b", vec![3])]
//!     .into_iter()
//!     .collect();
//!
//! let assigner = assign::prepare(&source, Options::default());
//!
//! let mut narrow: BTreeMap<String, Vec<u8>> = BTreeMap::new();
//! assigner.to(&mut narrow).unwrap();
//! assert_eq!(narrow["a"], vec![1, 2]);
//!
//! let mut fixed: BTreeMap<String, [f32; 1]> = BTreeMap::new();
//! assigner.to(&mut fixed).unwrap();
//! assert_eq!(fixed["a"], [1.0]);
//! ```

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::destination::{Destination, Field};
use crate::error::{AssignError, Result};
use crate::identity::Identity;
use crate::kind::Kind;
use crate::metadata::Metadata;
use crate::option::Options;
use crate::source::Source;

/// Assigns one source to any number of destinations.
///
/// The assigner holds the source by reference and never mutates itself, so
/// a single instance can be applied repeatedly.
#[derive(Clone)]
pub struct Assigner<'s> {
    source: &'s dyn Source,
    options: Options,
}

impl<'s> Assigner<'s> {
    /// Creates an assigner with the default [`Options`].
    pub fn new(source: &'s dyn Source) -> Self {
        Self::with_options(source, Options::default())
    }

    /// Creates an assigner with the given options.
    pub const fn with_options(source: &'s dyn Source, options: Options) -> Self {
        Self { source, options }
    }

    /// Appends tag keys used to resolve struct field names.
    ///
    /// See [`Options::with_tags`].
    #[must_use]
    pub fn with_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.options = self.options.with_tags(tags);
        self
    }

    /// Disables cycle detection.
    ///
    /// See [`Options::without_cycle_check`].
    #[must_use]
    pub fn without_cycle_check(mut self) -> Self {
        self.options = self.options.without_cycle_check();
        self
    }

    /// The options in effect.
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Assigns the source to `destination`.
    ///
    /// Fields, elements and entries the source skips are left untouched. The
    /// destination may be partially written when an error is returned.
    ///
    /// # Errors
    ///
    /// - [`AssignError::Type`] if some part of the source does not fit the
    ///   destination.
    /// - [`AssignError::Cycle`] if cycle checks are enabled and the source
    ///   revisits a reference.
    /// - [`AssignError::Panic`] if a source or destination panicked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assign::{AssignError, Assigner, Kind};
    ///
    /// let mut number: Option<u32> = None;
    /// Assigner::new(&12_i8).to(&mut number).unwrap();
    /// assert_eq!(number, Some(12));
    ///
    /// let error = Assigner::new(&"twelve").to(&mut number).unwrap_err();
    /// assert_eq!(
    ///     error,
    ///     AssignError::Type {
    ///         destination: Some("u32"),
    ///         source_kind: Kind::String,
    ///     }
    /// );
    /// ```
    pub fn to<T: Destination>(&self, destination: &mut T) -> Result<()> {
        recover(|| {
            let mut metadata = self.metadata(Identity::of(&*destination));
            self.assign(destination, self.source, &mut metadata)
        })
    }

    /// Assigns the source through a type-erased destination.
    ///
    /// The destination must be a pointer slot that is already allocated; its
    /// pointee receives the assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AssignError::Type`] naming the destination type when it is
    /// not a pointer, and naming no type when the pointer is nil; nothing is
    /// written in either case. Otherwise fails like [`Assigner::to`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assign::{Assigner, Destination};
    ///
    /// let mut slot: Option<String> = None;
    /// let destination: &mut dyn Destination = &mut slot;
    /// assert!(Assigner::new(&'x').to_dyn(destination).is_err());
    ///
    /// let mut boxed = Box::new(String::new());
    /// Assigner::new(&'x').to_dyn(&mut boxed).unwrap();
    /// assert_eq!(*boxed, "x");
    /// ```
    pub fn to_dyn(&self, destination: &mut dyn Destination) -> Result<()> {
        recover(|| {
            let source_kind = self.source.kind();
            if destination.kind() != Kind::Pointer {
                return Err(mismatch(destination, source_kind));
            }
            if destination.is_nil() {
                tracing::debug!(source = %source_kind, "destination root is a nil pointer");
                return Err(AssignError::Type {
                    destination: None,
                    source_kind,
                });
            }
            let pointee = destination.elem_mut();
            let mut metadata = self.metadata(pointee.identity());
            self.assign(pointee, self.source, &mut metadata)
        })
    }

    fn metadata(&self, root: Identity) -> Option<Metadata> {
        self.options.cycle_check().then(|| Metadata::new(root))
    }

    fn assign(
        &self,
        destination: &mut dyn Destination,
        source: &dyn Source,
        metadata: &mut Option<Metadata>,
    ) -> Result<()> {
        if source.skip() {
            return Ok(());
        }
        if let Some(tracker) = metadata.as_mut()
            && tracker.visit(source)
        {
            let source_kind = source.kind();
            tracing::debug!(
                destination = destination.type_name(),
                source = %source_kind,
                "cycle detected"
            );
            return Err(AssignError::Cycle {
                destination: destination.type_name(),
                source_kind,
            });
        }

        let source_kind = source.kind();
        if source_kind.is_indirect() {
            let inner = source.elem();
            return self.assign(destination, &*inner, metadata);
        }

        let destination_kind = destination.kind();
        tracing::trace!(
            destination = destination.type_name(),
            kind = %destination_kind,
            source = %source_kind,
            "assign"
        );
        match destination_kind {
            Kind::Pointer => self.assign_pointer(destination, source, metadata),
            Kind::Struct => self.assign_struct(destination, source, metadata),
            Kind::Map => self.assign_map(destination, source, metadata),
            Kind::Slice => self.assign_slice(destination, source, metadata),
            Kind::Array => self.assign_array(destination, source, metadata),
            _ => assign_basic(destination, source),
        }
    }

    fn assign_pointer(
        &self,
        destination: &mut dyn Destination,
        source: &dyn Source,
        metadata: &mut Option<Metadata>,
    ) -> Result<()> {
        if destination.is_nil() {
            destination.make(0);
        }
        self.assign(destination.elem_mut(), source, metadata)
    }

    fn assign_struct(
        &self,
        destination: &mut dyn Destination,
        source: &dyn Source,
        metadata: &mut Option<Metadata>,
    ) -> Result<()> {
        let source_kind = source.kind();
        if source_kind != Kind::Struct {
            return Err(mismatch(destination, source_kind));
        }
        for (index, field) in destination.fields().iter().enumerate() {
            if !field.is_settable() {
                continue;
            }
            let value = source.field_by_name(self.name_of(field));
            if let Some(slot) = destination.field_mut(index) {
                self.assign(slot, &*value, metadata)?;
            }
        }
        Ok(())
    }

    fn assign_map(
        &self,
        destination: &mut dyn Destination,
        source: &dyn Source,
        metadata: &mut Option<Metadata>,
    ) -> Result<()> {
        let source_kind = source.kind();
        if source_kind != Kind::Map {
            return Err(mismatch(destination, source_kind));
        }
        if destination.is_nil() {
            destination.make(source.len());
        }
        for (key, value) in source.map_range() {
            destination.insert_with(&mut |key_slot, value_slot| {
                self.assign(key_slot, &*key, metadata)?;
                self.assign(value_slot, &*value, metadata)
            })?;
        }
        Ok(())
    }

    fn assign_slice(
        &self,
        destination: &mut dyn Destination,
        source: &dyn Source,
        metadata: &mut Option<Metadata>,
    ) -> Result<()> {
        let source_kind = source.kind();
        if !source_kind.is_list() {
            return Err(mismatch(destination, source_kind));
        }
        if destination.is_nil() {
            destination.make(source.len());
        }
        self.assign_list(destination, source, metadata)
    }

    fn assign_array(
        &self,
        destination: &mut dyn Destination,
        source: &dyn Source,
        metadata: &mut Option<Metadata>,
    ) -> Result<()> {
        let source_kind = source.kind();
        if !source_kind.is_list() {
            return Err(mismatch(destination, source_kind));
        }
        self.assign_list(destination, source, metadata)
    }

    // Copies the common prefix; surplus elements on either side are ignored.
    fn assign_list(
        &self,
        destination: &mut dyn Destination,
        source: &dyn Source,
        metadata: &mut Option<Metadata>,
    ) -> Result<()> {
        let len = source.len().min(destination.len());
        for index in 0..len {
            let element = source.index(index);
            self.assign(destination.index_mut(index), &*element, metadata)?;
        }
        Ok(())
    }

    /// The first configured tag value of `field`, or its declared name.
    fn name_of(&self, field: &Field) -> &'static str {
        self.options
            .tags()
            .iter()
            .find_map(|tag| field.tag(tag))
            .unwrap_or_else(|| field.name())
    }
}

impl std::fmt::Debug for Assigner<'_> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Assigner")
            .field("source", &self.source.kind())
            .field("options", &self.options)
            .finish()
    }
}

fn assign_basic(destination: &mut dyn Destination, source: &dyn Source) -> Result<()> {
    let source_kind = source.kind();
    if !source_kind.is_basic() {
        return Err(mismatch(destination, source_kind));
    }
    match destination.set_value(source.value()) {
        Ok(()) => Ok(()),
        Err(rejected) => Err(mismatch(destination, rejected.kind())),
    }
}

fn recover(walk: impl FnOnce() -> Result<()>) -> Result<()> {
    catch_unwind(AssertUnwindSafe(walk)).unwrap_or_else(|payload| {
        let message = panic_message(payload.as_ref());
        tracing::warn!(%message, "contained a panic during assignment");
        Err(AssignError::Panic { message })
    })
}

fn mismatch(destination: &dyn Destination, source_kind: Kind) -> AssignError {
    let destination = destination.type_name();
    tracing::debug!(destination, source = %source_kind, "type mismatch");
    AssignError::mismatch(destination, source_kind)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_owned()
    }
}

/// Assigns `source` to `destination` in one call.
///
/// Equivalent to `prepare(source, options).to(destination)`.
///
/// # Errors
///
/// See [`Assigner::to`].
///
/// # Examples
///
/// ```rust
/// use assign::Options;
///
/// let mut numbers = [0_u8; 2];
/// assign::to_from(&mut numbers, &vec![1_i32, 2, 3], Options::default()).unwrap();
/// assert_eq!(numbers, [1, 2]);
/// ```
pub fn to_from<T: Destination>(
    destination: &mut T,
    source: &dyn Source,
    options: Options,
) -> Result<()> {
    prepare(source, options).to(destination)
}

/// Creates a reusable [`Assigner`] for `source`.
pub const fn prepare(source: &dyn Source, options: Options) -> Assigner<'_> {
    Assigner::with_options(source, options)
}
