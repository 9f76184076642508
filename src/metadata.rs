//! Per-call cycle tracking.

use crate::identity::Identity;
use crate::source::Source;

#[cfg(feature = "fxhash")]
type IdentitySet = rustc_hash::FxHashSet<Identity>;

#[cfg(not(feature = "fxhash"))]
type IdentitySet = std::collections::HashSet<Identity>;

/// The reference identities seen during one assignment call.
///
/// Only created when cycle checks are enabled, so a source's
/// [`identity`](Source::identity) is never read otherwise.
#[derive(Debug)]
pub(crate) struct Metadata {
    visited: IdentitySet,
    current: Option<Identity>,
}

impl Metadata {
    /// Starts tracking with the destination root already visited.
    pub(crate) fn new(root: Identity) -> Self {
        let mut visited = IdentitySet::default();
        if !root.is_none() {
            visited.insert(root);
        }
        Self {
            visited,
            current: None,
        }
    }

    /// Records `source` and returns `true` if its identity was already seen.
    ///
    /// Sources without identity reset the current reference. A source with
    /// the current identity is the same reference seen again through an
    /// unwrap and is not a revisit.
    pub(crate) fn visit(&mut self, source: &dyn Source) -> bool {
        if !source.kind().has_identity() {
            self.current = None;
            return false;
        }
        let identity = source.identity();
        if identity.is_none() {
            self.current = None;
            return false;
        }
        if self.current == Some(identity) {
            return false;
        }
        self.current = Some(identity);
        !self.visited.insert(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::rc::Rc;

    #[rstest]
    fn test_basic_sources_reset_current() {
        let shared = Rc::new(1_i32);
        let mut metadata = Metadata::new(Identity::NONE);
        assert!(!metadata.visit(&shared));
        assert!(!metadata.visit(&5_i32));
        assert!(metadata.visit(&shared));
    }

    #[rstest]
    fn test_same_reference_in_a_row_is_not_a_cycle() {
        let shared = Rc::new(1_i32);
        let mut metadata = Metadata::new(Identity::NONE);
        assert!(!metadata.visit(&shared));
        assert!(!metadata.visit(&shared));
    }

    #[rstest]
    fn test_root_identity_is_visited() {
        let shared = Rc::new(1_i32);
        let mut metadata = Metadata::new(Identity::of(&*shared));
        assert!(metadata.visit(&shared));
    }

    #[rstest]
    fn test_zero_sized_pointees_are_ignored() {
        let first = Rc::new(());
        let second = Rc::new(());
        let mut metadata = Metadata::new(Identity::NONE);
        assert!(!metadata.visit(&first));
        assert!(!metadata.visit(&second));
        assert!(!metadata.visit(&first));
    }
}
