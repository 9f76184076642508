//! Configuration of an [`Assigner`](crate::Assigner).

/// The tag key consulted first when resolving struct field names.
pub const DEFAULT_TAG: &str = "assign";

/// Options controlling field lookup and cycle detection.
///
/// # Examples
///
/// ```rust
/// use assign::Options;
///
/// let options = Options::default().with_tags(["json"]).without_cycle_check();
/// assert_eq!(options.tags(), ["assign", "json"]);
/// assert!(!options.cycle_check());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    tags: Vec<String>,
    cycle_check: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tags: vec![DEFAULT_TAG.to_owned()],
            cycle_check: true,
        }
    }
}

impl Options {
    /// Creates the default options: the `assign` tag key and cycle checks on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends tag keys, consulted in order after the existing ones.
    #[must_use]
    pub fn with_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Disables cycle detection.
    ///
    /// [`Source::identity`](crate::Source::identity) is never called, so
    /// sources without a meaningful identity can be used. The input must
    /// then be acyclic.
    #[must_use]
    pub const fn without_cycle_check(mut self) -> Self {
        self.cycle_check = false;
        self
    }

    /// The tag keys in lookup order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether cycle detection is enabled.
    pub const fn cycle_check(&self) -> bool {
        self.cycle_check
    }
}

static_assertions::assert_impl_all!(Options: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_default_options() {
        let options = Options::new();
        assert_eq!(options.tags(), [DEFAULT_TAG]);
        assert!(options.cycle_check());
    }

    #[rstest]
    fn test_with_tags_appends_in_order() {
        let options = Options::new()
            .with_tags(["json"])
            .with_tags(vec![String::from("yaml"), String::from("toml")]);
        assert_eq!(options.tags(), ["assign", "json", "yaml", "toml"]);
    }

    #[rstest]
    fn test_without_cycle_check() {
        assert!(!Options::new().without_cycle_check().cycle_check());
    }
}
