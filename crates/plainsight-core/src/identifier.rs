//! Arrowhead marker identifiers.
//!
//! Every [`Arrow`](crate::draw::Arrow) defines its own `<marker>`, and SVG
//! resolves `url(#id)` references document-wide. Two arrows in one image
//! sharing an id would make every line pick up the last-defined arrowhead, so
//! each diagram owns a [`MarkerIdGenerator`] that hands out ids in sequence.
//!
//! # Example
//!
//! ```
//! # use plainsight_core::identifier::MarkerIdGenerator;
//! let mut ids = MarkerIdGenerator::new();
//! assert_eq!(ids.next_id().as_str(), "arrow1");
//! assert_eq!(ids.next_id().as_str(), "arrow2");
//!
//! ids.reset();
//! assert_eq!(ids.next_id().as_str(), "arrow1");
//! ```

use std::fmt;

/// Prefix used by [`MarkerIdGenerator::new`].
pub const DEFAULT_MARKER_PREFIX: &str = "arrow";

/// A marker id, unique within the diagram that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkerId(String);

impl MarkerId {
    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `url(#id)` reference used by `marker-end` attributes.
    pub fn url(&self) -> String {
        format!("url(#{})", self.0)
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Counter producing `prefix1`, `prefix2`, ... until the next [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct MarkerIdGenerator {
    prefix: String,
    counter: usize,
}

impl MarkerIdGenerator {
    /// Creates a generator using the `arrow` prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator using a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }

    /// Restarts the sequence; the next id will end in `1` again.
    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// Returns the next id of the current sequence.
    pub fn next_id(&mut self) -> MarkerId {
        self.counter += 1;
        MarkerId(format!("{}{}", self.prefix, self.counter))
    }

    /// Number of ids handed out since the last reset.
    pub fn issued(&self) -> usize {
        self.counter
    }
}

impl Default for MarkerIdGenerator {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_MARKER_PREFIX)
    }
}
