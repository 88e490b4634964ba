//! Plainsight - the explanatory diagrams and charts of the Plainsight
//! documentation page.
//!
//! The catalog is fixed: eight hand-laid diagrams of the encryption pipeline
//! and two charts. Each artifact is composed into a
//! [`Scene`](plainsight_core::draw::Scene) and serialized to a standalone SVG
//! document themed by a [`Theme`](plainsight_core::theme::Theme).
//!
//! # Examples
//!
//! ```
//! use plainsight::Catalog;
//! use plainsight_core::theme::Theme;
//!
//! let catalog = Catalog::build(Theme::gruvbox()).unwrap();
//! assert_eq!(catalog.len(), 10);
//!
//! for (name, markup) in catalog.iter() {
//!     assert!(markup.starts_with("<svg"), "{name}");
//! }
//! ```
//!
//! Persisting the catalog is left to the caller.

pub mod catalog;
pub mod chart;
pub mod diagram;

mod error;

pub use plainsight_core::{color, draw, geometry, identifier, theme};

pub use catalog::{Artifact, Catalog};
pub use error::PlainsightError;
