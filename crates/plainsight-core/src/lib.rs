//! Plainsight Core Types and Definitions
//!
//! This crate provides the building blocks shared by every Plainsight diagram:
//!
//! - **Colors**: CSS color handling ([`color::Color`])
//! - **Theme**: The semantic palette every primitive draws from ([`theme::Theme`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Identifiers**: Per-diagram arrowhead marker ids ([`identifier::MarkerIdGenerator`])
//! - **Draw**: Visual primitives and the scene graph ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
pub mod theme;
