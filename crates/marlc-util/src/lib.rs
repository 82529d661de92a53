//! marlc-util - Shared foundation types for the Marl front end.
//!
//! This crate holds the small set of types every compiler phase needs:
//! source positions ([`Location`], [`Span`]) and the positioned fatal
//! error type ([`StaticError`]) that the lexer and parser report.
//!
//! Nothing in here knows about tokens or syntax; it is the bottom of the
//! dependency graph.

pub mod error;
pub mod span;

pub use error::{StaticError, StaticResult};
pub use span::{Location, Span};
