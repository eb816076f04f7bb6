//! Domain models for the family tree document.
//!
//! # Core Concepts
//!
//! - [`Document`]: the persisted record: [`Meta`], people and relationships.
//! - [`Person`]: one individual, keyed by a unique, stable string id.
//! - [`Relationship`]: an edge between people, either a [`Spouse`] pair or a
//!   [`ParentChild`] link. Relationships reference people by id only, so a
//!   document loaded from disk may hold ids with no matching person.
//!
//! The JSON field names (`rootPersonId`, `birthYear`, `parentId`, ...) are
//! fixed by the files the browser editor already reads and writes.

mod document;
mod person;
mod relationship;
pub mod timestamp;

pub use document::*;
pub use person::*;
pub use relationship::*;
