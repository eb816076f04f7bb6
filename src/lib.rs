//! Family tree builder.
//!
//! - [`store::FamilyTree`] holds a family tree document in memory, assigns
//!   person ids, checks references when relationships are recorded, and reads
//!   and writes the JSON document.
//! - [`api::create_router`] serves the `/save` endpoint used by the browser
//!   editor, backing up the previous document before replacing it.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod store;
