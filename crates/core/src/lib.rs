//! Domain types and pure helpers for the player catalog.
//!
//! Nothing in this crate performs I/O, so the query normalizer, sort
//! handling, pagination math and CSV serialization can be shared by the
//! repository backends, the HTTP layer and any client tooling.

pub mod csv;
pub mod error;
pub mod list_view;
pub mod pagination;
pub mod player;
pub mod player_query;
pub mod radar;
pub mod types;
