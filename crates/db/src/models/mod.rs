//! Row structs that map database columns onto domain types.

pub mod player;
