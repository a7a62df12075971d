//! Concrete Garside families. The core (`family.rs` through `classify.rs`)
//! never imports from here; this module exists so the conjugacy machinery
//! has something to run against, the same role `goldilocks_field.rs` plays
//! for `trait Field` in the teacher crate.

pub mod artin;
