#![allow(clippy::needless_range_loop)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_debug_implementations)]

//! Conjugacy algorithms for Garside groups.
//!
//! Given a concrete [`family::Factor`] (a bounded lattice of simple
//! elements under a Garside element Δ), this crate computes normal forms,
//! decides conjugacy, and enumerates the conjugacy-class invariants Super
//! Summit Set, Ultra Summit Set, and Set of Sliding Circuits.
//!
//! The crate treats the family abstractly; [`families::artin`] ships one
//! concrete instantiation (the Artin-presented braid group) used by the
//! test suite.

pub mod braid;
pub mod classify;
pub mod conjugacy;
pub mod conjugation;
pub mod error;
pub mod factor;
pub mod families;
pub mod family;
pub mod minimal;
pub mod sets;

pub use braid::{Braid, Form};
pub use error::Error;
pub use family::Factor;

// The conjugacy machinery's one parallelism axis (`minimal::min_set_*`) fans
// the atom list of a family out across threads; any concrete `Factor` must
// be shareable for that to type-check, so pin it down here instead of
// discovering it first as a generic-bound error at a call site.
static_assertions::assert_impl_all!(families::artin::ArtinFactor: Factor, Send, Sync);
static_assertions::assert_impl_all!(Error: std::error::Error, Send, Sync);
