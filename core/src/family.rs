//! C1 — the abstract contract a concrete Garside family implements (spec §4.1).
//!
//! A family is a finite bounded lattice `(L, ≤, ∧, ∨, 0, Δ)` of *simple*
//! elements. The core never inspects how a concrete family encodes a factor
//! (a permutation table, integer coefficients, whatever); it only calls the
//! methods below. This mirrors the teacher crate's `trait Field`: a small
//! set of required primitives plus a larger set of default-provided methods
//! derived from them (kept in `factor.rs` as free functions instead of
//! trait defaults, since several of them — `left_join`, `remainder` — need
//! more than one primitive call and read more clearly as named functions
//! than as trait noise).

use std::fmt::Debug;
use std::hash::Hash;

use rand::RngCore;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Error;

/// A simple element of some Garside family's lattice.
///
/// Implementors must treat values as immutable: every method below takes
/// `&self` (or consumes `self` by value to produce a genuinely new value),
/// never mutates in place. Factors compare and hash by value.
pub trait Factor: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned {
    /// The family parameter (e.g. strand count `n`, or `(e, n)` for a
    /// complex-reflection family). Copy because it is threaded through
    /// every constructor call.
    type Parameter: Copy + Eq + Hash + Debug;

    /// The parameter this factor was built under.
    fn parameter(&self) -> Self::Parameter;

    /// The identity element `0` of the lattice.
    fn identity(parameter: Self::Parameter) -> Self;

    /// The Garside element Δ: the join-maximum of the lattice.
    fn delta(parameter: Self::Parameter) -> Self;

    #[inline]
    fn is_identity(&self) -> bool {
        *self == Self::identity(self.parameter())
    }

    #[inline]
    fn is_delta(&self) -> bool {
        *self == Self::delta(self.parameter())
    }

    /// The underlying monoid product. The result need not be a simple
    /// element (`≤ Δ`): when it overshoots, the braid layer (`braid.rs`)
    /// is responsible for renormalizing it into several canonical factors.
    fn product(&self, other: &Self) -> Self;

    /// The factor's inverse *as a factor*, when `self * inverse = identity`
    /// without leaving the lattice (i.e. `self` is a unit — only the
    /// identity, in every family this crate cares about). Returns `None`
    /// otherwise; callers needing a genuine group inverse go through
    /// `Braid::inverse` instead, which promotes via Δ.
    fn try_unit_inverse(&self) -> Option<Self>;

    /// Left complement `a \ Δ`: the unique `c` with `a · c = Δ`.
    fn left_complement(&self) -> Self;

    /// Right complement `Δ / a`: the unique `c` with `c · a = Δ`.
    fn right_complement(&self) -> Self;

    /// Left-meet `a ∧ b`: the greatest `c` with `c ≤ a` and `c ≤ b`.
    /// Guaranteed to exist by the lattice axiom.
    fn left_meet(&self, other: &Self) -> Self;

    /// Image of `self` under the order-reversing anti-automorphism of the
    /// lattice obtained by reading a defining word back to front. Used only
    /// to derive `right_meet`/`right_join` from their left counterparts
    /// (spec §4.2); concrete families implement it as conjugation by Δ.
    fn revert(&self) -> Self;

    /// Delta-conjugation `τ(a) = Δ⁻¹ · a · Δ`, closed on factors. `tau_pow`
    /// applies it `k` times (negative `k` applies the inverse that many
    /// times).
    fn tau(&self) -> Self;

    fn tau_pow(&self, k: i32) -> Self {
        let mut result = self.clone();
        if k >= 0 {
            for _ in 0..k {
                result = result.tau();
            }
        } else {
            for _ in 0..(-k) {
                result = result.tau_inverse();
            }
        }
        result
    }

    /// `τ⁻¹(a) = Δ · a · Δ⁻¹`. Given a default implementation in terms of
    /// `tau` by applying it `lattice_height - 1` times is possible but
    /// wasteful; families with an odd Δ-order implement it directly.
    fn tau_inverse(&self) -> Self;

    /// The lattice atoms (covers of `0`), in a fixed, family-defined order.
    /// Downstream USS/SC orbit indices depend on this order being
    /// deterministic (spec §9).
    fn atoms(parameter: Self::Parameter) -> Vec<Self>;

    /// Upper bound on the length of any chain `0 < … < Δ`. Used by the
    /// conjugacy algorithms as a termination constant, never as a
    /// performance hint.
    fn lattice_height(parameter: Self::Parameter) -> u32;

    /// Uniformly random simple element, when the family supports it.
    fn randomize(parameter: Self::Parameter, rng: &mut dyn RngCore) -> Result<Self, Error> {
        let _ = (parameter, rng);
        Err(Error::capability("randomize"))
    }

    /// Parses a factor from its family-specific textual encoding.
    fn parse(parameter: Self::Parameter, s: &str) -> Result<Self, Error>;

    /// Prints the factor in the same encoding `parse` reads: implementors
    /// must satisfy `parse(parameter, print(x)) == x`.
    fn print(&self) -> String;
}
