//! The Artin-presented braid group on `n` strands, as a concrete
//! [`Factor`] implementation.
//!
//! Simple elements of this family are in bijection with permutations of
//! `{0, .., n-1}` under the (right) weak order: `u ≤ v` iff the inversion
//! set of `u` is contained in that of `v`. The identity permutation is `0`,
//! the order-reversing permutation (`i ↦ n-1-i`) is Δ, and the atoms are
//! the `n-1` adjacent transpositions — the classical correspondence between
//! positive permutation braids and permutations (Elrifai–Morton).
//!
//! This is the only family this crate ships; it exists to exercise C1–C8
//! end to end (see `tests/`), not as a general-purpose braid-group toolkit.

use std::fmt;

use garcide_util::{
    compose_permutations, invert_permutation, invert_permutation_into, is_identity_permutation,
    with_permutation_scratch,
};
use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::family::Factor;

/// A simple factor of the Artin braid group on `n` strands, represented by
/// the permutation it induces on strand positions.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtinFactor {
    n: u16,
    /// `perm[i]` is the position strand `i` ends up in.
    perm: Vec<u16>,
}

impl fmt::Debug for ArtinFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArtinFactor{:?}", self.perm)
    }
}

impl ArtinFactor {
    /// Builds a factor directly from a permutation image array. Panics if
    /// `perm` is not a permutation of `0..perm.len()`; only used internally
    /// and by `parse`, both of which construct `perm` from validated data.
    fn from_perm(perm: Vec<u16>) -> Self {
        let n = perm.len() as u16;
        ArtinFactor { n, perm }
    }

    fn n(&self) -> u16 {
        self.n
    }

    /// The permutation image array as `u32`s, used by the Thurston-type
    /// classifier's tableau construction (`classify::thurston_type`), which
    /// is generic over how a family represents strand images.
    pub fn image_vector(&self) -> Vec<u32> {
        self.perm.iter().map(|&x| x as u32).collect()
    }

    /// Number of inversions `(i, j)`, `i < j`, with `perm[i] > perm[j]` —
    /// the length of this factor as a word in the atoms.
    pub fn length(&self) -> u32 {
        let n = self.perm.len();
        let mut count = 0u32;
        for i in 0..n {
            for j in (i + 1)..n {
                if self.perm[i] > self.perm[j] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Weak-order divisibility check used internally by `left_meet`:
    /// `self` left-divides `other` iff `Inv(self) ⊆ Inv(other)`.
    fn inversions_subset_of(&self, other: &Self) -> bool {
        let n = self.perm.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let self_inv = self.perm[i] > self.perm[j];
                let other_inv = other.perm[i] > other.perm[j];
                if self_inv && !other_inv {
                    return false;
                }
            }
        }
        true
    }
}

impl Factor for ArtinFactor {
    type Parameter = u16;

    fn parameter(&self) -> u16 {
        self.n
    }

    fn identity(parameter: u16) -> Self {
        ArtinFactor::from_perm((0..parameter).collect())
    }

    fn delta(parameter: u16) -> Self {
        ArtinFactor::from_perm((0..parameter).rev().collect())
    }

    fn product(&self, other: &Self) -> Self {
        debug_assert_eq!(self.n, other.n());
        // Strand i goes through `self` first, landing at `self.perm[i]`,
        // then through `other`.
        ArtinFactor::from_perm(compose_permutations(&other.perm, &self.perm))
    }

    #[inline]
    fn is_identity(&self) -> bool {
        is_identity_permutation(&self.perm)
    }

    fn try_unit_inverse(&self) -> Option<Self> {
        if self.is_identity() {
            Some(self.clone())
        } else {
            None
        }
    }

    fn left_complement(&self) -> Self {
        // c with self * c = delta: c[j] = delta[inv_self[j]]. inv_self is
        // only needed transiently to build the composed result, so it lives
        // in the task-local scratch buffer rather than its own allocation.
        let delta = Self::delta(self.n);
        let n = self.perm.len();
        let composed = with_permutation_scratch(n, |scratch| {
            invert_permutation_into(&self.perm, scratch);
            compose_permutations(&delta.perm, scratch)
        });
        ArtinFactor::from_perm(composed)
    }

    fn right_complement(&self) -> Self {
        // c with c * self = delta: c[i] = inv_self[delta[i]].
        let delta = Self::delta(self.n);
        let n = self.perm.len();
        let composed = with_permutation_scratch(n, |scratch| {
            invert_permutation_into(&self.perm, scratch);
            compose_permutations(scratch, &delta.perm)
        });
        ArtinFactor::from_perm(composed)
    }

    fn left_meet(&self, other: &Self) -> Self {
        let n = self.n;
        let mut r = ArtinFactor::identity(n);
        let atoms = Self::atoms(n);
        loop {
            let r_length = r.length();
            let mut extended = None;
            for atom in &atoms {
                let candidate = r.product(atom);
                // Atoms are involutions: re-applying the one that produced
                // `r` satisfies the inversion-subset test trivially (its
                // inversion set shrinks back towards empty) without making
                // any real progress towards the meet. Require the candidate
                // to strictly lengthen `r`, not just pass the subset test,
                // or the search oscillates forever between `r` and
                // `identity`.
                if candidate.length() > r_length
                    && candidate.inversions_subset_of(self)
                    && candidate.inversions_subset_of(other)
                {
                    extended = Some(candidate);
                    break;
                }
            }
            match extended {
                Some(candidate) => r = candidate,
                None => break,
            }
        }
        r
    }

    fn revert(&self) -> Self {
        ArtinFactor::from_perm(invert_permutation(&self.perm))
    }

    fn tau(&self) -> Self {
        let delta = Self::delta(self.n);
        delta.product(self).product(&delta)
    }

    fn tau_inverse(&self) -> Self {
        // Delta is an involution for the Artin family, so conjugation by
        // it has order 2: tau and tau_inverse coincide.
        self.tau()
    }

    fn atoms(parameter: u16) -> Vec<Self> {
        (0..parameter.saturating_sub(1))
            .map(|i| {
                let mut perm: Vec<u16> = (0..parameter).collect();
                perm.swap(i as usize, (i + 1) as usize);
                ArtinFactor::from_perm(perm)
            })
            .collect()
    }

    fn lattice_height(parameter: u16) -> u32 {
        let n = parameter as u32;
        n * n.saturating_sub(1) / 2
    }

    /// Uniformly random simple factor: simples of this family are in
    /// bijection with permutations of `0..n`, so a uniformly random
    /// permutation (Fisher–Yates via `SliceRandom::shuffle`) gives a
    /// uniformly random simple.
    fn randomize(parameter: u16, rng: &mut dyn RngCore) -> Result<Self, Error> {
        let mut perm: Vec<u16> = (0..parameter).collect();
        perm.shuffle(rng);
        Ok(ArtinFactor::from_perm(perm))
    }

    fn parse(parameter: u16, s: &str) -> Result<Self, Error> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("D") {
            return Ok(Self::delta(parameter));
        }
        if s == "1" || s.is_empty() {
            return Ok(Self::identity(parameter));
        }
        let mut perm = Vec::with_capacity(parameter as usize);
        for token in s.split(',') {
            let x: u16 = token
                .trim()
                .parse()
                .map_err(|_| Error::parse(format!("not a strand position: {token:?}")))?;
            perm.push(x);
        }
        if perm.len() != parameter as usize {
            return Err(Error::parse(format!(
                "expected {parameter} strand positions, got {}",
                perm.len()
            )));
        }
        let mut seen = vec![false; parameter as usize];
        for &x in &perm {
            match seen.get_mut(x as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(Error::parse(format!("not a permutation of 0..{parameter}"))),
            }
        }
        Ok(ArtinFactor::from_perm(perm))
    }

    fn print(&self) -> String {
        if self.is_delta() {
            return "D".to_string();
        }
        if self.is_identity() {
            return "1".to_string();
        }
        self.perm
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_has_max_length() {
        let n = 5;
        let delta = ArtinFactor::delta(n);
        assert_eq!(delta.length(), ArtinFactor::lattice_height(n));
    }

    #[test]
    fn atoms_left_divide_delta() {
        let n = 4;
        let delta = ArtinFactor::delta(n);
        for atom in ArtinFactor::atoms(n) {
            assert!(atom.inversions_subset_of(&delta));
        }
    }

    #[test]
    fn left_complement_is_involutive_on_length() {
        let n = 4;
        let atom = &ArtinFactor::atoms(n)[0];
        let c = atom.left_complement();
        assert_eq!(
            atom.length() + c.length(),
            ArtinFactor::lattice_height(n)
        );
    }

    #[test]
    fn tau_is_order_two() {
        let n = 4;
        let atom = &ArtinFactor::atoms(n)[0];
        assert_eq!(atom.tau().tau(), *atom);
    }

    #[test]
    fn randomize_produces_a_valid_simple() {
        let n = 5;
        let mut rng = rand::rngs::mock::StepRng::new(7, 11);
        let a = ArtinFactor::randomize(n, &mut rng).unwrap();
        assert!(a.inversions_subset_of(&ArtinFactor::delta(n)));
    }

    #[test]
    fn print_parse_round_trips_on_atoms_and_delta() {
        let n = 4;
        for atom in ArtinFactor::atoms(n) {
            let printed = atom.print();
            let parsed = ArtinFactor::parse(n, &printed).unwrap();
            assert_eq!(parsed, atom);
        }
        let delta = ArtinFactor::delta(n);
        assert_eq!(ArtinFactor::parse(n, &delta.print()).unwrap(), delta);
        let id = ArtinFactor::identity(n);
        assert_eq!(ArtinFactor::parse(n, &id.print()).unwrap(), id);
    }
}
