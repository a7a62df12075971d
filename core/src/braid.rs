//! C3 — braid normal form (spec §4.3).
//!
//! A braid is `Δ^δ · f1 · f2 · … · fr` with every `fi` a non-identity,
//! non-Δ simple factor, stored in [`Form::Left`] (left-weighted:
//! `right_complement(fi) ∧ fi+1 = identity` for every adjacent pair) or
//! [`Form::Right`] (right-weighted, the symmetric condition). `δ` may be
//! negative; canonical length is `factors.len()`, independent of sign.
//!
//! The incremental re-weighting walk in [`Braid::push_positive_factor_right`]
//! is the textbook Elrifai–Morton update: append the factor, then walk left
//! fixing up adjacent pairs via `left_meet`/`left_quotient` until the walk
//! stabilises. A simple factor can surface as `Δ` mid-walk (when the shared
//! part fully absorbs its left neighbour); `collapse_interior_deltas` folds
//! any such occurrence into the `δ` exponent using the standard identity
//! `a · Δ = Δ · τ(a)`, which is also what lets the exponent carry leftward
//! past the remaining prefix.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::factor::{left_divides, left_quotient};
use crate::family::Factor;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Form {
    Left,
    Right,
}

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Braid<F: Factor> {
    parameter: F::Parameter,
    delta_exponent: i32,
    factors: Vec<F>,
    form: Form,
}

impl<F: Factor> std::fmt::Debug for Braid<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Braid")
            .field("delta_exponent", &self.delta_exponent)
            .field("factors", &self.factors)
            .field("form", &self.form)
            .finish()
    }
}

impl<F: Factor> Braid<F> {
    /// The identity braid.
    pub fn identity(parameter: F::Parameter) -> Self {
        Braid {
            parameter,
            delta_exponent: 0,
            factors: Vec::new(),
            form: Form::Left,
        }
    }

    /// A braid consisting of a single simple factor (Δ and the identity both
    /// collapse to their exponent-only representation).
    pub fn from_factor(parameter: F::Parameter, factor: F) -> Self {
        let mut b = Braid::identity(parameter);
        b.push_positive_factor_right(factor);
        b
    }

    pub fn parameter(&self) -> F::Parameter {
        self.parameter
    }

    pub fn form(&self) -> Form {
        self.form
    }

    /// Infimum: the largest `k` with `Δ^k ≤ self`.
    pub fn inf(&self) -> i32 {
        self.delta_exponent
    }

    /// Supremum: the smallest `k` with `self ≤ Δ^k`.
    pub fn sup(&self) -> i32 {
        self.delta_exponent + self.factors.len() as i32
    }

    /// Canonical length `sup - inf`.
    pub fn canonical_length(&self) -> usize {
        self.factors.len()
    }

    pub fn is_identity(&self) -> bool {
        self.delta_exponent == 0 && self.factors.is_empty()
    }

    /// `f1`, or the identity if canonical length is zero. Does not account
    /// for a nonzero `δ`; see [`Braid::initial_factor`] for that.
    pub fn first_factor(&self) -> F {
        self.factors
            .first()
            .cloned()
            .unwrap_or_else(|| F::identity(self.parameter))
    }

    /// `fr`, or the identity if canonical length is zero.
    pub fn final_factor(&self) -> F {
        self.factors
            .last()
            .cloned()
            .unwrap_or_else(|| F::identity(self.parameter))
    }

    /// The factor sequence `(f1, .., fr)` in the order this braid's `form`
    /// stores it, not including any leading/trailing `Δ` power. Used by the
    /// classifiers (`classify.rs`) to read off the per-factor permutation
    /// images without exposing the private representation itself.
    pub fn factors_in_lcf_order(&self) -> Vec<F> {
        self.factors.clone()
    }

    /// `τ^{-δ}(f1)`: the first factor as it appears once the leading Δ
    /// powers are folded back in by delta-conjugation, used by cycling and
    /// the preferred-prefix computation (spec §4.4).
    pub fn initial_factor(&self) -> F {
        self.first_factor().tau_pow(-self.delta_exponent)
    }

    /// The lattice-ops view of the leading edge of `self`: `Δ` when
    /// canonical length is zero and `δ ≥ 1`, identity when canonical length
    /// is zero and `δ ≤ 0`, otherwise the first factor. Used wherever a
    /// braid needs to be treated as a single simple element (meet/join
    /// peeling, `remainder`, pullback arithmetic).
    pub(crate) fn leading_factor(&self) -> F {
        self.leading_factor_for_lattice_ops()
    }

    fn leading_factor_for_lattice_ops(&self) -> F {
        if self.factors.is_empty() {
            if self.delta_exponent >= 1 {
                F::delta(self.parameter)
            } else {
                F::identity(self.parameter)
            }
        } else {
            self.factors[0].clone()
        }
    }

    /// Strips one factor (or one unit of `δ`, if canonical length is zero)
    /// off the front of `self` and returns the rest, used by `left_meet` and
    /// `left_join`'s peeling loop.
    fn drop_leading(&self, consumed: &F) -> Self {
        let inverse_front = Braid::from_factor(self.parameter, consumed.clone()).inverse();
        inverse_front.multiply(self)
    }

    /// Reinterprets `self`'s factor list as a positive braid with `δ = 0`,
    /// without renormalising. This is a raw field substitution, not a
    /// value-preserving operation in general: `min_summit` (spec §4.5) uses
    /// it exactly as the source's `MinSS` strips `LeftDelta` to work with
    /// the bare factor sequence while tracking the real `δ` separately via
    /// `tau_pow`.
    pub(crate) fn positive_part(&self) -> Self {
        Braid {
            parameter: self.parameter,
            delta_exponent: 0,
            factors: self.factors.clone(),
            form: self.form,
        }
    }

    /// `cycling`'s rotation step (spec §4.4): remove `f1`, twist it by
    /// `τ^{-δ}`, and append it at the end, renormalising through the
    /// ordinary re-weighting walk — the same move the source's `Cycling`
    /// makes before calling `MakeLCF`.
    pub(crate) fn cycle_forward(&self) -> Self {
        if self.factors.is_empty() {
            return self.clone();
        }
        let twisted = self.factors[0].tau_pow(-self.delta_exponent);
        let mut result = Braid {
            parameter: self.parameter,
            delta_exponent: self.delta_exponent,
            factors: Vec::new(),
            form: Form::Left,
        };
        for factor in &self.factors[1..] {
            result.push_positive_factor_right(factor.clone());
        }
        result.push_positive_factor_right(twisted);
        result
    }

    /// `decycling`'s rotation step, the dual move: remove `fr`, twist it by
    /// `τ^δ`, and prepend it, renormalising.
    pub(crate) fn cycle_backward(&self) -> Self {
        if self.factors.is_empty() {
            return self.clone();
        }
        let last = self.factors[self.factors.len() - 1].clone();
        let twisted = last.tau_pow(self.delta_exponent);
        let mut rest = Braid {
            parameter: self.parameter,
            delta_exponent: self.delta_exponent,
            factors: Vec::new(),
            form: Form::Left,
        };
        for factor in &self.factors[..self.factors.len() - 1] {
            rest.push_positive_factor_right(factor.clone());
        }
        Braid::from_factor(self.parameter, twisted).multiply(&rest)
    }

    /// Appends a simple factor on the right, re-weighting to restore
    /// left-weightedness. Used both to build a braid up from atoms
    /// ([`Braid::from_word`]) and, via [`Braid::multiply`], to append
    /// whole braids factor by factor.
    pub fn push_positive_factor_right(&mut self, factor: F) {
        if factor.is_identity() {
            return;
        }
        if factor.is_delta() {
            // value * Delta = Delta * tau(value): the new Delta commutes to
            // the front of the delta-exponent prefix at the cost of
            // delta-conjugating everything already in the factor list.
            self.delta_exponent += 1;
            for f in self.factors.iter_mut() {
                *f = f.tau();
            }
            return;
        }
        self.factors.push(factor);
        let mut i = self.factors.len() - 1;
        while i > 0 {
            let a = self.factors[i - 1].clone();
            let b = self.factors[i].clone();
            let shared = a.right_complement().left_meet(&b);
            if shared.is_identity() {
                break;
            }
            let new_a = a.product(&shared);
            let new_b = left_quotient(&shared, &b);
            self.factors[i - 1] = new_a;
            if new_b.is_identity() {
                self.factors.remove(i);
            } else {
                self.factors[i] = new_b;
            }
            i -= 1;
        }
        self.collapse_interior_deltas();
    }

    /// Folds any Δ that the re-weighting walk produced mid-list into `δ`,
    /// using `a · Δ = Δ · τ⁻¹(a)` to carry it leftward past the remaining
    /// prefix.
    fn collapse_interior_deltas(&mut self) {
        while let Some(pos) = self.factors.iter().position(|f| f.is_delta()) {
            for f in self.factors[..pos].iter_mut() {
                *f = f.tau();
            }
            self.factors.remove(pos);
            self.delta_exponent += 1;
        }
    }

    /// Appends the inverse of a simple factor on the right, using
    /// `b · g⁻¹ = Δ⁻¹ · τ⁻¹(b · (Δ/g))` to keep the representation in
    /// `Δ^δ · (positive factors)` form.
    fn push_negative_factor_right(&mut self, factor: &F) {
        let complement = factor.right_complement();
        self.push_positive_factor_right(complement);
        self.delta_exponent -= 1;
        for f in self.factors.iter_mut() {
            *f = f.tau_inverse();
        }
    }

    /// Builds a braid from a signed word of generator indices into the
    /// family's atom list, plus the literal token `"D"` (Δ),
    /// whitespace-separated, e.g. `"1 -2 D 3"` (spec §6). Generator indices
    /// are 1-based and signed; `-k` means the inverse of atom `k - 1`, so
    /// `"1"` denotes atom 0 — a real generator, not the identity.
    pub fn from_word(parameter: F::Parameter, word: &str) -> Result<Self, Error> {
        let atoms = F::atoms(parameter);
        let mut braid = Braid::identity(parameter);
        for token in word.split_whitespace() {
            if token.eq_ignore_ascii_case("D") {
                braid.push_positive_factor_right(F::delta(parameter));
                continue;
            }
            let (negative, digits) = match token.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, token),
            };
            let index: usize = digits
                .parse()
                .map_err(|_| Error::parse(format!("not a generator index: {token:?}")))?;
            let atom = atoms.get(index.wrapping_sub(1)).ok_or_else(|| {
                Error::parse(format!("generator index out of range: {token:?}"))
            })?;
            if negative {
                braid.push_negative_factor_right(atom);
            } else {
                braid.push_positive_factor_right(atom.clone());
            }
        }
        Ok(braid)
    }

    /// Right-multiplies `self` by `other`, both read as group elements.
    /// `other`'s own `Δ^δ` prefix must be absorbed before its factors (it
    /// sits to their left in `other`'s value), so the exponent shift is
    /// applied to `result` first and the factors are appended afterwards.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = self.clone();
        if other.delta_exponent >= 0 {
            for _ in 0..other.delta_exponent {
                result.push_positive_factor_right(F::delta(self.parameter));
            }
        } else {
            for _ in 0..(-other.delta_exponent) {
                result.delta_exponent -= 1;
                for f in result.factors.iter_mut() {
                    *f = f.tau_inverse();
                }
            }
        }
        for factor in &other.factors {
            result.push_positive_factor_right(factor.clone());
        }
        result
    }

    /// Group inverse: `(Δ^δ f1 … fr)⁻¹ = fr⁻¹ … f1⁻¹ Δ⁻δ`, built by
    /// appending each `fi⁻¹` (via `push_negative_factor_right`'s complement
    /// arithmetic) from the last factor to the first, then shifting by `-δ`.
    pub fn inverse(&self) -> Self {
        let mut result = Braid::identity(self.parameter);
        for factor in self.factors.iter().rev() {
            result.push_negative_factor_right(factor);
        }
        for _ in 0..self.delta_exponent {
            result.delta_exponent -= 1;
            for f in result.factors.iter_mut() {
                *f = f.tau_inverse();
            }
        }
        result
    }

    /// Braid-level reverse, the anti-automorphism obtained by reading a
    /// defining word back to front: `revert(Δ^δ f1…fr) = Δ^δ · revert(fr) ·
    /// … · revert(f1)` (spec §4.3).
    pub fn reverse(&self) -> Self {
        // revert(Delta^d * f1...fr) = revert(f1...fr) * Delta^d
        //                            = Delta^d * tau_pow(revert(fr), d) * ... * tau_pow(revert(f1), d)
        // (revert is an anti-automorphism fixing Delta; tau_pow then carries
        // the trailing Delta^d back to the front, automorphism-distributing
        // over the now order-reversed factors).
        let mut result = Braid::identity(self.parameter);
        result.delta_exponent = self.delta_exponent;
        for factor in self.factors.iter().rev() {
            let twisted = factor.revert().tau_pow(self.delta_exponent);
            result.push_positive_factor_right(twisted);
        }
        result
    }

    /// Conjugates `self` by the factor `f`: `f⁻¹ · self · f`.
    pub fn conjugate_by_factor(&self, f: &F) -> Self {
        let conjugator = Braid::from_factor(self.parameter, f.clone());
        conjugator.inverse().multiply(self).multiply(&conjugator)
    }

    pub fn conjugate(&self, by: &Self) -> Self {
        by.inverse().multiply(self).multiply(by)
    }

    /// Rewrites `self`'s own factor list as the (unrenormalised) word for
    /// `revert(self)`, swapping the weighting convention: feeding a
    /// left-weighted sequence in yields a right-weighted one representing
    /// the reverted value, and vice versa. Unlike [`Braid::reverse`], this
    /// never walks the re-weighting loop — it is only valid as the first or
    /// last step of an LCF/RCF conversion, paired with exactly one call to
    /// `reverse` to do the actual renormalising.
    fn dual_transform(&self) -> Self {
        let d = self.delta_exponent;
        let factors = self
            .factors
            .iter()
            .rev()
            .map(|f| f.revert().tau_pow(d))
            .collect();
        let form = match self.form {
            Form::Left => Form::Right,
            Form::Right => Form::Left,
        };
        Braid {
            parameter: self.parameter,
            delta_exponent: d,
            factors,
            form,
        }
    }

    /// Converts a left-weighted braid to right-weighted form:
    /// `self.reverse()` gives the LCF of `revert(self)`; dualising that
    /// back gives the RCF of `self`.
    pub fn lcf_to_rcf(&self) -> Self {
        assert_eq!(self.form, Form::Left);
        self.reverse().dual_transform()
    }

    /// Converts a right-weighted braid to left-weighted form: dualise
    /// `self` directly (no renormalisation needed, since `self`'s own list
    /// is already right-weighted) to get the LCF of `revert(self)`, then
    /// `reverse` that to land on the LCF of `self`.
    pub fn rcf_to_lcf(&self) -> Self {
        assert_eq!(self.form, Form::Right);
        self.dual_transform().reverse()
    }

    /// `self ∧ other`, the braid-level left-meet (spec §4.3): normalise to
    /// a common `δ` baseline conceptually by treating any leading excess of
    /// `δ` as an initial run of `Δ` factors, then repeatedly peel the
    /// factor-level meet of the two braids' leading factors off the front
    /// of an accumulator and off both operands, until that shared part is
    /// the identity.
    pub fn left_meet(&self, other: &Self) -> Self {
        let mut x = self.clone();
        let mut y = other.clone();
        let mut acc = Braid::identity(self.parameter);
        loop {
            let fx = x.leading_factor_for_lattice_ops();
            let fy = y.leading_factor_for_lattice_ops();
            let shared = fx.left_meet(&fy);
            if shared.is_identity() {
                break;
            }
            acc.push_positive_factor_right(shared.clone());
            x = x.drop_leading(&shared);
            y = y.drop_leading(&shared);
        }
        acc
    }

    /// `self ∧ᵣ other`, the braid-level right-meet, derived from
    /// `left_meet` via the same reversal duality used for factors:
    /// `a ∧ᵣ b = revert(revert(a) ∧ revert(b))`.
    pub fn right_meet(&self, other: &Self) -> Self {
        self.reverse().left_meet(&other.reverse()).reverse()
    }

    /// `self ∨ other`, derived from `left_meet` by the same complement
    /// trick as the factor-level join, applied braid-wide via `inverse`:
    /// `a ∨ b = (a⁻¹ ∧ b⁻¹)⁻¹` holds whenever `a` and `b` share a common
    /// multiple, which every pair of braids does (Δ^N for `N` large enough).
    pub fn left_join(&self, other: &Self) -> Self {
        self.inverse().left_meet(&other.inverse()).inverse()
    }

    /// `remainder(self, g)`: the unique simple factor `s` with
    /// `self · s = self ∨ g`, where `g` is embedded as a length-one braid.
    /// Used by `min_summit`/`min_sss` (spec §4.5) to extend a conjugator one
    /// factor at a time.
    pub fn remainder(&self, g: &F) -> F {
        let g_braid = Braid::from_factor(self.parameter, g.clone());
        let joined = self.left_join(&g_braid);
        let quotient = self.inverse().multiply(&joined);
        debug_assert!(quotient.delta_exponent >= 0 && quotient.factors.len() <= 1);
        quotient.leading_factor_for_lattice_ops()
    }

    /// True if `f` (embedded as a length-one braid) left-divides `self`.
    pub fn factor_left_divides(&self, f: &F) -> bool {
        if self.delta_exponent >= 1 {
            return true;
        }
        if self.delta_exponent < 0 {
            return f.is_identity();
        }
        match self.factors.first() {
            Some(first) => left_divides(f, first),
            None => f.is_identity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::artin::ArtinFactor;

    #[test]
    fn identity_has_zero_inf_and_sup() {
        let b: Braid<ArtinFactor> = Braid::identity(4);
        assert_eq!(b.inf(), 0);
        assert_eq!(b.sup(), 0);
        assert!(b.is_identity());
    }

    #[test]
    fn pushing_delta_increments_exponent_without_growing_factors() {
        let mut b: Braid<ArtinFactor> = Braid::identity(4);
        b.push_positive_factor_right(ArtinFactor::delta(4));
        assert_eq!(b.inf(), 1);
        assert_eq!(b.canonical_length(), 0);
    }

    #[test]
    fn multiply_by_inverse_is_identity() {
        let b = Braid::<ArtinFactor>::from_word(4, "1 2 -1 3 -2").unwrap();
        let product = b.multiply(&b.inverse());
        assert!(product.is_identity());
    }

    #[test]
    fn from_word_atoms_compose_in_order() {
        let n = 4;
        let b = Braid::<ArtinFactor>::from_word(n, "1 2").unwrap();
        let atoms = ArtinFactor::atoms(n);
        let expected = atoms[0].product(&atoms[1]);
        assert_eq!(b.canonical_length(), 1);
        assert_eq!(b.first_factor(), expected);
    }

    #[test]
    fn reverse_is_involutive() {
        let b = Braid::<ArtinFactor>::from_word(4, "1 2 -1 3").unwrap();
        assert_eq!(b.reverse().reverse(), b);
    }

    #[test]
    fn left_meet_of_a_braid_with_itself_is_itself() {
        let b = Braid::<ArtinFactor>::from_word(4, "1 2 3").unwrap();
        assert_eq!(b.left_meet(&b), b);
    }

    #[test]
    fn lcf_round_trips_through_rcf() {
        let b = Braid::<ArtinFactor>::from_word(4, "1 2 -1 3 2").unwrap();
        let back = b.lcf_to_rcf().rcf_to_lcf();
        assert_eq!(back, b);
    }
}
