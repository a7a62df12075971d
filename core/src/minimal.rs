//! C5 — minimal conjugators (spec §4.5).
//!
//! These functions hunt for the *smallest* simple factor `r` that conjugates
//! `b` to another representative of the same flavour of summit set without
//! leaving it, starting from a seed factor `f` (normally an atom) that is
//! known to move `b` somewhere in the class but not necessarily back into
//! the set. `min_set` runs this search over every atom and keeps only the
//! generators not already implied by another, giving the indecomposable
//! conjugator set a set-closure builder (`sets.rs`) needs to discover edges.

use garcide_maybe_rayon::MaybeParIter;

use crate::braid::Braid;
use crate::conjugation::{main_pullback_c, main_pullback_s, returns_c, returns_s};
use crate::error::Error;
use crate::factor::left_divides;
use crate::family::Factor;

/// Smallest simple `r ≥ f` such that `r⁻¹ · b · r` stays canonical-length
/// preserving at the local level (spec §4.5): repeatedly extend `r` by the
/// remainder needed to catch up `b · r` with `τ^δ(r)`, until nothing is left
/// to add.
pub fn min_summit<F: Factor>(b: &Braid<F>, f: &F) -> F {
    let delta_exponent = b.inf();
    let mut r = F::identity(b.parameter());
    let mut r2 = f.clone();
    while !r2.is_identity() {
        r = r.product(&r2);
        let shifted = r.tau_pow(delta_exponent);
        let br = b.multiply(&Braid::from_factor(b.parameter(), r.clone()));
        r2 = br.remainder(&shifted);
    }
    r
}

/// Extends [`min_summit`] to the super-summit level: as long as conjugating
/// by `r` still leaves canonical length above `b`'s own, grow `r` by the
/// first factor of the RCF of the over-long conjugate and retry.
pub fn min_sss<F: Factor>(b: &Braid<F>, f: &F) -> F {
    let target_length = b.canonical_length();
    let mut r = min_summit(b, f);
    loop {
        let conjugated = b.conjugate_by_factor(&r);
        let rcf = conjugated.lcf_to_rcf();
        if rcf.canonical_length() <= target_length {
            return r;
        }
        r = r.product(&rcf.first_factor());
    }
}

/// A return candidate satisfies the crate-wide acceptance test used by both
/// `min_uss` and `min_sc`: `f` must left-divide it (so the candidate still
/// carries the original seed), checked the same way `min_set`'s dedup rule
/// checks atom coverage.
fn accepts<F: Factor>(f: &F, candidate: &F) -> bool {
    left_divides(f, candidate)
}

/// `min_USS(b, f)`: first grow to the super-summit level, then search the
/// returns of that conjugator along `b`'s cycling trajectory for one that
/// still carries `f`; if none of those work, fall back to the main pullback
/// of `f` and search its returns instead. Both phases failing is an internal
/// bug (spec §7 item 3), not a caller error.
pub fn min_uss<F: Factor>(b: &Braid<F>, f: &F) -> Result<F, Error> {
    let r = min_sss(b, f);
    for ret in returns_c(b, &r) {
        if accepts(f, &ret) {
            return Ok(ret);
        }
    }
    let pulled_back = main_pullback_c(b, f);
    for ret in returns_c(b, &pulled_back) {
        if accepts(f, &ret) {
            return Ok(ret);
        }
    }
    Err(Error::invariant(format!(
        "min_uss exhausted both phases without a valid return for seed {f:?}"
    )))
}

/// `min_SC(b, f)`: identical shape to [`min_uss`] but walking the sliding
/// trajectory and sliding transport/pullback; on exhaustion falls back to
/// `Δ`, the only simple element guaranteed to dominate every factor, rather
/// than erroring (spec §4.5).
pub fn min_sc<F: Factor>(b: &Braid<F>, f: &F) -> F {
    let r = min_sss(b, f);
    for ret in returns_s(b, &r) {
        if accepts(f, &ret) {
            return ret;
        }
    }
    let pulled_back = main_pullback_s(b, f);
    for ret in returns_s(b, &pulled_back) {
        if accepts(f, &ret) {
            return ret;
        }
    }
    F::delta(b.parameter())
}

/// Deduplicates a list of `(atom, conjugator)` pairs down to the
/// indecomposable generators (spec §4.5): keep `rₐ` iff no earlier atom's
/// kept conjugator already left-divides it, and no *later* atom's conjugator
/// (other than the very last one that does) left-divides it either — a
/// later-but-not-last cover means `rₐ` will be produced again downstream.
fn dedup_min_set<F: Factor>(candidates: Vec<F>) -> Vec<F> {
    let mut kept: Vec<F> = Vec::new();
    for (i, candidate) in candidates.iter().enumerate() {
        if kept.iter().any(|earlier| left_divides(earlier, candidate)) {
            continue;
        }
        let later_covers: Vec<usize> = candidates
            .iter()
            .enumerate()
            .skip(i + 1)
            .filter(|(_, other)| left_divides(other, candidate))
            .map(|(j, _)| j)
            .collect();
        if later_covers.len() > 1 {
            continue;
        }
        kept.push(candidate.clone());
    }
    kept
}

/// The indecomposable super-summit conjugator set of `b`: `min_sss(b, a)`
/// for every atom `a`, deduplicated.
pub fn min_set_sss<F: Factor + Send + Sync>(b: &Braid<F>) -> Vec<F> {
    let atoms = F::atoms(b.parameter());
    let candidates: Vec<F> = atoms.par_iter().map(|atom| min_sss(b, atom)).collect();
    dedup_min_set(candidates)
}

/// The indecomposable ultra-summit conjugator set of `b`.
pub fn min_set_uss<F: Factor + Send + Sync>(b: &Braid<F>) -> Result<Vec<F>, Error> {
    let atoms = F::atoms(b.parameter());
    let candidates: Vec<F> = atoms
        .par_iter()
        .map(|atom| min_uss(b, atom))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(dedup_min_set(candidates))
}

/// The indecomposable sliding-circuit conjugator set of `b`.
pub fn min_set_sc<F: Factor + Send + Sync>(b: &Braid<F>) -> Vec<F> {
    let atoms = F::atoms(b.parameter());
    let candidates: Vec<F> = atoms.par_iter().map(|atom| min_sc(b, atom)).collect();
    dedup_min_set(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::artin::ArtinFactor;

    #[test]
    fn min_summit_conjugate_preserves_group_value() {
        let b = Braid::<ArtinFactor>::from_word(4, "1 2 1 2 1 2").unwrap();
        let atom = &ArtinFactor::atoms(4)[0];
        let r = min_summit(&b, atom);
        let conjugated = b.conjugate_by_factor(&r);
        let witness = Braid::from_factor(4, r);
        let expected = witness.inverse().multiply(&b).multiply(&witness);
        assert_eq!(conjugated, expected);
    }

    #[test]
    fn min_sss_does_not_increase_canonical_length() {
        let b = Braid::<ArtinFactor>::from_word(4, "1 2 1 2 1 2").unwrap();
        let atom = &ArtinFactor::atoms(4)[0];
        let r = min_sss(&b, atom);
        let conjugated = b.conjugate_by_factor(&r);
        assert!(conjugated.lcf_to_rcf().canonical_length() <= b.canonical_length());
    }

    #[test]
    fn min_set_sc_is_never_empty_for_a_nontrivial_braid() {
        let b = Braid::<ArtinFactor>::from_word(3, "1 2 1 1 2 1").unwrap();
        let set = min_set_sc(&b);
        assert!(!set.is_empty());
    }
}
