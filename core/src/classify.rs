//! C8 — classifiers: Thurston type and rigidity (spec §4.8).
//!
//! Both classifiers inspect a braid's Ultra Summit Set orbit by orbit and
//! can, in principle, see different answers from different orbits (a
//! correctness defect would show up as exactly this); when that happens we
//! report the majority/any-match answer alongside a [`Warning`] rather than
//! silently picking one (spec §7 item 4).

use crate::braid::Braid;
use crate::error::{Error, Warning};
use crate::family::Factor;
use crate::sets::UltraSummitSet;

/// The three possible classifications of a braid-group element under the
/// Thurston trichotomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThurstonType {
    Periodic,
    Reducible,
    PseudoAnosov,
}

/// Is `b^n` the identity for some `n` in `1..=bound`? Periodicity is
/// witnessed by canonical length dropping to zero, not by literal equality
/// with `Δ^k`, since a periodic element need not itself be a power of Δ.
fn is_periodic<F: Factor>(b: &Braid<F>, bound: usize) -> bool {
    let mut power = b.clone();
    for _ in 0..bound {
        if power.canonical_length() == 0 {
            return true;
        }
        power = power.multiply(b);
    }
    power.canonical_length() == 0
}

/// Running max along rows / min along columns of the stacked permutation
/// tableaux, as spec §4.8 describes: `T[t][i][j]` starts as the raw image
/// of strand `i` under the `t`-th factor (reading right to left, Δ
/// included when `|δ|` is odd so the parity of the permutation action is
/// tracked), then each later layer takes the running max of its own row and
/// the running min looking back up the column.
fn tableaux<F: Factor>(b: &Braid<F>, images: impl Fn(&F) -> Vec<u32>) -> Vec<Vec<u32>> {
    let mut layers: Vec<Vec<u32>> = Vec::new();
    let mut factors: Vec<F> = b.factors_in_lcf_order();
    if b.inf().rem_euclid(2) != 0 {
        factors.push(F::delta(b.parameter()));
    }
    for factor in &factors {
        let mut row = images(factor);
        if let Some(prev) = layers.last() {
            for (cell, &prev_cell) in row.iter_mut().zip(prev.iter()) {
                *cell = (*cell).max(prev_cell);
            }
        }
        layers.push(row.clone());
    }
    layers
}

/// A *round reducing curve* exists when some block of `j` consecutive
/// strand positions maps to a same-sized contiguous block under every
/// layer's running tableau (spec §4.8).
fn has_round_reducing_curve(layers: &[Vec<u32>], n: usize) -> bool {
    if layers.is_empty() {
        return false;
    }
    for block_len in 1..n {
        for start in 0..=(n - block_len) {
            let block: Vec<usize> = (start..start + block_len).collect();
            let preserved = layers.iter().all(|layer| {
                let mut images: Vec<u32> = block.iter().map(|&i| layer[i]).collect();
                images.sort_unstable();
                images
                    .windows(2)
                    .all(|w| w[1] == w[0] + 1)
            });
            if preserved {
                return true;
            }
        }
    }
    false
}

/// Classifies a single USS-orbit representative by the circle-preservation
/// test. `images` maps a factor to the strand-position image array its
/// permutation induces; callers outside the Artin family can supply their
/// own via [`classify_with_images`] if their factor encoding is not
/// permutation-shaped.
fn classify_orbit_representative<F: Factor>(
    b: &Braid<F>,
    n: usize,
    images: impl Fn(&F) -> Vec<u32>,
) -> ThurstonType {
    let layers = tableaux(b, images);
    if has_round_reducing_curve(&layers, n) {
        ThurstonType::Reducible
    } else {
        ThurstonType::PseudoAnosov
    }
}

/// Thurston type of `b` (spec §4.8): periodic iff some power has canonical
/// length zero; otherwise inspect every USS orbit via the circle
/// preservation test and return Reducible if any orbit preserves a round
/// curve, else PseudoAnosov. `n` is the number of strand positions the
/// permutation images in `images` range over (the Artin family's `n`; other
/// families provide the analogous count).
pub fn thurston_type<F: Factor + Send + Sync>(
    b: &Braid<F>,
    n: usize,
    images: impl Fn(&F) -> Vec<u32>,
) -> Result<(ThurstonType, Option<Warning>), Error> {
    let bound = F::lattice_height(b.parameter()) as usize + 1;
    if is_periodic(b, bound) {
        return Ok((ThurstonType::Periodic, None));
    }
    let uss = UltraSummitSet::build(b)?;
    let verdicts: Vec<ThurstonType> = uss
        .orbits
        .iter()
        .map(|orbit| classify_orbit_representative(orbit.first(), n, &images))
        .collect();
    let any_reducible = verdicts.iter().any(|v| *v == ThurstonType::Reducible);
    let all_agree = verdicts.iter().all(|v| *v == verdicts[0]);
    let warning = if all_agree {
        None
    } else {
        log::warn!("garcide: USS orbits disagree on Thurston type: {verdicts:?}");
        Some(Warning::MixedThurstonType)
    };
    let verdict = if any_reducible {
        ThurstonType::Reducible
    } else {
        ThurstonType::PseudoAnosov
    };
    Ok((verdict, warning))
}

/// Rigidity of `b`: the length of the longest common prefix between the LCF
/// of `b` and the LCF of `b · τ^δ(f₁)` (spec §4.8), i.e. how far cycling one
/// step leaves the factor sequence untouched.
pub fn rigidity<F: Factor>(b: &Braid<F>) -> usize {
    let shifted = b.initial_factor();
    let rotated = b.multiply(&Braid::from_factor(b.parameter(), shifted));
    let self_factors = b.factors_in_lcf_order();
    let rotated_factors = rotated.factors_in_lcf_order();
    self_factors
        .iter()
        .zip(rotated_factors.iter())
        .take_while(|(a, b)| a == b)
        .count()
}

/// Rigidity of a braid's USS: the maximum rigidity across orbit
/// representatives, with a warning when orbits disagree.
pub fn uss_rigidity<F: Factor + Send + Sync>(
    b: &Braid<F>,
) -> Result<(usize, Option<Warning>), Error> {
    let uss = UltraSummitSet::build(b)?;
    let values: Vec<usize> = uss.orbits.iter().map(|o| rigidity(o.first())).collect();
    let max = values.iter().copied().max().unwrap_or(0);
    let warning = if values.iter().all(|v| *v == values[0]) {
        None
    } else {
        log::warn!("garcide: USS orbits disagree on rigidity: {values:?}");
        Some(Warning::RigidityDisagreement)
    };
    Ok((max, warning))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::artin::ArtinFactor;

    fn artin_images(f: &ArtinFactor) -> Vec<u32> {
        f.image_vector()
    }

    #[test]
    fn periodic_braid_is_classified_periodic() {
        let b = Braid::<ArtinFactor>::from_word(3, "1 2 1 2 1 2").unwrap();
        let (verdict, warning) = thurston_type(&b, 3, artin_images).unwrap();
        assert_eq!(verdict, ThurstonType::Periodic);
        assert_eq!(warning, None);
    }

    #[test]
    fn reducible_braid_is_classified_reducible() {
        let b = Braid::<ArtinFactor>::from_word(4, "1 2 1 1 2 1").unwrap();
        let (verdict, _warning) = thurston_type(&b, 4, artin_images).unwrap();
        assert_eq!(verdict, ThurstonType::Reducible);
    }

    #[test]
    fn rigidity_is_bounded_by_canonical_length() {
        let b = Braid::<ArtinFactor>::from_word(4, "1 2 1 1 2 1").unwrap();
        let r = rigidity(&b);
        assert!(r <= b.canonical_length());
    }
}
