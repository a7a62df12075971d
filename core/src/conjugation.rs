//! C4 — conjugation operators (spec §4.4).
//!
//! Cycling, decycling, cyclic sliding and their associated transport/
//! pullback maps are the moves the minimal-conjugator search (`minimal.rs`)
//! and the set builders (`sets.rs`) walk the conjugacy class with. Every
//! operation here takes a braid already in LCF and returns one in LCF.

use crate::braid::Braid;
use crate::family::Factor;

/// `c(b)`: move `f1` to the end after applying `τ^δ`, renormalising.
/// Equivalent to conjugating `b` by `initial(b) = τ^δ(f1)`.
pub fn cycling<F: Factor>(b: &Braid<F>) -> Braid<F> {
    b.cycle_forward()
}

/// `d(b)`: move `fr` to the front without delta-conjugation, renormalising.
/// Equivalent to conjugating `b` by `final(b)⁻¹` in the opposite sense from
/// `cycling` (`fr · b · fr⁻¹` rather than `f1⁻¹ · b · f1`).
pub fn decycling<F: Factor>(b: &Braid<F>) -> Braid<F> {
    b.cycle_backward()
}

/// `p(b) = left_meet(initial(b), right_complement(final(b)))`.
pub fn preferred_prefix<F: Factor>(b: &Braid<F>) -> F {
    b.initial_factor().left_meet(&b.final_factor().right_complement())
}

/// The dual notion for the trailing edge of `b`, obtained by computing the
/// preferred prefix of `revert(b)` and reverting the result back — the same
/// reversal-duality recipe `right_meet`/`right_join` use elsewhere in this
/// crate.
pub fn preferred_suffix<F: Factor>(b: &Braid<F>) -> F {
    preferred_prefix(&b.reverse()).revert()
}

/// `s(b)`: conjugate `b` by its preferred prefix.
pub fn cyclic_sliding<F: Factor>(b: &Braid<F>) -> Braid<F> {
    b.conjugate_by_factor(&preferred_prefix(b))
}

/// `transport_c(b, f)`: `f` conjugates `b` into another conjugacy-class
/// representative `b2 = f⁻¹·b·f`; transport carries `f` along the cycling
/// step from `b` to `c(b)` by returning the leading factor of
/// `first(b)⁻¹ · f · first(b2)`, where `b2 = f⁻¹ · b · f`.
pub fn transport_c<F: Factor>(b: &Braid<F>, f: &F) -> F {
    let parameter = b.parameter();
    let b2 = b.conjugate_by_factor(f);
    let lhs = Braid::from_factor(parameter, b.first_factor()).inverse();
    let mid = Braid::from_factor(parameter, f.clone());
    let rhs = Braid::from_factor(parameter, b2.first_factor());
    lhs.multiply(&mid).multiply(&rhs).leading_factor()
}

/// `transport_s(b, f)`: the sliding analogue of [`transport_c`]. The
/// quotient `p(b)⁻¹ · f · p(b2)` (`b2 = f⁻¹ · b · f`) need not have positive
/// canonical length, so the three cases spelled out in the source's
/// `Transport_Sliding` are handled explicitly: a genuine leading factor when
/// one exists, `Δ` when the quotient is `Δ` itself, and the identity
/// otherwise.
pub fn transport_s<F: Factor>(b: &Braid<F>, f: &F) -> F {
    let parameter = b.parameter();
    let b2 = b.conjugate_by_factor(f);
    let pp_b = preferred_prefix(b);
    let pp_b2 = preferred_prefix(&b2);
    let lhs = Braid::from_factor(parameter, pp_b).inverse();
    let mid = Braid::from_factor(parameter, f.clone());
    let rhs = Braid::from_factor(parameter, pp_b2);
    let quotient = lhs.multiply(&mid).multiply(&rhs);
    if quotient.canonical_length() > 0 {
        quotient.first_factor()
    } else if quotient.inf() == 1 {
        F::delta(parameter)
    } else {
        F::identity(parameter)
    }
}

/// The cycling pullback: a factor whose `transport_c` image is `target`.
/// Analogous to `pullback_s` with `initial(b)` in place of `p(b)` and the
/// target conjugated through a cycling step instead of a sliding one.
pub fn pullback_c<F: Factor>(b: &Braid<F>, target: &F) -> F {
    let parameter = b.parameter();
    let initial_times_target =
        Braid::from_factor(parameter, b.initial_factor()).multiply(&Braid::from_factor(parameter, target.clone()));
    let cb = cycling(b);
    let conjugated = cb.conjugate_by_factor(target);
    let suffix = preferred_suffix(&conjugated);
    let joined = initial_times_target.right_meet(&Braid::from_factor(parameter, suffix));
    let quotient = Braid::from_factor(parameter, b.initial_factor()).inverse().multiply(&joined);
    quotient.leading_factor()
}

/// The sliding pullback: `right_meet(p(b) · f, preferred_suffix(f⁻¹ · s(b)
/// · f))`, then the leading factor of the quotient by `p(b)`.
pub fn pullback_s<F: Factor>(b: &Braid<F>, target: &F) -> F {
    let parameter = b.parameter();
    let prefix_times_target =
        Braid::from_factor(parameter, preferred_prefix(b)).multiply(&Braid::from_factor(parameter, target.clone()));
    let sb = cyclic_sliding(b);
    let conjugated = sb.conjugate_by_factor(target);
    let suffix = preferred_suffix(&conjugated);
    let joined = prefix_times_target.right_meet(&Braid::from_factor(parameter, suffix));
    let quotient = Braid::from_factor(parameter, preferred_prefix(b)).inverse().multiply(&joined);
    quotient.leading_factor()
}

/// One full orbit under repeated application of `step`, starting at `b`
/// and stopping as soon as the orbit revisits any element already seen.
fn trajectory_of<F: Factor>(b: &Braid<F>, step: impl Fn(&Braid<F>) -> Braid<F>) -> Trajectory<F> {
    let mut elems = Vec::new();
    let mut cur = b.clone();
    while !elems.contains(&cur) {
        elems.push(cur.clone());
        cur = step(&cur);
    }
    Trajectory(elems)
}

/// A closed orbit of a braid under repeated cycling or sliding.
#[derive(Clone, Debug)]
pub struct Trajectory<F: Factor>(pub Vec<Braid<F>>);

impl<F: Factor> Trajectory<F> {
    /// The element the trajectory was computed from — the representative
    /// used by the set builders to test "is this orbit already known".
    pub fn canonical_first(&self) -> Braid<F> {
        self.0[0].clone()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn cycling_trajectory<F: Factor>(b: &Braid<F>) -> Trajectory<F> {
    trajectory_of(b, cycling)
}

pub fn sliding_trajectory<F: Factor>(b: &Braid<F>) -> Trajectory<F> {
    trajectory_of(b, cyclic_sliding)
}

/// The returns of `f` along `b`'s cycling trajectory: iterate
/// `(b, f) → (cycling(b), transport_c(b, f))` until a braid repeats, then
/// keep only the factors from the first repeat onward (the periodic part;
/// the pre-period, if any, is discarded).
pub fn returns_c<F: Factor>(b: &Braid<F>, f: &F) -> Vec<F> {
    returns_along(b, f, cycling, transport_c)
}

/// The sliding analogue of [`returns_c`].
pub fn returns_s<F: Factor>(b: &Braid<F>, f: &F) -> Vec<F> {
    returns_along(b, f, cyclic_sliding, transport_s)
}

fn returns_along<F: Factor>(
    b: &Braid<F>,
    f: &F,
    step: impl Fn(&Braid<F>) -> Braid<F>,
    transport: impl Fn(&Braid<F>, &F) -> F,
) -> Vec<F> {
    let mut seen_braids = Vec::new();
    let mut seen_factors = Vec::new();
    let mut cur_b = b.clone();
    let mut cur_f = f.clone();
    loop {
        if let Some(pos) = seen_braids.iter().position(|x| x == &cur_b) {
            return seen_factors[pos..].to_vec();
        }
        seen_braids.push(cur_b.clone());
        seen_factors.push(cur_f.clone());
        let next_f = transport(&cur_b, &cur_f);
        let next_b = step(&cur_b);
        cur_b = next_b;
        cur_f = next_f;
    }
}

/// The main cycling pullback of `f`: starting from `f`, repeatedly sweep
/// `pullback_c` backwards around the whole cycling trajectory of `b` (last
/// element first) and feed the result into the next sweep, until a value
/// repeats.
pub fn main_pullback_c<F: Factor>(b: &Braid<F>, f: &F) -> F {
    main_pullback_along(f, &cycling_trajectory(b), pullback_c)
}

/// The sliding analogue of [`main_pullback_c`].
pub fn main_pullback_s<F: Factor>(b: &Braid<F>, f: &F) -> F {
    main_pullback_along(f, &sliding_trajectory(b), pullback_s)
}

fn main_pullback_along<F: Factor>(
    f: &F,
    trajectory: &Trajectory<F>,
    pullback: impl Fn(&Braid<F>, &F) -> F,
) -> F {
    let mut seen = Vec::new();
    let mut cur = f.clone();
    loop {
        if seen.contains(&cur) {
            return cur;
        }
        seen.push(cur.clone());
        for step in trajectory.0.iter().rev() {
            cur = pullback(step, &cur);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::artin::ArtinFactor;

    #[test]
    fn cycling_preserves_canonical_length() {
        let b = Braid::<ArtinFactor>::from_word(4, "1 2 3").unwrap();
        let c = cycling(&b);
        assert_eq!(c.canonical_length(), b.canonical_length());
    }

    #[test]
    fn decycling_preserves_canonical_length() {
        let b = Braid::<ArtinFactor>::from_word(4, "1 2 3").unwrap();
        let d = decycling(&b);
        assert_eq!(d.canonical_length(), b.canonical_length());
    }

    #[test]
    fn cycling_is_a_genuine_conjugation() {
        let b = Braid::<ArtinFactor>::from_word(4, "1 2 3").unwrap();
        let g = Braid::from_factor(4, b.initial_factor());
        let expected = g.inverse().multiply(&b).multiply(&g);
        assert_eq!(cycling(&b), expected);
    }

    #[test]
    fn cycling_trajectory_is_eventually_periodic() {
        let b = Braid::<ArtinFactor>::from_word(3, "1 2 1 2 1 2").unwrap();
        let trajectory = cycling_trajectory(&b);
        assert!(!trajectory.is_empty());
        assert_eq!(cycling(&trajectory.canonical_first()), trajectory.canonical_first());
    }
}
