//! C6 — set closures: breadth-first construction of the Super Summit Set,
//! Ultra Summit Set, and Set of Sliding Circuits as directed graphs (spec
//! §4.6).
//!
//! All three are arena-indexed vertex stores rather than pointer graphs
//! (spec §9): vertices live in a flat `Vec`, and edges/parent links are
//! plain `usize` indices into it (`prev[i]`, `mins[i]`). A `HashMap` keyed
//! on the structural identity of a vertex's first element (its canonical
//! form, which already compares and hashes by value) deduplicates
//! discoveries during the walk.

use std::collections::{HashMap, HashSet};

use crate::braid::Braid;
use crate::conjugation::{cycling, cycling_trajectory, sliding_trajectory};
use crate::error::Error;
use crate::family::Factor;
use crate::minimal::{min_set_sc, min_set_sss, min_set_uss};

/// Sends `b` to the super-summit set: alternately cycle until `inf`
/// stabilises for `lattice_height` consecutive steps, then decycle
/// symmetrically until `sup` stabilises the same way (spec §4.6).
pub fn send_to_super_summit<F: Factor>(b: &Braid<F>) -> Braid<F> {
    let bound = F::lattice_height(b.parameter()) as usize + 1;
    let mut cur = b.clone();
    let mut stable_run = 0usize;
    while stable_run < bound {
        let next = cycling(&cur);
        if next.inf() <= cur.inf() {
            stable_run += 1;
        } else {
            stable_run = 0;
        }
        cur = next;
    }
    stable_run = 0;
    while stable_run < bound {
        let next = crate::conjugation::decycling(&cur);
        if next.sup() >= cur.sup() {
            stable_run += 1;
        } else {
            stable_run = 0;
        }
        cur = next;
    }
    cur
}

/// The Super Summit Set of `b`, built by breadth-first search from
/// `send_to_super_summit(b)` using `min_set_sss`'s atom-indexed
/// conjugators as the candidate edges out of each vertex.
#[derive(Debug, Clone)]
pub struct SuperSummitSet<F: Factor> {
    pub vertices: Vec<Braid<F>>,
}

impl<F: Factor + Send + Sync> SuperSummitSet<F> {
    pub fn contains(&self, b: &Braid<F>) -> bool {
        self.vertices.iter().any(|v| v == b)
    }

    pub fn build(b: &Braid<F>) -> Self {
        let start = send_to_super_summit(b);
        let mut seen: HashSet<Braid<F>> = HashSet::new();
        let mut queue = vec![start.clone()];
        seen.insert(start);
        let mut head = 0usize;
        while head < queue.len() {
            let current = queue[head].clone();
            head += 1;
            for r in min_set_sss(&current) {
                let target = current.conjugate_by_factor(&r);
                if seen.insert(target.clone()) {
                    queue.push(target);
                }
            }
        }
        log::debug!("garcide: SSS closure discovered {} vertices", queue.len());
        SuperSummitSet { vertices: queue }
    }
}

/// One cycling orbit of the Ultra Summit Set: the closed trajectory under
/// repeated cycling, canonicalised by always starting from its first
/// element, plus the spanning-tree annotations used to reconstruct a
/// conjugating witness (spec §3, "Spanning tree").
#[derive(Debug, Clone)]
pub struct UssOrbit<F: Factor> {
    pub elements: Vec<Braid<F>>,
    /// The simple factor that conjugated the parent orbit's first element
    /// into this orbit's first element (identity for the root orbit).
    pub mins: F,
    /// Index, into the owning set's `orbits`, of the parent orbit.
    pub prev: usize,
}

impl<F: Factor> UssOrbit<F> {
    pub fn first(&self) -> &Braid<F> {
        &self.elements[0]
    }
}

/// The Ultra Summit Set of `b`: the periodic-under-cycling part of the
/// Super Summit Set, grouped into orbits with spanning-tree annotations.
#[derive(Debug, Clone)]
pub struct UltraSummitSet<F: Factor> {
    pub orbits: Vec<UssOrbit<F>>,
}

impl<F: Factor + Send + Sync> UltraSummitSet<F> {
    /// The orbit index containing `b`, if any, found by first-element
    /// equality (spec §4.6: "by first-element equality").
    pub fn orbit_containing(&self, b: &Braid<F>) -> Option<usize> {
        self.orbits
            .iter()
            .position(|o| o.elements.iter().any(|e| e == b))
    }

    pub fn build(b: &Braid<F>) -> Result<Self, Error> {
        let start = send_to_super_summit(b);
        let root_trajectory = cycling_trajectory(&start);
        let root = UssOrbit {
            elements: root_trajectory.0,
            mins: F::identity(b.parameter()),
            prev: 0,
        };
        let mut orbits = vec![root];
        let mut index: HashMap<Braid<F>, usize> =
            HashMap::from_iter([(orbits[0].first().clone(), 0)]);
        let mut head = 0usize;
        while head < orbits.len() {
            let current_first = orbits[head].first().clone();
            let parameter = current_first.parameter();
            head += 1;
            log::debug!(
                "garcide: USS closure at orbit {head}/{} (queue depth {})",
                orbits.len(),
                orbits.len() - head
            );
            // Also seed the Δ-conjugate of the orbit's first element: USS
            // carries a Δ-action that plain cycling does not reach on its
            // own (spec §4.6).
            let delta = F::delta(parameter);
            let delta_conjugate = current_first.conjugate_by_factor(&delta);
            if !index.contains_key(&delta_conjugate) {
                let trajectory = cycling_trajectory(&delta_conjugate);
                let canonical = trajectory.canonical_first();
                if let Some(&existing) = index.get(&canonical) {
                    index.insert(delta_conjugate, existing);
                } else {
                    let new_index = orbits.len();
                    index.insert(canonical.clone(), new_index);
                    index.insert(delta_conjugate, new_index);
                    orbits.push(UssOrbit {
                        elements: trajectory.0,
                        mins: delta,
                        prev: head - 1,
                    });
                }
            }
            for r in min_set_uss(&current_first)? {
                let target = current_first.conjugate_by_factor(&r);
                let trajectory = cycling_trajectory(&target);
                let canonical = trajectory.canonical_first();
                if index.contains_key(&canonical) {
                    continue;
                }
                let new_index = orbits.len();
                index.insert(canonical, new_index);
                orbits.push(UssOrbit {
                    elements: trajectory.0,
                    mins: r,
                    prev: head - 1,
                });
            }
        }
        Ok(UltraSummitSet { orbits })
    }
}

/// One sliding circuit of the Set of Sliding Circuits: the closed
/// trajectory under repeated cyclic sliding.
#[derive(Debug, Clone)]
pub struct ScCircuit<F: Factor> {
    pub elements: Vec<Braid<F>>,
    pub mins: F,
    pub prev: usize,
}

impl<F: Factor> ScCircuit<F> {
    pub fn first(&self) -> &Braid<F> {
        &self.elements[0]
    }
}

/// The Set of Sliding Circuits of `b`: identical BFS shape to
/// [`UltraSummitSet`] but walking cyclic sliding instead of cycling, and
/// using `min_set_sc` in place of `min_set_uss` (spec §4.6).
#[derive(Debug, Clone)]
pub struct SlidingCircuitSet<F: Factor> {
    pub circuits: Vec<ScCircuit<F>>,
}

impl<F: Factor + Send + Sync> SlidingCircuitSet<F> {
    pub fn circuit_containing(&self, b: &Braid<F>) -> Option<usize> {
        self.circuits
            .iter()
            .position(|c| c.elements.iter().any(|e| e == b))
    }

    pub fn build(b: &Braid<F>) -> Self {
        let start = send_to_super_summit(b);
        let root_trajectory = sliding_trajectory(&start);
        let root = ScCircuit {
            elements: root_trajectory.0,
            mins: F::identity(b.parameter()),
            prev: 0,
        };
        let mut circuits = vec![root];
        let mut index: HashMap<Braid<F>, usize> =
            HashMap::from_iter([(circuits[0].first().clone(), 0)]);
        let mut head = 0usize;
        while head < circuits.len() {
            let current_first = circuits[head].first().clone();
            let parameter = current_first.parameter();
            head += 1;
            log::debug!(
                "garcide: SC closure at circuit {head}/{} (queue depth {})",
                circuits.len(),
                circuits.len() - head
            );
            let delta = F::delta(parameter);
            let delta_conjugate = current_first.conjugate_by_factor(&delta);
            if !index.contains_key(&delta_conjugate) {
                let trajectory = sliding_trajectory(&delta_conjugate);
                let canonical = trajectory.canonical_first();
                if let Some(&existing) = index.get(&canonical) {
                    index.insert(delta_conjugate, existing);
                } else {
                    let new_index = circuits.len();
                    index.insert(canonical.clone(), new_index);
                    index.insert(delta_conjugate, new_index);
                    circuits.push(ScCircuit {
                        elements: trajectory.0,
                        mins: delta,
                        prev: head - 1,
                    });
                }
            }
            for r in min_set_sc(&current_first) {
                let target = current_first.conjugate_by_factor(&r);
                let trajectory = sliding_trajectory(&target);
                let canonical = trajectory.canonical_first();
                if index.contains_key(&canonical) {
                    continue;
                }
                let new_index = circuits.len();
                index.insert(canonical, new_index);
                circuits.push(ScCircuit {
                    elements: trajectory.0,
                    mins: r,
                    prev: head - 1,
                });
            }
        }
        SlidingCircuitSet { circuits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::artin::ArtinFactor;

    #[test]
    fn sss_contains_only_canonical_length_minimizers() {
        let b = Braid::<ArtinFactor>::from_word(4, "1 2 1 1 2 1").unwrap();
        let sss = SuperSummitSet::build(&b);
        let min_len = sss
            .vertices
            .iter()
            .map(|v| v.canonical_length())
            .min()
            .unwrap();
        for v in &sss.vertices {
            assert_eq!(v.canonical_length(), min_len);
        }
    }

    #[test]
    fn uss_of_a_periodic_braid_has_one_orbit() {
        let b = Braid::<ArtinFactor>::from_word(3, "1 2 1 2 1 2").unwrap();
        let uss = UltraSummitSet::build(&b).unwrap();
        assert_eq!(uss.orbits.len(), 1);
        assert_eq!(uss.orbits[0].elements.len(), 1);
    }

    #[test]
    fn every_uss_vertex_is_periodic_under_cycling() {
        let b = Braid::<ArtinFactor>::from_word(4, "1 2 1 1 2 1").unwrap();
        let uss = UltraSummitSet::build(&b).unwrap();
        for orbit in &uss.orbits {
            let first = orbit.first();
            let mut cur = first.clone();
            for _ in 0..orbit.elements.len() {
                cur = cycling(&cur);
            }
            assert_eq!(&cur, first);
        }
    }
}
