#![allow(clippy::needless_range_loop)]

//! Small, dependency-free helpers shared by the `garcide` crate: permutation
//! composition/inversion and a task-local scratch buffer for the "direct
//! permutation" that several lattice operations need in their inner loop.

use std::cell::RefCell;

/// Composes two permutations of `0..n`, given as images: `compose(f, g)[i] = f[g[i]]`.
///
/// Panics (via indexing) if `f` and `g` have different lengths or contain an
/// out-of-range image; callers are expected to only ever pass permutations of
/// the same `n`.
pub fn compose_permutations(f: &[u16], g: &[u16]) -> Vec<u16> {
    g.iter().map(|&i| f[i as usize]).collect()
}

/// Inverts a permutation given as images, i.e. computes `inv` such that
/// `inv[p[i]] == i` for all `i`.
pub fn invert_permutation(p: &[u16]) -> Vec<u16> {
    let mut inv = vec![0u16; p.len()];
    invert_permutation_into(p, &mut inv);
    inv
}

/// Writes the inverse of `p` into `out` without allocating: `out[p[i]] = i`
/// for all `i`. `out` must have the same length as `p`; panics (via
/// indexing) otherwise. Used together with [`with_permutation_scratch`] by
/// callers that only need the inverse transiently, to avoid the allocation
/// [`invert_permutation`] makes for its returned `Vec`.
pub fn invert_permutation_into(p: &[u16], out: &mut [u16]) {
    for (i, &pi) in p.iter().enumerate() {
        out[pi as usize] = i as u16;
    }
}

/// Whether `p` is the identity permutation of `0..p.len()`.
pub fn is_identity_permutation(p: &[u16]) -> bool {
    p.iter().enumerate().all(|(i, &pi)| pi as usize == i)
}

thread_local! {
    static PERM_SCRATCH: RefCell<Vec<u16>> = const { RefCell::new(Vec::new()) };
}

/// Runs `f` with a task-local scratch buffer of length `len`, zeroed before
/// the call. The buffer is reused across calls on the same thread to avoid
/// repeated allocation in the tight inner loops of the meet/join routines,
/// but callers must never rely on its contents surviving past their own call:
/// it is reset on every entry, never assumed clean from a previous caller.
pub fn with_permutation_scratch<R>(len: usize, f: impl FnOnce(&mut [u16]) -> R) -> R {
    PERM_SCRATCH.with(|cell| {
        let mut buf = cell.borrow_mut();
        buf.clear();
        buf.resize(len, 0);
        f(&mut buf)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_then_invert_is_identity() {
        let f = vec![2u16, 0, 1];
        let inv = invert_permutation(&f);
        let id = compose_permutations(&f, &inv);
        assert!(is_identity_permutation(&id));
    }

    #[test]
    fn scratch_is_reset_between_calls() {
        with_permutation_scratch(4, |buf| buf[0] = 9);
        with_permutation_scratch(4, |buf| {
            assert_eq!(buf[0], 0);
        });
    }
}
