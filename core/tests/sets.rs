//! End-to-end scenario 5 (spec §8): the Ultra Summit Set of `Δ²` on 3
//! strands is a single orbit of size 1, and the element is periodic.

use garcide::braid::Braid;
use garcide::classify::{thurston_type, ThurstonType};
use garcide::families::artin::ArtinFactor;
use garcide::sets::UltraSummitSet;

#[test]
fn delta_squared_has_a_single_singleton_orbit() {
    let n = 3;
    let b = Braid::<ArtinFactor>::from_word(n, "1 2 1 2 1 2").unwrap();
    let uss = UltraSummitSet::build(&b).unwrap();
    assert_eq!(uss.orbits.len(), 1);
    assert_eq!(uss.orbits[0].elements.len(), 1);
}

#[test]
fn delta_squared_is_classified_periodic() {
    let n = 3;
    let b = Braid::<ArtinFactor>::from_word(n, "1 2 1 2 1 2").unwrap();
    let (verdict, warning) = thurston_type(&b, n as usize, ArtinFactor::image_vector).unwrap();
    assert_eq!(verdict, ThurstonType::Periodic);
    assert_eq!(warning, None);
}
