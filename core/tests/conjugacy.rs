//! End-to-end scenarios 3 and 4 (spec §8): conjugacy decision, true and
//! false, with witness reconstruction for the true case.

use garcide::braid::Braid;
use garcide::conjugacy::{are_conjugate, are_conjugate_sc, are_conjugate_with_witness};
use garcide::families::artin::ArtinFactor;

#[test]
fn conjugate_pair_is_confirmed_with_a_valid_witness() {
    let _ = env_logger::try_init();
    let n = 3;
    let u = Braid::<ArtinFactor>::from_word(n, "1 2 1 2").unwrap();
    let v = Braid::<ArtinFactor>::from_word(n, "2 1 2 1").unwrap();
    assert!(are_conjugate(&u, &v));

    let witness = are_conjugate_with_witness(&u, &v)
        .unwrap()
        .expect("u and v are conjugate");
    let reconstructed = witness.inverse().multiply(&u).multiply(&witness);
    assert_eq!(reconstructed, v);
}

#[test]
fn the_same_pair_is_also_confirmed_via_sliding_circuits() {
    let n = 3;
    let u = Braid::<ArtinFactor>::from_word(n, "1 2 1 2").unwrap();
    let v = Braid::<ArtinFactor>::from_word(n, "2 1 2 1").unwrap();
    let witness = are_conjugate_sc(&u, &v).expect("u and v are conjugate");
    let reconstructed = witness.inverse().multiply(&u).multiply(&witness);
    assert_eq!(reconstructed, v);
}

#[test]
fn differing_sup_rules_out_conjugacy() {
    let n = 4;
    let u = Braid::<ArtinFactor>::from_word(n, "1 2 3").unwrap();
    let v = Braid::<ArtinFactor>::from_word(n, "1 2").unwrap();
    assert_ne!(u.sup(), v.sup());
    assert!(!are_conjugate(&u, &v));
    assert!(are_conjugate_with_witness(&u, &v).unwrap().is_none());
}
