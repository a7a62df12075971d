//! End-to-end scenario 2 (spec §8): meet/join on braids, not just factors.

use garcide::braid::Braid;
use garcide::families::artin::ArtinFactor;

#[test]
fn meet_of_the_two_length_two_words_is_the_identity() {
    let n = 3;
    let u = Braid::<ArtinFactor>::from_word(n, "1 2").unwrap();
    let v = Braid::<ArtinFactor>::from_word(n, "2 1").unwrap();
    assert!(u.left_meet(&v).is_identity());
}

#[test]
fn join_of_the_two_length_two_words_is_delta() {
    let n = 3;
    let u = Braid::<ArtinFactor>::from_word(n, "1 2").unwrap();
    let v = Braid::<ArtinFactor>::from_word(n, "2 1").unwrap();
    let join = u.left_join(&v);
    assert_eq!(join.canonical_length(), 0);
    assert_eq!(join.inf(), 1);
}
