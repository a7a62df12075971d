//! End-to-end scenario 1 (spec §8): normal form of `1 2 3 1 2 1` on 4
//! strands is Δ in both LCF and RCF.

use garcide::braid::Braid;
use garcide::families::artin::ArtinFactor;

#[test]
fn word_reduces_to_delta_in_both_canonical_forms() {
    let n = 4;
    let b = Braid::<ArtinFactor>::from_word(n, "1 2 3 1 2 1").unwrap();
    assert_eq!(b.canonical_length(), 0);
    assert_eq!(b.inf(), 1);
    assert_eq!(b.sup(), 1);

    let rcf = b.lcf_to_rcf();
    assert_eq!(rcf.canonical_length(), 0);
    assert_eq!(rcf.inf(), 1);
    assert_eq!(rcf.sup(), 1);
}
