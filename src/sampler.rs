use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, Rng};

/// Cap on redraws for a single element. The rejection loop has no natural
/// bound; at the field widths this crate is used with (>= 40 bits) a single
/// redraw is already rare, so exhausting the cap means the caller requested
/// more distinct elements than the width can provide.
const MAX_REJECTIONS: usize = 1 << 20;

/// Draws `count` pairwise-distinct field elements, each uniform in
/// `[1, 2^bit_width]` (one is added after drawing `bit_width` random bits,
/// so no element is ever zero).
///
/// Elements are also kept distinct from everything in `exclude`, so two
/// batches drawn for the same operation cannot collide with each other.
///
/// Malformed calls are caller bugs, not runtime conditions: a zero `count`
/// or `bit_width` panics rather than returning a typed error.
pub(crate) fn unique_random_elements<R: Rng + CryptoRng>(
    count: usize,
    bit_width: usize,
    exclude: &[BigUint],
    rng: &mut R,
) -> Vec<BigUint> {
    assert!(count > 0, "sampler invoked for an empty batch");
    assert!(bit_width > 0, "sampler invoked with a zero bit width");

    let mut elements: Vec<BigUint> = Vec::with_capacity(count);

    while elements.len() < count {
        let mut rejections = 0;

        loop {
            let candidate = rng.gen_biguint(bit_width) + BigUint::one();

            if !elements.contains(&candidate) && !exclude.contains(&candidate) {
                elements.push(candidate);
                break;
            }

            rejections += 1;
            assert!(
                rejections < MAX_REJECTIONS,
                "sampler exhausted the field width"
            );
        }
    }

    elements
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use num_traits::{One, Zero};
    use rand::{SeedableRng, StdRng};

    use super::unique_random_elements;

    #[test]
    fn test_elements_are_unique_nonzero_and_bounded() {
        let mut rng = StdRng::from_seed([7_u8; 32]);
        let elements = unique_random_elements(64, 16, &[], &mut rng);
        let max = BigUint::one() << 16;

        assert_eq!(elements.len(), 64);

        for (i, element) in elements.iter().enumerate() {
            assert!(!element.is_zero());
            assert!(element <= &max);
            assert!(!elements[..i].contains(element));
        }
    }

    #[test]
    fn test_exclusion_list_is_respected() {
        // a 2-bit width leaves only {1, 2, 3, 4}
        let mut rng = StdRng::from_seed([9_u8; 32]);
        let exclude = vec![BigUint::from(1_u32), BigUint::from(2_u32)];
        let mut elements = unique_random_elements(2, 2, &exclude, &mut rng);

        elements.sort();

        assert_eq!(elements, vec![BigUint::from(3_u32), BigUint::from(4_u32)]);
    }

    #[test]
    fn test_small_width_is_drained_exactly() {
        let mut rng = StdRng::from_seed([1_u8; 32]);
        let mut elements = unique_random_elements(8, 3, &[], &mut rng);

        elements.sort();

        let expected: Vec<BigUint> = (1_u32..=8).map(BigUint::from).collect();
        assert_eq!(elements, expected);
    }

    #[test]
    fn test_reproducible_for_a_fixed_seed() {
        let mut first_rng = StdRng::from_seed([42_u8; 32]);
        let mut second_rng = StdRng::from_seed([42_u8; 32]);

        let first = unique_random_elements(10, 40, &[], &mut first_rng);
        let second = unique_random_elements(10, 40, &[], &mut second_rng);

        assert_eq!(first, second);
    }

    #[test]
    #[should_panic(expected = "empty batch")]
    fn test_zero_count_is_a_contract_violation() {
        let mut rng = StdRng::from_seed([0_u8; 32]);
        unique_random_elements(0, 8, &[], &mut rng);
    }

    #[test]
    #[should_panic(expected = "zero bit width")]
    fn test_zero_width_is_a_contract_violation() {
        let mut rng = StdRng::from_seed([0_u8; 32]);
        unique_random_elements(1, 0, &[], &mut rng);
    }
}
