use num_bigint::{BigInt, BigUint, RandBigInt, ToBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};

// implementation of the extended Euclidean algorithm
// https://en.wikipedia.org/wiki/Extended_Euclidean_algorithm
pub(crate) fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a == &BigInt::zero() {
        (b.clone(), BigInt::zero(), BigInt::one())
    } else {
        let (g, x, y) = extended_gcd(&(b % a), a);

        (g, y - (b / a) * &x, x)
    }
}

// calculates the modular multiplicative inverse
// https://en.wikipedia.org/wiki/Modular_multiplicative_inverse
pub(crate) fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    let a = a.to_bigint().unwrap();
    let modulus = modulus.to_bigint().unwrap();
    let (g, x, _) = extended_gcd(&a, &modulus);

    if g != BigInt::one() {
        None
    } else {
        let result = (&x % &modulus + &modulus) % &modulus;

        result.to_biguint()
    }
}

/// Miller-Rabin primality test with `rounds` random bases.
///
/// The probability that a composite survives is at most `4^-rounds`.
pub(crate) fn is_probably_prime(n: &BigUint, rounds: u32) -> bool {
    let one = BigUint::one();
    let two = &one + &one;
    let three = &two + &one;

    if n < &two {
        return false;
    }
    if n == &two || n == &three {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // factor n - 1 as 2^s * d with d odd
    let n_minus_one = n - &one;
    let mut d = n_minus_one.clone();
    let mut s = 0_u32;

    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    let mut rng = rand::thread_rng();

    'witness: for _ in 0..rounds {
        let base = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = base.modpow(&d, n);

        if x == one || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = x.modpow(&two, n);

            if x == n_minus_one {
                continue 'witness;
            }
        }

        return false;
    }

    true
}
