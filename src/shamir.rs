use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, Rng};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use zeroize::Zeroize;

use crate::{
    error::ShamirError,
    sampler,
    share::{SensitiveElement, SensitiveElements, Share},
    util,
};

// Shamir's threshold scheme over GF(prime).
// p(X) = secret + c1*X + ... + c_{t-1}*X^{t-1}, shares are points (x, p(x)).

/// Rounds of the Miller-Rabin test applied to every supplied modulus.
/// One confidence level for splitting and reconstruction alike.
const PRIMALITY_ROUNDS: u32 = 50;

/// Splits `secret` into `num_shares` shares of which any `threshold`
/// reconstruct it, drawing randomness from the process CSPRNG.
pub fn split_secret(
    secret: &BigUint,
    num_shares: u32,
    threshold: u32,
    prime: &BigUint,
) -> Result<Vec<Share>, ShamirError> {
    split_secret_with_rng(secret, num_shares, threshold, prime, &mut rand::thread_rng())
}

/// Splits `secret` with a caller-supplied cryptographically secure
/// generator. A seeded generator makes the output reproducible, which the
/// tests rely on.
pub fn split_secret_with_rng<R: Rng + CryptoRng>(
    secret: &BigUint,
    num_shares: u32,
    threshold: u32,
    prime: &BigUint,
    rng: &mut R,
) -> Result<Vec<Share>, ShamirError> {
    if secret >= prime {
        return Err(ShamirError::SecretTooLarge);
    }
    if threshold < 1 || threshold > num_shares {
        return Err(ShamirError::InvalidThreshold {
            threshold,
            num_shares,
        });
    }
    if !util::is_probably_prime(prime, PRIMALITY_ROUNDS) {
        return Err(ShamirError::CompositeModulus);
    }

    // sampled values carry one bit less than the modulus, so every one of
    // them is a valid field element
    let element_bits = prime.bits() - 1;

    // a threshold of 1 means a constant polynomial with no random part
    let coefficients = if threshold > 1 {
        SensitiveElements::new(sampler::unique_random_elements(
            (threshold - 1) as usize,
            element_bits,
            &[],
            rng,
        ))
    } else {
        SensitiveElements::new(Vec::new())
    };

    // x-coordinates must be unique among themselves and must also avoid the
    // coefficient batch
    let xs = SensitiveElements::new(sampler::unique_random_elements(
        num_shares as usize,
        element_bits,
        &coefficients,
        rng,
    ));

    let xs_slice: &[BigUint] = &xs;
    let ys: Vec<BigUint> = xs_slice
        .par_iter()
        .map(|x| evaluate(secret, &coefficients, x, prime))
        .collect();

    let mut shares: Vec<Share> = Vec::new();
    shares
        .try_reserve(num_shares as usize)
        .map_err(|_| ShamirError::AllocationFailed)?;

    for (x, y) in xs_slice.iter().zip(ys) {
        shares.push(Share::new(x.clone(), y));
    }

    // A coordinate that equals the secret would hand it out verbatim, so
    // the whole batch is rejected. With a constant polynomial every y is
    // the secret by construction, hence the check only applies to real
    // polynomials.
    if threshold > 1
        && shares
            .iter()
            .any(|share| share.x == *secret || share.y == *secret)
    {
        shares.zeroize();
        return Err(ShamirError::SecretLeakingShare);
    }

    Ok(shares)
}

// y = secret + sum_j coefficients[j-1] * x^j, each power via modular
// exponentiation, reduced once at the end
fn evaluate(
    secret: &BigUint,
    coefficients: &[BigUint],
    x: &BigUint,
    prime: &BigUint,
) -> BigUint {
    let mut y = SensitiveElement(secret.clone());
    let mut degree = BigUint::one();

    for coefficient in coefficients {
        let power = SensitiveElement(x.modpow(&degree, prime));

        y.0 += coefficient * &power.0;
        degree += BigUint::one();
    }

    y.0 = &y.0 % prime;
    y.into_inner()
}

/// Recovers the secret from the given shares via Lagrange interpolation at
/// zero.
///
/// Supplying at least as many shares as the original threshold returns the
/// original secret exactly; supplying fewer returns a deterministic but
/// meaningless field element. Insufficiency is not detectable from the
/// shares alone, so it is not reported.
pub fn reconstruct_secret(shares: &[Share], prime: &BigUint) -> Result<BigUint, ShamirError> {
    if shares.is_empty() {
        return Err(ShamirError::NoShares);
    }
    if !util::is_probably_prime(prime, PRIMALITY_ROUNDS) {
        return Err(ShamirError::CompositeModulus);
    }
    for share in shares {
        if share.x >= *prime || share.y >= *prime {
            return Err(ShamirError::CoordinateTooLarge);
        }
    }

    let mut secret = SensitiveElement(BigUint::zero());

    for (j, share_j) in shares.iter().enumerate() {
        // Lagrange basis value at zero:
        // L_j = prod_{m != j} x_m * (x_m - x_j)^-1 (mod prime)
        let mut basis = SensitiveElement(BigUint::one());

        for (m, share_m) in shares.iter().enumerate() {
            if m == j {
                continue;
            }

            let difference = if share_m.x >= share_j.x {
                &share_m.x - &share_j.x
            } else {
                prime - (&share_j.x - &share_m.x)
            };

            // the inverse is missing exactly when x_m == x_j
            let inverse =
                util::mod_inverse(&difference, prime).ok_or(ShamirError::NoModularInverse)?;

            basis.0 = (&basis.0 * &share_m.x * inverse) % prime;
        }

        secret.0 = (&secret.0 + &share_j.y * &basis.0) % prime;
    }

    Ok(secret.into_inner())
}
