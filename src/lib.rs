//! Shamir's threshold secret-sharing scheme over a prime field.
//!
//! A secret is split into `n` shares such that any `t` of them reconstruct
//! it exactly while `t - 1` or fewer reveal nothing. Shares are points on a
//! random polynomial with the secret as constant term; reconstruction is
//! Lagrange interpolation at zero.

use num_bigint::BigUint;

mod error;
mod sampler;
mod shamir;
mod share;
mod util;

pub use error::ShamirError;
pub use shamir::{reconstruct_secret, split_secret, split_secret_with_rng};
pub use share::Share;

pub fn string_to_secret(message: &str) -> BigUint {
    BigUint::from_bytes_be(message.as_bytes())
}

pub fn string_from_secret(secret: &BigUint) -> String {
    String::from_utf8(secret.to_bytes_be()).unwrap()
}
