use std::mem;
use std::ops::Deref;

use num_bigint::BigUint;
use num_traits::Zero;
use zeroize::{Zeroize, ZeroizeOnDrop};

// num-bigint gives no access to its limb storage, so all zeroing in this
// module is value-level: an element is overwritten with zero before its
// allocation is released.

/// One share of a split secret: a point `(x, y)` on the secret polynomial.
///
/// The share's identity is its x-coordinate. Both coordinates are field
/// elements, strictly less than the prime modulus used for the split, and
/// are overwritten with zero when the share is dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Share {
    pub x: BigUint,
    pub y: BigUint,
}

impl Share {
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Share { x, y }
    }
}

impl Zeroize for Share {
    fn zeroize(&mut self) {
        self.x.set_zero();
        self.y.set_zero();
    }
}

impl Drop for Share {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Share {}

/// A transient secret-bearing field element, zeroed on every exit path of
/// the operation that owns it.
pub(crate) struct SensitiveElement(pub(crate) BigUint);

impl SensitiveElement {
    /// Hands the value to the caller; the guard then zeroes the leftover
    /// default in its place.
    pub(crate) fn into_inner(mut self) -> BigUint {
        mem::take(&mut self.0)
    }
}

impl Zeroize for SensitiveElement {
    fn zeroize(&mut self) {
        self.0.set_zero();
    }
}

impl Drop for SensitiveElement {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for SensitiveElement {}

/// A batch of secret-bearing field elements (polynomial coefficients or
/// sampled x-coordinates). Every element is overwritten with zero when the
/// batch is dropped, whichever way the enclosing operation exits.
pub(crate) struct SensitiveElements(Vec<BigUint>);

impl SensitiveElements {
    pub(crate) fn new(elements: Vec<BigUint>) -> Self {
        SensitiveElements(elements)
    }
}

impl Deref for SensitiveElements {
    type Target = [BigUint];

    fn deref(&self) -> &[BigUint] {
        &self.0
    }
}

impl Zeroize for SensitiveElements {
    fn zeroize(&mut self) {
        for element in &mut self.0 {
            element.set_zero();
        }
        self.0.clear();
    }
}

impl Drop for SensitiveElements {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for SensitiveElements {}
