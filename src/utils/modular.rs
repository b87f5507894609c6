//! Modular arithmetic over the 26-letter alphabet.
//!
//! Every cipher in this crate works on letter ranks `0..26`. These helpers
//! keep intermediate values in that range regardless of the sign of the
//! input, and provide the inverses the Affine and Hill ciphers need.

/// Size of the Latin alphabet used by every cipher.
pub const MODULUS: i64 = 26;

/// Reduces `value` into `0..MODULUS` (Euclidean remainder).
///
/// # Examples
///
/// ```
/// use classicrypt::utils::modular::reduce;
///
/// assert_eq!(reduce(29), 3);
/// assert_eq!(reduce(-3), 23);
/// ```
pub fn reduce(value: i64) -> u8 {
    value.rem_euclid(MODULUS) as u8
}

/// Greatest common divisor of `a` and `b` (always non-negative).
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Returns `true` if `value` has a multiplicative inverse modulo 26.
pub fn is_invertible(value: i64) -> bool {
    gcd(value.rem_euclid(MODULUS), MODULUS) == 1
}

/// Computes the multiplicative inverse of `value` modulo 26.
///
/// Uses the extended Euclidean algorithm.
///
/// # Returns
/// `Some(inv)` with `value * inv ≡ 1 (mod 26)` and `inv` in `0..26`, or
/// `None` if `value` shares a factor with 26.
///
/// # Examples
///
/// ```
/// use classicrypt::utils::modular::mod_inverse;
///
/// assert_eq!(mod_inverse(5), Some(21));
/// assert_eq!(mod_inverse(13), None);
/// ```
pub fn mod_inverse(value: i64) -> Option<u8> {
    let (mut old_r, mut r) = (value.rem_euclid(MODULUS), MODULUS);
    let (mut old_s, mut s) = (1i64, 0i64);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    if old_r != 1 {
        return None;
    }
    Some(reduce(old_s))
}
