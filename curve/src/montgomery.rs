//! 256-bit limb arithmetic shared by the base and scalar fields.
//!
//! Values are `[u64; 4]` in little-endian limb order. Both BN254 moduli are
//! below 2^254, so sums of two reduced values never overflow 256 bits.

/// Helper: Carrying addition
#[inline]
pub(crate) const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

/// Helper: Borrowing subtraction
#[inline]
pub(crate) const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

/// Add two reduced values mod `modulus`.
#[inline]
pub(crate) const fn add_mod(a: [u64; 4], b: [u64; 4], modulus: [u64; 4]) -> [u64; 4] {
    let (r0, carry) = a[0].overflowing_add(b[0]);
    let (r1, carry) = carrying_add(a[1], b[1], carry);
    let (r2, carry) = carrying_add(a[2], b[2], carry);
    let (r3, carry) = carrying_add(a[3], b[3], carry);

    let (s0, borrow) = r0.overflowing_sub(modulus[0]);
    let (s1, borrow) = borrowing_sub(r1, modulus[1], borrow);
    let (s2, borrow) = borrowing_sub(r2, modulus[2], borrow);
    let (s3, borrow) = borrowing_sub(r3, modulus[3], borrow);

    if carry || !borrow {
        [s0, s1, s2, s3]
    } else {
        [r0, r1, r2, r3]
    }
}

/// Subtract two reduced values mod `modulus`.
#[inline]
pub(crate) const fn sub_mod(a: [u64; 4], b: [u64; 4], modulus: [u64; 4]) -> [u64; 4] {
    let (r0, borrow) = a[0].overflowing_sub(b[0]);
    let (r1, borrow) = borrowing_sub(a[1], b[1], borrow);
    let (r2, borrow) = borrowing_sub(a[2], b[2], borrow);
    let (r3, borrow) = borrowing_sub(a[3], b[3], borrow);

    if borrow {
        let (r0, carry) = r0.overflowing_add(modulus[0]);
        let (r1, carry) = carrying_add(r1, modulus[1], carry);
        let (r2, carry) = carrying_add(r2, modulus[2], carry);
        let (r3, _) = carrying_add(r3, modulus[3], carry);
        [r0, r1, r2, r3]
    } else {
        [r0, r1, r2, r3]
    }
}

#[inline]
pub(crate) const fn neg_mod(a: [u64; 4], modulus: [u64; 4]) -> [u64; 4] {
    if a[0] == 0 && a[1] == 0 && a[2] == 0 && a[3] == 0 {
        return [0, 0, 0, 0];
    }
    sub_mod(modulus, a, modulus)
}

/// Returns true when `limbs < modulus`.
#[inline]
pub(crate) const fn is_canonical(limbs: [u64; 4], modulus: [u64; 4]) -> bool {
    let (_, borrow) = limbs[0].overflowing_sub(modulus[0]);
    let (_, borrow) = borrowing_sub(limbs[1], modulus[1], borrow);
    let (_, borrow) = borrowing_sub(limbs[2], modulus[2], borrow);
    let (_, borrow) = borrowing_sub(limbs[3], modulus[3], borrow);
    borrow
}

/// Montgomery multiplication: `a * b * 2^-256 mod modulus`.
///
/// `mu` is `-modulus^-1 mod 2^64`. The product only has to be below
/// `modulus * 2^256`, so one operand may be an arbitrary 256-bit integer as
/// long as the other is reduced. `from_be_bytes_reduced` relies on this.
pub(crate) fn montgomery_mul(a: [u64; 4], b: [u64; 4], modulus: [u64; 4], mu: u64) -> [u64; 4] {
    let mut t = [0u64; 8];

    for i in 0..4 {
        let mut carry = 0u128;
        for j in 0..4 {
            let product = (a[i] as u128) * (b[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }
        t[i + 4] = carry as u64;
    }

    // Montgomery reduction
    for i in 0..4 {
        let k = t[i].wrapping_mul(mu);
        let mut carry = 0u128;

        for j in 0..4 {
            let product = (k as u128) * (modulus[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }

        for j in 4..8 - i {
            let sum = (t[i + j] as u128) + carry;
            t[i + j] = sum as u64;
            carry = sum >> 64;
        }
    }

    let result = [t[4], t[5], t[6], t[7]];

    if is_canonical(result, modulus) {
        result
    } else {
        sub_mod(result, modulus, modulus)
    }
}

/// Reads a 32-byte big-endian integer into little-endian limbs.
#[inline]
pub(crate) fn limbs_from_be_bytes(bytes: &[u8; 32]) -> [u64; 4] {
    let mut limbs = [0u64; 4];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let start = 32 - 8 * (i + 1);
        let mut chunk = [0u8; 8];
        chunk.copy_from_slice(&bytes[start..start + 8]);
        *limb = u64::from_be_bytes(chunk);
    }
    limbs
}

#[inline]
pub(crate) fn limbs_to_be_bytes(limbs: [u64; 4]) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    for (i, limb) in limbs.iter().enumerate() {
        let start = 32 - 8 * (i + 1);
        bytes[start..start + 8].copy_from_slice(&limb.to_be_bytes());
    }
    bytes
}
