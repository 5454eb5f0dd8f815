// 18-decimal fixed-point arithmetic on signed 128-bit integers.
// Every multiply runs through a 256-bit intermediate so in-range operands
// can never overflow before the final rescale.

/// Values are integers scaled by 1e18 (18 fractional decimal digits).
pub const SCALE: i128 = 1_000_000_000_000_000_000;
pub const ONE: i128 = SCALE;
pub const HALF: i128 = SCALE / 2;

/// Error type for math operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    Overflow,
    DivisionByZero,
}

/// 18-decimal fixed-point number. The raw integer is public so callers that
/// already hold 1e18-scaled values can construct and read it directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fixed18(pub i128);

impl Fixed18 {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(ONE);
    pub const HALF: Self = Self(HALF);

    pub fn from_int(n: i64) -> Self {
        // i64::MAX * SCALE is ~9.2e36, well inside i128
        Self(n as i128 * SCALE)
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Self) -> Result<Self, MathError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(MathError::Overflow)
    }

    pub fn checked_sub(self, other: Self) -> Result<Self, MathError> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(MathError::Overflow)
    }

    /// Scaled multiply: a * b / 1e18, rounded to nearest.
    pub fn checked_mul(self, other: Self) -> Result<Self, MathError> {
        Ok(Self(mul_div(self.0, other.0, SCALE)?))
    }

    /// Scaled divide: a * 1e18 / b, rounded to nearest.
    pub fn checked_div(self, other: Self) -> Result<Self, MathError> {
        Ok(Self(mul_div(self.0, SCALE, other.0)?))
    }
}

/// Computes a * b / denom with a full 256-bit intermediate product.
///
/// Rounding contract: round to nearest, ties away from zero. This rule is
/// applied by every scaled operation in the crate so independent
/// implementations agree bit-for-bit.
///
/// Fails with `DivisionByZero` when denom == 0 and with `Overflow` when the
/// rounded quotient does not fit in i128.
pub fn mul_div(a: i128, b: i128, denom: i128) -> Result<i128, MathError> {
    if denom == 0 {
        return Err(MathError::DivisionByZero);
    }
    let negative = ((a < 0) != (b < 0)) != (denom < 0);
    let d = denom.unsigned_abs();

    let (hi, lo) = wide_mul(a.unsigned_abs(), b.unsigned_abs());

    // round to nearest: add half the divisor to the 256-bit numerator;
    // the high limb cannot wrap because hi <= 2^128 - 2 for any product
    let (lo, carry) = lo.overflowing_add(d / 2);
    let hi = hi + carry as u128;

    if hi >= d {
        // quotient >= 2^128
        return Err(MathError::Overflow);
    }
    let q = wide_div(hi, lo, d);
    if q > i128::MAX as u128 {
        return Err(MathError::Overflow);
    }
    Ok(if negative { -(q as i128) } else { q as i128 })
}

// 256-bit product of two u128 values via 64-bit limbs, (high, low)
fn wide_mul(a: u128, b: u128) -> (u128, u128) {
    const MASK: u128 = (1 << 64) - 1;
    let (a_hi, a_lo) = (a >> 64, a & MASK);
    let (b_hi, b_lo) = (b >> 64, b & MASK);

    let lo_lo = a_lo * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_lo = a_hi * b_lo;
    let hi_hi = a_hi * b_hi;

    // mid collects the three 64-bit-aligned partial products; it is at most
    // ~2^66 so the additions cannot wrap
    let mid = (lo_lo >> 64) + (lo_hi & MASK) + (hi_lo & MASK);
    let low = (mid << 64) | (lo_lo & MASK);
    let high = hi_hi + (lo_hi >> 64) + (hi_lo >> 64) + (mid >> 64);
    (high, low)
}

// Long division of a 256-bit numerator by a 128-bit divisor. The caller
// guarantees hi < divisor, so the quotient fits in 128 bits. Fixed 128
// iterations keeps the step count input-independent.
fn wide_div(hi: u128, lo: u128, divisor: u128) -> u128 {
    let mut quotient = 0u128;
    let mut rem = hi;
    for i in (0..128).rev() {
        let carry = rem >> 127;
        rem = (rem << 1) | ((lo >> i) & 1);
        if carry != 0 || rem >= divisor {
            rem = rem.wrapping_sub(divisor);
            quotient |= 1 << i;
        }
    }
    quotient
}
