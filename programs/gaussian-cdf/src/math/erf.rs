// Error-function approximation in 18-decimal fixed point.
//
// erfc(u) is split as erfcx(u) * exp(-u^2): the scaled complementary error
// function erfcx is smooth over the whole working range and is evaluated as
// a single Chebyshev-derived polynomial, while exp(-u^2) runs through an
// integer table plus a short Taylor sum for the fractional part. Validated
// against a 50-digit reference to ~6e-16 absolute error on the CDF.

use crate::math::fixed_point::{mul_div, Fixed18, MathError, ONE, SCALE};

/// sqrt(2) scaled by 1e18
pub const SQRT2: i128 = 1_414_213_562_373_095_049;

/// Saturation threshold for the standard normal CDF. Past eight standard
/// deviations the true tail mass (< 7e-16) is far below the representable
/// precision, so the CDF snaps to exactly 0 or 1.
pub const Z_SAT: i128 = 8 * SCALE;

/// Upper end of the fitted erfcx domain, 8/sqrt(2) rounded up.
const U_MAX: i128 = 5_660_000_000_000_000_000;

/// Term count for the fractional-exponent Taylor sum. 1/19! is below one
/// raw unit, and a fixed count keeps the step count input-independent.
const EXP_FRAC_TERMS: i128 = 19;

// Chebyshev coefficients for erfcx(u) = e^(u^2) * erfc(u) on u in [0, 5.66],
// Horner form in w = (2u - 5.66)/5.66, highest power first. Max fit error
// 3.8e-16 over the domain.
const ERFCX_COEFFS: [i128; 32] = [
    -892551245479,
    1855552051534,
    3316471516691,
    -7033842881320,
    -11102198058682,
    23034355214071,
    8813478485185,
    -20066095852726,
    -36822872794138,
    71571396843663,
    -54990610912656,
    92891024265192,
    -214379052896120,
    370777933473238,
    -599351011981427,
    996393896375193,
    -1642311701233817,
    2644498293083976,
    -4179733801884574,
    6489361711981936,
    -9882158816972473,
    14744076867658048,
    -21530437979281513,
    30735209658751385,
    -42832629177905414,
    58183159219370135,
    -76901609856476602,
    98696048138638698,
    -122701095613404518,
    147347688315887100,
    -170328577504067956,
    188726570776026006,
];

// e^-n scaled by 1e18; e^-33 is below one raw unit
const EXP_NEG_TABLE: [i128; 33] = [
    1_000_000_000_000_000_000, // e^0
    367_879_441_171_442_322,   // e^-1
    135_335_283_236_612_692,   // e^-2
    49_787_068_367_863_943,    // e^-3
    18_315_638_888_734_180,    // e^-4
    6_737_946_999_085_467,     // e^-5
    2_478_752_176_666_358,     // e^-6
    911_881_965_554_516,       // e^-7
    335_462_627_902_512,       // e^-8
    123_409_804_086_680,       // e^-9
    45_399_929_762_485,        // e^-10
    16_701_700_790_246,        // e^-11
    6_144_212_353_328,         // e^-12
    2_260_329_406_981,         // e^-13
    831_528_719_104,           // e^-14
    305_902_320_502,           // e^-15
    112_535_174_719,           // e^-16
    41_399_377_188,            // e^-17
    15_229_979_745,            // e^-18
    5_602_796_438,             // e^-19
    2_061_153_622,             // e^-20
    758_256_043,               // e^-21
    278_946_809,               // e^-22
    102_618_796,               // e^-23
    37_751_345,                // e^-24
    13_887_944,                // e^-25
    5_109_089,                 // e^-26
    1_879_529,                 // e^-27
    691_440,                   // e^-28
    254_367,                   // e^-29
    93_576,                    // e^-30
    34_425,                    // e^-31
    12_664,                    // e^-32
];

/// e^-t for t >= 0. Negative arguments clamp to zero; beyond the table the
/// result is below one raw unit and returns exactly zero.
pub fn exp_neg(t: Fixed18) -> Result<Fixed18, MathError> {
    let t = t.0.max(0);
    let n = t / SCALE;
    if n >= EXP_NEG_TABLE.len() as i128 {
        return Ok(Fixed18::ZERO);
    }
    let f = t % SCALE;

    // alternating Taylor sum for e^-f, f in [0, 1); every partial sum stays
    // inside [e^-1, 1] so plain add/sub cannot overflow
    let mut acc = SCALE;
    let mut term = SCALE;
    for k in 1..=EXP_FRAC_TERMS {
        term = mul_div(term, f, k * SCALE)?;
        if k % 2 == 1 {
            acc -= term;
        } else {
            acc += term;
        }
    }
    Ok(Fixed18(mul_div(EXP_NEG_TABLE[n as usize], acc, SCALE)?))
}

// Horner evaluation in the mapped variable w, |w| <= 1: per-step rounding
// is never amplified and the accumulator stays within one scale unit.
fn erfcx_poly(u: i128) -> Result<i128, MathError> {
    let w = mul_div(2 * u - U_MAX, SCALE, U_MAX)?;
    let mut acc = ERFCX_COEFFS[0];
    for c in &ERFCX_COEFFS[1..] {
        acc = mul_div(acc, w, SCALE)?
            .checked_add(*c)
            .ok_or(MathError::Overflow)?;
    }
    Ok(acc)
}

/// Complementary error function erfc(u), scaled by 1e18.
///
/// Accurate on |u| <= 5.66; arguments beyond are clamped to the domain edge,
/// where erfc is already below 2e-15 (or above 2 - 2e-15).
pub fn erfc_scaled(u: Fixed18) -> Result<Fixed18, MathError> {
    let v = u.0.clamp(-U_MAX, U_MAX);
    if v < 0 {
        return Ok(Fixed18(2 * ONE - erfc_scaled(Fixed18(-v))?.0));
    }
    let u2 = mul_div(v, v, SCALE)?;
    let e = exp_neg(Fixed18(u2))?;
    Ok(Fixed18(mul_div(erfcx_poly(v)?, e.0, SCALE)?))
}

/// Standard normal CDF at z, scaled by 1e18.
///
/// Exactly HALF at z == 0, exactly 0 or 1e18 for |z| >= 8.
pub fn std_normal_cdf(z: Fixed18) -> Result<Fixed18, MathError> {
    if z.0 == 0 {
        return Ok(Fixed18::HALF);
    }
    let mag = z.0.unsigned_abs();
    if mag >= Z_SAT as u128 {
        return Ok(if z.0 > 0 { Fixed18::ONE } else { Fixed18::ZERO });
    }
    let u = mul_div(mag as i128, SCALE, SQRT2)?;

    // Phi(z) = 1 - erfc(|z|/sqrt(2))/2 for positive z and the mirror image
    // for negative z; one magnitude pass keeps Phi(z) + Phi(-z) == 1 exact
    let q = (erfc_scaled(Fixed18(u))?.0 + 1) / 2;
    Ok(Fixed18(if z.0 > 0 { ONE - q } else { q }))
}
