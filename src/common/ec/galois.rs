use crate::common::error::{QRError, QRResult};

// GF(256) arithmetic over the primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
//------------------------------------------------------------------------------

/// Discrete logarithm of `n` with base 2. Zero has no logarithm.
#[inline]
pub fn glog(n: u8) -> QRResult<u8> {
    if n == 0 {
        return Err(QRError::LogOfZero);
    }
    Ok(LOG_TABLE[n as usize])
}

/// `2^n` for any integer exponent. The multiplicative group has order 255, so the
/// exponent is reduced modulo 255 first.
#[inline]
pub fn gexp(n: i32) -> u8 {
    EXP_TABLE[n.rem_euclid(255) as usize]
}

#[inline]
pub fn gmul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    gexp(LOG_TABLE[a as usize] as i32 + LOG_TABLE[b as usize] as i32)
}

const fn build_exp_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 8 {
        table[i] = 1 << i;
        i += 1;
    }
    while i < 256 {
        table[i] = table[i - 4] ^ table[i - 5] ^ table[i - 6] ^ table[i - 8];
        i += 1;
    }
    table
}

const fn build_log_table() -> [u8; 256] {
    let exp = build_exp_table();
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}


// Global constants
//------------------------------------------------------------------------------

pub static EXP_TABLE: [u8; 256] = build_exp_table();

pub static LOG_TABLE: [u8; 256] = build_log_table();
