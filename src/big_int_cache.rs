use lazy_static::*;

use crate::BigInt;
use crate::Radix;
use crate::big_int_constants::*;

lazy_static! {
    /// Digit values `0..=15`, used when accumulating parsed digits.
    pub static ref DIGIT_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::from(0_u64),  BigInt::from(1_u64),  BigInt::from(2_u64),  BigInt::from(3_u64),
        BigInt::from(4_u64),  BigInt::from(5_u64),  BigInt::from(6_u64),  BigInt::from(7_u64),
        BigInt::from(8_u64),  BigInt::from(9_u64),  BigInt::from(10_u64), BigInt::from(11_u64),
        BigInt::from(12_u64), BigInt::from(13_u64), BigInt::from(14_u64), BigInt::from(15_u64),
    ];
    pub static ref RADIX_CACHE: [BigInt; 3] = [
        BigInt::from(8_u64),
        BigInt::from(10_u64),
        BigInt::from(16_u64),
    ];
    pub static ref ONE: BigInt = BigInt::from(1_i64);
    pub static ref MINUS_ONE: BigInt = BigInt::from(-1_i64);
}

pub fn radix_constant(radix: Radix) -> &'static BigInt {
    match radix {
        Radix::Octal => &RADIX_CACHE[0],
        Radix::Decimal => &RADIX_CACHE[1],
        Radix::Hexadecimal => &RADIX_CACHE[2],
    }
}
