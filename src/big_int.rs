//! # BigInt
//! Arbitrary-precision signed integers stored as a sign plus a magnitude of
//! 64-bit limbs, least significant limb first.
//! Bitwise operators act on the magnitude only; there is no two's-complement view.
//! # Example
//! ```
//! use big_integer::BigInt;
//!
//! let a: BigInt = "10000000000000".into();
//! let b: BigInt = "900000000000".into();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", a.checked_div(&b).unwrap());
//! println!("a % b = {}", a.checked_rem(&b).unwrap());
//! println!("a << 10 = {}", &a << 10_u32);
//! println!("a >> 10 = {}", &a >> 10_u32);
//! ```
//!

use std::fmt::{self, Display};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Neg,
};
use std::cmp::{Ord, PartialOrd, Ordering};
use std::str::FromStr;

use log::{debug, trace};

use crate::big_int_constants::*;
use crate::big_int_cache::*;
use crate::error::{BigIntError, Result};
use crate::radix::Radix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// Sign of a product or quotient of operands with signs `self` and `other`.
    fn xor(self, other: Sign) -> Sign {
        if self == other { Sign::Positive } else { Sign::Negative }
    }
}

/// Invariant: `mag` is never empty, has no high-order zero limbs except the
/// single limb of zero, and zero is always `Sign::Positive`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    mag: Vec<Limb>,
}

// 杂项辅助函数
impl BigInt {
    fn new(mag: Vec<Limb>, sign: Sign) -> BigInt {
        let mut big = BigInt { sign, mag };
        big.canonicalize();
        big
    }

    fn canonicalize(&mut self) {
        trim_mag(&mut self.mag);
        if is_zero_mag(&self.mag) {
            self.sign = Sign::Positive;
        }
    }

    pub fn zero() -> BigInt {
        BigInt { sign: Sign::Positive, mag: vec![0] }
    }

    pub fn one() -> BigInt {
        BigInt { sign: Sign::Positive, mag: vec![1] }
    }

    pub fn is_zero(&self) -> bool {
        is_zero_mag(&self.mag)
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Limbs of the absolute value, least significant first.
    pub fn magnitude(&self) -> &[Limb] {
        &self.mag
    }

    pub fn limb_count(&self) -> usize {
        self.mag.len()
    }

    /// Number of significant bits in the magnitude; zero has none.
    pub fn bit_length(&self) -> usize {
        let top = self.mag[self.mag.len() - 1];
        (self.mag.len() - 1) * LIMB_BITS + (LIMB_BITS - top.leading_zeros() as usize)
    }

    pub fn abs(&self) -> BigInt {
        BigInt { sign: Sign::Positive, mag: self.mag.clone() }
    }

    fn to_usize(&self) -> Option<usize> {
        if self.is_negative() || self.mag.len() > 1 {
            None
        } else {
            usize::try_from(self.mag[0]).ok()
        }
    }
}

fn is_zero_mag(mag: &[Limb]) -> bool {
    mag.len() == 1 && mag[0] == 0
}

fn is_one_mag(mag: &[Limb]) -> bool {
    mag.len() == 1 && mag[0] == 1
}

/// Drops high-order zero limbs, leaving at least one limb.
fn trim_mag(mag: &mut Vec<Limb>) {
    while mag.len() > 1 && mag[mag.len() - 1] == 0 {
        mag.pop();
    }
    if mag.is_empty() {
        mag.push(0);
    }
}

fn test_bit(mag: &[Limb], bit: usize) -> bool {
    match mag.get(bit / LIMB_BITS) {
        Some(limb) => (limb >> (bit % LIMB_BITS)) & LOW_BIT != 0,
        None => false,
    }
}

// 实现构造
macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u128, Sign::Positive)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            if val < 0 {
                BigInt::value_of(val.unsigned_abs() as u128, Sign::Negative)
            } else {
                BigInt::value_of(val as u128, Sign::Positive)
            }
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_int!(i8, i16, i32, isize, i64, i128);

impl BigInt {
    fn value_of(val: u128, sign: Sign) -> BigInt {
        let low = val as Limb;
        let high = (val >> LIMB_BITS) as Limb;
        BigInt::new(vec![low, high], sign)
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

// 实现大小比较
fn compare_mag(x: &[Limb], y: &[Limb]) -> Ordering {
    let x_len = x.len();
    let y_len = y.len();

    if x_len != y_len {
        return x_len.cmp(&y_len);
    }

    let mut pos = x_len;
    while pos > 0 {
        pos -= 1;
        if x[pos] != y[pos] {
            return x[pos].cmp(&y[pos]);
        }
    }

    Ordering::Equal
}

impl BigInt {
    fn compare_sign_and_mag(&self, other: &BigInt) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => compare_mag(&self.mag, &other.mag),
            (Sign::Negative, Sign::Negative) => compare_mag(&self.mag, &other.mag).reverse(),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_sign_and_mag(other)
    }
}

// 实现加法
/// Ripple-carry `acc += other`, ignoring sign.
fn add_mag(acc: &mut Vec<Limb>, other: &[Limb]) {
    let common = acc.len().min(other.len());
    if other.len() > acc.len() {
        acc.extend_from_slice(&other[acc.len()..]);
    }

    let mut carry = false;
    let mut i = 0;
    while i < common {
        let (sum, c1) = acc[i].overflowing_add(other[i]);
        let (sum, c2) = sum.overflowing_add(carry as Limb);
        acc[i] = sum;
        carry = c1 || c2;
        i += 1;
    }

    while carry && i < acc.len() {
        let (sum, c) = acc[i].overflowing_add(LOW_BIT);
        acc[i] = sum;
        carry = c;
        i += 1;
    }

    if carry {
        acc.push(LOW_BIT);
    }
}

/// Ripple-borrow `acc -= other`, ignoring sign. Requires `acc >= other`.
fn sub_mag(acc: &mut Vec<Limb>, other: &[Limb]) {
    debug_assert!(compare_mag(acc, other) != Ordering::Less, "magnitude underflow");

    let mut borrow = false;
    let mut i = 0;
    while i < other.len() {
        let (diff, b1) = acc[i].overflowing_sub(other[i]);
        let (diff, b2) = diff.overflowing_sub(borrow as Limb);
        acc[i] = diff;
        borrow = b1 || b2;
        i += 1;
    }

    while borrow && i < acc.len() {
        let (diff, b) = acc[i].overflowing_sub(LOW_BIT);
        acc[i] = diff;
        borrow = b;
        i += 1;
    }

    trim_mag(acc);
}

impl BigInt {
    /// Signed `self += (sign, mag)`; every add and subtract ends up here.
    fn add_signed(&mut self, mag: &[Limb], sign: Sign) {
        if is_zero_mag(mag) {
            return;
        }

        if self.is_zero() {
            self.mag = mag.to_vec();
            self.sign = sign;
            return;
        }

        if self.sign == sign {
            add_mag(&mut self.mag, mag);
            return;
        }

        match compare_mag(&self.mag, mag) {
            Ordering::Equal => *self = BigInt::zero(),
            Ordering::Greater => sub_mag(&mut self.mag, mag),
            Ordering::Less => {
                let mut larger = mag.to_vec();
                sub_mag(&mut larger, &self.mag);
                self.mag = larger;
                self.sign = sign;
            },
        }
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        self.add_signed(&rhs.mag, rhs.sign);
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        self.add_signed(&rhs.mag, rhs.sign);
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += &rhs;
        self
    }
}

impl Add<&BigInt> for BigInt {
    type Output = BigInt;

    fn add(mut self, rhs: &BigInt) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        self.clone() + rhs
    }
}

// 实现减法
impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        self.add_signed(&rhs.mag, rhs.sign.flip());
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: Self) {
        self.add_signed(&rhs.mag, rhs.sign.flip());
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= &rhs;
        self
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = BigInt;

    fn sub(mut self, rhs: &BigInt) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        self.clone() - rhs
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { sign, mag } = self;
        BigInt::new(mag, sign.flip())
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现自增自减
impl BigInt {
    /// `++x`: adds one in place.
    pub fn inc(&mut self) -> &mut BigInt {
        *self += &*ONE;
        self
    }

    /// `--x`: subtracts one in place.
    pub fn dec(&mut self) -> &mut BigInt {
        *self += &*MINUS_ONE;
        self
    }

    /// `x++`: adds one in place and returns the old value.
    pub fn post_inc(&mut self) -> BigInt {
        let old = self.clone();
        self.inc();
        old
    }

    /// `x--`: subtracts one in place and returns the old value.
    pub fn post_dec(&mut self) -> BigInt {
        let old = self.clone();
        self.dec();
        old
    }
}

// 实现移位
fn shl_one(mag: &mut Vec<Limb>) {
    let mut carry = 0;
    for limb in mag.iter_mut() {
        let next_carry = if *limb & HIGH_BIT != 0 { LOW_BIT } else { 0 };
        *limb = (*limb << 1) | carry;
        carry = next_carry;
    }

    // No bit is ever shifted out, the number just grows.
    if carry != 0 {
        mag.push(carry);
    }
}

fn shr_one(mag: &mut Vec<Limb>) {
    let mut carry = 0;
    for limb in mag.iter_mut().rev() {
        let next_carry = if *limb & LOW_BIT != 0 { HIGH_BIT } else { 0 };
        *limb = (*limb >> 1) | carry;
        carry = next_carry;
    }

    if mag.len() > 1 && mag[mag.len() - 1] == 0 {
        mag.pop();
    }
}

/// Same result as `n` calls to `shl_one`, a limb at a time.
fn shl_mag(mag: &[Limb], n: usize) -> Vec<Limb> {
    if is_zero_mag(mag) {
        return vec![0];
    }
    let n_limbs = n / LIMB_BITS;
    let n_bits = n % LIMB_BITS;

    let mut result = Vec::with_capacity(mag.len() + n_limbs + 1);
    result.resize(n_limbs, 0);
    if n_bits == 0 {
        result.extend_from_slice(mag);
    } else {
        let mut carry = 0;
        for &limb in mag {
            result.push((limb << n_bits) | carry);
            carry = limb >> (LIMB_BITS - n_bits);
        }
        if carry != 0 {
            result.push(carry);
        }
    }
    result
}

/// Same result as `n` calls to `shr_one`, a limb at a time.
fn shr_mag(mag: &[Limb], n: usize) -> Vec<Limb> {
    let n_limbs = n / LIMB_BITS;
    let n_bits = n % LIMB_BITS;
    if n_limbs >= mag.len() {
        return vec![0];
    }

    let src = &mag[n_limbs..];
    let mut result: Vec<Limb> = if n_bits == 0 {
        src.to_vec()
    } else {
        (0..src.len())
            .map(|i| {
                let high = match src.get(i + 1) {
                    Some(next) => next << (LIMB_BITS - n_bits),
                    None => 0,
                };
                (src[i] >> n_bits) | high
            })
            .collect()
    };
    trim_mag(&mut result);
    result
}

macro_rules! impl_shift_ops {
    ($($n: ty),*) => {
    $(
    impl Shl<$n> for BigInt {
        type Output = BigInt;

        fn shl(self, n: $n) -> Self::Output {
            &self << n
        }
    }

    impl Shl<$n> for &BigInt {
        type Output = BigInt;

        fn shl(self, n: $n) -> Self::Output {
            BigInt::new(shl_mag(&self.mag, n as usize), self.sign)
        }
    }

    impl ShlAssign<$n> for BigInt {
        fn shl_assign(&mut self, n: $n) {
            self.mag = shl_mag(&self.mag, n as usize);
        }
    }

    impl Shr<$n> for BigInt {
        type Output = BigInt;

        fn shr(self, n: $n) -> Self::Output {
            &self >> n
        }
    }

    impl Shr<$n> for &BigInt {
        type Output = BigInt;

        fn shr(self, n: $n) -> Self::Output {
            BigInt::new(shr_mag(&self.mag, n as usize), self.sign)
        }
    }

    impl ShrAssign<$n> for BigInt {
        fn shr_assign(&mut self, n: $n) {
            self.mag = shr_mag(&self.mag, n as usize);
            self.canonicalize();
        }
    }
    )*
    };
}
impl_shift_ops!(u32, usize);

impl BigInt {
    /// Left shift by a `BigInt` count. A count of zero or less leaves the value alone.
    ///
    /// # Panics
    /// When the count does not fit in `usize`; such a result could not be allocated anyway.
    pub fn shl_by(&self, amount: &BigInt) -> BigInt {
        if amount.is_zero() || amount.is_negative() {
            return self.clone();
        }
        match amount.to_usize() {
            Some(n) => self << n,
            None => panic!("shift amount {} too large", amount),
        }
    }

    /// Right shift by a `BigInt` count. A count of zero or less leaves the value alone.
    pub fn shr_by(&self, amount: &BigInt) -> BigInt {
        if amount.is_zero() || amount.is_negative() {
            return self.clone();
        }
        match amount.to_usize() {
            Some(n) => self >> n,
            None => BigInt::zero(),
        }
    }
}

// 实现按位与或
impl BigInt {
    /// Applies `op` limb by limb over zero-padded magnitudes; keeps `self`'s sign.
    fn and_or(&self, other: &BigInt, op: impl Fn(Limb, Limb) -> Limb) -> BigInt {
        let len = self.mag.len().max(other.mag.len());
        let mag = (0..len)
            .map(|i| {
                let x = self.mag.get(i).copied().unwrap_or(0);
                let y = other.mag.get(i).copied().unwrap_or(0);
                op(x, y)
            })
            .collect();
        BigInt::new(mag, self.sign)
    }

    fn bit_and(&self, other: &BigInt) -> BigInt {
        self.and_or(other, |x, y| x & y)
    }

    fn bit_or(&self, other: &BigInt) -> BigInt {
        self.and_or(other, |x, y| x | y)
    }

    /// True when both values are nonzero.
    pub fn logical_and(&self, other: &BigInt) -> bool {
        !self.is_zero() && !other.is_zero()
    }

    /// True when either value is nonzero.
    pub fn logical_or(&self, other: &BigInt) -> bool {
        !self.is_zero() || !other.is_zero()
    }
}

// 实现乘法
/// Binary long multiplication: add the shifted multiplicand for every set bit of the multiplier.
fn mul_mag(multiplicand: &[Limb], multiplier: &[Limb]) -> Vec<Limb> {
    let num_bits = multiplier.len() * LIMB_BITS;
    let mut addend = multiplicand.to_vec();
    let mut product = vec![0];

    for mask in 0..num_bits {
        if test_bit(multiplier, mask) {
            add_mag(&mut product, &addend);
        }
        shl_one(&mut addend);
    }

    product
}

impl BigInt {
    fn multiply(&self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }

        let sign = self.sign.xor(other.sign);
        let mag = if is_one_mag(&other.mag) {
            self.mag.clone()
        } else if is_one_mag(&self.mag) {
            other.mag.clone()
        } else {
            mul_mag(&self.mag, &other.mag)
        };
        BigInt::new(mag, sign)
    }
}

// 实现除法
/// Restoring division, one dividend bit per step. Returns `(quotient, remainder)`.
fn div_rem_mag(dividend: &[Limb], divisor: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    let num_bits = dividend.len() * LIMB_BITS;
    let mut quotient = vec![0; dividend.len()];
    let mut remainder = vec![0];

    for mask in (0..num_bits).rev() {
        shl_one(&mut remainder);
        if test_bit(dividend, mask) {
            remainder[0] |= LOW_BIT;
        }
        if compare_mag(&remainder, divisor) != Ordering::Less {
            sub_mag(&mut remainder, divisor);
            quotient[mask / LIMB_BITS] |= LOW_BIT << (mask % LIMB_BITS);
        }
    }

    trim_mag(&mut quotient);
    (quotient, remainder)
}

impl BigInt {
    /// Truncating division: the quotient rounds toward zero and the remainder
    /// takes the dividend's sign, so `q * divisor + r == self`.
    ///
    /// ```
    /// use big_integer::{BigInt, BigIntError};
    ///
    /// let (q, r) = BigInt::from(-7).div_rem(&BigInt::from(2)).unwrap();
    /// assert_eq!((q, r), (BigInt::from(-3), BigInt::from(-1)));
    /// assert_eq!(BigInt::from(1).div_rem(&BigInt::zero()), Err(BigIntError::DivideByZero));
    /// ```
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(BigIntError::DivideByZero);
        }

        if self.is_zero() {
            return Ok((BigInt::zero(), BigInt::zero()));
        }

        if self == divisor {
            return Ok((BigInt::one(), BigInt::zero()));
        }

        trace!(
            "dividing {} limb(s) by {} limb(s)",
            self.mag.len(),
            divisor.mag.len()
        );
        let (quotient, remainder) = div_rem_mag(&self.mag, &divisor.mag);
        Ok((
            BigInt::new(quotient, self.sign.xor(divisor.sign)),
            BigInt::new(remainder, self.sign),
        ))
    }

    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }

    fn divide(&self, divisor: &BigInt) -> BigInt {
        match self.checked_div(divisor) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }

    fn modulo(&self, divisor: &BigInt) -> BigInt {
        match self.checked_rem(divisor) {
            Ok(remainder) => remainder,
            Err(err) => panic!("{}", err),
        }
    }
}

// `/` and `%` panic on a zero divisor like the primitive integers do;
// use `checked_div`, `checked_rem` or `div_rem` to get the error instead.
macro_rules! impl_binary_op {
    ($Op: ident, $op: ident, $OpAssign: ident, $op_assign: ident, $method: ident) => {
    impl $Op for BigInt {
        type Output = BigInt;

        fn $op(self, rhs: Self) -> Self::Output {
            self.$method(&rhs)
        }
    }

    impl $Op<&BigInt> for BigInt {
        type Output = BigInt;

        fn $op(self, rhs: &BigInt) -> Self::Output {
            self.$method(rhs)
        }
    }

    impl $Op for &BigInt {
        type Output = BigInt;

        fn $op(self, rhs: Self) -> Self::Output {
            self.$method(rhs)
        }
    }

    impl $OpAssign for BigInt {
        fn $op_assign(&mut self, rhs: Self) {
            *self = self.$method(&rhs);
        }
    }

    impl $OpAssign<&BigInt> for BigInt {
        fn $op_assign(&mut self, rhs: &BigInt) {
            *self = self.$method(rhs);
        }
    }
    };
}
impl_binary_op!(Mul, mul, MulAssign, mul_assign, multiply);
impl_binary_op!(Div, div, DivAssign, div_assign, divide);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, modulo);
impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, bit_and);
impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, bit_or);

// 实现解析
/// Where a digit scan stopped and how many digits it took.
struct Scan {
    value: BigInt,
    stopped_at: usize,
    digits: usize,
}

fn split_sign(text: &str) -> (Sign, usize) {
    match text.as_bytes().first() {
        Some(b'-') => (Sign::Negative, 1),
        Some(b'+') => (Sign::Positive, 1),
        _ => (Sign::Positive, 0),
    }
}

/// Picks the radix from a `0x`/`0X` or `0` prefix. Returns the radix, where
/// the digits start, and how many digits the prefix itself stands for.
fn detect_radix(text: &str, start: usize) -> (Radix, usize, usize) {
    let rest = &text[start..];
    if rest.starts_with("0x") || rest.starts_with("0X") {
        (Radix::Hexadecimal, start + 2, 0)
    } else if rest.starts_with('0') {
        (Radix::Octal, start + 1, 1)
    } else {
        (Radix::Decimal, start, 0)
    }
}

fn scan_digits(text: &str, start: usize, radix: Radix, sign: Sign) -> Scan {
    let big_radix = radix_constant(radix);
    let mut value = BigInt::zero();
    let mut stopped_at = text.len();
    let mut digits = 0;

    for (offset, c) in text[start..].char_indices() {
        match radix.digit_value(c) {
            Some(digit) => {
                value *= big_radix;
                value += &DIGIT_CACHE[digit as usize];
                digits += 1;
            },
            None => {
                stopped_at = start + offset;
                break;
            },
        }
    }

    if !value.is_zero() {
        value.sign = sign;
    }
    Scan { value, stopped_at, digits }
}

impl BigInt {
    /// Parses a literal, taking the radix from its prefix: `0x`/`0X` is hex,
    /// a leading `0` is octal, anything else decimal.
    ///
    /// Parsing stops quietly at the first character that is not a digit of
    /// that radix and keeps what was read so far. Use [`BigInt::parse_strict`]
    /// to reject such input.
    ///
    /// ```
    /// use big_integer::BigInt;
    ///
    /// assert_eq!(BigInt::parse("0x1F"), BigInt::from(31));
    /// assert_eq!(BigInt::parse("017"), BigInt::from(15));
    /// assert_eq!(BigInt::parse("-42abc"), BigInt::from(-42));
    /// ```
    pub fn parse(text: &str) -> BigInt {
        let (sign, start) = split_sign(text);
        let (radix, start, _) = detect_radix(text, start);
        BigInt::finish_permissive(text, scan_digits(text, start, radix, sign))
    }

    /// Parses digits of an explicit radix after an optional sign; no prefix
    /// is recognised. Stops at the first invalid character like [`BigInt::parse`].
    pub fn from_str_radix(text: &str, radix: Radix) -> BigInt {
        let (sign, start) = split_sign(text);
        BigInt::finish_permissive(text, scan_digits(text, start, radix, sign))
    }

    /// Like [`BigInt::parse`], but every character must be consumed and at
    /// least one digit must be present.
    pub fn parse_strict(text: &str) -> Result<BigInt> {
        let (sign, start) = split_sign(text);
        let (radix, start, prefix_digits) = detect_radix(text, start);
        BigInt::finish_strict(text, scan_digits(text, start, radix, sign), prefix_digits)
    }

    pub fn from_str_radix_strict(text: &str, radix: Radix) -> Result<BigInt> {
        let (sign, start) = split_sign(text);
        BigInt::finish_strict(text, scan_digits(text, start, radix, sign), 0)
    }

    fn finish_permissive(text: &str, scan: Scan) -> BigInt {
        if scan.stopped_at < text.len() {
            debug!("numeral {:?} truncated at byte {}", text, scan.stopped_at);
        }
        scan.value
    }

    fn finish_strict(text: &str, scan: Scan, prefix_digits: usize) -> Result<BigInt> {
        if scan.stopped_at < text.len() || scan.digits + prefix_digits == 0 {
            return Err(BigIntError::InvalidNumeral {
                input: text.to_string(),
                position: scan.stopped_at,
            });
        }
        Ok(scan.value)
    }
}

impl From<&str> for BigInt {
    fn from(val: &str) -> Self {
        BigInt::parse(val)
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self> {
        BigInt::parse_strict(s)
    }
}

// 实现打印
impl BigInt {
    pub fn to_string_radix(&self, radix: Radix) -> String {
        let digits = self.magnitude_digits(radix);
        if self.is_negative() {
            format!("-{}", digits)
        } else {
            digits
        }
    }

    /// Digits of the magnitude, most significant first, by repeated division.
    fn magnitude_digits(&self, radix: Radix) -> String {
        if self.is_zero() {
            return String::from("0");
        }

        let divisor = &radix_constant(radix).mag;
        let mut tmp = self.mag.clone();
        let mut digits = Vec::new();
        while !is_zero_mag(&tmp) {
            let (quotient, remainder) = div_rem_mag(&tmp, divisor);
            digits.push(DIGITS[remainder[0] as usize]);
            tmp = quotient;
        }
        trace!("formatted {} limb(s) as {} {} digit(s)", self.mag.len(), digits.len(), radix);

        digits.iter().rev().collect()
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_digits(Radix::Decimal))
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0o", &self.magnitude_digits(Radix::Octal))
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.magnitude_digits(Radix::Hexadecimal))
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.magnitude_digits(Radix::Hexadecimal).to_uppercase();
        f.pad_integral(!self.is_negative(), "0x", &digits)
    }
}

#[test]
fn test_from() {
    let big = BigInt::from(-100_i16);
    assert_eq!(big.mag, vec![100]);
    assert_eq!(big.sign, Sign::Negative);

    let big = BigInt::from(u64::MAX);
    assert_eq!(big.mag, vec![u64::MAX]);

    let big = BigInt::from(u128::MAX);
    assert_eq!(big.mag, vec![u64::MAX, u64::MAX]);
    assert_eq!(big.limb_count(), 2);

    let big = BigInt::from(i128::MIN);
    assert_eq!(big.mag, vec![0, 1 << 63]);
    assert!(big.is_negative());

    let big = BigInt::from(0_i8);
    assert_eq!(big, BigInt::zero());
    assert_eq!(big.bit_length(), 0);
    assert_eq!(BigInt::from(255_u8).bit_length(), 8);
}

#[test]
fn test_canonical_zero() {
    let a = BigInt::from(12345_i32);
    let zeros = [
        BigInt::from(0_u64),
        BigInt::parse("0"),
        BigInt::parse("-0"),
        BigInt::from_str_radix("-000", Radix::Decimal),
        &a - &a,
        -BigInt::zero(),
        BigInt::from(-5) * BigInt::zero(),
        BigInt::from(-5) >> 10_u32,
        BigInt::from(-4) & BigInt::from(3),
    ];
    for zero in zeros.iter() {
        assert_eq!(zero, &BigInt::zero());
        assert_eq!(zero.sign(), Sign::Positive);
        assert_eq!(zero.magnitude(), &[0]);
    }
}

#[test]
fn test_add_sub() {
    assert_eq!(BigInt::from(-7) + BigInt::from(100), BigInt::from(93));
    assert_eq!(BigInt::from(7) + BigInt::from(-100), BigInt::from(-93));
    assert_eq!(BigInt::from(-7) - BigInt::from(100), BigInt::from(-107));

    let carried = BigInt::from(u64::MAX) + BigInt::one();
    assert_eq!(carried.mag, vec![0, 1]);

    let borrowed = &carried - &BigInt::one();
    assert_eq!(borrowed.mag, vec![u64::MAX]);

    let long = BigInt::from(u128::MAX) + BigInt::from(1_u8);
    assert_eq!(long.mag, vec![0, 0, 1]);
    assert_eq!(BigInt::from(1_u8) + BigInt::from(u128::MAX), long);
    assert_eq!(&long - &BigInt::from(u128::MAX), BigInt::one());

    let mut acc = BigInt::from(5);
    acc -= BigInt::from(5);
    assert!(acc.is_zero());
    acc += &BigInt::from(-3);
    assert_eq!(acc, BigInt::from(-3));
}

#[test]
fn test_inc_dec() {
    let mut a = BigInt::from(93);
    assert_eq!(a.post_inc(), BigInt::from(93));
    assert_eq!(a, BigInt::from(94));
    assert_eq!(*a.inc(), BigInt::from(95));
    assert_eq!(a.post_dec(), BigInt::from(95));
    assert_eq!(*a.dec(), BigInt::from(93));

    let mut z = BigInt::zero();
    z.dec();
    assert_eq!(z, BigInt::from(-1));
    z.inc();
    assert_eq!(z.sign(), Sign::Positive);
}

#[test]
fn test_mul() {
    let a = BigInt::from(u64::MAX);
    let square = &a * &a;
    assert_eq!(square.mag, vec![1, u64::MAX - 1]);
    assert_eq!(BigInt::from(-3) * BigInt::from(4), BigInt::from(-12));
    assert_eq!(BigInt::from(-3) * BigInt::from(-4), BigInt::from(12));
    assert_eq!(BigInt::from(-3) * BigInt::one(), BigInt::from(-3));
    assert_eq!(BigInt::one() * BigInt::from(-3), BigInt::from(-3));
    assert_eq!(mul_mag(&[6], &[1]), vec![6]);

    let mut foo = BigInt::from(17567);
    foo *= BigInt::from(256);
    assert_eq!(foo, BigInt::from(4497152));
}

#[test]
fn test_div() {
    let a = BigInt::from(298653);
    let b = BigInt::from(17);
    assert_eq!(a.checked_div(&b), Ok(BigInt::from(17567)));
    assert_eq!(a.checked_rem(&b), Ok(BigInt::from(14)));
    assert_eq!(&a / &b, BigInt::from(17567));
    assert_eq!(&a % &b, BigInt::from(14));

    // truncating, remainder follows the dividend
    assert_eq!(BigInt::from(-7).div_rem(&BigInt::from(2)), Ok((BigInt::from(-3), BigInt::from(-1))));
    assert_eq!(BigInt::from(7).div_rem(&BigInt::from(-2)), Ok((BigInt::from(-3), BigInt::from(1))));
    assert_eq!(BigInt::from(-7).div_rem(&BigInt::from(-2)), Ok((BigInt::from(3), BigInt::from(-1))));
    assert_eq!(BigInt::from(-8).div_rem(&BigInt::from(2)), Ok((BigInt::from(-4), BigInt::zero())));
    assert_eq!(BigInt::from(3).div_rem(&BigInt::from(7)), Ok((BigInt::zero(), BigInt::from(3))));
    assert_eq!(BigInt::from(-5).div_rem(&BigInt::from(5)), Ok((BigInt::from(-1), BigInt::zero())));
    assert_eq!(BigInt::from(5).div_rem(&BigInt::from(5)), Ok((BigInt::one(), BigInt::zero())));

    let big = BigInt::from(u128::MAX);
    let (q, r) = big.div_rem(&BigInt::from(u64::MAX)).unwrap();
    assert_eq!(q.mag, vec![1, 1]);
    assert!(r.is_zero());
}

#[test]
fn test_div_by_zero() {
    let zero = BigInt::zero();
    let a = BigInt::from(42);
    assert_eq!(a.checked_div(&zero), Err(BigIntError::DivideByZero));
    assert_eq!(a.checked_rem(&zero), Err(BigIntError::DivideByZero));
    assert_eq!(zero.div_rem(&zero), Err(BigIntError::DivideByZero));
    assert_eq!(a, BigInt::from(42));
}

#[test]
#[should_panic(expected = "divide by zero")]
fn test_div_operator_panics() {
    let _ = BigInt::from(1) / BigInt::zero();
}

#[test]
fn test_shift_primitives() {
    let mut mag = vec![HIGH_BIT | 1];
    shl_one(&mut mag);
    assert_eq!(mag, vec![2, 1]);
    shr_one(&mut mag);
    assert_eq!(mag, vec![HIGH_BIT | 1]);

    let samples: [&[Limb]; 4] = [&[1], &[u64::MAX], &[0x8000_0000_0000_0001, 0x1234], &[7, 0, 9]];
    for &sample in samples.iter() {
        for n in [0_usize, 1, 5, 63, 64, 65, 130] {
            let mut left = sample.to_vec();
            for _ in 0..n {
                shl_one(&mut left);
            }
            assert_eq!(shl_mag(sample, n), left, "shl {:?} by {}", sample, n);

            let mut right = sample.to_vec();
            for _ in 0..n {
                shr_one(&mut right);
            }
            assert_eq!(shr_mag(sample, n), right, "shr {:?} by {}", sample, n);
        }
    }
}

#[test]
fn test_shift() {
    let one = BigInt::one();
    let shifted = &one << 64_u32;
    assert_eq!(shifted.mag, vec![0, 1]);
    assert_eq!(&shifted >> 64_u32, one);

    let mut a = BigInt::from(-3);
    a <<= 2_usize;
    assert_eq!(a, BigInt::from(-12));
    a >>= 3_usize;
    assert_eq!(a, BigInt::from(-1));
    a >>= 1_usize;
    assert_eq!(a, BigInt::zero());
    assert_eq!(a.sign(), Sign::Positive);

    let x = BigInt::from(40);
    assert_eq!(x.shl_by(&BigInt::from(2)), BigInt::from(160));
    assert_eq!(x.shr_by(&BigInt::from(3)), BigInt::from(5));
    assert_eq!(x.shl_by(&BigInt::from(-2)), x);
    assert_eq!(x.shr_by(&BigInt::from(u128::MAX)), BigInt::zero());
}

#[test]
fn test_and_or() {
    let a = BigInt::from(0b1100);
    let b = BigInt::from(0b1010);
    assert_eq!(&a & &b, BigInt::from(0b1000));
    assert_eq!(&a | &b, BigInt::from(0b1110));

    let wide = BigInt::from(u128::MAX);
    assert_eq!(&wide & &BigInt::from(0xff), BigInt::from(0xff));
    assert_eq!((&BigInt::from(1) | &(BigInt::one() << 64_u32)).mag, vec![1, 1]);
    assert_eq!((&(BigInt::one() << 64_u32) & &BigInt::from(1)), BigInt::zero());

    // magnitude bits, sign of the left operand
    assert_eq!(BigInt::from(-6) & BigInt::from(3), BigInt::from(-2));
    assert_eq!(BigInt::from(6) | BigInt::from(-1), BigInt::from(7));

    let ten = BigInt::from(10);
    let zero = BigInt::zero();
    assert!(!zero.logical_and(&zero));
    assert!(!zero.logical_and(&ten));
    assert!(ten.logical_and(&ten));
    assert!(!zero.logical_or(&zero));
    assert!(zero.logical_or(&ten));
}

#[test]
fn test_compare() {
    let values = [
        BigInt::from(i128::MIN),
        BigInt::from(-100),
        BigInt::from(-1),
        BigInt::zero(),
        BigInt::one(),
        BigInt::from(u64::MAX),
        BigInt::from(u128::MAX),
    ];
    for (i, x) in values.iter().enumerate() {
        for (j, y) in values.iter().enumerate() {
            assert_eq!(x.cmp(y), i.cmp(&j), "{} vs {}", x, y);
        }
    }
    assert_eq!(compare_mag(&[5], &[0, 1]), Ordering::Less);
    assert_eq!(compare_mag(&[5, 2], &[9, 1]), Ordering::Greater);
}

#[test]
fn test_parse() {
    assert_eq!(BigInt::parse("-7") + BigInt::parse("100"), BigInt::parse("93"));
    assert_eq!(BigInt::parse("0x1F"), BigInt::from(31));
    assert_eq!(BigInt::parse("-0XfF"), BigInt::from(-255));
    assert_eq!(BigInt::parse("+017"), BigInt::from(15));
    assert_eq!(BigInt::parse("089"), BigInt::zero());
    assert_eq!(BigInt::parse("12a34"), BigInt::from(12));
    assert_eq!(BigInt::parse(""), BigInt::zero());
    assert_eq!(BigInt::parse("-"), BigInt::zero());
    assert_eq!(BigInt::from_str_radix("ff", Radix::Hexadecimal), BigInt::from(255));
    assert_eq!(BigInt::from_str_radix("0x10", Radix::Hexadecimal), BigInt::zero());
    assert_eq!(BigInt::from_str_radix("-0777", Radix::Octal), BigInt::from(-511));
    assert_eq!(BigInt::from_str_radix("1F", Radix::Decimal), BigInt::one());

    let hex = BigInt::parse("0xaaaaaaaaaaaaaaaaaaaaabbbbbbbbbbbbbbbbb");
    assert_eq!(hex.limb_count(), 3);
    assert_eq!(hex.mag, vec![0xbbbbbbbbbbbbbbbb, 0xaaaaaaaaaaaaaaab, 0xaaaaaa]);
}

#[test]
fn test_parse_strict() {
    assert_eq!("42".parse::<BigInt>(), Ok(BigInt::from(42)));
    assert_eq!("0".parse::<BigInt>(), Ok(BigInt::zero()));
    assert_eq!("-0x2a".parse::<BigInt>(), Ok(BigInt::from(-42)));
    assert_eq!(
        "12a34".parse::<BigInt>(),
        Err(BigIntError::InvalidNumeral { input: "12a34".to_string(), position: 2 })
    );
    assert_eq!(
        "089".parse::<BigInt>(),
        Err(BigIntError::InvalidNumeral { input: "089".to_string(), position: 1 })
    );
    assert!("".parse::<BigInt>().is_err());
    assert!("-".parse::<BigInt>().is_err());
    assert!("0x".parse::<BigInt>().is_err());
    assert_eq!(BigInt::from_str_radix_strict("777", Radix::Octal), Ok(BigInt::from(511)));
    assert!(BigInt::from_str_radix_strict("778", Radix::Octal).is_err());
}

#[test]
fn test_to_string() {
    let text = "123456789012345678901234567890";
    let a = BigInt::parse(text);
    assert_eq!(a.to_string_radix(Radix::Decimal), text);
    assert_eq!(a.to_string(), text);
    assert_eq!((-&a).to_string(), format!("-{}", text));

    let b = BigInt::from(-255);
    assert_eq!(b.to_string_radix(Radix::Hexadecimal), "-ff");
    assert_eq!(b.to_string_radix(Radix::Octal), "-377");
    assert_eq!(BigInt::zero().to_string_radix(Radix::Hexadecimal), "0");

    let octal = "12345671234567123456712345671234567001";
    assert_eq!(BigInt::parse(&format!("0{}", octal)).to_string_radix(Radix::Octal), octal);
}

#[test]
fn test_fmt() {
    let a = BigInt::from(255);
    assert_eq!(format!("{:x}", a), "ff");
    assert_eq!(format!("{:X}", a), "FF");
    assert_eq!(format!("{:#x}", a), "0xff");
    assert_eq!(format!("{:o}", a), "377");
    assert_eq!(format!("{:#o}", -&a), "-0o377");
    assert_eq!(format!("{:>6}", BigInt::from(-42)), "   -42");
    assert_eq!(format!("{:+}", BigInt::from(42)), "+42");
    assert_eq!(format!("{:05}", BigInt::from(-42)), "-0042");
}
