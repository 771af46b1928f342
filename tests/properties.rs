//! Property tests for BigInt arithmetic, ordering and text conversion.
//!
//! Operands span one to four limbs so carries, borrows and limb growth
//! across word boundaries are exercised, and small cases are checked
//! against native `i128` arithmetic.

use big_integer::{BigInt, BigIntError, Radix, Sign};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Strategy: multi-limb value with a random sign.
fn big() -> impl Strategy<Value = BigInt> {
    (prop::collection::vec(any::<u64>(), 1..4), any::<bool>()).prop_map(|(limbs, negative)| {
        let mut value = BigInt::zero();
        for (i, limb) in limbs.iter().enumerate() {
            value += BigInt::from(*limb) << (i * 64);
        }
        if negative { -value } else { value }
    })
}

/// Strategy: decimal literal without leading zeros, optionally negative.
fn decimal_literal() -> impl Strategy<Value = String> {
    "-?[1-9][0-9]{0,60}"
}

// ============================================================================
// Canonical form
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_self_difference_is_canonical_zero(a in big()) {
        let zero = &a - &a;
        prop_assert_eq!(&zero, &BigInt::zero());
        prop_assert_eq!(zero.sign(), Sign::Positive);
        prop_assert_eq!(zero.magnitude(), &[0][..]);
    }

    #[test]
    fn prop_results_have_no_high_zero_limbs(a in big(), b in big()) {
        for value in [&a + &b, &a - &b, &a * &b, &a & &b, &a | &b] {
            let mag = value.magnitude();
            prop_assert!(!mag.is_empty());
            prop_assert!(mag.len() == 1 || mag[mag.len() - 1] != 0);
        }
    }
}

// ============================================================================
// Algebraic properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_add_commutative(a in big(), b in big()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn prop_add_associative(a in big(), b in big(), c in big()) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn prop_mul_commutative(a in big(), b in big()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn prop_additive_inverse(a in big()) {
        prop_assert_eq!(&a + &(-&a), BigInt::zero());
    }

    #[test]
    fn prop_mul_identity_and_zero(a in big()) {
        prop_assert_eq!(&a * &BigInt::one(), a.clone());
        prop_assert_eq!(&a * &BigInt::zero(), BigInt::zero());
    }

    #[test]
    fn prop_division_identity(a in big(), d in big()) {
        prop_assume!(!d.is_zero());
        let (q, r) = a.div_rem(&d).unwrap();
        prop_assert_eq!(&(&q * &d) + &r, a.clone());
        prop_assert!(r.abs() < d.abs());
        prop_assert!(r.is_zero() || r.sign() == a.sign());
    }

    #[test]
    fn prop_divide_by_zero(a in big()) {
        prop_assert_eq!(a.checked_div(&BigInt::zero()), Err(BigIntError::DivideByZero));
        prop_assert_eq!(a.checked_rem(&BigInt::zero()), Err(BigIntError::DivideByZero));
    }

    #[test]
    fn prop_shift_round_trip(a in big(), n in 0usize..300) {
        let a = a.abs();
        prop_assert_eq!(&(&a << n) >> n, a.clone());
    }

    #[test]
    fn prop_shift_is_power_of_two(a in big(), n in 0u32..130) {
        let power = BigInt::one() << n;
        prop_assert_eq!(&a << n, &a * &power);
        prop_assert_eq!(a.abs() >> n, a.abs().checked_div(&power).unwrap());
    }

    #[test]
    fn prop_total_order(a in big(), b in big()) {
        let count = [a < b, a == b, a > b].iter().filter(|held| **held).count();
        prop_assert_eq!(count, 1);
    }
}

// ============================================================================
// Agreement with native arithmetic
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_matches_i128(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        let (a, b) = (a as i128, b as i128);
        prop_assert_eq!(&x + &y, BigInt::from(a + b));
        prop_assert_eq!(&x - &y, BigInt::from(a - b));
        prop_assert_eq!(&x * &y, BigInt::from(a * b));
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        if b != 0 {
            prop_assert_eq!(x.checked_div(&y), Ok(BigInt::from(a / b)));
            prop_assert_eq!(x.checked_rem(&y), Ok(BigInt::from(a % b)));
        }
    }

    #[test]
    fn prop_radix_formatting_matches_native(a in any::<i128>()) {
        let big = BigInt::from(a);
        let sign = if a < 0 { "-" } else { "" };
        let abs = a.unsigned_abs();
        prop_assert_eq!(big.to_string(), a.to_string());
        prop_assert_eq!(big.to_string_radix(Radix::Octal), format!("{}{:o}", sign, abs));
        prop_assert_eq!(big.to_string_radix(Radix::Hexadecimal), format!("{}{:x}", sign, abs));
        prop_assert_eq!(format!("{:X}", big), format!("{}{:X}", sign, abs));
    }
}

// ============================================================================
// Text conversion
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_decimal_round_trip(s in decimal_literal()) {
        let value = BigInt::from_str_radix(&s, Radix::Decimal);
        prop_assert_eq!(value.to_string_radix(Radix::Decimal), s.clone());
        prop_assert_eq!(s.parse::<BigInt>(), Ok(value));
    }

    #[test]
    fn prop_prefixed_literals(a in any::<u64>()) {
        let expected = BigInt::from(a);
        prop_assert_eq!(BigInt::parse(&format!("0x{:x}", a)), expected.clone());
        prop_assert_eq!(BigInt::parse(&format!("0X{:X}", a)), expected.clone());
        prop_assert_eq!(BigInt::parse(&format!("0{:o}", a)), expected.clone());
        prop_assert_eq!(BigInt::parse(&format!("-0{:o}", a)), -&expected);
    }

    #[test]
    fn prop_strict_rejects_what_permissive_truncates(head in "[1-9][0-9]{0,20}", tail in "[g-z][0-9a-z]{0,5}") {
        let text = format!("{}{}", head, tail);
        prop_assert_eq!(BigInt::parse(&text), BigInt::parse(&head));
        prop_assert_eq!(
            text.parse::<BigInt>(),
            Err(BigIntError::InvalidNumeral { input: text.clone(), position: head.len() })
        );
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn scenario_mixed_sign_addition() {
    assert_eq!(BigInt::from_str_radix("-7", Radix::Decimal) + BigInt::from_str_radix("100", Radix::Decimal),
               BigInt::from_str_radix("93", Radix::Decimal));
}

#[test]
fn scenario_hex_literal() {
    assert_eq!(BigInt::parse("0x1F"), BigInt::from_str_radix("31", Radix::Decimal));
}

#[test]
fn scenario_division() {
    let a = BigInt::from_str_radix("298653", Radix::Decimal);
    let d = BigInt::from_str_radix("17", Radix::Decimal);
    assert_eq!(&a / &d, BigInt::from_str_radix("17567", Radix::Decimal));
    assert_eq!(&a % &d, BigInt::from_str_radix("14", Radix::Decimal));
}

#[test]
fn scenario_negative_zero() {
    let zero = BigInt::from_str_radix("0", Radix::Decimal);
    let negative_zero = BigInt::from_str_radix("-0", Radix::Decimal);
    assert_eq!(zero, negative_zero);
    assert_eq!(zero.sign(), Sign::Positive);
    assert_eq!(negative_zero.sign(), Sign::Positive);
}

#[test]
fn scenario_shift_across_limbs() {
    let one = BigInt::from_str_radix("1", Radix::Decimal);
    assert_eq!((&one << 64_u32) >> 64_u32, one);
}

#[test]
fn scenario_thirty_digit_round_trip() {
    let text = "123456789012345678901234567890";
    assert_eq!(BigInt::from_str_radix(text, Radix::Decimal).to_string_radix(Radix::Decimal), text);
}
