//! Big Integer \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers in sign-magnitude form, with
//!   shift-and-add multiplication and bit-serial restoring division.
//! - [`Radix`]: the octal / decimal / hex mode used to read and write them.
//! - [`TokenReader`] and [`Annotated`]: glue for reading numbers from a stream and
//!   writing them back with a `BI` marker.

mod big_int;
mod big_int_cache;
mod big_int_constants;
mod error;
mod radix;
mod stream;

pub use big_int::{BigInt, Sign};
pub use big_int_constants::{Limb, LIMB_BITS};
pub use error::{BigIntError, Result};
pub use radix::Radix;
pub use stream::{Annotated, TokenReader};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".into();
        let b: BigInt = "900000000000".into();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("a / b = {}", &a / &b);
        println!("a % b = {}", &a % &b);
        println!("a << 10 = {}", &a << 10_u32);
        println!("a >> 10 = {}", &a >> 10_u32);
        assert_eq!(&a + &b, BigInt::from(10_900_000_000_000_u64));
        assert_eq!(&a / &b, BigInt::from(11));
        assert_eq!(&a % &b, BigInt::from(100_000_000_000_u64));
    }
}
