//! Reading BigInts from and writing them to text streams in an ambient radix.

use std::collections::VecDeque;
use std::fmt::{self, Display};
use std::io::{self, BufRead};

use crate::BigInt;
use crate::Radix;

/// Splits a buffered reader into whitespace-delimited tokens, a line at a time.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> TokenReader<R> {
        TokenReader { reader, pending: VecDeque::new() }
    }

    /// Next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(String::from));
        }
        Ok(self.pending.pop_front())
    }

    /// Reads the next token as a number in `radix`.
    ///
    /// The radix comes from the caller, so no `0x`/`0` prefix is recognised;
    /// a token like `12ab` in decimal reads as `12`.
    pub fn next_big_int(&mut self, radix: Radix) -> io::Result<Option<BigInt>> {
        let token = self.next_token()?;
        Ok(token.map(|token| BigInt::from_str_radix(&token, radix)))
    }
}

/// Display adapter that writes a value in a given radix followed by `BI`,
/// and by the limb count when the value needs more than one limb.
///
/// ```
/// use big_integer::{BigInt, Radix};
///
/// assert_eq!(BigInt::from(-255).annotated(Radix::Hexadecimal).to_string(), "-ffBI");
/// assert_eq!(BigInt::from(u128::MAX).annotated(Radix::Decimal).to_string(),
///            "340282366920938463463374607431768211455BI2");
/// ```
pub struct Annotated<'a> {
    value: &'a BigInt,
    radix: Radix,
}

impl BigInt {
    pub fn annotated(&self, radix: Radix) -> Annotated<'_> {
        Annotated { value: self, radix }
    }
}

impl Display for Annotated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}BI", self.value.to_string_radix(self.radix))?;
        if self.value.limb_count() > 1 {
            write!(f, "{}", self.value.limb_count())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::{BigInt, Radix};
    use super::TokenReader;

    #[test]
    fn test_next_big_int() {
        let input = Cursor::new("  -7 100\n\n ff\t0x10\n");
        let mut reader = TokenReader::new(input);
        assert_eq!(reader.next_big_int(Radix::Decimal).unwrap(), Some(BigInt::from(-7)));
        assert_eq!(reader.next_big_int(Radix::Decimal).unwrap(), Some(BigInt::from(100)));
        assert_eq!(reader.next_big_int(Radix::Hexadecimal).unwrap(), Some(BigInt::from(255)));
        assert_eq!(reader.next_big_int(Radix::Hexadecimal).unwrap(), Some(BigInt::zero()));
        assert_eq!(reader.next_big_int(Radix::Decimal).unwrap(), None);
    }

    #[test]
    fn test_annotated() {
        assert_eq!(BigInt::zero().annotated(Radix::Octal).to_string(), "0BI");
        assert_eq!(BigInt::from(8).annotated(Radix::Octal).to_string(), "10BI");
        assert_eq!(BigInt::from(-93).annotated(Radix::Decimal).to_string(), "-93BI");
        let wide = BigInt::one() << 64_u32;
        assert_eq!(wide.annotated(Radix::Hexadecimal).to_string(), "10000000000000000BI2");
    }
}
