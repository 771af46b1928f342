use std::fmt::Display;

use clap::ValueEnum;

/// The radix a number is read in or written out with.
///
/// This plays the role of a stream's "current base" flag: the parser and the
/// [`Annotated`](crate::Annotated) writer both take one instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Radix {
    Octal,
    #[default]
    Decimal,
    #[value(name = "hex")]
    Hexadecimal,
}

impl Radix {
    pub fn value(self) -> u32 {
        match self {
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    pub fn from_value(radix: u32) -> Option<Radix> {
        match radix {
            8 => Some(Radix::Octal),
            10 => Some(Radix::Decimal),
            16 => Some(Radix::Hexadecimal),
            _ => None,
        }
    }

    /// Value of `c` as a digit in this radix, if it is one.
    ///
    /// Letters are only digits in hexadecimal, in either case.
    pub fn digit_value(self, c: char) -> Option<u32> {
        match (self, c) {
            (_, '0'..='7') => Some(c as u32 - '0' as u32),
            (Radix::Decimal | Radix::Hexadecimal, '8' | '9') => Some(c as u32 - '0' as u32),
            (Radix::Hexadecimal, 'a'..='f') => Some(c as u32 - 'a' as u32 + 10),
            (Radix::Hexadecimal, 'A'..='F') => Some(c as u32 - 'A' as u32 + 10),
            _ => None,
        }
    }
}

impl Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hexadecimal => "hex",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::Radix;

    #[test]
    fn test_digit_value() {
        assert_eq!(Radix::Octal.digit_value('7'), Some(7));
        assert_eq!(Radix::Octal.digit_value('8'), None);
        assert_eq!(Radix::Decimal.digit_value('9'), Some(9));
        assert_eq!(Radix::Decimal.digit_value('a'), None);
        assert_eq!(Radix::Hexadecimal.digit_value('a'), Some(10));
        assert_eq!(Radix::Hexadecimal.digit_value('F'), Some(15));
        assert_eq!(Radix::Hexadecimal.digit_value('g'), None);
        assert_eq!(Radix::Hexadecimal.digit_value('-'), None);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(Radix::from_value(8), Some(Radix::Octal));
        assert_eq!(Radix::from_value(16), Some(Radix::Hexadecimal));
        assert_eq!(Radix::from_value(2), None);
        for radix in [Radix::Octal, Radix::Decimal, Radix::Hexadecimal] {
            assert_eq!(Radix::from_value(radix.value()), Some(radix));
        }
    }
}
