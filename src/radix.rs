use std::fmt;
use std::str::FromStr;

/// Numeral base a [`HugeUint`](crate::HugeUint) is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Radix {
    Binary,
    Decimal,
    #[default]
    Hexadecimal,
}

impl Radix {
    pub const fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Returns true if `byte` is a digit of this base. Hex digits are upper-case only.
    pub fn is_digit(self, byte: u8) -> bool {
        match self {
            Radix::Binary => matches!(byte, b'0' | b'1'),
            Radix::Decimal => byte.is_ascii_digit(),
            Radix::Hexadecimal => matches!(byte, b'0'..=b'9' | b'A'..=b'F'),
        }
    }

    /// Numeric value of a digit. Anything from `'A'` upwards counts as a letter digit.
    #[inline]
    pub fn digit_value(byte: u8) -> u8 {
        if byte >= b'A' {
            byte - b'A' + 10
        } else {
            byte.wrapping_sub(b'0')
        }
    }

    /// Symbol for `value`, which must be below 16.
    #[inline]
    pub fn digit_char(value: u8) -> u8 {
        debug_assert!(value < 16);
        if value < 10 {
            b'0' + value
        } else {
            b'A' + value - 10
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Radix::Binary => "binary",
            Radix::Decimal => "decimal",
            Radix::Hexadecimal => "hexadecimal",
        };
        f.write_str(name)
    }
}

impl FromStr for Radix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bin" | "binary" | "2" => Ok(Radix::Binary),
            "dec" | "decimal" | "10" => Ok(Radix::Decimal),
            "hex" | "hexadecimal" | "16" => Ok(Radix::Hexadecimal),
            other => Err(format!("unsupported radix '{}', expected bin, dec or hex", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabets() {
        assert!(Radix::Binary.is_digit(b'1'));
        assert!(!Radix::Binary.is_digit(b'2'));
        assert!(Radix::Decimal.is_digit(b'9'));
        assert!(!Radix::Decimal.is_digit(b'A'));
        assert!(Radix::Hexadecimal.is_digit(b'F'));
        assert!(!Radix::Hexadecimal.is_digit(b'f'));
        assert!(!Radix::Hexadecimal.is_digit(b'g'));
    }

    #[test]
    fn test_digit_mapping() {
        // 'A' sits just past the boundary the letter check has to catch.
        assert_eq!(Radix::digit_value(b'9'), 9);
        assert_eq!(Radix::digit_value(b'A'), 10);
        assert_eq!(Radix::digit_value(b'F'), 15);
        for v in 0..16 {
            assert_eq!(Radix::digit_value(Radix::digit_char(v)), v);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("HEX".parse::<Radix>(), Ok(Radix::Hexadecimal));
        assert_eq!("2".parse::<Radix>(), Ok(Radix::Binary));
        assert_eq!("decimal".parse::<Radix>(), Ok(Radix::Decimal));
        assert!("octal".parse::<Radix>().is_err());
    }
}
