const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Binary and hexadecimal forms of one integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub decimal: i128,
    pub binary: String,
    pub hexadecimal: String,
}

impl Conversion {
    pub fn of(n: i128) -> Self {
        Conversion {
            decimal: n,
            binary: to_binary(n),
            hexadecimal: to_hexadecimal(n),
        }
    }
}

pub fn to_binary(n: i128) -> String {
    to_base(n, 2)
}

pub fn to_hexadecimal(n: i128) -> String {
    to_base(n, 16)
}

/// Sign-prefixed magnitude string of `n` in `base` (2..=16), built by
/// repeated division with remainders collected least significant first.
///
/// # Panics
/// If `base` is outside 2..=16.
pub fn to_base(n: i128, base: u32) -> String {
    assert!((2..=16).contains(&base), "unsupported base {base}");
    if n == 0 {
        return "0".to_string();
    }

    let base = u128::from(base);
    let mut magnitude = n.unsigned_abs();
    let mut digits = Vec::new();
    while magnitude > 0 {
        digits.push(DIGITS[(magnitude % base) as usize]);
        magnitude /= base;
    }
    if n < 0 {
        digits.push(b'-');
    }
    digits.reverse();

    // Only ASCII digits and '-' were pushed.
    digits.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(to_binary(0), "0");
        assert_eq!(to_hexadecimal(0), "0");
    }

    #[test]
    fn test_positive() {
        assert_eq!(to_binary(1), "1");
        assert_eq!(to_binary(2), "10");
        assert_eq!(to_binary(4), "100");
        assert_eq!(to_binary(255), "11111111");
        assert_eq!(to_hexadecimal(255), "FF");
        assert_eq!(to_hexadecimal(4096), "1000");
        assert_eq!(to_hexadecimal(48879), "BEEF");
    }

    #[test]
    fn test_negative() {
        assert_eq!(to_binary(-5), "-101");
        assert_eq!(to_hexadecimal(-255), "-FF");
        assert_eq!(to_hexadecimal(-1), "-1");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(to_binary(i128::MIN), format!("-1{}", "0".repeat(127)));
        assert_eq!(to_hexadecimal(i128::MAX), format!("7{}", "F".repeat(31)));
    }

    #[test]
    fn test_other_bases() {
        assert_eq!(to_base(8, 8), "10");
        assert_eq!(to_base(-10, 10), "-10");
    }

    #[test]
    #[should_panic(expected = "unsupported base")]
    fn test_base_out_of_range() {
        to_base(10, 17);
    }

    #[test]
    fn test_conversion_row() {
        let c = Conversion::of(10);
        assert_eq!(c.decimal, 10);
        assert_eq!(c.binary, "1010");
        assert_eq!(c.hexadecimal, "A");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Positional evaluation of a sign-prefixed magnitude string.
    fn evaluate(s: &str, base: i128) -> i128 {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let magnitude = digits.chars().fold(0i128, |acc, ch| {
            acc * base + ch.to_digit(base as u32).unwrap() as i128
        });
        if negative {
            -magnitude
        } else {
            magnitude
        }
    }

    proptest! {
        #[test]
        fn binary_round_trips(n in any::<i64>()) {
            prop_assert_eq!(evaluate(&to_binary(n as i128), 2), n as i128);
        }

        #[test]
        fn hexadecimal_round_trips(n in any::<i64>()) {
            prop_assert_eq!(evaluate(&to_hexadecimal(n as i128), 16), n as i128);
        }

        #[test]
        fn digits_stay_in_alphabet(n in any::<i128>()) {
            let hex = to_hexadecimal(n);
            prop_assert!(hex.trim_start_matches('-').chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
            prop_assert!(!hex.trim_start_matches('-').starts_with('0') || n == 0);
        }
    }
}
