//! Vector Line Parsing
//!
//! Turns one raw line of the vector file into numbers. Malformed lines
//! yield `None` and are replaced by the caller, never reported.

use rand::Rng;
use std::sync::Arc;

/// Shared, immutable word vector
pub type Embedding = Arc<[f64]>;

/// Decimal digits kept for each component
pub const ROUND_DIGITS: usize = 4;

/// Parse a space-separated vector line
///
/// The line terminator is ignored. With `skip_first_column` the leading
/// label token is dropped unparsed. Any token that is not a float makes
/// the whole line malformed.
pub fn parse_vector_line(line: &[u8], skip_first_column: bool) -> Option<Vec<f64>> {
    let line = line
        .strip_suffix(b"\n")
        .map(|l| l.strip_suffix(b"\r").unwrap_or(l))
        .unwrap_or(line);

    let skip = usize::from(skip_first_column);
    line.split(|&b| b == b' ')
        .skip(skip)
        .map(parse_component)
        .collect()
}

fn parse_component(token: &[u8]) -> Option<f64> {
    let value: f64 = std::str::from_utf8(token).ok()?.trim().parse().ok()?;
    round_to(value, ROUND_DIGITS)
}

/// Round the exact decimal value of `value` to `digits` places
///
/// Formatting works on the exact binary value, so no scaling error is
/// introduced before the rounding step.
#[inline]
fn round_to(value: f64, digits: usize) -> Option<f64> {
    format!("{:.*}", digits, value).parse().ok()
}

/// Uniform random vector in [0, 1)
pub fn random_vector<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<f64> {
    (0..len).map(|_| rng.gen::<f64>()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_with_label() {
        let v = parse_vector_line(b"man 0.1 -0.25 3\n", true).unwrap();
        assert_eq!(v, vec![0.1, -0.25, 3.0]);
    }

    #[test]
    fn test_parse_without_label() {
        let v = parse_vector_line(b"0.5 1.5\r\n", false).unwrap();
        assert_eq!(v, vec![0.5, 1.5]);
    }

    #[test]
    fn test_rounds_to_four_digits() {
        let v = parse_vector_line(b"w 0.123456 -1.00004 2.71828", true).unwrap();
        assert_eq!(v, vec![0.1235, -1.0, 2.7183]);
    }

    #[test]
    fn test_rounds_exact_value_near_ties() {
        // 2.67455 is stored as 2.674549999..., so it rounds down
        let v = parse_vector_line(b"w 2.67455 1.00005 -2.67455", true).unwrap();
        assert_eq!(v, vec![2.6745, 1.0001, -2.6745]);
    }

    #[test]
    fn test_keeps_four_digits_on_large_values() {
        let v = parse_vector_line(b"w 2048.0001 100000.1234 -98765.43219", true).unwrap();
        assert_eq!(v, vec![2048.0001, 100000.1234, -98765.4322]);
    }

    #[test]
    fn test_label_is_not_parsed() {
        // Non-UTF-8 label bytes are skipped without decoding
        let v = parse_vector_line(b"\xff\xfe 1 2\n", true).unwrap();
        assert_eq!(v, vec![1.0, 2.0]);
    }

    #[test]
    fn test_malformed_token() {
        assert!(parse_vector_line(b"w 0.1 abc 0.3\n", true).is_none());
        // Double space produces an empty token
        assert!(parse_vector_line(b"w 0.1  0.3\n", true).is_none());
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(parse_vector_line(b"\n", true), Some(vec![]));
        assert!(parse_vector_line(b"", false).is_none());
    }

    #[test]
    fn test_random_vector() {
        let mut rng = StdRng::seed_from_u64(7);
        let v = random_vector(64, &mut rng);
        assert_eq!(v.len(), 64);
        assert!(v.iter().all(|x| (0.0..1.0).contains(x)));
    }
}
