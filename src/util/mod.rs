pub mod cli;
pub mod logging;

/// greatest common divisor, `gcd(0, b) == b`
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// least common multiple of two positive numbers, `None` on overflow
pub fn checked_lcm(a: u64, b: u64) -> Option<u64> {
    (a / gcd(a, b)).checked_mul(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(5, 0), 5);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(checked_lcm(1, 1), Some(1));
        assert_eq!(checked_lcm(4, 6), Some(12));
        // every period from 1 to 8 folds into 840
        assert_eq!((1..=8).try_fold(1, checked_lcm), Some(840));
        assert_eq!(checked_lcm(u64::MAX, 2), None);
    }
}
