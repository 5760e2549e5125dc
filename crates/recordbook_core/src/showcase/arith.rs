//! Arithmetic helpers.

pub fn sum(a: i64, b: i64) -> i64 {
    a + b
}

pub fn get_max(a: i64, b: i64) -> i64 {
    a.max(b)
}

/// `n`-th Fibonacci number, with `fibonacci(0) == Some(0)`.
///
/// Returns `None` once the value no longer fits in `u64` (`n > 93`).
pub fn fibonacci(n: u32) -> Option<u64> {
    let (mut current, mut next) = (0_u64, Some(1_u64));
    for _ in 0..n {
        let value = next?;
        next = current.checked_add(value);
        current = value;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::{fibonacci, get_max, sum};

    #[test]
    fn sum_table() {
        for (a, b, expected) in [(1, 2, 3), (2, 2, 4), (25, 25, 50)] {
            assert_eq!(sum(a, b), expected, "sum({a}, {b})");
        }
    }

    #[test]
    fn get_max_table() {
        for (a, b, expected) in [(4, 2, 4), (5, 3, 5), (2, 3, 3)] {
            assert_eq!(get_max(a, b), expected, "get_max({a}, {b})");
        }
    }

    #[test]
    fn fibonacci_table() {
        for (n, expected) in [(0, 0), (1, 1), (8, 21), (50, 12_586_269_025)] {
            assert_eq!(fibonacci(n), Some(expected), "fibonacci({n})");
        }
    }

    #[test]
    fn fibonacci_stops_at_u64_limit() {
        assert_eq!(fibonacci(93), Some(12_200_160_415_121_876_738));
        assert_eq!(fibonacci(94), None);
        assert_eq!(fibonacci(200), None);
    }
}
