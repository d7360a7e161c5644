//! Trial-division primality.

/// Returns `true` if `n` is prime.
#[must_use]
pub fn is_prime(n: u64) -> bool {
    match n {
        0 | 1 => false,
        2 => true,
        _ if n % 2 == 0 => false,
        _ => first_odd_divisor(n).is_none(),
    }
}

/// Smallest divisor of `n` strictly between 1 and `n`.
///
/// `None` for 0, 1 and primes.
#[must_use]
pub fn smallest_factor(n: u64) -> Option<u64> {
    if n < 4 {
        return None;
    }
    if n % 2 == 0 {
        return Some(2);
    }
    first_odd_divisor(n)
}

// Odd d from 3 while d <= floor(sqrt(n)); `d <= n / d` avoids squaring.
fn first_odd_divisor(n: u64) -> Option<u64> {
    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return Some(d);
        }
        d += 2;
    }
    None
}
