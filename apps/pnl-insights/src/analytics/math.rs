//! Statistical math utilities for performance metric calculations.

use rust_decimal::Decimal;

use super::constants::{TOLERANCE, TWO};

/// Calculate mean of a slice of decimals.
///
/// `None` for an empty slice or when the sum leaves the decimal range.
pub fn mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let sum = values
        .iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))?;
    sum.checked_div(Decimal::from(values.len() as u64))
}

/// Sample standard deviation (N - 1 denominator).
///
/// `None` below two observations, where the sample variance is undefined, and
/// when the squared deviations leave the decimal range.
pub fn std_dev(values: &[Decimal]) -> Option<Decimal> {
    if values.len() < 2 {
        return None;
    }

    let avg = mean(values)?;
    let variance_sum = values.iter().try_fold(Decimal::ZERO, |acc, v| {
        let deviation = v.checked_sub(avg)?;
        acc.checked_add(deviation.checked_mul(deviation)?)
    })?;
    let variance = variance_sum.checked_div(Decimal::from((values.len() - 1) as u64))?;

    sqrt_decimal(variance)
}

/// Approximate square root using Newton's method.
///
/// Iterates until a step changes the estimate by at most `TOLERANCE` relative
/// to its size.
pub fn sqrt_decimal(value: Decimal) -> Option<Decimal> {
    if value < Decimal::ZERO {
        return None;
    }
    if value == Decimal::ZERO {
        return Some(Decimal::ZERO);
    }

    // Start from value/2 only for large inputs; below 2 that guess undershoots.
    let mut guess = if value > TWO { value / TWO } else { Decimal::ONE };

    for _ in 0..100 {
        let next = (guess + value / guess) / TWO;
        // Relative step, so tiny variances still converge to their true root.
        if (next - guess).abs() <= TOLERANCE * next {
            return Some(next);
        }
        guess = next;
    }

    Some(guess)
}

/// Index of the first maximum, ties resolved to the earliest position.
pub fn first_argmax(values: &[Decimal]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, value) in values.iter().enumerate() {
        match best {
            Some(b) if *value <= values[b] => {}
            _ => best = Some(idx),
        }
    }
    best
}

/// Index of the first minimum, ties resolved to the earliest position.
pub fn first_argmin(values: &[Decimal]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, value) in values.iter().enumerate() {
        match best {
            Some(b) if *value >= values[b] => {}
            _ => best = Some(idx),
        }
    }
    best
}
