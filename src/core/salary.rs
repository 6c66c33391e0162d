use crate::domain::model::SalaryBounds;

/// Single-number estimate from a salary fork, in whole currency units.
///
/// Both bounds give their midpoint, a lone lower bound is raised by 20%
/// and a lone upper bound is lowered by 20%. All results are floored and
/// saturate at `u64::MAX`.
pub fn predict_salary(bounds: SalaryBounds) -> Option<u64> {
    let estimate = match (bounds.lower, bounds.upper) {
        (Some(lower), Some(upper)) => (u128::from(lower) + u128::from(upper)) / 2,
        (Some(lower), None) => u128::from(lower) * 12 / 10,
        (None, Some(upper)) => u128::from(upper) * 8 / 10,
        (None, None) => return None,
    };
    Some(saturate(estimate))
}

/// Integer mean, `None` for an empty slice.
pub fn average(salaries: &[u64]) -> Option<u64> {
    if salaries.is_empty() {
        return None;
    }
    let total: u128 = salaries.iter().map(|s| u128::from(*s)).sum();
    Some(saturate(total / salaries.len() as u128))
}

fn saturate(value: u128) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}
