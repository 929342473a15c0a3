use super::types::{InvalidInput, ProjectionInputs, ProjectionSummary, RiskProfile, YearPoint};

/// Simplified long-run asset-class assumptions used when the caller does not
/// supply its own.
pub const AVG_STOCK_RETURN: f64 = 0.08;
pub const AVG_BOND_RETURN: f64 = 0.03;
pub const INFLATION_RATE: f64 = 0.02;

/// Weighted average annual return for a profile's stock/bond split.
pub fn expected_return(profile: RiskProfile, stock_return: f64, bond_return: f64) -> f64 {
    let allocation = profile.allocation();
    allocation.stock_weight / 100.0 * stock_return + allocation.bond_weight / 100.0 * bond_return
}

/// Inflation-adjusted rate equivalent to a nominal annual rate.
pub fn real_return(nominal_return: f64, inflation: f64) -> f64 {
    (1.0 + nominal_return) / (1.0 + inflation) - 1.0
}

/// Projects account value year by year: the running balance compounds once
/// at the annual rate, then the year's twelve monthly contributions are
/// added at their ordinary-annuity future value.
///
/// Returns `horizon_years + 1` points; year 0 is the initial savings.
pub fn project_growth(inputs: &ProjectionInputs) -> Result<Vec<YearPoint>, InvalidInput> {
    if !inputs.initial_savings.is_finite() || inputs.initial_savings < 0.0 {
        return Err(InvalidInput::NegativeInitialSavings);
    }
    if !inputs.monthly_contribution.is_finite() || inputs.monthly_contribution < 0.0 {
        return Err(InvalidInput::NegativeMonthlyContribution);
    }
    if inputs.horizon_years == 0 {
        return Err(InvalidInput::ZeroHorizon);
    }
    if !inputs.annual_return.is_finite() || inputs.annual_return <= -1.0 {
        return Err(InvalidInput::ReturnNotAboveMinusOne);
    }

    let monthly_return = (1.0 + inputs.annual_return).powf(1.0 / 12.0) - 1.0;

    // Future value of twelve end-of-month payments. The closed form divides
    // by the monthly rate, so the zero-rate case takes the limit instead.
    let annual_contribution = if monthly_return == 0.0 {
        inputs.monthly_contribution * 12.0
    } else {
        inputs.monthly_contribution * ((1.0 + monthly_return).powi(12) - 1.0) / monthly_return
    };

    let mut series = Vec::with_capacity(inputs.horizon_years as usize + 1);
    let mut value = inputs.initial_savings;
    series.push(YearPoint { year: 0, value });

    for year in 1..=inputs.horizon_years {
        value = value * (1.0 + inputs.annual_return) + annual_contribution;
        series.push(YearPoint { year, value });
    }

    Ok(series)
}

/// Headline figures shown next to the projection curve.
pub fn summarize_projection(inputs: &ProjectionInputs, series: &[YearPoint]) -> ProjectionSummary {
    let final_value = series.last().map(|point| point.value).unwrap_or(0.0);
    let total_contributed = inputs.initial_savings
        + inputs.monthly_contribution * 12.0 * f64::from(inputs.horizon_years);

    ProjectionSummary {
        final_value,
        total_contributed,
        total_gains: (final_value - total_contributed).max(0.0),
    }
}
