use std::fmt;

use serde::Serialize;

/// Risk tolerance categories offered by the advisor, each tied to a fixed
/// stock/bond split.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RiskProfile {
    Conservative,
    Moderate,
    Aggressive,
}

/// Percentage split between stocks and bonds. Weights always sum to 100.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub stock_weight: f64,
    pub bond_weight: f64,
}

impl RiskProfile {
    pub fn allocation(self) -> Allocation {
        match self {
            RiskProfile::Conservative => Allocation {
                stock_weight: 30.0,
                bond_weight: 70.0,
            },
            RiskProfile::Moderate => Allocation {
                stock_weight: 60.0,
                bond_weight: 40.0,
            },
            RiskProfile::Aggressive => Allocation {
                stock_weight: 90.0,
                bond_weight: 10.0,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulationInputs {
    pub trials_per_run: u32,
    pub runs: u32,
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub distinct_proportions: usize,
}

#[derive(Debug, Clone)]
pub struct ProjectionInputs {
    pub initial_savings: f64,
    pub monthly_contribution: f64,
    pub horizon_years: u32,
    pub annual_return: f64,
}

/// One point of the projected growth curve. Year 0 carries the initial
/// savings untouched.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearPoint {
    pub year: u32,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub final_value: f64,
    pub total_contributed: f64,
    pub total_gains: f64,
}

/// A precondition on a core input was violated. These are deterministic
/// caller errors; the fix is to correct the input and call again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    ZeroTrialsPerRun,
    ZeroRuns,
    NegativeInitialSavings,
    NegativeMonthlyContribution,
    ZeroHorizon,
    ReturnNotAboveMinusOne,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::ZeroTrialsPerRun => write!(f, "trials per run must be > 0"),
            InvalidInput::ZeroRuns => write!(f, "number of runs must be > 0"),
            InvalidInput::NegativeInitialSavings => {
                write!(f, "initial savings must be a finite value >= 0")
            }
            InvalidInput::NegativeMonthlyContribution => {
                write!(f, "monthly contribution must be a finite value >= 0")
            }
            InvalidInput::ZeroHorizon => write!(f, "horizon must be at least 1 year"),
            InvalidInput::ReturnNotAboveMinusOne => {
                write!(f, "annual return must be a finite value > -1")
            }
        }
    }
}

impl std::error::Error for InvalidInput {}
