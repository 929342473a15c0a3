use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::core::{
    AVG_BOND_RETURN, AVG_STOCK_RETURN, Allocation, INFLATION_RATE, InvalidInput, ProjectionInputs,
    ProjectionSummary, RiskProfile, SimulationInputs, SimulationSummary, YearPoint,
    expected_return, project_growth, real_return, run_simulation, summarize_projection,
    summarize_proportions,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum CliRiskProfile {
    Conservative,
    Moderate,
    Aggressive,
}

impl From<CliRiskProfile> for RiskProfile {
    fn from(value: CliRiskProfile) -> Self {
        match value {
            CliRiskProfile::Conservative => RiskProfile::Conservative,
            CliRiskProfile::Moderate => RiskProfile::Moderate,
            CliRiskProfile::Aggressive => RiskProfile::Aggressive,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "robostat",
    about = "Classroom demos: coin-flip convergence and a toy robo-advisor projection"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Repeated coin-flip runs illustrating the law of large numbers
    CoinFlip {
        #[arg(long, default_value_t = 50, help = "Coin flips in each run")]
        flips_per_run: u32,
        #[arg(long, default_value_t = 100, help = "Number of runs to repeat")]
        runs: u32,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Asset allocation and wealth projection for a risk profile
    Advisor {
        #[arg(long, default_value_t = 10_000.0)]
        initial_savings: f64,
        #[arg(long, default_value_t = 200.0)]
        monthly_contribution: f64,
        #[arg(long, default_value_t = 20, help = "Investment horizon in years")]
        horizon_years: u32,
        #[arg(long, value_enum, default_value_t = CliRiskProfile::Moderate)]
        risk_profile: CliRiskProfile,
        #[arg(
            long,
            default_value_t = 100.0 * AVG_STOCK_RETURN,
            help = "Expected annual stock return in percent"
        )]
        stock_return: f64,
        #[arg(
            long,
            default_value_t = 100.0 * AVG_BOND_RETURN,
            help = "Expected annual bond return in percent"
        )]
        bond_return: f64,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CoinFlipResponse {
    flips_per_run: u32,
    runs: u32,
    seed: u64,
    proportions: Vec<f64>,
    summary: SimulationSummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AdvisorResponse {
    risk_profile: CliRiskProfile,
    allocation: Allocation,
    expected_annual_return: f64,
    real_annual_return: f64,
    projection: Vec<YearPoint>,
    summary: ProjectionSummary,
}

pub fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let rendered = match cli.command {
        Command::CoinFlip {
            flips_per_run,
            runs,
            seed,
        } => {
            let response = coin_flip_response(&SimulationInputs {
                trials_per_run: flips_per_run,
                runs,
                seed,
            })
            .map_err(|e| e.to_string())?;
            to_json(&response)?
        }
        Command::Advisor {
            initial_savings,
            monthly_contribution,
            horizon_years,
            risk_profile,
            stock_return,
            bond_return,
        } => {
            let response = advisor_response(
                risk_profile,
                stock_return / 100.0,
                bond_return / 100.0,
                initial_savings,
                monthly_contribution,
                horizon_years,
            )
            .map_err(|e| e.to_string())?;
            to_json(&response)?
        }
    };

    println!("{rendered}");
    Ok(())
}

fn coin_flip_response(inputs: &SimulationInputs) -> Result<CoinFlipResponse, InvalidInput> {
    let proportions = run_simulation(inputs)?;
    let summary = summarize_proportions(&proportions);
    Ok(CoinFlipResponse {
        flips_per_run: inputs.trials_per_run,
        runs: inputs.runs,
        seed: inputs.seed,
        proportions,
        summary,
    })
}

fn advisor_response(
    risk_profile: CliRiskProfile,
    stock_return: f64,
    bond_return: f64,
    initial_savings: f64,
    monthly_contribution: f64,
    horizon_years: u32,
) -> Result<AdvisorResponse, InvalidInput> {
    let profile: RiskProfile = risk_profile.into();
    let annual_return = expected_return(profile, stock_return, bond_return);

    let inputs = ProjectionInputs {
        initial_savings,
        monthly_contribution,
        horizon_years,
        annual_return,
    };
    let projection = project_growth(&inputs)?;
    let summary = summarize_projection(&inputs, &projection);

    Ok(AdvisorResponse {
        risk_profile,
        allocation: profile.allocation(),
        expected_annual_return: annual_return,
        real_annual_return: real_return(annual_return, INFLATION_RATE),
        projection,
        summary,
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("failed to encode response: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn cli_profiles_map_onto_core_profiles() {
        assert_eq!(
            RiskProfile::from(CliRiskProfile::Conservative),
            RiskProfile::Conservative
        );
        assert_eq!(
            RiskProfile::from(CliRiskProfile::Moderate),
            RiskProfile::Moderate
        );
        assert_eq!(
            RiskProfile::from(CliRiskProfile::Aggressive),
            RiskProfile::Aggressive
        );
    }

    #[test]
    fn advisor_response_blends_profile_return() {
        let response =
            advisor_response(CliRiskProfile::Conservative, 0.08, 0.03, 10_000.0, 200.0, 20)
                .expect("valid inputs");

        assert_approx(response.expected_annual_return, 0.051);
        assert_approx(response.allocation.stock_weight, 30.0);
        assert_approx(response.allocation.bond_weight, 70.0);
        assert_eq!(response.projection.len(), 21);
        assert!(response.summary.total_gains > 0.0);
    }

    #[test]
    fn advisor_response_rejects_invalid_projection_inputs() {
        let err = advisor_response(CliRiskProfile::Moderate, 0.08, 0.03, 10_000.0, 200.0, 0)
            .unwrap_err();
        assert_eq!(err, InvalidInput::ZeroHorizon);
    }

    #[test]
    fn coin_flip_response_carries_inputs_and_summary() {
        let response = coin_flip_response(&SimulationInputs {
            trials_per_run: 10,
            runs: 5,
            seed: 7,
        })
        .expect("valid inputs");

        assert_eq!(response.flips_per_run, 10);
        assert_eq!(response.runs, 5);
        assert_eq!(response.proportions.len(), 5);
        assert!(response.summary.distinct_proportions >= 1);
    }

    #[test]
    fn responses_serialize_as_camel_case() {
        let response = coin_flip_response(&SimulationInputs {
            trials_per_run: 4,
            runs: 3,
            seed: 1,
        })
        .expect("valid inputs");
        let value = serde_json::to_value(&response).expect("serializable");
        assert!(value.get("flipsPerRun").is_some());
        assert!(value["summary"].get("stdDev").is_some());
        assert!(value["summary"].get("distinctProportions").is_some());

        let advisor = advisor_response(CliRiskProfile::Aggressive, 0.08, 0.03, 10_000.0, 200.0, 20)
            .expect("valid inputs");
        let value = serde_json::to_value(&advisor).expect("serializable");
        assert_eq!(value["riskProfile"], "aggressive");
        assert!(value.get("expectedAnnualReturn").is_some());
        assert!(value["summary"].get("totalContributed").is_some());
        assert!(value["allocation"].get("stockWeight").is_some());
    }
}
