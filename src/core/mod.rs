mod projection;
mod sampling;
mod types;

pub use projection::{
    AVG_BOND_RETURN, AVG_STOCK_RETURN, INFLATION_RATE, expected_return, project_growth,
    real_return, summarize_projection,
};
pub use sampling::{run_simulation, summarize_proportions};
pub use types::{
    Allocation, InvalidInput, ProjectionInputs, ProjectionSummary, RiskProfile, SimulationInputs,
    SimulationSummary, YearPoint,
};
