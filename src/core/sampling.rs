use super::types::{InvalidInput, SimulationInputs, SimulationSummary};

/// Runs `inputs.runs` independent batches of `inputs.trials_per_run` fair
/// coin flips and returns the proportion of heads observed in each batch.
///
/// Each run draws from its own generator seeded from `(seed, run index)`,
/// so the output depends only on the inputs and not on call order.
pub fn run_simulation(inputs: &SimulationInputs) -> Result<Vec<f64>, InvalidInput> {
    if inputs.trials_per_run == 0 {
        return Err(InvalidInput::ZeroTrialsPerRun);
    }
    if inputs.runs == 0 {
        return Err(InvalidInput::ZeroRuns);
    }

    let mut proportions = Vec::with_capacity(inputs.runs as usize);
    for run_id in 0..inputs.runs {
        let mut rng = Rng::new(derive_seed(inputs.seed, run_id));
        let mut heads = 0u32;
        for _ in 0..inputs.trials_per_run {
            heads += rng.coin_flip();
        }
        proportions.push(f64::from(heads) / f64::from(inputs.trials_per_run));
    }

    Ok(proportions)
}

/// Reduces a sequence of run proportions to its mean, population standard
/// deviation, and the number of distinct values observed.
pub fn summarize_proportions(proportions: &[f64]) -> SimulationSummary {
    if proportions.is_empty() {
        return SimulationSummary {
            mean: 0.0,
            std_dev: 0.0,
            distinct_proportions: 0,
        };
    }

    let n = proportions.len() as f64;
    let mean = proportions.iter().sum::<f64>() / n;
    let variance = proportions
        .iter()
        .map(|p| {
            let d = p - mean;
            d * d
        })
        .sum::<f64>()
        / n;

    SimulationSummary {
        mean,
        std_dev: variance.sqrt(),
        distinct_proportions: count_distinct(proportions),
    }
}

fn count_distinct(values: &[f64]) -> usize {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted.dedup();
    sorted.len()
}

fn derive_seed(base_seed: u64, run_id: u32) -> u64 {
    let mixed = base_seed ^ ((run_id as u64) << 32) ^ 0x9E37_79B9_7F4A_7C15;
    splitmix64(mixed)
}

fn splitmix64(x: u64) -> u64 {
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        let state = if seed == 0 {
            0xA5A5_A5A5_A5A5_A5A5
        } else {
            seed
        };
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    // Top bit of the multiplied output; the low bits of xorshift64* are weaker.
    fn coin_flip(&mut self) -> u32 {
        (self.next_u64() >> 63) as u32
    }
}
