//! Synthetic dataset generator
//!
//! Produces a dataset with the same marginal distributions and cost
//! relationships as the historical medical cost data: age and smoking
//! dominate, BMI contributes above the obesity threshold, and regional
//! multipliers shift the level. Used to bootstrap a dataset when no
//! historical file is available and as a test fixture.

use super::{DatasetRow, Observation};
use crate::money::round_cents;
use crate::rng::SplitMix64;

/// Default number of rows, matching the historical dataset size
pub const DEFAULT_SAMPLES: usize = 1338;

/// Default generator seed
pub const DEFAULT_SEED: u64 = 42;

const REGIONS: [(&str, f64); 4] = [
    ("northeast", 1.1),
    ("northwest", 0.95),
    ("southeast", 1.15),
    ("southwest", 0.9),
];

// Children count distribution: P(0)=0.40, P(1)=0.25, P(2)=0.20, P(3)=0.10,
// P(4)=0.04, P(5)=0.01
const CHILDREN_CDF: [(u32, f64); 6] = [
    (0, 0.40),
    (1, 0.65),
    (2, 0.85),
    (3, 0.95),
    (4, 0.99),
    (5, 1.0),
];

/// Generate `n` synthetic dataset rows from a fixed seed
pub fn generate_dataset(n: usize, seed: u64) -> Vec<DatasetRow> {
    let mut rng = SplitMix64::new(seed);
    let mut rows = Vec::with_capacity(n);

    for _ in 0..n {
        let age = 18 + rng.gen_index(47) as u32; // [18, 64]
        let sex = if rng.next_f64() < 0.5 { "male" } else { "female" };
        let bmi = (30.0 + 6.0 * rng.next_gaussian()).clamp(15.0, 50.0);
        let children = sample_children(&mut rng);
        let smoker = if rng.next_f64() < 0.2 { "yes" } else { "no" };
        let (region, region_mult) = REGIONS[rng.gen_index(REGIONS.len())];

        let mut cost = 3000.0 + age as f64 * 250.0;
        if bmi > 30.0 {
            cost += (bmi - 30.0) * 300.0;
        } else {
            cost += bmi * 50.0;
        }
        if smoker == "yes" {
            cost *= 2.5;
        }
        cost += children as f64 * 500.0;
        cost *= region_mult;
        cost *= rng.gen_range(0.85, 1.15);

        rows.push(DatasetRow {
            observation: Observation::new(age, sex, round_cents(bmi), children, smoker, region),
            charges: round_cents(cost),
        });
    }

    rows
}

fn sample_children(rng: &mut SplitMix64) -> u32 {
    let u = rng.next_f64();
    for &(count, cumulative) in &CHILDREN_CDF {
        if u < cumulative {
            return count;
        }
    }
    5
}
