//! Monte Carlo driver composing cave generation and traversal.

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::{SimConfig, SimMode, SWEEP_STEPS};
use super::report::{CrossingEstimate, PathReport, SimReport, SweepReport};
use crate::cave::{generate_cave, Cave};
use crate::error::CaveError;
use crate::traversal::{attempt_traverse, ExploreMode};

/// Run the configured simulation and return a report.
///
/// One RNG is created per run, from the seed when one is given.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, CaveError> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let report = match &config.mode {
        SimMode::ShowPaths { layout } => {
            let mut cave = Cave::from_layout(layout)?;
            SimReport::Paths(show_paths(&mut cave))
        }
        SimMode::Estimate { accessibility } => SimReport::Estimate(estimate_crossing(
            config.cave_size,
            *accessibility,
            config.sample_size,
            &mut rng,
        )?),
        SimMode::Sweep => SimReport::Sweep(sweep(
            config.cave_size,
            config.sample_size,
            &mut rng,
        )?),
    };

    Ok(report)
}

/// Traverse a fixed cave once, exploring everything reachable from the
/// entry row, and render the explored regions.
pub fn show_paths(cave: &mut Cave) -> PathReport {
    let outcome = attempt_traverse(cave, ExploreMode::ShowPaths);
    info!(
        "{}x{} cave: {} exit region(s) reached, {} region(s) visited",
        cave.size(),
        cave.size(),
        outcome.exits_reached,
        outcome.regions_visited
    );

    PathReport {
        exit_found: outcome.exit_found(),
        exits_reached: outcome.exits_reached,
        regions_visited: outcome.regions_visited,
        visited: cave.visited_positions(),
        paths: cave.render_paths(),
    }
}

/// Estimate the probability that a random `size`×`size` cave with the given
/// accessibility can be crossed, from `samples` independent caves.
pub fn estimate_crossing<R: Rng>(
    size: usize,
    accessibility: f64,
    samples: u32,
    rng: &mut R,
) -> Result<CrossingEstimate, CaveError> {
    if samples == 0 {
        return Err(CaveError::InvalidArgument(
            "sample size must be positive".to_string(),
        ));
    }

    let mut successes = 0;
    for _ in 0..samples {
        // A fresh cave per sample; the previous one is dropped here.
        let mut cave = generate_cave(size, accessibility, rng)?;
        if attempt_traverse(&mut cave, ExploreMode::Statistical).exit_found() {
            successes += 1;
        }
    }

    let estimate = CrossingEstimate {
        accessibility,
        samples,
        successes,
    };
    debug!(
        "accessibility {:.2}: {}/{} caves crossed",
        accessibility, successes, samples
    );
    Ok(estimate)
}

/// Run [`estimate_crossing`] for accessibility 0.00, 0.01, ..., 1.00.
pub fn sweep<R: Rng>(
    size: usize,
    samples: u32,
    rng: &mut R,
) -> Result<SweepReport, CaveError> {
    let mut points = Vec::with_capacity(SWEEP_STEPS as usize + 1);
    for step in 0..=SWEEP_STEPS {
        let accessibility = step as f64 / SWEEP_STEPS as f64;
        points.push(estimate_crossing(size, accessibility, samples, rng)?);
    }

    let report = SweepReport {
        cave_size: size,
        samples,
        points,
    };
    match report.threshold_estimate() {
        Some(threshold) => info!(
            "{}x{} caves: half are crossed from accessibility {:.2}",
            size, size, threshold
        ),
        None => info!("{}x{} caves: never crossed half the time", size, size),
    }
    Ok(report)
}
