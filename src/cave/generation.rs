//! Random cave generation.

use rand::Rng;

use super::Cave;
use crate::error::CaveError;

/// Generates an N×N cave where each region is independently accessible with
/// probability `accessibility`.
///
/// Regions are drawn row by row, left to right, so a seeded RNG always yields
/// the same cave.
pub fn generate_cave<R: Rng>(
    size: usize,
    accessibility: f64,
    rng: &mut R,
) -> Result<Cave, CaveError> {
    if size == 0 {
        return Err(CaveError::InvalidArgument(
            "cave size must be positive".to_string(),
        ));
    }
    // Written so that NaN fails too.
    if !(0.0..=1.0).contains(&accessibility) {
        return Err(CaveError::InvalidArgument(format!(
            "accessibility {} is outside [0, 1]",
            accessibility
        )));
    }

    let obstruction = 1.0 - accessibility;
    let rows: Vec<Vec<bool>> = (0..size)
        .map(|_| (0..size).map(|_| rng.gen_bool(obstruction)).collect())
        .collect();

    Cave::from_layout(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cave::Position;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generate_rejects_zero_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = generate_cave(0, 0.5, &mut rng).unwrap_err();
        assert!(matches!(err, CaveError::InvalidArgument(_)));
    }

    #[test]
    fn test_generate_rejects_bad_probability() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for p in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    generate_cave(4, p, &mut rng),
                    Err(CaveError::InvalidArgument(_))
                ),
                "accessibility {} should be rejected",
                p
            );
        }
    }

    #[test]
    fn test_generate_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let open = generate_cave(5, 1.0, &mut rng).unwrap();
        assert_eq!(open.size(), 5);
        assert_eq!(open.obstructed_count(), 0);

        let solid = generate_cave(5, 0.0, &mut rng).unwrap();
        assert_eq!(solid.obstructed_count(), 25);
    }

    #[test]
    fn test_generate_starts_unvisited() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let cave = generate_cave(6, 0.6, &mut rng).unwrap();
        assert_eq!(cave.visited_count(), 0);
        assert!(cave.contains(Position::new(5, 5)));
    }

    #[test]
    fn test_deterministic_with_seed() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(42);
        let mut rng2 = ChaCha8Rng::seed_from_u64(42);

        let cave1 = generate_cave(8, 0.55, &mut rng1).unwrap();
        let cave2 = generate_cave(8, 0.55, &mut rng2).unwrap();
        assert_eq!(cave1, cave2);
    }

    #[test]
    fn test_obstruction_rate_tracks_probability() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let cave = generate_cave(100, 0.7, &mut rng).unwrap();

        let rate = cave.obstructed_count() as f64 / 10_000.0;
        assert!(
            (rate - 0.3).abs() < 0.03,
            "obstruction rate {} should be close to 0.3",
            rate
        );
    }
}
