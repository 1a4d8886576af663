use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

/// Smallest roster a draw is allowed on.
pub const MIN_PARTICIPANTS: usize = 2;

/// Outcome of a single draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub name: String,
    pub index: usize,
    pub pool_size: usize,
    pub drawn_at: DateTime<Utc>,
}

impl Selection {
    pub fn new(name: String, index: usize, pool_size: usize) -> Self {
        Self {
            name,
            index,
            pool_size,
            drawn_at: Utc::now(),
        }
    }
}

/// Uniform index in `[0, size)`, `None` for an empty pool
pub fn draw_index<R: Rng>(rng: &mut R, size: usize) -> Option<usize> {
    if size == 0 {
        return None;
    }
    Some(rng.random_range(0..size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_draw_index_empty_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(draw_index(&mut rng, 0), None);
    }

    #[test]
    fn test_draw_index_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for size in 1..20 {
            for _ in 0..200 {
                let index = draw_index(&mut rng, size).unwrap();
                assert!(index < size);
            }
        }
    }

    #[test]
    fn test_draw_index_is_uniform() {
        const TRIALS: usize = 10_000;
        const SIZE: usize = 5;
        // chi-square critical value, 4 degrees of freedom, p = 0.001
        const CRITICAL: f64 = 18.467;

        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut counts = [0usize; SIZE];
        for _ in 0..TRIALS {
            counts[draw_index(&mut rng, SIZE).unwrap()] += 1;
        }

        let expected = TRIALS as f64 / SIZE as f64;
        let chi_square: f64 = counts
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();

        assert!(
            chi_square < CRITICAL,
            "chi-square {chi_square} too high for counts {counts:?}"
        );
        for &observed in &counts {
            let freq = observed as f64 / TRIALS as f64;
            assert!((freq - 0.2).abs() < 0.02, "frequency {freq} far from 1/5");
        }
    }

    #[test]
    fn test_selection_serializes() {
        let selection = Selection::new("Ana".to_string(), 0, 2);
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["index"], 0);
        assert_eq!(json["pool_size"], 2);
    }
}
