use crate::Board;
use serde::{Deserialize, Serialize};

/// Configuration for board generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Tallest wall that may be generated (inclusive)
    pub max_height: i32,
    /// Raise every border cell to `max_height` so interior pockets can form
    pub wall_border: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::medium()
    }
}

impl GeneratorConfig {
    pub fn small() -> Self {
        Self {
            width: 5,
            height: 4,
            max_height: 3,
            wall_border: true,
        }
    }

    pub fn medium() -> Self {
        Self {
            width: 12,
            height: 9,
            max_height: 6,
            wall_border: true,
        }
    }

    pub fn large() -> Self {
        Self {
            width: 40,
            height: 30,
            max_height: 12,
            wall_border: true,
        }
    }
}

/// Random board generator
pub struct Generator {
    config: GeneratorConfig,
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator with default configuration
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self::seeded(seed, GeneratorConfig::default())
    }

    /// Create a reproducible generator with custom configuration
    pub fn seeded(seed: u64, config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: SimpleRng::with_seed(seed),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a board with the current configuration
    pub fn generate(&mut self) -> Board {
        let GeneratorConfig {
            width,
            height,
            max_height,
            wall_border,
        } = self.config;
        let max_height = max_height.max(0);
        let span = max_height as usize + 1;

        let mut heights: Vec<i32> = (0..width * height)
            .map(|_| self.rng.next_usize(span) as i32)
            .collect();

        if wall_border {
            for (index, h) in heights.iter_mut().enumerate() {
                let (x, y) = (index % width, index / width);
                if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
                    *h = max_height;
                }
            }
        }

        Board::from_parts(width, height, heights)
    }
}

/// Simple PRNG for no-std compatibility
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        // Use getrandom for WASM-compatible random seeding
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: use a static counter if getrandom fails
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // PCG-like PRNG
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_and_range() {
        let mut generator = Generator::with_seed(42);
        let board = generator.generate();
        let config = GeneratorConfig::default();

        assert_eq!(board.width(), config.width);
        assert_eq!(board.height(), config.height);
        assert!(board.heights().iter().all(|&h| (0..=config.max_height).contains(&h)));
    }

    #[test]
    fn test_wall_border() {
        let mut generator = Generator::seeded(3, GeneratorConfig::small());
        let board = generator.generate();
        for cell in 0..board.len() {
            if board.is_border(cell) {
                assert_eq!(board.height_at(cell), 3, "border cell {} not raised", cell);
            }
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = Generator::with_seed(9).generate();
        let b = Generator::with_seed(9).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_max_height_is_flat() {
        let config = GeneratorConfig {
            max_height: 0,
            ..GeneratorConfig::small()
        };
        let board = Generator::seeded(5, config).generate();
        assert!(board.heights().iter().all(|&h| h == 0));
    }
}
