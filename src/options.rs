//! Configuration of the search drivers.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Options for a local search which determine how it behaves.
#[derive(Debug)]
pub struct SearchOptions {
    /// A random generator which is used by the search; passing it as an
    /// argument allows seeding of the randomization.
    pub random_generator: SmallRng,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            random_generator: SmallRng::seed_from_u64(42),
        }
    }
}

impl SearchOptions {
    /// Options whose random generator is seeded with `seed`, giving
    /// reproducible searches.
    pub fn with_seed(seed: u64) -> SearchOptions {
        SearchOptions {
            random_generator: SmallRng::seed_from_u64(seed),
        }
    }

    /// Options whose random generator is seeded from operating-system
    /// entropy, giving an independent placement sequence per call.
    pub fn from_entropy() -> SearchOptions {
        SearchOptions {
            random_generator: SmallRng::from_entropy(),
        }
    }
}
