//! Configuration layer for constructing a search: difficulty selection plus the
//! thread/time/RNG-seed overrides a caller may want on top of it.
//!
//! Grounded in the teacher's `SearchOptions` (`search/options.rs`): a plain struct
//! with a `Default` impl and `#[must_use]` fluent `with_*` builder methods, rather
//! than a derive-heavy config crate the teacher's pack doesn't otherwise reach for.

use crate::difficulty::DifficultyLevel;

/// How a `search()` call should be parameterised.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub difficulty: DifficultyLevel,
    pub thread_count_override: Option<usize>,
    pub soft_bound_override_s: Option<f64>,
    pub hard_bound_override_s: Option<f64>,
    /// Seeds the RNG used for `DifficultyProfile::error_rate` jitter.
    /// Fixing this makes weaker-difficulty play reproducible in tests.
    pub rng_seed: Option<u64>,
}

impl SearchConfig {
    #[must_use]
    pub fn new(difficulty: DifficultyLevel) -> SearchConfig {
        SearchConfig {
            difficulty,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_thread_count(mut self, thread_count: Option<usize>) -> Self {
        self.thread_count_override = thread_count;
        self
    }

    #[must_use]
    pub fn with_time_bounds(mut self, soft_bound_s: Option<f64>, hard_bound_s: Option<f64>) -> Self {
        self.soft_bound_override_s = soft_bound_s;
        self.hard_bound_override_s = hard_bound_s;
        self
    }

    #[must_use]
    pub fn with_rng_seed(mut self, seed: Option<u64>) -> Self {
        self.rng_seed = seed;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            difficulty: DifficultyLevel::Medium,
            thread_count_override: None,
            soft_bound_override_s: None,
            hard_bound_override_s: None,
            rng_seed: None,
        }
    }
}
