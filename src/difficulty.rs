//! Maps a difficulty level to the search parameters that realise it.

use crate::error::{CoreError, CoreResult};
use crate::types::Depth;

/// The closed set of difficulty tiers. `Experimental` is not part of the original
/// five-level table but is named by the opening book's eligibility rule in
/// `OpeningBookFacade::book_move`; it shares `Grandmaster`'s search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DifficultyLevel {
    Braindead,
    Easy,
    Medium,
    Hard,
    Grandmaster,
    Experimental,
}

impl DifficultyLevel {
    const ALL: [DifficultyLevel; 6] = [
        DifficultyLevel::Braindead,
        DifficultyLevel::Easy,
        DifficultyLevel::Medium,
        DifficultyLevel::Hard,
        DifficultyLevel::Grandmaster,
        DifficultyLevel::Experimental,
    ];

    /// Maps a raw index (as might arrive from an external UI or config file) to a
    /// difficulty level, or `InvalidDifficulty` if it is out of range.
    pub fn from_index(index: usize) -> CoreResult<DifficultyLevel> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(CoreError::InvalidDifficulty { requested: index })
    }
}

/// Immutable search-parameter record for one difficulty level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    pub level: DifficultyLevel,
    pub thread_count: usize,
    pub pondering_thread_count: usize,
    pub time_budget_fraction: f64,
    pub parallel_search_enabled: bool,
    pub pondering_enabled: bool,
    pub vcf_enabled: bool,
    pub error_rate: f64,
    pub min_depth: Depth,
    pub target_nps: u64,
}

impl DifficultyProfile {
    /// Returns the profile for `level`, computing the CPU-derived thread counts for
    /// `Grandmaster`/`Experimental` from the host's logical CPU count.
    pub fn get(level: DifficultyLevel) -> DifficultyProfile {
        Self::get_with_cpu_count(level, num_cpus::get())
    }

    /// As `get`, but with an injected CPU count, used by tests so the
    /// `Grandmaster`/`Experimental` thread formula is verifiable independent of the
    /// host machine.
    pub fn get_with_cpu_count(level: DifficultyLevel, cpu_count: usize) -> DifficultyProfile {
        let mut profile = match level {
            DifficultyLevel::Braindead => DifficultyProfile {
                level,
                thread_count: 1,
                pondering_thread_count: 0,
                time_budget_fraction: 0.05,
                parallel_search_enabled: false,
                pondering_enabled: false,
                vcf_enabled: false,
                error_rate: 0.10,
                min_depth: 1,
                target_nps: 10_000,
            },
            DifficultyLevel::Easy => DifficultyProfile {
                level,
                thread_count: 2,
                pondering_thread_count: 1,
                time_budget_fraction: 0.20,
                parallel_search_enabled: true,
                pondering_enabled: false,
                vcf_enabled: false,
                error_rate: 0.0,
                min_depth: 2,
                target_nps: 50_000,
            },
            DifficultyLevel::Medium => DifficultyProfile {
                level,
                thread_count: 3,
                pondering_thread_count: 2,
                time_budget_fraction: 0.50,
                parallel_search_enabled: true,
                pondering_enabled: true,
                vcf_enabled: false,
                error_rate: 0.0,
                min_depth: 3,
                target_nps: 100_000,
            },
            DifficultyLevel::Hard => DifficultyProfile {
                level,
                thread_count: 4,
                pondering_thread_count: 3,
                time_budget_fraction: 0.75,
                parallel_search_enabled: true,
                pondering_enabled: true,
                vcf_enabled: true,
                error_rate: 0.0,
                min_depth: 4,
                target_nps: 200_000,
            },
            DifficultyLevel::Grandmaster | DifficultyLevel::Experimental => {
                let main_threads = (cpu_count / 2).saturating_sub(1).max(4);
                let ponder_threads = (main_threads / 2).max(2);
                DifficultyProfile {
                    level,
                    thread_count: main_threads,
                    pondering_thread_count: ponder_threads,
                    time_budget_fraction: 1.00,
                    parallel_search_enabled: true,
                    pondering_enabled: true,
                    vcf_enabled: true,
                    error_rate: 0.0,
                    min_depth: 5,
                    target_nps: 500_000,
                }
            }
        };

        debug_assert!(profile.thread_count >= 1);
        debug_assert!(profile.pondering_thread_count <= profile.thread_count);
        debug_assert!((0.0..=1.0).contains(&profile.error_rate));
        debug_assert!(profile.time_budget_fraction > 0.0 && profile.time_budget_fraction <= 1.0);

        // Keep Experimental distinguishable from Grandmaster in its own field for
        // callers that match on `level`, while sharing every numeric parameter.
        profile.level = level;
        profile
    }

    pub fn supports_pondering(&self) -> bool {
        self.pondering_enabled && self.level >= DifficultyLevel::Medium
    }

    pub fn supports_parallel_search(&self) -> bool {
        self.parallel_search_enabled
    }

    pub fn supports_vcf(&self) -> bool {
        self.vcf_enabled
    }
}
