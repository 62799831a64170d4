//! Streak statistics for a stream of bits. The counters are only used for
//! reporting and never influence the predictions.

use crate::history::RecentHistory;
use std::fmt;

/// A read-only copy of the counters of a 'StreakStatistics'.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct StreakSnapshot {
    pub total: i64,
    pub zero_bits: i64,
    pub streak2: i64,
    pub streak3: i64,
    pub streak4: i64,
    pub streak5plus: i64,
}

impl StreakSnapshot {
    /// Returns the number of set bits that were observed.
    pub fn ones(&self) -> i64 {
        self.total - self.zero_bits
    }

    /// Returns the fraction of zero bits, or zero for an empty stream.
    pub fn zero_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.zero_bits as f64 / self.total as f64
    }

    /// Returns the sum of the four streak buckets.
    pub fn streaks(&self) -> i64 {
        self.streak2 + self.streak3 + self.streak4 + self.streak5plus
    }
}

impl fmt::Display for StreakSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total: {}", self.total)?;
        writeln!(f, "Zero bits: {}", self.zero_bits)?;
        writeln!(f, "Repeating 2 : {}", self.streak2)?;
        writeln!(f, "Repeating 3 : {}", self.streak3)?;
        writeln!(f, "Repeating 4 : {}", self.streak4)?;
        write!(f, "Repeating 5 : {}", self.streak5plus)
    }
}

/// Classifies every observed bit by the length of the streak that it extends.
/// Each streak is counted once, in the bucket of the longest length that it
/// reached: when a streak grows from length N to N+1 it moves from bucket N to
/// bucket N+1. Streaks that are already five bits long are not tracked any
/// further.
#[derive(Clone, Debug, Default)]
pub struct StreakStatistics {
    counts: StreakSnapshot,
}

impl StreakStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for 'bit', given the history of the stream before 'bit' is
    /// pushed into it. Pushing the bit is the responsibility of the caller.
    pub fn observe(&mut self, bit: bool, before: &RecentHistory) {
        let c = &mut self.counts;

        if !before.is_repeating_five() {
            let mut after = *before;
            after.push(bit);

            if after.is_repeating_five() {
                c.streak4 -= 1;
                c.streak5plus += 1;
            } else if after.is_repeating_four() {
                c.streak3 -= 1;
                c.streak4 += 1;
            } else if after.is_repeating_three() {
                c.streak2 -= 1;
                c.streak3 += 1;
            } else if after.is_repeating_two() {
                c.streak2 += 1;
            }
        }

        c.total += 1;
        c.zero_bits += i64::from(!bit);
    }

    #[must_use]
    pub fn snapshot(&self) -> StreakSnapshot {
        self.counts
    }
}

/// A bit stream that is being followed: the window of recent bits together with
/// the statistics that were collected over the whole stream.
#[derive(Clone, Debug, Default)]
pub struct StreamTracker {
    history: RecentHistory,
    stats: StreakStatistics,
}

impl StreamTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record 'bit' in the statistics and then push it into the history.
    pub fn record(&mut self, bit: bool) {
        self.stats.observe(bit, &self.history);
        self.history.push(bit);
    }

    pub fn history(&self) -> &RecentHistory {
        &self.history
    }

    pub fn snapshot(&self) -> StreakSnapshot {
        self.stats.snapshot()
    }
}
