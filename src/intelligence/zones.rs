// ABOUTME: Heart-rate exertion zones as fractions of maximum heart rate
// ABOUTME: Classifies single readings and summarizes time spent per zone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bounds of each zone below `Red`, as a fraction of max heart rate
const ZONE_UPPER_FRACTIONS: [f64; 5] = [0.5, 0.6, 0.7, 0.8, 0.9];

/// Exertion zone of a heart-rate reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeartRateZone {
    /// Below 50% of max
    Rest,
    /// 50-60% of max
    WarmUp,
    /// 60-70% of max
    FatBurning,
    /// 70-80% of max
    Aerobic,
    /// 80-90% of max
    Anaerobic,
    /// 90% of max and above
    Red,
}

impl HeartRateZone {
    /// Every zone, lowest first
    pub const ALL: [Self; 6] = [
        Self::Rest,
        Self::WarmUp,
        Self::FatBurning,
        Self::Aerobic,
        Self::Anaerobic,
        Self::Red,
    ];

    /// Classify `bpm` against `max_heart_rate`
    ///
    /// Each bound belongs to the zone above it: exactly 50% of max is
    /// `WarmUp`, exactly 90% is `Red`.
    ///
    /// ```rust
    /// use heart_monitor::intelligence::HeartRateZone;
    ///
    /// assert_eq!(HeartRateZone::classify(99.0, 200.0), HeartRateZone::Rest);
    /// assert_eq!(HeartRateZone::classify(100.0, 200.0), HeartRateZone::WarmUp);
    /// assert_eq!(HeartRateZone::classify(185.0, 200.0), HeartRateZone::Red);
    /// ```
    #[must_use]
    pub fn classify(bpm: f64, max_heart_rate: f64) -> Self {
        ZONE_UPPER_FRACTIONS
            .iter()
            .position(|fraction| bpm < max_heart_rate * fraction)
            .map_or(Self::Red, |idx| Self::ALL[idx])
    }

    /// Display name shown on the zone badge
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rest => "Rest",
            Self::WarmUp => "Warm-up",
            Self::FatBurning => "Fat Burning Zone",
            Self::Aerobic => "Aerobic Zone",
            Self::Anaerobic => "Anaerobic Zone",
            Self::Red => "Red Zone",
        }
    }

    /// Lower bound as a fraction of max heart rate
    #[must_use]
    pub const fn lower_fraction(&self) -> f64 {
        match self {
            Self::Rest => 0.0,
            Self::WarmUp => 0.5,
            Self::FatBurning => 0.6,
            Self::Aerobic => 0.7,
            Self::Anaerobic => 0.8,
            Self::Red => 0.9,
        }
    }

    /// Upper bound as a fraction of max heart rate, `None` for `Red`
    #[must_use]
    pub const fn upper_fraction(&self) -> Option<f64> {
        match self {
            Self::Rest => Some(0.5),
            Self::WarmUp => Some(0.6),
            Self::FatBurning => Some(0.7),
            Self::Aerobic => Some(0.8),
            Self::Anaerobic => Some(0.9),
            Self::Red => None,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Rest => 0,
            Self::WarmUp => 1,
            Self::FatBurning => 2,
            Self::Aerobic => 3,
            Self::Anaerobic => 4,
            Self::Red => 5,
        }
    }
}

impl fmt::Display for HeartRateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a series of readings spreads across zones
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneDistribution {
    counts: [u64; 6],
    total: u64,
}

impl ZoneDistribution {
    /// Classify every reading in `samples` against `max_heart_rate`
    #[must_use]
    pub fn from_samples<I>(samples: I, max_heart_rate: f64) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut distribution = Self::default();
        for bpm in samples {
            distribution.record(HeartRateZone::classify(bpm, max_heart_rate));
        }
        distribution
    }

    /// Count one more reading in `zone`
    pub fn record(&mut self, zone: HeartRateZone) {
        self.counts[zone.index()] += 1;
        self.total += 1;
    }

    /// Readings counted in `zone`
    #[must_use]
    pub const fn count(&self, zone: HeartRateZone) -> u64 {
        self.counts[zone.index()]
    }

    /// Readings counted overall
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Share of readings in `zone`, 0-100; zero when nothing was recorded
    #[must_use]
    pub fn percentage(&self, zone: HeartRateZone) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(zone) as f64 * 100.0 / self.total as f64
    }

    /// Zone holding the most readings, lowest zone on ties
    #[must_use]
    pub fn dominant_zone(&self) -> Option<HeartRateZone> {
        if self.total == 0 {
            return None;
        }
        HeartRateZone::ALL
            .iter()
            .copied()
            .rev()
            .max_by_key(|zone| self.count(*zone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_belong_to_upper_zone() {
        let max = 200.0;
        assert_eq!(HeartRateZone::classify(100.0, max), HeartRateZone::WarmUp);
        assert_eq!(HeartRateZone::classify(120.0, max), HeartRateZone::FatBurning);
        assert_eq!(HeartRateZone::classify(140.0, max), HeartRateZone::Aerobic);
        assert_eq!(HeartRateZone::classify(160.0, max), HeartRateZone::Anaerobic);
        assert_eq!(HeartRateZone::classify(180.0, max), HeartRateZone::Red);
        assert_eq!(HeartRateZone::classify(179.9, max), HeartRateZone::Anaerobic);
    }

    #[test]
    fn test_fractions_are_contiguous() {
        for pair in HeartRateZone::ALL.windows(2) {
            assert_eq!(pair[0].upper_fraction(), Some(pair[1].lower_fraction()));
        }
        assert_eq!(HeartRateZone::Red.upper_fraction(), None);
    }

    #[test]
    fn test_distribution() {
        let samples = [70.0, 80.0, 110.0, 150.0, 190.0];
        let distribution = ZoneDistribution::from_samples(samples, 200.0);
        assert_eq!(distribution.total(), 5);
        assert_eq!(distribution.count(HeartRateZone::Rest), 2);
        assert!((distribution.percentage(HeartRateZone::Rest) - 40.0).abs() < 1e-9);
        assert_eq!(distribution.dominant_zone(), Some(HeartRateZone::Rest));
    }

    #[test]
    fn test_empty_distribution() {
        let distribution = ZoneDistribution::default();
        assert!(distribution.percentage(HeartRateZone::Red).abs() < f64::EPSILON);
        assert_eq!(distribution.dominant_zone(), None);
    }
}
