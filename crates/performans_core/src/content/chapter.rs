//! Chapter catalog.

use crate::error::InvalidInputError;
use crate::view::ChartKind;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Finite set of chapters offered by the educational module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chapter {
    MaterialistCrisis,
    IntentionalEntanglement,
    PhilosophersStone,
    EverydayApplications,
}

/// Static record for one chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterContent {
    pub title: &'static str,
    pub summary: &'static str,
    /// Illustration rendered next to the summary, if any.
    pub chart: Option<ChartKind>,
}

const MATERIALIST_CRISIS: ChapterContent = ChapterContent {
    title: "Crisis of the Materialist Worldview",
    summary: "Classical materialism treats the observer as irrelevant to what is observed. \
              Quantum mechanics replaces definite trajectories with stationary states: \
              probability densities fixed by the shape of the potential.",
    chart: Some(ChartKind::StationaryDensity),
};

const INTENTIONAL_ENTANGLEMENT: ChapterContent = ChapterContent {
    title: "Intentional Entanglement",
    summary: "Intentional entanglement is the idea that a conscious intention creates \
              quantum correlations between observer and object, a non-local influence \
              of awareness on distant physical systems.",
    chart: Some(ChartKind::WaveCollapse),
};

const PHILOSOPHERS_STONE: ChapterContent = ChapterContent {
    title: "The Philosopher's Stone Algorithm",
    summary: "Every superposition leaks into its environment. The coherence time sets how \
              fast interference fades; the algorithm is about acting before it is gone.",
    chart: Some(ChartKind::CoherenceDecay),
};

const EVERYDAY_APPLICATIONS: ChapterContent = ChapterContent {
    title: "Everyday Applications",
    summary: "Write an intention down, return to it, and notice what changed. The journal \
              below keeps your most recent intentions with the time you set them.",
    chart: None,
};

impl Chapter {
    pub const ALL: [Chapter; 4] = [
        Chapter::MaterialistCrisis,
        Chapter::IntentionalEntanglement,
        Chapter::PhilosophersStone,
        Chapter::EverydayApplications,
    ];

    /// Stable lookup key used by the CLI and persisted view state.
    pub fn key(self) -> &'static str {
        match self {
            Chapter::MaterialistCrisis => "materialist-crisis",
            Chapter::IntentionalEntanglement => "intentional-entanglement",
            Chapter::PhilosophersStone => "philosophers-stone",
            Chapter::EverydayApplications => "everyday-applications",
        }
    }

    pub fn content(self) -> &'static ChapterContent {
        match self {
            Chapter::MaterialistCrisis => &MATERIALIST_CRISIS,
            Chapter::IntentionalEntanglement => &INTENTIONAL_ENTANGLEMENT,
            Chapter::PhilosophersStone => &PHILOSOPHERS_STONE,
            Chapter::EverydayApplications => &EVERYDAY_APPLICATIONS,
        }
    }
}

impl FromStr for Chapter {
    type Err = InvalidInputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        Chapter::ALL
            .into_iter()
            .find(|chapter| chapter.key() == normalized)
            .ok_or_else(|| InvalidInputError::UnknownChapter(value.to_string()))
    }
}
