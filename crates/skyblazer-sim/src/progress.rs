//! Score and level progression, tracked by the engine and mutated by systems.

use skyblazer_core::constants::{FINAL_LEVEL, LEVEL_SCORE_THRESHOLDS};
use skyblazer_core::events::AudioEvent;

/// Running score state for the current run.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub score: u64,
    /// Current level index.
    pub level: usize,
    pub enemies_downed: u32,
    pub rings_collected: u32,
}

impl ScoreState {
    /// Fresh state for a run starting at `level`.
    pub fn new(level: usize) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Add points and advance the level across any thresholds crossed,
    /// within the same tick the score crosses them.
    pub fn award(&mut self, points: u64, audio_events: &mut Vec<AudioEvent>) {
        self.score += points;
        while self.level < FINAL_LEVEL && self.score >= LEVEL_SCORE_THRESHOLDS[self.level] {
            self.level += 1;
            audio_events.push(AudioEvent::LevelUp { level: self.level });
        }
    }
}
