//! Game configuration, including the tile-value policy used when spawning.

use serde::{Deserialize, Serialize};

use crate::board::RandomSource;

/// How the value of a freshly spawned tile is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnPolicy {
    /// `2^power` with `power = min(max_spawn_power, score / score_step + 1)`.
    #[default]
    ScoreIndexed,
    /// 2 with probability 0.9, otherwise 4. Ignores the score.
    Classic,
}

impl SpawnPolicy {
    pub const ALL: [SpawnPolicy; 2] = [SpawnPolicy::ScoreIndexed, SpawnPolicy::Classic];

    pub fn label(self) -> &'static str {
        match self {
            SpawnPolicy::ScoreIndexed => "Score-scaled tiles",
            SpawnPolicy::Classic => "Classic (90% 2, 10% 4)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub spawn_policy: SpawnPolicy,
    /// Tiles placed on an empty board when a game starts.
    pub starting_tiles: u8,
    /// Score interval between spawn value steps (score-indexed policy).
    pub score_step: u64,
    pub max_spawn_power: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            spawn_policy: SpawnPolicy::default(),
            starting_tiles: 2,
            score_step: 500,
            max_spawn_power: 10,
        }
    }
}

impl GameConfig {
    /// Value for the next spawned tile. Only the classic policy consumes a draw.
    pub fn spawn_value<R: RandomSource + ?Sized>(&self, score: u64, rng: &mut R) -> u32 {
        match self.spawn_policy {
            SpawnPolicy::ScoreIndexed => {
                let steps = score / self.score_step.max(1);
                let power = steps
                    .saturating_add(1)
                    .min(u64::from(self.max_spawn_power))
                    .max(1);
                1u32 << power
            }
            SpawnPolicy::Classic => {
                if rng.next_unit() < 0.9 {
                    2
                } else {
                    4
                }
            }
        }
    }
}
