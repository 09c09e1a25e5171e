//! Game state and the reducer driving it.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::board::{self, Board, Direction, JsRandom, RandomSource};
use crate::config::{GameConfig, SpawnPolicy};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub score: u64,
    pub config: GameConfig,
    /// Accepted moves since the last restart.
    pub moves: u32,
    /// Score gained by the most recent accepted move.
    pub last_gain: u64,
}

impl GameState {
    pub fn new<R: RandomSource + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        Self {
            board: board::new_board(&config, rng),
            score: 0,
            config,
            moves: 0,
            last_gain: 0,
        }
    }

    pub fn is_game_over(&self) -> bool {
        board::is_terminal(&self.board)
    }

    pub fn best_tile(&self) -> u32 {
        board::max_tile(&self.board)
    }

    /// Next state for `action`, or `None` when the action leaves the game untouched.
    pub fn apply<R: RandomSource + ?Sized>(&self, action: GameAction, rng: &mut R) -> Option<Self> {
        match action {
            GameAction::Move(dir) => {
                if self.is_game_over() {
                    return None;
                }
                let outcome = board::slide(self.board, dir);
                if !outcome.changed(&self.board) {
                    return None;
                }
                let score = self.score.saturating_add(outcome.gained);
                Some(Self {
                    board: board::spawn_tile(outcome.board, score, &self.config, rng),
                    score,
                    config: self.config,
                    moves: self.moves.saturating_add(1),
                    last_gain: outcome.gained,
                })
            }
            GameAction::Restart => Some(Self::new(self.config, rng)),
            GameAction::SetSpawnPolicy(policy) => {
                if self.config.spawn_policy == policy {
                    return None;
                }
                let mut next = self.clone();
                next.config.spawn_policy = policy;
                Some(next)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameAction {
    Move(Direction),
    Restart,
    SetSpawnPolicy(SpawnPolicy),
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        // Returning the same Rc lets yew skip the re-render on rejected moves.
        match self.apply(action, &mut JsRandom) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::Scripted;
    use crate::board::EMPTY_BOARD;
    use assert_matches::assert_matches;

    fn state_with(board: Board, score: u64) -> GameState {
        GameState {
            board,
            score,
            config: GameConfig::default(),
            moves: 0,
            last_gain: 0,
        }
    }

    #[test]
    fn test_new_game_starts_clean() {
        let state = GameState::new(GameConfig::default(), &mut Scripted::new(&[0.0, 0.0]));
        assert_eq!(state.score, 0);
        assert_eq!(state.moves, 0);
        assert_eq!(board::empty_cells(&state.board).len(), 14);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_accepted_move_scores_and_spawns() {
        let mut grid = EMPTY_BOARD;
        grid[0] = [2, 2, 0, 0];
        let state = state_with(grid, 10);
        // 0.99 lands on the last empty cell
        let next = state
            .apply(GameAction::Move(Direction::Left), &mut Scripted::new(&[0.99]))
            .unwrap();
        assert_eq!(next.score, 14);
        assert_eq!(next.last_gain, 4);
        assert_eq!(next.moves, 1);
        assert_eq!(next.board[0], [4, 0, 0, 0]);
        assert_eq!(next.board[3][3], 2);
        assert_eq!(board::empty_cells(&next.board).len(), 14);
    }

    #[test]
    fn test_unchanged_move_is_rejected() {
        let mut grid = EMPTY_BOARD;
        grid[0] = [2, 4, 0, 0];
        let state = state_with(grid, 36);
        let mut rng = Scripted::new(&[0.5]);
        assert_matches!(state.apply(GameAction::Move(Direction::Left), &mut rng), None);
        assert_matches!(state.apply(GameAction::Move(Direction::Up), &mut rng), None);
        // no draw consumed, so nothing was spawned
        assert_eq!(rng.0.len(), 1);
        assert_eq!(state.score, 36);
    }

    #[test]
    fn test_spawn_uses_score_after_merge() {
        let mut grid = EMPTY_BOARD;
        grid[0] = [256, 256, 0, 0];
        let state = state_with(grid, 490);
        let next = state
            .apply(GameAction::Move(Direction::Left), &mut Scripted::new(&[0.0]))
            .unwrap();
        assert_eq!(next.score, 1002);
        assert_eq!(next.board[0], [512, 8, 0, 0]);
    }

    #[test]
    fn test_game_over_freezes_moves() {
        let stuck = [
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ];
        let state = state_with(stuck, 100);
        assert!(state.is_game_over());
        for dir in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            assert_matches!(state.apply(GameAction::Move(dir), &mut Scripted::new(&[])), None);
        }
    }

    #[test]
    fn test_merge_leaves_pairs_playable() {
        let grid = [
            [2, 2, 4, 8],
            [4, 8, 16, 32],
            [8, 16, 32, 64],
            [16, 32, 64, 128],
        ];
        let state = state_with(grid, 0);
        // left merges the 2s: [4,4,8,0] still has a pair, so the game continues
        let next = state
            .apply(GameAction::Move(Direction::Left), &mut Scripted::new(&[0.0]))
            .unwrap();
        assert_eq!(next.board[0], [4, 4, 8, 2]);
        assert!(!next.is_game_over());
    }

    #[test]
    fn test_restart_resets_score_and_keeps_policy() {
        let mut state = state_with([[2, 4, 8, 16]; 4], 4_000);
        state.config.spawn_policy = SpawnPolicy::Classic;
        state.moves = 40;
        let next = state
            .apply(GameAction::Restart, &mut Scripted::new(&[0.0, 0.0, 0.0, 0.0]))
            .unwrap();
        assert_eq!(next.score, 0);
        assert_eq!(next.moves, 0);
        assert_eq!(next.config.spawn_policy, SpawnPolicy::Classic);
        assert_eq!(board::empty_cells(&next.board).len(), 14);
        assert_eq!(next.best_tile(), 2);
    }

    #[test]
    fn test_set_spawn_policy() {
        let state = state_with(EMPTY_BOARD, 0);
        let mut rng = Scripted::new(&[]);
        assert_matches!(
            state.apply(GameAction::SetSpawnPolicy(SpawnPolicy::ScoreIndexed), &mut rng),
            None
        );
        let next = state
            .apply(GameAction::SetSpawnPolicy(SpawnPolicy::Classic), &mut rng)
            .unwrap();
        assert_eq!(next.config.spawn_policy, SpawnPolicy::Classic);
        assert_eq!(next.board, state.board);
    }
}
