//! Game-level settings with defaults suitable for the terminal self-play
//! host and for tests.

use std::time::Duration;

/// What happens when a pawn reaches its last row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromotionPolicy {
    /// The pawn becomes a queen and keeps its id.
    #[default]
    AutoQueen,
    /// Promotion is rejected with `ChessErrors::PromotionNotSupported`.
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Minimum time a bot waits before answering.
    pub bot_thinking_time: Duration,
    pub promotion_policy: PromotionPolicy,
    /// Host loops stop after this many plies; the engine itself never ends a game.
    pub max_plies: u16,
    /// Seeds bot randomness. `None` draws a fresh seed.
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bot_thinking_time: Duration::from_secs(1),
            promotion_policy: PromotionPolicy::default(),
            max_plies: 300,
            seed: None,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_auto_queen_and_one_second_bots() {
        let config = GameConfig::default();
        assert_eq!(config.promotion_policy, PromotionPolicy::AutoQueen);
        assert_eq!(config.bot_thinking_time, Duration::from_secs(1));
        assert!(config.seed.is_none());
    }
}
