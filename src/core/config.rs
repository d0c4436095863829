//! Game configuration.
//!
//! A `GameConfig` says who sits in each seat and how the automated
//! seats draw their randomness:
//! - `AgentKind` per seat (human or random)
//! - `seed` for the random agents
//! - `max_human_retries` to cap how often a human may be re-prompted

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::player::Seat;
use crate::error::ConfigError;

/// The closed set of agent variants a seat can be filled with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// Moves entered by a person through an input collaborator.
    Human,
    /// Uniformly random legal moves.
    Random,
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentKind::Human => write!(f, "human"),
            AgentKind::Random => write!(f, "random"),
        }
    }
}

impl FromStr for AgentKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "h" => Ok(AgentKind::Human),
            "random" | "ai" | "cpu" | "r" => Ok(AgentKind::Random),
            other => Err(ConfigError::UnknownAgentKind(other.to_string())),
        }
    }
}

/// Configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Master seed. Each random seat gets its own fork of it.
    pub seed: u64,

    /// Agent in seat 0 (plays X, moves first).
    pub first: AgentKind,

    /// Agent in seat 1 (plays O).
    pub second: AgentKind,

    /// Rejected inputs a human may make per move before giving up.
    /// `None` re-prompts forever.
    pub max_human_retries: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            first: AgentKind::Human,
            second: AgentKind::Random,
            max_human_retries: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_agents(mut self, first: AgentKind, second: AgentKind) -> Self {
        self.first = first;
        self.second = second;
        self
    }

    #[must_use]
    pub fn with_max_human_retries(mut self, max: Option<u32>) -> Self {
        self.max_human_retries = max;
        self
    }

    /// The agent kind configured for a seat.
    #[must_use]
    pub fn agent_kind(&self, seat: Seat) -> AgentKind {
        if seat == Seat::FIRST {
            self.first
        } else {
            self.second
        }
    }
}
