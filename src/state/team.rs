use thiserror::Error;
use uuid::Uuid;

use crate::state::stats::{Achievements, Stats};

/// A member of a team roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Unique identifier of the player.
    pub id: Uuid,
    /// Display name.
    pub pseudo: String,
    /// Counters accumulated by this copy of the player.
    pub stats: Stats,
    /// Derived from `stats`; only the stats update paths write it.
    pub achievements: Achievements,
}

impl Player {
    /// Build a fresh player with zeroed stats and no achievements.
    pub fn new(pseudo: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            pseudo,
            stats: Stats::default(),
            achievements: Achievements::default(),
        }
    }

    /// Re-derive achievements after the stats changed.
    pub fn refresh_achievements(&mut self) {
        self.achievements.recompute(&self.stats);
    }
}

/// Error returned by roster mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The player is not part of this roster.
    #[error("player `{player_id}` is not in team `{team_id}`")]
    UnknownPlayer {
        /// Team whose roster was searched.
        team_id: Uuid,
        /// Player that was looked up.
        player_id: Uuid,
    },
    /// A player with the same identifier is already on the roster.
    #[error("player `{player_id}` is already in team `{team_id}`")]
    DuplicatePlayer {
        /// Team whose roster already holds the player.
        team_id: Uuid,
        /// Identifier of the rejected player.
        player_id: Uuid,
    },
}

/// Named roster of players, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// Unique identifier of the team.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Roster in insertion order.
    pub players: Vec<Player>,
    /// Creation rank used to list teams in a stable order.
    pub(crate) ordinal: u64,
}

impl Team {
    /// Build an empty team, allocating a fresh identifier.
    pub fn new(name: String, ordinal: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            players: Vec::new(),
            ordinal,
        }
    }

    /// Append a player at the end of the roster.
    ///
    /// The roster size is not bounded here; the size gate only applies when a
    /// game is created.
    pub fn add_player(&mut self, player: Player) -> Result<&Player, RosterError> {
        if self.player(player.id).is_some() {
            return Err(RosterError::DuplicatePlayer {
                team_id: self.id,
                player_id: player.id,
            });
        }
        self.players.push(player);
        Ok(&self.players[self.players.len() - 1])
    }

    /// Remove a player, keeping the relative order of the others.
    pub fn remove_player(&mut self, player_id: Uuid) -> Result<Player, RosterError> {
        let index = self
            .players
            .iter()
            .position(|player| player.id == player_id)
            .ok_or(RosterError::UnknownPlayer {
                team_id: self.id,
                player_id,
            })?;
        Ok(self.players.remove(index))
    }

    /// Look a roster member up by id.
    pub fn player(&self, player_id: Uuid) -> Option<&Player> {
        self.players.iter().find(|player| player.id == player_id)
    }

    /// Mutable access to a roster member.
    pub fn player_mut(&mut self, player_id: Uuid) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.id == player_id)
    }

    /// Number of players on the roster.
    pub fn size(&self) -> usize {
        self.players.len()
    }
}
