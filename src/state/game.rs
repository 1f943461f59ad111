use std::time::{Duration, SystemTime};

use thiserror::Error;
use uuid::Uuid;

use crate::state::{
    stats::StatKind,
    team::{Player, Team},
};

/// Inclusive bounds on the number of players per side when a game is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamSizeRange {
    /// Smallest allowed side.
    pub min: usize,
    /// Largest allowed side.
    pub max: usize,
}

impl TeamSizeRange {
    /// Three to five players per side.
    pub const DEFAULT: Self = Self { min: 3, max: 5 };

    /// Whether `size` lies within the bounds.
    pub fn contains(&self, size: usize) -> bool {
        (self.min..=self.max).contains(&size)
    }
}

impl Default for TeamSizeRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Lifecycle phases of a game. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Created and accepting stat increments.
    Open,
    /// Stop time recorded; lifetime aggregates folded in.
    Stopped,
}

/// Operations whose validity depends on the game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Increment a participant's action counter.
    RecordStat,
    /// Stamp the stop time.
    Stop,
    /// Credit a side with the win.
    MarkWinner,
}

/// Error returned when an event is not allowed in the current phase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid transition: {event:?} cannot be applied while in {from:?}")]
pub struct InvalidTransition {
    /// The phase the game was in when the event was received.
    pub from: GamePhase,
    /// The rejected event.
    pub event: GameEvent,
}

/// Reasons a pair of teams cannot face each other.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameSetupError {
    /// Both sides refer to the same team.
    #[error("a team cannot play against itself")]
    SameTeam,
    /// Sides differ in size or fall outside the configured bounds.
    #[error(
        "teams must have the same size between {min} and {max} players (got {team1} and {team2})"
    )]
    InvalidTeamSizes {
        /// Players on the first side.
        team1: usize,
        /// Players on the second side.
        team2: usize,
        /// Configured lower bound.
        min: usize,
        /// Configured upper bound.
        max: usize,
    },
}

/// Errors raised by operations on an existing game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The event is not allowed in the game's phase.
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),
    /// The player is on neither side.
    #[error("player `{player_id}` does not take part in game `{game_id}`")]
    UnknownPlayer {
        /// Game that was searched.
        game_id: Uuid,
        /// Player that was looked up.
        player_id: Uuid,
    },
    /// The team is neither side.
    #[error("team `{team_id}` does not take part in game `{game_id}`")]
    UnknownTeam {
        /// Game that was searched.
        game_id: Uuid,
        /// Team that was looked up.
        team_id: Uuid,
    },
    /// A winner was already recorded.
    #[error("game `{game_id}` already has a winner (`{winner}`)")]
    WinnerAlreadyMarked {
        /// Game that already has a winner.
        game_id: Uuid,
        /// Side recorded as winner.
        winner: Uuid,
    },
}

/// A match between two team snapshots.
///
/// `team1` and `team2` are owned copies taken at creation time. Later edits to
/// the live teams are not reflected here, and in-game stats never flow back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Unique identifier of the game.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// First side, copied at creation.
    pub team1: Team,
    /// Second side, copied at creation.
    pub team2: Team,
    /// Set when the game is created.
    pub start_time: SystemTime,
    /// Unset while the game is open.
    pub stop_time: Option<SystemTime>,
    /// Side marked as winner after the game stopped, if any.
    pub winner: Option<Uuid>,
    pub(crate) ordinal: u64,
}

impl Game {
    /// Pair two team snapshots, checking they are distinct and correctly sized.
    pub fn new(
        name: String,
        team1: Team,
        team2: Team,
        sizes: TeamSizeRange,
        ordinal: u64,
    ) -> Result<Self, GameSetupError> {
        if team1.id == team2.id {
            return Err(GameSetupError::SameTeam);
        }

        let game = Self {
            id: Uuid::new_v4(),
            name,
            team1,
            team2,
            start_time: SystemTime::now(),
            stop_time: None,
            winner: None,
            ordinal,
        };

        if !game.team_sizes_are_valid(sizes) {
            return Err(GameSetupError::InvalidTeamSizes {
                team1: game.team1.size(),
                team2: game.team2.size(),
                min: sizes.min,
                max: sizes.max,
            });
        }

        Ok(game)
    }

    /// Both sides have the same number of players and that number is within `sizes`.
    pub fn team_sizes_are_valid(&self, sizes: TeamSizeRange) -> bool {
        self.team1.size() == self.team2.size() && sizes.contains(self.team1.size())
    }

    /// `Stopped` once a stop time is recorded.
    pub fn phase(&self) -> GamePhase {
        match self.stop_time {
            Some(_) => GamePhase::Stopped,
            None => GamePhase::Open,
        }
    }

    /// Whole seconds between start and stop, once stopped.
    pub fn duration(&self) -> Option<u64> {
        self.stop_time.map(|stop| elapsed_seconds(self.start_time, stop))
    }

    /// Look a participant up in either snapshot.
    pub fn player(&self, player_id: Uuid) -> Option<&Player> {
        self.team1
            .player(player_id)
            .or_else(|| self.team2.player(player_id))
    }

    fn player_mut(&mut self, player_id: Uuid) -> Option<&mut Player> {
        if self.team1.player(player_id).is_some() {
            self.team1.player_mut(player_id)
        } else {
            self.team2.player_mut(player_id)
        }
    }

    fn players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.team1
            .players
            .iter_mut()
            .chain(self.team2.players.iter_mut())
    }

    fn ensure_phase(&self, expected: GamePhase, event: GameEvent) -> Result<(), InvalidTransition> {
        let from = self.phase();
        if from != expected {
            return Err(InvalidTransition { from, event });
        }
        Ok(())
    }

    /// Increment an action counter on a participant's in-game copy.
    pub fn record_stat(&mut self, player_id: Uuid, kind: StatKind) -> Result<&Player, GameError> {
        self.ensure_phase(GamePhase::Open, GameEvent::RecordStat)?;

        let game_id = self.id;
        let player = self
            .player_mut(player_id)
            .ok_or(GameError::UnknownPlayer { game_id, player_id })?;
        player.stats.increment(kind);
        player.refresh_achievements();
        Ok(&*player)
    }

    /// Stop the game now. See [`Game::stop_at`].
    pub fn stop(&mut self) -> Result<u64, InvalidTransition> {
        self.stop_at(SystemTime::now())
    }

    /// Stamp the stop time and fold the game into every participant's
    /// lifetime aggregates. Returns the game duration in whole seconds.
    ///
    /// The aggregates land on this game's copies only. Each new game starts
    /// from the live roster, whose players never accumulate aggregates, so a
    /// snapshot never exceeds one game played or one win. The Veteran and
    /// BigWinner thresholds are therefore unreachable through games alone.
    pub fn stop_at(&mut self, now: SystemTime) -> Result<u64, InvalidTransition> {
        self.ensure_phase(GamePhase::Open, GameEvent::Stop)?;

        self.stop_time = Some(now);
        let seconds = elapsed_seconds(self.start_time, now);
        for player in self.players_mut() {
            player.stats.record_game(seconds);
            player.refresh_achievements();
        }
        Ok(seconds)
    }

    /// Credit a win to every player of one side. Allowed once, after the game stopped.
    pub fn mark_winner(&mut self, team_id: Uuid) -> Result<(), GameError> {
        self.ensure_phase(GamePhase::Stopped, GameEvent::MarkWinner)?;

        if let Some(winner) = self.winner {
            return Err(GameError::WinnerAlreadyMarked {
                game_id: self.id,
                winner,
            });
        }

        let side = if self.team1.id == team_id {
            &mut self.team1
        } else if self.team2.id == team_id {
            &mut self.team2
        } else {
            return Err(GameError::UnknownTeam {
                game_id: self.id,
                team_id,
            });
        };

        for player in side.players.iter_mut() {
            player.stats.record_win();
            player.refresh_achievements();
        }
        self.winner = Some(team_id);
        Ok(())
    }
}

fn elapsed_seconds(start: SystemTime, stop: SystemTime) -> u64 {
    stop.duration_since(start).unwrap_or(Duration::ZERO).as_secs()
}
