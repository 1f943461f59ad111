//! Per-player counters and the achievements derived from them.

use std::str::FromStr;

use crate::error::ServiceError;

/// Minimum combined physical and spell damage for [`Achievements::bruiser`].
pub const BRUISER_DAMAGE_THRESHOLD: u64 = 500;
/// Minimum number of games played for [`Achievements::veteran`].
pub const VETERAN_GAMES_THRESHOLD: u64 = 1000;
/// Minimum number of wins for [`Achievements::big_winner`].
pub const BIG_WINNER_WINS_THRESHOLD: u64 = 200;

/// Action counters a caller may increment while a game is open.
///
/// Lifetime aggregates are deliberately absent: they are only ever written by
/// the game stop and winner marking paths.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum StatKind {
    /// Attacks attempted, hit or miss.
    #[strum(to_string = "attemptedAttacks", serialize = "attempted_attacks")]
    AttemptedAttacks,
    /// Attacks that landed.
    #[strum(to_string = "hits")]
    Hits,
    /// Physical damage dealt.
    #[strum(to_string = "damageDone", serialize = "damage_done")]
    DamageDone,
    /// Opponents eliminated.
    #[strum(to_string = "kills")]
    Kills,
    /// Opponents eliminated with a single hit.
    #[strum(to_string = "firstHitKills", serialize = "first_hit_kills")]
    FirstHitKills,
    /// Eliminations the player contributed to.
    #[strum(to_string = "assists")]
    Assists,
    /// Spells cast.
    #[strum(to_string = "spellCasts", serialize = "spell_casts")]
    SpellCasts,
    /// Damage dealt through spells.
    #[strum(to_string = "spellDamageDone", serialize = "spell_damage_done")]
    SpellDamageDone,
}

impl StatKind {
    /// Parse a caller supplied stat name, rejecting anything that is not an action counter.
    pub fn parse(name: &str) -> Result<Self, ServiceError> {
        Self::from_str(name.trim()).map_err(|_| {
            ServiceError::InvalidArgument(format!("`{name}` is not an incrementable stat"))
        })
    }
}

/// Numeric counters accumulated by a player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Attacks attempted, hit or miss.
    pub attempted_attacks: u64,
    /// Attacks that landed.
    pub hits: u64,
    /// Physical damage dealt.
    pub damage_done: u64,
    /// Opponents eliminated.
    pub kills: u64,
    /// Opponents eliminated with a single hit.
    pub first_hit_kills: u64,
    /// Eliminations the player contributed to.
    pub assists: u64,
    /// Spells cast.
    pub spell_casts: u64,
    /// Damage dealt through spells.
    pub spell_damage_done: u64,
    /// Seconds spent in stopped games.
    pub total_seconds_played: u64,
    /// Stopped games the player took part in.
    pub total_games_played: u64,
    /// Games won by the player's side.
    pub total_wins: u64,
}

impl Stats {
    /// Bump a single action counter by one.
    pub fn increment(&mut self, kind: StatKind) {
        let counter = match kind {
            StatKind::AttemptedAttacks => &mut self.attempted_attacks,
            StatKind::Hits => &mut self.hits,
            StatKind::DamageDone => &mut self.damage_done,
            StatKind::Kills => &mut self.kills,
            StatKind::FirstHitKills => &mut self.first_hit_kills,
            StatKind::Assists => &mut self.assists,
            StatKind::SpellCasts => &mut self.spell_casts,
            StatKind::SpellDamageDone => &mut self.spell_damage_done,
        };
        *counter = counter.saturating_add(1);
    }

    /// Current value of an action counter.
    pub fn get(&self, kind: StatKind) -> u64 {
        match kind {
            StatKind::AttemptedAttacks => self.attempted_attacks,
            StatKind::Hits => self.hits,
            StatKind::DamageDone => self.damage_done,
            StatKind::Kills => self.kills,
            StatKind::FirstHitKills => self.first_hit_kills,
            StatKind::Assists => self.assists,
            StatKind::SpellCasts => self.spell_casts,
            StatKind::SpellDamageDone => self.spell_damage_done,
        }
    }

    /// Fold one finished game of `seconds` into the lifetime aggregates.
    pub(crate) fn record_game(&mut self, seconds: u64) {
        self.total_seconds_played = self.total_seconds_played.saturating_add(seconds);
        self.total_games_played = self.total_games_played.saturating_add(1);
    }

    /// Count one more win.
    pub(crate) fn record_win(&mut self) {
        self.total_wins = self.total_wins.saturating_add(1);
    }
}

/// Flags derived from a [`Stats`] snapshot. Once set, a flag stays set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Achievements {
    /// At least three hits out of four attempted attacks.
    pub sharpshooter: bool,
    /// Physical plus spell damage reached [`BRUISER_DAMAGE_THRESHOLD`].
    pub bruiser: bool,
    /// Games played reached [`VETERAN_GAMES_THRESHOLD`].
    pub veteran: bool,
    /// Wins reached [`BIG_WINNER_WINS_THRESHOLD`].
    pub big_winner: bool,
}

impl Achievements {
    /// Flags earned by `stats` alone, without regard to previous values.
    pub fn derive(stats: &Stats) -> Self {
        Self {
            sharpshooter: is_sharpshooter(stats),
            bruiser: stats.damage_done.saturating_add(stats.spell_damage_done)
                >= BRUISER_DAMAGE_THRESHOLD,
            veteran: stats.total_games_played >= VETERAN_GAMES_THRESHOLD,
            big_winner: stats.total_wins >= BIG_WINNER_WINS_THRESHOLD,
        }
    }

    /// Merge freshly derived flags into the current ones without clearing any.
    pub fn recompute(&mut self, stats: &Stats) {
        let earned = Self::derive(stats);
        self.sharpshooter |= earned.sharpshooter;
        self.bruiser |= earned.bruiser;
        self.veteran |= earned.veteran;
        self.big_winner |= earned.big_winner;
    }
}

/// Hit ratio of at least 75%, compared exactly as `hits / attempted >= 3 / 4`.
fn is_sharpshooter(stats: &Stats) -> bool {
    stats.hits > 0
        && u128::from(stats.hits) * 4 >= u128::from(stats.attempted_attacks) * 3
}
