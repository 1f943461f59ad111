use serde::Serialize;
use utoipa::ToSchema;

use crate::state::stats::{Achievements, Stats};

/// Counters accumulated by a player.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatsSummary {
    pub attempted_attacks: u64,
    pub hits: u64,
    pub damage_done: u64,
    pub kills: u64,
    pub first_hit_kills: u64,
    pub assists: u64,
    pub spell_casts: u64,
    pub spell_damage_done: u64,
    pub total_seconds_played: u64,
    pub total_games_played: u64,
    pub total_wins: u64,
}

/// Achievement flags earned by a player.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct AchievementsSummary {
    pub sharpshooter: bool,
    pub bruiser: bool,
    pub veteran: bool,
    pub big_winner: bool,
}

impl From<Stats> for StatsSummary {
    fn from(stats: Stats) -> Self {
        Self {
            attempted_attacks: stats.attempted_attacks,
            hits: stats.hits,
            damage_done: stats.damage_done,
            kills: stats.kills,
            first_hit_kills: stats.first_hit_kills,
            assists: stats.assists,
            spell_casts: stats.spell_casts,
            spell_damage_done: stats.spell_damage_done,
            total_seconds_played: stats.total_seconds_played,
            total_games_played: stats.total_games_played,
            total_wins: stats.total_wins,
        }
    }
}

impl From<Achievements> for AchievementsSummary {
    fn from(achievements: Achievements) -> Self {
        Self {
            sharpshooter: achievements.sharpshooter,
            bruiser: achievements.bruiser,
            veteran: achievements.veteran,
            big_winner: achievements.big_winner,
        }
    }
}
