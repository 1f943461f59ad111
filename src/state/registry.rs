//! Owner of the live team collection and the game collection.
//!
//! Every entity lives in a [`DashMap`] entry, so a read-modify-write on one
//! team or one game runs under that entry's exclusive guard from lookup to
//! write-back. No method awaits; each call is a single atomic step. Callers
//! only ever receive owned snapshots, never handles into the maps.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use uuid::Uuid;

use crate::{
    error::ServiceError,
    state::{
        game::{Game, TeamSizeRange},
        stats::{Achievements, StatKind, Stats},
        team::{Player, Team},
    },
};

/// Process-wide store of teams and games.
pub struct Registry {
    teams: DashMap<Uuid, Team>,
    games: DashMap<Uuid, Game>,
    next_ordinal: AtomicU64,
    team_sizes: TeamSizeRange,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(TeamSizeRange::DEFAULT)
    }
}

impl Registry {
    /// Create an empty registry enforcing `team_sizes` when games are created.
    pub fn new(team_sizes: TeamSizeRange) -> Self {
        Self {
            teams: DashMap::new(),
            games: DashMap::new(),
            next_ordinal: AtomicU64::new(0),
            team_sizes,
        }
    }

    /// Bounds enforced when a game is created.
    pub fn team_sizes(&self) -> TeamSizeRange {
        self.team_sizes
    }

    /// Number of live teams.
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Number of games, open or stopped.
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    fn next_ordinal(&self) -> u64 {
        self.next_ordinal.fetch_add(1, Ordering::Relaxed)
    }

    // -----------------------------------------------------------------------
    // Teams
    // -----------------------------------------------------------------------

    /// Register a new, empty team.
    pub fn create_team(&self, name: &str) -> Result<Team, ServiceError> {
        let name = require_non_blank(name, "team name")?;
        let team = Team::new(name, self.next_ordinal());
        self.teams.insert(team.id, team.clone());
        Ok(team)
    }

    /// Remove a team. Games that already embed a copy of it are untouched.
    pub fn delete_team(&self, id: Uuid) -> Result<(), ServiceError> {
        self.teams
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| team_not_found(id))
    }

    /// Snapshot of every team, in creation order.
    pub fn list_teams(&self) -> Vec<Team> {
        let mut teams: Vec<Team> = self
            .teams
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        teams.sort_by_key(|team| team.ordinal);
        teams
    }

    /// Snapshot of one team.
    pub fn get_team(&self, id: Uuid) -> Result<Team, ServiceError> {
        self.teams
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| team_not_found(id))
    }

    /// Append a new player to a team roster.
    pub fn add_player(&self, team_id: Uuid, pseudo: &str) -> Result<Player, ServiceError> {
        let pseudo = require_non_blank(pseudo, "player pseudo")?;
        let mut team = self
            .teams
            .get_mut(&team_id)
            .ok_or_else(|| team_not_found(team_id))?;
        let player = team.add_player(Player::new(pseudo))?;
        Ok(player.clone())
    }

    /// Drop a player from a team roster, keeping the others in order.
    pub fn remove_player(&self, team_id: Uuid, player_id: Uuid) -> Result<(), ServiceError> {
        let mut team = self
            .teams
            .get_mut(&team_id)
            .ok_or_else(|| team_not_found(team_id))?;
        team.remove_player(player_id)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Games
    // -----------------------------------------------------------------------

    /// Start a game between snapshots of two live teams.
    pub fn create_game(
        &self,
        name: &str,
        team1_id: Uuid,
        team2_id: Uuid,
    ) -> Result<Game, ServiceError> {
        let name = require_non_blank(name, "game name")?;
        // Each snapshot is taken under its own short-lived guard.
        let team1 = self.get_team(team1_id)?;
        let team2 = self.get_team(team2_id)?;

        let game = Game::new(name, team1, team2, self.team_sizes, self.next_ordinal())?;
        self.games.insert(game.id, game.clone());
        Ok(game)
    }

    /// Snapshot of every game, in creation order.
    pub fn list_games(&self) -> Vec<Game> {
        let mut games: Vec<Game> = self
            .games
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        games.sort_by_key(|game| game.ordinal);
        games
    }

    /// Snapshot of one game.
    pub fn get_game(&self, id: Uuid) -> Result<Game, ServiceError> {
        self.games
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| game_not_found(id))
    }

    /// Stop an open game and return the updated copy.
    pub fn stop_game(&self, id: Uuid) -> Result<Game, ServiceError> {
        self.update_game(id, |game| {
            game.stop()?;
            Ok(())
        })
    }

    /// Credit the win of a stopped game to one of its sides.
    pub fn mark_winner(&self, game_id: Uuid, team_id: Uuid) -> Result<Game, ServiceError> {
        self.update_game(game_id, |game| Ok(game.mark_winner(team_id)?))
    }

    /// Increment a counter, given by name, on a player's in-game copy.
    ///
    /// The name is validated before the game is looked up.
    pub fn increment_player_stat(
        &self,
        game_id: Uuid,
        player_id: Uuid,
        stat_name: &str,
    ) -> Result<Player, ServiceError> {
        let kind = StatKind::parse(stat_name)?;
        self.record_stat(game_id, player_id, kind)
    }

    /// Increment an already parsed counter on a participant of an open game.
    pub fn record_stat(
        &self,
        game_id: Uuid,
        player_id: Uuid,
        kind: StatKind,
    ) -> Result<Player, ServiceError> {
        let mut game = self
            .games
            .get_mut(&game_id)
            .ok_or_else(|| game_not_found(game_id))?;
        let player = game.record_stat(player_id, kind)?;
        Ok(player.clone())
    }

    /// Counters of a participant, as recorded in that game.
    pub fn get_player_stats(&self, game_id: Uuid, player_id: Uuid) -> Result<Stats, ServiceError> {
        self.read_player(game_id, player_id, |player| player.stats.clone())
    }

    /// Achievement flags of a participant, as recorded in that game.
    pub fn get_player_achievements(
        &self,
        game_id: Uuid,
        player_id: Uuid,
    ) -> Result<Achievements, ServiceError> {
        self.read_player(game_id, player_id, |player| player.achievements)
    }

    /// Run `mutate` on a game while holding its entry exclusively.
    fn update_game<F>(&self, id: Uuid, mutate: F) -> Result<Game, ServiceError>
    where
        F: FnOnce(&mut Game) -> Result<(), ServiceError>,
    {
        let mut game = self.games.get_mut(&id).ok_or_else(|| game_not_found(id))?;
        mutate(game.value_mut())?;
        Ok(game.clone())
    }

    fn read_player<T>(
        &self,
        game_id: Uuid,
        player_id: Uuid,
        project: impl FnOnce(&Player) -> T,
    ) -> Result<T, ServiceError> {
        let game = self
            .games
            .get(&game_id)
            .ok_or_else(|| game_not_found(game_id))?;
        game.player(player_id).map(project).ok_or_else(|| {
            ServiceError::NotFound(format!(
                "player `{player_id}` not found in game `{game_id}`"
            ))
        })
    }
}

/// Reject whitespace-only input. Accepted values are stored exactly as given.
fn require_non_blank(value: &str, what: &str) -> Result<String, ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::InvalidArgument(format!(
            "{what} must not be empty"
        )));
    }
    Ok(value.to_owned())
}

fn team_not_found(id: Uuid) -> ServiceError {
    ServiceError::NotFound(format!("team `{id}` not found"))
}

fn game_not_found(id: Uuid) -> ServiceError {
    ServiceError::NotFound(format!("game `{id}` not found"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn registry_with_teams(sizes: &[usize]) -> (Registry, Vec<Uuid>) {
        let registry = Registry::default();
        let ids = sizes
            .iter()
            .enumerate()
            .map(|(index, size)| {
                let team = registry.create_team(&format!("Team {index}")).unwrap();
                for n in 0..*size {
                    registry.add_player(team.id, &format!("p{index}-{n}")).unwrap();
                }
                team.id
            })
            .collect();
        (registry, ids)
    }

    #[test]
    fn create_team_rejects_blank_names() {
        let registry = Registry::default();
        assert!(matches!(
            registry.create_team("   "),
            Err(ServiceError::InvalidArgument(_))
        ));
        assert!(registry.list_teams().is_empty());
    }

    #[test]
    fn names_are_stored_as_given() {
        let registry = Registry::default();
        let team = registry.create_team("  Liquid  ").unwrap();
        assert_eq!(team.name, "  Liquid  ");
        let player = registry.add_player(team.id, " EliGE").unwrap();
        assert_eq!(player.pseudo, " EliGE");
        assert_eq!(registry.get_team(team.id).unwrap().players[0].pseudo, " EliGE");
    }

    #[test]
    fn list_teams_keeps_creation_order() {
        let registry = Registry::default();
        for name in ["NaVi", "G2", "FaZe", "MOUZ"] {
            registry.create_team(name).unwrap();
        }
        let names: Vec<_> = registry.list_teams().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["NaVi", "G2", "FaZe", "MOUZ"]);
    }

    #[test]
    fn delete_team_happens_at_most_once() {
        let registry = Registry::default();
        let team = registry.create_team("Astralis").unwrap();

        registry.delete_team(team.id).unwrap();
        assert!(matches!(
            registry.delete_team(team.id),
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            registry.get_team(team.id),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn add_then_remove_restores_roster() {
        let (registry, ids) = registry_with_teams(&[2]);
        let roster_ids = |registry: &Registry| -> HashSet<Uuid> {
            let team = registry.get_team(ids[0]).unwrap();
            team.players.iter().map(|p| p.id).collect()
        };
        let before = roster_ids(&registry);

        let player = registry.add_player(ids[0], "s1mple").unwrap();
        assert_eq!(registry.get_team(ids[0]).unwrap().size(), 3);
        registry.remove_player(ids[0], player.id).unwrap();

        assert_eq!(roster_ids(&registry), before);
    }

    #[test]
    fn roster_operations_report_missing_entities() {
        let (registry, ids) = registry_with_teams(&[1]);
        assert!(matches!(
            registry.add_player(Uuid::new_v4(), "ghost"),
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            registry.add_player(ids[0], ""),
            Err(ServiceError::InvalidArgument(_))
        ));
        assert!(matches!(
            registry.remove_player(ids[0], Uuid::new_v4()),
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            registry.remove_player(Uuid::new_v4(), Uuid::new_v4()),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn create_game_validates_inputs() {
        let (registry, ids) = registry_with_teams(&[3, 3, 4, 2, 2, 6, 6]);

        assert!(registry.create_game("Finals", ids[0], ids[1]).is_ok());
        for (a, b) in [(0, 2), (3, 4), (5, 6)] {
            assert!(matches!(
                registry.create_game("Finals", ids[a], ids[b]),
                Err(ServiceError::InvalidArgument(_))
            ));
        }
        assert!(matches!(
            registry.create_game("Finals", ids[0], ids[0]),
            Err(ServiceError::InvalidArgument(_))
        ));
        assert!(matches!(
            registry.create_game("", ids[0], ids[1]),
            Err(ServiceError::InvalidArgument(_))
        ));
        assert!(matches!(
            registry.create_game("Finals", ids[0], Uuid::new_v4()),
            Err(ServiceError::NotFound(_))
        ));
        assert_eq!(registry.list_games().len(), 1);
    }

    #[test]
    fn game_snapshot_is_decoupled_from_live_team() {
        let (registry, ids) = registry_with_teams(&[3, 3]);
        let game = registry.create_game("Finals", ids[0], ids[1]).unwrap();

        registry.add_player(ids[0], "late-joiner").unwrap();
        registry.delete_team(ids[1]).unwrap();

        let stored = registry.get_game(game.id).unwrap();
        assert_eq!(stored.team1.size(), 3);
        assert_eq!(stored.team2.id, ids[1]);
        assert!(registry.stop_game(game.id).is_ok());
    }

    #[test]
    fn increments_land_on_the_game_copy_only() {
        let (registry, ids) = registry_with_teams(&[3, 3]);
        let game = registry.create_game("Finals", ids[0], ids[1]).unwrap();
        let player_id = game.team1.players[0].id;

        let player = registry
            .increment_player_stat(game.id, player_id, "hits")
            .unwrap();
        assert_eq!(player.stats.hits, 1);
        assert_eq!(registry.get_player_stats(game.id, player_id).unwrap().hits, 1);

        let live = registry.get_team(ids[0]).unwrap();
        assert_eq!(live.player(player_id).unwrap().stats.hits, 0);
    }

    #[test]
    fn increment_rejects_unknown_stat_names() {
        let (registry, ids) = registry_with_teams(&[3, 3]);
        let game = registry.create_game("Finals", ids[0], ids[1]).unwrap();
        let player_id = game.team1.players[0].id;

        for name in ["totalWins", "headshots"] {
            assert!(matches!(
                registry.increment_player_stat(game.id, player_id, name),
                Err(ServiceError::InvalidArgument(_))
            ));
        }
        assert!(matches!(
            registry.increment_player_stat(game.id, Uuid::new_v4(), "hits"),
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            registry.increment_player_stat(Uuid::new_v4(), player_id, "hits"),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn stopped_game_rejects_further_mutation() {
        let (registry, ids) = registry_with_teams(&[3, 3]);
        let game = registry.create_game("Finals", ids[0], ids[1]).unwrap();
        let player_id = game.team2.players[2].id;

        let stopped = registry.stop_game(game.id).unwrap();
        assert!(stopped.stop_time.is_some());
        assert_eq!(
            stopped.player(player_id).unwrap().stats.total_games_played,
            1
        );

        assert!(matches!(
            registry.stop_game(game.id),
            Err(ServiceError::InvalidState(_))
        ));
        assert!(matches!(
            registry.increment_player_stat(game.id, player_id, "kills"),
            Err(ServiceError::InvalidState(_))
        ));
        assert!(matches!(
            registry.stop_game(Uuid::new_v4()),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn mark_winner_flow() {
        let (registry, ids) = registry_with_teams(&[3, 3]);
        let game = registry.create_game("Finals", ids[0], ids[1]).unwrap();

        assert!(matches!(
            registry.mark_winner(game.id, ids[0]),
            Err(ServiceError::InvalidState(_))
        ));
        registry.stop_game(game.id).unwrap();
        assert!(matches!(
            registry.mark_winner(game.id, Uuid::new_v4()),
            Err(ServiceError::InvalidArgument(_))
        ));

        let updated = registry.mark_winner(game.id, ids[0]).unwrap();
        assert_eq!(updated.winner, Some(ids[0]));
        assert!(updated.team1.players.iter().all(|p| p.stats.total_wins == 1));
        assert!(matches!(
            registry.mark_winner(game.id, ids[1]),
            Err(ServiceError::InvalidState(_))
        ));
    }

    #[test]
    fn player_reads_report_missing_game_or_player() {
        let (registry, ids) = registry_with_teams(&[3, 3]);
        let game = registry.create_game("Finals", ids[0], ids[1]).unwrap();
        let player_id = game.team1.players[0].id;
        let missing_game = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        assert!(matches!(
            registry.get_player_stats(missing_game, player_id),
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            registry.get_player_achievements(missing_game, player_id),
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            registry.get_player_stats(game.id, stranger),
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            registry.get_player_achievements(game.id, stranger),
            Err(ServiceError::NotFound(_))
        ));

        assert_eq!(registry.get_player_stats(game.id, player_id).unwrap(), Stats::default());
    }

    #[test]
    fn every_game_starts_from_the_live_roster_aggregates() {
        let (registry, ids) = registry_with_teams(&[3, 3]);
        for name in ["Game 1", "Game 2"] {
            let game = registry.create_game(name, ids[0], ids[1]).unwrap();
            registry.stop_game(game.id).unwrap();
            let game = registry.mark_winner(game.id, ids[0]).unwrap();
            for player in &game.team1.players {
                assert_eq!(player.stats.total_games_played, 1);
                assert_eq!(player.stats.total_wins, 1);
                assert!(!player.achievements.veteran && !player.achievements.big_winner);
            }
        }
        let live = registry.get_team(ids[0]).unwrap();
        assert!(live.players.iter().all(|p| p.stats == Stats::default()));
    }
}
