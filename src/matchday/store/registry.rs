use crate::error::{LeagueError, Result};
use crate::model::{Team, TeamId};

/// The team registry: append-only, unique names, insertion order.
///
/// Name lookup is a linear scan. Leagues are tens of teams, so no secondary
/// index is kept.
#[derive(Debug, Default)]
pub struct TeamRegistry {
    teams: Vec<Team>,
}

impl TeamRegistry {
    /// Adds a team with zeroed statistics. Names are case-sensitive and must
    /// be unique; on a duplicate the registry is left unchanged.
    pub fn add(&mut self, name: &str) -> Result<TeamId> {
        if self.find(name).is_some() {
            return Err(LeagueError::DuplicateTeam(name.to_string()));
        }
        self.teams.push(Team::new(name));
        Ok(TeamId(self.teams.len() - 1))
    }

    pub fn find(&self, name: &str) -> Option<TeamId> {
        self.teams.iter().position(|t| t.name == name).map(TeamId)
    }

    pub fn get(&self, id: TeamId) -> &Team {
        &self.teams[id.0]
    }

    pub fn get_mut(&mut self, id: TeamId) -> &mut Team {
        &mut self.teams[id.0]
    }

    /// All teams in insertion order. Callers that need a ranking impose
    /// their own order (see [`crate::ranking`]).
    pub fn all(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
