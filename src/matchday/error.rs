use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("Team already exists: {0}")]
    DuplicateTeam(String),

    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("No scheduled matches to play")]
    EmptySchedule,

    #[error("No matches to undo")]
    EmptyHistory,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LeagueError>;
