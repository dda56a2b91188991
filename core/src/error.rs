use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Mine placement gave up after placing {placed} of {requested} mines")]
    PlacementExhausted {
        placed: CellCount,
        requested: CellCount,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
