// Draft domain: players, rosters, the available pool, and session state.

pub mod pick;
pub mod pool;
pub mod roster;
pub mod state;

use thiserror::Error;

use pick::Position;

/// Reasons a draft operation was refused. State is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("no user is logged in")]
    NoActiveUser,

    #[error("unknown player `{label}`")]
    UnknownPlayer { label: String },

    #[error("`{label}` is already on {owner}'s roster")]
    AlreadyAssigned { label: String, owner: String },

    #[error("no open {position} or FLEX slot for `{label}`")]
    NoOpenSlot { label: String, position: Position },

    #[error("`{label}` is not in a {position} slot")]
    NotInSlot { label: String, position: Position },
}
