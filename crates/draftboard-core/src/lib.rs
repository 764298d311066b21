// Library root: draft domain, player data loading, and configuration.

pub mod config;
pub mod draft;
pub mod players;
