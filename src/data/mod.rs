//! Repository layer over the relational store.
//!
//! Each repository is generic over [`sea_orm::ConnectionTrait`] so the same
//! code runs against the live connection or inside a transaction. Sync passes
//! always go through a transaction so a failed batch rolls back whole.

pub mod game;
pub mod player;
pub mod player_stats;
pub mod refresh;
pub mod team;
pub mod team_stats;
