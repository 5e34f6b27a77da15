pub mod health;
pub mod lineups;
pub mod performance;
pub mod player_search;
pub mod spotlight;
pub mod transactions;
