pub mod performance;
pub mod roster;
pub mod transaction;

pub use performance::PlayerPerformance;
pub use roster::RosterSnapshot;
pub use transaction::{MovementType, Transaction};
