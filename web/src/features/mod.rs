pub mod catalog;
pub mod clubs;
pub mod leaderboard;
pub mod members;
pub mod overrides;
pub mod submissions;
