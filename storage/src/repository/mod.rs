pub mod catalog;
pub mod club;
pub mod leaderboard;
pub mod member;
pub mod overrides;
pub mod submissions;
