pub mod aggregation;
pub mod backfill;
pub mod capability;
pub mod resolution;
