mod club;
mod genus_override;
mod leaderboard_entry;
mod member;
mod scientific_name;
mod species;
mod species_override;
mod submission;

pub use club::Club;
pub use genus_override::GenusOverride;
pub use leaderboard_entry::LeaderboardEntry;
pub use member::Member;
pub use scientific_name::ScientificName;
pub use species::CatalogSpecies;
pub use species_override::SpeciesOverride;
pub use submission::{Submission, SubmissionStatus};
