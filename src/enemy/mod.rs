//! The zombie faction: per-kind heuristics and the spawn policy.

pub mod behavior;
pub mod spawn;

pub use behavior::choose_destination;
pub use spawn::spawn_zombies;
