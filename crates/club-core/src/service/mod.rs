//! Services wrapping a [`ClubStore`](crate::store::ClubStore).
//!
//! Services add ownership checks on top of the raw store calls. They never
//! treat "not found" as an error on lookups; the caller decides what a
//! missing row means.

mod achievements;
mod dictators;

pub use achievements::AchievementService;
pub use dictators::DictatorService;
