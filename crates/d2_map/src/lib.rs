//! This library turns parsed *Diablo II* data into a denormalized description of the game's
//! special "map" areas and the monsters that spawn in them.
//!
//! The inputs are the localized string tables (read with `d2_tbl`) and four tab-delimited
//! data files (read with `d2_txt`):
//!
//! - `Misc.txt` decides which level ids count as maps and at what tier,
//! - `Levels.txt` provides the per-area monster slots,
//! - `MonStats.txt` provides monster definitions with resistances and base hit points,
//! - `MonLvl.txt` provides per-level hit point multipliers for the two server rulesets.
//!
//! [`extract_maps`] joins them into a list of [`MapLevel`] values in `Levels.txt` order, and
//! [`to_json`] encodes that list for persisting.

pub mod error;
pub mod extract;
pub mod tables;
pub mod tier;
pub mod types;

pub use extract::{extract_maps, to_json};
pub use tables::StringTables;
pub use tier::MapTier;
pub use types::{MapLevel, Monster};
