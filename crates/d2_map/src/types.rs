//! Output model for extracted map areas
//!

use serde::{Deserialize, Serialize};

/// One monster spawn in a map area, with resolved display name and computed stats.
///
/// Resistances are percentages straight from `MonStats.txt`; the hit point bounds
/// are the base hit points scaled by the area's level multiplier, once per server
/// ruleset (closed and open battle.net).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    pub display_name: String,
    pub phys_res: i32,
    pub magic_res: i32,
    pub fire_res: i32,
    pub lightning_res: i32,
    pub cold_res: i32,
    pub poison_res: i32,
    pub min_hp_closed_bnet: i32,
    pub max_hp_closed_bnet: i32,
    pub min_hp_open_bnet: i32,
    pub max_hp_open_bnet: i32,
}

/// A playable map area and its monster roster.
///
/// Monsters appear in `MonStats.txt` order, not spawn slot order. A map with no
/// matching monsters keeps an empty roster rather than being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLevel {
    pub display_name: String,
    pub tier: u8,
    pub monsters: Vec<Monster>,
}
