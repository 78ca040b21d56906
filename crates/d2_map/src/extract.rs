//! The join across string tables and data records
//!

use std::collections::HashMap;

use d2_txt::Record;
use tracing::{info, warn};

use crate::{
    error::Result,
    tables::StringTables,
    tier::MapTier,
    types::{MapLevel, Monster},
};

/// Highest numbered `monN` spawn slot column on a `Levels.txt` record.
const MONSTER_SLOTS: usize = 15;

/// Name and tier of a qualifying map, keyed off `Misc.txt` before any level
/// record has been seen.
struct MapDescriptor {
    display_name: String,
    tier: u8,
}

/// Hit point multipliers for one monster level, per server ruleset.
#[derive(Debug, Clone, Copy, Default)]
struct HpMultipliers {
    closed: i32,
    open: i32,
}

/// Join the loaded data files into the list of map areas, in `Levels.txt` order.
///
/// Level records without a qualifying `Misc.txt` entry are skipped; qualifying
/// ones are kept even when no monster matches their spawn slots.
pub fn extract_maps(
    tables: &StringTables,
    monsters: &[Record],
    monster_levels: &[Record],
    misc: &[Record],
    levels: &[Record],
) -> Vec<MapLevel> {
    let descriptors = map_descriptors(misc);
    let multipliers = hp_multipliers(monster_levels);

    let mut output = Vec::new();
    for level in levels {
        let Some(descriptor) = descriptors.get(field(level, "Id")) else {
            // Not a map
            continue;
        };
        info!(
            "found map {} {}",
            field(level, "Name"),
            descriptor.display_name
        );

        let multiplier = multipliers
            .get(field(level, "MonLvl3"))
            .copied()
            .unwrap_or_default();

        let mut map = MapLevel {
            display_name: descriptor.display_name.clone(),
            tier: descriptor.tier,
            monsters: Vec::new(),
        };
        for monster in monsters {
            let name_key = field(monster, "NameStr");
            if name_key.is_empty() {
                continue;
            }
            if !spawns_monster(level, field(monster, "Id")) {
                continue;
            }
            map.monsters
                .push(build_monster(tables, monster, multiplier, name_key));
        }

        output.push(map);
    }

    output
}

/// Encode the extracted maps as JSON.
pub fn to_json(maps: &[MapLevel]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(maps)?)
}

/// Select the `Misc.txt` records that stand for maps, keyed by level id (`len`).
fn map_descriptors(misc: &[Record]) -> HashMap<String, MapDescriptor> {
    let mut descriptors = HashMap::new();
    for item in misc {
        let Some(tier) = MapTier::from_code(field(item, "type")) else {
            continue;
        };
        if !tier.spawns(field(item, "spawnable")) {
            continue;
        }
        descriptors.insert(
            field(item, "len").to_string(),
            MapDescriptor {
                display_name: field(item, "*name").to_string(),
                tier: tier.level(),
            },
        );
    }
    descriptors
}

/// Group `MonLvl.txt` records into multiplier pairs keyed by monster level.
fn hp_multipliers(monster_levels: &[Record]) -> HashMap<String, HpMultipliers> {
    monster_levels
        .iter()
        .map(|record| {
            (
                field(record, "Level").to_string(),
                HpMultipliers {
                    closed: field(record, "HP(H)").parse().unwrap_or_default(),
                    open: field(record, "L-HP(H)").parse().unwrap_or_default(),
                },
            )
        })
        .collect()
}

/// Whether any of the level's spawn slots name this monster id.
fn spawns_monster(level: &Record, id: &str) -> bool {
    (1..=MONSTER_SLOTS).any(|slot| field(level, &format!("mon{slot}")) == id)
}

fn build_monster(
    tables: &StringTables,
    monster: &Record,
    multiplier: HpMultipliers,
    name_key: &str,
) -> Monster {
    let display_name = match tables.resolve(name_key) {
        Some(name) => name.to_string(),
        None => {
            warn!("could not match display name for monster {name_key}");
            name_key.to_string()
        }
    };

    // Base hit points swallow parse errors outright; the resistances below
    // zero explicitly on failure. Both behaviors match the game data's
    // historical handling and must stay distinct.
    let base_min: i32 = field(monster, "minHP").parse().unwrap_or_default();
    let base_max: i32 = field(monster, "maxHP").parse().unwrap_or_default();

    Monster {
        display_name,
        phys_res: parse_res(monster, "ResDm(H)"),
        magic_res: parse_res(monster, "ResMa(H)"),
        fire_res: parse_res(monster, "ResFi(H)"),
        lightning_res: parse_res(monster, "ResLi(H)"),
        cold_res: parse_res(monster, "ResCo(H)"),
        poison_res: parse_res(monster, "ResPo(H)"),
        min_hp_closed_bnet: (multiplier.closed * base_min) / 100,
        max_hp_closed_bnet: (multiplier.closed * base_max) / 100,
        min_hp_open_bnet: (multiplier.open * base_min) / 100,
        max_hp_open_bnet: (multiplier.open * base_max) / 100,
    }
}

/// Resistance percentage from a `MonStats.txt` column, zero when absent or malformed.
fn parse_res(record: &Record, column: &str) -> i32 {
    match field(record, column).parse() {
        Ok(value) => value,
        Err(_) => 0,
    }
}

/// Field access with the original data's semantics: a missing column reads as blank.
fn field<'a>(record: &'a Record, name: &str) -> &'a str {
    record.get(name).map(String::as_str).unwrap_or("")
}
