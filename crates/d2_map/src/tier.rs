//! Map tier classification rules
//!

/// The 1-5 tier of a map area, decoded from the `type` code of a `Misc.txt` record.
///
/// Tier rules differ: tiers 1 through 4 only count as maps when their record is
/// flagged spawnable, while unique maps (tier 5) ship with `spawnable=0` and are
/// included regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTier {
    Tier1,
    Tier2,
    Tier3,
    Tier4,
    Unique,
}

impl MapTier {
    /// Decode a `Misc.txt` type code, returning `None` for anything that is not a map.
    pub fn from_code(code: &str) -> Option<MapTier> {
        match code {
            "t1m" => Some(MapTier::Tier1),
            "t2m" => Some(MapTier::Tier2),
            "t3m" => Some(MapTier::Tier3),
            "t4m" => Some(MapTier::Tier4),
            "t5m" => Some(MapTier::Unique),
            _ => None,
        }
    }

    /// Numeric tier as it appears in the output.
    pub fn level(self) -> u8 {
        match self {
            MapTier::Tier1 => 1,
            MapTier::Tier2 => 2,
            MapTier::Tier3 => 3,
            MapTier::Tier4 => 4,
            MapTier::Unique => 5,
        }
    }

    /// Whether a record with this tier and `spawnable` field qualifies as a map.
    pub fn spawns(self, spawnable: &str) -> bool {
        match self {
            MapTier::Unique => true,
            _ => spawnable == "1",
        }
    }
}

#[cfg(test)]
mod test {
    use crate::tier::MapTier;

    #[test]
    fn decode_tier_codes() {
        assert_eq!(MapTier::from_code("t1m"), Some(MapTier::Tier1));
        assert_eq!(MapTier::from_code("t5m"), Some(MapTier::Unique));
        assert_eq!(MapTier::from_code("tsc"), None);
        assert_eq!(MapTier::from_code(""), None);
    }

    #[test]
    fn unique_maps_ignore_spawnable() {
        assert!(MapTier::Unique.spawns("0"));
        assert!(MapTier::Unique.spawns(""));
    }

    #[test]
    fn lower_tiers_require_spawnable() {
        assert!(MapTier::Tier1.spawns("1"));
        assert!(!MapTier::Tier1.spawns("0"));
        assert!(!MapTier::Tier4.spawns(""));
    }
}
