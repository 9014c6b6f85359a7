use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconCategory {
    Gun,
    Grenade,
    Rocket,
    Melee,
    Vehicle,
    Boat,
}

impl IconCategory {
    pub fn icon(&self) -> &'static str {
        match self {
            IconCategory::Gun => "🔫",
            IconCategory::Grenade => "💣",
            IconCategory::Rocket => "🚀",
            IconCategory::Melee => "🔪",
            IconCategory::Vehicle => "🚙",
            IconCategory::Boat => "🚤",
        }
    }
}

const STANDARD_WEAPONS: &[(&str, IconCategory)] = &[
    ("Falcon", IconCategory::Gun),
    ("Shotgun", IconCategory::Gun),
    ("P90", IconCategory::Gun),
    ("MP5", IconCategory::Gun),
    ("MG", IconCategory::Gun),
    ("M4", IconCategory::Gun),
    ("AG36", IconCategory::Gun),
    ("OICW", IconCategory::Gun),
    ("SniperRifle", IconCategory::Gun),
    ("M249", IconCategory::Gun),
    ("VehicleMountedAutoMG", IconCategory::Gun),
    ("VehicleMountedMG", IconCategory::Gun),
    ("HandGrenade", IconCategory::Grenade),
    ("AG36Grenade", IconCategory::Grenade),
    ("OICWGrenade", IconCategory::Grenade),
    ("StickyExplosive", IconCategory::Grenade),
    ("Rocket", IconCategory::Rocket),
    ("VehicleMountedRocketMG", IconCategory::Rocket),
    ("VehicleRocket", IconCategory::Rocket),
    ("Machete", IconCategory::Melee),
    ("Vehicle", IconCategory::Vehicle),
    ("Boat", IconCategory::Boat),
];

/// Weapon code → icon category.
///
/// Built once and handed to the renderer by value. Codes are matched
/// case-sensitively, exactly as the engine writes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaponIconTable {
    entries: HashMap<String, IconCategory>,
}

impl WeaponIconTable {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Every weapon code seen across the known log dialects.
    pub fn standard() -> Self {
        let entries = STANDARD_WEAPONS
            .iter()
            .map(|(code, cat)| (code.to_string(), *cat))
            .collect();
        Self { entries }
    }

    /// Standard table with `overrides` merged on top (new codes added,
    /// existing ones re-categorised).
    pub fn with_overrides(overrides: &BTreeMap<String, IconCategory>) -> Self {
        let mut table = Self::standard();
        for (code, cat) in overrides {
            table.insert(code, *cat);
        }
        table
    }

    pub fn insert(&mut self, code: &str, category: IconCategory) {
        self.entries.insert(code.to_string(), category);
    }

    pub fn lookup(&self, code: &str) -> AppResult<IconCategory> {
        self.entries
            .get(code)
            .copied()
            .ok_or_else(|| AppError::UnknownWeaponCode(code.to_string()))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for WeaponIconTable {
    fn default() -> Self {
        Self::standard()
    }
}
