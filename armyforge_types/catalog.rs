use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::roster::UnitCategory;

/// Armor piercing value of a weapon profile. `"-"` on the wire means none.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawArmorPiercing", into = "RawArmorPiercing")]
pub enum ArmorPiercing {
    #[default]
    None,
    Value(u32),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawArmorPiercing {
    Number(u32),
    Text(String),
}

impl TryFrom<RawArmorPiercing> for ArmorPiercing {
    type Error = String;

    fn try_from(raw: RawArmorPiercing) -> Result<Self, Self::Error> {
        match raw {
            RawArmorPiercing::Number(value) => Ok(ArmorPiercing::Value(value)),
            RawArmorPiercing::Text(text) => match text.trim() {
                "" | "-" => Ok(ArmorPiercing::None),
                other => other
                    .parse::<u32>()
                    .map(ArmorPiercing::Value)
                    .map_err(|_| format!("invalid armor piercing value '{other}'")),
            },
        }
    }
}

impl From<ArmorPiercing> for RawArmorPiercing {
    fn from(value: ArmorPiercing) -> Self {
        match value {
            ArmorPiercing::None => RawArmorPiercing::Text("-".to_string()),
            ArmorPiercing::Value(value) => RawArmorPiercing::Number(value),
        }
    }
}

fn melee_range() -> String {
    "-".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    #[serde(default = "melee_range")]
    pub range: String,
    pub attacks: u32,
    #[serde(default)]
    pub armor_piercing: ArmorPiercing,
    #[serde(default)]
    pub special_rules: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mount {
    pub name: String,
    #[serde(default)]
    pub special_rules: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub cost: u32,
    pub description: String,
    #[serde(default)]
    pub range: String,
    #[serde(default)]
    pub target: String,
}

/// Option of a `weapon` group: swaps in (or adds) a weapon profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponOption {
    pub name: String,
    pub cost: u32,
    pub weapon: Weapon,
    #[serde(default)]
    pub special_rules: Vec<String>,
}

/// Option of a `mount` group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountOption {
    pub name: String,
    pub cost: u32,
    pub mount: Mount,
    #[serde(default)]
    pub special_rules: Vec<String>,
}

/// Option of an `upgrades` group. Some upgrades grant an extra weapon
/// (a flamer carried by a squad member, for instance), never a mount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeOption {
    pub name: String,
    pub cost: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon: Option<Weapon>,
    #[serde(default)]
    pub special_rules: Vec<String>,
}

/// A named set of modifications attachable to a unit template, tagged by
/// `type` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum UpgradeGroup {
    Weapon {
        group: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        options: Vec<WeaponOption>,
    },
    Upgrades {
        group: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        options: Vec<UpgradeOption>,
    },
    Mount {
        group: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        options: Vec<MountOption>,
    },
}

impl UpgradeGroup {
    pub fn name(&self) -> &str {
        match self {
            UpgradeGroup::Weapon { group, .. }
            | UpgradeGroup::Upgrades { group, .. }
            | UpgradeGroup::Mount { group, .. } => group,
        }
    }
}

fn single_model() -> u32 {
    1
}

/// A unit entry of a faction catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitTemplate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    #[serde(rename = "type", default)]
    pub unit_type: UnitCategory,
    #[serde(default = "single_model")]
    pub size: u32,
    pub base_cost: u32,
    pub quality: u8,
    pub defense: u8,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub special_rules: Vec<String>,
    #[serde(default)]
    pub weapons: Vec<Weapon>,
    #[serde(default)]
    pub upgrade_groups: Vec<UpgradeGroup>,
}

fn complete_status() -> String {
    "complete".to_string()
}

/// The content of a faction catalog record, as uploaded or imported.
/// Unknown top-level keys (including any client supplied `id`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionData {
    pub faction: String,
    pub game: String,
    #[serde(default)]
    pub version: String,
    #[serde(default = "complete_status")]
    pub status: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub special_rules_descriptions: BTreeMap<String, String>,
    #[serde(default)]
    pub spells: BTreeMap<String, Spell>,
    #[serde(default)]
    pub units: Vec<UnitTemplate>,
}
