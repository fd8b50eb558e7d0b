use serde::{Deserialize, Deserializer, Serialize, de};
use uuid::Uuid;

/// Category of a unit, either in the catalog or in a roster.
///
/// Only the exact lowercase literal `"hero"` is a hero. Any other value is
/// kept verbatim so that partially specified rosters round-trip unchanged.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UnitCategory {
    Hero,
    #[default]
    Unit,
    Other(String),
}

impl UnitCategory {
    pub fn is_hero(&self) -> bool {
        matches!(self, UnitCategory::Hero)
    }
}

impl From<String> for UnitCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "hero" => UnitCategory::Hero,
            "unit" => UnitCategory::Unit,
            _ => UnitCategory::Other(value),
        }
    }
}

impl From<UnitCategory> for String {
    fn from(value: UnitCategory) -> Self {
        match value {
            UnitCategory::Hero => "hero".to_string(),
            UnitCategory::Unit => "unit".to_string(),
            UnitCategory::Other(other) => other,
        }
    }
}

/// An upgrade option picked for a roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedUpgrade {
    #[serde(default, deserialize_with = "null_as_default")]
    pub group: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub option_name: String,
    #[serde(default, deserialize_with = "lenient_cost")]
    pub cost: i64,
}

/// A unit selected into an army.
///
/// Every field is optional on the wire: the point accounting treats missing
/// costs as zero and a missing category as "not a hero". Costs may be sent
/// as whole-valued floats (`400.0`).
///
/// A missing `id` stays `None` here; stored armies fill it in through
/// [`RosterUnit::ensure_id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit_name: String,
    #[serde(default)]
    pub unit_type: Option<UnitCategory>,
    #[serde(default, deserialize_with = "lenient_cost")]
    pub base_cost: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub selected_upgrades: Vec<SelectedUpgrade>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub combined_unit: bool,
    #[serde(default, deserialize_with = "lenient_cost")]
    pub total_cost: Option<i64>,
}

impl RosterUnit {
    pub fn is_hero(&self) -> bool {
        self.unit_type.as_ref().is_some_and(UnitCategory::is_hero)
    }

    /// The cost this entry counts for: `total_cost`, else `base_cost`, else 0.
    pub fn effective_cost(&self) -> i64 {
        self.total_cost.or(self.base_cost).unwrap_or(0)
    }

    /// Gives the entry a fresh UUID if it has none.
    pub fn ensure_id(&mut self) {
        if self.id.is_none() {
            self.id = Some(Uuid::new_v4().to_string());
        }
    }
}

/// A JSON number that must hold a whole value.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireCost {
    Int(i64),
    Float(f64),
}

impl WireCost {
    fn into_points<E: de::Error>(self) -> Result<i64, E> {
        match self {
            WireCost::Int(points) => Ok(points),
            WireCost::Float(points)
                if points.fract() == 0.0 && points.abs() <= i64::MAX as f64 =>
            {
                Ok(points as i64)
            }
            WireCost::Float(points) => Err(E::invalid_value(
                de::Unexpected::Float(points),
                &"a whole number of points",
            )),
        }
    }
}

/// Reads a cost as an integer, accepting whole-valued floats and treating
/// `null` as the default.
fn lenient_cost<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + From<i64>,
{
    match Option::<WireCost>::deserialize(deserializer)? {
        Some(cost) => cost.into_points().map(T::from),
        None => Ok(T::default()),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
