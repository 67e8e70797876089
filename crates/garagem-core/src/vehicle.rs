//! Vehicle schema shared by the REST client and every screen.
//!
//! Field names on the wire are the registry's Portuguese keys (`placa`,
//! `marca`, `modelo`, `ano`, `cor`); the Rust side uses English names.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

/// Identifier assigned by the remote store.
///
/// Registries disagree on the id type (json-server hands out strings, SQL
/// backends integers), so both are accepted and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VehicleId {
    Number(i64),
    Text(String),
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleId::Number(n) => write!(f, "{n}"),
            VehicleId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for VehicleId {
    fn from(n: i64) -> Self {
        VehicleId::Number(n)
    }
}

impl From<&str> for VehicleId {
    fn from(s: &str) -> Self {
        VehicleId::Text(s.to_string())
    }
}

impl From<String> for VehicleId {
    fn from(s: String) -> Self {
        VehicleId::Text(s)
    }
}

impl VehicleId {
    /// Parse user input (e.g. a headless command argument).
    ///
    /// Purely numeric input becomes [`VehicleId::Number`], anything else is
    /// kept as text.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        trimmed
            .parse::<i64>()
            .map(VehicleId::Number)
            .unwrap_or_else(|_| VehicleId::Text(trimmed.to_string()))
    }

    /// Whether `other` names the same record.
    ///
    /// `1` and `"1"` are the same record for registries that change id
    /// representation between responses.
    pub fn same_as(&self, other: &VehicleId) -> bool {
        self == other || self.to_string() == other.to_string()
    }
}

/// A vehicle as returned by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    #[serde(rename = "placa")]
    pub plate: String,
    #[serde(rename = "marca")]
    pub make: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "ano", deserialize_with = "deserialize_year")]
    pub year: i32,
    /// Records created before color became mandatory may lack it.
    #[serde(rename = "cor", default)]
    pub color: String,
}

/// Body of create/update requests: the five business fields, no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehiclePayload {
    #[serde(rename = "placa")]
    pub plate: String,
    #[serde(rename = "marca")]
    pub make: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "cor")]
    pub color: String,
}

impl Vehicle {
    /// Build the stored representation of a payload under `id`.
    pub fn from_payload(id: VehicleId, payload: VehiclePayload) -> Self {
        Self {
            id,
            plate: payload.plate,
            make: payload.make,
            model: payload.model,
            year: payload.year,
            color: payload.color,
        }
    }

    pub fn payload(&self) -> VehiclePayload {
        VehiclePayload {
            plate: self.plate.clone(),
            make: self.make.clone(),
            model: self.model.clone(),
            year: self.year,
            color: self.color.clone(),
        }
    }

    /// One-line summary used by lists: "Fiat Uno".
    pub fn title(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearRepr {
    Number(i64),
    Text(String),
}

/// Accept `2010` as well as `"2010"`; some registries store the year as text.
fn deserialize_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match YearRepr::deserialize(deserializer)? {
        YearRepr::Number(n) => i32::try_from(n).map_err(de::Error::custom),
        YearRepr::Text(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|e| de::Error::custom(format!("invalid year '{s}': {e}"))),
    }
}
