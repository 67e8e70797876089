//! Client-side filtering of the vehicle snapshot.
//!
//! Three independent case-insensitive substring filters (plate, make, model)
//! combined with logical AND. An empty filter field matches everything.

use crate::vehicle::Vehicle;

/// Which filter input is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterField {
    #[default]
    Plate,
    Make,
    Model,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [FilterField::Plate, FilterField::Make, FilterField::Model];

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Plate => "Placa",
            FilterField::Make => "Marca",
            FilterField::Model => "Modelo",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FilterField::Plate => FilterField::Make,
            FilterField::Make => FilterField::Model,
            FilterField::Model => FilterField::Plate,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FilterField::Plate => FilterField::Model,
            FilterField::Make => FilterField::Plate,
            FilterField::Model => FilterField::Make,
        }
    }

    fn value_of<'a>(&self, vehicle: &'a Vehicle) -> &'a str {
        match self {
            FilterField::Plate => &vehicle.plate,
            FilterField::Make => &vehicle.make,
            FilterField::Model => &vehicle.model,
        }
    }
}

/// Filter state for the vehicle list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleFilter {
    pub plate: String,
    pub make: String,
    pub model: String,
}

impl VehicleFilter {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Plate => &self.plate,
            FilterField::Make => &self.make,
            FilterField::Model => &self.model,
        }
    }

    pub fn set(&mut self, field: FilterField, text: impl Into<String>) {
        let slot = match field {
            FilterField::Plate => &mut self.plate,
            FilterField::Make => &mut self.make,
            FilterField::Model => &mut self.model,
        };
        *slot = text.into();
    }

    /// True when no field constrains the result
    pub fn is_empty(&self) -> bool {
        FilterField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        FilterField::ALL
            .iter()
            .all(|field| contains_ignore_case(field.value_of(vehicle), self.get(*field)))
    }

    /// Indices into `vehicles` that pass the filter, in snapshot order.
    pub fn apply(&self, vehicles: &[Vehicle]) -> Vec<usize> {
        vehicles
            .iter()
            .enumerate()
            .filter(|(_, v)| self.matches(v))
            .map(|(i, _)| i)
            .collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
