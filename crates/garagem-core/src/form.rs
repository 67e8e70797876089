//! Vehicle form draft, required-field validation and year coercion.
//!
//! The form layer edits every field as text. Submission turns a draft into a
//! [`VehiclePayload`] in two steps: required-field validation (all five
//! fields), then coercion of the year text to an integer.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::vehicle::{Vehicle, VehiclePayload};

/// The five editable business fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FormField {
    #[default]
    Plate,
    Make,
    Model,
    Year,
    Color,
}

/// Validation failures keyed by field, in display order
pub type FieldErrors = BTreeMap<FormField, String>;

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Plate,
        FormField::Make,
        FormField::Model,
        FormField::Year,
        FormField::Color,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Plate => "Placa",
            FormField::Make => "Marca",
            FormField::Model => "Modelo",
            FormField::Year => "Ano",
            FormField::Color => "Cor",
        }
    }

    /// Wire name, also accepted as `key=value` by the headless runner
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Plate => "placa",
            FormField::Make => "marca",
            FormField::Model => "modelo",
            FormField::Year => "ano",
            FormField::Color => "cor",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        FormField::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn required_message(&self) -> &'static str {
        match self {
            FormField::Plate => "A placa é obrigatória.",
            FormField::Make => "A marca é obrigatória.",
            FormField::Model => "O modelo é obrigatório.",
            FormField::Year => "O ano é obrigatório.",
            FormField::Color => "A cor é obrigatória.",
        }
    }

    /// Input-time character filter: the year only takes ASCII digits.
    pub fn accepts(&self, c: char) -> bool {
        match self {
            FormField::Year => c.is_ascii_digit(),
            _ => !c.is_control(),
        }
    }

    /// Reported when text carries characters [`accepts`](Self::accepts) refuses
    pub fn invalid_chars_message(&self) -> &'static str {
        match self {
            FormField::Year => "O ano deve conter apenas números.",
            _ => "O campo contém caracteres inválidos.",
        }
    }

    pub fn next(&self) -> Self {
        let idx = FormField::ALL.iter().position(|f| f == self).unwrap_or(0);
        FormField::ALL[(idx + 1) % FormField::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = FormField::ALL.iter().position(|f| f == self).unwrap_or(0);
        FormField::ALL[(idx + FormField::ALL.len() - 1) % FormField::ALL.len()]
    }
}

/// Text-backed draft of a vehicle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleForm {
    plate: String,
    make: String,
    model: String,
    year: String,
    color: String,
}

impl VehicleForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate a draft from a fetched vehicle (edit mode)
    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        Self {
            plate: vehicle.plate.clone(),
            make: vehicle.make.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year.to_string(),
            color: vehicle.color.clone(),
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Plate => &self.plate,
            FormField::Make => &self.make,
            FormField::Model => &self.model,
            FormField::Year => &self.year,
            FormField::Color => &self.color,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Plate => &mut self.plate,
            FormField::Make => &mut self.make,
            FormField::Model => &mut self.model,
            FormField::Year => &mut self.year,
            FormField::Color => &mut self.color,
        }
    }

    /// Replace a field's text, dropping characters the field rejects.
    ///
    /// Returns `true` if every character was accepted.
    pub fn set(&mut self, field: FormField, text: &str) -> bool {
        let filtered: String = text.chars().filter(|c| field.accepts(*c)).collect();
        let accepted_all = filtered.chars().count() == text.chars().count();
        *self.slot(field) = filtered;
        accepted_all
    }

    /// Required-field validation. Whitespace-only counts as empty.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let errors: FieldErrors = FormField::ALL
            .iter()
            .filter(|f| self.value(**f).trim().is_empty())
            .map(|f| (*f, f.required_message().to_string()))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate, then build the request body.
    ///
    /// `fallback_year` replaces a year that does not fit an `i32`.
    pub fn to_payload(&self, fallback_year: i32) -> Result<VehiclePayload, FieldErrors> {
        self.validate()?;
        Ok(VehiclePayload {
            plate: self.plate.trim().to_string(),
            make: self.make.trim().to_string(),
            model: self.model.trim().to_string(),
            year: coerce_year(&self.year, fallback_year),
            color: self.color.trim().to_string(),
        })
    }
}

/// Coerce year text to an integer, substituting `fallback` on failure.
pub fn coerce_year(text: &str, fallback: i32) -> i32 {
    text.trim().parse::<i32>().unwrap_or(fallback)
}

/// Current calendar year in local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
