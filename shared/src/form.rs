//! Field-descriptor driven edit form.
//!
//! A record is flattened into string values keyed by its JSON field names,
//! edited as text, validated, and merged back into a copy of the original
//! record through its serde representation.

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::{dates, records::format_number};

/// Input kind of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Decimal number.
    Number,
    /// Free text.
    Text,
    /// Calendar date.
    Date,
    /// One of a fixed set of `(code, label)` pairs.
    Choice(&'static [(&'static str, &'static str)]),
}

/// When a field accepts input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Editable {
    /// Create and update.
    Always,
    /// Only while creating.
    OnCreate,
    /// Display only.
    Never,
}

/// One form field, keyed by the record's JSON field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON key.
    pub key: &'static str,
    /// Label.
    pub label: &'static str,
    /// Input kind.
    pub kind: FieldKind,
    /// Must be non-empty.
    pub required: bool,
    /// Editability.
    pub editable: Editable,
}

impl FieldSpec {
    /// Optional, always editable field.
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
            editable: Editable::Always,
        }
    }

    /// Mark the field required.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restrict when the field accepts input.
    pub const fn editable(mut self, editable: Editable) -> Self {
        self.editable = editable;
        self
    }

    /// Whether the field takes input for a new or an existing record.
    pub fn is_editable(&self, is_new: bool) -> bool {
        match self.editable {
            Editable::Always => true,
            Editable::OnCreate => is_new,
            Editable::Never => false,
        }
    }

    /// Label of a choice code, or the code itself.
    pub fn display_value<'a>(&self, value: &'a str) -> &'a str {
        match self.kind {
            FieldKind::Choice(options) => options
                .iter()
                .find(|(code, _)| *code == value)
                .map_or(value, |(_, label)| *label),
            _ => value,
        }
    }
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Required field left empty.
    #[error("{label} is required")]
    Required {
        /// Field label.
        label: &'static str,
    },
    /// Number field did not parse.
    #[error("{label} must be a number")]
    NotANumber {
        /// Field label.
        label: &'static str,
    },
    /// Date field did not parse.
    #[error("{label} must be a valid date")]
    NotADate {
        /// Field label.
        label: &'static str,
    },
    /// Choice field holds an unknown code.
    #[error("{label} must be one of the listed options")]
    UnknownChoice {
        /// Field label.
        label: &'static str,
    },
    /// Validity window is inverted.
    #[error("End Date must not be before Start Date")]
    EndBeforeStart,
}

/// Failure to turn form values back into a record.
#[derive(Debug, Error)]
pub enum FormError {
    /// One or more fields failed validation.
    #[error("{} field(s) need attention", .0.len())]
    Invalid(Vec<FieldError>),
    /// The merged JSON did not fit the record type.
    #[error("record could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

impl FormError {
    /// Strings for inline display.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Invalid(errors) => errors.iter().map(ToString::to_string).collect(),
            Self::Encode(err) => vec![err.to_string()],
        }
    }
}

/// Editable string view of one record.
#[derive(Debug, Clone, PartialEq)]
pub struct FormModel {
    fields: &'static [FieldSpec],
    values: BTreeMap<String, String>,
    is_new: bool,
}

impl FormModel {
    /// Flatten `record` into form values.
    pub fn from_record<T: Serialize>(
        record: &T,
        fields: &'static [FieldSpec],
        is_new: bool,
    ) -> Result<Self, FormError> {
        let json = serde_json::to_value(record)?;
        let values = fields
            .iter()
            .map(|field| {
                let raw = match json.get(field.key) {
                    Some(Value::String(text)) if field.kind == FieldKind::Date => {
                        dates::normalize(text)
                    },
                    Some(Value::String(text)) => text.clone(),
                    Some(Value::Number(number)) => {
                        number.as_f64().map(format_number).unwrap_or_default()
                    },
                    Some(Value::Bool(flag)) => (if *flag { "Y" } else { "N" }).to_string(),
                    _ => String::new(),
                };
                (field.key.to_string(), raw)
            })
            .collect();
        Ok(Self {
            fields,
            values,
            is_new,
        })
    }

    /// Field descriptors.
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Whether this form creates a record.
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Current value of `key`.
    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or_default()
    }

    /// Replace the value of `key`. Unknown keys are ignored.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        if let Some(slot) = self.values.get_mut(key) {
            *slot = value.into();
        }
    }

    /// All validation failures, in field order.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for field in self.fields.iter().filter(|field| field.is_editable(self.is_new)) {
            let value = self.value(field.key).trim();
            if value.is_empty() {
                if field.required {
                    errors.push(FieldError::Required {
                        label: field.label,
                    });
                }
                continue;
            }
            match field.kind {
                FieldKind::Number if value.parse::<f64>().map_or(true, |n| !n.is_finite()) => {
                    errors.push(FieldError::NotANumber {
                        label: field.label,
                    });
                },
                FieldKind::Date if dates::parse_date(value).is_none() => {
                    errors.push(FieldError::NotADate {
                        label: field.label,
                    });
                },
                FieldKind::Choice(options) if !options.iter().any(|(code, _)| *code == value) => {
                    errors.push(FieldError::UnknownChoice {
                        label: field.label,
                    });
                },
                _ => {},
            }
        }

        let start = dates::parse_date(self.value("startDate"));
        let end = dates::parse_date(self.value("endDate"));
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                errors.push(FieldError::EndBeforeStart);
            }
        }
        errors
    }

    /// Merge the edited values into a copy of `base`.
    pub fn apply_to<T>(&self, base: &T) -> Result<T, FormError>
    where
        T: Serialize + DeserializeOwned,
    {
        let errors = self.validate();
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "form validation failed");
            return Err(FormError::Invalid(errors));
        }

        let mut object = match serde_json::to_value(base)? {
            Value::Object(object) => object,
            _ => Map::new(),
        };
        for field in self.fields.iter().filter(|field| field.is_editable(self.is_new)) {
            let value = self.value(field.key).trim();
            let encoded = if value.is_empty() {
                Value::Null
            } else {
                match field.kind {
                    FieldKind::Number => value
                        .parse::<f64>()
                        .ok()
                        .and_then(Number::from_f64)
                        .map_or(Value::Null, Value::Number),
                    FieldKind::Date => Value::String(dates::normalize(value)),
                    FieldKind::Text | FieldKind::Choice(_) => Value::String(value.to_string()),
                }
            };
            object.insert(field.key.to_string(), encoded);
        }
        Ok(serde_json::from_value(Value::Object(object))?)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;
    use crate::records::{IndividualParameter, SpideringEvent, SpideringEventType};

    const PARAMETER_FIELDS: &[FieldSpec] = &[
        FieldSpec::new("name", "Name", FieldKind::Text).required().editable(Editable::OnCreate),
        FieldSpec::new("numericValue", "Number", FieldKind::Number),
        FieldSpec::new("textValue", "Text", FieldKind::Text),
        FieldSpec::new("startDate", "Start Date", FieldKind::Date).required(),
        FieldSpec::new("endDate", "End Date", FieldKind::Date),
    ];

    const EVENT_FIELDS: &[FieldSpec] = &[
        FieldSpec::new(
            "speType",
            "Type",
            FieldKind::Choice(&[("E", "Event"), ("D", "Default")]),
        )
        .required(),
        FieldSpec::new("speScore", "Score", FieldKind::Number),
        FieldSpec::new("startDate", "Start Date", FieldKind::Date).required(),
    ];

    fn parameter() -> IndividualParameter {
        IndividualParameter {
            par_id: Some(7),
            name: "MIN_WAGE".to_string(),
            numeric_value: Some(12.5),
            start_date: "01/15/2024".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn flattens_record_into_strings() -> Result<()> {
        let form = FormModel::from_record(&parameter(), PARAMETER_FIELDS, false)?;
        assert_eq!(form.value("name"), "MIN_WAGE");
        assert_eq!(form.value("numericValue"), "12.5");
        assert_eq!(form.value("startDate"), "2024-01-15");
        assert_eq!(form.value("endDate"), "");
        Ok(())
    }

    #[test]
    fn applies_edits_and_keeps_untouched_fields() -> Result<()> {
        let base = parameter();
        let mut form = FormModel::from_record(&base, PARAMETER_FIELDS, false)?;
        form.set("numericValue", "15");
        form.set("endDate", "2024-12-31");
        form.set("name", "RENAMED");

        let updated: IndividualParameter = form.apply_to(&base)?;
        assert_eq!(updated.numeric_value, Some(15.0));
        assert_eq!(updated.end_date.as_deref(), Some("2024-12-31"));
        assert_eq!(updated.name, "MIN_WAGE", "name is create-only");
        assert_eq!(updated.par_id, Some(7));
        Ok(())
    }

    #[test]
    fn clearing_an_optional_field_writes_null() -> Result<()> {
        let base = parameter();
        let mut form = FormModel::from_record(&base, PARAMETER_FIELDS, false)?;
        form.set("numericValue", " ");
        let updated: IndividualParameter = form.apply_to(&base)?;
        assert_eq!(updated.numeric_value, None);
        Ok(())
    }

    #[test]
    fn reports_every_invalid_field() -> Result<()> {
        let mut form = FormModel::from_record(&IndividualParameter::default(), PARAMETER_FIELDS, true)?;
        form.set("numericValue", "twelve");
        form.set("endDate", "2024-01-01");

        assert_eq!(form.validate(), vec![
            FieldError::Required { label: "Name" },
            FieldError::NotANumber { label: "Number" },
            FieldError::Required { label: "Start Date" },
        ]);
        Ok(())
    }

    #[test]
    fn rejects_inverted_validity_window() -> Result<()> {
        let base = parameter();
        let mut form = FormModel::from_record(&base, PARAMETER_FIELDS, false)?;
        form.set("endDate", "2023-12-31");
        let err = form.apply_to(&base).expect_err("window is inverted");
        assert_eq!(err.messages(), vec!["End Date must not be before Start Date".to_string()]);
        Ok(())
    }

    #[test]
    fn choice_fields_round_trip_through_codes() -> Result<()> {
        let base = SpideringEvent {
            spe_type: Some(SpideringEventType::Event),
            start_date: "2024-02-01".to_string(),
            ..Default::default()
        };
        let mut form = FormModel::from_record(&base, EVENT_FIELDS, false)?;
        assert_eq!(form.value("speType"), "E");
        assert_eq!(EVENT_FIELDS[0].display_value(form.value("speType")), "Event");

        form.set("speType", "D");
        let updated: SpideringEvent = form.apply_to(&base)?;
        assert_eq!(updated.spe_type, Some(SpideringEventType::DefaultScore));

        form.set("speType", "X");
        assert_eq!(form.validate(), vec![FieldError::UnknownChoice { label: "Type" }]);
        Ok(())
    }
}
