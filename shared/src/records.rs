use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    capability::{CapabilityFlags, RowCapabilities},
    dates,
    filter::ActiveFilter,
    pagination::{PageInfo, PageRequest},
};

/// Common view of every configuration record the console manages.
pub trait ConfigRecord {
    /// Server identifier; `None` for a record that has not been created yet.
    fn id(&self) -> Option<i64>;
    /// Assign the identifier (used by the mock server on create).
    fn set_id(&mut self, id: i64);
    /// Raw capability flags.
    fn flags(&self) -> CapabilityFlags;
    /// Mutable access to the capability flags.
    fn flags_mut(&mut self) -> &mut CapabilityFlags;
    /// Number of sub-table rows under this record.
    fn child_count(&self) -> u32;
    /// Overwrite the child count.
    fn set_child_count(&mut self, count: u32);
    /// Start of the validity window.
    fn start_date(&self) -> &str;
    /// End of the validity window, if closed.
    fn end_date(&self) -> Option<&str>;
    /// Close or reopen the validity window.
    fn set_end_date(&mut self, end_date: Option<String>);

    /// Closed set of actions the row allows.
    fn capabilities(&self) -> RowCapabilities {
        RowCapabilities::from_flags(self.flags())
    }

    /// Rows with children render as expandable rows.
    fn is_expandable(&self) -> bool {
        self.child_count() > 0
    }

    /// Whether the validity window is still open on `today`.
    fn is_active_on(&self, today: NaiveDate) -> bool {
        dates::is_active_on(self.end_date(), today)
    }

    /// Whether the record passes `filter` on `today`.
    fn matches(&self, filter: ActiveFilter, today: NaiveDate) -> bool {
        filter.includes(self.is_active_on(today))
    }
}

macro_rules! config_record {
    ($ty:ty, $id:ident) => {
        impl ConfigRecord for $ty {
            fn id(&self) -> Option<i64> {
                self.$id
            }

            fn set_id(&mut self, id: i64) {
                self.$id = Some(id);
            }

            fn flags(&self) -> CapabilityFlags {
                self.flags
            }

            fn flags_mut(&mut self) -> &mut CapabilityFlags {
                &mut self.flags
            }

            fn child_count(&self) -> u32 {
                self.child_list_count
            }

            fn set_child_count(&mut self, count: u32) {
                self.child_list_count = count;
            }

            fn start_date(&self) -> &str {
                &self.start_date
            }

            fn end_date(&self) -> Option<&str> {
                self.end_date.as_deref()
            }

            fn set_end_date(&mut self, end_date: Option<String>) {
                self.end_date = end_date;
            }
        }
    };
}

/// A single rule parameter. Its sub-table rows (time-boxed value versions)
/// share this schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualParameter {
    /// Identifier.
    #[serde(default, alias = "id", skip_serializing_if = "Option::is_none")]
    pub par_id: Option<i64>,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Numeric value, when the parameter is numeric.
    #[serde(default)]
    pub numeric_value: Option<f64>,
    /// Text value, when the parameter is textual.
    #[serde(default)]
    pub text_value: Option<String>,
    /// Date value, when the parameter is a date.
    #[serde(default)]
    pub date_value: Option<String>,
    /// Validity start.
    #[serde(default)]
    pub start_date: String,
    /// Validity end.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Capability flags.
    #[serde(flatten)]
    pub flags: CapabilityFlags,
    /// Number of value versions.
    #[serde(default)]
    pub child_list_count: u32,
}

config_record!(IndividualParameter, par_id);

/// A spidering attribute configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpideringAttribute {
    /// Identifier.
    #[serde(default, alias = "id", skip_serializing_if = "Option::is_none")]
    pub spa_id: Option<i64>,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Name of the attribute this one derives from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    /// Attribute weight.
    #[serde(default)]
    pub spa_attr_weight: Option<f64>,
    /// Auto-mark indicator (`Y`/`N`).
    #[serde(default)]
    pub spa_auto_mark: Option<String>,
    /// Minimum threshold for SAR submission.
    #[serde(default)]
    pub spa_min_threshold_val_sar_submit: Option<f64>,
    /// SAR-submit special rule indicator (`Y`/`N`).
    #[serde(default)]
    pub spa_sar_submit_special_rule_ind: Option<String>,
    /// Validity start.
    #[serde(default)]
    pub start_date: String,
    /// Validity end.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Capability flags.
    #[serde(flatten)]
    pub flags: CapabilityFlags,
    /// Number of spidering events under this attribute.
    #[serde(default)]
    pub child_list_count: u32,
}

config_record!(SpideringAttribute, spa_id);

/// Thresholds above this render as "> 99".
pub const SAR_SUBMIT_DISPLAY_CAP: f64 = 99.0;

impl SpideringAttribute {
    /// Threshold half of the "IDH submit score" cell.
    pub fn sar_threshold_label(&self) -> String {
        match self.spa_min_threshold_val_sar_submit {
            Some(value) if value > SAR_SUBMIT_DISPLAY_CAP => "> 99".to_string(),
            Some(value) => format_number(value),
            None => String::new(),
        }
    }

    /// Threshold above the cap together with the special rule indicator.
    pub fn has_special_rule_note(&self) -> bool {
        self.spa_min_threshold_val_sar_submit
            .is_some_and(|value| value > SAR_SUBMIT_DISPLAY_CAP)
            && self.spa_sar_submit_special_rule_ind.as_deref() == Some("Y")
    }
}

/// Kind of spidering event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpideringEventType {
    /// Triggered by an event.
    #[serde(rename = "E")]
    Event,
    /// Applied by default.
    #[serde(rename = "D")]
    DefaultScore,
}

impl SpideringEventType {
    /// Human label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Event => "Event",
            Self::DefaultScore => "Default",
        }
    }

    /// Wire code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Event => "E",
            Self::DefaultScore => "D",
        }
    }
}

/// A spidering event. Used for the event list, for the events nested under
/// an attribute, and for an event's own versions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpideringEvent {
    /// Identifier.
    #[serde(default, alias = "id", skip_serializing_if = "Option::is_none")]
    pub spe_id: Option<i64>,
    /// Owning attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spa_id: Option<i64>,
    /// Event or default.
    #[serde(default)]
    pub spe_type: Option<SpideringEventType>,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Score contributed by the event.
    #[serde(default)]
    pub spe_score: Option<f64>,
    /// Validity start.
    #[serde(default)]
    pub start_date: String,
    /// Validity end.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Capability flags.
    #[serde(flatten)]
    pub flags: CapabilityFlags,
    /// Number of versions of this event.
    #[serde(default)]
    pub child_list_count: u32,
}

config_record!(SpideringEvent, spe_id);

/// Numbers without a trailing `.0` when integral.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Body of every search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Requested page.
    pub pagination: PageRequest,
    /// Active filter.
    pub active: ActiveFilter,
}

/// Body of every search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct SearchResponse<T> {
    /// Rows of the requested page.
    #[serde(default, alias = "spideringAttributesList", alias = "spideringEventsList")]
    pub items: Vec<T>,
    /// Authoritative total count.
    #[serde(default)]
    pub pagination: PageInfo,
}

impl<T> Default for SearchResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: PageInfo::default(),
        }
    }
}

/// Versions of one individual parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterVersionsRequest {
    /// Parent parameter.
    pub par_id: i64,
    /// Applied filter of the list.
    pub active: ActiveFilter,
}

/// Events nested under one spidering attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeEventsRequest {
    /// Parent attribute.
    pub spa_id: i64,
    /// Applied filter of the list.
    pub active: ActiveFilter,
}

/// Versions of one spidering event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventVersionsRequest {
    /// Parent event.
    pub spe_id: i64,
    /// Applied filter of the list.
    pub active: ActiveFilter,
}
