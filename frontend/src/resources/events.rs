use chrono::NaiveDate;
use param_console_shared::{
    ActiveFilter, Editable, EventVersionsRequest, FieldKind, FieldSpec, SpideringEvent,
};
use yew::prelude::*;

use super::{
    number_cell, optional_text_cell, start_date_cell, text_cell, Column, ConfigResource,
    RecordEndpoints, SubTableSource,
};
use crate::config::{Endpoints, SPIDERING_EVENTS};

pub(super) const EVENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("speType", "Type", FieldKind::Choice(&[("E", "Event"), ("D", "Default")]))
        .required()
        .editable(Editable::OnCreate),
    FieldSpec::new("description", "Description", FieldKind::Text).required(),
    FieldSpec::new("speScore", "Score", FieldKind::Number).required(),
    FieldSpec::new("startDate", "Start Date", FieldKind::Date).required(),
    FieldSpec::new("endDate", "End Date", FieldKind::Date),
];

pub(super) const EVENT_COLUMNS: &[Column] = &[
    Column::left("speType", "Type"),
    Column::left("description", "Description"),
    Column::right("speScore", "Score"),
    Column::left("startDate", "Start Date"),
    Column::left("endDate", "End Date"),
];

pub(super) fn event_cell(record: &SpideringEvent, column: &str, today: NaiveDate) -> Html {
    match column {
        "speType" => text_cell(record.spe_type.map(|kind| kind.label()).unwrap_or_default()),
        "description" => optional_text_cell(record.description.as_deref()),
        "speScore" => number_cell(record.spe_score),
        "startDate" => start_date_cell(record, today),
        "endDate" => optional_text_cell(record.end_date.as_deref()),
        _ => Html::default(),
    }
}

/// Spidering events page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpideringEvents;

impl RecordEndpoints for SpideringEvents {
    type Record = SpideringEvent;

    const EDIT_TITLE: &'static str = "Modify Spidering Event";
    const ENDPOINTS: Endpoints = SPIDERING_EVENTS;
    const FORM_FIELDS: &'static [FieldSpec] = EVENT_FIELDS;
    const NOUN: &'static str = "Spidering Event";
    const REINSTATE_TITLE: &'static str = "Reinstate Spidering Event";
    const VIEW_TITLE: &'static str = "Spidering Event Details";
}

impl ConfigResource for SpideringEvents {
    type Sub = EventVersions;

    const COLUMNS: &'static [Column] = EVENT_COLUMNS;
    const CREATE_TITLE: &'static str = "Add Spidering Event";
    const LINK_COLUMN: &'static str = "description";
    const TITLE: &'static str = "Spidering Events";

    fn render_cell(record: &SpideringEvent, column: &str, today: NaiveDate) -> Html {
        event_cell(record, column, today)
    }
}

/// Time-boxed versions of one spidering event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventVersions;

impl RecordEndpoints for EventVersions {
    type Record = SpideringEvent;

    const EDIT_TITLE: &'static str = "Modify Event Version";
    const ENDPOINTS: Endpoints = SPIDERING_EVENTS;
    const FORM_FIELDS: &'static [FieldSpec] = EVENT_FIELDS;
    const NOUN: &'static str = "Event Version";
    const REINSTATE_TITLE: &'static str = "Reinstate Event Version";
    const VIEW_TITLE: &'static str = "Event Version";
}

impl SubTableSource for EventVersions {
    type Request = EventVersionsRequest;

    const COLUMNS: &'static [Column] = EVENT_COLUMNS;
    const PARENT_ENDPOINTS: Endpoints = SPIDERING_EVENTS;

    fn request(spe_id: i64, active: ActiveFilter) -> EventVersionsRequest {
        EventVersionsRequest {
            spe_id,
            active,
        }
    }

    fn render_cell(record: &SpideringEvent, column: &str, today: NaiveDate) -> Html {
        event_cell(record, column, today)
    }
}
