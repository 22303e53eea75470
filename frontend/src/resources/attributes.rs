use chrono::NaiveDate;
use param_console_shared::{
    ActiveFilter, AttributeEventsRequest, Editable, FieldKind, FieldSpec, SpideringAttribute,
    SpideringEvent,
};
use yew::prelude::*;

use super::{
    events::{event_cell, EVENT_COLUMNS, EVENT_FIELDS},
    number_cell, optional_text_cell, start_date_cell, text_cell, Column, ConfigResource,
    RecordEndpoints, SubTableSource,
};
use crate::{
    config::{Endpoints, SPIDERING_ATTRIBUTES, SPIDERING_EVENTS},
    i18n::{current::records as t, fill_one},
};

const YES_NO: &[(&str, &str)] = &[("Y", "Yes"), ("N", "No")];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text).required().editable(Editable::OnCreate),
    FieldSpec::new("parentName", "Parent", FieldKind::Text).editable(Editable::Never),
    FieldSpec::new("spaAttrWeight", "Weight", FieldKind::Number).required(),
    FieldSpec::new("spaAutoMark", "Auto Mark", FieldKind::Choice(YES_NO)),
    FieldSpec::new("spaMinThresholdValSarSubmit", "IDH Submit Threshold", FieldKind::Number),
    FieldSpec::new("spaSarSubmitSpecialRuleInd", "Special Rule", FieldKind::Choice(YES_NO)),
    FieldSpec::new("startDate", "Start Date", FieldKind::Date).required(),
    FieldSpec::new("endDate", "End Date", FieldKind::Date),
];

/// Spidering attributes page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpideringAttributes;

impl RecordEndpoints for SpideringAttributes {
    type Record = SpideringAttribute;

    const EDIT_TITLE: &'static str = "Modify Spidering Attribute";
    const ENDPOINTS: Endpoints = SPIDERING_ATTRIBUTES;
    const FORM_FIELDS: &'static [FieldSpec] = FIELDS;
    const NOUN: &'static str = "Spidering Attribute";
    const REINSTATE_TITLE: &'static str = "Reinstate Spidering Attribute";
    const VIEW_TITLE: &'static str = "Spidering Attribute Details";
}

impl ConfigResource for SpideringAttributes {
    type Sub = AttributeEvents;

    const COLUMNS: &'static [Column] = &[
        Column::left("name", "Name"),
        Column::right("spaAttrWeight", "Weight"),
        Column::left("spaAutoMark", "Auto Mark"),
        Column::left("idhSubmitScore", "IDH Submit Score"),
        Column::left("startDate", "Start Date"),
        Column::left("endDate", "End Date"),
    ];
    const CREATE_TITLE: &'static str = "Add Spidering Attribute";
    const LINK_COLUMN: &'static str = "name";
    const TITLE: &'static str = "Spidering Attributes";

    fn render_cell(record: &SpideringAttribute, column: &str, today: NaiveDate) -> Html {
        match column {
            "name" => name_cell(record),
            "spaAttrWeight" => number_cell(record.spa_attr_weight),
            "spaAutoMark" => optional_text_cell(record.spa_auto_mark.as_deref()),
            "idhSubmitScore" => idh_submit_score_cell(record),
            "startDate" => start_date_cell(record, today),
            "endDate" => optional_text_cell(record.end_date.as_deref()),
            _ => Html::default(),
        }
    }
}

fn name_cell(record: &SpideringAttribute) -> Html {
    let marker = record.parent_name.as_deref().filter(|parent| !parent.is_empty()).map(|parent| {
        html! {
            <span class="info-marker" title={fill_one(t::PARENT_NAME_TEMPLATE, parent)}>
                { "ⓘ" }
            </span>
        }
    });
    html! {
        <>
            { text_cell(record.name.as_str()) }
            { for marker }
        </>
    }
}

/// `threshold | indicator`, with a marker when the special rule is in effect.
fn idh_submit_score_cell(record: &SpideringAttribute) -> Html {
    let indicator = record.spa_sar_submit_special_rule_ind.as_deref().unwrap_or_default();
    let label = format!("{} | {}", record.sar_threshold_label(), indicator);
    html! {
        <>
            { text_cell(label) }
            if record.has_special_rule_note() {
                <span class="info-marker" title={t::SPECIAL_RULE_NOTE}>{ "ⓘ" }</span>
            }
        </>
    }
}

/// Spidering events nested under one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeEvents;

impl RecordEndpoints for AttributeEvents {
    type Record = SpideringEvent;

    const EDIT_TITLE: &'static str = "Modify Spidering Event";
    const ENDPOINTS: Endpoints = SPIDERING_EVENTS;
    const FORM_FIELDS: &'static [FieldSpec] = EVENT_FIELDS;
    const NOUN: &'static str = "Spidering Event";
    const REINSTATE_TITLE: &'static str = "Reinstate Spidering Event";
    const VIEW_TITLE: &'static str = "Spidering Event Details";
}

impl SubTableSource for AttributeEvents {
    type Request = AttributeEventsRequest;

    const COLUMNS: &'static [Column] = EVENT_COLUMNS;
    const PARENT_ENDPOINTS: Endpoints = SPIDERING_ATTRIBUTES;

    fn request(spa_id: i64, active: ActiveFilter) -> AttributeEventsRequest {
        AttributeEventsRequest {
            spa_id,
            active,
        }
    }

    fn render_cell(record: &SpideringEvent, column: &str, today: NaiveDate) -> Html {
        event_cell(record, column, today)
    }
}
