//! Seeded rows for the mock API, dated relative to the day the server starts.

use chrono::{Days, NaiveDate};
use param_console_shared::{
    dates, IndividualParameter, SpideringAttribute, SpideringEvent, SpideringEventType,
};

use crate::store::{lifecycle_flags, Store};

const PARAMETER_NAMES: &[&str] = &[
    "MAX_WEEKLY_HOURS",
    "MIN_CLAIM_AMOUNT",
    "WAGE_MATCH_TOLERANCE",
    "LOOKBACK_DAYS",
    "REVIEW_QUEUE_LIMIT",
    "HIGH_RISK_SCORE",
    "EMPLOYER_MATCH_WINDOW",
    "AUTO_CLOSE_DAYS",
];

const ATTRIBUTE_NAMES: &[&str] = &[
    "Employer mismatch",
    "Address change",
    "Multiple claims from one IP",
    "Shared bank account",
    "Deceased match",
    "Incarceration match",
];

const EVENT_DESCRIPTIONS: &[&str] = &[
    "Claim filed within 7 days",
    "Bank routing changed",
    "Login from new device",
    "Phone number reused",
];

fn days_before(today: NaiveDate, days: u64) -> String {
    dates::format_iso(today.checked_sub_days(Days::new(days)).unwrap_or(today))
}

fn days_after(today: NaiveDate, days: u64) -> String {
    dates::format_iso(today.checked_add_days(Days::new(days)).unwrap_or(today))
}

fn numbered(names: &[&str], index: usize) -> String {
    let name = names[index % names.len()];
    match index / names.len() {
        0 => name.to_string(),
        round => format!("{name} {}", round + 1),
    }
}

/// Store with `rows` parameters, half as many attributes and two events per
/// attribute. Every fifth row is inactive, every seventh starts in the future
/// and every third may not be deleted.
pub fn seed(rows: usize, today: NaiveDate) -> Store {
    let mut store = Store::default();

    for index in 0..rows {
        let age = 365 + index as u64;
        let inactive = index % 5 == 4;
        let start_date = if index % 7 == 6 {
            days_after(today, 30)
        } else {
            days_before(today, age)
        };
        let mut parameter = IndividualParameter {
            name: numbered(PARAMETER_NAMES, index).replace(' ', "_"),
            description: Some(format!("Rule parameter #{}", index + 1)),
            start_date,
            end_date: inactive.then(|| days_before(today, index as u64 + 1)),
            flags: lifecycle_flags(!inactive, index % 3 != 0),
            ..Default::default()
        };
        match index % 3 {
            0 => parameter.numeric_value = Some((index * 10) as f64),
            1 => parameter.text_value = Some(format!("LEVEL_{}", index % 4)),
            _ => parameter.date_value = Some(days_before(today, 90)),
        }
        let parent = store.parameters.insert(parameter.clone(), None);

        if index % 2 == 0 {
            for version in 1..=2_u64 {
                let mut older = parameter.clone();
                older.start_date = days_before(today, age + 365 * version);
                older.end_date = Some(days_before(today, age + 365 * (version - 1) + 1));
                older.flags = lifecycle_flags(false, false);
                if let Some(value) = older.numeric_value.as_mut() {
                    *value -= version as f64;
                }
                store.parameters.insert(older, Some(parent));
            }
        }
    }

    for index in 0..rows / 2 {
        let inactive = index % 5 == 4;
        let above_cap = index % 3 == 0;
        let attribute = SpideringAttribute {
            name: numbered(ATTRIBUTE_NAMES, index),
            parent_name: (index % 4 == 1).then(|| numbered(ATTRIBUTE_NAMES, index - 1)),
            spa_attr_weight: Some(1.0 + (index % 4) as f64 * 0.5),
            spa_auto_mark: Some(if index % 2 == 0 { "Y" } else { "N" }.to_string()),
            spa_min_threshold_val_sar_submit: Some(if above_cap { 120.0 } else { 45.0 }),
            spa_sar_submit_special_rule_ind: Some(if above_cap { "Y" } else { "N" }.to_string()),
            start_date: days_before(today, 200 + index as u64),
            end_date: inactive.then(|| days_before(today, 10)),
            flags: lifecycle_flags(!inactive, index % 3 != 2),
            ..Default::default()
        };
        let spa_id = store.attributes.insert(attribute, None);

        for (slot, spe_type) in [SpideringEventType::Event, SpideringEventType::DefaultScore]
            .into_iter()
            .enumerate()
        {
            let event_index = index * 2 + slot;
            let event = SpideringEvent {
                spa_id: Some(spa_id),
                spe_type: Some(spe_type),
                description: Some(numbered(EVENT_DESCRIPTIONS, event_index)),
                spe_score: Some(5.0 + event_index as f64),
                start_date: days_before(today, 120 + event_index as u64),
                end_date: inactive.then(|| days_before(today, 10)),
                flags: lifecycle_flags(!inactive, slot == 0),
                ..Default::default()
            };
            let parent = store.events.insert(event.clone(), None);

            if event_index % 2 == 1 {
                let older = SpideringEvent {
                    spe_score: event.spe_score.map(|score| score - 1.0),
                    start_date: days_before(today, 500 + event_index as u64),
                    end_date: Some(days_before(today, 121 + event_index as u64)),
                    flags: lifecycle_flags(false, false),
                    ..event
                };
                store.events.insert(older, Some(parent));
            }
        }
    }

    store
}

#[cfg(test)]
mod tests {
    use param_console_shared::{ActiveFilter, ConfigRecord};

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
    }

    #[test]
    fn seed_mixes_active_and_inactive_rows() {
        let store = seed(10, today());

        let active = store.parameters.top_level(ActiveFilter::Active, today());
        let inactive = store.parameters.top_level(ActiveFilter::Inactive, today());
        assert_eq!(active.len() + inactive.len(), 10);
        assert_eq!(inactive.len(), 2);
        assert!(inactive.iter().all(|row| row.capabilities().can_reinstate()));
    }

    #[test]
    fn even_parameters_carry_two_inactive_versions() {
        let store = seed(4, today());
        let versions = store.parameters.versions_of(1, ActiveFilter::All, today());
        assert_eq!(versions.len(), 2);
        assert!(versions.iter().all(|row| !row.is_active_on(today())));
        assert!(store.parameters.versions_of(4, ActiveFilter::All, today()).is_empty());
    }

    #[test]
    fn attributes_own_two_events_each() {
        let store = seed(6, today());
        assert_eq!(store.attributes.len(), 3);
        let events = store.attribute_events(1, ActiveFilter::All, today());
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|event| event.spa_id == Some(1)));
    }

    #[test]
    fn names_stay_unique_past_the_name_list() {
        assert_eq!(numbered(PARAMETER_NAMES, 0), "MAX_WEEKLY_HOURS");
        assert_eq!(numbered(PARAMETER_NAMES, 8), "MAX_WEEKLY_HOURS 2");
    }
}
