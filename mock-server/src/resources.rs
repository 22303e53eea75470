use chrono::NaiveDate;
use param_console_shared::{
    ActiveFilter, AttributeEventsRequest, EventVersionsRequest, IndividualParameter,
    ParameterVersionsRequest, SpideringAttribute, SpideringEvent,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::store::{RecordTable, Store, TableRecord};

/// One resource of the API: where it lives in the store and how its
/// sub-table is scoped.
pub trait Resource: TableRecord + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Path segment under `/config`.
    const PATH: &'static str;

    /// Body of a sub-table request.
    type SubRequest: DeserializeOwned + Send + 'static;
    /// Rows of the sub-table.
    type Child: Serialize + Send + 'static;

    fn table(store: &Store) -> &RecordTable<Self>;
    fn table_mut(store: &mut Store) -> &mut RecordTable<Self>;

    fn sub_request(parent_id: i64, active: ActiveFilter) -> Self::SubRequest;
    fn children(store: &Store, request: &Self::SubRequest, today: NaiveDate) -> Vec<Self::Child>;

    fn child_count(store: &Store, record: &Self, active: ActiveFilter, today: NaiveDate) -> u32 {
        record.id().map_or(0, |id| {
            let count = Self::children(store, &Self::sub_request(id, active), today).len();
            u32::try_from(count).unwrap_or(u32::MAX)
        })
    }
}

impl Resource for IndividualParameter {
    const PATH: &'static str = "individual-parameters";

    type SubRequest = ParameterVersionsRequest;
    type Child = IndividualParameter;

    fn table(store: &Store) -> &RecordTable<Self> {
        &store.parameters
    }

    fn table_mut(store: &mut Store) -> &mut RecordTable<Self> {
        &mut store.parameters
    }

    fn sub_request(par_id: i64, active: ActiveFilter) -> Self::SubRequest {
        ParameterVersionsRequest {
            par_id,
            active,
        }
    }

    fn children(store: &Store, request: &Self::SubRequest, today: NaiveDate) -> Vec<Self::Child> {
        store.parameters.versions_of(request.par_id, request.active, today)
    }
}

impl Resource for SpideringAttribute {
    const PATH: &'static str = "spidering-attributes";

    type SubRequest = AttributeEventsRequest;
    type Child = SpideringEvent;

    fn table(store: &Store) -> &RecordTable<Self> {
        &store.attributes
    }

    fn table_mut(store: &mut Store) -> &mut RecordTable<Self> {
        &mut store.attributes
    }

    fn sub_request(spa_id: i64, active: ActiveFilter) -> Self::SubRequest {
        AttributeEventsRequest {
            spa_id,
            active,
        }
    }

    fn children(store: &Store, request: &Self::SubRequest, today: NaiveDate) -> Vec<Self::Child> {
        store.attribute_events(request.spa_id, request.active, today)
    }
}

impl Resource for SpideringEvent {
    const PATH: &'static str = "spidering-events";

    type SubRequest = EventVersionsRequest;
    type Child = SpideringEvent;

    fn table(store: &Store) -> &RecordTable<Self> {
        &store.events
    }

    fn table_mut(store: &mut Store) -> &mut RecordTable<Self> {
        &mut store.events
    }

    fn sub_request(spe_id: i64, active: ActiveFilter) -> Self::SubRequest {
        EventVersionsRequest {
            spe_id,
            active,
        }
    }

    fn children(store: &Store, request: &Self::SubRequest, today: NaiveDate) -> Vec<Self::Child> {
        store.events.versions_of(request.spe_id, request.active, today)
    }
}
