//! Build-time configuration of the console.

// API base URL - 编译时从环境变量读取，默认本地开发地址
pub const API_BASE: &str = match option_env!("PARAM_CONSOLE_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

/// Cookie whose value lists the caller's entitlements.
pub const ACCESS_COOKIE: &str = match option_env!("PARAM_CONSOLE_ACCESS_COOKIE") {
    Some(name) => name,
    None => "param_console_access",
};

/// Entitlement that unlocks edit, reinstate, delete and create.
pub const UPDATE_ENTITLEMENT: &str = "UPDATE";

/// Whether every call is replaced by a plain GET against the mock server.
pub const MOCK_SERVER_MODE: bool = cfg!(feature = "mockserver");

/// Endpoint paths of one configuration resource, relative to [`API_BASE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub search: &'static str,
    pub details: &'static str,
    pub sub_table: &'static str,
    /// Delete and update append `/{id}`; create posts here directly.
    pub record: &'static str,
}

impl Endpoints {
    const fn for_resource(
        search: &'static str,
        details: &'static str,
        sub_table: &'static str,
        record: &'static str,
    ) -> Self {
        Self {
            search,
            details,
            sub_table,
            record,
        }
    }
}

pub const INDIVIDUAL_PARAMETERS: Endpoints = Endpoints::for_resource(
    "/config/individual-parameters/search",
    "/config/individual-parameters/details",
    "/config/individual-parameters/sub-table",
    "/config/individual-parameters",
);

pub const SPIDERING_ATTRIBUTES: Endpoints = Endpoints::for_resource(
    "/config/spidering-attributes/search",
    "/config/spidering-attributes/details",
    "/config/spidering-attributes/sub-table",
    "/config/spidering-attributes",
);

pub const SPIDERING_EVENTS: Endpoints = Endpoints::for_resource(
    "/config/spidering-events/search",
    "/config/spidering-events/details",
    "/config/spidering-events/sub-table",
    "/config/spidering-events",
);

/// Absolute URL of an endpoint path.
pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE.trim_end_matches('/'), path)
}
