//! Update-access probe.
//!
//! Entitlements arrive from the hosting portal as a cookie; this module only
//! reads them. Mock-server builds always have update access.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::config::{ACCESS_COOKIE, MOCK_SERVER_MODE, UPDATE_ENTITLEMENT};

/// Whether the current user may mutate configuration records.
pub fn has_update_access() -> bool {
    if MOCK_SERVER_MODE {
        return true;
    }
    read_cookie(ACCESS_COOKIE).is_some_and(|value| grants_update(&value))
}

fn read_cookie(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let cookies = document.dyn_into::<HtmlDocument>().ok()?.cookie().ok()?;
    cookie_value(&cookies, name).map(str::to_string)
}

fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

fn grants_update(value: &str) -> bool {
    value
        .split(|c: char| c == ',' || c == '|' || c.is_whitespace())
        .any(|entitlement| entitlement.eq_ignore_ascii_case(UPDATE_ENTITLEMENT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_named_cookie_among_others() {
        let cookies = "theme=dark; param_console_access=READ,UPDATE; lang=en";
        assert_eq!(cookie_value(cookies, "param_console_access"), Some("READ,UPDATE"));
        assert_eq!(cookie_value(cookies, "missing"), None);
    }

    #[test]
    fn update_entitlement_is_matched_case_insensitively() {
        assert!(grants_update("read|update"));
        assert!(!grants_update("READ"));
        assert!(!grants_update("UPDATER"));
    }
}
