/// Delay before leaving a page after a success toast.
pub const REDIRECT_DELAY_MS: u32 = 2_000;

/// Full page navigation, matching a hard `location.href` assignment.
#[cfg(target_arch = "wasm32")]
pub fn navigate(path: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(err) = window.location().set_href(path) {
                log::error!("Navigation to {} failed: {:?}", path, err);
            }
        }
        None => log::error!("Navigation to {} failed: no window", path),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate(path: &str) {
    log::debug!("navigate({}) skipped outside the browser", path);
}

/// Navigates after `delay_ms`, giving a toast time to show.
#[cfg(target_arch = "wasm32")]
pub fn navigate_after(path: &'static str, delay_ms: u32) {
    gloo_timers::callback::Timeout::new(delay_ms, move || navigate(path)).forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate_after(path: &'static str, delay_ms: u32) {
    log::debug!("navigate_after({}, {}) skipped outside the browser", path, delay_ms);
}

/// Path with an `id` query parameter, as used by the monitor pages.
pub fn with_id(path: &str, id: &str) -> String {
    format!(
        "{}?id={}",
        path,
        percent_encoding::utf8_percent_encode(id, percent_encoding::NON_ALPHANUMERIC)
    )
}

/// Trimmed, non-empty `id` query parameter of the current route.
pub fn use_query_id() -> Option<String> {
    use leptos::SignalWithUntracked;
    leptos_router::use_query_map()
        .with_untracked(|query| query.get("id").cloned())
        .and_then(|id| normalize_id(&id))
}

fn normalize_id(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_id_encodes_query_value() {
        assert_eq!(with_id("/main/monitor/details", "42"), "/main/monitor/details?id=42");
        assert_eq!(
            with_id("/main/monitor/details", "a b&c"),
            "/main/monitor/details?id=a%20b%26c"
        );
    }

    #[test]
    fn blank_ids_are_dropped() {
        assert_eq!(normalize_id(" 7 "), Some("7".to_string()));
        assert_eq!(normalize_id("  "), None);
    }
}
