//! Wall-clock access for client-side bookkeeping timestamps.

/// Current instant as an ISO 8601 string.
///
/// Non-browser builds return a fixed epoch value; the callers only require
/// a structurally valid timestamp, not a precise one.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "1970-01-01T00:00:00.000Z".to_owned()
    }
}
