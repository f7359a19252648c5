//! Client-side record id generation.
//!
//! Ids are `"<entity>_<timestamp-millis>"` strings minted at creation time.
//! Backends treat them as opaque unique primary keys.

use chrono::Utc;

/// Mint a new record id for the given entity prefix.
///
/// ```rust
/// let id = outreach_core::ids::record_id("lead");
/// assert!(id.starts_with("lead_"));
/// ```
pub fn record_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_format() {
        let id = record_id("campaign");
        let (prefix, millis) = id.split_once('_').unwrap();
        assert_eq!(prefix, "campaign");
        assert!(millis.parse::<i64>().unwrap() > 0);
    }
}
