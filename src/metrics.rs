//! Service counters for lookup and render traffic.

use metrics::{counter, describe_counter};
use tracing::debug;

// === Metric Name Constants ===

/// Successful metadata lookups counter metric name.
pub const METRIC_LOOKUPS_SERVED: &str = "video_lookups_total";
/// Unknown-id lookups counter metric name.
pub const METRIC_LOOKUP_MISSES: &str = "video_lookup_misses_total";
/// Rendered playback pages counter metric name.
pub const METRIC_PAGES_RENDERED: &str = "player_pages_rendered_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_LOOKUPS_SERVED,
        "Total number of successful video metadata lookups"
    );
    describe_counter!(
        METRIC_LOOKUP_MISSES,
        "Total number of lookups for unknown video ids"
    );
    describe_counter!(
        METRIC_PAGES_RENDERED,
        "Total number of playback pages rendered"
    );

    debug!("Metrics initialized");
}

/// Increment successful lookups counter.
pub fn inc_lookups_served() {
    counter!(METRIC_LOOKUPS_SERVED).increment(1);
}

/// Increment unknown-id lookups counter.
pub fn inc_lookup_misses() {
    counter!(METRIC_LOOKUP_MISSES).increment(1);
}

/// Increment rendered pages counter.
pub fn inc_pages_rendered() {
    counter!(METRIC_PAGES_RENDERED).increment(1);
}
