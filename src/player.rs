//! HTML page templates for video playback.

use askama::Template;

/// Playback page for a single video.
///
/// The id is bound into the page unchanged; it is not checked against the
/// catalog.
#[derive(Debug, Template)]
#[template(path = "player.html")]
pub struct PlayerPage {
    /// Id the player loads.
    pub video_id: u64,
}
