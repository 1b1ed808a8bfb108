pub mod audio;
pub mod loader;
pub mod probe;


pub use loader::*;

use std::path::Path;

/// Display labels paired with their values, in display order.
pub type MetadataFields = Vec<(String, String)>;

/// Placeholder for any tag or stream field that is absent.
pub const UNKNOWN: &str = "Desconocido";

/// Analyze a media file for display. Dispatches on the file extension and
/// never fails: a total analysis failure comes back as a single error entry.
pub fn analyze(path: &Path) -> MetadataFields {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if extension == "mp3" {
        audio::analyze_mp3(path)
    } else {
        probe::analyze_video(path)
    }
}

/// Whole seconds rendered the way the metadata panel shows durations.
pub(crate) fn format_duration(total_seconds: i64) -> String {
    let total_seconds = total_seconds.max(0);
    format!("{}:{:02} min", total_seconds / 60, total_seconds % 60)
}
