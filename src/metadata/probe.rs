use std::path::Path;
use std::process::Command;

use serde_json::Value;

use super::{format_duration, MetadataFields, UNKNOWN};

/// Parsed `ffprobe` output for one file. Field access is tolerant: every
/// missing stream or field degrades to `None`, never to an error.
pub(crate) struct ProbeReport {
    root: Value,
}

pub(crate) fn report(path: &Path) -> anyhow::Result<ProbeReport> {
    let output = Command::new("ffprobe")
        .arg("-v").arg("quiet")
        .arg("-print_format").arg("json")
        .arg("-show_format")
        .arg("-show_streams")
        .arg(path)
        .output()?;

    if !output.status.success() {
        return Err(anyhow::anyhow!("ffprobe failed for {}", path.display()));
    }

    ProbeReport::from_json(&String::from_utf8(output.stdout)?)
}

impl ProbeReport {
    pub(crate) fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(Self { root: serde_json::from_str(json)? })
    }

    fn streams(&self) -> &[Value] {
        self.root["streams"].as_array().map(Vec::as_slice).unwrap_or(&[])
    }

    fn first_stream(&self, codec_type: &str) -> Option<&Value> {
        self.streams()
            .iter()
            .find(|stream| stream["codec_type"].as_str() == Some(codec_type))
    }

    /// Container-level duration in seconds, from the format section.
    pub(crate) fn duration_seconds(&self) -> Option<f64> {
        self.root["format"]["duration"]
            .as_str()
            .and_then(|s| s.parse::<f64>().ok())
    }
}

fn stream_duration_seconds(stream: &Value) -> Option<i64> {
    stream["duration"]
        .as_str()
        .and_then(|s| s.parse::<f64>().ok())
        .map(|seconds| seconds as i64)
}

pub fn analyze_video(path: &Path) -> MetadataFields {
    match report(path) {
        Ok(report) => video_fields(&report),
        Err(err) => vec![("Error".to_string(), format!("Error al analizar el video: {err}"))],
    }
}

/// The five display fields of the generic path. Each one defaults
/// independently when its stream or field is missing.
pub(crate) fn video_fields(report: &ProbeReport) -> MetadataFields {
    let video = report.first_stream("video");
    let audio = report.first_stream("audio");
    let unknown = || UNKNOWN.to_string();

    let format = video
        .and_then(|s| s["codec_name"].as_str())
        .map(str::to_string)
        .unwrap_or_else(unknown);

    let resolution = video
        .and_then(|s| {
            let width = s["width"].as_i64()?;
            let height = s["height"].as_i64()?;
            Some(format!("{width}x{height}"))
        })
        .unwrap_or_else(unknown);

    let duration = video
        .and_then(stream_duration_seconds)
        .map(format_duration)
        .unwrap_or_else(unknown);

    let audio_codec = audio
        .and_then(|s| s["codec_name"].as_str())
        .map(str::to_string)
        .unwrap_or_else(unknown);

    let channels = audio
        .and_then(|s| s["channels"].as_i64())
        .map(|channels| channels.to_string())
        .unwrap_or_else(unknown);

    vec![
        ("Formato".to_string(), format),
        ("Resolución".to_string(), resolution),
        ("Duración".to_string(), duration),
        ("Codec de audio".to_string(), audio_codec),
        ("Canales de audio".to_string(), channels),
    ]
}
