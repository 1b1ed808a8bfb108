use std::path::Path;

use id3::{Tag, TagLike};

use super::{format_duration, probe, MetadataFields, UNKNOWN};

pub fn analyze_mp3(path: &Path) -> MetadataFields {
    match read_mp3(path) {
        Ok(fields) => fields,
        Err(err) => vec![("Error".to_string(), format!("Error al analizar el MP3: {err}"))],
    }
}

fn read_mp3(path: &Path) -> anyhow::Result<MetadataFields> {
    // A file without any ID3 tag fails here and the whole analysis
    // collapses; individual missing frames merely default below.
    let tag = Tag::read_from_path(path)?;
    let mut fields = tag_fields(&tag);

    let report = probe::report(path)?;
    let seconds = report
        .duration_seconds()
        .ok_or_else(|| anyhow::anyhow!("duration not reported for {}", path.display()))?;
    fields.push(("Duración".to_string(), format_duration(seconds as i64)));

    Ok(fields)
}

pub(crate) fn tag_fields(tag: &Tag) -> MetadataFields {
    let field = |value: Option<&str>| value.unwrap_or(UNKNOWN).to_string();
    vec![
        ("Título".to_string(), field(tag.title())),
        ("Artista".to_string(), field(tag.artist())),
        ("Álbum".to_string(), field(tag.album())),
        ("Género".to_string(), field(tag.genre())),
    ]
}
