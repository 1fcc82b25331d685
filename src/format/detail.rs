use super::{EXAMPLE_BULLET, FormatError, MULTIMEDIA_BULLET, push_truncated};
use crate::krdict::types::{Definition, MultimediaRef, ViewResponse, WordInfo};

/// Full rendering of a single dictionary entry: header, URL, then each
/// definition with its examples and multimedia.
pub fn render_view(view: &ViewResponse, out: &mut String) -> Result<(), FormatError> {
    let entry = view.entry().ok_or(FormatError::MissingField("results[0]"))?;
    let info = &entry.word_info;

    out.push_str(&header_line(info));
    out.push('\n');
    out.push_str(&format!("{}\n", view.url));

    for (idx, dfn) in info.definition_info.iter().enumerate() {
        push_definition(idx + 1, dfn, out)?;
    }
    Ok(())
}

/// `word 「pos」 (origin) [pron1/pron2 (audio)]`, skipping empty segments.
fn header_line(info: &WordInfo) -> String {
    let mut header = format!("{} 「{}」", info.word, info.part_of_speech);

    let origin: String = info
        .original_language_info
        .iter()
        .map(|o| o.original_language.as_str())
        .collect();
    if !origin.is_empty() {
        header.push_str(&format!(" ({origin})"));
    }

    if !info.pronunciation_info.is_empty() {
        let pronunciation = info
            .pronunciation_info
            .iter()
            .map(|p| match p.url {
                Some(ref url) => format!("{} ({url})", p.pronunciation),
                None => p.pronunciation.clone(),
            })
            .collect::<Vec<_>>()
            .join("/");
        header.push_str(&format!(" [{pronunciation}]"));
    }

    header
}

fn push_definition(number: usize, dfn: &Definition, out: &mut String) -> Result<(), FormatError> {
    match dfn.translations.first() {
        Some(translation) => {
            let heading = match translation.word.as_deref() {
                Some(word) if !word.is_empty() => format!("{number}. {word}"),
                _ => format!("{number}."),
            };
            out.push_str(&format!(
                "{heading}\n   {}\n   {}\n",
                dfn.definition, translation.definition
            ));
        }
        None => out.push_str(&format!("{number}. {}\n", dfn.definition)),
    }

    push_truncated(out, EXAMPLE_BULLET, &dfn.examples, |ex| Ok(ex.clone()))?;
    push_truncated(out, MULTIMEDIA_BULLET, &dfn.multimedia, multimedia_line)
}

fn multimedia_line(media: &MultimediaRef) -> Result<String, FormatError> {
    let target = match (&media.content_urls, &media.url) {
        (Some(urls), _) if !urls.is_empty() => urls.join(","),
        (_, Some(url)) => url.clone(),
        _ => return Err(FormatError::MissingField("multimedia.url")),
    };
    Ok(format!("{target} ({})", media.media_type))
}

/// Per-character breakdown of every hanja fragment in the entry's origin.
pub fn render_hanja(view: &ViewResponse, out: &mut String) -> Result<(), FormatError> {
    let entry = view.entry().ok_or(FormatError::MissingField("results[0]"))?;

    for fragment in entry
        .word_info
        .original_language_info
        .iter()
        .filter(|o| o.is_hanja())
    {
        for (idx, hanja) in fragment.hanja_info.iter().enumerate() {
            out.push_str(&format!("Hanja {}: {}\n", idx + 1, hanja.hanja));
            out.push_str(&format!("Radical: {}\n", hanja.radical));
            out.push_str(&format!("Stroke Count: {}\n", hanja.stroke_count));
            out.push_str("Readings:\n");
            for reading in &hanja.readings {
                out.push_str(&format!("   {reading}\n"));
            }
            out.push('\n');
        }
    }
    Ok(())
}
