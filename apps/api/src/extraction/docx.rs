use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use super::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts body paragraphs from a .docx payload, joined with `\n`.
///
/// Paragraphs inside tables and text boxes are not part of the body
/// paragraph list and are skipped.
pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractError::Docx(format!("{DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;

    let paragraphs = body_paragraphs(&xml)?;
    Ok(paragraphs.join("\n"))
}

fn body_paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    // depth of containers whose paragraphs are not body paragraphs
    let mut nested = 0usize;
    let mut in_text = false;
    // tab/break markers only count inside a run; `w:pPr/w:tabs` defines tab stops
    let mut in_run = false;

    loop {
        let event = reader.read_event().map_err(|e| {
            ExtractError::Docx(format!(
                "malformed XML at position {}: {e}",
                reader.buffer_position()
            ))
        })?;

        match event {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" | b"w:txbxContent" => nested += 1,
                b"w:p" if nested == 0 => current = Some(String::new()),
                b"w:r" => in_run = true,
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => {
                if nested > 0 {
                    continue;
                }
                match (e.name().as_ref(), current.as_mut()) {
                    (b"w:p", None) => paragraphs.push(String::new()),
                    (b"w:tab", Some(text)) if in_run => text.push('\t'),
                    (b"w:br" | b"w:cr", Some(text)) if in_run => text.push('\n'),
                    _ => {}
                }
            }
            Event::Text(t) if in_text && nested == 0 => {
                if let Some(text) = current.as_mut() {
                    let unescaped = t
                        .unescape()
                        .map_err(|e| ExtractError::Docx(format!("bad text node: {e}")))?;
                    text.push_str(&unescaped);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:tbl" | b"w:txbxContent" => nested = nested.saturating_sub(1),
                b"w:p" if nested == 0 => {
                    if let Some(text) = current.take() {
                        paragraphs.push(text);
                    }
                }
                b"w:r" => in_run = false,
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
