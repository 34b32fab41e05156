//! DOCX (Office Open XML) paragraph extraction.

use docdeck_common::{DocDeckError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Main document part inside the package
const DOCUMENT_PART: &str = "word/document.xml";

/// Extract body paragraphs from a DOCX file, one paragraph per line
pub fn extract_docx(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let xml = read_document_xml(BufReader::new(file))?;
    let paragraphs = paragraphs_from_xml(&xml)?;
    Ok(paragraphs.join("\n"))
}

fn read_document_xml<R: Read + Seek>(reader: R) -> Result<String> {
    let mut archive = ZipArchive::new(reader)
        .map_err(|e| DocDeckError::extraction(format!("Failed to open DOCX package: {}", e)))?;

    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| DocDeckError::extraction(format!("Missing {}: {}", DOCUMENT_PART, e)))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| DocDeckError::extraction(format!("Failed to read {}: {}", DOCUMENT_PART, e)))?;
    Ok(xml)
}

/// Collect the text of every body-level `w:p`.
///
/// Paragraphs nested in tables are skipped, and so is the text of
/// paragraphs nested inside another paragraph (text boxes). Inside a
/// paragraph, `w:t` text is concatenated, `w:tab` becomes a tab and
/// `w:br`/`w:cr` a newline.
fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut table_depth = 0usize;
    let mut paragraph_depth = 0usize;
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"tbl" => table_depth += 1,
                b"p" if table_depth == 0 => {
                    paragraph_depth += 1;
                    if paragraph_depth == 1 {
                        current = Some(String::new());
                    }
                }
                b"r" => run_depth += 1,
                b"t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"p" if table_depth == 0 && paragraph_depth == 0 => paragraphs.push(String::new()),
                // w:tab also appears in paragraph properties as a tab stop
                b"tab" if run_depth > 0 && paragraph_depth == 1 => push_char(&mut current, '\t'),
                b"br" | b"cr" if run_depth > 0 && paragraph_depth == 1 => {
                    push_char(&mut current, '\n')
                }
                _ => {}
            },
            Ok(Event::Text(ref t)) if in_text && paragraph_depth == 1 => {
                let text = t
                    .unescape()
                    .map_err(|e| DocDeckError::extraction(format!("Invalid DOCX text: {}", e)))?;
                if let Some(paragraph) = current.as_mut() {
                    paragraph.push_str(&text);
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"tbl" => table_depth = table_depth.saturating_sub(1),
                b"p" if table_depth == 0 && paragraph_depth > 0 => {
                    paragraph_depth -= 1;
                    if paragraph_depth == 0 {
                        if let Some(paragraph) = current.take() {
                            paragraphs.push(paragraph);
                        }
                    }
                }
                b"r" => run_depth = run_depth.saturating_sub(1),
                b"t" => in_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DocDeckError::extraction(format!(
                    "Error parsing {} at position {}: {}",
                    DOCUMENT_PART,
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_char(current: &mut Option<String>, c: char) {
    if let Some(paragraph) = current.as_mut() {
        paragraph.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scratch_path;
    use std::io::Write;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    fn wrap_body(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
            body
        )
    }

    fn write_docx(name: &str, document_xml: &str) -> std::path::PathBuf {
        let path = scratch_path(name);
        let file = File::create(&path).unwrap();
        let mut zip = ZipWriter::new(file);
        zip.start_file(DOCUMENT_PART, FileOptions::default()).unwrap();
        zip.write_all(document_xml.as_bytes()).unwrap();
        zip.finish().unwrap();
        path
    }

    #[test]
    fn test_paragraphs_joined_by_newline() {
        let xml = wrap_body(
            "<w:p><w:r><w:t>Quarterly</w:t></w:r><w:r><w:t xml:space=\"preserve\"> report</w:t></w:r></w:p>\
             <w:p><w:r><w:t>Revenue grew</w:t></w:r></w:p>",
        );
        let paragraphs = paragraphs_from_xml(&xml).unwrap();
        assert_eq!(paragraphs, vec!["Quarterly report", "Revenue grew"]);
    }

    #[test]
    fn test_empty_paragraphs_kept() {
        let xml = wrap_body("<w:p><w:r><w:t>A</w:t></w:r></w:p><w:p/><w:p></w:p><w:p><w:r><w:t>B</w:t></w:r></w:p>");
        let paragraphs = paragraphs_from_xml(&xml).unwrap();
        assert_eq!(paragraphs, vec!["A", "", "", "B"]);
    }

    #[test]
    fn test_tabs_breaks_and_entities() {
        let xml = wrap_body("<w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>R&amp;D</w:t></w:r></w:p>");
        let paragraphs = paragraphs_from_xml(&xml).unwrap();
        assert_eq!(paragraphs, vec!["a\tb\nR&D"]);
    }

    #[test]
    fn test_tab_stops_in_properties_ignored() {
        let xml = wrap_body(
            "<w:p><w:pPr><w:tabs><w:tab w:val=\"left\" w:pos=\"720\"/></w:tabs></w:pPr><w:r><w:t>Indented</w:t></w:r></w:p>",
        );
        let paragraphs = paragraphs_from_xml(&xml).unwrap();
        assert_eq!(paragraphs, vec!["Indented"]);
    }

    #[test]
    fn test_table_paragraphs_skipped() {
        let xml = wrap_body(
            "<w:p><w:r><w:t>Before</w:t></w:r></w:p>\
             <w:tbl><w:tr><w:tc><w:p><w:r><w:t>Cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>\
             <w:p><w:r><w:t>After</w:t></w:r></w:p>",
        );
        let paragraphs = paragraphs_from_xml(&xml).unwrap();
        assert_eq!(paragraphs, vec!["Before", "After"]);
    }

    #[test]
    fn test_text_box_paragraph_does_not_reset_outer() {
        let xml = wrap_body(
            "<w:p><w:r><w:t>Before box</w:t></w:r>\
             <w:r><w:pict><w:txbxContent>\
             <w:p><w:r><w:t>Boxed</w:t></w:r></w:p>\
             </w:txbxContent></w:pict><w:tab/><w:t>after</w:t></w:r></w:p>\
             <w:p><w:r><w:t>Next</w:t></w:r></w:p>",
        );
        let paragraphs = paragraphs_from_xml(&xml).unwrap();
        assert_eq!(paragraphs, vec!["Before box\tafter", "Next"]);
    }

    #[test]
    fn test_extract_docx_file() {
        let xml = wrap_body("<w:p><w:r><w:t>Hello</w:t></w:r></w:p><w:p><w:r><w:t>World</w:t></w:r></w:p>");
        let path = write_docx("hello.docx", &xml);

        let text = extract_docx(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(text, "Hello\nWorld");
    }

    #[test]
    fn test_extract_docx_not_a_zip() {
        let path = scratch_path("fake.docx");
        std::fs::write(&path, b"plain text pretending").unwrap();

        let err = extract_docx(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, DocDeckError::Extraction(_)));
    }

    #[test]
    fn test_extract_docx_missing_document_part() {
        let path = scratch_path("nodoc.docx");
        let file = File::create(&path).unwrap();
        let mut zip = ZipWriter::new(file);
        zip.start_file("word/styles.xml", FileOptions::default()).unwrap();
        zip.write_all(b"<w:styles/>").unwrap();
        zip.finish().unwrap();

        let err = extract_docx(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, DocDeckError::Extraction(_)));
    }
}
