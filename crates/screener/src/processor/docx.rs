use std::io::Read;
use std::path::Path;

use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, Event};
use quick_xml::Reader;

use crate::error::ProcessError;
use crate::processor::{DocumentFormat, DocumentProcessor};

pub struct DocxProcessor;

impl DocxProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocxProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentProcessor for DocxProcessor {
    fn extract(&self, path: &Path) -> Result<String, ProcessError> {
        let file = std::fs::File::open(path).map_err(|e| ProcessError::ReadDocument {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut archive = zip::ZipArchive::new(file)
            .map_err(|e| ProcessError::DocxProcessing(format!("Failed to open DOCX: {}", e)))?;

        extract_docx_text(&mut archive)
    }

    fn supports(&self, format: DocumentFormat) -> bool {
        matches!(format, DocumentFormat::Docx)
    }
}

fn extract_docx_text<R: Read + std::io::Seek>(
    archive: &mut zip::ZipArchive<R>,
) -> Result<String, ProcessError> {
    let mut document_xml = archive
        .by_name("word/document.xml")
        .map_err(|e| ProcessError::DocxProcessing(format!("Failed to find document.xml: {}", e)))?;

    let mut xml_content = String::new();
    document_xml
        .read_to_string(&mut xml_content)
        .map_err(|e| ProcessError::DocxProcessing(format!("Failed to read document.xml: {}", e)))?;

    let paragraphs = parse_docx_paragraphs(&xml_content)?;
    Ok(paragraphs.join("\n"))
}

/// Collects the text of the paragraphs that sit directly in `<w:body>`,
/// in document order.
///
/// Paragraphs inside tables are skipped. Paragraphs nested in a run, such
/// as text boxes, neither end the enclosing paragraph nor add to its text.
/// Tabs and line breaks inside runs are kept as `\t` and `\n`; paragraph
/// properties (`<w:tabs>` stops and the like) contribute nothing.
fn parse_docx_paragraphs(xml: &str) -> Result<Vec<String>, ProcessError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    // local names of the open elements, outermost first
    let mut open: Vec<Vec<u8>> = Vec::new();
    let mut current: Option<String> = None;
    // open `<w:p>` elements, counting the body paragraph itself
    let mut paragraph_depth = 0usize;
    let mut in_text_element = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = e.local_name().as_ref().to_vec();
                let parent = open.last().map(Vec::as_slice);
                match name.as_slice() {
                    b"p" if current.is_some() => paragraph_depth += 1,
                    b"p" if is_element(parent, b"body") => {
                        current = Some(String::new());
                        paragraph_depth = 1;
                    }
                    b"t" if paragraph_depth == 1 && is_element(parent, b"r") => {
                        in_text_element = true
                    }
                    _ => {}
                }
                open.push(name);
            }
            Ok(Event::End(ref e)) => {
                open.pop();
                match e.local_name().as_ref() {
                    b"p" if paragraph_depth > 1 => paragraph_depth -= 1,
                    b"p" if paragraph_depth == 1 => {
                        paragraph_depth = 0;
                        if let Some(paragraph) = current.take() {
                            paragraphs.push(paragraph);
                        }
                    }
                    b"t" => in_text_element = false,
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) => {
                let parent = open.last().map(Vec::as_slice);
                let in_run = paragraph_depth == 1 && is_element(parent, b"r");
                match e.local_name().as_ref() {
                    b"p" if current.is_none() && is_element(parent, b"body") => {
                        paragraphs.push(String::new())
                    }
                    b"tab" if in_run => {
                        if let Some(paragraph) = current.as_mut() {
                            paragraph.push('\t');
                        }
                    }
                    b"br" | b"cr" if in_run => {
                        if let Some(paragraph) = current.as_mut() {
                            paragraph.push('\n');
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(e)) if in_text_element => {
                let decoded = e.decode().map_err(|err| {
                    ProcessError::DocxProcessing(format!("Invalid text in document.xml: {}", err))
                })?;
                if let Some(paragraph) = current.as_mut() {
                    paragraph.push_str(&decoded);
                }
            }
            Ok(Event::GeneralRef(e)) if in_text_element => {
                let resolved = resolve_reference(&e)?;
                if let Some(paragraph) = current.as_mut() {
                    paragraph.push_str(&resolved);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ProcessError::DocxProcessing(format!(
                    "XML parsing error: {}",
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn is_element(name: Option<&[u8]>, expected: &[u8]) -> bool {
    name == Some(expected)
}

/// Resolves `&#NN;`, `&#xNN;` and the five predefined XML entities.
fn resolve_reference(reference: &BytesRef<'_>) -> Result<String, ProcessError> {
    let resolved = reference.resolve_char_ref().map_err(|e| {
        ProcessError::DocxProcessing(format!("Invalid character reference: {}", e))
    })?;
    if let Some(ch) = resolved {
        return Ok(ch.to_string());
    }

    let name = reference.decode().map_err(|e| {
        ProcessError::DocxProcessing(format!("Invalid entity reference: {}", e))
    })?;
    resolve_predefined_entity(&name)
        .map(str::to_string)
        .ok_or_else(|| ProcessError::DocxProcessing(format!("Unknown entity: &{};", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:v="urn:schemas-microsoft-com:vml""#;

    fn document(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><w:document {}><w:body>{}</w:body></w:document>"#,
            NS, body
        )
    }

    #[test]
    fn test_supports_docx_format() {
        let processor = DocxProcessor::new();
        assert!(processor.supports(DocumentFormat::Docx));
        assert!(!processor.supports(DocumentFormat::Pdf));
    }

    #[test]
    fn test_paragraphs_in_document_order() {
        let xml = document(
            "<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>\
             <w:p><w:r><w:t>jane@example.com</w:t></w:r></w:p>",
        );

        let paragraphs = parse_docx_paragraphs(&xml).unwrap();
        assert_eq!(paragraphs, vec!["Jane Doe", "jane@example.com"]);
    }

    #[test]
    fn test_runs_are_concatenated_with_preserved_spaces() {
        let xml = document(
            r#"<w:p><w:r><w:t xml:space="preserve">Jane </w:t></w:r><w:r><w:t>Doe</w:t></w:r></w:p>"#,
        );

        let paragraphs = parse_docx_paragraphs(&xml).unwrap();
        assert_eq!(paragraphs, vec!["Jane Doe"]);
    }

    #[test]
    fn test_empty_paragraph_keeps_its_line() {
        let xml = document(
            "<w:p><w:r><w:t>Top</w:t></w:r></w:p><w:p/><w:p><w:r><w:t>Bottom</w:t></w:r></w:p>",
        );

        let paragraphs = parse_docx_paragraphs(&xml).unwrap();
        assert_eq!(paragraphs.join("\n"), "Top\n\nBottom");
    }

    #[test]
    fn test_tabs_and_breaks_inside_runs() {
        let xml = document(
            "<w:p><w:pPr><w:tabs><w:tab w:val=\"left\" w:pos=\"720\"/></w:tabs></w:pPr>\
             <w:r><w:t>Rust</w:t><w:tab/><w:t>Go</w:t><w:br/><w:t>SQL</w:t></w:r></w:p>",
        );

        let paragraphs = parse_docx_paragraphs(&xml).unwrap();
        assert_eq!(paragraphs, vec!["Rust\tGo\nSQL"]);
    }

    #[test]
    fn test_entity_references_are_resolved() {
        let xml = document(
            "<w:p><w:r><w:t>R&amp;D at AT&amp;T &lt;Rust&gt; &quot;x&quot; caf&#233; &#x2022;</w:t></w:r></w:p>",
        );

        let paragraphs = parse_docx_paragraphs(&xml).unwrap();
        assert_eq!(paragraphs, vec!["R&D at AT&T <Rust> \"x\" café •"]);
    }

    #[test]
    fn test_unknown_entity_is_an_error() {
        let xml = document("<w:p><w:r><w:t>&nbsp;</w:t></w:r></w:p>");
        let result = parse_docx_paragraphs(&xml);
        assert!(matches!(result, Err(ProcessError::DocxProcessing(_))));
    }

    #[test]
    fn test_text_box_does_not_split_enclosing_paragraph() {
        let xml = document(
            "<w:p><w:r><w:t>Jane</w:t></w:r>\
             <w:r><w:pict><v:shape><v:textbox><w:txbxContent>\
             <w:p><w:r><w:t>Box</w:t></w:r></w:p>\
             </w:txbxContent></v:textbox></v:shape></w:pict></w:r>\
             <w:r><w:t xml:space=\"preserve\"> Doe</w:t></w:r></w:p>\
             <w:p><w:r><w:t>jane@example.com</w:t></w:r></w:p>",
        );

        let paragraphs = parse_docx_paragraphs(&xml).unwrap();
        assert_eq!(paragraphs, vec!["Jane Doe", "jane@example.com"]);
    }

    #[test]
    fn test_table_paragraphs_are_skipped() {
        let xml = document(
            "<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>\
             <w:tbl><w:tr><w:tc><w:p><w:r><w:t>Rust</w:t></w:r></w:p><w:p/></w:tc></w:tr></w:tbl>\
             <w:p><w:r><w:t>Experience</w:t></w:r></w:p>",
        );

        let paragraphs = parse_docx_paragraphs(&xml).unwrap();
        assert_eq!(paragraphs, vec!["Jane Doe", "Experience"]);
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let xml = document("<w:p><w:r><w:t>broken</w:r></w:p>");
        let result = parse_docx_paragraphs(&xml);
        assert!(matches!(result, Err(ProcessError::DocxProcessing(_))));
    }
}
