//! Builders for resume documents.
//!
//! Documents are generated in memory so the tests need no binary fixtures.

#![allow(dead_code)]

use std::io::Write;

use lopdf::{dictionary, Document, Object, Stream};
use zip::write::SimpleFileOptions;

/// Builder for minimal DOCX files, one `<w:p>` per paragraph.
pub struct DocxBuilder {
    paragraphs: Vec<String>,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self { paragraphs: vec![] }
    }

    pub fn paragraph(mut self, text: &str) -> Self {
        self.paragraphs.push(text.to_string());
        self
    }

    pub fn paragraphs(mut self, lines: &[&str]) -> Self {
        self.paragraphs.extend(lines.iter().map(|l| l.to_string()));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let body: String = self
            .paragraphs
            .iter()
            .map(|p| {
                if p.is_empty() {
                    "<w:p/>".to_string()
                } else {
                    format!(
                        r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
                        escape_xml(p)
                    )
                }
            })
            .collect();

        let document = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
            body
        );

        let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        writer
            .start_file("[Content_Types].xml", SimpleFileOptions::default())
            .unwrap();
        writer
            .write_all(br#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#)
            .unwrap();
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }
}

impl Default for DocxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Single-page PDF whose page content is `operators` (e.g. `BT ... Tj ET`)
/// drawn with the built-in Courier font in WinAnsi encoding, so `\225`
/// inside a string is a bullet.
pub fn pdf_bytes(operators: &str) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });
    let content_id = doc.add_object(Stream::new(dictionary! {}, operators.as_bytes().to_vec()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        "Resources" => resources_id,
        "Contents" => content_id,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// `count` filler words, for pushing a resume into the scored length range.
pub fn filler_words(count: usize) -> String {
    vec!["delivered"; count].join(" ")
}
