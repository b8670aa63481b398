//! Text extraction from raw document bytes
//!
//! Extractors work on byte buffers so callers can feed uploads or files
//! interchangeably; the `InputManager` handles the filesystem side.

use crate::error::{AtsError, Result};
use pulldown_cmark::{html, Parser};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        // Pages are concatenated in document order; a page with no
        // recoverable text contributes nothing rather than failing.
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AtsError::Extraction(format!("Failed to extract text from PDF: {}", e)))?;
        Ok(text)
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let cursor = Cursor::new(bytes);
        let mut archive = zip::ZipArchive::new(cursor)
            .map_err(|e| AtsError::Extraction(format!("Not a valid DOCX archive: {}", e)))?;

        let mut document_file = archive
            .by_name("word/document.xml")
            .map_err(|e| AtsError::Extraction(format!("DOCX missing document body: {}", e)))?;
        let mut xml = String::new();
        document_file
            .read_to_string(&mut xml)
            .map_err(|e| AtsError::Extraction(format!("Failed to read DOCX body: {}", e)))?;

        let mut reader = Reader::from_str(&xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut current = String::new();
        let mut paragraphs = Vec::new();
        let mut in_paragraph = false;

        // One output line per w:p paragraph, in document order.
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    if e.name().as_ref() == b"w:p" {
                        in_paragraph = true;
                        current.clear();
                    }
                }
                Ok(Event::End(e)) => {
                    if e.name().as_ref() == b"w:p" {
                        if !current.trim().is_empty() {
                            paragraphs.push(current.trim().to_string());
                        }
                        current.clear();
                        in_paragraph = false;
                    }
                }
                Ok(Event::Text(e)) => {
                    if in_paragraph {
                        let value = e
                            .xml_content()
                            .map_err(|e| AtsError::Extraction(format!("Bad DOCX text run: {}", e)))?;
                        current.push_str(&value);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(AtsError::Extraction(format!("Malformed DOCX XML: {}", e)));
                }
                _ => {}
            }

            buf.clear();
        }

        Ok(paragraphs.join("\n"))
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let content = std::str::from_utf8(bytes)
            .map_err(|e| AtsError::Extraction(format!("File is not valid UTF-8 text: {}", e)))?;
        Ok(content.to_string())
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let markdown_content = std::str::from_utf8(bytes)
            .map_err(|e| AtsError::Extraction(format!("File is not valid UTF-8 text: {}", e)))?;

        let parser = Parser::new(markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Ok(self.html_to_text(&html_output))
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> String {
        let text = html
            .replace("<br>", "\n")
            .replace("</p>", "\n\n")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let re = regex::Regex::new(r"<[^>]*>").unwrap();
        let clean_text = re.replace_all(&text, "");

        let lines: Vec<String> = clean_text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}
