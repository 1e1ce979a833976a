//! OCR command.

use std::path::Path;

use console::style;

use super::draft::print_draft;
use super::read_input;
use crate::cli::icons::arrow;
use crate::config::Settings;
use crate::models::{Document, ExtractionResult};
use crate::services::Assistant;
use crate::utils::format_size;

/// Extract text from an image, classify it and print the draft.
pub async fn cmd_ocr(
    assistant: &Assistant,
    settings: &Settings,
    image: &Path,
    json: bool,
) -> anyhow::Result<()> {
    let ocr = assistant.ocr_backend();
    if !ocr.is_available() {
        anyhow::bail!("{}", ocr.availability_hint());
    }

    let (bytes, filename) = read_input(image, settings.max_upload_bytes).await?;
    let document = Document::from_upload(bytes, filename)?;
    eprintln!(
        "{} Extracting text from {} ({}, {})",
        arrow(),
        image.display(),
        document.mime_type,
        format_size(document.size() as u64)
    );

    let analysis = assistant.analyze_document(&document).await?;

    if json {
        let view = analysis.extraction.view();
        let out = serde_json::json!({
            "error": view.error,
            "text": view.text,
            "analysis": analysis.draft,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    match analysis.extraction {
        ExtractionResult::Failed { message } => anyhow::bail!("OCR failed: {}", message),
        ExtractionResult::Extracted { text } => {
            println!("{}", style("OCR Output").bold());
            if text.is_empty() {
                println!("  {}", style("(no text found)").dim());
            } else {
                println!("{}", text);
            }
            println!();
            if let Some(ref draft) = analysis.draft {
                print_draft(draft);
            }
            Ok(())
        }
    }
}
