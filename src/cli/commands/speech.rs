//! Speech commands: synthesis and (mock) transcription.

use std::path::Path;

use console::style;

use super::draft::print_draft;
use super::read_input;
use crate::cli::icons::{arrow, success};
use crate::config::Settings;
use crate::models::AudioClip;
use crate::services::Assistant;
use crate::utils::format_size;

/// Synthesize `text` and write the MP3 to `output`.
pub async fn cmd_tts(
    assistant: &Assistant,
    text: &str,
    output: &Path,
    lang: Option<&str>,
    regional: bool,
) -> anyhow::Result<()> {
    let speech = if regional {
        assistant.speak_regional(text).await?
    } else {
        assistant.speak(text, lang).await?
    };

    tokio::fs::write(output, &speech.audio).await?;

    eprintln!(
        "{} Wrote {} ({}, language: {})",
        success(),
        output.display(),
        format_size(speech.audio.len() as u64),
        speech.language
    );
    if speech.fell_back {
        eprintln!(
            "  {} requested language failed, used {} instead",
            style("!").yellow(),
            speech.language
        );
    }
    Ok(())
}

/// Mock-transcribe an audio file and print the transcript and draft.
pub async fn cmd_transcribe(
    assistant: &Assistant,
    settings: &Settings,
    audio: &Path,
) -> anyhow::Result<()> {
    let (bytes, filename) = read_input(audio, settings.max_upload_bytes).await?;
    let clip = AudioClip::from_upload(bytes, filename)?;
    eprintln!(
        "{} Transcribing {} with the {} transcriber",
        arrow(),
        audio.display(),
        assistant.transcriber_name()
    );

    let analysis = assistant.transcribe_audio(&clip).await?;

    println!("{}", style("Transcript").bold());
    println!("  {}", analysis.transcript);
    println!();
    print_draft(&analysis.draft);
    Ok(())
}
