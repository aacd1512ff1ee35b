use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::aligner::WordAligner;
use crate::app_config::Config;
use crate::errors::TitleError;
use crate::file_utils::FileManager;
use crate::subtitle_processor::SubtitleCollection;
use crate::title_resolver::TitleBoundaryResolver;
use crate::tokenizer;

// @module: Application controller for the alignment pipeline

/// Summary of one pipeline run
#[derive(Debug, Default)]
pub struct RunReport {
    /// Number of titles written to the output
    pub resolved_count: usize,
    /// Titles that could not be located in the script
    pub missing: Vec<TitleError>,
}

/// Main application controller: script + analysis in, SRT out
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Invalid configuration")?;
        Ok(Self { config })
    }

    /// Run the whole pipeline: parse both inputs, align, resolve title
    /// boundaries, and serialize to an SRT string.
    ///
    /// Titles that could not be located in the script are reported in the
    /// returned [`RunReport`] without discarding the titles that resolved.
    pub fn generate_srt(&self, script_text: &str, analysis_text: &str) -> Result<(String, RunReport)> {
        let script = tokenizer::parse_script(script_text);
        let analysis = tokenizer::parse_analysis(analysis_text)
            .context("Failed to parse analysis transcript")?;

        if script.words.is_empty() {
            return Err(anyhow!("Script contains no words"));
        }

        debug!(
            "Parsed {} script words over {} title lines, {} analysis words, clip {} ms",
            script.words.len(),
            script.lines.len(),
            analysis.words.len(),
            analysis.clip_duration_ms
        );

        let mut words = script.words;
        let aligner = WordAligner::new(self.config.min_phrase_length);
        aligner.align(&mut words, &analysis.words);

        let resolver = TitleBoundaryResolver::new(self.config.chars_per_second);
        let resolved = resolver.resolve(&script.lines, &words, analysis.clip_duration_ms);

        for error in &resolved.missing {
            warn!("{}", error);
        }

        if resolved.titles.is_empty() {
            return Err(anyhow!(
                "None of the {} title lines could be located in the script",
                script.lines.len()
            ));
        }

        let collection = SubtitleCollection::from_titles(&resolved.titles);
        let report = RunReport {
            resolved_count: collection.entries.len(),
            missing: resolved.missing,
        };

        Ok((collection.to_srt_string(), report))
    }

    /// Run the main workflow over files on disk.
    pub fn run(
        &self,
        script_file: &Path,
        analysis_file: &Path,
        output_file: Option<PathBuf>,
        force_overwrite: bool,
    ) -> Result<RunReport> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        if !FileManager::file_exists(script_file) {
            return Err(anyhow!("Script file does not exist: {:?}", script_file));
        }
        if !FileManager::file_exists(analysis_file) {
            return Err(anyhow!("Analysis file does not exist: {:?}", analysis_file));
        }

        let output_file =
            output_file.unwrap_or_else(|| FileManager::generate_output_path(script_file, "srt"));

        if let Some(parent) = output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            FileManager::ensure_dir(parent)?;
        }

        if FileManager::file_exists(&output_file) && !force_overwrite {
            return Err(anyhow!(
                "Output file already exists: {:?}. Use -f to force overwrite.",
                output_file
            ));
        }

        let script_text = FileManager::read_to_string(script_file)?;
        let analysis_text = FileManager::read_to_string(analysis_file)?;

        let (srt, report) = self.generate_srt(&script_text, &analysis_text)?;

        std::fs::write(&output_file, &srt)
            .with_context(|| format!("Failed to write subtitle file: {:?}", output_file))?;

        let elapsed = start_time.elapsed();
        info!(
            "Wrote {} title(s) to {:?} in {:.2}s ({} missing)",
            report.resolved_count,
            output_file,
            elapsed.as_secs_f64(),
            report.missing.len()
        );

        Ok(report)
    }
}
