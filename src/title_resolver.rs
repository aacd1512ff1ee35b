use log::debug;

use crate::aligner::Word;
use crate::errors::TitleError;
use crate::tokenizer;

// @module: Title boundary resolution over the aligned word stream

/// One subtitle line with resolved display boundaries in milliseconds.
///
/// Only produced for titles whose token sequence was located in the script;
/// an unlocatable title surfaces as [`TitleError::NotFound`] instead of a
/// record with undefined boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    /// Raw subtitle line text
    pub text: String,
    /// Display start, milliseconds
    pub start: u64,
    /// Display end, milliseconds
    pub end: u64,
}

/// Outcome of a resolution run: the titles that resolved, in script line
/// order, plus a record for every title that could not be located.
#[derive(Debug, Default)]
pub struct ResolvedTitles {
    /// Titles with reconciled boundaries
    pub titles: Vec<Title>,
    /// Per-title failures, recoverable; resolved titles are kept regardless
    pub missing: Vec<TitleError>,
}

/// Maps raw title lines onto spans of the aligned script words and
/// reconciles the resulting boundaries across the title sequence.
///
/// Reconciliation guarantees that no title overlaps the next one's start,
/// that every title gets at least its minimum legible duration when there is
/// room, and that the last title never runs past the clip.
pub struct TitleBoundaryResolver {
    // @field: Reading speed for the minimum-duration heuristic, chars/sec
    chars_per_second: f64,
}

impl TitleBoundaryResolver {
    // @creates: Resolver with the given reading speed
    pub fn new(chars_per_second: f64) -> Self {
        TitleBoundaryResolver { chars_per_second }
    }

    /// Resolve boundaries for every title line.
    ///
    /// Titles that cannot be located anywhere in the script are reported in
    /// `missing` (1-based line index plus text) and excluded from the output
    /// sequence; reconciliation runs over the located subsequence only.
    pub fn resolve(
        &self,
        lines: &[String],
        words: &[Word],
        clip_duration_ms: u64,
    ) -> ResolvedTitles {
        let mut titles = Vec::with_capacity(lines.len());
        let mut missing = Vec::new();

        for (idx, line) in lines.iter().enumerate() {
            match Self::find_title(line, words) {
                Some((start, end)) => titles.push(Title {
                    text: line.clone(),
                    start,
                    end,
                }),
                None => {
                    debug!("No contiguous match for title line {}: {}", idx + 1, line);
                    missing.push(TitleError::NotFound {
                        index: idx + 1,
                        text: line.clone(),
                    });
                }
            }
        }

        self.reconcile(&mut titles, clip_duration_ms);

        ResolvedTitles { titles, missing }
    }

    /// Locate the first contiguous slice of the aligned words equal to the
    /// title's token sequence and return its provisional boundaries:
    /// start = first word's frame, end = last word's frame + duration.
    fn find_title(line: &str, words: &[Word]) -> Option<(u64, u64)> {
        let tokens = tokenizer::tokenize_words(line);
        if tokens.is_empty() || tokens.len() > words.len() {
            return None;
        }

        'starts: for i in 0..=(words.len() - tokens.len()) {
            for (offset, token) in tokens.iter().enumerate() {
                if words[i + offset].text != *token {
                    continue 'starts;
                }
            }

            let first = &words[i];
            let last = &words[i + tokens.len() - 1];
            let start = first.frame.unwrap_or(0);
            let end = last.frame.unwrap_or(0) + last.duration.unwrap_or(0);
            return Some((start, end));
        }

        None
    }

    /// Single left-to-right sweep over the provisional boundaries.
    ///
    /// For every title but the last: clamp the end to just before the next
    /// title's start on overlap, or when the minimum legible duration would
    /// reach it; otherwise extend to the minimum duration if the provisional
    /// end falls short. The last title extends toward its minimum duration
    /// but never past the clip.
    fn reconcile(&self, titles: &mut [Title], clip_duration_ms: u64) {
        let count = titles.len();

        for i in 0..count {
            let target = self.target_duration_ms(&titles[i].text);

            if i + 1 < count {
                let next_start = titles[i + 1].start;
                let title = &mut titles[i];

                if title.end >= next_start {
                    title.end = next_start.saturating_sub(1);
                } else if title.start + target >= next_start {
                    title.end = next_start.saturating_sub(1);
                } else if title.start + target > title.end {
                    title.end = title.start + target;
                }
            } else {
                let title = &mut titles[i];
                if title.end.saturating_sub(title.start) < target {
                    title.end = (title.start + target).min(clip_duration_ms);
                }
            }
        }
    }

    /// Minimum legible display time for a title, from its character count
    /// and the configured reading speed.
    fn target_duration_ms(&self, text: &str) -> u64 {
        (text.chars().count() as f64 / self.chars_per_second * 1000.0).round() as u64
    }
}
