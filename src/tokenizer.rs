use once_cell::sync::Lazy;
use regex::Regex;

use crate::aligner::Word;
use crate::errors::AnalysisError;

// @module: Script and analysis transcript parsing

// @const: Anything outside word characters and apostrophes splits tokens
static NON_WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w']").unwrap());

/// The tokenized script: its normalized word stream plus the raw subtitle
/// lines, in original line order.
#[derive(Debug, Default, Clone)]
pub struct ScriptStream {
    /// Normalized script words, untimed until alignment
    pub words: Vec<Word>,
    /// Raw non-empty script lines, each one a subtitle title
    pub lines: Vec<String>,
}

/// The tokenized analysis transcript: time-coded words with non-speech
/// markers stripped, plus the clip duration taken from the final row of the
/// untrimmed stream.
#[derive(Debug, Default, Clone)]
pub struct AnalysisStream {
    /// Time-coded transcript words
    pub words: Vec<Word>,
    /// Total clip length in milliseconds
    pub clip_duration_ms: u64,
}

/// Tokenize free text with script normalization: curly quotes mapped to
/// ASCII, remaining non-ASCII dropped, text uppercased, and every character
/// outside `[\w']` treated as a separator.
pub fn tokenize_words(text: &str) -> Vec<String> {
    let normalized = replace_unicode_punctuation(text).to_uppercase();
    NON_WORD_REGEX
        .replace_all(&normalized, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Parse the script text into its word stream and title lines.
pub fn parse_script(text: &str) -> ScriptStream {
    let words = tokenize_words(text).into_iter().map(Word::untimed).collect();

    let lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    ScriptStream { words, lines }
}

/// Parse the tab-separated analysis transcript.
///
/// Each row is `start_ms \t duration_ms \t token`. Tokens beginning with `<`
/// are non-speech markers (silences, sentence boundaries): they are excluded
/// from the word stream but still advance the clip duration, which ends up
/// as `start + duration` of the last row of the untrimmed stream. A row with
/// missing or unparseable fields fails the parse with its line number rather
/// than corrupting the alignment downstream.
pub fn parse_analysis(text: &str) -> Result<AnalysisStream, AnalysisError> {
    let mut words = Vec::new();
    let mut clip_duration_ms = None;

    for (line_idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (frame, duration, token) = parse_analysis_row(line, line_idx + 1)?;
        clip_duration_ms = Some(frame + duration);

        if token.starts_with('<') {
            continue;
        }

        words.push(Word::timed(token.to_uppercase(), frame, duration));
    }

    match clip_duration_ms {
        Some(clip_duration_ms) => Ok(AnalysisStream {
            words,
            clip_duration_ms,
        }),
        None => Err(AnalysisError::Empty),
    }
}

/// Split one transcript row into its (frame, duration, token) fields.
fn parse_analysis_row(line: &str, line_no: usize) -> Result<(u64, u64, &str), AnalysisError> {
    let mut fields = line.split('\t');

    let frame_field = fields.next().unwrap_or("");
    let frame = frame_field
        .trim()
        .parse::<u64>()
        .map_err(|_| AnalysisError::MalformedRow {
            line: line_no,
            message: format!("invalid start offset {:?}", frame_field),
        })?;

    let duration_field = fields.next().ok_or_else(|| AnalysisError::MalformedRow {
        line: line_no,
        message: "missing duration field".to_string(),
    })?;
    let duration = duration_field
        .trim()
        .parse::<u64>()
        .map_err(|_| AnalysisError::MalformedRow {
            line: line_no,
            message: format!("invalid duration {:?}", duration_field),
        })?;

    let token = fields
        .next()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AnalysisError::MalformedRow {
            line: line_no,
            message: "missing token field".to_string(),
        })?;

    Ok((frame, duration, token))
}

/// Map curly single and double quotation marks to their ASCII forms and drop
/// any other non-ASCII character.
fn replace_unicode_punctuation(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\u{2018}' | '\u{2019}' => Some('\''),
            '\u{201C}' | '\u{201D}' => Some('"'),
            c if c.is_ascii() => Some(c),
            _ => None,
        })
        .collect()
}
