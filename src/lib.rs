/*!
 * # ScriptSync - subtitle timing from script and speech analysis
 *
 * A Rust library for recovering subtitle timecodes by aligning a plain-text
 * script against a time-coded, word-level speech-recognition transcript.
 *
 * ## Features
 *
 * - Phrase-based word alignment between the script and the transcript
 * - Linear interpolation of timing for words with no exact match
 * - Per-title boundary resolution with overlap clamping and a
 *   minimum legible duration heuristic
 * - SRT serialization with unbounded-hours timecodes
 * - Configurable matching and reading-speed parameters
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `tokenizer`: Script and analysis transcript parsing
 * - `aligner`: Phrase matching and interpolation over word streams
 * - `title_resolver`: Title boundary resolution and reconciliation
 * - `subtitle_processor`: SRT rendering and timecode formatting
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod aligner;
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod subtitle_processor;
pub mod title_resolver;
pub mod tokenizer;

// Re-export main types for easier usage
pub use aligner::{Phrase, Word, WordAligner};
pub use app_config::Config;
pub use app_controller::{Controller, RunReport};
pub use errors::{AnalysisError, AppError, TitleError};
pub use subtitle_processor::{SubtitleCollection, SubtitleEntry};
pub use title_resolver::{ResolvedTitles, Title, TitleBoundaryResolver};
pub use tokenizer::{AnalysisStream, ScriptStream};
