/*!
 * End-to-end tests for the alignment pipeline
 */

use anyhow::Result;
use scriptsync::app_config::Config;
use scriptsync::app_controller::Controller;
use scriptsync::errors::TitleError;
use crate::common;

const SCRIPT_TEXT: &str = "Hello world today\nGood morning everyone\n";

/// Analysis transcript matching SCRIPT_TEXT, with non-speech markers and a
/// trailing end-of-stream row that sets the 5 second clip duration
fn analysis_text() -> String {
    let mut tsv = String::new();
    tsv.push_str(&common::analysis_row(0, 100, "<s>"));
    tsv.push_str(&common::analysis_row(100, 400, "hello"));
    tsv.push_str(&common::analysis_row(500, 400, "world"));
    tsv.push_str(&common::analysis_row(900, 500, "today"));
    tsv.push_str(&common::analysis_row(1400, 100, "<sil>"));
    tsv.push_str(&common::analysis_row(1500, 400, "good"));
    tsv.push_str(&common::analysis_row(1900, 400, "morning"));
    tsv.push_str(&common::analysis_row(2300, 700, "everyone"));
    tsv.push_str(&common::analysis_row(3000, 2000, "</s>"));
    tsv
}

/// Test the in-memory pipeline end to end with exact output
#[test]
fn test_generate_srt_withFullyMatchedScript_shouldProduceExactSrt() -> Result<()> {
    let controller = Controller::with_config(Config::default())?;

    let (srt, report) = controller.generate_srt(SCRIPT_TEXT, &analysis_text())?;

    let expected = "1\n\
                    00:00:00,100 --> 00:00:01,400\n\
                    Hello world today\n\
                    \n\
                    2\n\
                    00:00:01,500 --> 00:00:03,000\n\
                    Good morning everyone\n\
                    \n";
    assert_eq!(srt, expected);
    assert_eq!(report.resolved_count, 2);
    assert!(report.missing.is_empty());

    Ok(())
}

/// Test that an unlocatable title line is reported without dropping the rest
#[test]
fn test_generate_srt_withTokenlessLine_shouldReportMissingTitle() -> Result<()> {
    let controller = Controller::with_config(Config::default())?;
    let script = "Hello world today\n***\nGood morning everyone\n";

    let (srt, report) = controller.generate_srt(script, &analysis_text())?;

    assert_eq!(report.resolved_count, 2);
    assert_eq!(
        report.missing,
        vec![TitleError::NotFound {
            index: 2,
            text: "***".to_string(),
        }]
    );
    assert!(srt.contains("Hello world today"));
    assert!(srt.contains("Good morning everyone"));

    Ok(())
}

/// Test that a malformed analysis row fails the run with its line number
#[test]
fn test_generate_srt_withMalformedAnalysisRow_shouldFail() -> Result<()> {
    let controller = Controller::with_config(Config::default())?;
    let mut tsv = analysis_text();
    tsv.push_str("oops\n");

    let err = controller
        .generate_srt(SCRIPT_TEXT, &tsv)
        .unwrap_err();
    assert!(format!("{:#}", err).contains("line 10"));

    Ok(())
}

/// Test the file-based workflow including overwrite protection
#[test]
fn test_run_withTempFiles_shouldWriteAndProtectOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir_path = temp_dir.path().to_path_buf();

    let script_file = common::create_test_file(&dir_path, "episode.txt", SCRIPT_TEXT)?;
    let analysis_file = common::create_test_file(&dir_path, "episode.tsv", &analysis_text())?;

    let controller = Controller::with_config(Config::default())?;

    // Default output path sits next to the script
    let report = controller.run(&script_file, &analysis_file, None, false)?;
    assert_eq!(report.resolved_count, 2);

    let output_file = dir_path.join("episode.srt");
    let content = std::fs::read_to_string(&output_file)?;
    assert!(content.starts_with("1\n00:00:00,100"));

    // A second run without force must refuse to overwrite
    let err = controller
        .run(&script_file, &analysis_file, None, false)
        .unwrap_err();
    assert!(err.to_string().contains("already exists"));

    // Forcing the overwrite succeeds
    controller.run(&script_file, &analysis_file, None, true)?;

    Ok(())
}

/// Test that missing input files fail up front
#[test]
fn test_run_withMissingInputs_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir_path = temp_dir.path().to_path_buf();
    let script_file = common::create_test_file(&dir_path, "episode.txt", SCRIPT_TEXT)?;

    let controller = Controller::with_config(Config::default())?;

    let err = controller
        .run(&script_file, &dir_path.join("absent.tsv"), None, false)
        .unwrap_err();
    assert!(err.to_string().contains("Analysis file does not exist"));

    Ok(())
}

/// Test that an invalid configuration is rejected at construction
#[test]
fn test_with_config_withInvalidConfig_shouldFail() {
    let config = Config {
        min_phrase_length: 0,
        ..Config::default()
    };
    assert!(Controller::with_config(config).is_err());
}

/// Test that a script with no words at all fails the run
#[test]
fn test_generate_srt_withWordlessScript_shouldFail() -> Result<()> {
    let controller = Controller::with_config(Config::default())?;

    let err = controller
        .generate_srt("***\n!!!\n", &analysis_text())
        .unwrap_err();
    assert!(err.to_string().contains("no words"));

    Ok(())
}
