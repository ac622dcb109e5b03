//! Integration tests for end-to-end ranking runs.
//!
//! These tests drive the public API the way the CLI and the HTTP service do:
//! 1. Parse CSV or Excel input into a raw table
//! 2. Validate, rank, and augment it
//! 3. Serialize the result and, for the handler, deliver it

use std::sync::Arc;

use tempfile::TempDir;

use topsis_ranker::adapters::dataset::{CsvResultWriter, CsvTableReader, DatasetReader};
use topsis_ranker::adapters::email::RecordingMailer;
use topsis_ranker::application::{DatasetUpload, RunTopsisCommand, RunTopsisError, RunTopsisHandler};
use topsis_ranker::domain::analysis::{TopsisAnalyzer, TopsisError, ValidationOptions, VectorKind};
use topsis_ranker::ports::{ResultMailer, RESULT_BODY, RESULT_SUBJECT};

// =============================================================================
// Fixtures
// =============================================================================

const PHONES: &str = "Model,Price,Storage,Camera\n\
                      M1,250,16,12\n\
                      M2,200,16,8\n\
                      M3,300,32,16\n\
                      M4,275,32,8\n";

const GOLDEN_SCORES: [f64; 4] = [
    0.4293805898196106,
    0.20161469955448094,
    0.798385300445519,
    0.3102412845421036,
];

fn evaluate(csv: &str, weights: &str, impacts: &str) -> Result<Vec<(f64, u32)>, TopsisError> {
    let table = CsvTableReader::parse_str(csv).expect("fixture parses");
    let result = TopsisAnalyzer::evaluate(&table, weights, impacts, ValidationOptions::default())?;
    Ok(result.rows.iter().map(|r| (r.score, r.rank)).collect())
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn scenario_a_happy_path() {
    let ranked = evaluate(PHONES, "0.25,0.25,0.5", "-,+,+").unwrap();

    let ranks: Vec<u32> = ranked.iter().map(|(_, rank)| *rank).collect();
    assert_eq!(ranks, vec![2, 4, 1, 3]);

    for ((score, _), expected) in ranked.iter().zip(GOLDEN_SCORES) {
        assert!((score - expected).abs() < 1e-12, "{} vs {}", score, expected);
        assert!((0.0..=1.0).contains(score));
    }
}

#[test]
fn scenario_b_weight_count_mismatch() {
    let err = evaluate(PHONES, "1,1", "-,+,+").unwrap_err();

    assert_eq!(
        err,
        TopsisError::DimensionMismatch {
            vector: VectorKind::Weights,
            expected: 3,
            actual: 2,
        }
    );
}

#[test]
fn scenario_c_bad_impact_token() {
    let err = evaluate(PHONES, "1,1,1", "+,+,x").unwrap_err();

    assert_eq!(
        err,
        TopsisError::InvalidImpactToken {
            position: 3,
            token: "x".to_string(),
        }
    );
}

#[test]
fn scenario_d_non_numeric_cell() {
    let csv = "Model,Price,Storage,Camera\nM1,250,16,12\nM2,cheap,16,8\n";

    let err = evaluate(csv, "1,1,1", "-,+,+").unwrap_err();

    assert_eq!(
        err,
        TopsisError::NonNumeric {
            row: 2,
            column: "Price".to_string(),
            value: "cheap".to_string(),
        }
    );
}

#[test]
fn scenario_e_all_zero_column() {
    let csv = "Model,Price,Storage,Camera\nM1,250,0,12\nM2,200,0,8\nM3,300,0,16\n";

    let err = evaluate(csv, "1,1,1", "-,+,+").unwrap_err();

    assert_eq!(
        err,
        TopsisError::DegenerateColumn {
            column: "Storage".to_string(),
        }
    );
    assert!(err.is_degeneracy());
}

#[test]
fn ragged_row_is_schema_error() {
    let csv = "Model,Price,Storage\nM1,250,16\nM2,200\n";

    let err = evaluate(csv, "1,1", "-,+").unwrap_err();

    assert_eq!(err.code(), "SCHEMA_ERROR");
}

// =============================================================================
// File round trip
// =============================================================================

#[test]
fn result_file_echoes_input_and_appends_columns() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("phones.csv");
    let output = dir.path().join("result.csv");
    std::fs::write(&input, PHONES).unwrap();

    let table = DatasetReader::read_path(&input).unwrap();
    let result =
        TopsisAnalyzer::evaluate(&table, "0.25,0.25,0.5", "-,+,+", ValidationOptions::default())
            .unwrap();
    CsvResultWriter::write_path(&result, &output).unwrap();

    let reread = DatasetReader::read_path(&output).unwrap();
    assert_eq!(
        reread.headers,
        vec!["Model", "Price", "Storage", "Camera", "Topsis Score", "Rank"]
    );
    assert_eq!(reread.rows[2][..4], ["M3", "300", "32", "16"]);
    assert_eq!(reread.rows[2][5], "1");
    let score: f64 = reread.rows[2][4].parse().unwrap();
    assert_eq!(score, result.rows[2].score);
}

#[test]
fn excel_workbook_matches_csv_scores() {
    let workbook = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/phones.xlsx");

    let table = DatasetReader::read_path(&workbook).unwrap();
    let result =
        TopsisAnalyzer::evaluate(&table, "0.25,0.25,0.5", "-,+,+", ValidationOptions::default())
            .unwrap();

    let ranks: Vec<u32> = result.rows.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![2, 4, 1, 3]);
    for (row, expected) in result.rows.iter().zip(GOLDEN_SCORES) {
        assert!((row.score - expected).abs() < 1e-12);
    }
}

#[test]
fn huge_weight_still_ranks() {
    let ranked = evaluate("Id,A,B\nx,1,4\ny,2,3\nz,3,1\n", "1e200,1", "+,+").unwrap();

    let ranks: Vec<u32> = ranked.iter().map(|(_, rank)| *rank).collect();
    assert_eq!(ranks, vec![3, 2, 1]);
    assert!(ranked.iter().all(|(score, _)| score.is_finite()));
}

// =============================================================================
// Application handler
// =============================================================================

#[tokio::test]
async fn handler_ranks_and_delivers() {
    let mailer = RecordingMailer::new();
    let handler = RunTopsisHandler::new(
        Some(Arc::new(mailer.clone()) as Arc<dyn ResultMailer>),
        ValidationOptions::default(),
    );

    let result = handler
        .handle(RunTopsisCommand {
            dataset: DatasetUpload::Csv(PHONES.to_string()),
            weights: "0.25,0.25,0.5".to_string(),
            impacts: "-,+,+".to_string(),
            recipient: Some("analyst@example.com".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(result.table.leaders(), vec!["M3"]);
    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, RESULT_SUBJECT);
    assert_eq!(sent[0].body, RESULT_BODY);
    assert_eq!(sent[0].attachment.content_type, "application/octet-stream");
}

#[tokio::test]
async fn handler_returns_no_partial_result_on_degeneracy() {
    let mailer = RecordingMailer::new();
    let handler = RunTopsisHandler::new(
        Some(Arc::new(mailer.clone()) as Arc<dyn ResultMailer>),
        ValidationOptions::default(),
    );

    let err = handler
        .handle(RunTopsisCommand {
            dataset: DatasetUpload::Csv("Id,A,B\nx,5,5\ny,5,5\n".to_string()),
            weights: "1,1".to_string(),
            impacts: "+,-".to_string(),
            recipient: Some("analyst@example.com".to_string()),
        })
        .await
        .unwrap_err();

    assert_eq!(
        err,
        RunTopsisError::Analysis(TopsisError::DegenerateScore { row: 1 })
    );
    assert!(mailer.sent().is_empty());
}
