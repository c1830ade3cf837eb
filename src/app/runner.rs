use crate::config::{CliConfig, Command};
use crate::core::index::IndexCalculator;
use crate::core::revpar::{compute_revpar_from_adr, compute_revpar_from_revenue};
use crate::domain::model::RevparIndexReport;
use crate::utils::error::{ErrorSeverity, RevparError, Result};
use crate::utils::validation::Validate;

/// Runs the parsed command and returns the text to print on stdout.
pub fn run(config: &CliConfig) -> Result<String> {
    config.validate()?;
    let settings = config.load_settings()?;
    if let Some(path) = &config.config {
        tracing::info!("📁 Settings loaded from: {}", path);
    }

    match &config.command {
        Command::FromRevenue { revenue, rooms } => {
            let revpar = compute_revpar_from_revenue(*revenue, *rooms)?;
            format_scalar(config.json, revpar)
        }
        Command::FromAdr { adr, occupancy } => {
            let revpar = compute_revpar_from_adr(*adr, *occupancy)?;
            format_scalar(config.json, revpar)
        }
        Command::Index(args) => {
            let calculator = IndexCalculator::new(settings);
            let report = calculator.compute(&args.to_input())?;
            if config.json {
                Ok(serde_json::to_string_pretty(&report)?)
            } else {
                Ok(format_report(&report))
            }
        }
    }
}

/// 根據錯誤嚴重程度決定退出碼
pub fn exit_code(error: &RevparError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

pub fn format_scalar(json: bool, revpar: f64) -> Result<String> {
    if json {
        Ok(serde_json::to_string(&serde_json::json!({ "revpar": revpar }))?)
    } else {
        Ok(format!("RevPAR: {:.2}", revpar))
    }
}

pub fn format_report(report: &RevparIndexReport) -> String {
    let mut lines = vec![
        format!("Property RevPAR: {:.2}", report.property_revpar),
        format!("Market RevPAR:   {:.2}", report.market_revpar),
        format!(
            "MPI {:.4}  ARI {:.4}  RGI {:.4}",
            report.mpi, report.ari, report.rgi
        ),
    ];
    if let (Some(revpar), Some(mpi), Some(ari), Some(rgi)) = (
        report.comp_set_revpar,
        report.comp_mpi,
        report.comp_ari,
        report.comp_rgi,
    ) {
        lines.push(format!("Comp set RevPAR: {:.2}", revpar));
        lines.push(format!("Comp MPI {:.4}  ARI {:.4}  RGI {:.4}", mpi, ari, rgi));
    }
    lines.push(format!(
        "Room nights: {} available, {} sold, revenue {:.2}",
        report.available_room_nights, report.sold_room_nights, report.room_revenue
    ));
    lines.push(format!("Assessment: {}", report.penetration_assessment));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("revpar").chain(args.iter().copied())).unwrap()
    }

    const INDEX_ARGS: [&str; 11] = [
        "index",
        "--room-count",
        "30",
        "--adr",
        "350",
        "--occupancy",
        "0.75",
        "--market-adr",
        "300",
        "--market-occupancy",
        "0.70",
    ];

    #[test]
    fn test_from_revenue_text_output() {
        let output = run(&parse(&["from-revenue", "--revenue", "10000", "--rooms", "50"])).unwrap();
        assert_eq!(output, "RevPAR: 200.00");
    }

    #[test]
    fn test_from_adr_json_output() {
        let output = run(&parse(&["--json", "from-adr", "--adr", "150", "--occupancy", "0.8"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!((value["revpar"].as_f64().unwrap() - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_occupancy_exits_with_status_one() {
        let err = run(&parse(&["from-adr", "--adr", "150", "--occupancy", "1.5"])).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_non_positive_rooms_exits_with_status_one() {
        let err = run(&parse(&["from-revenue", "--revenue", "5000", "--rooms", "0"])).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_missing_settings_file_exits_with_status_three() {
        let err = run(&parse(&[
            "--config",
            "/nonexistent/revpar.toml",
            "from-adr",
            "--adr",
            "150",
            "--occupancy",
            "0.8",
        ]))
        .unwrap_err();
        assert!(matches!(err, RevparError::IoError(_)));
        assert_eq!(exit_code(&err), 3);
    }

    #[test]
    fn test_index_text_output() {
        let output = run(&parse(&INDEX_ARGS)).unwrap();
        assert!(output.contains("Property RevPAR: 262.50"));
        assert!(output.contains("Market RevPAR:   210.00"));
        assert!(output.contains("MPI 1.0714  ARI 1.1667  RGI 1.2500"));
        assert!(output.contains("Room nights: 10950 available, 8213 sold"));
        assert!(output.ends_with("Assessment: outperforming"));
        assert!(!output.contains("Comp set"));
    }

    #[test]
    fn test_index_json_output_uses_settings_file() {
        let mut settings = NamedTempFile::new().unwrap();
        settings
            .write_all(b"[assessment]\noutperform_threshold = 1.30\nunderperform_threshold = 0.80\n")
            .unwrap();
        let path = settings.path().to_str().unwrap().to_string();

        let mut args = vec!["--json", "--config", path.as_str()];
        args.extend_from_slice(&INDEX_ARGS);
        let output = run(&parse(&args)).unwrap();

        let report: RevparIndexReport = serde_json::from_str(&output).unwrap();
        assert_eq!(report.rgi, 1.25);
        assert_eq!(report.penetration_assessment.to_string(), "at_market");
    }

    #[test]
    fn test_serialization_error_severity_maps_to_two() {
        let err: RevparError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert_eq!(exit_code(&err), 2);
    }
}
