use hms_form_rules::cli::{run, Command};
use hms_form_rules::config::AppConfig;
use hms_form_rules::models::PaymentStatus;
use hms_form_rules::records::{export_findings, read_records};
use hms_form_rules::RecordAuditor;
use std::fs;
use tempfile::TempDir;

const HEADER: &str = "patient_id,name,age,gender,locality,condition_severity,priority_level,medical_history,bill_amount,amount_paid,outstanding_amount,payment_status,insurance_coverage,insurance_details,admission_date,discharge_date,timestamp";

// Helper: write a records CSV into a temp dir
fn write_records(dir: &TempDir, rows: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join("patient_records_with_timestamp.csv");
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    fs::write(&path, content).expect("Failed to write records");
    path
}

fn sample_rows() -> Vec<&'static str> {
    vec![
        "HMS-2024-AB12CD34,Asha Rao,34,Female,Jayanagar,Low,Low,,100,40,60.00,Partially Paid,No,,2024-03-01,,2024-03-01T10:00:00",
        // 已付超过应付, 且存储的派生值过期
        "HMS-2024-ZZ99YY88,Ravi Kumar,41,Male,Indiranagar,High,High,Asthma,100,150,-50,Partially Paid,No,,2024-03-02,,2024-03-02T11:00:00",
        // 有保险但没有详情
        "HMS-2024-QQ11WW22,Meera Iyer,67,Female,Whitefield,Critical,Critical,,500,500,0,Fully Paid,Yes,,2024-03-03,,2024-03-03T12:00:00",
        "HMS-2024-PP33LL44,Kiran Das,5,Other,Hebbal,Medium,Medium,,0,0,0,Not Applicable,No,,2024-03-04,,2024-03-04T13:00:00",
    ]
}

fn sequential_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.audit.parallel = false;
    config.audit.progress_every = 1;
    config
}

#[test]
fn test_audit_flags_invalid_and_stale_records() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_records(&dir, &sample_rows());

    let records = read_records(&path).unwrap();
    assert_eq!(records.len(), 4);

    let report = RecordAuditor::new(AppConfig::default().audit).audit(&records);
    let flagged: Vec<usize> = report.flagged().map(|f| f.row).collect();
    assert_eq!(flagged, vec![2, 3]);

    let overpaid = &report.findings[1];
    assert!(overpaid.failures.iter().any(|f| f.field == "amount_paid"));
    assert!(overpaid.stale_outstanding);
    assert!(overpaid.stale_status);
    assert_eq!(overpaid.derived.payment_status, PaymentStatus::FullyPaid);

    let uninsured_details = &report.findings[2];
    assert_eq!(uninsured_details.failures.len(), 1);
    assert_eq!(uninsured_details.failures[0].field, "insurance_details");
    assert!(!uninsured_details.stale_status);
}

#[test]
fn test_parallel_and_sequential_audits_agree() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_records(&dir, &sample_rows());
    let records = read_records(&path).unwrap();

    let parallel = RecordAuditor::new(AppConfig::default().audit).audit(&records);
    let sequential = RecordAuditor::new(sequential_config().audit).audit(&records);

    assert_eq!(parallel.summary, sequential.summary);
    let rows: Vec<usize> = parallel.findings.iter().map(|f| f.row).collect();
    assert_eq!(rows, vec![1, 2, 3, 4]);
}

#[test]
fn test_audit_summary_totals() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_records(&dir, &sample_rows());
    let records = read_records(&path).unwrap();

    let summary = RecordAuditor::new(sequential_config().audit).audit(&records).summary;

    assert_eq!(summary.total_records, 4);
    assert_eq!(summary.count(PaymentStatus::PartiallyPaid), 1);
    assert_eq!(summary.count(PaymentStatus::FullyPaid), 2);
    assert_eq!(summary.count(PaymentStatus::NotApplicable), 1);
    assert_eq!(summary.total_billed.to_string(), "700.00");
    assert_eq!(summary.total_paid.to_string(), "690.00");
    assert_eq!(summary.total_outstanding.to_string(), "60.00");
}

#[test]
fn test_export_findings_writes_header_and_rows() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_records(&dir, &sample_rows());
    let records = read_records(&path).unwrap();
    let report = RecordAuditor::new(sequential_config().audit).audit(&records);

    let out = dir.path().join("findings.csv");
    let flagged: Vec<_> = report.flagged().cloned().collect();
    export_findings(&flagged, &out).unwrap();

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("row,patient_id,failures"));
    assert!(lines[1].starts_with("2,HMS-2024-ZZ99YY88,"));
    assert!(lines[1].contains("amount_paid: Amount paid exceeds bill amount"));
}

#[test]
fn test_read_records_nonexistent_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let result = read_records(&dir.path().join("missing.csv"));
    assert!(result.is_err());
}

#[test]
fn test_cli_audit_writes_output_and_reports_flags() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_records(&dir, &sample_rows());
    let output = dir.path().join("out.csv");

    let command = Command::Audit {
        input,
        output: Some(output.clone()),
    };
    let mut out = Vec::new();
    let ok = run(&command, &sequential_config(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(!ok);
    assert!(text.contains("records: 4"));
    assert!(text.contains("flagged records: 2"));
    assert!(text.contains("total billed: ₹700.00"));
    assert!(output.exists());
}

#[test]
fn test_cli_validate_submission_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("intake.json");
    fs::write(
        &path,
        r#"{"form":"emergency_intake","values":{"patient_id":"HMS-2024-AB12CD34","name":"Ravi","priority":"High","condition":"Fracture"}}"#,
    )
    .unwrap();

    let mut out = Vec::new();
    let ok = run(&Command::Validate { submission: path }, &AppConfig::default(), &mut out).unwrap();
    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert!(ok);
    assert_eq!(report["form"], "emergency_intake");
    assert_eq!(report["failures"].as_array().unwrap().len(), 0);
}

#[test]
fn test_cli_validate_accepts_numeric_json_values() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("registration.json");
    fs::write(
        &path,
        r#"{"form":"patient_registration","values":{"name":"Asha Rao","age":34,"gender":"Female","condition_severity":"Low","bill_amount":100,"amount_paid":150,"insurance_coverage":"No"}}"#,
    )
    .unwrap();

    let mut out = Vec::new();
    let ok = run(&Command::Validate { submission: path }, &AppConfig::default(), &mut out).unwrap();
    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert!(!ok);
    let failures = report["failures"].as_array().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0]["field"], "amount_paid");
    assert_eq!(failures[0]["message"], "Amount paid exceeds bill amount");
}

#[test]
fn test_cli_validate_unknown_form() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("discharge.json");
    fs::write(&path, r#"{"form":"discharge","values":{}}"#).unwrap();

    let mut out = Vec::new();
    let result = run(&Command::Validate { submission: path }, &AppConfig::default(), &mut out);
    assert!(matches!(
        result,
        Err(hms_form_rules::FormRulesError::UnknownForm(name)) if name == "discharge"
    ));
}
