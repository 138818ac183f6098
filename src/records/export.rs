use crate::error::Result;
use crate::models::RecordFinding;
use std::io::Write;
use std::path::Path;

const HEADER: [&str; 9] = [
    "row",
    "patient_id",
    "failures",
    "stored_outstanding",
    "derived_outstanding",
    "stored_status",
    "derived_status",
    "stale_outstanding",
    "stale_status",
];

/// 把失败列表拼成一列: `field: message; field: message`
fn join_failures(finding: &RecordFinding) -> String {
    finding
        .failures
        .iter()
        .map(|f| format!("{}: {}", f.field, f.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// 导出审计结果到 CSV 文件
pub fn export_findings(findings: &[RecordFinding], output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path)?;
    write_findings(findings, file)?;
    tracing::info!("Wrote {} findings to {}", findings.len(), output_path.display());
    Ok(())
}

pub fn write_findings<W: Write>(findings: &[RecordFinding], output: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(HEADER)?;

    for finding in findings {
        writer.write_record(&[
            finding.row.to_string(),
            finding.patient_id.clone(),
            join_failures(finding),
            finding.stored_outstanding.clone(),
            finding.derived.outstanding.to_string(),
            finding.stored_status.clone(),
            finding.derived.payment_status.label().to_string(),
            finding.stale_outstanding.to_string(),
            finding.stale_status.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
