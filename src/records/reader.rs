use crate::error::Result;
use crate::models::{FormSubmission, PatientRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// 读取病人记录 CSV 文件
pub fn read_records(path: &Path) -> Result<Vec<PatientRecord>> {
    let file = File::open(path)?;
    let records = read_records_from(file)?;
    tracing::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// 从任意输入读取记录; 无法解析的行记日志后跳过
pub fn read_records_from<R: Read>(input: R) -> Result<Vec<PatientRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<PatientRecord>().enumerate() {
        match row {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!("Skipping unreadable row {}: {}", idx + 1, e);
            }
        }
    }

    Ok(records)
}

/// 读取 JSON 格式的表单提交
pub fn read_submission(path: &Path) -> Result<FormSubmission> {
    let file = File::open(path)?;
    let submission = serde_json::from_reader(BufReader::new(file))?;
    Ok(submission)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_default_to_empty() {
        let csv = "patient_id,name,bill_amount\nHMS-2024-AB12CD34,Asha,100\n";
        let records = read_records_from(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].patient_id, "HMS-2024-AB12CD34");
        assert_eq!(records[0].bill_amount, "100");
        assert_eq!(records[0].amount_paid, "");
    }

    #[test]
    fn fields_are_trimmed() {
        let csv = "patient_id , name\n HMS-2024-AB12CD34 ,  Asha \n";
        let records = read_records_from(csv.as_bytes()).unwrap();
        assert_eq!(records[0].name, "Asha");
    }

    #[test]
    fn short_rows_are_kept() {
        let csv = "patient_id,name,age\nHMS-2024-AB12CD34,Asha\nHMS-2024-ZZ99YY88,Ravi,41\n";
        let records = read_records_from(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].age, "");
        assert_eq!(records[1].age, "41");
    }
}
