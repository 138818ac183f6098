use crate::config::AppConfig;
use crate::error::{FormRulesError, Result};
use crate::records;
use crate::service::billing::format_money;
use crate::service::{schemas, BillingDeriver, FormValidator, RecordAuditor};
use std::io::Write;
use std::path::PathBuf;

pub const USAGE: &str = "usage:
  hms-form-rules validate <submission.json>
  hms-form-rules derive <bill_amount> <amount_paid>
  hms-form-rules audit <records.csv> [findings.csv]";

/// 命令行子命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Validate { submission: PathBuf },
    Derive { bill_amount: String, amount_paid: String },
    Audit { input: PathBuf, output: Option<PathBuf> },
}

impl Command {
    /// 解析命令行参数 (第一个参数为程序名)
    pub fn parse(mut args: impl Iterator<Item = String>) -> Result<Command> {
        args.next();

        let usage = || FormRulesError::Usage(USAGE.to_string());
        let command = args.next().ok_or_else(usage)?;

        let parsed = match command.as_str() {
            "validate" => Command::Validate {
                submission: args.next().ok_or_else(usage)?.into(),
            },
            "derive" => Command::Derive {
                bill_amount: args.next().unwrap_or_default(),
                amount_paid: args.next().unwrap_or_default(),
            },
            "audit" => Command::Audit {
                input: args.next().ok_or_else(usage)?.into(),
                output: args.next().map(PathBuf::from),
            },
            _ => return Err(usage()),
        };

        if args.next().is_some() {
            return Err(usage());
        }
        Ok(parsed)
    }
}

/// 执行子命令; 返回 false 表示表单被拦截或记录有问题
pub fn run(command: &Command, config: &AppConfig, out: &mut impl Write) -> Result<bool> {
    match command {
        Command::Validate { submission } => {
            let submission = records::read_submission(submission)?;
            let validator = FormValidator::new(schemas::by_name(&submission.form)?);
            let report = validator.validate(&submission.values);

            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
            Ok(report.valid)
        }
        Command::Derive {
            bill_amount,
            amount_paid,
        } => {
            let state = BillingDeriver::derive_from_input(bill_amount, amount_paid);
            let symbol = &config.display.currency_symbol;

            writeln!(out, "outstanding: {}", format_money(&state.outstanding, symbol))?;
            writeln!(out, "payment status: {}", state.payment_status)?;
            if state.exceeds_bill() {
                writeln!(out, "error: {}", crate::service::billing::AMOUNT_EXCEEDS_BILL_MESSAGE)?;
            }
            Ok(!state.exceeds_bill())
        }
        Command::Audit { input, output } => {
            let records = records::read_records(input)?;
            let report = RecordAuditor::new(config.audit.clone()).audit(&records);
            let summary = &report.summary;
            let symbol = &config.display.currency_symbol;

            writeln!(out, "records: {}", summary.total_records)?;
            writeln!(
                out,
                "not applicable: {}, unpaid: {}, partially paid: {}, fully paid: {}",
                summary.not_applicable, summary.unpaid, summary.partially_paid, summary.fully_paid
            )?;
            writeln!(out, "total billed: {}", format_money(&summary.total_billed, symbol))?;
            writeln!(out, "total paid: {}", format_money(&summary.total_paid, symbol))?;
            writeln!(
                out,
                "total outstanding: {}",
                format_money(&summary.total_outstanding, symbol)
            )?;
            writeln!(out, "collection rate: {}%", summary.collection_rate)?;

            let flagged: Vec<_> = report.flagged().cloned().collect();
            writeln!(out, "flagged records: {}", flagged.len())?;

            let output = output
                .clone()
                .or_else(|| config.audit.output.as_ref().map(PathBuf::from));
            if let Some(path) = output {
                records::export_findings(&flagged, &path)?;
            }

            Ok(flagged.is_empty())
        }
    }
}
