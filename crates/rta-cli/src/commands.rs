use std::fs;

use anyhow::{Context, Result};
use tracing::{info, warn};

use rta_import::{ImportError, ImportOutcome, ImportRunner, MemorySink};
use rta_ingest::{write_records_to_path, write_template_to_path};
use rta_model::{TradeRecord, names};

use crate::cli::{ImportArgs, TemplateArgs};
use rta_cli::logging::redact_value;

/// What `import` hands to the summary printer.
pub struct ImportReport {
    pub outcome: ImportOutcome,
    /// Set when the stream died mid-batch; the outcome is then partial.
    pub aborted: Option<String>,
    pub records: Vec<TradeRecord>,
}

impl ImportReport {
    pub fn failed(&self) -> bool {
        self.aborted.is_some() || self.outcome.failed > 0
    }
}

pub fn run_import(args: &ImportArgs) -> Result<ImportReport> {
    let mut runner = ImportRunner::new(MemorySink::new());
    let report = match runner.run_path(&args.file) {
        Ok(outcome) => ImportReport {
            outcome,
            aborted: None,
            records: runner.into_sink().into_records(),
        },
        Err(ImportError::Aborted { source, partial }) => {
            warn!(error = %source, "batch aborted; reporting partial outcome");
            ImportReport {
                outcome: *partial,
                aborted: Some(source.to_string()),
                records: runner.into_sink().into_records(),
            }
        }
    };

    for error in &report.outcome.errors {
        tracing::trace!(
            line = error.line,
            uid = %redact_value(error.data.get(names::DESENSITIZED_UID)),
            "failed row"
        );
    }

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&report.outcome)
            .context("serialize outcome report")?;
        fs::write(path, json)
            .with_context(|| format!("write report to {}", path.display()))?;
        info!(path = %path.display(), "outcome report written");
    }
    if let Some(path) = &args.export {
        write_records_to_path(path, &report.records)
            .with_context(|| format!("export records to {}", path.display()))?;
        info!(
            path = %path.display(),
            records = report.records.len(),
            "canonical export written"
        );
    }
    Ok(report)
}

pub fn run_template(args: &TemplateArgs) -> Result<()> {
    write_template_to_path(&args.path)
        .with_context(|| format!("write template to {}", args.path.display()))?;
    println!("Template written to {}", args.path.display());
    Ok(())
}
