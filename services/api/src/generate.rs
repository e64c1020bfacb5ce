use crate::infra::build_generator;
use clap::Args;
use decision_pipeline::config::AppConfig;
use decision_pipeline::error::AppError;
use decision_pipeline::telemetry;
use decision_pipeline::workflows::screening::{
    write_csv, write_xlsx, BatchRequest, DataType, InputError, MergedRecord, RandomAge,
    RecordCount, ScreeningBatch, ScreeningPipeline, SlaTracker, SystemClock,
    DEFAULT_CSV_FILE_NAME, DEFAULT_XLSX_FILE_NAME,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct GenerateArgs {
    /// Kind of synthetic data to request (resume, support-ticket, invoice)
    #[arg(long, default_value = "resume", value_parser = parse_data_type)]
    pub(crate) data_type: DataType,
    /// Number of records to request (1-5)
    #[arg(long, default_value = "3", value_parser = parse_record_count)]
    pub(crate) count: RecordCount,
    /// CSV destination (defaults to synthetic_ai_system.csv)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Also write an Excel workbook (defaults to synthetic_ai_system.xlsx)
    #[arg(long)]
    pub(crate) xlsx: bool,
    /// Excel workbook destination; implies --xlsx
    #[arg(long)]
    pub(crate) output_xlsx: Option<PathBuf>,
    /// Seed the synthetic record ages for reproducible SLA results
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Use canned replies instead of calling the text service
    #[arg(long)]
    pub(crate) offline: bool,
}

fn parse_data_type(raw: &str) -> Result<DataType, InputError> {
    raw.parse()
}

fn parse_record_count(raw: &str) -> Result<RecordCount, InputError> {
    raw.parse()
}

pub(crate) async fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let GenerateArgs {
        data_type,
        count,
        output,
        xlsx,
        output_xlsx,
        seed,
        offline,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let generator = build_generator(&config.generation, offline);
    let ages = seed
        .map(RandomAge::seeded)
        .unwrap_or_else(RandomAge::from_entropy);
    let request = BatchRequest { data_type, count };

    let batch = tokio::task::spawn_blocking(move || {
        ScreeningPipeline::with_sla_tracker(generator, SlaTracker::new(SystemClock, ages))
            .run(request)
    })
    .await
    .map_err(|err| AppError::Task(err.to_string()))??;

    println!(
        "Screening batch: {} ({} requested{})",
        data_type,
        count.get(),
        if offline { ", offline" } else { "" }
    );

    if batch.is_empty() {
        println!("No data generated.");
        return Ok(());
    }

    render_batch(&batch);

    let path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_FILE_NAME));
    let file = File::create(&path)?;
    write_csv(&batch, BufWriter::new(file))?;
    println!("\nCSV written to {}", path.display());

    if let Some(path) = xlsx_destination(xlsx, output_xlsx) {
        write_xlsx(&batch, &path)?;
        println!("Excel workbook written to {}", path.display());
    }

    Ok(())
}

fn xlsx_destination(requested: bool, path: Option<PathBuf>) -> Option<PathBuf> {
    match path {
        Some(path) => Some(path),
        None if requested => Some(PathBuf::from(DEFAULT_XLSX_FILE_NAME)),
        None => None,
    }
}

fn render_batch(batch: &ScreeningBatch) {
    println!(
        "\n{:<22} {:<8} {:>5}  {:<14} {:<7} {:<12} {:<9} {}",
        "Name", "Decision", "Conf", "Stage", "Risk", "Compliance", "SLA", "Alert"
    );
    for record in batch.records() {
        println!("{}", summary_row(record));
    }

    let alerts = batch
        .records()
        .iter()
        .filter(|record| record.alert.required)
        .count();
    println!("\n{} record(s) screened, {} alert(s) raised", batch.len(), alerts);
}

fn summary_row(record: &MergedRecord) -> String {
    let alert = if record.alert.required {
        format!(
            "{} -> {}",
            record.alert.severity.label(),
            record.alert.escalation.label()
        )
    } else {
        "-".to_string()
    };

    format!(
        "{:<22} {:<8} {:>5}  {:<14} {:<7} {:<12} {:<9} {}",
        truncate(&record.candidate.name, 22),
        record.decision.decision.label(),
        record.decision.confidence_score,
        record.workflow.stage.label(),
        record.risk.level.label(),
        record.compliance.status.label(),
        record.sla.status.label(),
        alert
    )
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let mut clipped: String = value.chars().take(width.saturating_sub(1)).collect();
        clipped.push('~');
        clipped
    }
}
