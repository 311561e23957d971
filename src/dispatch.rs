use crate::dlog;
use crate::error::{Result, TrainingError};
use crate::types::{Package, Summary, WorkoutKind, WorkoutRecord};
use std::io::Write;

/// Build a record from a sensor tag and its positional readings.
///
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
/// - `SWM`: action, duration, weight, pool length, pool count
pub fn resolve(tag: &str, params: &[f64]) -> Result<WorkoutRecord> {
    let kind: WorkoutKind = tag.parse()?;
    if params.len() != kind.arity() {
        return Err(TrainingError::invalid(
            tag,
            format!("expected {} values, got {}", kind.arity(), params.len()),
        ));
    }

    let action = count(tag, "action", params[0])?;
    let (duration, weight) = (params[1], params[2]);

    match kind {
        WorkoutKind::Running => WorkoutRecord::running(action, duration, weight),
        WorkoutKind::Walking => WorkoutRecord::walking(action, duration, weight, params[3]),
        WorkoutKind::Swimming => {
            let count_pool = count(tag, "pool count", params[4])?;
            WorkoutRecord::swimming(action, duration, weight, params[3], count_pool)
        }
    }
}

/// Compute the summary for `record` and write its message line to `out`.
pub fn run<W: Write>(record: &WorkoutRecord, out: &mut W) -> anyhow::Result<Summary> {
    let summary = Summary::from_record(record)?;
    writeln!(out, "{summary}")?;
    Ok(summary)
}

/// Outcome of a batch: how many lines were written and which packages failed.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub emitted: usize,
    pub failures: Vec<BatchFailure>,
}

#[derive(Debug)]
pub struct BatchFailure {
    pub index: usize,
    pub workout_type: String,
    pub error: anyhow::Error,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// How each summary is rendered onto the sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Process packages in order. A failing package is logged and skipped.
pub fn run_batch<W: Write>(packages: &[Package], out: &mut W) -> BatchReport {
    run_batch_as(packages, out, OutputFormat::Text)
}

pub fn run_batch_as<W: Write>(
    packages: &[Package],
    out: &mut W,
    format: OutputFormat,
) -> BatchReport {
    let mut report = BatchReport::default();

    for (index, pkg) in packages.iter().enumerate() {
        dlog!(
            "package index={} type={} data={:?}",
            index,
            pkg.workout_type,
            pkg.data
        );

        let outcome = resolve(&pkg.workout_type, &pkg.data)
            .map_err(anyhow::Error::from)
            .and_then(|record| match format {
                OutputFormat::Text => run(&record, out),
                OutputFormat::Json => emit_json(&record, out),
            });

        match outcome {
            Ok(_) => report.emitted += 1,
            Err(error) => {
                tracing::warn!(
                    index,
                    workout_type = %pkg.workout_type,
                    err = %error,
                    "skipping package"
                );
                report.failures.push(BatchFailure {
                    index,
                    workout_type: pkg.workout_type.clone(),
                    error,
                });
            }
        }
    }

    tracing::info!(
        packages = packages.len(),
        emitted = report.emitted,
        failed = report.failures.len(),
        "batch done"
    );
    report
}

fn emit_json<W: Write>(record: &WorkoutRecord, out: &mut W) -> anyhow::Result<Summary> {
    let summary = Summary::from_record(record)?;
    serde_json::to_writer(&mut *out, &summary)?;
    writeln!(out)?;
    Ok(summary)
}

/// Sensor counts arrive as numbers; accept only whole, non-negative ones.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(tag: &str, field: &str, value: f64) -> Result<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(TrainingError::invalid(
            tag,
            format!("{field} must be a whole non-negative number, got {value}"),
        ));
    }
    Ok(value as u32)
}
