//! Labeled dataset container, CSV import/export, and summary statistics.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use endo_core::errors::{PipelineError, PipelineResult};
use endo_core::features::FeatureVector;
use endo_core::panel::{
    Gender, HealthCondition, Hormone, HormoneReading, StatusLabel, Subject, TimeOfDay,
};
use serde::{Deserialize, Serialize};

const CSV_HEADER: &str =
    "age,gender,cortisol,estrogen,testosterone,time_of_day,sample_date,health_condition,status";
const CSV_COLUMNS: usize = 9;
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One labeled synthetic sample. Hormone values carry the measurement noise
/// already; the status label was computed from exactly these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub age: u32,
    pub gender: Gender,
    pub cortisol: f64,
    pub estrogen: f64,
    pub testosterone: f64,
    pub time_of_day: TimeOfDay,
    pub sample_date: NaiveDate,
    pub health_condition: HealthCondition,
    pub status: StatusLabel,
}

impl Sample {
    /// Encode this sample into the canonical feature order. The health
    /// condition is deliberately absent: it drives generation only.
    pub fn features(&self) -> FeatureVector {
        let subject = Subject {
            age: self.age,
            gender: self.gender,
        };
        let reading = HormoneReading {
            cortisol: self.cortisol,
            estrogen: self.estrogen,
            testosterone: self.testosterone,
            time_of_day: self.time_of_day,
        };
        FeatureVector::encode(&subject, &reading)
    }
}

/// An ordered collection of labeled samples.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub samples: Vec<Sample>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Count of samples per status label.
    pub fn class_distribution(&self) -> BTreeMap<StatusLabel, usize> {
        let mut counts = BTreeMap::new();
        for sample in &self.samples {
            *counts.entry(sample.status).or_insert(0) += 1;
        }
        counts
    }

    /// Size of the smallest represented class. Zero for an empty dataset.
    pub fn min_class_count(&self) -> usize {
        self.class_distribution()
            .values()
            .copied()
            .min()
            .unwrap_or(0)
    }

    /// Export to CSV with the stable column order.
    pub fn write_csv(&self, path: &Path) -> PipelineResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path)?;
        writeln!(file, "{CSV_HEADER}")?;
        for s in &self.samples {
            writeln!(
                file,
                "{},{},{:.2},{:.2},{:.2},{},{},{},{}",
                s.age,
                s.gender,
                s.cortisol,
                s.estrogen,
                s.testosterone,
                s.time_of_day,
                s.sample_date.format(DATE_FORMAT),
                s.health_condition,
                s.status
            )?;
        }
        Ok(())
    }

    /// Load a dataset previously exported with [`Dataset::write_csv`].
    pub fn read_csv(path: &Path) -> PipelineResult<Self> {
        let content = fs::read_to_string(path)?;
        let mut lines = content.lines().enumerate();

        match lines.next() {
            Some((_, header)) if header == CSV_HEADER => {}
            Some((_, header)) => {
                return Err(PipelineError::DatasetFormat {
                    line: 1,
                    reason: format!("unexpected header {header:?}"),
                })
            }
            None => return Err(PipelineError::EmptyDataset),
        }

        let mut samples = Vec::new();
        for (idx, line) in lines {
            if line.is_empty() {
                continue;
            }
            samples.push(parse_line(idx + 1, line)?);
        }
        Ok(Self { samples })
    }

    pub fn summary(&self) -> DatasetSummary {
        let mut by_gender = BTreeMap::new();
        let mut by_time = BTreeMap::new();
        let mut by_condition = BTreeMap::new();
        for s in &self.samples {
            *by_gender.entry(s.gender.as_str()).or_insert(0) += 1;
            *by_time.entry(s.time_of_day.as_str()).or_insert(0) += 1;
            *by_condition.entry(s.health_condition.as_str()).or_insert(0) += 1;
        }
        let stats = |values: Vec<f64>| HormoneStats::from_values(&values);
        DatasetSummary {
            samples: self.len(),
            by_status: self.class_distribution(),
            by_gender,
            by_time,
            by_condition,
            hormones: BTreeMap::from([
                (
                    Hormone::Cortisol,
                    stats(self.samples.iter().map(|s| s.cortisol).collect()),
                ),
                (
                    Hormone::Estrogen,
                    stats(self.samples.iter().map(|s| s.estrogen).collect()),
                ),
                (
                    Hormone::Testosterone,
                    stats(self.samples.iter().map(|s| s.testosterone).collect()),
                ),
            ]),
        }
    }
}

fn parse_line(line_no: usize, line: &str) -> PipelineResult<Sample> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != CSV_COLUMNS {
        return Err(PipelineError::DatasetFormat {
            line: line_no,
            reason: format!("expected {CSV_COLUMNS} columns, found {}", fields.len()),
        });
    }
    let bad = |reason: String| PipelineError::DatasetFormat {
        line: line_no,
        reason,
    };
    Ok(Sample {
        age: fields[0]
            .parse()
            .map_err(|e| bad(format!("age: {e}")))?,
        gender: fields[1].parse()?,
        cortisol: fields[2]
            .parse()
            .map_err(|e| bad(format!("cortisol: {e}")))?,
        estrogen: fields[3]
            .parse()
            .map_err(|e| bad(format!("estrogen: {e}")))?,
        testosterone: fields[4]
            .parse()
            .map_err(|e| bad(format!("testosterone: {e}")))?,
        time_of_day: fields[5].parse()?,
        sample_date: NaiveDate::parse_from_str(fields[6], DATE_FORMAT)
            .map_err(|e| bad(format!("sample_date: {e}")))?,
        health_condition: fields[7].parse()?,
        status: fields[8].parse()?,
    })
}

/// Min/mean/max for one hormone column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HormoneStats {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl HormoneStats {
    fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                min: 0.0,
                mean: 0.0,
                max: 0.0,
            };
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Self { min, mean, max }
    }
}

/// Printable dataset statistics for the batch tooling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub samples: usize,
    pub by_status: BTreeMap<StatusLabel, usize>,
    pub by_gender: BTreeMap<&'static str, usize>,
    pub by_time: BTreeMap<&'static str, usize>,
    pub by_condition: BTreeMap<&'static str, usize>,
    pub hormones: BTreeMap<Hormone, HormoneStats>,
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total samples: {}", self.samples)?;
        writeln!(f, "status distribution:")?;
        for (label, count) in &self.by_status {
            writeln!(f, "  {label}: {count}")?;
        }
        writeln!(f, "gender distribution:")?;
        for (gender, count) in &self.by_gender {
            writeln!(f, "  {gender}: {count}")?;
        }
        writeln!(f, "time of day distribution:")?;
        for (time, count) in &self.by_time {
            writeln!(f, "  {time}: {count}")?;
        }
        writeln!(f, "health condition distribution:")?;
        for (condition, count) in &self.by_condition {
            writeln!(f, "  {condition}: {count}")?;
        }
        writeln!(f, "hormone statistics:")?;
        for (hormone, stats) in &self.hormones {
            writeln!(
                f,
                "  {hormone} ({}): min {:.2}, mean {:.2}, max {:.2}",
                hormone.unit(),
                stats.min,
                stats.mean,
                stats.max
            )?;
        }
        Ok(())
    }
}
