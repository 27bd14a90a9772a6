//! # Date File
//!
//! Persists the target date as a comma-separated list of up to five integers
//! in `year,month,day,hour,minute` order, e.g. `2030,6,15,9,5`.
//!
//! - Missing file: [`TargetDate::DEFAULT`].
//! - Short file (`2031,7`): leading values overwrite the default, the rest keep it.
//! - Line breaks are treated like commas.
//! - Any value that is not an integer is a [`StoreError::Parse`].
//! - Integers that do not form a real date (month 13, February 30) are a
//!   [`StoreError::Invalid`].
//!
//! Writes go through a `.tmp` file and `rename()` so a crash mid-write never
//! leaves a truncated date behind.

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};
use thiserror::Error;

use crate::core::error::CalendarError;
use crate::core::target::TargetDate;

const FIELD_COUNT: usize = 5;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("date file I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("date file value #{} ({value:?}) is not an integer", .index + 1)]
    Parse { index: usize, value: String },

    #[error("date file holds an impossible date: {0}")]
    Invalid(#[from] CalendarError),
}

/// Parses date file contents. Only the first five values are read.
pub fn parse_date(contents: &str) -> Result<TargetDate, StoreError> {
    let mut values = Vec::with_capacity(FIELD_COUNT);
    for (index, raw) in contents
        .lines()
        .flat_map(|line| line.split(','))
        .take(FIELD_COUNT)
        .enumerate()
    {
        let value = raw.trim().parse::<i32>().map_err(|_| StoreError::Parse {
            index,
            value: raw.trim().to_string(),
        })?;
        values.push(value);
    }
    if values.is_empty() {
        // `"".lines()` yields nothing; an empty file has an empty first value.
        return Err(StoreError::Parse {
            index: 0,
            value: String::new(),
        });
    }
    let date = TargetDate::from_leading(&values);
    date.to_datetime()?;
    Ok(date)
}

/// Loads the date at `path`, falling back to the default if the file is absent.
pub fn load_date(path: &Path) -> Result<TargetDate, StoreError> {
    if !path.is_file() {
        info!("No date file at {}, using default", path.display());
        return Ok(TargetDate::DEFAULT);
    }
    let contents = fs::read_to_string(path)?;
    let date = parse_date(&contents)?;
    info!("Loaded target {} from {}", date, path.display());
    Ok(date)
}

/// Serializes `date` as a single `year,month,day,hour,minute` line.
pub fn format_date(date: &TargetDate) -> String {
    date.to_array()
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Overwrites `path` with `date`, creating parent directories on first write.
pub fn save_date(path: &Path, date: &TargetDate) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, format_date(date))?;
    fs::rename(&tmp_path, path)?;
    debug!("Saved target {} to {}", date, path.display());
    Ok(())
}
