use crate::process::ProcessInput;
use crate::Result;
use pagesim_error::{errdata, errinput};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Reads the process list: a JSON array of `{ "pid", "arrival", "size" }` objects.
///
/// Loading is all or nothing. A single bad record rejects the whole file, so the
/// simulation never starts with an incomplete process set.
pub struct ProcessLoader;

impl ProcessLoader {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Vec<ProcessInput>> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Vec<ProcessInput>> {
        let json: Value = match serde_json::from_str(content) {
            Ok(json) => json,
            Err(err) => return errdata!("process list is not valid JSON: {err}"),
        };

        let Value::Array(entries) = json else {
            return errdata!("process list must be a JSON array");
        };

        let mut processes: Vec<ProcessInput> = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value(entry) {
                Ok(process) => processes.push(process),
                Err(err) => return errdata!("process record {index}: {err}"),
            }
        }

        validate_processes(&processes)?;
        Ok(processes)
    }
}

/// Checks the values serde cannot: arrival times must be finite and non-negative, sizes
/// positive, and pids unique across the list.
pub fn validate_processes(processes: &[ProcessInput]) -> Result<()> {
    let mut seen = HashSet::with_capacity(processes.len());

    for (index, process) in processes.iter().enumerate() {
        if !process.arrival.is_finite() || process.arrival < 0.0 {
            return errdata!(
                "process record {index}: arrival {} must be a finite time >= 0",
                process.arrival
            );
        }
        if process.size == 0 {
            return errdata!("process record {index}: size must be positive");
        }
        if !seen.insert(process.pid) {
            return errinput!("process record {index}: duplicate pid {}", process.pid);
        }
    }

    Ok(())
}
