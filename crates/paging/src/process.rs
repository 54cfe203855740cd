use crate::typedef::Pid;
use crate::Result;
use pagesim_error::errconfig;
use serde::{Deserialize, Serialize};

/// A process as it arrives from the input file. Immutable for the whole run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessInput {
    pub pid: Pid,
    pub arrival: f64,
    pub size: u64,
}

/// How much of a process made it into memory when it was placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Residency {
    Unallocated,
    FullyResident,
    /// The frame table ran out before every page found a frame.
    PartiallyResident { frames_short: usize },
}

/// Scheduler-side view of a process: the input plus its page count and placement status.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProcessRecord {
    pub pid: Pid,
    pub arrival: f64,
    pub size: u64,
    pub pages: usize,
    residency: Residency,
}

impl ProcessRecord {
    pub fn new(input: &ProcessInput, page_size: usize) -> Result<Self> {
        Ok(Self {
            pid: input.pid,
            arrival: input.arrival,
            size: input.size,
            pages: pages_for(input.size, page_size)?,
            residency: Residency::Unallocated,
        })
    }

    /// True once the scheduler has placed the process, fully or not.
    pub fn is_allocated(&self) -> bool {
        self.residency != Residency::Unallocated
    }

    pub fn residency(&self) -> Residency {
        self.residency
    }

    /// Records the outcome of placement. A record is placed exactly once.
    pub(crate) fn mark_placed(&mut self, frames_allocated: usize) {
        assert!(!self.is_allocated(), "process {} placed twice", self.pid);

        self.residency = if frames_allocated >= self.pages {
            Residency::FullyResident
        } else {
            Residency::PartiallyResident {
                frames_short: self.pages - frames_allocated,
            }
        };
    }
}

/// Number of pages needed to hold `size` bytes, rounding up.
pub fn pages_for(size: u64, page_size: usize) -> Result<usize> {
    let page_size = u64::try_from(page_size)?;
    if page_size == 0 {
        return errconfig!("page size must be non-zero");
    }
    Ok(usize::try_from(size.div_ceil(page_size))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(pid: Pid, arrival: f64, size: u64) -> ProcessInput {
        ProcessInput { pid, arrival, size }
    }

    #[test]
    fn test_pages_round_up() {
        assert_eq!(pages_for(100, 64).unwrap(), 2);
        assert_eq!(pages_for(128, 64).unwrap(), 2);
        assert_eq!(pages_for(129, 64).unwrap(), 3);
        assert_eq!(pages_for(1, 64).unwrap(), 1);
        assert_eq!(pages_for(960, 64).unwrap(), 15);
    }

    #[test]
    fn test_new_record_is_unallocated() {
        let record = ProcessRecord::new(&input(1, 0.0, 100), 64).unwrap();
        assert_eq!(record.pages, 2);
        assert!(!record.is_allocated());
        assert_eq!(record.residency(), Residency::Unallocated);
    }

    #[test]
    fn test_mark_placed() {
        let mut full = ProcessRecord::new(&input(1, 0.0, 100), 64).unwrap();
        full.mark_placed(2);
        assert!(full.is_allocated());
        assert_eq!(full.residency(), Residency::FullyResident);

        let mut partial = ProcessRecord::new(&input(2, 0.0, 300), 64).unwrap();
        partial.mark_placed(3);
        assert!(partial.is_allocated());
        assert_eq!(
            partial.residency(),
            Residency::PartiallyResident { frames_short: 2 }
        );
    }

    #[test]
    #[should_panic(expected = "placed twice")]
    fn test_mark_placed_twice() {
        let mut record = ProcessRecord::new(&input(1, 0.0, 100), 64).unwrap();
        record.mark_placed(2);
        record.mark_placed(2);
    }

    #[test]
    fn test_residency_serializes_with_status_tag() {
        let json = serde_json::to_string(&Residency::PartiallyResident { frames_short: 3 }).unwrap();
        assert_eq!(json, r#"{"status":"partially_resident","frames_short":3}"#);
    }
}
