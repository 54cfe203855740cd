use crate::frame_table::FrameTable;
use crate::process::{ProcessRecord, Residency};
use crate::typedef::Pid;
use serde::Serialize;

/// Aggregate counters derived from the process set and the frame table. Collecting them
/// reads state and changes nothing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Statistics {
    pub process_count: usize,
    pub min_size: Option<u64>,
    pub max_size: Option<u64>,
    pub avg_size: Option<f64>,
    pub pages_requested: usize,
    pub num_frames: usize,
    pub frames_used: usize,
    pub frames_free: usize,
    pub utilization: f64,
    pub fully_resident: usize,
    pub partially_resident: usize,
    /// Frames each process holds right now, by ascending pid. Evicted processes may hold
    /// fewer frames than they were placed with.
    pub frames_held: Vec<(Pid, usize)>,
}

impl Statistics {
    pub fn collect(records: &[ProcessRecord], frames: &FrameTable) -> Self {
        let sizes = records.iter().map(|record| record.size);
        // sizes are arbitrary u64s; their sum may not fit in one
        let total_size: u128 = sizes.clone().map(u128::from).sum();
        let avg_size = if records.is_empty() {
            None
        } else {
            Some(total_size as f64 / records.len() as f64)
        };

        let utilization = if frames.num_frames() == 0 {
            0.0
        } else {
            frames.frames_used() as f64 / frames.num_frames() as f64
        };

        let mut frames_held: Vec<_> = records
            .iter()
            .map(|record| (record.pid, frames.frames_owned_by(record.pid)))
            .collect();
        frames_held.sort_unstable_by_key(|&(pid, _)| pid);

        Self {
            process_count: records.len(),
            min_size: sizes.clone().min(),
            max_size: sizes.max(),
            avg_size,
            pages_requested: records
                .iter()
                .fold(0usize, |total, record| total.saturating_add(record.pages)),
            num_frames: frames.num_frames(),
            frames_used: frames.frames_used(),
            frames_free: frames.frames_free(),
            utilization,
            fully_resident: records
                .iter()
                .filter(|record| record.residency() == Residency::FullyResident)
                .count(),
            partially_resident: records
                .iter()
                .filter(|record| {
                    matches!(record.residency(), Residency::PartiallyResident { .. })
                })
                .count(),
            frames_held,
        }
    }
}
