use crate::frame_pool::EvictedFrame;
use crate::frame_table::FrameSnapshot;
use crate::process::Residency;
use crate::typedef::{FrameId, Pid};
use serde::Serialize;

/// An eviction pass made to fit an arriving process.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvictionEvent {
    pub time: f64,
    /// The process the space is being made for.
    pub pid: Pid,
    pub pages: usize,
    /// Frames asked of the replacer.
    pub need: usize,
    pub evicted: Vec<EvictedFrame>,
}

/// A process placed into frames.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlacementEvent {
    pub time: f64,
    pub pid: Pid,
    pub pages: usize,
    pub frames: Vec<FrameId>,
    pub residency: Residency,
}

/// Receives every mutation of the frame table as it happens, with the table state right
/// after it. Observers only read; they cannot influence the run.
pub trait SimulationObserver {
    fn on_eviction(&mut self, _event: &EvictionEvent, _snapshot: &FrameSnapshot) {}

    fn on_placement(&mut self, _event: &PlacementEvent, _snapshot: &FrameSnapshot) {}
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl SimulationObserver for NoopObserver {}

/// Observer that keeps every event and snapshot, in order.
#[derive(Default)]
pub struct EventRecorder {
    pub evictions: Vec<(EvictionEvent, FrameSnapshot)>,
    pub placements: Vec<(PlacementEvent, FrameSnapshot)>,
}

impl SimulationObserver for EventRecorder {
    fn on_eviction(&mut self, event: &EvictionEvent, snapshot: &FrameSnapshot) {
        self.evictions.push((event.clone(), snapshot.clone()));
    }

    fn on_placement(&mut self, event: &PlacementEvent, snapshot: &FrameSnapshot) {
        self.placements.push((event.clone(), snapshot.clone()));
    }
}
