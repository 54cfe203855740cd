use crate::config::MemoryConfig;
use crate::frame_pool::FramePoolManager;
use crate::frame_table::{FrameSnapshot, FrameTable};
use crate::loader::validate_processes;
use crate::observer::{EvictionEvent, PlacementEvent, SimulationObserver};
use crate::process::{ProcessInput, ProcessRecord, Residency};
use crate::replacer::{ClockSweepReplacer, Replacer};
use crate::stats::Statistics;
use crate::Result;
use log::{debug, info, warn};
use serde::Serialize;

/// Simulated time that passes between two ticks.
pub const TICK_STEP: f64 = 0.5;

/// Final state of a finished run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationReport {
    pub ticks: u64,
    pub final_time: f64,
    pub total_evictions: usize,
    pub records: Vec<ProcessRecord>,
    pub frames: FrameSnapshot,
    pub statistics: Statistics,
}

/// Drives a run: walks the simulated clock forward and places each process once its
/// arrival time has come, evicting first when free frames run short.
///
/// Allocation and eviction happen strictly one process at a time, in arrival order, with
/// ties kept in input order. Reordering either changes the outcome.
pub struct Scheduler {
    records: Vec<ProcessRecord>,
    pool: FramePoolManager,
    /// Clock steps taken; the current time is `steps * TICK_STEP`.
    steps: u64,
    ticks: u64,
    total_evictions: usize,
}

impl Scheduler {
    pub fn new(config: MemoryConfig, processes: &[ProcessInput]) -> Result<Self> {
        Self::with_replacer(config, processes, |n| Box::new(ClockSweepReplacer::new(n)))
    }

    pub fn with_replacer<F>(
        config: MemoryConfig,
        processes: &[ProcessInput],
        replacer_factory: F,
    ) -> Result<Self>
    where
        F: Fn(usize) -> Box<dyn Replacer>,
    {
        let num_frames = config.num_frames()?;
        validate_processes(processes)?;

        let mut records = processes
            .iter()
            .map(|input| ProcessRecord::new(input, config.page_size()))
            .collect::<Result<Vec<_>>>()?;
        // stable, so equal arrivals keep their input order
        records.sort_by(|a, b| a.arrival.total_cmp(&b.arrival));

        debug!(
            "scheduler ready: {} processes, {num_frames} frames of {} bytes",
            records.len(),
            config.frame_size
        );

        Ok(Self {
            records,
            pool: FramePoolManager::new(num_frames, replacer_factory),
            steps: 0,
            ticks: 0,
            total_evictions: 0,
        })
    }

    pub fn current_time(&self) -> f64 {
        self.steps as f64 * TICK_STEP
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Records in arrival order.
    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    pub fn frames(&self) -> &FrameTable {
        self.pool.frames()
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        self.pool.snapshot()
    }

    pub fn eviction_cursor(&self) -> usize {
        self.pool.eviction_cursor()
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::collect(&self.records, self.pool.frames())
    }

    pub fn is_finished(&self) -> bool {
        self.records.iter().all(ProcessRecord::is_allocated)
    }

    /// Runs one tick: places every unplaced process whose arrival is due, in arrival order,
    /// then moves the clock forward unless nothing is left to place. A tick that places
    /// nothing still moves the clock.
    ///
    /// Returns the number of processes placed during the tick.
    pub fn tick(&mut self, observer: &mut dyn SimulationObserver) -> Result<usize> {
        let now = self.current_time();
        let mut placed = 0;

        // the whole list is rescanned every tick
        for index in 0..self.records.len() {
            let record = &self.records[index];
            if record.is_allocated() || record.arrival > now {
                continue;
            }
            self.place(index, now, observer)?;
            placed += 1;
        }

        self.ticks += 1;
        if !self.is_finished() {
            self.steps += 1;
        }
        Ok(placed)
    }

    fn place(
        &mut self,
        index: usize,
        now: f64,
        observer: &mut dyn SimulationObserver,
    ) -> Result<()> {
        let pid = self.records[index].pid;
        let pages = self.records[index].pages;
        let frames_free = self.pool.frames().frames_free();

        // an oversized process cannot free more than what is occupied
        let need = pages
            .saturating_sub(frames_free)
            .min(self.pool.frames().frames_used());
        if need > 0 {
            info!("not enough free frames for P{pid} ({pages} pages), evicting {need} pages");

            let evicted = self.pool.evict(need)?;
            self.total_evictions += evicted.len();

            let event = EvictionEvent {
                time: now,
                pid,
                pages,
                need,
                evicted,
            };
            observer.on_eviction(&event, &self.pool.snapshot());
        }

        let frames = self.pool.allocate(pid, pages)?;
        let record = &mut self.records[index];
        record.mark_placed(frames.len());

        match record.residency() {
            Residency::PartiallyResident { frames_short } => warn!(
                "P{pid} is only partially resident: {} of {pages} pages placed, {frames_short} short",
                frames.len()
            ),
            _ => info!(
                "loaded P{pid} ({pages} pages) at t={now}: used {}, free {}",
                self.pool.frames().frames_used(),
                self.pool.frames().frames_free()
            ),
        }

        let event = PlacementEvent {
            time: now,
            pid,
            pages,
            frames,
            residency: record.residency(),
        };
        observer.on_placement(&event, &self.pool.snapshot());
        Ok(())
    }

    /// Ticks until every process is placed.
    pub fn run(&mut self, observer: &mut dyn SimulationObserver) -> Result<SimulationReport> {
        while !self.is_finished() {
            self.tick(observer)?;
        }

        info!(
            "simulation finished after {} ticks at t={}",
            self.ticks,
            self.current_time()
        );
        Ok(self.report())
    }

    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            ticks: self.ticks,
            final_time: self.current_time(),
            total_evictions: self.total_evictions,
            records: self.records.clone(),
            frames: self.snapshot(),
            statistics: self.statistics(),
        }
    }
}
