use crate::frame_table::{FrameSnapshot, FrameTable};
use crate::replacer::Replacer;
use crate::typedef::{FrameId, Pid};
use crate::Result;
use log::{debug, warn};
use serde::Serialize;

/// A frame reclaimed by eviction and the process that lost it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EvictedFrame {
    pub frame_id: FrameId,
    pub pid: Pid,
}

/// Owns the frame table and the replacer, and is the only way the table gets mutated.
pub struct FramePoolManager {
    frames: FrameTable,
    replacer: Box<dyn Replacer>,
}

impl FramePoolManager {
    pub fn new<F>(num_frames: usize, replacer_factory: F) -> Self
    where
        F: Fn(usize) -> Box<dyn Replacer>,
    {
        Self {
            frames: FrameTable::new(num_frames),
            replacer: replacer_factory(num_frames),
        }
    }

    pub fn frames(&self) -> &FrameTable {
        &self.frames
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        self.frames.snapshot()
    }

    pub fn eviction_cursor(&self) -> FrameId {
        self.replacer.cursor()
    }

    /// First-fit allocation: claims empty frames for `pid` in ascending index order until
    /// `pages_needed` frames are held or the table runs out.
    ///
    /// Best effort. The returned list may be shorter than `pages_needed`; the caller decides
    /// what a short allocation means.
    pub fn allocate(&mut self, pid: Pid, pages_needed: usize) -> Result<Vec<FrameId>> {
        // the request can exceed the table; never reserve more than it could hand out
        let mut allocated = Vec::with_capacity(pages_needed.min(self.frames.num_frames()));

        for frame_id in 0..self.frames.num_frames() {
            if allocated.len() == pages_needed {
                break;
            }
            if self.frames.is_empty(frame_id)? {
                self.frames.set(frame_id, pid)?;
                allocated.push(frame_id);
                debug!("allocated frame {frame_id} to P{pid}");
            }
        }

        Ok(allocated)
    }

    /// Frees `need` occupied frames, asking the replacer for each victim in turn.
    ///
    /// Never asks for more victims than there are occupied frames, so an oversized request
    /// frees everything and stops instead of sweeping forever.
    pub fn evict(&mut self, need: usize) -> Result<Vec<EvictedFrame>> {
        let need = need.min(self.frames.frames_used());
        let mut evicted = Vec::with_capacity(need);

        while evicted.len() < need {
            let Some(frame_id) = self.replacer.evict(&self.frames) else {
                warn!(
                    "replacer found no victim with {} frames still to free",
                    need - evicted.len()
                );
                break;
            };

            if let Some(pid) = self.frames.clear(frame_id)? {
                debug!("evicting frame {frame_id} (was P{pid})");
                evicted.push(EvictedFrame { frame_id, pid });
            }
        }

        Ok(evicted)
    }
}
