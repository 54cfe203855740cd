use crate::frame::PageFrame;
use crate::typedef::{FrameId, Pid};
use crate::Result;
use pagesim_error::Error;
use serde::Serialize;

/// Fixed-length table of physical frames together with its occupancy counters.
///
/// The counters live next to the slots so that every mutation keeps
/// `frames_used + frames_free == num_frames` and `frames_used == occupied slots`.
#[derive(Clone, Debug)]
pub struct FrameTable {
    frames: Vec<PageFrame>,
    frames_used: usize,
    frames_free: usize,
}

/// Read-only copy of the frame table handed out for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FrameSnapshot {
    pub frames: Vec<Option<Pid>>,
    pub frames_used: usize,
    pub frames_free: usize,
}

impl FrameTable {
    pub fn new(num_frames: usize) -> Self {
        let mut frames = Vec::with_capacity(num_frames);
        frames.resize_with(num_frames, PageFrame::new);

        Self {
            frames,
            frames_used: 0,
            frames_free: num_frames,
        }
    }

    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn frames_used(&self) -> usize {
        self.frames_used
    }

    pub fn frames_free(&self) -> usize {
        self.frames_free
    }

    fn frame(&self, frame_id: FrameId) -> Result<&PageFrame> {
        self.frames.get(frame_id).ok_or(Error::OutOfBounds)
    }

    fn frame_mut(&mut self, frame_id: FrameId) -> Result<&mut PageFrame> {
        self.frames.get_mut(frame_id).ok_or(Error::OutOfBounds)
    }

    pub fn is_empty(&self, frame_id: FrameId) -> Result<bool> {
        Ok(self.frame(frame_id)?.is_empty())
    }

    pub fn owner(&self, frame_id: FrameId) -> Result<Option<Pid>> {
        Ok(self.frame(frame_id)?.owner())
    }

    /// Hands the frame to `pid`. Claiming an empty frame moves one frame from free to used;
    /// overwriting an owned frame leaves the counters alone.
    pub(crate) fn set(&mut self, frame_id: FrameId, pid: Pid) -> Result<()> {
        let frame = self.frame_mut(frame_id)?;
        let was_empty = frame.is_empty();
        frame.set_owner(pid);

        if was_empty {
            self.frames_used += 1;
            self.frames_free -= 1;
        }
        Ok(())
    }

    /// Empties the frame and returns its previous owner, if any.
    pub(crate) fn clear(&mut self, frame_id: FrameId) -> Result<Option<Pid>> {
        let previous = self.frame_mut(frame_id)?.reset();

        if previous.is_some() {
            self.frames_used -= 1;
            self.frames_free += 1;
        }
        Ok(previous)
    }

    /// Number of frames currently owned by `pid`.
    pub fn frames_owned_by(&self, pid: Pid) -> usize {
        self.frames
            .iter()
            .filter(|frame| frame.owner() == Some(pid))
            .count()
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frames: self.frames.iter().map(PageFrame::owner).collect(),
            frames_used: self.frames_used,
            frames_free: self.frames_free,
        }
    }
}
