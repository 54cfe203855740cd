pub(crate) mod clock_sweep_replacer;

use crate::frame_table::FrameTable;
use crate::typedef::FrameId;

pub use clock_sweep_replacer::ClockSweepReplacer;

pub trait Replacer {
    /// Picks the next occupied frame to evict according to the replacement policy and
    /// moves past it. Returns `None` if no frame is occupied.
    ///
    /// The replacer only chooses; the caller clears the frame.
    fn evict(&mut self, frames: &FrameTable) -> Option<FrameId>;

    /// Frame index the next victim search starts from.
    fn cursor(&self) -> FrameId;
}
