use crate::frame_table::FrameTable;
use crate::typedef::FrameId;
use log::trace;

use super::Replacer;

/// Round-robin sweep over the frame table. There are no reference bits or ages: the
/// victim is whichever occupied frame the cursor reaches next, whoever owns it.
///
/// The cursor persists for the lifetime of the replacer, moves one slot per inspected
/// frame (occupied or not) and wraps at `num_frames`. It is never reset.
pub struct ClockSweepReplacer {
    cursor: FrameId,
    num_frames: usize,
}

impl ClockSweepReplacer {
    pub fn new(num_frames: usize) -> Self {
        ClockSweepReplacer {
            cursor: 0,
            num_frames,
        }
    }

    fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.num_frames;
    }
}

impl Replacer for ClockSweepReplacer {
    fn evict(&mut self, frames: &FrameTable) -> Option<FrameId> {
        if self.num_frames == 0 || frames.frames_used() == 0 {
            return None;
        }

        // with at least one occupied frame, one full revolution always finds it
        for _ in 0..self.num_frames {
            let frame_id = self.cursor;
            self.advance();

            if let Ok(false) = frames.is_empty(frame_id) {
                return Some(frame_id);
            }
            trace!("sweep skipped empty frame {frame_id}");
        }

        None
    }

    fn cursor(&self) -> FrameId {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(owners: &[Option<u32>]) -> FrameTable {
        let mut table = FrameTable::new(owners.len());
        for (frame_id, owner) in owners.iter().enumerate() {
            if let Some(pid) = owner {
                table.set(frame_id, *pid).unwrap();
            }
        }
        table
    }

    #[test]
    fn test_evict_in_cursor_order() {
        let table = table_with(&[Some(1), Some(1), Some(2), Some(3)]);
        let mut replacer = ClockSweepReplacer::new(4);

        assert_eq!(replacer.evict(&table), Some(0));
        assert_eq!(replacer.evict(&table), Some(1));
        assert_eq!(replacer.cursor(), 2);
    }

    #[test]
    fn test_cursor_advances_over_empty_frames() {
        let table = table_with(&[None, None, Some(5), None]);
        let mut replacer = ClockSweepReplacer::new(4);

        assert_eq!(replacer.evict(&table), Some(2));
        assert_eq!(replacer.cursor(), 3);
    }

    #[test]
    fn test_cursor_wraps_around() {
        let table = table_with(&[Some(1), None, None, None]);
        let mut replacer = ClockSweepReplacer::new(4);
        replacer.cursor = 2;

        assert_eq!(replacer.evict(&table), Some(0));
        assert_eq!(replacer.cursor(), 1);
    }

    #[test]
    fn test_evict_from_empty_table() {
        let table = FrameTable::new(4);
        let mut replacer = ClockSweepReplacer::new(4);

        assert_eq!(replacer.evict(&table), None);
        assert_eq!(replacer.cursor(), 0);
    }

    #[test]
    fn test_zero_frames() {
        let table = FrameTable::new(0);
        let mut replacer = ClockSweepReplacer::new(0);
        assert_eq!(replacer.evict(&table), None);
    }
}
