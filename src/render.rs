use paging::{
    EvictionEvent, FrameSnapshot, PlacementEvent, Residency, SimulationObserver, Statistics,
};
use std::fmt::Write as _;
use std::io::{self, Write};

const FRAMES_PER_ROW: usize = 16;

/// Draws the frame table as rows of boxed cells, one cell per frame, `FRAMES_PER_ROW`
/// cells to a row. Empty frames are blank cells.
pub fn render_frames(snapshot: &FrameSnapshot) -> String {
    let width = snapshot
        .frames
        .iter()
        .flatten()
        .map(|pid| pid.to_string().len())
        .max()
        .unwrap_or(0)
        .max(2);

    let mut out = String::new();
    for row in snapshot.frames.chunks(FRAMES_PER_ROW) {
        let border = format!("+{}", "-".repeat(width + 2)).repeat(row.len()) + "+\n";
        out.push_str(&border);
        for frame in row {
            match frame {
                Some(pid) => {
                    let _ = write!(out, "| {pid:>width$} ");
                }
                None => {
                    let _ = write!(out, "| {:width$} ", "");
                }
            }
        }
        out.push_str("|\n");
        out.push_str(&border);
    }
    out.push('\n');
    out
}

pub fn render_statistics(stats: &Statistics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Processes: {}", stats.process_count);
    if let (Some(min), Some(max), Some(avg)) = (stats.min_size, stats.max_size, stats.avg_size) {
        let _ = writeln!(out, "Size min/max/avg: {min} / {max} / {avg:.2} bytes");
    }
    let _ = writeln!(out, "Pages requested: {}", stats.pages_requested);
    let _ = writeln!(
        out,
        "Frames used: {}, free: {}, total: {} ({:.1}% utilized)",
        stats.frames_used,
        stats.frames_free,
        stats.num_frames,
        stats.utilization * 100.0
    );
    let _ = writeln!(
        out,
        "Fully resident: {}, partially resident: {}",
        stats.fully_resident, stats.partially_resident
    );
    for (pid, held) in &stats.frames_held {
        let _ = writeln!(out, "  P{pid}: {held} frames");
    }
    out
}

/// Streams a human-readable trace of the run: what was evicted, what was allocated, and
/// the frame table after each step.
pub struct TextRenderer<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn write_str(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_all(text.as_bytes()) {
            self.error = Some(err);
        }
    }

    /// Returns the writer, or the first write error hit while rendering.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> SimulationObserver for TextRenderer<W> {
    fn on_eviction(&mut self, event: &EvictionEvent, snapshot: &FrameSnapshot) {
        let mut text = format!(
            "Not enough free frames for P{} ({} pages). Evicting {} pages...\n",
            event.pid, event.pages, event.need
        );
        for evicted in &event.evicted {
            let _ = writeln!(
                text,
                "  Evicting frame {} (was P{})",
                evicted.frame_id, evicted.pid
            );
        }
        let _ = write!(
            text,
            "After eviction -> used: {}, free: {}\n\n",
            snapshot.frames_used, snapshot.frames_free
        );
        text.push_str(&render_frames(snapshot));
        self.write_str(&text);
    }

    fn on_placement(&mut self, event: &PlacementEvent, snapshot: &FrameSnapshot) {
        let mut text = String::new();
        for frame_id in &event.frames {
            let _ = writeln!(text, "  Allocated frame {frame_id} to P{}", event.pid);
        }
        let _ = write!(
            text,
            "Loaded P{} ({} pages) at t={:.1} -> used: {}, free: {}",
            event.pid, event.pages, event.time, snapshot.frames_used, snapshot.frames_free
        );
        if let Residency::PartiallyResident { frames_short } = event.residency {
            let _ = write!(text, " [partially resident, {frames_short} frames short]");
        }
        text.push_str("\n\n");
        text.push_str(&render_frames(snapshot));
        self.write_str(&text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paging::frame_pool::EvictedFrame;

    fn snapshot(frames: Vec<Option<u32>>) -> FrameSnapshot {
        let frames_used = frames.iter().flatten().count();
        FrameSnapshot {
            frames_free: frames.len() - frames_used,
            frames,
            frames_used,
        }
    }

    #[test]
    fn test_render_frames() {
        let out = render_frames(&snapshot(vec![Some(1), None, Some(12)]));
        assert_eq!(
            out,
            "+----+----+----+\n\
             |  1 |    | 12 |\n\
             +----+----+----+\n\n"
        );
    }

    #[test]
    fn test_render_frames_wraps_rows() {
        let out = render_frames(&snapshot(vec![None; 20]));
        assert_eq!(out.matches('|').count(), 16 + 1 + 4 + 1);
        assert_eq!(out.lines().filter(|l| l.starts_with('+')).count(), 4);
    }

    #[test]
    fn test_render_frames_widens_for_large_pids() {
        let out = render_frames(&snapshot(vec![Some(1234), None]));
        assert!(out.starts_with("+------+------+\n| 1234 |      |\n"));
    }

    #[test]
    fn test_text_renderer_trace() {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.on_eviction(
            &EvictionEvent {
                time: 1.0,
                pid: 2,
                pages: 2,
                need: 1,
                evicted: vec![EvictedFrame { frame_id: 0, pid: 1 }],
            },
            &snapshot(vec![None, Some(1)]),
        );
        renderer.on_placement(
            &PlacementEvent {
                time: 1.0,
                pid: 2,
                pages: 3,
                frames: vec![0],
                residency: Residency::PartiallyResident { frames_short: 2 },
            },
            &snapshot(vec![Some(2), Some(1)]),
        );

        let out = String::from_utf8(renderer.finish().unwrap()).unwrap();
        assert!(out.contains("Not enough free frames for P2 (2 pages). Evicting 1 pages...\n"));
        assert!(out.contains("  Evicting frame 0 (was P1)\n"));
        assert!(out.contains("After eviction -> used: 1, free: 1\n"));
        assert!(out.contains("  Allocated frame 0 to P2\n"));
        assert!(out.contains(
            "Loaded P2 (3 pages) at t=1.0 -> used: 2, free: 0 [partially resident, 2 frames short]"
        ));
    }
}
