/// Index of a slot in the frame table.
pub type FrameId = usize;

/// Process identifier. Every value is a valid pid; empty frames are represented by the
/// absence of an owner rather than a reserved id.
pub type Pid = u32;
