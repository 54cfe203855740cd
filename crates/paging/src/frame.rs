use crate::typedef::Pid;

/// A single physical frame. It either sits empty or holds exactly one page of one process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageFrame {
    owner: Option<Pid>,
}

impl PageFrame {
    /// Creates an empty frame.
    pub fn new() -> Self {
        Self { owner: None }
    }

    pub fn owner(&self) -> Option<Pid> {
        self.owner
    }

    pub fn is_empty(&self) -> bool {
        self.owner.is_none()
    }

    pub(crate) fn set_owner(&mut self, pid: Pid) {
        self.owner = Some(pid);
    }

    /// Empties the frame, returning whoever owned it.
    pub(crate) fn reset(&mut self) -> Option<Pid> {
        self.owner.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_is_empty() {
        let frame = PageFrame::new();
        assert!(frame.is_empty());
        assert_eq!(frame.owner(), None);
    }

    #[test]
    fn test_pid_zero_is_an_owner() {
        let mut frame = PageFrame::new();
        frame.set_owner(0);
        assert!(!frame.is_empty());
        assert_eq!(frame.owner(), Some(0));
    }

    #[test]
    fn test_reset() {
        let mut frame = PageFrame::new();
        frame.set_owner(7);
        assert_eq!(frame.reset(), Some(7));
        assert!(frame.is_empty());
        assert_eq!(frame.reset(), None);
    }
}
