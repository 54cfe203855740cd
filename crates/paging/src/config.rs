use crate::Result;
use pagesim_error::errconfig;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MEM_SIZE: usize = 1024;
pub const DEFAULT_FRAME_SIZE: usize = 64;

/// Physical memory geometry, fixed for the lifetime of a run. Page size and frame size are
/// the same value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    pub mem_size: usize,
    pub frame_size: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            mem_size: DEFAULT_MEM_SIZE,
            frame_size: DEFAULT_FRAME_SIZE,
        }
    }
}

impl MemoryConfig {
    pub fn new(mem_size: usize, frame_size: usize) -> Self {
        Self {
            mem_size,
            frame_size,
        }
    }

    /// Rejects geometry that would leave unaddressable bytes or no frames at all.
    pub fn validate(&self) -> Result<()> {
        if self.frame_size == 0 {
            return errconfig!("frame size must be non-zero");
        }
        if self.mem_size % self.frame_size != 0 {
            return errconfig!(
                "frame size {} does not evenly divide memory size {}",
                self.frame_size,
                self.mem_size
            );
        }
        if self.mem_size < self.frame_size {
            return errconfig!(
                "memory size {} holds no frame of size {}",
                self.mem_size,
                self.frame_size
            );
        }
        Ok(())
    }

    pub fn num_frames(&self) -> Result<usize> {
        self.validate()?;
        Ok(self.mem_size / self.frame_size)
    }

    pub fn page_size(&self) -> usize {
        self.frame_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesim_error::Error;

    #[test]
    fn test_default_geometry() {
        let config = MemoryConfig::default();
        assert_eq!(config.num_frames().unwrap(), 16);
        assert_eq!(config.page_size(), 64);
    }

    #[test]
    fn test_zero_frame_size() {
        let config = MemoryConfig::new(1024, 0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_uneven_division() {
        let config = MemoryConfig::new(1000, 64);
        assert!(matches!(config.num_frames(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_memory_smaller_than_frame() {
        // 0 % 64 == 0, but no frame fits
        let config = MemoryConfig::new(0, 64);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_deserialize() {
        let config: MemoryConfig =
            serde_json::from_str(r#"{ "mem_size": 2048, "frame_size": 128 }"#).unwrap();
        assert_eq!(config, MemoryConfig::new(2048, 128));
    }
}
