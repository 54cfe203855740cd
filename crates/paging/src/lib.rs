pub mod config;
pub mod fixture;
mod frame;
pub mod frame_pool;
pub mod frame_table;
pub mod loader;
pub mod observer;
pub mod process;
pub mod replacer;
pub mod scheduler;
pub mod stats;
mod typedef;

pub use config::MemoryConfig;
pub use frame_table::{FrameSnapshot, FrameTable};
pub use loader::ProcessLoader;
pub use observer::{EvictionEvent, PlacementEvent, SimulationObserver};
pub use process::{ProcessInput, ProcessRecord, Residency};
pub use scheduler::{Scheduler, SimulationReport};
pub use stats::Statistics;
pub use typedef::{FrameId, Pid};

pub type Result<T> = std::result::Result<T, pagesim_error::Error>;
