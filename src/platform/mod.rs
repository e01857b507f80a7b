//! Platform abstraction layer
//!
//! Everything between the simulation and a host:
//! - Input: key names to per-frame flags
//! - Autopilot: scripted input for headless and demo runs
//! - Driver: the explicit update/render/next-frame loop

pub mod autopilot;
pub mod driver;
pub mod input;

pub use autopilot::Autopilot;
pub use driver::{Driver, DriverStats, FrameBudget, FrameScheduler, LoopState};
pub use input::{InputSource, KeyState};
