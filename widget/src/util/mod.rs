//! Browser adapters for the controller's capability seams, plus reply timers.

pub mod audio;
pub mod reply_timer;
pub mod storage;
