//! Domain types for the metro route finder.
//!
//! Stop keys are validated at construction time, so code that receives a
//! `StopKey` can rely on it being normalized and non-empty.

mod line;
mod stop;

pub use line::LineId;
pub use stop::{InvalidStopKey, StopId, StopKey, normalize_stop_name};
