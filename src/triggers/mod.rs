/// Keyword detection rule
pub mod detection_engine;

pub use detection_engine::{is_motion, DetectionEngine, MOTION_KEYWORD};
