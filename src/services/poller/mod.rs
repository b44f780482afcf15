pub mod engine;

pub use engine::{PollSummary, PollerEngine};
