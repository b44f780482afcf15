pub mod lyf;
pub mod metrics;
pub mod poller;
pub mod supervisor;
