pub mod registry;
pub mod collectors;

pub use registry::{MetricsRegistry, RegistrationError};
pub use collectors::KittyMetricsCollector;
