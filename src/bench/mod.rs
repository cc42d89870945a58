//! Measurement scaffolding around the reducer: input generation, the
//! reductions it is compared against, timing and reporting.

pub mod config;
pub mod data;
pub mod ops;
pub mod policy;
pub mod report;
pub mod stats;
pub mod timing;

pub use self::config::{BenchConfig, ConfigError};
pub use self::data::DataGenerator;
pub use self::ops::Operation;
pub use self::policy::Policy;
pub use self::report::Report;
pub use self::timing::{time_it, Timing};
