// Library for tests to access modules

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod summary;
pub mod sysinfo_repo;
pub mod thresholds;
pub mod units;
pub mod version;
pub mod writer;
