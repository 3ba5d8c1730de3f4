pub mod config;
pub mod cpuinfo;
pub mod hardware;

pub use config::ConfigStore;
pub use cpuinfo::CpuInfoSource;
pub use hardware::BoardDetector;
