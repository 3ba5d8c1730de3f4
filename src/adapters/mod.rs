pub mod config_store;
pub mod cpuinfo;
pub mod hardware_detector;

pub use config_store::TomlConfigStore;
pub use cpuinfo::{FileCpuInfoSource, StaticCpuInfoSource};
pub use hardware_detector::RaspberryPiInfo;
