pub mod controller;

pub use controller::DetectorController;
