pub mod app;
pub mod input;
pub mod telemetry;

pub use app::run as run_app;
