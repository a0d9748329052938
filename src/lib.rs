pub mod app;

pub use app::{App, HeadlessReport};
pub use moser_core::config::AppConfig;
