//! Configuration for the rigpanel client

mod app_config;

pub use app_config::PanelConfig;
