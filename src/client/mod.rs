//! Network-facing machinery: transport seam, poll timer, command sender

pub mod commands;
pub mod poller;
pub mod transport;

pub use commands::{CommandOverrides, CommandSender};
pub use poller::PollTimer;
pub use transport::{HttpTransport, Transport};
