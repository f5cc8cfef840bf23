pub mod cli;
pub mod domain;
pub mod error;
pub mod logging;
pub mod netease;
pub mod server;
pub mod settings;
