pub mod classify;
pub mod config;
pub mod history;
pub mod init;
pub mod sessionize;
pub mod stats;
