pub mod config;
pub mod convert;
pub mod init;
pub mod preview;
pub mod schemas;
