pub mod config;
pub mod init;
pub mod process;
pub mod validate;
pub mod visits;
