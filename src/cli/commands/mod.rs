pub mod backup;
pub mod bag;
pub mod check;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod photo;
pub mod reset;
pub mod show;
pub mod stats;
