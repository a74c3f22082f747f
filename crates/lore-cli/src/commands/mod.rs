pub mod ask;
pub mod config;
pub mod dispatch;
pub mod report;
pub mod session;
