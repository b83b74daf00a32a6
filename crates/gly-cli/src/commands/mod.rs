pub mod client;
pub mod communication;
pub mod dashboard;
pub mod dispatch;
pub mod follow_ups;
pub mod init;
pub mod project;
pub mod recompute;
pub mod report;
pub mod seed;
pub mod shared;
pub mod webhook;
