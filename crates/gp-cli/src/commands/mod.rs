pub mod activate;
pub mod analyze;
pub mod board;
pub mod config;
pub mod diagram;
pub mod dispatch;
pub mod orphans;
pub mod projects;
pub mod steps;
pub mod templates;
