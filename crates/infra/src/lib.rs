//! Infrastructure layer: storage seams, password handling, batches, report
//! services, configuration.

pub mod batch;
pub mod config;
pub mod password;
pub mod report;
pub mod repository;
pub mod session;

pub use config::{AppBaseConfig, AppConfig, ConfigError};
pub use report::{ReportError, SaleOrderReportService};
