pub mod accounts;
pub mod config;
pub mod report;
pub mod view;
pub use accounts::{AccountError, AccountId};
pub use config::{AnalystConfig, ConfigError};
pub use report::{EvaluationReport, ReportError, SweepRow};
pub use view::{DashboardRequest, DashboardView, MatrixPanel, build_view};
