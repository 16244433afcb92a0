mod advise;
mod analyze;
mod common;
mod init;
mod report;
mod run;
mod validate;

pub use advise::{AdviseArgs, advise_content};
pub use analyze::{AnalyzeArgs, analyze_content};
pub use init::{InitArgs, init_config};
pub use report::{ReportArgs, report_dashboard};
pub use run::{RunArgs, run_pipeline};
pub use validate::{ValidateArgs, validate_config};
