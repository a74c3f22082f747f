//! # lore-report
//!
//! Turns a topic, a learner profile, and gathered research into a learning
//! report, and keeps the reports of one session.
//!
//! - [`ReportAssembler`] renders the report as Markdown by plain interpolation
//! - [`SessionMemory`] maps each topic to its latest report
//! - [`concept_flow`] and [`concept_flow_svg`] draw the learning-flow diagram
//! - [`format_hint`] gives the study suggestion for a preferred format
//! - [`export_report`] writes a report to its download file

pub mod assembler;
pub mod diagram;
pub mod export;
pub mod hints;
pub mod session;

pub use assembler::{Report, ReportAssembler, preview};
pub use diagram::{concept_flow, concept_flow_svg};
pub use export::{ExportError, export_report, report_file_name};
pub use hints::format_hint;
pub use session::SessionMemory;
