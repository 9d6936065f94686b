pub mod edits;

pub use edits::{AppliedEditDto, PlanReportDto};
