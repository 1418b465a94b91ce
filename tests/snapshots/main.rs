//! Snapshot tests for rendered roster output.

mod fixture;
mod report_output;
