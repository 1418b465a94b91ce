//! Property tests for roster partitioning and cap figures.

mod partition_props;
mod strategies;
