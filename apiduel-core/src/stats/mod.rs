// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! Statistical comparison of paired REST/GraphQL samples.
//!
//! Descriptive statistics, the one-sided paired t-test, and the
//! per-scenario comparator that ties them together for both metrics.

mod compare;
mod descriptive;
mod paired;

pub use compare::{compare_scenario, MetricComparison, ScenarioComparison};
pub use descriptive::{describe, DescriptiveStats};
pub use paired::{paired_one_sided, PairedTTest};
