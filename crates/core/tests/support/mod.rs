//! Shared test helpers for `timekeep-core` integration tests.
//!
//! These helpers provide reusable fixtures and lightweight mocks so that the
//! approval and aggregation tests can focus on behaviour instead of
//! boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod repositories;
