//! Core library for the `apismoke` CLI.
//!
//! Provides the building blocks used by the binary: CLI argument types, the
//! HTTP client wrapper, the declarative smoke-test suite, the sequential
//! test runner, and report aggregation/persistence. The primary user-facing
//! interface is the `apismoke` command-line application.

pub mod cli;
pub mod error;
pub mod http;
pub mod report;
pub mod runner;
pub mod storage;
pub mod suite;
