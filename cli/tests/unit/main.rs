//! Unit tests for remctl-help
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod dispatch_service;
