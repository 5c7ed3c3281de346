//! Shared test utilities for greeter-sessions
//!
//! This module provides filesystem fixtures for integration tests:
//! - Icon directories holding session badges
//! - Session directories holding `.desktop` files
