//! Tests for the session controller
