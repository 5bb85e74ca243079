//! Tests for the session service

mod service_tests;
