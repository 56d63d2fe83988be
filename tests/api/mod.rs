//! REST API Tests

mod health_tests;
mod text_tests;
