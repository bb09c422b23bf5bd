//! Unit tests against the public API.

mod geometry_tests;
mod input_tests;
mod settings_tests;
