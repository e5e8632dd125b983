#![allow(dead_code)]

pub use ganttdag_test_utils::{builders, init_tracing, ymd};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
