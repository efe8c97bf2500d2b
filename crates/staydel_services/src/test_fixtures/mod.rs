//! Reusable mock infrastructure for service tests.

mod mock_infra;

pub use mock_infra::MockInfra;
