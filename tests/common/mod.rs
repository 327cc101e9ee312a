// Common test utilities and fixtures

pub mod fixtures;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{DocsSite, GET_STARTED};
#[allow(unused_imports)]
pub use helpers::{assert_hierarchy, create_test_services, read_json_records};
