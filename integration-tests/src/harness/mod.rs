mod fixtures;
pub mod tracing;

pub use fixtures::{convert_fixture, fixture, fixtures_root, load_fixture, parse_stream};
pub use self::tracing::{CapturedEvent, init_test_tracing};
