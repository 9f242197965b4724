mod discover_tests;
mod parse_tests;
