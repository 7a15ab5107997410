mod property_tests;
mod utils;
