mod animator_tests;
mod driver_tests;
mod config_tests;
