pub mod get_test;
