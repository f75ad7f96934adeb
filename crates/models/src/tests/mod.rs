/// Connection and migration tests against in-memory SQLite
pub mod db_tests;
