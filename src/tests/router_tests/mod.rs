mod static_tests;
mod volunteers_tests;
