mod capabilities_tests;
mod catalog_tests;
