mod normalizer_tests;
mod rect_tests;
