mod engine_tests;
mod normalizer_tests;
