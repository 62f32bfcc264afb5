pub mod extraction_tests;
pub mod pipeline_tests;
