pub mod test_pipeline;
pub mod test_records;
