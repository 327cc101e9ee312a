pub mod test_json;
