pub mod test_markdown;
