pub mod extractor;
pub mod fetch;
pub mod html_parser;
