pub mod citation_text;
