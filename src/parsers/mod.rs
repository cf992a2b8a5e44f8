pub mod languages;
pub mod transcriptions;
pub mod tsv;
