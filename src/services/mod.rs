pub mod dsl;
pub mod encoding;
pub mod pipeline;
pub mod target;
pub mod writer;
