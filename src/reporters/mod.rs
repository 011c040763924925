//! Report writers: the thin formatting layer downstream of the parsing
//! core. Each writer takes the already-computed `FileInformation` list
//! and renders it in one of the original tool's output shapes.

pub mod summary;
pub mod tabular;
pub mod warnings;
pub mod xml;

pub use summary::RunSummary;
