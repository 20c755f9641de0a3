pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod export;
pub mod merge;
pub mod models;
pub mod ordinal;
pub mod parse;
pub mod pipeline;
pub mod report;
pub mod sort;
