pub mod calculator;
pub mod data;
pub mod errors;
pub mod fetcher;
pub mod models;
pub mod pipeline;
