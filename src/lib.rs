pub mod app;
pub mod cache;
pub mod config;
pub mod errors;
pub mod external;
pub mod fetch;
pub mod models;
pub mod navigation;
pub mod pipeline;
pub mod prompt;
pub mod scrape;
pub mod search;
