//! Comment classification, rating and persistence behind a small web form.

pub mod api;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod logging;
pub mod store;
pub mod submission;
pub mod ui;
