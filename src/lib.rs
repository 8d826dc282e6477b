pub mod backend;
pub mod config;
pub mod constants;
pub mod diff;
pub mod errors;
pub mod http;
pub mod models;
pub mod notices;
pub mod search;
pub mod status;
pub mod sync;
pub mod tracker;
pub mod utils;
pub mod working_set;
