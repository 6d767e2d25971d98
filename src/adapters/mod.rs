pub mod cli;
pub mod console;
pub mod output;
pub mod record_store;
