pub mod account;
pub mod command;
pub mod transaction;
