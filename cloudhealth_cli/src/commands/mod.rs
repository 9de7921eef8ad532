//! CLI subcommand implementations.

pub mod accounts;
pub mod assignments;
pub mod cost_history;
pub mod customers;
pub mod organizations;
pub mod price_books;
pub mod statements;
