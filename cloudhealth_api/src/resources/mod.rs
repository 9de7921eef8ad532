//! Per-family endpoint methods on [`Client`](crate::Client).
//!
//! Each module supplies URL templates, page sizes, auth style and the
//! error remaps for one resource family; the request pipeline and
//! pagination live in `client` and `pagination`.

mod assignments;
mod aws_accounts;
mod customers;
mod organizations;
mod price_books;
mod reports;
mod statements;
