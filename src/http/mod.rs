//! HTTP client layer: `CopyTradeHttp` and the sparse query builder.

pub mod client;
pub mod query;

pub use client::CopyTradeHttp;
pub use query::sparse_query;
