//! comex-desk
//!
//! Record-keeping core for an import/export trade desk: products,
//! requirements, import permits (PIMs), and contract SLA tracking. All
//! records live in an explicitly owned in-memory store, persist to a single
//! durable snapshot slot, and feed a set of pure aggregation queries that
//! recompute the derived dashboard view after every mutation.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use comex_desk::commands::products::UpsertProductCommand;
//! use comex_desk::persistence::InMemorySnapshotStore;
//! use comex_desk::TradeDeskService;
//! use rust_decimal::Decimal;
//!
//! let mut desk = TradeDeskService::open(Box::new(InMemorySnapshotStore::default()));
//! desk.upsert_product(UpsertProductCommand {
//!     code: "MP-1".into(),
//!     name: "Steel coil".into(),
//!     price: Decimal::new(10000, 2),
//!     last_import: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
//! })?;
//!
//! let dashboard = desk.dashboard();
//! assert!(dashboard.totals.total_quantity.is_zero());
//! # Ok::<(), comex_desk::ServiceError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod commands;
pub mod config;
pub mod errors;
pub mod models;
pub mod persistence;
pub mod queries;
pub mod services;
pub mod store;

pub use errors::ServiceError;
pub use services::TradeDeskService;
pub use store::RecordStore;
