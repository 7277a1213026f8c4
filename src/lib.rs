//! glucolog - Pure-Rust converter from wide-form glucose log sheets to a normalized append log
//!
//! This crate provides functionality to parse wide-format glucose log
//! sheets (one labeled grid per reporting period, laid out like the
//! paper clinical form) into normalized, time-ordered records, and to
//! compute an idempotent difference against the already-persisted
//! destination log so re-running a sync never duplicates entries.
//!
//! The crate is the pure core of a sheet-sync tool: credential
//! handling, remote sheet I/O and the CLI entry point are external
//! collaborators. They hand this crate a list of labeled grids and the
//! existing log, and receive back the rows to append.
//!
//! # Quick Start
//!
//! ```rust
//! use glucolog::{SourceSheet, SyncBuilder};
//!
//! fn main() -> Result<(), glucolog::GlucologError> {
//!     // One reporting period, fetched externally. Row 0 is the header,
//!     // rows 1-4 are blood glucose / carbs / insulin / notes.
//!     let sheet = SourceSheet::new(
//!         "1 - Week 4/1",
//!         vec![
//!             vec!["".into(), "Breakfast".into(), "Lunch".into(), "Dinner".into(), "Bedtime".into()],
//!             vec!["Blood Glucose".into(), "145⬆".into(), "110".into(), "".into(), "98".into()],
//!             vec!["Carbs".into(), "30".into(), "45".into(), "".into(), "".into()],
//!             vec!["Insulin".into(), "4".into(), "6".into(), "".into(), "".into()],
//!             vec!["Notes".into(), "".into(), "".into(), "".into(), "before bed".into()],
//!         ],
//!     );
//!
//!     let planner = SyncBuilder::new().with_default_year(2024).build()?;
//!
//!     // First run: everything is new
//!     let plan = planner.plan(&[sheet.clone()], &[]);
//!     assert_eq!(plan.records().len(), 3);
//!
//!     // Second run against the now-updated log: nothing to append
//!     let rerun = planner.plan(&[sheet], plan.records());
//!     assert!(rerun.is_empty());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Custom Form Layout
//!
//! ```rust
//! use chrono::NaiveTime;
//! use glucolog::{FormLayout, SyncBuilder, TimeSlot};
//!
//! # fn main() -> Result<(), glucolog::GlucologError> {
//! // A two-slot form with metrics in rows 0-3 and no header row
//! let layout = FormLayout {
//!     glucose_row: 0,
//!     carbs_row: 1,
//!     insulin_row: 2,
//!     notes_row: 3,
//!     slots: vec![
//!         TimeSlot::new("Morning", 1, NaiveTime::from_hms_opt(7, 30, 0).unwrap()),
//!         TimeSlot::new("Evening", 2, NaiveTime::from_hms_opt(19, 0, 0).unwrap()),
//!     ],
//! };
//!
//! let planner = SyncBuilder::new()
//!     .with_layout(layout)
//!     .with_default_year(2024)
//!     .build()?;
//! # let _ = planner;
//! # Ok(())
//! # }
//! ```
//!
//! # Rendering a Plan
//!
//! ```rust
//! use glucolog::SyncBuilder;
//!
//! # fn main() -> Result<(), glucolog::GlucologError> {
//! let planner = SyncBuilder::new().with_default_year(2024).build()?;
//! let plan = planner.plan(&[], &[]);
//!
//! // Fixed 9-column rows for the destination log...
//! let rows: Vec<Vec<String>> = plan.rows();
//! assert!(rows.is_empty());
//!
//! // ...or CSV / JSON to any writer
//! let mut csv = Vec::new();
//! plan.write_csv(&mut csv)?;
//! # Ok(())
//! # }
//! ```

mod aggregate;
mod api;
mod builder;
mod diff;
mod error;
mod extract;
mod layout;
mod output;
mod parser;
mod types;

// 公開API
pub use api::Trend;
pub use builder::{SyncBuilder, SyncPlan, Synchronizer};
pub use error::GlucologError;
pub use layout::{FormLayout, TimeSlot};
pub use types::{LogRecord, SourceSheet, SyncReport};
