//! # adapter_tables: Figure Table Loading
//!
//! ## Layer Role
//!
//! adapter_tables sits above `interp_core` and turns published figure
//! tables into ready-to-query interpolators:
//! - Naming convention for figure variables (`naming`)
//! - Source decoding for script, JSON and TOML files (`format`)
//! - Figure assembly and evaluation (`figure`)
//! - Async providers (`provider`)
//! - Query input clean-up (`sanitize`)
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use adapter_tables::figure::Query;
//! use adapter_tables::naming::FigureId;
//! use adapter_tables::provider::{FileProvider, TableProvider};
//!
//! # async fn run() -> Result<(), adapter_tables::LoadError> {
//! let set = FileProvider::new().load("data/figures.js").await?;
//! let z = set.evaluate(&FigureId::new(1, 2, 1), Query::Point2(0.5, 5.0))?;
//! println!("{}", z);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod figure;
pub mod format;
pub mod naming;
pub mod provider;
pub mod sanitize;

pub use error::LoadError;
pub use figure::{Figure, FigureSet, Query};
pub use naming::FigureId;
pub use provider::{FileProvider, TableProvider};
