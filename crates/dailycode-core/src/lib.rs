//! # dailycode Core Library
//!
//! Generates one small, self-contained Python program per day and keeps a
//! Markdown index of everything generated. The calendar date (UTC) seeds a
//! pseudo-random generator, so a given day always maps to the same template
//! and the same parameters.
//!
//! ## Architecture
//!
//! - **Template registry**: fixed set of named, parameterized code bodies
//! - **Selector**: `YYYYMMDD` seed, uniform template choice, parameter draw
//! - **Renderer**: de-indent, placeholder substitution, header docstring
//! - **Output writer**: year-partitioned files that never overwrite, plus an
//!   append-only index
//!
//! ## Key Components
//!
//! - [`DailyGenerator`]: runs the whole pipeline against a [`Clock`]
//! - [`TemplateRegistry`]: the templates available for selection
//! - [`OutputWriter`]: filesystem layout and index bookkeeping
//! - [`GeneratorConfig`]: TOML configuration

pub mod clock;
pub mod config;
pub mod error;
pub mod generator;
pub mod params;
pub mod render;
pub mod selector;
pub mod template;
pub mod writer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::GeneratorConfig;
pub use error::{ConfigError, CoreError, RenderError, Result};
pub use generator::{DailyGenerator, Generation, Plan};
pub use params::{ParamValue, Params};
pub use render::{render, Rendered};
pub use selector::{seed_for_date, select, select_for_date, Selection};
pub use template::{Template, TemplateRegistry};
pub use writer::{OutputWriter, WrittenFile};
