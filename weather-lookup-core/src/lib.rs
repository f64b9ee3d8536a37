//! Core library for the `weather-lookup` CLI.
//!
//! This crate defines:
//! - Configuration (where the weather record service lives)
//! - The record source abstraction and its HTTP implementation
//! - The lookup form state machine and its pure renderer
//!
//! It is used by `weather-lookup-cli`, but any front-end can drive
//! [`LookupForm`] and print its [`FormView`].

pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod source;
pub mod view;

pub use config::{Config, DEFAULT_BASE_URL};
pub use error::LookupError;
pub use form::{DisplayState, LookupForm, PendingLookup};
pub use model::{CreatedRecord, CurrentConditions, LookupResult, NewRecord, WeatherSnapshot};
pub use source::{RecordSource, http::HttpRecordSource, source_from_config};
pub use view::{FormView, Panel, ResultPanel, SubmitButton, render};
