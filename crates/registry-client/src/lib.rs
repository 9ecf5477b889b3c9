//! Client side of the producer registry.
//!
//! - [`client`] wraps the REST endpoints with typed requests and errors.
//! - [`dashboard`] turns a listing into the dashboard aggregates.
//! - [`forms`] builds and pre-validates create/update payloads.
//! - [`render`] writes listings, records and charts as plain text.
//!
//! The `registry-cli` binary wires these together.

pub mod client;
pub mod dashboard;
pub mod dto;
pub mod forms;
pub mod render;

pub use client::{ClientError, PAGE_SIZE, RegistryClient};
pub use dashboard::{DashboardSummary, PieChart, Slice, summarize};
pub use dto::{ApiErrorBody, Producer, ProducerPayload};
pub use forms::{FieldIssue, FormErrors, ProducerForm, prepare_payload};
