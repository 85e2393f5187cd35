//! changelog-scan: extract structured patch records from free-form changelogs
//!
//! Changelog pages are written for humans: version numbers appear inline in
//! prose, chained on one line, grouped under "Patches" headings, or summarized
//! as ranges. This crate scans such a document and produces a consolidated,
//! newest-first table of (version range, description) records.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │   Fetcher   │────▶│  Extractor  │────▶│ Consolidator │
//! │  (retrieve) │     │ (recognize) │     │   (merge)    │
//! └─────────────┘     └─────────────┘     └──────────────┘
//!                            │                    │
//!                            ▼                    ▼
//!                     ┌─────────────┐      ┌─────────────┐
//!                     │ Recognizers │      │    Sink     │
//!                     │ (per idiom) │      │   (CSV)     │
//!                     └─────────────┘      └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`extract`]: recognizers and the accumulating patch table
//! - [`consolidate`]: range merging and newest-first ordering
//! - [`version`]: patch version and version range model
//! - [`fetch`]: changelog retrieval via the Firecrawl scrape API
//! - [`report`]: CSV sink and the latest-patch query
//! - [`pipeline`]: end-to-end orchestration
//! - [`config`]: shared constants and environment lookup

pub mod config;
pub mod consolidate;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod report;
pub mod version;
