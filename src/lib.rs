//! Salary percentile estimation against national, regional and industry wages.
//!
//! This crate ranks a monthly salary against reference mean wages by assuming
//! a log-normal wage distribution, and serves the results over HTTP for
//! result pages and social preview cards.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod presentation;
pub mod wizard;
