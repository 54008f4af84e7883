//! Termination protection engine for Swiss employment law.
//!
//! This crate decides, for one termination case, the legally valid
//! termination deadline, whether the statutory notice period must be
//! extended, and whether the termination itself fell inside a protection
//! period and is therefore void. It also ships two small siblings: the
//! cantonal salary continuation tables and a keyword search over the
//! relevant statute articles.

#![warn(missing_docs)]

pub mod api;
pub mod articles;
pub mod config;
pub mod error;
pub mod models;
pub mod protection;
pub mod salary;
