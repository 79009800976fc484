//! # jobdesk-entity
//!
//! Domain entity models for the Jobdesk platform: users with their closed
//! two-role model, job postings with the mutually-exclusive compensation
//! modes, and applications with their snapshotted participant parties.

pub mod application;
pub mod job;
pub mod user;
