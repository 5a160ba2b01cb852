//! Shared types and decision logic for the Worldly country browser.
//!
//! Everything in this crate is target independent: the browser crate supplies
//! the HTTP and storage plumbing through the [`domain::a001_country::CountrySource`]
//! and [`system::favorites::ProfileClient`] traits.

pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
