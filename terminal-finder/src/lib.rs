//! Nearby bus terminal finder.
//!
//! Answers: "From this terminal, which other terminals can I reach on a
//! direct express route within a given distance?" The answer keeps the
//! closest terminal in each province and city, nearest first.

pub mod catalog;
pub mod domain;
pub mod finder;
pub mod geocode;
pub mod listing;
pub mod report;
pub mod routes;
