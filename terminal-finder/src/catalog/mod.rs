//! Terminal catalog: loading, saving and name lookup.
//!
//! The catalog is a plain table of [`TerminalRecord`](crate::domain::TerminalRecord)s
//! read from CSV. Name lookup goes through the [`Matcher`] trait so that an
//! indexed implementation can replace the linear scan.

mod error;
mod file;
mod matcher;
mod table;

pub use error::{CatalogError, SelectError};
pub use matcher::{Candidates, Matcher, SubstringMatcher};
pub use table::TerminalCatalog;
