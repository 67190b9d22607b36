//! Clock port
//!
//! The "last year" window and the default end of a temperature range both
//! depend on the current date. Injecting it keeps handlers deterministic
//! under test and keeps a long-running process from serving a window
//! frozen at startup.

use chrono::NaiveDate;

/// Source of the current calendar date
pub trait Clock: Send + Sync {
    /// Today's date
    fn today(&self) -> NaiveDate;
}
