//! Command pattern interfaces
//!
//! This module defines the Command interface executed by the binary's
//! single top-level handler.

use crate::binder::BindReport;
use crate::errors::BoundResult;

/// Represents an executable command in the application
///
/// Command objects encapsulate the logic for a specific CLI operation,
/// allowing for separation of concerns and better testability.
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// The scan report, or a fatal error
    fn execute(&self, out: &mut dyn std::io::Write) -> BoundResult<BindReport>;
}
