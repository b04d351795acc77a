// src/exit.rs
//! Standardized process exit codes for `titlegraph`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum TitleGraphExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, config).
    Error = 1,
    /// Input could not be parsed or the requested community is missing.
    InvalidInput = 2,
    /// Pipeline ran but no graph survived filtering.
    EmptyGraph = 3,
}

impl TitleGraphExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for TitleGraphExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let code = self.code() as u8;
        std::process::ExitCode::from(code)
    }
}
