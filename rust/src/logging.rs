//! Stderr tracing for a schedule run, gated by `ScheduleConfig::verbosity`.
//!
//! Each level adds detail on top of the previous one:
//! - `VERBOSITY_SUMMARY`: one line per pipeline phase of `compute_schedule_with_config`
//!   (topological order, completion time, critical task count and chain length)
//! - `VERBOSITY_TASKS`: earliest start/finish from the forward pass and latest
//!   start/finish from the backward pass, one line per task
//! - `VERBOSITY_DEBUG`: graph size, Kahn's initial ready queue, every task release
//!   and the tasks left unresolved by a cycle
//!
//! The macros expand to a plain comparison, so a silent run formats nothing.

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_SUMMARY: u8 = 1;
pub const VERBOSITY_TASKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Phase results; printed when verbosity >= `VERBOSITY_SUMMARY`.
#[macro_export]
macro_rules! log_summary {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_SUMMARY {
            eprintln!($($arg)*);
        }
    };
}

/// Per-task pass values; printed when verbosity >= `VERBOSITY_TASKS`.
#[macro_export]
macro_rules! log_tasks {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_TASKS {
            eprintln!($($arg)*);
        }
    };
}

/// Topological sort internals; printed when verbosity >= `VERBOSITY_DEBUG`.
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!($($arg)*);
        }
    };
}
