//! navcomp CLI library.
//!
//! Subcommand handlers and output selection for the `navcomp` binary. The
//! handlers only parse and validate arguments, call into `navcomp_lib` and
//! print the resulting summaries.

pub mod commands;
pub mod output;
