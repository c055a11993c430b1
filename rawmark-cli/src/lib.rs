//! Library side of the rawmark binary: the command line definition and the
//! output renderings shared by the CLI and its tests.

pub mod cli;
pub mod transforms;
