//! Raw HTML machinery tested through the public API.

mod grammar;
mod injection;
