//! Command-line front end over the library.

pub mod commands;
