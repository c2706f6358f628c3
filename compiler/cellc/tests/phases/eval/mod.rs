//! Whole-program tests: a session with the library loaded.

mod errors;
mod nesting;
mod programs;
