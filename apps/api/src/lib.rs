//! Vitae AI service: relays resume text to a configurable LLM backend and
//! returns ATS-optimized resumes or tailored interview questions as uniform
//! JSON envelopes. One of four providers is active per process; handlers
//! never know which.

pub mod auth;
pub mod config;
pub mod errors;
pub mod generation;
pub mod providers;
pub mod routes;
pub mod state;
