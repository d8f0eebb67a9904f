// Generation pipeline: prompt rendering, dispatch via the provider router,
// and question extraction from raw model output.
// All LLM calls go through providers; no direct backend calls here.

pub mod handlers;
pub mod prompts;
pub mod questions;
