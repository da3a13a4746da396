//! The G1 agent.
//!
//! Holds resolved model settings and routes prompts to a response
//! generator. The bundled generator is a stub that echoes the prompt.

mod generator;
mod runner;

pub use generator::{Context, GenerationRequest, ResponseGenerator, StubGenerator};
pub use runner::Agent;
