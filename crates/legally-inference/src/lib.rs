//! Upstream LLM orchestration for the legally backend.
//!
//! This crate owns everything between "a user question arrived" and "some
//! hosted model produced text": the [`HfClient`] wrapping the inference
//! REST API, the ordered primary→fallback invocation in [`fallback`], and
//! the process-local conversation [`ThreadStore`].
//!
//! It knows nothing about HTTP routing or the admin side; the server binary
//! wires it into handlers.

pub mod client;
pub mod fallback;
pub mod message;
pub mod thread;

pub use client::HfClient;
pub use fallback::{Advisor, AdviceError, Answer, ModelConvention, ModelSpec, TextGenerator};
pub use message::{Message, Role};
pub use thread::ThreadStore;
