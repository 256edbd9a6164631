//! One calling convention over remote and local LLM providers.
//!
//! A [`Portal`] resolves a model name through a [`ModelDirectory`] to a
//! provider, builds that vendor's client once, and forwards
//! `generate(prompt)` calls to it. [`TestPortal`] wraps a portal to grade
//! answers against a rubric.

pub mod config;
pub mod errors;
pub mod llm;
pub mod portal;

pub use config::{CredentialSource, EnvCredentials, ModelDirectory, StaticCredentials};
pub use errors::{ClientError, ErrorKind, PortalError};
pub use llm::{GenerationOptions, GenerationRequest, LLMProvider, LLMResponse};
pub use portal::{Portal, TestPortal};
