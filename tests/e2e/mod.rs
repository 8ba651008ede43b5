//! End-to-end tests against a real vision API
//!
//! Run with: `OPENAI_API_KEY=... cargo test -- --ignored`

pub mod vision;
