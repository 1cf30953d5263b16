//! # Pasporto
//!
//! `pasporto` is a stateless authentication gateway in front of an Amazon
//! Cognito user pool. It exposes sign-up with immediate administrative
//! confirmation, password sign-in, and verification (SMS MFA challenge
//! response or registration-code confirmation) and owns no state of its own:
//! every durable record (users, confirmation status, MFA sessions, the tokens
//! themselves) lives in the pool.
//!
//! The service is a translation layer. It validates request shapes, sequences
//! the provider calls, and maps provider errors to stable HTTP responses.

pub mod api;
pub mod cli;
pub mod cognito;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
