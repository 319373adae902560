//! Bearer-token authentication.
//!
//! Tokens are issued by an external authentication provider that shares an
//! HMAC secret with this service; the API only answers "is this caller
//! authenticated" when gating write endpoints.

pub mod jwt;
