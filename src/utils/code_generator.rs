//! Random identifier generation for records, short tokens, and sessions.
//!
//! All identifiers come from OS entropy (`getrandom`) encoded as URL-safe
//! base64 without padding, so they are safe in paths, query strings, and
//! cookies. Uniqueness is probabilistic here and enforced by UNIQUE
//! constraints in the store.

use base64::Engine as _;

/// Random bytes behind a short token; encodes to exactly 8 characters.
const SHORT_CODE_BYTES: usize = 6;

/// Random bytes behind a record id; encodes to 22 characters.
const RECORD_ID_BYTES: usize = 16;

/// Random bytes behind a session token; encodes to 43 characters.
const SESSION_TOKEN_BYTES: usize = 32;

fn random_token(len: usize) -> String {
    let mut buffer = vec![0u8; len];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Generates an 8-character short token for a URL.
pub fn generate_short_code() -> String {
    random_token(SHORT_CODE_BYTES)
}

/// Generates a primary-key identifier for a new record.
pub fn generate_record_id() -> String {
    random_token(RECORD_ID_BYTES)
}

/// Generates an opaque session token.
///
/// 256 bits of entropy; the token is the bearer credential, so it is the
/// one identifier where guessing resistance matters.
pub fn generate_session_token() -> String {
    random_token(SESSION_TOKEN_BYTES)
}
