//! Request signing.
//!
//! Every signed request carries a random salt and an MD5 signature binding
//! the operation's script name, its canonicalized parameters, and the
//! merchant's secret key. The algorithm must match the remote check exactly:
//!
//! 1. insert a fresh 16-character alphanumeric salt under `pg_salt`;
//! 2. concatenate `script_name;`, then `key=value;` for every field except
//!    `pg_sig` in ascending byte-lexicographic key order;
//! 3. append the raw secret key with no separator;
//! 4. the signature is the lowercase hex MD5 of the UTF-8 bytes of that
//!    string.
//!
//! Signing is pure: [`sign`] never fails and never mutates its input, and the
//! digest covers the exact strings that are transmitted.

use rand::{distributions::Alphanumeric, Rng};

use crate::fields::FieldSet;

/// Field carrying the per-request salt.
pub const SALT_FIELD: &str = "pg_salt";

/// Field carrying the request signature. Always excluded from its own input.
pub const SIGNATURE_FIELD: &str = "pg_sig";

const SALT_LEN: usize = 16;

/// Generate a random 16-character salt drawn uniformly from `[A-Za-z0-9]`.
pub fn generate_salt() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SALT_LEN)
        .map(char::from)
        .collect()
}

/// Compute the signature over a field set that already contains its salt.
///
/// The `pg_sig` field is skipped if present, so re-signing a sealed field
/// set reproduces the same digest.
pub fn sign(script_name: &str, fields: &FieldSet, secret: &str) -> String {
    let mut input = String::with_capacity(64);
    input.push_str(script_name);
    input.push(';');
    for (key, value) in fields.iter() {
        if key == SIGNATURE_FIELD {
            continue;
        }
        input.push_str(key);
        input.push('=');
        input.push_str(value);
        input.push(';');
    }
    input.push_str(secret);

    format!("{:x}", md5::compute(input.as_bytes()))
}

/// Seal a field set for transmission: insert a fresh salt, then compute and
/// insert the signature.
pub fn seal(script_name: &str, fields: &mut FieldSet, secret: &str) {
    fields.insert(SALT_FIELD, generate_salt());
    let signature = sign(script_name, fields, secret);
    fields.insert(SIGNATURE_FIELD, signature);
}
