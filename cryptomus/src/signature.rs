//! Request and webhook signatures.
//!
//! Cryptomus authenticates both directions with the same scheme:
//!
//! ```text
//! sign = hex(md5(base64(json_bytes) + payment_token))
//! ```
//!
//! `json_bytes` are the exact bytes of the request body. The dispatcher
//! serializes a payload once and signs and sends that same buffer, so the
//! signature can never drift from the transmitted body.
//!
//! Webhooks are checked against the gateway's own rendering of the payload:
//! compact JSON in received key order, with numbers written the way
//! ECMAScript's `Number.prototype.toString` writes them (`10.0` as `10`,
//! `1e21` as `1e+21`).
//!
//! MD5 is mandated by the gateway and kept for interoperability only.

use std::io;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as b64;
use md5::{Digest, Md5};
use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Map, Value};

use crate::constants::SIGN_FIELD;
use crate::error::CryptomusError;

/// Signs already-serialized JSON bytes with `secret`.
///
/// Returns 32 lowercase hexadecimal characters.
#[must_use]
pub fn sign_json(json: &[u8], secret: &str) -> String {
    let encoded = b64.encode(json);
    let mut hasher = Md5::new();
    hasher.update(encoded.as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Serializes `payload` the way the dispatcher does and signs the result.
///
/// # Errors
///
/// Returns [`CryptomusError::Serialization`] if `payload` cannot be encoded
/// as JSON.
pub fn make_signature<T>(payload: &T, secret: &str) -> Result<String, CryptomusError>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_vec(payload).map_err(|e| CryptomusError::Serialization {
        context: "make_signature".to_owned(),
        source: e,
    })?;
    Ok(sign_json(&json, secret))
}

/// Splits a webhook payload into its `sign` value and the signed content.
///
/// The returned object is a copy with the `sign` key removed and all other
/// keys in their original order. Returns `None` if `payload` is not an
/// object or carries no string `sign` field.
#[must_use]
pub fn strip_sign(payload: &Value) -> Option<(String, Value)> {
    let object = payload.as_object()?;
    let sign = object.get(SIGN_FIELD)?.as_str()?.to_owned();
    let content: Map<String, Value> = object
        .iter()
        .filter(|(key, _)| key.as_str() != SIGN_FIELD)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    Some((sign, Value::Object(content)))
}

/// Checks the embedded `sign` field of `payload` against `secret`.
///
/// The remaining fields are rendered in the gateway's signing form before
/// hashing. Never fails: a missing or malformed `sign` yields `false`.
#[must_use]
pub fn verify_signature(payload: &Value, secret: &str) -> bool {
    let Some((remote, content)) = strip_sign(payload) else {
        return false;
    };
    webhook_json(&content).is_ok_and(|json| sign_json(&json, secret) == remote)
}

/// Parses a raw webhook body and verifies its signature.
///
/// Bodies that are not valid JSON yield `false`.
#[must_use]
pub fn verify_signature_bytes(body: &[u8], secret: &str) -> bool {
    serde_json::from_slice::<Value>(body).is_ok_and(|payload| verify_signature(&payload, secret))
}

/// Renders a webhook payload the way the gateway rendered it for signing.
fn webhook_json(content: &Value) -> Result<Vec<u8>, serde_json::Error> {
    let mut json = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut json, EcmaNumberFormatter);
    content.serialize(&mut serializer)?;
    Ok(json)
}

/// Compact JSON formatter writing numbers in ECMAScript form.
struct EcmaNumberFormatter;

/// Largest integer an IEEE 754 double represents exactly.
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

impl Formatter for EcmaNumberFormatter {
    fn write_i64<W>(&mut self, writer: &mut W, value: i64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if value.unsigned_abs() <= MAX_SAFE_INTEGER {
            write!(writer, "{value}")
        } else {
            #[allow(clippy::cast_precision_loss)]
            let rounded = value as f64;
            self.write_f64(writer, rounded)
        }
    }

    fn write_u64<W>(&mut self, writer: &mut W, value: u64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if value <= MAX_SAFE_INTEGER {
            write!(writer, "{value}")
        } else {
            #[allow(clippy::cast_precision_loss)]
            let rounded = value as f64;
            self.write_f64(writer, rounded)
        }
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(ecma_number(value).as_bytes())
    }
}

/// Formats a finite double like `Number.prototype.toString`.
fn ecma_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    // Shortest round-trip digits, e.g. "1.5e-7".
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };
    let digits = mantissa.replace('.', "");
    let k = i32::try_from(digits.len()).unwrap_or(i32::MAX);
    let n = exponent + 1;

    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }
    if k <= n && n <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat_n('0', (n - k).unsigned_abs() as usize));
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n.unsigned_abs() as usize);
        out.push_str(int);
        out.push('.');
        out.push_str(frac);
    } else if -6 < n && n <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', n.unsigned_abs() as usize));
        out.push_str(&digits);
    } else {
        let (lead, rest) = digits.split_at(1);
        out.push_str(lead);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        out.push(if n > 0 { '+' } else { '-' });
        out.push_str(&(n - 1).unsigned_abs().to_string());
    }
    out
}
