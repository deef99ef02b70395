// src/infrastructure/storage/sigv4.rs
//! AWS Signature Version 4 query-string presigning for S3-compatible
//! object stores.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const SERVICE: &str = "s3";

pub struct Credentials<'a> {
    pub access_key_id: &'a str,
    pub secret_access_key: &'a str,
    pub region: &'a str,
}

pub struct PresignRequest<'a> {
    pub method: &'a str,
    /// Host header value, including a non-default port.
    pub host: &'a str,
    /// Unencoded absolute path, e.g. `/bucket/uploads/a.jpg`.
    pub path: &'a str,
    pub timestamp: DateTime<Utc>,
    pub expires_secs: u64,
}

/// Percent-encode per the SigV4 rules: only unreserved characters pass
/// through, and `/` is kept when encoding a path.
pub fn uri_encode(input: &str, keep_slash: bool) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(byte));
            }
            b'/' if keep_slash => out.push('/'),
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

fn hmac(key: &[u8], data: &str) -> Result<Vec<u8>, hmac::digest::InvalidLength> {
    let mut mac = HmacSha256::new_from_slice(key)?;
    mac.update(data.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

fn signing_key(secret: &str, date: &str, region: &str) -> Result<Vec<u8>, hmac::digest::InvalidLength> {
    let k_date = hmac(format!("AWS4{secret}").as_bytes(), date)?;
    let k_region = hmac(&k_date, region)?;
    let k_service = hmac(&k_region, SERVICE)?;
    hmac(&k_service, "aws4_request")
}

/// Returns the encoded path plus signed query string, ready to append to
/// `scheme://host`.
pub fn presign(
    credentials: &Credentials<'_>,
    request: &PresignRequest<'_>,
) -> Result<String, hmac::digest::InvalidLength> {
    let amz_date = request.timestamp.format("%Y%m%dT%H%M%SZ").to_string();
    let date = request.timestamp.format("%Y%m%d").to_string();
    let scope = format!("{date}/{}/{SERVICE}/aws4_request", credentials.region);
    let credential = format!("{}/{scope}", credentials.access_key_id);

    // Already in lexicographic order.
    let query = format!(
        "X-Amz-Algorithm={ALGORITHM}&X-Amz-Credential={}&X-Amz-Date={amz_date}&X-Amz-Expires={}&X-Amz-SignedHeaders=host",
        uri_encode(&credential, false),
        request.expires_secs,
    );
    let canonical_uri = uri_encode(request.path, true);

    let canonical_request = format!(
        "{}\n{canonical_uri}\n{query}\nhost:{}\n\nhost\nUNSIGNED-PAYLOAD",
        request.method, request.host
    );
    let string_to_sign = format!(
        "{ALGORITHM}\n{amz_date}\n{scope}\n{}",
        hex::encode(Sha256::digest(canonical_request.as_bytes()))
    );

    let key = signing_key(credentials.secret_access_key, &date, credentials.region)?;
    let signature = hex::encode(hmac(&key, &string_to_sign)?);

    Ok(format!("{canonical_uri}?{query}&X-Amz-Signature={signature}"))
}
