//! Compact share tokens for results.
//!
//! A token is the JSON payload below, UTF-8 encoded, then base64 encoded with
//! the URL-safe alphabet and no padding:
//!
//! ```text
//! { "score": int, "percentile": int,
//!   "categoryScores": { "<Category label>": int, .. },
//!   "analysis": string, "recommendedCareers": [string],
//!   "correctCount": int, "totalCount": int }
//! ```
//!
//! Decoding also accepts the standard alphabet with optional padding, and
//! treats spaces as `+` because form decoding of a query string turns an
//! unescaped `+` into a space.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::bank::BANK_SIZE;
use crate::model::{CategoryScores, QuizResult, ShareMeta};

/// Query parameter that carries the token.
pub const SHARE_PARAM: &str = "share";

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ShareError {
    #[error("share token is empty")]
    Empty,
    #[error("share token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("share token is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("share payload is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("share payload field {field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },
}

//
// ─── PAYLOAD ───────────────────────────────────────────────────────────────────
//

/// A result together with the counts it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedResult {
    pub result: QuizResult,
    pub meta: ShareMeta,
}

fn default_total_count() -> u32 {
    u32::try_from(BANK_SIZE).unwrap_or(u32::MAX)
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Payload {
    score: i32,
    percentile: u32,
    #[serde(default)]
    category_scores: CategoryScores,
    analysis: String,
    #[serde(default)]
    recommended_careers: Vec<String>,
    #[serde(default)]
    correct_count: u32,
    #[serde(default = "default_total_count")]
    total_count: u32,
}

impl Payload {
    fn validate(&self) -> Result<(), ShareError> {
        if self.percentile > 99 {
            return Err(ShareError::OutOfRange {
                field: "percentile",
                value: i64::from(self.percentile),
            });
        }
        if let Some((_, pct)) = self.category_scores.iter().find(|(_, pct)| *pct > 100) {
            return Err(ShareError::OutOfRange {
                field: "categoryScores",
                value: i64::from(pct),
            });
        }
        if self.correct_count > self.total_count {
            return Err(ShareError::OutOfRange {
                field: "correctCount",
                value: i64::from(self.correct_count),
            });
        }
        Ok(())
    }
}

impl From<&SharedResult> for Payload {
    fn from(shared: &SharedResult) -> Self {
        Self {
            score: shared.result.score,
            percentile: shared.result.percentile,
            category_scores: shared.result.category_scores,
            analysis: shared.result.analysis.clone(),
            recommended_careers: shared.result.recommended_careers.clone(),
            correct_count: shared.meta.correct_count,
            total_count: shared.meta.total_count,
        }
    }
}

impl From<Payload> for SharedResult {
    fn from(p: Payload) -> Self {
        Self {
            result: QuizResult {
                score: p.score,
                percentile: p.percentile,
                category_scores: p.category_scores,
                analysis: p.analysis,
                recommended_careers: p.recommended_careers,
            },
            meta: ShareMeta {
                correct_count: p.correct_count,
                total_count: p.total_count,
            },
        }
    }
}

//
// ─── CODEC ─────────────────────────────────────────────────────────────────────
//

/// Encode a result into a URL-safe token.
///
/// # Errors
///
/// Returns `ShareError::Json` if the payload cannot be serialized.
pub fn encode(shared: &SharedResult) -> Result<String, ShareError> {
    let json = serde_json::to_vec(&Payload::from(shared))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Strict decode, reporting why a token was rejected.
///
/// # Errors
///
/// Returns `ShareError` for empty input, bad base64, bad UTF-8, malformed
/// JSON or out-of-range fields.
pub fn try_decode(token: &str) -> Result<SharedResult, ShareError> {
    // spaces are significant: they stand for '+' mangled by form decoding
    let token = token.trim_matches(['\n', '\r', '\t']);
    if token.trim().is_empty() {
        return Err(ShareError::Empty);
    }

    let bytes = if token.contains(['+', '/', ' ']) {
        STANDARD_LENIENT.decode(token.replace(' ', "+"))?
    } else {
        URL_SAFE_LENIENT.decode(token)?
    };
    let json = String::from_utf8(bytes)?;
    let payload: Payload = serde_json::from_str(&json)?;
    payload.validate()?;
    Ok(payload.into())
}

/// Soft decode: any invalid token is simply absent.
#[must_use]
pub fn decode(token: &str) -> Option<SharedResult> {
    try_decode(token).ok()
}

//
// ─── LINKS ─────────────────────────────────────────────────────────────────────
//

/// `base` with its query replaced by `?share=<token>`.
#[must_use]
pub fn share_url(base: &Url, token: &str) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    url.query_pairs_mut().append_pair(SHARE_PARAM, token);
    url
}

/// The raw share token in `url`, if present.
#[must_use]
pub fn share_token(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == SHARE_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// `url` with every query parameter removed.
#[must_use]
pub fn clear_share(url: &Url) -> Url {
    let mut url = url.clone();
    url.set_query(None);
    url
}
