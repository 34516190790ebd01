//! Core types shared by the BM25+ ranking engine.
//!
//! This crate holds the plain values that cross the engine boundary:
//!
//! - **Inputs**: [`Document`] and its [`DocId`]
//! - **Outputs**: [`ScoredDocument`], one ranked hit
//! - **Configuration**: [`Bm25Params`] and the [`ParamsError`] it can raise
//!
//! Nothing here knows about tokens or indexes, so callers can build and
//! inspect documents and results without pulling in the engine.

#![warn(missing_docs)]

use core::cmp::Ordering;
use core::fmt;

/// Unique document identifier.
///
/// Identity of a [`Document`] is its id: indexing a second document with an
/// id that is already present is a no-op, whatever its text.
pub type DocId = u32;

/// A document handed to the engine for indexing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    /// Caller-chosen identifier.
    pub id: DocId,
    /// Raw, untokenized text.
    pub text: String,
}

impl Document {
    /// Creates a new document.
    pub fn new(id: DocId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Document({}, {:?})", self.id, self.text)
    }
}

/// A ranked query hit: relevance score paired with the matching document.
///
/// Results are ordered by score (descending), then by document id
/// (ascending); see [`ScoredDocument::rank_cmp`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDocument {
    /// BM25+ relevance score (higher is better). Always finite.
    pub score: f64,
    /// The document as it was indexed.
    pub document: Document,
}

impl ScoredDocument {
    /// Creates a new scored document.
    #[inline]
    pub const fn new(score: f64, document: Document) -> Self {
        Self { score, document }
    }

    /// Returns the id of the matched document.
    #[inline(always)]
    pub fn id(&self) -> DocId {
        self.document.id
    }

    /// Ranking order: `Less` means `self` ranks ahead of `other`.
    ///
    /// Higher score first; equal scores fall back to ascending id so that
    /// result order never depends on hash iteration order.
    #[inline]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        match other.score.total_cmp(&self.score) {
            Ordering::Equal => self.document.id.cmp(&other.document.id),
            ord => ord,
        }
    }

    /// Splits the hit into its `(score, document)` pair.
    pub fn into_pair(self) -> (f64, Document) {
        (self.score, self.document)
    }
}

impl From<(f64, Document)> for ScoredDocument {
    fn from((score, document): (f64, Document)) -> Self {
        Self::new(score, document)
    }
}

impl fmt::Display for ScoredDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc={} score={:.6}", self.document.id, self.score)
    }
}

/// Errors raised when validating [`Bm25Params`].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ParamsError {
    /// A parameter is NaN or infinite.
    #[error("parameter `{name}` must be finite, got {value}")]
    NotFinite {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A parameter lies outside its accepted range.
    #[error("parameter `{name}` must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
}

/// Tuning parameters for the BM25+ formula.
///
/// Fixed for the lifetime of an engine. The defaults are the values the
/// reference scores were produced with and must not drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25Params {
    /// Term-frequency saturation. Default: 1.6
    pub k1: f64,
    /// Document-length normalization strength (0.0-1.0). Default: 0.3
    pub b: f64,
    /// Additive floor applied to every term contribution. Default: 0.7
    pub delta: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self::plus()
    }
}

impl Bm25Params {
    /// BM25+ parameters used by the reference engine.
    pub const fn plus() -> Self {
        Self {
            k1: 1.6,
            b: 0.3,
            delta: 0.7,
        }
    }

    /// Classic Okapi BM25 parameters (no lower-bound floor).
    pub const fn okapi() -> Self {
        Self {
            k1: 1.2,
            b: 0.75,
            delta: 0.0,
        }
    }

    /// Checks that every parameter is finite and within range.
    ///
    /// # Errors
    ///
    /// Returns `ParamsError::NotFinite` for NaN or infinite values and
    /// `ParamsError::OutOfRange` when `k1 < 0`, `delta < 0`, or `b` is
    /// outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ParamsError> {
        for (name, value) in [("k1", self.k1), ("b", self.b), ("delta", self.delta)] {
            if !value.is_finite() {
                return Err(ParamsError::NotFinite { name, value });
            }
        }
        check_range("k1", self.k1, 0.0, f64::MAX)?;
        check_range("b", self.b, 0.0, 1.0)?;
        check_range("delta", self.delta, 0.0, f64::MAX)?;
        Ok(())
    }
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), ParamsError> {
    if value < min || value > max {
        return Err(ParamsError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_cmp_orders_by_score_then_id() {
        let high = ScoredDocument::new(0.9, Document::new(5, "a"));
        let low = ScoredDocument::new(0.5, Document::new(1, "b"));
        let tied = ScoredDocument::new(0.9, Document::new(2, "c"));

        assert_eq!(high.rank_cmp(&low), Ordering::Less);
        assert_eq!(low.rank_cmp(&high), Ordering::Greater);

        // Same score: lower id ranks first
        assert_eq!(tied.rank_cmp(&high), Ordering::Less);
        assert_eq!(high.rank_cmp(&high), Ordering::Equal);
    }

    #[test]
    fn sorting_with_rank_cmp() {
        let mut hits = vec![
            ScoredDocument::new(0.1, Document::new(3, "")),
            ScoredDocument::new(0.7, Document::new(9, "")),
            ScoredDocument::new(0.7, Document::new(4, "")),
            ScoredDocument::new(1.2, Document::new(1, "")),
        ];
        hits.sort_by(ScoredDocument::rank_cmp);
        let ids: Vec<DocId> = hits.iter().map(ScoredDocument::id).collect();
        assert_eq!(ids, vec![1, 4, 9, 3]);
    }

    #[test]
    fn document_equality_includes_text() {
        assert_eq!(Document::new(1, "x"), Document::new(1, "x"));
        assert_ne!(Document::new(1, "x"), Document::new(1, "y"));
    }

    #[test]
    fn pair_conversions() {
        let doc = Document::new(7, "seven");
        let hit = ScoredDocument::from((0.25, doc.clone()));
        assert_eq!(hit.id(), 7);
        assert_eq!(hit.into_pair(), (0.25, doc));
    }

    #[test]
    fn display_formats() {
        let hit = ScoredDocument::new(0.5, Document::new(2, "two"));
        assert_eq!(hit.to_string(), "doc=2 score=0.500000");
        assert_eq!(Document::new(2, "two").to_string(), "Document(2, \"two\")");
    }

    #[test]
    fn default_params_match_plus() {
        let p = Bm25Params::default();
        assert_eq!(p.k1, 1.6);
        assert_eq!(p.b, 0.3);
        assert_eq!(p.delta, 0.7);
        assert_eq!(p, Bm25Params::plus());
        assert!(p.validate().is_ok());
        assert!(Bm25Params::okapi().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let nan = Bm25Params {
            k1: f64::NAN,
            ..Bm25Params::default()
        };
        assert!(matches!(
            nan.validate(),
            Err(ParamsError::NotFinite { name: "k1", .. })
        ));

        let wide_b = Bm25Params {
            b: 1.5,
            ..Bm25Params::default()
        };
        assert!(matches!(
            wide_b.validate(),
            Err(ParamsError::OutOfRange { name: "b", .. })
        ));

        let negative_delta = Bm25Params {
            delta: -0.1,
            ..Bm25Params::default()
        };
        let err = negative_delta.validate().unwrap_err();
        assert!(err.to_string().contains("delta"));
    }
}
