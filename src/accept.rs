use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One media range from an `Accept` header, e.g. `text/html` or `image/*`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptEntry {
    /// Lowercased media-type string, exactly as it appeared in its token.
    pub mime: String,
    /// Zero-based index of the token in the original comma-separated list.
    /// Fixed at parse time; breaks ties between equal-quality entries.
    pub position: usize,
    /// Client preference weight in `[0, 1]`. Defaults to 1.0 when no `q=`
    /// parameter is present.
    pub quality: f32,
}

/// A parsed `Accept` header, sorted by descending quality with the original
/// declaration order as tie-break.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcceptList {
    entries: Vec<AcceptEntry>,
}

impl AcceptList {
    /// Parses a raw `Accept` header value. Never fails: an empty header
    /// yields an empty list, and malformed tokens degrade (see `quality`)
    /// instead of erroring.
    pub fn parse(header: &str) -> Self {
        let header = header.trim().to_lowercase();
        if header.is_empty() {
            return Self::default();
        }

        let mut entries = header
            .split(',')
            .enumerate()
            .map(|(position, token)| {
                // Text before the first `;` is the media range, kept
                // literally. Tokens are not trimmed individually, so a
                // space after the comma stays part of the range.
                let mut segments = token.split(';');
                let mime = segments.next().unwrap_or_default().to_string();

                // The first segment carrying a literal `q=` prefix decides
                // the quality; ` q=...` (note the space) is just an ignored
                // tag. An unparsable value marks the range unacceptable
                // (quality 0) rather than failing the parse.
                let quality = segments
                    .find_map(|segment| segment.strip_prefix("q="))
                    .map_or(1.0, |q| q.parse().unwrap_or(0.0));

                AcceptEntry {
                    mime,
                    position,
                    quality,
                }
            })
            .collect::<Vec<_>>();

        sort_by_preference(&mut entries);
        Self { entries }
    }

    /// Entries in preference order (highest quality first).
    pub fn entries(&self) -> &[AcceptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Descending quality, declaration order on ties. `total_cmp` keeps the
/// order deterministic even when a header smuggles in `q=NaN`.
fn sort_by_preference(entries: &mut [AcceptEntry]) {
    entries.sort_by(|a, b| {
        b.quality
            .total_cmp(&a.quality)
            .then(a.position.cmp(&b.position))
    });
}

impl fmt::Display for AcceptList {
    /// Canonical rendering: comma-joined with no spaces, `;q=X.X` (one
    /// decimal digit) only for entries whose quality is not exactly 1.0.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.entries.iter().format_with(",", |entry, f| {
                if entry.quality == 1.0 {
                    f(&entry.mime)
                } else {
                    f(&format_args!("{};q={:.1}", entry.mime, entry.quality))
                }
            })
        )
    }
}
