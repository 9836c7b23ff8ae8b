use anyhow::{bail, Result};
use log::debug;

use crate::accept::AcceptList;
use crate::mime_pattern;

/// Picks the best of `known_types` for the preferences in `accept`.
///
/// `known_types` is the server's own preference order and must be
/// non-empty. When the client expressed no preference at all (empty accept
/// list) the server's first-listed type wins. `Ok(None)` means no candidate
/// satisfies any declared preference; an HTTP caller would answer
/// 406 Not Acceptable.
pub fn find_best_type<'a>(accept: &AcceptList, known_types: &[&'a str]) -> Result<Option<&'a str>> {
    if known_types.is_empty() {
        bail!("no known types to negotiate against; callers must offer at least one");
    }

    if accept.is_empty() {
        return Ok(Some(known_types[0]));
    }

    // Preference-major scan: a lower-quality range never beats a
    // higher-quality one, but within one range the first known type that
    // matches wins, even if a later one also would.
    for entry in accept.entries() {
        for &candidate in known_types {
            if mime_pattern::range_matches(&entry.mime, candidate) {
                debug!("negotiated {candidate} for accepted range `{}`", entry.mime);
                return Ok(Some(candidate));
            }
        }
    }

    debug!("no known type matches any accepted range");
    Ok(None)
}
