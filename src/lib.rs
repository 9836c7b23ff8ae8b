//! HTTP content negotiation.
//!
//! Parses an `Accept`-style header into a preference-ordered [`AcceptList`],
//! picks the best match out of a server-offered candidate list with
//! [`find_best_type`], and renders the parsed list back to canonical header
//! text via `Display`.
//!
//! Only the `q=` quality parameter is interpreted; every other parameter is
//! ignored. An unparsable quality value silently marks its range
//! unacceptable (quality 0) instead of failing the parse, so negotiation
//! outcomes can differ from what a strict parser would produce — the parser
//! never errors.

pub mod accept;
pub mod mime_pattern;
pub mod negotiate;

pub use accept::{AcceptEntry, AcceptList};
pub use negotiate::find_best_type;
