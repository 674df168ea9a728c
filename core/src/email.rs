//! Syntactic email address check.
//!
//! Accepts a bare `local@domain` address or one wrapped in angle brackets
//! with an optional display name (`Jane Doe <jane@example.com>`). Parsing is
//! delegated to `lettre`'s mailbox parser; no DNS or deliverability checks
//! are made.

use lettre::message::Mailbox;

/// Returns true if `input` parses as a single mailbox.
pub fn is_valid(input: &str) -> bool {
    let input = input.trim();
    !input.is_empty() && input.parse::<Mailbox>().is_ok()
}
