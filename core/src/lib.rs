//! Synchronous client for the Re:amaze customer-support REST API.
//!
//! # Overview
//! `Client` authenticates against one brand (`https://{brand}.reamaze.io`)
//! and exposes one blocking method per API operation: conversations,
//! messages, contacts and their identities and notes, articles, channels,
//! staff, incidents, systems, response templates and reports.
//!
//! # Design
//! - Every operation goes through `Client::execute`, the single place that
//!   builds URLs, attaches headers and classifies statuses.
//! - The network round-trip sits behind the `Transport` trait. The default
//!   `UreqTransport` uses a blocking `ureq` agent; tests plug in their own.
//! - List endpoints take a slice of typed options (`ConversationOption`,
//!   `ArticleOption`, ...) that render into a query string in a fixed order.
//! - Required arguments are checked locally, so a `Validation` error means
//!   nothing was sent.
//!
//! ```no_run
//! use reamaze_core::{Client, ConversationOption, Filter};
//!
//! let client = Client::new("me@example.com", "api-token", "mybrand")?;
//! let open = client.get_conversations(&[ConversationOption::filter(Filter::Open)])?;
//! println!("{} open conversations", open.conversations.len());
//! # Ok::<(), reamaze_core::ApiError>(())
//! ```

pub mod client;
pub mod email;
pub mod error;
pub mod http;
pub mod options;
pub mod query;
mod resources;
pub mod transport;
pub mod types;

#[cfg(test)]
mod stub;

pub use client::{Client, PLATFORM_DOMAIN};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use options::{
    ArticleOption, ContactOption, ConversationOption, Filter, ReportOption, ResponseTemplateOption,
    Sort, StaffOption,
};
pub use query::{compose, QueryOption, QueryRecord};
pub use transport::{Transport, UreqTransport};
