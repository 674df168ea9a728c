//! Resource operations, grouped by API area.
//!
//! Each module adds an `impl<T: Transport> Client<T>` block. An operation
//! checks its required arguments, builds the path (identifiers escaped as
//! path segments, options rendered as the query string), calls
//! `Client::execute` through the JSON helpers and returns the decoded DTO.

mod articles;
mod channels;
mod contacts;
mod conversations;
mod incidents;
mod messages;
mod notes;
mod reports;
mod response_templates;
mod staff;
mod systems;

pub(crate) const API_ROOT: &str = "/api/v1";
