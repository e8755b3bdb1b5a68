//! sqlcoach - backend for an interactive SQL-learning platform
//!
//! Three stateless logic components — the schema validator, the SQL error
//! classifier, and the query gateway policy — plus the HTTP surface and
//! curriculum content store that wire them to the frontend.

pub mod classifier;
pub mod cli;
pub mod content;
pub mod gateway;
pub mod http_server;
pub mod schema;
