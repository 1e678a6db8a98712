//! Bus route direct-connection server.
//!
//! A web application that answers: "is there a bus route on which
//! station A directly precedes station B?"

pub mod domain;
pub mod index;
pub mod loader;
pub mod web;
