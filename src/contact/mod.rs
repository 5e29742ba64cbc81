//! Contact-support domain: the form record, its store, and the submission
//! path to the backend.

pub mod client;
pub mod error;
pub mod form;
pub mod store;
pub mod submit;
