//! Collaborator seams
//!
//! Traits implemented by the hosting application: status change listeners
//! (persistence) and the document renderer used by the PDF viewer.

pub mod document;
pub mod listener;
