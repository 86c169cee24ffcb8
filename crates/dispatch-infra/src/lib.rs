//! Infrastructure layer
//!
//! Concrete status stores, the HTML map renderer and file exports.

pub mod dispatch_csv;
pub mod map_html;
pub mod persistence;
