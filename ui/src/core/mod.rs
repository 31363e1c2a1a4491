//! Pure, renderer-agnostic logic: survey schema, answer tracking, the
//! submission state machine, dashboard seed data and formatting helpers.

pub mod error;
pub mod format;
pub mod form;
pub mod platform;
pub mod progress;
pub mod responses;
pub mod schema;
pub mod seed;
pub mod status;
pub mod timing;
