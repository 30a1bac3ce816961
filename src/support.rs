//! Supporting utilities shared across models.
//!
//! These APIs are public because they're useful, but they are not stable.

pub mod constraint;
