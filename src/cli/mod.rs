//! CLI infrastructure for training, evaluating, and playing against the
//! learned policy.

pub mod commands;
