//! Data module for fxml-check
//!
//! Contains the built-in target set and the tables the heuristics match against.

pub mod targets;
