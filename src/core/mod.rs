//! Classification and sessionization engine.

pub mod calculator;
pub mod classifier;
pub mod domain;
pub mod logic;
pub mod rules;
pub mod search;
pub mod stats;

pub use classifier::{Classification, Stage, classify, explain};
pub use logic::Core;
pub use rules::RuleSet;
