//! Use cases - the operations the application exposes.

pub mod agents;
pub mod orchestrate;
pub mod run_dialogue;
pub(crate) mod shared;

#[cfg(test)]
pub(crate) mod test_support;
