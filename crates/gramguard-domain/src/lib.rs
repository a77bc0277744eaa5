//! Pure grammar-subset evaluation (no IO).
//!
//! Input: a type-resolved syntax tree constructed elsewhere, and a validated policy.
//! Output: violations in traversal order, each borrowing its node and enclosing context.

#![forbid(unsafe_code)]

pub mod checks;
pub mod error;
pub mod fingerprint;
pub mod model;
pub mod policy;
pub mod violation;

mod engine;

#[cfg(test)]
mod test_support;

pub use engine::check;
pub use error::CheckError;
pub use fingerprint::fingerprint_for_violation;
pub use model::{SyntaxNode, TranslationUnit};
pub use policy::Policy;
pub use violation::Violation;
