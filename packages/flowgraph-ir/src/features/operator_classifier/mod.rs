// Operator Classifier
//
// Decides which method calls are dataflow stages and what kind of stage each
// one is. Backed entirely by an `OperatorConfig` value handed in at
// construction; there is no shared instance.
//
// ## Architecture
// - Domain: ordered node-type category patterns
// - Infrastructure: `OperatorClassifier` (name sets + type-string checks)

pub mod domain;
pub mod infrastructure;

pub use domain::{default_category_patterns, CategoryPattern};
pub use infrastructure::OperatorClassifier;
