mod classifier;

pub use classifier::OperatorClassifier;
