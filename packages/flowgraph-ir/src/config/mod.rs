//! Configuration
//!
//! ```rust,ignore
//! use flowgraph_ir::config::{OperatorConfig, PipelineConfig};
//!
//! // Built-in defaults
//! let config = PipelineConfig::default();
//!
//! // Programmatic overrides
//! let config = PipelineConfig::default()
//!     .operators(OperatorConfig::default().with_networking_operator("send_custom"))
//!     .cache_capacity(200)
//!     .build()?;
//!
//! // Versioned YAML
//! let config = PipelineConfig::from_yaml("flowgraph.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod operator_config;
pub mod pipeline_config;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigFileV1, CONFIG_SCHEMA_VERSION};
pub use operator_config::{
    OperatorConfig, DEFAULT_COLLECTION_TYPES, DEFAULT_CORE_DATAFLOW_OPERATORS,
    DEFAULT_NETWORKING_OPERATORS, DEFAULT_SINK_OPERATORS,
};
pub use pipeline_config::{CacheConfig, GraphConfig, PipelineConfig};
pub use validation::{Validatable, ValidatableCollection};
