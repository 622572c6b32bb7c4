//! Cache key types

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much of a document an analysis covered
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisScope {
    /// The function under the cursor
    Function,
    /// The active file
    File,
    /// Everything reachable from the document
    Workspace,
}

impl AnalysisScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisScope::Function => "function",
            AnalysisScope::File => "file",
            AnalysisScope::Workspace => "workspace",
        }
    }

    /// Narrow scopes depend on which file is active
    pub fn includes_active_file(&self) -> bool {
        matches!(self, AnalysisScope::Function | AnalysisScope::File)
    }
}

impl fmt::Display for AnalysisScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of one cached analysis: document, version, scope and, for the
/// narrower scopes, the active file.
///
/// Rendered as `uri@version#scope[:file]`.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CacheKey {
    document_uri: String,
    version: i64,
    scope: AnalysisScope,
    active_file: Option<String>,
}

impl CacheKey {
    /// `active_file` is dropped for scopes that do not depend on it, so two
    /// workspace analyses of the same document version share one entry.
    pub fn new(
        document_uri: impl Into<String>,
        version: i64,
        scope: AnalysisScope,
        active_file: Option<&str>,
    ) -> Self {
        Self {
            document_uri: document_uri.into(),
            version,
            scope,
            active_file: if scope.includes_active_file() {
                active_file.map(str::to_string)
            } else {
                None
            },
        }
    }

    pub fn document_uri(&self) -> &str {
        &self.document_uri
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    pub fn scope(&self) -> AnalysisScope {
        self.scope
    }

    pub fn active_file(&self) -> Option<&str> {
        self.active_file.as_deref()
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}#{}", self.document_uri, self.version, self.scope)?;
        if let Some(file) = &self.active_file {
            write!(f, ":{}", file)?;
        }
        Ok(())
    }
}

/// Snapshot of cache counters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub entries: usize,
    pub capacity: usize,
    pub hit_rate: f64,
}
