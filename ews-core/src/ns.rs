//! EWS XML namespaces and qualified names.

use std::fmt;

/// Namespace of the EWS types schema.
pub const TYPES_NS_URI: &str = "http://schemas.microsoft.com/exchange/services/2006/types";

/// Namespace of the EWS messages schema.
pub const MESSAGES_NS_URI: &str = "http://schemas.microsoft.com/exchange/services/2006/messages";

pub const TYPES_PREFIX: &str = "t";
pub const MESSAGES_PREFIX: &str = "m";

/// An XML name qualified by one of the EWS namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub namespace: &'static str,
    pub local_part: String,
}

impl QualifiedName {
    pub fn new(namespace: &'static str, local_part: impl Into<String>) -> Self {
        QualifiedName {
            namespace,
            local_part: local_part.into(),
        }
    }

    /// Conventional EWS prefix for the namespace (`t` or `m`).
    pub fn prefix(&self) -> Option<&'static str> {
        match self.namespace {
            TYPES_NS_URI => Some(TYPES_PREFIX),
            MESSAGES_NS_URI => Some(MESSAGES_PREFIX),
            _ => None,
        }
    }

    /// `prefix:local` as written in EWS documents, or just the local part
    /// for namespaces without a conventional prefix.
    pub fn prefixed(&self) -> String {
        match self.prefix() {
            Some(prefix) => format!("{}:{}", prefix, self.local_part),
            None => self.local_part.clone(),
        }
    }
}

/// Clark notation: `{namespace}local`.
impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}{}", self.namespace, self.local_part)
    }
}

/// Name in the EWS types namespace.
pub fn types_name(name: impl Into<String>) -> QualifiedName {
    QualifiedName::new(TYPES_NS_URI, name)
}

/// Name in the EWS messages namespace.
pub fn messages_name(name: impl Into<String>) -> QualifiedName {
    QualifiedName::new(MESSAGES_NS_URI, name)
}
