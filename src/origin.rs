use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 50_000;
const SUBDOMAIN_PREFIX: &str = "*.";

/// Origins that receive CORS approval headers.
#[derive(Clone, Debug, Default)]
pub enum AllowedOrigins {
    /// Every origin is allowed. The literal request origin is still echoed.
    #[default]
    Any,
    /// Ordered allow-list; the first matching pattern wins.
    List(Vec<OriginPattern>),
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginPattern>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, origin: &str) -> bool {
        match self {
            AllowedOrigins::Any => true,
            AllowedOrigins::List(patterns) => {
                patterns.iter().any(|pattern| pattern.matches(origin))
            }
        }
    }
}

/// A single entry of an origin allow-list.
#[derive(Clone)]
pub enum OriginPattern {
    /// Byte-for-byte equality with the configured string.
    Exact(String),
    /// Built from `*.suffix`: matches `suffix` itself and any `*.suffix` host.
    Subdomain { suffix: String },
    /// Explicitly compiled regular expression.
    Pattern(Regex),
}

impl OriginPattern {
    /// Interprets `*.suffix` as a subdomain wildcard and anything else as an
    /// exact origin.
    pub fn parse(value: &str) -> Self {
        match value.strip_prefix(SUBDOMAIN_PREFIX) {
            Some(suffix) => Self::Subdomain {
                suffix: suffix.to_string(),
            },
            None => Self::Exact(value.to_string()),
        }
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn subdomain<S: Into<String>>(suffix: S) -> Self {
        Self::Subdomain {
            suffix: suffix.into(),
        }
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        Self::compile_pattern(pattern, PATTERN_COMPILE_BUDGET).map(Self::Pattern)
    }

    fn compile_pattern(pattern: &str, budget: Duration) -> Result<Regex, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let started = Instant::now();
        let regex = Regex::new(pattern).map_err(|err| PatternError::Build(Box::new(err)))?;
        let elapsed = started.elapsed();
        if elapsed > budget {
            return Err(PatternError::Timeout { elapsed, budget });
        }

        Ok(regex)
    }

    #[cfg(test)]
    pub(crate) fn pattern_str_with_budget(
        pattern: &str,
        budget: Duration,
    ) -> Result<Self, PatternError> {
        Self::compile_pattern(pattern, budget).map(Self::Pattern)
    }

    pub fn matches(&self, origin: &str) -> bool {
        match self {
            OriginPattern::Exact(value) => value == origin,
            OriginPattern::Subdomain { suffix } => matches_subdomain(suffix, origin),
            OriginPattern::Pattern(regex) => regex.is_match(origin.as_bytes()),
        }
    }
}

// `origin` must be the apex itself or end in ".{suffix}", so that
// "*.domain.com" never matches "otherdomain.com".
fn matches_subdomain(suffix: &str, origin: &str) -> bool {
    if origin == suffix {
        return true;
    }

    origin
        .strip_suffix(suffix)
        .is_some_and(|head| head.ends_with('.'))
}

impl fmt::Debug for OriginPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OriginPattern::Exact(value) => f.debug_tuple("Exact").field(value).finish(),
            OriginPattern::Subdomain { suffix } => f
                .debug_struct("Subdomain")
                .field("suffix", suffix)
                .finish(),
            OriginPattern::Pattern(_) => f.write_str("Pattern(..)"),
        }
    }
}

impl From<String> for OriginPattern {
    fn from(value: String) -> Self {
        OriginPattern::parse(&value)
    }
}

impl From<&str> for OriginPattern {
    fn from(value: &str) -> Self {
        OriginPattern::parse(value)
    }
}

impl From<Regex> for OriginPattern {
    fn from(value: Regex) -> Self {
        OriginPattern::Pattern(value)
    }
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
    #[error("compiling origin pattern exceeded the configured budget")]
    Timeout { elapsed: Duration, budget: Duration },
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
