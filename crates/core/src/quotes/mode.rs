use std::fmt;
use std::str::FromStr;

/// How a refresh reacts to upstream failures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefreshMode {
    /// All-or-nothing: any per-symbol failure or rate limit fails the refresh
    /// and leaves the cache untouched. Concurrent callers wait for the
    /// in-flight refresh.
    Strict,
    /// Never fails: symbols that cannot be fetched keep synthetic quotes.
    /// Concurrent callers get the cached (or synthetic) set immediately.
    #[default]
    Resilient,
}

impl RefreshMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefreshMode::Strict => "strict",
            RefreshMode::Resilient => "resilient",
        }
    }
}

impl fmt::Display for RefreshMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RefreshMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(RefreshMode::Strict),
            "resilient" => Ok(RefreshMode::Resilient),
            other => Err(format!(
                "unknown refresh mode '{}', expected 'strict' or 'resilient'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_refresh_mode() {
        assert_eq!("strict".parse::<RefreshMode>(), Ok(RefreshMode::Strict));
        assert_eq!(" Resilient ".parse::<RefreshMode>(), Ok(RefreshMode::Resilient));
        assert!("lenient".parse::<RefreshMode>().is_err());
    }

    #[test]
    fn test_default_is_resilient() {
        assert_eq!(RefreshMode::default(), RefreshMode::Resilient);
        assert_eq!(RefreshMode::default().to_string(), "resilient");
    }
}
