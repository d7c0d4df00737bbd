//! Search configuration.

/// Environment variable that caps the number of expanded states.
pub const MAX_EXPANSIONS_VAR: &str = "FLEET_ROUTER_MAX_EXPANSIONS";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Stop with an aborted outcome after this many expansions. `None` searches until the
    /// frontier is empty.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    pub fn from_env() -> Self {
        Self::from_var(std::env::var(MAX_EXPANSIONS_VAR).ok().as_deref())
    }

    fn from_var(value: Option<&str>) -> Self {
        let max_expansions = value.and_then(|raw| match raw.trim().parse::<usize>() {
            Ok(max) => Some(max),
            Err(_) => {
                tracing::warn!(
                    value = raw,
                    "ignoring {} that is not a positive integer",
                    MAX_EXPANSIONS_VAR
                );
                None
            }
        });
        SearchConfig { max_expansions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        assert_eq!(None, SearchConfig::default().max_expansions);
        assert_eq!(SearchConfig::default(), SearchConfig::from_var(None));
    }

    #[test]
    fn test_budget_from_value() {
        assert_eq!(Some(5000), SearchConfig::from_var(Some(" 5000 ")).max_expansions);
        assert_eq!(None, SearchConfig::from_var(Some("lots")).max_expansions);
    }
}
