//! Method identifiers

use breaks_classify::ClassStyle;
use breaks_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How breaks are computed
///
/// The first four variants are delegated to a
/// [`ClassificationProvider`](breaks_classify::ClassificationProvider); the
/// rest are computed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Standard deviation intervals (delegated)
    #[serde(rename = "sd")]
    Sd,
    /// Equal intervals (delegated)
    #[serde(rename = "equal")]
    Equal,
    /// Quantile intervals (delegated)
    #[serde(rename = "quantile")]
    Quantile,
    /// Fisher-Jenks natural breaks (delegated)
    #[serde(rename = "fisher-jenks")]
    FisherJenks,
    /// Seven fixed-probability quantiles
    #[serde(rename = "q6")]
    Q6,
    /// Geometric progression
    #[serde(rename = "geom")]
    Geom,
    /// Arithmetic progression
    #[serde(rename = "arith")]
    Arith,
    /// Nested means
    #[serde(rename = "em")]
    Em,
    /// Mean and standard deviation bands
    #[serde(rename = "msd")]
    Msd,
}

impl Method {
    /// Every method, in declaration order
    pub const ALL: [Method; 9] = [
        Self::Sd,
        Self::Equal,
        Self::Quantile,
        Self::FisherJenks,
        Self::Q6,
        Self::Geom,
        Self::Arith,
        Self::Em,
        Self::Msd,
    ];

    /// Textual identifier
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sd => "sd",
            Self::Equal => "equal",
            Self::Quantile => "quantile",
            Self::FisherJenks => "fisher-jenks",
            Self::Q6 => "q6",
            Self::Geom => "geom",
            Self::Arith => "arith",
            Self::Em => "em",
            Self::Msd => "msd",
        }
    }

    /// Provider style for delegated methods, `None` for built-in ones
    pub fn style(&self) -> Option<ClassStyle> {
        match self {
            Self::Sd => Some(ClassStyle::Sd),
            Self::Equal => Some(ClassStyle::Equal),
            Self::Quantile => Some(ClassStyle::Quantile),
            Self::FisherJenks => Some(ClassStyle::Fisher),
            Self::Q6 | Self::Geom | Self::Arith | Self::Em | Self::Msd => None,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| Error::InvalidMethod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for method in Method::ALL {
            assert_eq!(method.name().parse::<Method>().unwrap(), method);
            assert_eq!(method.to_string(), method.name());
        }
    }

    #[test]
    fn test_unknown_method() {
        match "jenks".parse::<Method>() {
            Err(Error::InvalidMethod(name)) => assert_eq!(name, "jenks"),
            other => panic!("unexpected {other:?}"),
        }
        assert!("Quantile".parse::<Method>().is_err());
        assert!("".parse::<Method>().is_err());
    }

    #[test]
    fn test_fisher_jenks_maps_to_fisher_style() {
        assert_eq!(Method::FisherJenks.style(), Some(ClassStyle::Fisher));
        assert_eq!(Method::FisherJenks.style().map(|s| s.name()), Some("fisher"));
    }

    #[test]
    fn test_delegation_split() {
        let delegated: Vec<Method> =
            Method::ALL.into_iter().filter(|m| m.style().is_some()).collect();
        assert_eq!(
            delegated,
            vec![Method::Sd, Method::Equal, Method::Quantile, Method::FisherJenks]
        );
    }

    #[test]
    fn test_serde_uses_identifiers() {
        assert_eq!(serde_json::to_string(&Method::FisherJenks).unwrap(), "\"fisher-jenks\"");
        let parsed: Method = serde_json::from_str("\"q6\"").unwrap();
        assert_eq!(parsed, Method::Q6);
    }
}
