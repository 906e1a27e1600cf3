//! Typed model of an npms.io package report.
//!
//! Only the fields the summary reads are modelled; everything else in the
//! payload is ignored on load and kept verbatim in the saved wrapper.

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Full scoring payload for one package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// RFC 3339 timestamp of the analysis
    pub analyzed_at: String,
    pub collected: Collected,
    pub score: Score,
}

/// Raw signals collected for the package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collected {
    pub metadata: Metadata,
    pub npm: NpmSignals,
    /// Absent when the package has no linked repository
    #[serde(default)]
    pub github: Option<GithubSignals>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpmSignals {
    /// Download history, most recent period first
    pub downloads: Vec<DownloadPeriod>,
    pub dependents_count: u64,
    pub stars_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadPeriod {
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubSignals {
    pub forks_count: u64,
    pub stars_count: u64,
}

/// Score fractions, each in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "final")]
    pub final_score: f64,
    pub detail: ScoreDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetail {
    pub quality: f64,
    pub popularity: f64,
    pub maintenance: f64,
}

impl Report {
    /// Decode the `result` part of a fetched or saved report
    pub fn from_value(value: &Value) -> Result<Self> {
        Report::deserialize(value).context("Malformed package report")
    }

    pub fn name(&self) -> &str {
        &self.collected.metadata.name
    }

    /// Version the score was computed for
    pub fn rated_version(&self) -> &str {
        &self.collected.metadata.version
    }

    /// Download count of the prior period (the second history entry)
    pub fn weekly_downloads(&self) -> Result<u64> {
        self.collected
            .npm
            .downloads
            .get(1)
            .map(|d| d.count)
            .ok_or_else(|| anyhow!("Report for {} has no entry collected.npm.downloads[1]", self.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "analyzedAt": "2024-01-01T00:00:00Z",
            "collected": {
                "metadata": { "name": "foo", "version": "1.0.0", "description": "ignored" },
                "npm": {
                    "downloads": [
                        { "from": "2023-12-31", "to": "2024-01-01", "count": 100 },
                        { "from": "2023-12-25", "to": "2024-01-01", "count": 200 }
                    ],
                    "dependentsCount": 3,
                    "starsCount": 10
                }
            },
            "score": {
                "final": 0.62,
                "detail": { "quality": 0.7, "popularity": 0.5, "maintenance": 0.66 }
            }
        })
    }

    #[test]
    fn test_from_value_without_github() {
        let report = Report::from_value(&sample()).unwrap();
        assert_eq!(report.name(), "foo");
        assert_eq!(report.rated_version(), "1.0.0");
        assert!(report.collected.github.is_none());
        assert_eq!(report.score.final_score, 0.62);
        assert_eq!(report.weekly_downloads().unwrap(), 200);
    }

    #[test]
    fn test_from_value_with_github() {
        let mut value = sample();
        value["collected"]["github"] = json!({ "forksCount": 4, "starsCount": 40, "issues": {} });
        let report = Report::from_value(&value).unwrap();
        assert_eq!(report.collected.github, Some(GithubSignals { forks_count: 4, stars_count: 40 }));
    }

    #[test]
    fn test_from_value_missing_field_fails() {
        let mut value = sample();
        value["score"].as_object_mut().unwrap().remove("final");
        let err = Report::from_value(&value).unwrap_err();
        assert!(format!("{:#}", err).contains("final"));
    }

    #[test]
    fn test_weekly_downloads_requires_two_periods() {
        let mut value = sample();
        value["collected"]["npm"]["downloads"] = json!([{ "count": 100 }]);
        let report = Report::from_value(&value).unwrap();
        assert!(report.weekly_downloads().is_err());
    }
}
