use crate::error::HealthError;
use crate::recommend::RecommendSettings;
use crate::search::DEFAULT_DEBOUNCE;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

const MAX_DEBOUNCE_MS: u64 = 10_000;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    pub dataset: Option<DatasetConfig>,
    pub search: Option<SearchConfig>,
    pub filters: Option<FiltersConfig>,
    pub recommend: Option<RecommendConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub debounce_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FiltersConfig {
    pub activity_days: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendConfig {
    pub min_good_first_issues: Option<u32>,
    pub limit: Option<usize>,
    pub similar_limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    Md,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    pub format: Option<DisplayFormat>,
}

impl AppConfig {
    pub fn dataset_path(&self) -> Option<&PathBuf> {
        self.dataset.as_ref().and_then(|dataset| dataset.path.as_ref())
    }

    pub fn debounce(&self) -> Duration {
        self.search
            .as_ref()
            .and_then(|search| search.debounce_ms)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DEBOUNCE)
    }

    pub fn default_activity_days(&self) -> Option<u32> {
        self.filters.as_ref().and_then(|filters| filters.activity_days)
    }

    pub fn recommend_settings(&self) -> RecommendSettings {
        let defaults = RecommendSettings::default();
        match &self.recommend {
            Some(recommend) => RecommendSettings {
                min_good_first_issues: recommend
                    .min_good_first_issues
                    .unwrap_or(defaults.min_good_first_issues),
                limit: recommend.limit.unwrap_or(defaults.limit),
                similar_limit: recommend.similar_limit.unwrap_or(defaults.similar_limit),
            },
            None => defaults,
        }
    }

    pub fn display_format(&self) -> Option<DisplayFormat> {
        self.display.as_ref().and_then(|display| display.format)
    }

    pub fn validate(&self) -> Result<(), HealthError> {
        if let Some(debounce_ms) = self.search.as_ref().and_then(|search| search.debounce_ms) {
            if !(1..=MAX_DEBOUNCE_MS).contains(&debounce_ms) {
                return Err(HealthError::ConfigParse(format!(
                    "search.debounce_ms must be between 1 and {MAX_DEBOUNCE_MS} (found {debounce_ms})"
                )));
            }
        }

        if let Some(0) = self.default_activity_days() {
            return Err(HealthError::ConfigParse(
                "filters.activity_days must be greater than 0".to_string(),
            ));
        }

        if let Some(recommend) = &self.recommend {
            if recommend.limit == Some(0) {
                return Err(HealthError::ConfigParse(
                    "recommend.limit must be greater than 0".to_string(),
                ));
            }
            if recommend.similar_limit == Some(0) {
                return Err(HealthError::ConfigParse(
                    "recommend.similar_limit must be greater than 0".to_string(),
                ));
            }
        }

        if let Some(path) = self.dataset_path() {
            if path.as_os_str().is_empty() {
                return Err(HealthError::ConfigParse(
                    "dataset.path must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
