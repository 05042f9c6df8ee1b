use crate::adapters::format::OutputFormat;
use crate::core::brand_family::DEFAULT_BRAND_ORDER;
use crate::core::engine::RankingTables;
use crate::core::priority::PriorityList;
use crate::core::repair_rules::{TitleMatcher, TitleRule, TitleRuleSet, DEFAULT_REPAIR_TITLE_ORDER};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;

lazy_static! {
    static ref ENV_VAR: Regex = Regex::new(r"\$\{([^}]+)\}").unwrap();
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingConfig {
    #[serde(default)]
    pub ranking: RankingSection,
    pub source: Option<SourceConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingSection {
    pub brand_order: Option<Vec<String>>,
    pub repair_title_order: Option<Vec<String>>,
    /// Keep the built-in title cascade after the custom rules (default true).
    pub builtin_rules: Option<bool>,
    #[serde(default)]
    pub repair_rules: Vec<RuleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub slot: String,
    pub all_of: Option<Vec<String>>,
    pub any_of: Option<Vec<String>>,
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub name_field: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl RuleConfig {
    fn to_rule(&self, idx: usize) -> Result<TitleRule> {
        let field = format!("ranking.repair_rules[{}]", idx);
        validation::validate_non_empty_string(&format!("{}.slot", field), &self.slot)?;

        let matcher = match (&self.all_of, &self.any_of, &self.pattern) {
            (Some(needles), None, None) if !needles.is_empty() => {
                TitleMatcher::AllOf(needles.iter().map(|n| n.to_lowercase()).collect())
            }
            (None, Some(needles), None) if !needles.is_empty() => {
                TitleMatcher::AnyOf(needles.iter().map(|n| n.to_lowercase()).collect())
            }
            (None, None, Some(pattern)) => {
                let re = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| CatalogError::InvalidConfigValueError {
                        field: format!("{}.pattern", field),
                        value: pattern.clone(),
                        reason: e.to_string(),
                    })?;
                TitleMatcher::Pattern(re)
            }
            _ => {
                return Err(CatalogError::ConfigValidationError {
                    field,
                    message: "exactly one non-empty matcher of all_of, any_of or pattern is required"
                        .to_string(),
                })
            }
        };
        Ok(TitleRule::new(matcher, self.slot.clone()))
    }
}

impl RankingConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${WP_BASE_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(order) = &self.ranking.brand_order {
            validation::validate_priority_entries("ranking.brand_order", order)?;
        }
        if let Some(order) = &self.ranking.repair_title_order {
            validation::validate_priority_entries("ranking.repair_title_order", order)?;
        }
        for (idx, rule) in self.ranking.repair_rules.iter().enumerate() {
            rule.to_rule(idx)?;
        }

        if let Some(source) = &self.source {
            if let Some(endpoint) = &source.endpoint {
                validation::validate_url("source.endpoint", endpoint)?;
            }
            if let Some(timeout) = source.timeout_seconds {
                validation::validate_range("source.timeout_seconds", timeout, 1, 300)?;
            }
            if let Some(name_field) = &source.name_field {
                validation::validate_non_empty_string("source.name_field", name_field)?;
            }
        }
        Ok(())
    }

    /// Builds the engine tables, falling back to the built-in lists.
    pub fn to_tables(&self) -> Result<RankingTables> {
        let brand_order = match &self.ranking.brand_order {
            Some(order) => PriorityList::new(order.iter().cloned()),
            None => PriorityList::new(DEFAULT_BRAND_ORDER),
        };
        let repair_title_order = match &self.ranking.repair_title_order {
            Some(order) => PriorityList::new(order.iter().cloned()),
            None => PriorityList::new(DEFAULT_REPAIR_TITLE_ORDER),
        };

        let custom = self
            .ranking
            .repair_rules
            .iter()
            .enumerate()
            .map(|(idx, rule)| rule.to_rule(idx))
            .collect::<Result<Vec<_>>>()?;
        let mut repair_rules = TitleRuleSet::new(custom);
        if self.ranking.builtin_rules.unwrap_or(true) {
            repair_rules = repair_rules.chain(TitleRuleSet::builtin());
        }

        tracing::debug!(
            "Ranking tables: {} brands, {} repair slots, {} title rules",
            brand_order.len(),
            repair_title_order.len(),
            repair_rules.len()
        );

        Ok(RankingTables {
            brand_order,
            repair_title_order,
            repair_rules,
        })
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.endpoint.as_deref())
    }

    pub fn timeout_seconds(&self) -> Option<u64> {
        self.source.as_ref().and_then(|s| s.timeout_seconds)
    }

    pub fn name_field(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.name_field.as_deref())
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }
}

impl Validate for RankingConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
