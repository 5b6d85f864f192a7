use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::util;

/// Proficiency tier used to filter displayed skills.
/// Declaration order is the display priority order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Expert,
    Proficient,
    Familiar,
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillLevel::Expert => write!(f, "expert"),
            SkillLevel::Proficient => write!(f, "proficient"),
            SkillLevel::Familiar => write!(f, "familiar"),
        }
    }
}

/// All skill levels in display priority order.
pub const ALL_LEVELS: [SkillLevel; 3] = [
    SkillLevel::Expert,
    SkillLevel::Proficient,
    SkillLevel::Familiar,
];

/// Identity block: name, headline variants, contact channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    /// Legacy key, consulted only when headline_variants is empty
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub title_variants: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headline_variants: BTreeMap<String, String>,
    pub contacts: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub availability: BTreeMap<String, serde_json::Value>,
}

impl PersonalInfo {
    /// The effective headline variant map (falls through to the legacy key).
    pub fn variants(&self) -> &BTreeMap<String, String> {
        if self.headline_variants.is_empty() {
            &self.title_variants
        } else {
            &self.headline_variants
        }
    }
}

/// One skill category with its skills grouped by proficiency level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub levels: BTreeMap<SkillLevel, Vec<String>>,
}

impl SkillCategory {
    /// Concatenate skills for the requested levels, in the requested order.
    /// Levels the category does not define contribute nothing.
    pub fn collect(&self, levels: &[SkillLevel]) -> Vec<String> {
        levels
            .iter()
            .filter_map(|level| self.levels.get(level))
            .flatten()
            .cloned()
            .collect()
    }
}

/// One job/role record with tags used for filtering and ranking.
/// Created once from static data; filtering clones into new sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceBlock {
    pub id: String,
    pub title: String,
    pub company: String,
    /// Free-text date range, e.g. "2022 – Present"
    pub period: String,
    pub tags: Vec<String>,
    pub responsibilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub achievements: Vec<String>,
    /// Template tokens this block must not appear under
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hidden_for: Vec<String>,
}

impl ExperienceBlock {
    /// Whether this block describes an ongoing role.
    pub fn is_current(&self) -> bool {
        let period = self.period.to_lowercase();
        period.contains("present")
            || period.contains("current")
            || self.tags.iter().any(|t| t == "current")
    }

    /// First 19xx/20xx year found in the period text, if any.
    pub fn start_year(&self) -> Option<i32> {
        util::first_year(&self.period)
    }
}

/// The fully parsed set of personal info, summaries, skills and experience.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlocksBundle {
    pub personal_info: PersonalInfo,
    pub summaries: BTreeMap<String, String>,
    pub skills: BTreeMap<String, SkillCategory>,
    pub experience: Vec<ExperienceBlock>,
}

/// Tag-based selection rules for experience blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterRules {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub priority_tags: Vec<String>,
    /// Drop blocks whose start year is more than this many years back
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_years: Option<i32>,
}

impl FilterRules {
    /// True when no rule is configured at all.
    pub fn is_empty(&self) -> bool {
        self.include_tags.is_empty()
            && self.exclude_tags.is_empty()
            && self.priority_tags.is_empty()
            && self.limit_years.is_none()
    }
}

fn default_highlight() -> bool {
    true
}

/// Free-form template options with typed consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_experience_blocks: Option<usize>,
    #[serde(default = "default_highlight")]
    pub highlight_achievements: bool,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            max_experience_blocks: None,
            highlight_achievements: true,
        }
    }
}

/// Output overrides for a template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Declarative selection rules for one named resume template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Template key (also the config file stem)
    pub template: String,
    /// Display name
    pub name: String,
    pub headline_variant: String,
    pub summary_key: String,
    pub skill_categories: Vec<String>,
    /// Empty means all levels in priority order
    #[serde(default)]
    pub skill_levels: Vec<SkillLevel>,
    #[serde(default)]
    pub filters: FilterRules,
    #[serde(default)]
    pub options: TemplateOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputConfig>,
}

/// Template identity carried into the composed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeMeta {
    pub template: String,
    pub name: String,
    pub options: TemplateOptions,
}

/// Personal info with the headline variant resolved to a concrete string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedPersonal {
    pub name: String,
    pub headline: String,
    pub contacts: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub availability: BTreeMap<String, serde_json::Value>,
}

/// One rendered skill section: category label plus sorted skill names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSection {
    pub category: String,
    pub skills: Vec<String>,
}

/// The resolved, render-ready document produced by binding one template
/// to one bundle. Ephemeral: owned by a single composition call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposedResume {
    pub meta: ResumeMeta,
    pub personal: ResolvedPersonal,
    pub summary: String,
    pub skills: Vec<SkillSection>,
    pub experience: Vec<ExperienceBlock>,
}

/// Runtime configuration: where the data blocks and templates live.
#[derive(Debug, Clone)]
pub struct ForgeConfig {
    pub configs_dir: PathBuf,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            configs_dir: PathBuf::from("configs"),
        }
    }
}

impl ForgeConfig {
    pub fn blocks_path(&self) -> PathBuf {
        self.configs_dir.join("blocks.json")
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.configs_dir.join("templates")
    }
}
