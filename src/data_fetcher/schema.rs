//! Category-to-field schema tables
//!
//! The upstream statistics API has renamed its fields across revisions, so
//! the mapping from abstract category names (`points`, `gaa`) to JSON field
//! names is data, not code: one table per revision and role, replaceable
//! wholesale from an external TOML file. Each table entry also declares how
//! the category ranks (direction) and how its values are presented
//! (display name, icon, unit, precision), so nothing downstream needs a
//! per-category special case.

use crate::constants::display::DEFAULT_ICON;
use crate::constants::leaderboard::GOALIE_CATEGORY_PREFIX;
use crate::error::AppError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tokio::fs;

/// Player role a category table applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Skater,
    Goaltender,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Skater => "skater",
            Role::Goaltender => "goaltender",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a bigger or smaller value ranks first in a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    HighestFirst,
    LowestFirst,
}

/// Upstream field-naming revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    /// Legacy feed with abbreviated stat keys (`pts`, `gp`, `svpct`)
    V1,
    /// snake_case era (`time_on_ice`, `save_percentage`)
    V2,
    /// Current camelCase fields (`timeOnIce`, `savePercentage`)
    #[default]
    V3,
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
            ApiVersion::V3 => "v3",
        };
        f.write_str(s)
    }
}

/// Everything the pipeline needs to know about one category: where its
/// value lives upstream, how it ranks, and how it is presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpec {
    /// Upstream JSON field holding the value
    pub field: String,
    /// Human-readable category name, e.g. "Penalty Minutes"
    #[serde(default)]
    pub display_name: String,
    /// Icon hint for dashboards
    #[serde(default = "default_icon")]
    pub icon: String,
    /// Suffix appended to formatted values, e.g. "%" or " min"
    #[serde(default)]
    pub unit: String,
    /// Decimal places in formatted values
    #[serde(default)]
    pub precision: u8,
    /// Ranking direction; goals-against-average is the lone built-in
    /// category where lower is better
    #[serde(default)]
    pub direction: SortDirection,
    /// True for categories that apply to skaters and goaltenders alike
    /// (games played, time-on-ice aggregates)
    #[serde(default)]
    pub role_agnostic: bool,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

/// Display and ranking metadata per root category. Field names change
/// across revisions, the metadata does not.
struct CategoryInfo {
    display_name: &'static str,
    icon: &'static str,
    unit: &'static str,
    precision: u8,
    direction: SortDirection,
    role_agnostic: bool,
}

impl CategoryInfo {
    const fn new(
        display_name: &'static str,
        icon: &'static str,
        unit: &'static str,
        precision: u8,
    ) -> Self {
        CategoryInfo {
            display_name,
            icon,
            unit,
            precision,
            direction: SortDirection::HighestFirst,
            role_agnostic: false,
        }
    }

    const fn lowest_first(mut self) -> Self {
        self.direction = SortDirection::LowestFirst;
        self
    }

    const fn across_roles(mut self) -> Self {
        self.role_agnostic = true;
        self
    }
}

static SKATER_INFO: &[(&str, CategoryInfo)] = &[
    ("points", CategoryInfo::new("Points", "mdi:scoreboard", "", 0)),
    ("goals", CategoryInfo::new("Goals", "mdi:hockey-puck", "", 0)),
    ("assists", CategoryInfo::new("Assists", "mdi:account-group", "", 0)),
    ("plusminus", CategoryInfo::new("Plus/Minus", "mdi:plus-minus-variant", "", 0)),
    ("penalties", CategoryInfo::new("Penalty Minutes", "mdi:clock-outline", " PIM", 0)),
    ("games", CategoryInfo::new("Games Played", "mdi:calendar-check", "", 0).across_roles()),
    ("toi", CategoryInfo::new("Time on Ice", "mdi:timer-outline", " min", 0).across_roles()),
    ("toiavg", CategoryInfo::new("Avg Time on Ice", "mdi:timer-outline", " min", 1).across_roles()),
    ("shots", CategoryInfo::new("Shots", "mdi:bullseye-arrow", "", 0)),
    ("shotpct", CategoryInfo::new("Shot Percentage", "mdi:target", "%", 1)),
    ("faceoffs", CategoryInfo::new("Faceoff Win %", "mdi:percent", "%", 1)),
    ("xg", CategoryInfo::new("Expected Goals", "mdi:chart-bell-curve", "", 1)),
    ("xge", CategoryInfo::new("Expected Goals Effect", "mdi:chart-line", "", 1)),
    ("ppg", CategoryInfo::new("Power Play Goals", "mdi:flash", "", 0)),
    ("shg", CategoryInfo::new("Short-handed Goals", "mdi:shield", "", 0)),
    ("gwg", CategoryInfo::new("Game-Winning Goals", "mdi:trophy", "", 0)),
];

static GOALIE_INFO: &[(&str, CategoryInfo)] = &[
    ("wins", CategoryInfo::new("Wins", "mdi:trophy-outline", "", 0)),
    ("losses", CategoryInfo::new("Losses", "mdi:close-circle-outline", "", 0)),
    ("saves", CategoryInfo::new("Saves", "mdi:shield-check", "", 0)),
    ("savepct", CategoryInfo::new("Save Percentage", "mdi:percent", "%", 1)),
    ("gaa", CategoryInfo::new("Goals Against Average", "mdi:shield-half-full", "", 2).lowest_first()),
    ("shutouts", CategoryInfo::new("Shutouts", "mdi:shield-lock", "", 0)),
    ("games", CategoryInfo::new("Games Played", "mdi:calendar-check", "", 0).across_roles()),
    ("toi", CategoryInfo::new("Time on Ice", "mdi:timer-outline", " min", 0).across_roles()),
];

// Field mappings per revision. The legacy feed carried fewer stats, so a
// category configured under v1 may simply not resolve.
static SKATER_FIELDS_V1: &[(&str, &str)] = &[
    ("points", "pts"),
    ("goals", "g"),
    ("assists", "a"),
    ("plusminus", "pm"),
    ("penalties", "pim"),
    ("games", "gp"),
    ("toi", "toi"),
    ("shots", "sog"),
];

static GOALIE_FIELDS_V1: &[(&str, &str)] = &[
    ("wins", "w"),
    ("losses", "l"),
    ("saves", "svs"),
    ("savepct", "svpct"),
    ("gaa", "gaa"),
    ("shutouts", "so"),
    ("games", "gp"),
    ("toi", "toi"),
];

static SKATER_FIELDS_V2: &[(&str, &str)] = &[
    ("points", "points"),
    ("goals", "goals"),
    ("assists", "assists"),
    ("plusminus", "plus_minus"),
    ("penalties", "penalty_minutes"),
    ("games", "games"),
    ("toi", "time_on_ice"),
    ("toiavg", "time_on_ice_avg"),
    ("shots", "shots"),
    ("shotpct", "shot_percentage"),
    ("faceoffs", "faceoff_percentage"),
    ("blocks", "blocks"),
    ("hits", "hits"),
    ("xg", "expected_goals"),
    ("xge", "expected_goals_effect"),
    ("ppg", "powerplay_goals"),
    ("shg", "shorthanded_goals"),
    ("gwg", "winning_goals"),
];

static GOALIE_FIELDS_V2: &[(&str, &str)] = &[
    ("wins", "wins"),
    ("losses", "losses"),
    ("saves", "saves"),
    ("savepct", "save_percentage"),
    ("gaa", "goals_against_average"),
    ("shutouts", "shutouts"),
    ("games", "games"),
    ("toi", "time_on_ice"),
];

static SKATER_FIELDS_V3: &[(&str, &str)] = &[
    ("points", "points"),
    ("goals", "goals"),
    ("assists", "assists"),
    ("plusminus", "plusminus"),
    ("penalties", "penalties"),
    ("games", "games"),
    ("toi", "timeOnIce"),
    ("toiavg", "timeOnIceAvg"),
    ("shots", "shots"),
    ("shotpct", "shotPercentage"),
    ("faceoffs", "faceoffPercentage"),
    ("blocks", "blocks"),
    ("hits", "hits"),
    ("xg", "expectedGoals"),
    ("xge", "expectedGoalsEffect"),
    ("ppg", "powerplayGoals"),
    ("shg", "shortHandedGoals"),
    ("gwg", "winningGoals"),
];

static GOALIE_FIELDS_V3: &[(&str, &str)] = &[
    ("wins", "wins"),
    ("losses", "losses"),
    ("saves", "saves"),
    ("savepct", "savePercentage"),
    ("gaa", "goalsAgainstAverage"),
    ("shutouts", "shutouts"),
    ("games", "games"),
    ("toi", "timeOnIce"),
];

/// Per-role category tables for one API revision.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaTable {
    #[serde(default)]
    pub skaters: HashMap<String, CategorySpec>,
    #[serde(default)]
    pub goaltenders: HashMap<String, CategorySpec>,
}

static TABLE_V1: Lazy<SchemaTable> =
    Lazy::new(|| SchemaTable::from_rows(SKATER_FIELDS_V1, GOALIE_FIELDS_V1));
static TABLE_V2: Lazy<SchemaTable> =
    Lazy::new(|| SchemaTable::from_rows(SKATER_FIELDS_V2, GOALIE_FIELDS_V2));
static TABLE_V3: Lazy<SchemaTable> =
    Lazy::new(|| SchemaTable::from_rows(SKATER_FIELDS_V3, GOALIE_FIELDS_V3));

impl SchemaTable {
    /// Returns the built-in table for an upstream field-naming revision.
    pub fn for_version(version: ApiVersion) -> SchemaTable {
        match version {
            ApiVersion::V1 => TABLE_V1.clone(),
            ApiVersion::V2 => TABLE_V2.clone(),
            ApiVersion::V3 => TABLE_V3.clone(),
        }
    }

    /// Loads a replacement table from a TOML file. The file uses the same
    /// shape the built-in tables serialize to:
    ///
    /// ```toml
    /// [skaters.points]
    /// field = "points"
    /// display_name = "Points"
    ///
    /// [goaltenders.gaa]
    /// field = "goalsAgainstAverage"
    /// direction = "lowest_first"
    /// precision = 2
    /// ```
    ///
    /// # Returns
    /// * `Ok(SchemaTable)` - Parsed and validated table
    /// * `Err(AppError)` - File unreadable, TOML invalid, or table unusable
    pub async fn load_from_path(path: &str) -> Result<SchemaTable, AppError> {
        let content = fs::read_to_string(path).await?;
        let table: SchemaTable = toml::from_str(&content)?;
        table.validate(path)?;
        Ok(table)
    }

    /// Rejects tables no lookup could ever succeed against.
    fn validate(&self, source: &str) -> Result<(), AppError> {
        if self.skaters.is_empty() && self.goaltenders.is_empty() {
            return Err(AppError::schema_error(format!(
                "Schema file '{source}' defines no categories"
            )));
        }
        for (category, spec) in self.skaters.iter().chain(self.goaltenders.iter()) {
            if spec.field.is_empty() {
                return Err(AppError::schema_error(format!(
                    "Category '{category}' in '{source}' has an empty field name"
                )));
            }
        }
        Ok(())
    }

    /// Resolves a root category name for a role. Goaltender lookups accept
    /// an already-namespaced key (`goalie_gaa`) by stripping the prefix.
    /// Unknown categories resolve to `None`; the caller skips them.
    pub fn resolve(&self, role: Role, category: &str) -> Option<&CategorySpec> {
        match role {
            Role::Skater => self.skaters.get(category),
            Role::Goaltender => {
                let root = category
                    .strip_prefix(GOALIE_CATEGORY_PREFIX)
                    .unwrap_or(category);
                self.goaltenders.get(root)
            }
        }
    }

    /// Resolves a namespaced snapshot key: `goalie_`-prefixed keys hit the
    /// goaltender table, everything else the skater table.
    pub fn resolve_key(&self, key: &str) -> Option<&CategorySpec> {
        if let Some(root) = key.strip_prefix(GOALIE_CATEGORY_PREFIX) {
            self.goaltenders.get(root)
        } else {
            self.skaters.get(key)
        }
    }

    fn from_rows(skater_fields: &[(&str, &str)], goalie_fields: &[(&str, &str)]) -> SchemaTable {
        SchemaTable {
            skaters: build_role_table(skater_fields, SKATER_INFO),
            goaltenders: build_role_table(goalie_fields, GOALIE_INFO),
        }
    }
}

fn build_role_table(
    fields: &[(&str, &str)],
    info: &[(&str, CategoryInfo)],
) -> HashMap<String, CategorySpec> {
    fields
        .iter()
        .map(|(root, field)| {
            let spec = match info.iter().find(|(name, _)| name == root) {
                Some((_, meta)) => CategorySpec {
                    field: field.to_string(),
                    display_name: meta.display_name.to_string(),
                    icon: meta.icon.to_string(),
                    unit: meta.unit.to_string(),
                    precision: meta.precision,
                    direction: meta.direction,
                    role_agnostic: meta.role_agnostic,
                },
                // Categories mapped but never given display metadata
                // (blocks, hits) fall back to a capitalized name
                None => CategorySpec {
                    field: field.to_string(),
                    display_name: capitalize(root),
                    icon: default_icon(),
                    unit: String::new(),
                    precision: 0,
                    direction: SortDirection::default(),
                    role_agnostic: false,
                },
            };
            (root.to_string(), spec)
        })
        .collect()
}

/// Uppercases the first character, used for fallback display names.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_current_skater_mappings() {
        let table = SchemaTable::for_version(ApiVersion::V3);
        let cases = [
            ("points", "points"),
            ("goals", "goals"),
            ("assists", "assists"),
            ("plusminus", "plusminus"),
            ("penalties", "penalties"),
            ("games", "games"),
            ("toi", "timeOnIce"),
            ("shots", "shots"),
            ("faceoffs", "faceoffPercentage"),
            ("blocks", "blocks"),
            ("hits", "hits"),
        ];
        for (category, field) in cases {
            let spec = table.resolve(Role::Skater, category).unwrap();
            assert_eq!(spec.field, field, "category {category}");
        }
    }

    #[test]
    fn test_current_goalie_mappings() {
        let table = SchemaTable::for_version(ApiVersion::V3);
        let cases = [
            ("wins", "wins"),
            ("savepct", "savePercentage"),
            ("gaa", "goalsAgainstAverage"),
            ("shutouts", "shutouts"),
            ("games", "games"),
            ("toi", "timeOnIce"),
        ];
        for (category, field) in cases {
            let spec = table.resolve(Role::Goaltender, category).unwrap();
            assert_eq!(spec.field, field, "category {category}");
        }
    }

    #[test]
    fn test_direction_declared_per_category() {
        let table = SchemaTable::for_version(ApiVersion::V3);

        // Lower is better only for goals-against-average
        let gaa = table.resolve(Role::Goaltender, "gaa").unwrap();
        assert_eq!(gaa.direction, SortDirection::LowestFirst);
        assert_eq!(gaa.precision, 2);

        for category in ["wins", "savepct", "shutouts", "saves"] {
            let spec = table.resolve(Role::Goaltender, category).unwrap();
            assert_eq!(
                spec.direction,
                SortDirection::HighestFirst,
                "category {category}"
            );
        }
        for category in ["points", "goals", "penalties", "plusminus"] {
            let spec = table.resolve(Role::Skater, category).unwrap();
            assert_eq!(
                spec.direction,
                SortDirection::HighestFirst,
                "category {category}"
            );
        }
    }

    #[test]
    fn test_role_agnostic_categories() {
        let table = SchemaTable::for_version(ApiVersion::V3);

        for role in [Role::Skater, Role::Goaltender] {
            for category in ["games", "toi"] {
                let spec = table.resolve(role, category).unwrap();
                assert!(spec.role_agnostic, "{category} for {role}");
            }
        }
        assert!(table.resolve(Role::Skater, "toiavg").unwrap().role_agnostic);
        assert!(!table.resolve(Role::Skater, "points").unwrap().role_agnostic);
        assert!(!table.resolve(Role::Goaltender, "gaa").unwrap().role_agnostic);
    }

    #[test]
    fn test_goalie_lookup_accepts_namespaced_key() {
        let table = SchemaTable::for_version(ApiVersion::V3);
        let direct = table.resolve(Role::Goaltender, "gaa").unwrap();
        let prefixed = table.resolve(Role::Goaltender, "goalie_gaa").unwrap();
        assert_eq!(direct, prefixed);

        // The prefix never applies to skater lookups
        assert!(table.resolve(Role::Skater, "goalie_games").is_none());
    }

    #[test]
    fn test_resolve_key_routes_by_prefix() {
        let table = SchemaTable::for_version(ApiVersion::V3);

        // Same root, different tables: skater games counts games, goalie
        // games comes from the goaltender table
        let skater_games = table.resolve_key("games").unwrap();
        let goalie_games = table.resolve_key("goalie_games").unwrap();
        assert_eq!(skater_games.display_name, "Games Played");
        assert_eq!(goalie_games.display_name, "Games Played");

        assert_eq!(
            table.resolve_key("goalie_gaa").unwrap().direction,
            SortDirection::LowestFirst
        );
        assert!(table.resolve_key("gaa").is_none());
        assert!(table.resolve_key("goalie_points").is_none());
    }

    #[test]
    fn test_unknown_category_resolves_to_none() {
        let table = SchemaTable::for_version(ApiVersion::V3);
        assert!(table.resolve(Role::Skater, "bodychecks").is_none());
        assert!(table.resolve(Role::Goaltender, "points").is_none());
    }

    #[test]
    fn test_legacy_revision_has_fewer_categories() {
        let table = SchemaTable::for_version(ApiVersion::V1);
        assert_eq!(table.resolve(Role::Skater, "points").unwrap().field, "pts");
        assert_eq!(table.resolve(Role::Skater, "games").unwrap().field, "gp");
        assert_eq!(
            table.resolve(Role::Goaltender, "savepct").unwrap().field,
            "svpct"
        );
        // Expected goals did not exist in the legacy feed
        assert!(table.resolve(Role::Skater, "xg").is_none());
        assert!(table.resolve(Role::Skater, "faceoffs").is_none());
    }

    #[test]
    fn test_snake_case_revision_mappings() {
        let table = SchemaTable::for_version(ApiVersion::V2);
        assert_eq!(
            table.resolve(Role::Skater, "toi").unwrap().field,
            "time_on_ice"
        );
        assert_eq!(
            table.resolve(Role::Goaltender, "gaa").unwrap().field,
            "goals_against_average"
        );
        // Direction metadata is shared across revisions
        assert_eq!(
            table.resolve(Role::Goaltender, "gaa").unwrap().direction,
            SortDirection::LowestFirst
        );
    }

    #[test]
    fn test_unmapped_display_falls_back_to_capitalized_name() {
        let table = SchemaTable::for_version(ApiVersion::V3);
        let blocks = table.resolve(Role::Skater, "blocks").unwrap();
        assert_eq!(blocks.display_name, "Blocks");
        assert_eq!(blocks.icon, DEFAULT_ICON);
        let hits = table.resolve(Role::Skater, "hits").unwrap();
        assert_eq!(hits.display_name, "Hits");
    }

    #[test]
    fn test_builtin_tables_are_well_formed() {
        for version in [ApiVersion::V1, ApiVersion::V2, ApiVersion::V3] {
            let table = SchemaTable::for_version(version);
            assert!(!table.skaters.is_empty(), "{version}");
            assert!(!table.goaltenders.is_empty(), "{version}");
            for (category, spec) in table.skaters.iter().chain(table.goaltenders.iter()) {
                assert!(!spec.field.is_empty(), "{version}/{category}");
                assert!(!spec.display_name.is_empty(), "{version}/{category}");
                assert!(
                    !category.starts_with(GOALIE_CATEGORY_PREFIX),
                    "table keys are root names, got {category}"
                );
            }
        }
    }

    #[test]
    fn test_table_toml_roundtrip() {
        let table = SchemaTable::for_version(ApiVersion::V3);
        let serialized = toml::to_string_pretty(&table).unwrap();
        let parsed: SchemaTable = toml::from_str(&serialized).unwrap();
        assert_eq!(
            parsed.resolve(Role::Skater, "points").unwrap(),
            table.resolve(Role::Skater, "points").unwrap()
        );
        assert_eq!(
            parsed.resolve(Role::Goaltender, "gaa").unwrap(),
            table.resolve(Role::Goaltender, "gaa").unwrap()
        );
    }

    #[tokio::test]
    async fn test_load_from_path_with_defaults() {
        let temp_dir = tempdir().unwrap();
        let schema_path = temp_dir.path().join("schema.toml");
        let schema_path_str = schema_path.to_string_lossy();

        let content = r#"
[skaters.points]
field = "tacticalPoints"
display_name = "Points"

[goaltenders.gaa]
field = "avgGoalsConceded"
direction = "lowest_first"
precision = 2
"#;
        tokio::fs::write(&schema_path, content).await.unwrap();

        let table = SchemaTable::load_from_path(&schema_path_str).await.unwrap();
        let points = table.resolve(Role::Skater, "points").unwrap();
        assert_eq!(points.field, "tacticalPoints");
        // Unspecified fields take their serde defaults
        assert_eq!(points.icon, DEFAULT_ICON);
        assert_eq!(points.precision, 0);
        assert_eq!(points.direction, SortDirection::HighestFirst);

        let gaa = table.resolve(Role::Goaltender, "gaa").unwrap();
        assert_eq!(gaa.field, "avgGoalsConceded");
        assert_eq!(gaa.direction, SortDirection::LowestFirst);

        // Categories absent from the replacement table do not resolve
        assert!(table.resolve(Role::Skater, "goals").is_none());
    }

    #[tokio::test]
    async fn test_load_from_path_rejects_empty_table() {
        let temp_dir = tempdir().unwrap();
        let schema_path = temp_dir.path().join("empty.toml");
        let schema_path_str = schema_path.to_string_lossy();
        tokio::fs::write(&schema_path, "").await.unwrap();

        let result = SchemaTable::load_from_path(&schema_path_str).await;
        assert!(matches!(result.unwrap_err(), AppError::Schema(_)));
    }

    #[tokio::test]
    async fn test_load_from_path_rejects_empty_field_name() {
        let temp_dir = tempdir().unwrap();
        let schema_path = temp_dir.path().join("bad.toml");
        let schema_path_str = schema_path.to_string_lossy();
        let content = r#"
[skaters.points]
field = ""
"#;
        tokio::fs::write(&schema_path, content).await.unwrap();

        let result = SchemaTable::load_from_path(&schema_path_str).await;
        assert!(matches!(result.unwrap_err(), AppError::Schema(_)));
    }

    #[tokio::test]
    async fn test_load_from_path_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let schema_path = temp_dir.path().join("invalid.toml");
        let schema_path_str = schema_path.to_string_lossy();
        tokio::fs::write(&schema_path, "[skaters.points\nfield =")
            .await
            .unwrap();

        let result = SchemaTable::load_from_path(&schema_path_str).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_load_from_path_missing_file() {
        let result = SchemaTable::load_from_path("/nonexistent/schema.toml").await;
        assert!(matches!(result.unwrap_err(), AppError::Io(_)));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("blocks"), "Blocks");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("already Capital"), "Already Capital");
    }
}
