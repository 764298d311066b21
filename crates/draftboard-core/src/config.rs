// Configuration loading and parsing (draft.toml).

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::draft::pick::Position;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// draft.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire draft.toml file.
#[derive(Debug, Clone, Deserialize)]
struct DraftFile {
    draft: DraftConfig,
    data: DataPaths,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub draft: DraftConfig,
    pub data_paths: DataPaths,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DraftConfig {
    pub name: String,
    /// Login names offered on the login screen, in display order.
    pub users: Vec<String>,
    /// Position -> slot count, e.g. `RB = 2`.
    pub roster: HashMap<String, usize>,
    /// Positions whose overflow may be placed in FLEX.
    #[serde(default = "default_flex_eligible")]
    pub flex_eligible: Vec<String>,
}

fn default_flex_eligible() -> Vec<String> {
    vec!["RB".into(), "WR".into(), "TE".into()]
}

impl DraftConfig {
    /// The parsed FLEX-eligible positions. Unknown entries are dropped;
    /// `validate` rejects them before this is reached in practice.
    pub fn flex_positions(&self) -> Vec<Position> {
        self.flex_eligible
            .iter()
            .filter_map(|s| Position::from_str_pos(s))
            .filter(|p| !p.is_meta_slot())
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub players: String,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/draft.toml` relative to the
/// given `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy defaults.
/// Prefer `load_config()` which handles default initialization automatically.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let draft_path = base_dir.join("config").join(DRAFT_FILE);
    let draft_text = read_file(&draft_path)?;
    let draft_file: DraftFile =
        toml::from_str(&draft_text).map_err(|e| ConfigError::ParseError {
            path: draft_path.clone(),
            source: e,
        })?;

    let config = Config {
        draft: draft_file.draft,
        data_paths: draft_file.data,
    };

    validate(&config)?;

    Ok(config)
}

/// Name of the draft config file under both `defaults/` and `config/`.
const DRAFT_FILE: &str = "draft.toml";

/// Seed `config/draft.toml` from `defaults/draft.toml` when it is missing.
///
/// Returns the path written, or `None` if a config already exists. An
/// existing `config/draft.toml` is never overwritten.
pub fn ensure_config_files(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let target = base_dir.join("config").join(DRAFT_FILE);
    if target.exists() {
        return Ok(None);
    }

    let source = base_dir.join("defaults").join(DRAFT_FILE);
    let copy_error = |what: &str, path: &Path, e: std::io::Error| ConfigError::DefaultsCopyError {
        message: format!("failed to {what} {}: {e}", path.display()),
    };

    let content = std::fs::read(&source).map_err(|e| copy_error("read", &source, e))?;
    if let Some(dir) = target.parent() {
        std::fs::create_dir_all(dir).map_err(|e| copy_error("create", dir, e))?;
    }
    std::fs::write(&target, content).map_err(|e| copy_error("write", &target, e))?;

    Ok(Some(target))
}

/// Convenience wrapper: loads config relative to the current working directory.
/// Ensures default config files are copied before loading.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

fn invalid(field: impl Into<String>, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        field: field.into(),
        message: message.into(),
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let draft = &config.draft;

    if draft.users.is_empty() {
        return Err(invalid("draft.users", "must list at least one user"));
    }
    for (i, user) in draft.users.iter().enumerate() {
        if user.trim().is_empty() {
            return Err(invalid(format!("draft.users[{i}]"), "must not be blank"));
        }
        if draft.users[..i].contains(user) {
            return Err(invalid(
                format!("draft.users[{i}]"),
                format!("duplicate user `{user}`"),
            ));
        }
    }

    let mut keys: Vec<&String> = draft.roster.keys().collect();
    keys.sort();
    let mut seen: HashMap<Position, &str> = HashMap::new();
    for key in keys {
        let count = draft.roster[key];
        let Some(pos) = Position::from_str_pos(key) else {
            return Err(invalid(
                format!("draft.roster.{key}"),
                "unknown position",
            ));
        };
        if let Some(first) = seen.insert(pos, key.as_str()) {
            return Err(invalid(
                format!("draft.roster.{key}"),
                format!("same position as `{first}`"),
            ));
        }
        if pos == Position::Flex && count > 1 {
            return Err(invalid(
                format!("draft.roster.{key}"),
                format!("FLEX holds at most one player, got {count}"),
            ));
        }
    }
    if draft.roster.values().sum::<usize>() == 0 {
        return Err(invalid("draft.roster", "must define at least one slot"));
    }

    for (i, pos) in draft.flex_eligible.iter().enumerate() {
        match Position::from_str_pos(pos) {
            Some(p) if !p.is_meta_slot() => {}
            _ => {
                return Err(invalid(
                    format!("draft.flex_eligible[{i}]"),
                    format!("`{pos}` is not a player position"),
                ));
            }
        }
    }

    if config.data_paths.players.trim().is_empty() {
        return Err(invalid("data.players", "must not be empty"));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Workspace root, where `defaults/` lives.
    fn project_root() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
    }

    const VALID_DRAFT: &str = r#"
[draft]
name = "Test League"
users = ["alice", "bob"]

[draft.roster]
QB = 1
RB = 2
WR = 2
TE = 1
FLEX = 1
"D/ST" = 1
K = 1

[data]
players = "data/players.json"
"#;

    /// Write `draft_toml` into a fresh temp project and load it.
    fn load_from_text(test_name: &str, draft_toml: &str) -> Result<Config, ConfigError> {
        let tmp = std::env::temp_dir().join(format!("draftboard_{test_name}"));
        let config_dir = tmp.join("config");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("draft.toml"), draft_toml).unwrap();
        let result = load_config_from(&tmp);
        let _ = fs::remove_dir_all(&tmp);
        result
    }

    fn assert_validation_error(result: Result<Config, ConfigError>, expected_field: &str) {
        match result {
            Err(ConfigError::ValidationError { field, .. }) => {
                assert_eq!(field, expected_field);
            }
            other => panic!("expected ValidationError for {expected_field}, got {other:?}"),
        }
    }

    #[test]
    fn load_defaults_file() {
        let root = project_root();
        let text = fs::read_to_string(root.join("defaults/draft.toml")).unwrap();
        let config = load_from_text("defaults", &text).expect("defaults should be valid");

        assert_eq!(config.draft.users, vec!["user1", "user2", "user3"]);
        assert_eq!(config.draft.roster.get("RB"), Some(&2));
        assert_eq!(config.draft.roster.get("FLEX"), Some(&1));
        assert_eq!(config.draft.roster.get("D/ST"), Some(&1));
        assert_eq!(
            config.draft.flex_positions(),
            vec![Position::RunningBack, Position::WideReceiver, Position::TightEnd]
        );
        assert_eq!(config.data_paths.players, "data/players.json");
    }

    #[test]
    fn flex_eligible_defaults_when_omitted() {
        let config = load_from_text("flex_default", VALID_DRAFT).unwrap();
        assert_eq!(config.draft.flex_eligible, vec!["RB", "WR", "TE"]);
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let tmp = std::env::temp_dir().join("draftboard_missing_file");
        let _ = fs::remove_dir_all(&tmp);
        let result = load_config_from(&tmp);
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let result = load_from_text("malformed", "[draft\nname = ");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn rejects_empty_users() {
        let text = VALID_DRAFT.replace(r#"users = ["alice", "bob"]"#, "users = []");
        assert_validation_error(load_from_text("empty_users", &text), "draft.users");
    }

    #[test]
    fn rejects_duplicate_users() {
        let text = VALID_DRAFT.replace(r#"["alice", "bob"]"#, r#"["alice", "alice"]"#);
        assert_validation_error(load_from_text("dup_users", &text), "draft.users[1]");
    }

    #[test]
    fn rejects_blank_user() {
        let text = VALID_DRAFT.replace(r#"["alice", "bob"]"#, r#"["alice", "  "]"#);
        assert_validation_error(load_from_text("blank_user", &text), "draft.users[1]");
    }

    #[test]
    fn rejects_unknown_roster_position() {
        let text = VALID_DRAFT.replace("K = 1", "K = 1\nFB = 1");
        assert_validation_error(load_from_text("unknown_pos", &text), "draft.roster.FB");
    }

    #[test]
    fn rejects_flex_over_one() {
        let text = VALID_DRAFT.replace("FLEX = 1", "FLEX = 2");
        assert_validation_error(load_from_text("flex_two", &text), "draft.roster.FLEX");
    }

    #[test]
    fn rejects_second_flex_key() {
        let text = VALID_DRAFT.replace("FLEX = 1", "FLEX = 1\nflex = 1");
        assert_validation_error(load_from_text("flex_alias", &text), "draft.roster.flex");
    }

    #[test]
    fn rejects_wrt_as_roster_key() {
        let text = VALID_DRAFT.replace("FLEX = 1", "FLEX = 1\n\"W/R/T\" = 1");
        assert_validation_error(load_from_text("wrt_key", &text), "draft.roster.W/R/T");
    }

    #[test]
    fn rejects_aliased_position_keys() {
        let text = VALID_DRAFT.replace("WR = 2", "WR = 2\nLWR = 1");
        assert_validation_error(load_from_text("wr_alias", &text), "draft.roster.WR");
    }

    #[test]
    fn rejects_flex_in_flex_eligible() {
        let text = VALID_DRAFT.replace(
            r#"users = ["alice", "bob"]"#,
            "users = [\"alice\", \"bob\"]\nflex_eligible = [\"RB\", \"FLEX\"]",
        );
        assert_validation_error(
            load_from_text("flex_in_flex", &text),
            "draft.flex_eligible[1]",
        );
    }

    #[test]
    fn ensure_config_files_seeds_without_overwriting() {
        let tmp = std::env::temp_dir().join("draftboard_ensure_copy");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("defaults")).unwrap();
        fs::write(tmp.join("defaults/draft.toml"), VALID_DRAFT).unwrap();

        let copied = ensure_config_files(&tmp).unwrap();
        assert_eq!(copied, Some(tmp.join("config/draft.toml")));
        assert!(load_config_from(&tmp).is_ok());

        fs::write(tmp.join("config/draft.toml"), "edited").unwrap();
        assert_eq!(ensure_config_files(&tmp).unwrap(), None);
        assert_eq!(
            fs::read_to_string(tmp.join("config/draft.toml")).unwrap(),
            "edited"
        );

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_keeps_config_without_defaults() {
        let tmp = std::env::temp_dir().join("draftboard_ensure_no_defaults");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("config")).unwrap();
        fs::write(tmp.join("config/draft.toml"), VALID_DRAFT).unwrap();
        assert_eq!(ensure_config_files(&tmp).unwrap(), None);
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_errors_without_any_dirs() {
        let tmp = std::env::temp_dir().join("draftboard_ensure_none");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();
        assert!(matches!(
            ensure_config_files(&tmp),
            Err(ConfigError::DefaultsCopyError { .. })
        ));
        let _ = fs::remove_dir_all(&tmp);
    }
}
