// User configuration: board geometry, preferences, and best-time records
// Persisted to disk as TOML under the platform config directory

use chrono::Local;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::xms_field::BoardConfig;

/// Preset board geometries plus whatever the steppers currently hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,     // 9x9, 10 mines
    Intermediate, // 16x16, 40 mines
    Expert,       // 16x30, 99 mines
    Custom(usize, usize, usize), // columns, rows, mines
}

impl Difficulty {
    /// Board geometry for this difficulty
    pub fn board_config(&self) -> BoardConfig {
        let (cols, rows, mines) = match self {
            Difficulty::Beginner => (9, 9, 10),
            Difficulty::Intermediate => (16, 16, 40),
            Difficulty::Expert => (16, 30, 99),
            Difficulty::Custom(c, r, m) => (*c, *r, *m),
        };
        BoardConfig::clamped(cols, rows, mines)
    }

    /// The preset a geometry corresponds to, if any
    /// Custom boards deliberately have no preset identity
    pub fn matching(config: BoardConfig) -> Option<Difficulty> {
        [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Expert,
        ]
        .into_iter()
        .find(|d| d.board_config() == config)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Expert => "Expert",
            Difficulty::Custom(_, _, _) => "Custom",
        }
    }
}

/// Record entry for best completion time
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Record {
    pub secs: u64,    // Completion time in seconds
    pub date: String, // Date in ISO format (YYYY-MM-DD)
}

/// User configuration and game records
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Last-used board geometry, restored as the pending configuration
    pub cols: usize,
    pub rows: usize,
    pub mines: usize,

    // Best time records for each preset difficulty
    pub best_beginner: Option<Record>,
    pub best_intermediate: Option<Record>,
    pub best_expert: Option<Record>,

    // Game preferences
    pub ascii_icons: bool, // Use ASCII fallback icons
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cols: 8,
            rows: 8,
            mines: 10,
            best_beginner: None,
            best_intermediate: None,
            best_expert: None,
            ascii_icons: false,
        }
    }
}

impl Config {
    pub fn board_config(&self) -> BoardConfig {
        BoardConfig::clamped(self.cols, self.rows, self.mines)
    }

    pub fn remember_board(&mut self, config: BoardConfig) {
        self.cols = config.cols;
        self.rows = config.rows;
        self.mines = config.mines;
    }

    /// Best time (seconds only) for a difficulty; None for Custom
    pub fn get_record(&self, d: &Difficulty) -> Option<u64> {
        match d {
            Difficulty::Beginner => self.best_beginner.as_ref().map(|r| r.secs),
            Difficulty::Intermediate => self.best_intermediate.as_ref().map(|r| r.secs),
            Difficulty::Expert => self.best_expert.as_ref().map(|r| r.secs),
            Difficulty::Custom(_, _, _) => None,
        }
    }

    /// Store a new best time if strictly better; Custom is never recorded
    /// Returns true when the record was updated
    pub fn set_record(&mut self, d: &Difficulty, secs: u64) -> bool {
        let date = Local::now().format("%Y-%m-%d").to_string();
        let slot = match d {
            Difficulty::Beginner => &mut self.best_beginner,
            Difficulty::Intermediate => &mut self.best_intermediate,
            Difficulty::Expert => &mut self.best_expert,
            Difficulty::Custom(_, _, _) => return false,
        };
        if slot.as_ref().map_or(true, |v| secs < v.secs) {
            *slot = Some(Record { secs, date });
            true
        } else {
            false
        }
    }
}

/// Configuration file path under the platform config directory
/// (e.g. ~/.config/xmines/xmines.toml on Linux); falls back to the
/// current directory if ProjectDirs is unavailable
pub fn config_path() -> Option<PathBuf> {
    if let Ok(exe) = env::current_exe() {
        if let Some(name) = exe.file_stem().and_then(|s| s.to_str()) {
            if let Some(proj) = ProjectDirs::from("com", "xhbl", name) {
                let mut path = proj.config_dir().to_path_buf();
                path.push(format!("{}.toml", name));
                return Some(path);
            } else if let Ok(mut path) = env::current_dir() {
                path.push(format!("{}.toml", name));
                return Some(path);
            }
        }
    }
    None
}

/// Load configuration from disk, or create default if not found
pub fn load_or_create_config() -> Config {
    if let Some(path) = config_path() {
        if path.exists() {
            if let Ok(s) = fs::read_to_string(&path) {
                if let Ok(cfg) = toml::from_str::<Config>(&s) {
                    return cfg;
                }
            }
        }
        let cfg = Config::default();
        if let Ok(s) = toml::to_string(&cfg) {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = fs::write(&path, s);
        }
        return cfg;
    }
    Config::default()
}

/// Save configuration to disk as TOML
pub fn save_config(cfg: &Config) {
    if let Some(path) = config_path() {
        if let Ok(s) = toml::to_string(cfg) {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = fs::write(&path, s);
        }
    }
}
