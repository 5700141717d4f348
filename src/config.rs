//! User configuration — navigator behaviour, pager feel and key bindings.
//!
//! Stored as TOML at `$XDG_CONFIG_HOME/pager-nav/config.toml` (default
//! `~/.config/pager-nav/config.toml`).  A missing file means defaults; every
//! field may be omitted.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialise config")]
    Serialize(#[from] toml::ser::Error),
}

// ───────────────────────────────────────── actions ───────────

/// Everything a key can be bound to in the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    PrevPage,
    NextPage,
    DragLeft,
    DragRight,
    Release,
    FirstPage,
    LastPage,
    ToggleSkimOver,
    AddPage,
    RemovePage,
    Quit,
}

impl Action {
    pub const ALL: &[Action] = &[
        Action::PrevPage,
        Action::NextPage,
        Action::DragLeft,
        Action::DragRight,
        Action::Release,
        Action::FirstPage,
        Action::LastPage,
        Action::ToggleSkimOver,
        Action::AddPage,
        Action::RemovePage,
        Action::Quit,
    ];

    /// Short label for the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Action::PrevPage => "prev",
            Action::NextPage => "next",
            Action::DragLeft => "drag ←",
            Action::DragRight => "drag →",
            Action::Release => "release",
            Action::FirstPage => "first",
            Action::LastPage => "last",
            Action::ToggleSkimOver => "skim-over",
            Action::AddPage => "add tab",
            Action::RemovePage => "drop tab",
            Action::Quit => "quit",
        }
    }

    /// Key used in the `[keys]` table.
    fn config_key(self) -> &'static str {
        match self {
            Action::PrevPage => "prev_page",
            Action::NextPage => "next_page",
            Action::DragLeft => "drag_left",
            Action::DragRight => "drag_right",
            Action::Release => "release",
            Action::FirstPage => "first_page",
            Action::LastPage => "last_page",
            Action::ToggleSkimOver => "toggle_skim_over",
            Action::AddPage => "add_page",
            Action::RemovePage => "remove_page",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.config_key() == s)
    }

    fn default_keys(self) -> Vec<KeyBind> {
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let shift = KeyModifiers::SHIFT;
        match self {
            Action::PrevPage => vec![KeyBind::new(Left, n), KeyBind::new(Char('h'), n)],
            Action::NextPage => vec![KeyBind::new(Right, n), KeyBind::new(Char('l'), n)],
            Action::DragLeft => vec![KeyBind::new(Left, shift), KeyBind::new(Char('a'), n)],
            Action::DragRight => vec![KeyBind::new(Right, shift), KeyBind::new(Char('d'), n)],
            Action::Release => vec![KeyBind::new(Char(' '), n)],
            Action::FirstPage => vec![KeyBind::new(Home, n)],
            Action::LastPage => vec![KeyBind::new(End, n)],
            Action::ToggleSkimOver => vec![KeyBind::new(Char('s'), n)],
            Action::AddPage => vec![KeyBind::new(Char('+'), n)],
            Action::RemovePage => vec![KeyBind::new(Char('-'), n)],
            Action::Quit => vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)],
        }
    }
}

// ───────────────────────────────────────── key bind ──────────

/// Key code plus the CTRL/ALT/SHIFT modifiers it must be pressed with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    const MODIFIER_MASK: KeyModifiers = KeyModifiers::CONTROL
        .union(KeyModifiers::ALT)
        .union(KeyModifiers::SHIFT);

    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Platform modifiers (SUPER, META, …) are ignored.
    pub fn matches(&self, event: KeyEvent) -> bool {
        self.code == event.code
            && (self.modifiers & Self::MODIFIER_MASK) == (event.modifiers & Self::MODIFIER_MASK)
    }

    /// `"Shift+←"`, `"Space"`, `"q"`.
    pub fn display(&self) -> String {
        let mut s = modifier_prefix(self.modifiers);
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        });
        s
    }

    /// Parse the form stored in `[keys]`: `"Shift+Left"`, `"Space"`, `"q"`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        // A lone "+" splits into two empty strings.
        if s == "+" {
            return Some(Self::new(KeyCode::Char('+'), modifiers));
        }
        let (key_part, mods) = parts.split_last()?;

        for part in mods {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "space" => KeyCode::Char(' '),
            k if k.starts_with('f') && k.len() > 1 => KeyCode::F(k[1..].parse().ok()?),
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(Self { code, modifiers })
    }
}

fn modifier_prefix(modifiers: KeyModifiers) -> String {
    let mut s = String::new();
    if modifiers.contains(KeyModifiers::CONTROL) {
        s.push_str("Ctrl+");
    }
    if modifiers.contains(KeyModifiers::ALT) {
        s.push_str("Alt+");
    }
    if modifiers.contains(KeyModifiers::SHIFT) {
        s.push_str("Shift+");
    }
    s
}

/// Resolved action → keys table.
#[derive(Debug, Clone)]
pub struct Bindings(HashMap<Action, Vec<KeyBind>>);

impl Bindings {
    pub fn defaults() -> Self {
        Self(Action::ALL.iter().map(|&a| (a, a.default_keys())).collect())
    }

    /// The action bound to `event`.  Bindings with more modifiers win, so
    /// `Shift+←` beats a plain `←`.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        self.0
            .iter()
            .flat_map(|(&action, binds)| binds.iter().map(move |b| (action, b)))
            .filter(|(_, b)| b.matches(event))
            .max_by_key(|(_, b)| b.modifiers.bits().count_ones())
            .map(|(action, _)| action)
    }

    /// First key for `action`, for hints.
    pub fn short(&self, action: Action) -> String {
        self.0
            .get(&action)
            .and_then(|binds| binds.first())
            .map(KeyBind::display)
            .unwrap_or_else(|| "?".into())
    }

    /// Status-bar hint built from the current bindings.
    pub fn status_bar_hint(&self) -> String {
        [
            Action::PrevPage,
            Action::NextPage,
            Action::DragLeft,
            Action::DragRight,
            Action::Release,
            Action::ToggleSkimOver,
            Action::Quit,
        ]
        .iter()
        .map(|&a| format!("{}: {}", self.short(a), a.label()))
        .chain(std::iter::once("1-9: jump".to_string()))
        .collect::<Vec<_>>()
        .join(" | ")
    }
}

// ───────────────────────────────────────── config ────────────

/// How the tab navigator reacts to the dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Pages passed over during a multi-page jump animate too.
    pub skim_over: bool,
    /// Re-run selection whenever the strip is laid out while idle.
    pub reselect_when_layout: bool,
    /// Keep the strip scrolled so the indicator sits at the pivot.
    pub follow_touch: bool,
    /// Horizontal pivot for `follow_touch`, 0.0 (left) – 1.0 (right).
    pub scroll_pivot_x: f32,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            skim_over: false,
            reselect_when_layout: true,
            follow_touch: true,
            scroll_pivot_x: 0.5,
        }
    }
}

/// Feel of the simulated pager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// Ease-out damping per tick.  Higher settles faster.
    pub settle_speed: f64,
    /// Width of one page in pixels, reported with progress ticks.
    pub page_width: u16,
    /// Fraction of a page moved per drag key press.
    pub drag_step: f32,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            settle_speed: 0.3,
            page_width: 360,
            drag_step: 0.15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Frame interval for the pager animation.
    pub tick_rate_ms: u64,
    pub navigator: NavigatorConfig,
    pub pager: PagerConfig,
    /// Overrides: action name → key strings (e.g. `next_page = ["Right", "n"]`).
    pub keys: BTreeMap<String, Vec<String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 33,
            navigator: NavigatorConfig::default(),
            pager: PagerConfig::default(),
            keys: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    /// Load from `path`, or defaults if there is no file there.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?).map_err(io_err)
    }

    /// Defaults overlaid with the `[keys]` table.  Unknown actions and
    /// unparsable keys are logged and skipped.
    pub fn bindings(&self) -> Bindings {
        let mut bindings = Bindings::defaults();
        for (name, keys) in &self.keys {
            let Some(action) = Action::from_config_key(name) else {
                tracing::warn!("config: unknown action {:?}", name);
                continue;
            };
            let parsed: Vec<KeyBind> = keys
                .iter()
                .filter_map(|k| {
                    let bind = KeyBind::parse(k.trim());
                    if bind.is_none() {
                        tracing::warn!("config: cannot parse key {:?} for {}", k, name);
                    }
                    bind
                })
                .collect();
            if !parsed.is_empty() {
                // A key moves to its new action rather than triggering two.
                for binds in bindings.0.values_mut() {
                    binds.retain(|b| !parsed.contains(b));
                }
                bindings.0.insert(action, parsed);
            }
        }
        bindings
    }
}

/// `$XDG_CONFIG_HOME/pager-nav/config.toml`, if a config dir exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(env!("CARGO_PKG_NAME")).join("config.toml"))
}
