use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Config(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. POKEDEX_PATH environment variable (with tilde expansion)
/// 3. System data directory (recommended default)
/// 4. ~/.pokedex (fallback for systems without standard data directory)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("POKEDEX_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("pokedex"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".pokedex"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or system data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// On-disk layout of the data directory.
///
/// ```text
/// <root>/config.toml
/// <root>/veekun-pokedex.sqlite
/// <root>/records/0025.json
/// <root>/records/names.json
/// <root>/icons/icon025.png
/// <root>/icons/shiny/icon025.png
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    pub fn database_file(&self) -> PathBuf {
        self.root.join("veekun-pokedex.sqlite")
    }

    pub fn records_dir(&self) -> PathBuf {
        self.root.join("records")
    }

    pub fn record_file(&self, id: u32) -> PathBuf {
        self.records_dir().join(format!("{:04}.json", id))
    }

    pub fn name_index_file(&self) -> PathBuf {
        self.records_dir().join("names.json")
    }

    pub fn icons_dir(&self) -> PathBuf {
        self.root.join("icons")
    }

    /// Sprite cache location. `sprite_id` is the Pokémon (form) id, which
    /// equals the species id for default forms.
    pub fn icon_file(&self, sprite_id: u32, shiny: bool) -> PathBuf {
        let file = format!("icon{:03}.png", sprite_id);
        if shiny {
            self.icons_dir().join("shiny").join(file)
        } else {
            self.icons_dir().join(file)
        }
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(self.records_dir())?;
        std::fs::create_dir_all(self.icons_dir().join("shiny"))?;
        Ok(())
    }
}
