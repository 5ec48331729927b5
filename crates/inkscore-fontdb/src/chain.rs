//! Ordered font fallback
//!
//! Candidates are tried front to back. A candidate that is missing, cannot
//! be parsed, or has no glyph for the symbol is a soft miss and the search
//! moves on. When every candidate misses, the built-in stroke font answers.
//!
//! A candidate given as a bare file name is tried in the working directory
//! first, then searched for under the platform font directories.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use inkscore_core::error::FontLoadError;
use walkdir::WalkDir;

use crate::builtin::BuiltinFont;
use crate::font::Font;

/// Fonts the drill looks for when nothing else is configured
pub const DEFAULT_SEARCH_PATHS: &[&str] = &[
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    "NotoSansCJK-Regular.ttc",
    "SimHei.ttf",
    "SimSun.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
];

/// Directories searched for fonts named by file name only
pub fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if cfg!(target_os = "windows") {
        if let Some(windir) = std::env::var_os("WINDIR") {
            dirs.push(PathBuf::from(windir).join("Fonts"));
        }
        return dirs;
    }

    let home = std::env::var_os("HOME").map(PathBuf::from);
    if cfg!(target_os = "macos") {
        dirs.push(PathBuf::from("/Library/Fonts"));
        dirs.push(PathBuf::from("/System/Library/Fonts"));
        if let Some(home) = &home {
            dirs.push(home.join("Library/Fonts"));
        }
        return dirs;
    }

    // XDG data directories, each with a `fonts` subdirectory
    let data_home = std::env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| home.as_ref().map(|home| home.join(".local/share")));
    dirs.extend(data_home.map(|dir| dir.join("fonts")));

    let data_dirs = std::env::var("XDG_DATA_DIRS")
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| String::from("/usr/local/share:/usr/share"));
    dirs.extend(
        data_dirs
            .split(':')
            .filter(|dir| !dir.is_empty())
            .map(|dir| Path::new(dir).join("fonts")),
    );
    dirs
}

/// Where one candidate font lives
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontDescriptor {
    pub path: PathBuf,
    pub face_index: u32,
}

impl FontDescriptor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            face_index: 0,
        }
    }

    pub fn with_face_index(mut self, face_index: u32) -> Self {
        self.face_index = face_index;
        self
    }

    /// Where the font file actually is, if anywhere
    pub fn locate(&self) -> Option<PathBuf> {
        self.locate_in(&system_font_dirs())
    }

    /// Like [`locate`](Self::locate), searching `dirs` for bare file names
    pub fn locate_in(&self, dirs: &[PathBuf]) -> Option<PathBuf> {
        if self.path.is_file() {
            return Some(self.path.clone());
        }
        if !self.is_bare_name() {
            return None;
        }
        let name = self.path.as_os_str();
        dirs.iter().find_map(|dir| {
            WalkDir::new(dir)
                .follow_links(true)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .find(|entry| entry.file_type().is_file() && entry.file_name() == name)
                .map(|entry| entry.into_path())
        })
    }

    fn is_bare_name(&self) -> bool {
        self.path.components().count() == 1 && self.path.is_relative()
    }

    /// Attempt to load this font for `symbol`
    pub fn probe(&self, symbol: char) -> FontProbe {
        let Some(path) = self.locate() else {
            return FontProbe::Miss(FontLoadError::FileNotFound(self.path.display().to_string()));
        };
        let font = match Font::from_file_index(&path, self.face_index) {
            Ok(font) => font,
            Err(miss) => return FontProbe::Miss(miss),
        };
        match font.glyph_id(symbol) {
            Some(glyph_id) => FontProbe::Loaded {
                font: Arc::new(font),
                glyph_id,
            },
            None => FontProbe::Miss(FontLoadError::NoCoverage(symbol)),
        }
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_index == 0 {
            write!(f, "{}", self.path.display())
        } else {
            write!(f, "{}#{}", self.path.display(), self.face_index)
        }
    }
}

impl From<&Path> for FontDescriptor {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<&str> for FontDescriptor {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// What came of trying one candidate
#[derive(Debug)]
pub enum FontProbe {
    Loaded { font: Arc<Font>, glyph_id: u32 },
    Miss(FontLoadError),
}

/// The font that will actually draw a symbol
#[derive(Debug, Clone)]
pub enum ResolvedFont {
    Outline {
        font: Arc<Font>,
        glyph_id: u32,
        descriptor: FontDescriptor,
    },
    Builtin(BuiltinFont),
}

impl ResolvedFont {
    /// Human-readable source, for logs and `info`
    pub fn source(&self) -> String {
        match self {
            ResolvedFont::Outline { descriptor, .. } => descriptor.to_string(),
            ResolvedFont::Builtin(_) => BuiltinFont::NAME.to_string(),
        }
    }

    /// Glyphs the font can draw; the built-in font counts its real glyphs
    pub fn glyph_count(&self) -> Option<u32> {
        match self {
            ResolvedFont::Outline { font, .. } => font.glyph_count(),
            ResolvedFont::Builtin(builtin) => Some(builtin.symbols().count() as u32),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, ResolvedFont::Builtin(_))
    }
}

/// Ordered list of candidate fonts, ending implicitly in [`BuiltinFont`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontChain {
    candidates: Vec<FontDescriptor>,
}

impl FontChain {
    pub fn new(candidates: Vec<FontDescriptor>) -> Self {
        Self { candidates }
    }

    /// Chain over [`DEFAULT_SEARCH_PATHS`]
    pub fn system_default() -> Self {
        Self::new(
            DEFAULT_SEARCH_PATHS
                .iter()
                .map(|&path| FontDescriptor::new(path))
                .collect(),
        )
    }

    /// A chain with no candidates always resolves to the built-in font
    pub fn builtin_only() -> Self {
        Self::default()
    }

    pub fn candidates(&self) -> &[FontDescriptor] {
        &self.candidates
    }

    /// First candidate that loads and covers `symbol`, else the built-in font
    pub fn resolve(&self, symbol: char) -> ResolvedFont {
        for descriptor in &self.candidates {
            match descriptor.probe(symbol) {
                FontProbe::Loaded { font, glyph_id } => {
                    log::debug!("font for {:?}: {} (glyph {})", symbol, descriptor, glyph_id);
                    return ResolvedFont::Outline {
                        font,
                        glyph_id,
                        descriptor: descriptor.clone(),
                    };
                },
                FontProbe::Miss(reason) => {
                    log::debug!("font candidate {} skipped: {}", descriptor, reason);
                },
            }
        }

        log::debug!(
            "no candidate font for {:?} among {}, using {}",
            symbol,
            self.candidates.len(),
            BuiltinFont::NAME
        );
        ResolvedFont::Builtin(BuiltinFont)
    }
}
