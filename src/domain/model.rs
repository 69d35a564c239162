use std::fmt;
use std::path::PathBuf;

/// One of the five fixed palette slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteRole {
    Main,
    Bright,
    Bold,
    Hover,
    Active,
}

impl PaletteRole {
    pub const ALL: [PaletteRole; 5] = [
        PaletteRole::Main,
        PaletteRole::Bright,
        PaletteRole::Bold,
        PaletteRole::Hover,
        PaletteRole::Active,
    ];

    /// Blend ratio applied to the accent color. Positive lightens, negative darkens.
    pub fn ratio(self) -> f64 {
        match self {
            PaletteRole::Main => 0.0,
            PaletteRole::Bright => 0.35,
            PaletteRole::Bold => -0.18,
            PaletteRole::Hover => 0.55,
            PaletteRole::Active => -0.35,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteRole::Main => "main",
            PaletteRole::Bright => "bright",
            PaletteRole::Bold => "bold",
            PaletteRole::Hover => "hover",
            PaletteRole::Active => "active",
        }
    }
}

impl fmt::Display for PaletteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Colors derived from a single accent, each a lowercase `#rrggbb` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub main: String,
    pub bright: String,
    pub bold: String,
    pub hover: String,
    pub active: String,
}

impl Palette {
    pub fn get(&self, role: PaletteRole) -> &str {
        match role {
            PaletteRole::Main => &self.main,
            PaletteRole::Bright => &self.bright,
            PaletteRole::Bold => &self.bold,
            PaletteRole::Hover => &self.hover,
            PaletteRole::Active => &self.active,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BundleOutcome {
    pub searched: Vec<PathBuf>,
    pub patched: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct BrandOutcome {
    pub candidates: usize,
    pub branded: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

#[derive(Debug, Default)]
pub struct RecolorOutcome {
    pub target: String,
    pub replacement: String,
    pub touched: Vec<PathBuf>,
    pub occurrences: usize,
    pub failures: Vec<FileFailure>,
}

#[derive(Debug)]
pub struct RunSummary {
    pub bundle: BundleOutcome,
    pub brand: BrandOutcome,
    pub recolor: RecolorOutcome,
}

impl RunSummary {
    /// Number of soft failures collected across the non-fatal passes.
    pub fn soft_failures(&self) -> usize {
        self.brand.failures.len() + self.recolor.failures.len()
    }
}

pub fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
