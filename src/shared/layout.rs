/// Asset Layout
///
/// Maps an output directory and an icon base name to the concrete file
/// paths of every exported artefact:
///
/// ```text
/// <dir>/<name>.svg        source logo (existence check only)
/// <dir>/<name>_<size>.png one per rendered size
/// <dir>/<name>.ico
/// <dir>/<name>.icns
/// ```

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    dir: PathBuf,
    name: String,
}

impl AssetLayout {
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn svg_path(&self) -> PathBuf {
        self.dir.join(format!("{}.svg", self.name))
    }

    pub fn png_path(&self, size: u32) -> PathBuf {
        self.dir.join(format!("{}_{}.png", self.name, size))
    }

    pub fn ico_path(&self) -> PathBuf {
        self.dir.join(format!("{}.ico", self.name))
    }

    pub fn icns_path(&self) -> PathBuf {
        self.dir.join(format!("{}.icns", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = AssetLayout::new("assets/icons", "killer");
        assert_eq!(layout.name(), "killer");
        assert_eq!(layout.svg_path(), Path::new("assets/icons/killer.svg"));
        assert_eq!(layout.png_path(512), Path::new("assets/icons/killer_512.png"));
        assert_eq!(layout.ico_path(), Path::new("assets/icons/killer.ico"));
        assert_eq!(layout.icns_path(), Path::new("assets/icons/killer.icns"));
    }
}
