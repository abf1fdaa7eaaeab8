use crate::fs;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub const ALL: [ShaderStage; 2] = [ShaderStage::Vertex, ShaderStage::Fragment];

    pub fn extension(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vert",
            ShaderStage::Fragment => "frag",
        }
    }

    /// Stage of a shader source file, judged by its extension alone.
    ///
    /// A bare `.vert` or `.frag` file name counts as that extension.
    pub fn from_path(path: &Path, case: ExtensionCase) -> Option<Self> {
        let name = path.file_name().and_then(OsStr::to_str)?;
        let (_, ext) = name.rsplit_once('.')?;
        Self::ALL.into_iter().find(|stage| case.matches(ext, stage.extension()))
    }
}

/// How shader file extensions are compared.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionCase {
    #[default]
    Insensitive,
    Sensitive,
}

impl ExtensionCase {
    fn matches(self, ext: &str, expected: &str) -> bool {
        match self {
            ExtensionCase::Insensitive => ext.eq_ignore_ascii_case(expected),
            ExtensionCase::Sensitive => ext == expected,
        }
    }
}

/// Ordered list of shader source files to hand to the compiler.
///
/// Every entry has a `vert` or `frag` extension under the case policy it was
/// collected with. Entries keep the order of the directory walk and are not
/// deduplicated.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileList {
    files: Vec<PathBuf>,
}

impl FileList {
    /// Walks `root` and keeps every `.vert` and `.frag` file.
    ///
    /// `root` should be absolute so that the collected paths are too.
    pub fn collect(root: &Path, case: ExtensionCase, sort: bool) -> Self {
        log::debug!("collecting shaders below {}", root.display());
        if !root.is_dir() {
            log::warn!("Shader root {} is not a readable directory", root.display());
            return Self::default();
        }

        let files = fs::walk_files(root, sort, |path| match ShaderStage::from_path(path, case) {
            Some(stage) => {
                log::debug!("found {stage:?} shader {}", path.display());
                true
            }
            None => false,
        });
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.files.iter()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.files
    }
}

impl From<Vec<PathBuf>> for FileList {
    fn from(files: Vec<PathBuf>) -> Self {
        Self { files }
    }
}
