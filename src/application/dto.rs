//! Export Report DTOs
//!
//! 导出结果汇总，CLI 据此打印摘要并可选写成 JSON：
//!
//! ```json
//! {
//!   "product": "KillerTools",
//!   "version": "0.1.0",
//!   "source": "assets/icons/killer.svg",
//!   "artifacts": [
//!     { "kind": "png", "size": 16, "status": "generated", "path": "assets/icons/killer_16.png" },
//!     { "kind": "ico", "frames": [16, 32, 64, 128, 256], "status": "generated", "path": "assets/icons/killer.ico" },
//!     { "kind": "icns", "status": "skipped", "reason": "icnsutil not available" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 产物类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Png,
    Ico,
    Icns,
}

/// 单个产物的结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Generated { path: PathBuf },
    Skipped { reason: String },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactReport {
    pub kind: ArtifactKind,
    /// PNG 的边长
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// ICO 嵌入的帧尺寸
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<u32>,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl ArtifactReport {
    pub fn new(kind: ArtifactKind, outcome: Outcome) -> Self {
        Self {
            kind,
            size: None,
            frames: Vec::new(),
            outcome,
        }
    }

    pub fn png(size: u32, outcome: Outcome) -> Self {
        Self {
            size: Some(size),
            ..Self::new(ArtifactKind::Png, outcome)
        }
    }

    pub fn with_frames(mut self, frames: Vec<u32>) -> Self {
        self.frames = frames;
        self
    }

    pub fn is_generated(&self) -> bool {
        matches!(self.outcome, Outcome::Generated { .. })
    }
}

/// 一次导出的完整报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportReport {
    pub product: String,
    pub version: String,
    pub source: PathBuf,
    pub artifacts: Vec<ArtifactReport>,
}

impl ExportReport {
    pub fn new(product: impl Into<String>, version: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            product: product.into(),
            version: version.into(),
            source: source.into(),
            artifacts: Vec::new(),
        }
    }

    pub fn push(&mut self, artifact: ArtifactReport) {
        self.artifacts.push(artifact);
    }

    pub fn of_kind(&self, kind: ArtifactKind) -> impl Iterator<Item = &ArtifactReport> {
        self.artifacts.iter().filter(move |a| a.kind == kind)
    }

    /// 本次成功生成的 PNG，(尺寸, 路径)
    pub fn generated_pngs(&self) -> Vec<(u32, PathBuf)> {
        self.of_kind(ArtifactKind::Png)
            .filter_map(|a| match (&a.outcome, a.size) {
                (Outcome::Generated { path }, Some(size)) => Some((size, path.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn has_failures(&self) -> bool {
        self.artifacts
            .iter()
            .any(|a| matches!(a.outcome, Outcome::Failed { .. }))
    }

    /// (生成, 跳过, 失败)
    pub fn counts(&self) -> (usize, usize, usize) {
        self.artifacts.iter().fold((0, 0, 0), |(g, s, f), a| match a.outcome {
            Outcome::Generated { .. } => (g + 1, s, f),
            Outcome::Skipped { .. } => (g, s + 1, f),
            Outcome::Failed { .. } => (g, s, f + 1),
        })
    }

    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// 报告写出错误
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
