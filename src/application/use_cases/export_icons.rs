/// Export Icons Use Case
///
/// This use case renders the application icon at every requested size and
/// packages the results into the platform icon formats.
///
/// ## Workflow
/// 1. Check that the source logo exists (it is never parsed)
/// 2. Render and save one PNG per size
/// 3. Pack the eligible PNGs into an ICO
/// 4. Hand the 512 PNG to the ICNS backend, if one is configured and available
///
/// Only step 1 can abort the run. Every later stage records its outcome in
/// the `ExportReport` and the next stage runs regardless.
///
/// ## Example
/// ```rust,ignore
/// use icon_forge::application::{ExportConfig, ExportIconsUseCase};
/// use icon_forge::domain::IconRenderer;
///
/// let use_case = ExportIconsUseCase::new(config, IconRenderer::new(), None);
/// let report = use_case.execute().await?;
/// ```

use std::path::PathBuf;

use crate::application::dto::{ArtifactKind, ArtifactReport, ExportReport, Outcome, ReportError};
use crate::domain::validation::{SizeList, SizeValidator, ValidationError};
use crate::domain::IconRenderer;
use crate::infrastructure::encoders::{save_png, write_ico};
use crate::infrastructure::icns::{IcnsBackend, IcnsError, IcnsRequest};
use crate::shared::defaults::{
    DEFAULT_ICO_SIZES, DEFAULT_PNG_SIZES, DEFAULT_PRODUCT, ICNS_SOURCE_SIZE,
};
use crate::shared::AssetLayout;

/// 导出配置（已校验）
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub layout: AssetLayout,
    /// SVG 源文件，只检查是否存在
    pub source: PathBuf,
    pub product: String,
    pub version: String,
    pub png_sizes: SizeList,
    pub ico_sizes: SizeList,
}

impl ExportConfig {
    /// 使用默认尺寸，源文件为 `<dir>/<name>.svg`
    pub fn new(layout: AssetLayout) -> Self {
        Self {
            source: layout.svg_path(),
            layout,
            product: DEFAULT_PRODUCT.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            png_sizes: SizeList::from_slice(&DEFAULT_PNG_SIZES),
            ico_sizes: SizeList::from_slice(&DEFAULT_ICO_SIZES),
        }
    }

    pub fn with_png_sizes(mut self, sizes: &[u32]) -> Result<Self, ValidationError> {
        self.png_sizes = SizeValidator::new().validate(sizes)?;
        Ok(self)
    }

    pub fn with_ico_sizes(mut self, sizes: &[u32]) -> Result<Self, ValidationError> {
        self.ico_sizes = SizeValidator::for_ico().validate(sizes)?;
        Ok(self)
    }

    /// ICO 实际可用的尺寸：同时属于 PNG 尺寸
    pub fn ico_candidates(&self) -> SizeList {
        self.ico_sizes
            .iter()
            .copied()
            .filter(|size| self.png_sizes.contains(size))
            .collect()
    }
}

/// Error types for the export use case
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("SVG file not found at {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to write report: {0}")]
    Report(#[from] ReportError),
}

pub struct ExportIconsUseCase {
    config: ExportConfig,
    renderer: IconRenderer,
    icns: Option<Box<dyn IcnsBackend>>,
}

impl ExportIconsUseCase {
    pub fn new(
        config: ExportConfig,
        renderer: IconRenderer,
        icns: Option<Box<dyn IcnsBackend>>,
    ) -> Self {
        Self {
            config,
            renderer,
            icns,
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Executes the export
    ///
    /// # Returns
    /// * `Ok(ExportReport)` once every stage has run, even if some failed
    /// * `Err(ExportError::SourceMissing)` if the source logo is absent
    pub async fn execute(&self) -> Result<ExportReport, ExportError> {
        let source = &self.config.source;
        if !source.exists() {
            tracing::error!("Error: SVG file not found at {}", source.display());
            return Err(ExportError::SourceMissing(source.clone()));
        }

        tracing::info!("Exporting icons from {}", source.display());
        tracing::info!("{} v{}", self.config.product, self.config.version);

        let mut report = ExportReport::new(
            self.config.product.clone(),
            self.config.version.clone(),
            source.clone(),
        );

        self.export_pngs(&mut report);
        self.export_ico(&mut report);
        self.export_icns(&mut report).await;

        let (generated, skipped, failed) = report.counts();
        tracing::info!(generated, skipped, failed, "Icon generation complete!");
        Ok(report)
    }

    fn export_pngs(&self, report: &mut ExportReport) {
        for &size in &self.config.png_sizes {
            let path = self.config.layout.png_path(size);
            let img = self.renderer.render(size);

            let outcome = match save_png(&img, &path) {
                Ok(()) => {
                    tracing::info!("Generated {}", path.display());
                    Outcome::Generated { path }
                }
                Err(e) => {
                    tracing::error!("Error generating {}: {}", path.display(), e);
                    Outcome::Failed { error: e.to_string() }
                }
            };
            report.push(ArtifactReport::png(size, outcome));
        }
    }

    fn export_ico(&self, report: &mut ExportReport) {
        let frames: Vec<(u32, PathBuf)> = self
            .config
            .ico_candidates()
            .into_iter()
            .map(|size| (size, self.config.layout.png_path(size)))
            .filter(|(_, path)| path.is_file())
            .collect();

        if frames.is_empty() {
            tracing::warn!("No PNG frames available, skipping ICO generation");
            report.push(ArtifactReport::new(
                ArtifactKind::Ico,
                Outcome::Skipped {
                    reason: "no PNG frames available".to_string(),
                },
            ));
            return;
        }

        let ico_path = self.config.layout.ico_path();
        let paths: Vec<PathBuf> = frames.iter().map(|(_, p)| p.clone()).collect();

        let artifact = match write_ico(&paths, &ico_path) {
            Ok(sizes) => {
                tracing::info!("Generated {}", ico_path.display());
                ArtifactReport::new(ArtifactKind::Ico, Outcome::Generated { path: ico_path })
                    .with_frames(sizes)
            }
            Err(e) => {
                tracing::error!("Error generating ICO: {}", e);
                ArtifactReport::new(ArtifactKind::Ico, Outcome::Failed { error: e.to_string() })
            }
        };
        report.push(artifact);
    }

    async fn export_icns(&self, report: &mut ExportReport) {
        let outcome = self.icns_outcome(report).await;
        report.push(ArtifactReport::new(ArtifactKind::Icns, outcome));
    }

    async fn icns_outcome(&self, report: &ExportReport) -> Outcome {
        let Some(backend) = self.icns.as_deref() else {
            tracing::info!("ICNS backend disabled, skipping ICNS generation");
            return Outcome::Skipped {
                reason: "ICNS backend disabled".to_string(),
            };
        };

        if !backend.is_available().await {
            tracing::info!("{} not available, skipping ICNS generation", backend.name());
            return Outcome::Skipped {
                reason: format!("{} not available", backend.name()),
            };
        }

        let source = self.config.layout.png_path(ICNS_SOURCE_SIZE);
        if !source.exists() {
            tracing::warn!("{} not found, skipping ICNS generation", source.display());
            return Outcome::Skipped {
                reason: format!("{} not found", source.display()),
            };
        }

        let request = IcnsRequest {
            source,
            frames: report.generated_pngs(),
            output: self.config.layout.icns_path(),
        };

        match backend.create(&request).await {
            Ok(()) => {
                tracing::info!("Generated {}", request.output.display());
                Outcome::Generated { path: request.output }
            }
            Err(IcnsError::Unavailable(program)) => {
                tracing::info!("{} not available, skipping ICNS generation", program);
                Outcome::Skipped {
                    reason: format!("{} not available", program),
                }
            }
            Err(e) => {
                tracing::error!("Error generating ICNS: {}", e);
                Outcome::Failed { error: e.to_string() }
            }
        }
    }
}
