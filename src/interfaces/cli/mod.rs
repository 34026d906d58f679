/// CLI Interface Module
///
/// This module provides the command-line interface of the icon exporter.
///
/// ## Responsibilities
/// - Parse command-line arguments
/// - Initialize logging
/// - Build the export configuration and ICNS backend
/// - Run the export or inspect an existing icon file
/// - Map the outcome to a process exit code

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use crate::application::{ExportConfig, ExportError, ExportIconsUseCase, ExportReport, Outcome};
use crate::domain::{IconRenderer, ValidationError};
use crate::infrastructure::encoders::{png_dimensions, read_ico_file, EncodeError};
use crate::infrastructure::icns::{
    build_backend, read_icns_chunks, IcnsBackend, IcnsBackendKind, IcnsError, IcnsToolConfig,
};
use crate::shared::defaults::{
    DEFAULT_ASSETS_DIR, DEFAULT_ICNS_TOOL, DEFAULT_ICON_NAME, DEFAULT_ICO_SIZES,
    DEFAULT_PNG_SIZES, DEFAULT_PRODUCT, DEFAULT_TOOL_TIMEOUT_SECS,
};
use crate::shared::AssetLayout;

/// 图标导出命令行
#[derive(Parser, Debug, Clone)]
#[command(name = "icon-forge")]
#[command(version)]
#[command(about = "Procedural application icon exporter (PNG / ICO / ICNS)", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// 不带子命令时按 export 处理
    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render the icon and write PNG, ICO and ICNS files (default)
    Export(ExportArgs),

    /// Print the frames embedded in an ICO or ICNS file
    Inspect(InspectArgs),
}

/// 导出参数
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// 输出目录
    #[arg(short = 'd', long, default_value = DEFAULT_ASSETS_DIR)]
    pub assets_dir: PathBuf,

    /// 图标文件名前缀
    #[arg(short = 'n', long, default_value = DEFAULT_ICON_NAME)]
    pub name: String,

    /// SVG 源文件（默认 <assets-dir>/<name>.svg），只检查是否存在
    #[arg(short = 's', long)]
    pub source: Option<PathBuf>,

    /// 产品名称，仅用于日志
    #[arg(long, default_value = DEFAULT_PRODUCT)]
    pub product: String,

    /// 产品版本（默认本工具版本）
    #[arg(long)]
    pub product_version: Option<String>,

    /// PNG 尺寸，逗号分隔
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_PNG_SIZES)]
    pub sizes: Vec<u32>,

    /// ICO 候选尺寸，逗号分隔
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_ICO_SIZES)]
    pub ico_sizes: Vec<u32>,

    /// ICNS 后端
    #[arg(short = 'b', long, default_value = "external", value_parser = ["external", "native", "none"])]
    pub icns_backend: String,

    /// 外部 ICNS 工具命令行，例如 "python3 -m icnsutil"
    #[arg(long, default_value = DEFAULT_ICNS_TOOL)]
    pub icns_tool: String,

    /// 外部工具超时（秒）
    #[arg(long, default_value_t = DEFAULT_TOOL_TIMEOUT_SECS)]
    pub tool_timeout_secs: u64,

    /// 将导出报告写为 JSON
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// 任一阶段失败时以状态码 2 退出
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// 仅显示配置不导出（用于调试）
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// 日志级别
    #[arg(short = 'l', long, default_value = "info", value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: String,
}

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// 要检查的 .ico / .icns / .png 文件
    pub path: PathBuf,
}

/// CLI 错误类型
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Icns(#[from] IcnsError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

const EXIT_SETUP_FAILED: u8 = 1;
const EXIT_STAGE_FAILED: u8 = 2;

impl ExportArgs {
    /// 构建已校验的导出配置
    pub fn to_config(&self) -> Result<ExportConfig, CliError> {
        let layout = AssetLayout::new(&self.assets_dir, &self.name);
        let mut config = ExportConfig::new(layout)
            .with_png_sizes(&self.sizes)?
            .with_ico_sizes(&self.ico_sizes)?;

        if let Some(source) = &self.source {
            config.source = source.clone();
        }
        if let Some(version) = &self.product_version {
            config.version = version.clone();
        }
        config.product = self.product.clone();
        Ok(config)
    }

    pub fn tool_config(&self) -> IcnsToolConfig {
        IcnsToolConfig {
            command: self.icns_tool.split_whitespace().map(str::to_string).collect(),
            timeout: Duration::from_secs(self.tool_timeout_secs),
        }
    }

    pub fn backend(&self) -> Result<Option<Box<dyn IcnsBackend>>, CliError> {
        let kind: IcnsBackendKind = self.icns_backend.parse()?;
        Ok(build_backend(kind, &self.tool_config())?)
    }
}

/// Runs the CLI application
pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Export(cli.export)) {
        Command::Export(args) => {
            init_logging(&args.log_level);
            ExitCode::from(run_export(&args).await)
        }
        Command::Inspect(args) => {
            init_logging("warn");
            match inspect(&args.path) {
                Ok(lines) => {
                    for line in lines {
                        println!("{}", line);
                    }
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// 执行导出，返回进程退出码
pub async fn run_export(args: &ExportArgs) -> u8 {
    tracing::debug!("配置: {:?}", args);

    let (config, backend) = match args.to_config().and_then(|c| Ok((c, args.backend()?))) {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!("{}", e);
            return EXIT_SETUP_FAILED;
        }
    };

    print_banner(&config, args);

    // 如果是dry-run模式，仅显示配置
    if args.dry_run {
        println!("\nDry-run 模式 - 不写任何文件");
        return 0;
    }

    let use_case = ExportIconsUseCase::new(config, IconRenderer::new(), backend);
    let report = match use_case.execute().await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("{}", e);
            return EXIT_SETUP_FAILED;
        }
    };

    print_summary(&report);

    if let Some(path) = &args.report {
        if let Err(e) = report.write_json(path).map_err(ExportError::from) {
            tracing::error!("{}", e);
            return EXIT_SETUP_FAILED;
        }
        tracing::info!("Report written to {}", path.display());
    }

    exit_status(&report, args.strict)
}

/// 根据报告决定退出码
pub fn exit_status(report: &ExportReport, strict: bool) -> u8 {
    if strict && report.has_failures() {
        EXIT_STAGE_FAILED
    } else {
        0
    }
}

/// 检查已有图标文件，返回可打印的描述行
pub fn inspect(path: &Path) -> Result<Vec<String>, CliError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let lines: Vec<String> = match ext.as_str() {
        "ico" => read_ico_file(path)?
            .iter()
            .map(|e| format!("{}x{} {}bpp {} bytes", e.width, e.height, e.bits_per_pixel, e.bytes))
            .collect(),
        "icns" => {
            let bytes = std::fs::read(path).map_err(EncodeError::from)?;
            read_icns_chunks(&bytes)?
                .iter()
                .map(|c| format!("{} {} bytes", c.ostype, c.data_len))
                .collect()
        }
        _ => {
            let (w, h) = png_dimensions(path)?;
            vec![format!("{}x{}", w, h)]
        }
    };
    Ok(lines)
}

fn print_banner(config: &ExportConfig, args: &ExportArgs) {
    let sizes: Vec<String> = config.png_sizes.iter().map(u32::to_string).collect();
    let ico: Vec<String> = config.ico_candidates().iter().map(u32::to_string).collect();

    println!("========================================");
    println!("  {} v{}", config.product, config.version);
    println!("========================================");
    println!("图标名称:     {}", config.layout.name());
    println!("源文件:       {}", config.source.display());
    println!("输出目录:     {}", config.layout.dir().display());
    println!("PNG 尺寸:     {}", sizes.join(", "));
    println!("ICO 尺寸:     {}", ico.join(", "));
    println!("ICNS 后端:    {}", args.icns_backend);
    println!("日志级别:     {}", args.log_level);
    println!("========================================");
}

fn print_summary(report: &ExportReport) {
    let (generated, skipped, failed) = report.counts();
    println!("生成 {}，跳过 {}，失败 {}", generated, skipped, failed);

    for artifact in &report.artifacts {
        match &artifact.outcome {
            Outcome::Generated { path } => println!("  ok    {}", path.display()),
            Outcome::Skipped { reason } => println!("  skip  {:?}: {}", artifact.kind, reason),
            Outcome::Failed { error } => println!("  fail  {:?}: {}", artifact.kind, error),
        }
    }
}

/// 初始化日志系统
fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
