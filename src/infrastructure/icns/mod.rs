/// ICNS 后端模块
///
/// 提供统一的 ICNS 生成抽象，支持多种后端：
/// - External: 调用外部命令行工具（默认 `icnsutil`）
/// - Native: 直接写 ICNS 容器，无外部依赖
/// - None: 总是跳过

pub mod external;
pub mod native;

pub use external::ExternalIcnsTool;
pub use native::{read_icns_chunks, IcnsChunk, NativeIcnsWriter};

use async_trait::async_trait;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::encoders::EncodeError;

/// ICNS 后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IcnsBackendKind {
    /// 外部工具 (默认)
    External,
    /// 内置写入器
    Native,
    /// 不生成 ICNS
    None,
}

impl FromStr for IcnsBackendKind {
    type Err = IcnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "external" => Ok(Self::External),
            "native" => Ok(Self::Native),
            "none" => Ok(Self::None),
            other => Err(IcnsError::UnknownBackend(other.to_string())),
        }
    }
}

/// 一次 ICNS 生成请求
#[derive(Debug, Clone)]
pub struct IcnsRequest {
    /// 外部工具使用的单张源图（512 PNG）
    pub source: PathBuf,
    /// 所有已导出的 PNG，(尺寸, 路径)
    pub frames: Vec<(u32, PathBuf)>,
    /// 输出路径
    pub output: PathBuf,
}

/// ICNS 后端 trait
#[async_trait]
pub trait IcnsBackend: Send + Sync {
    /// 后端名称，用于日志
    fn name(&self) -> &str;

    /// 后端当前是否可用
    ///
    /// 不可用时导出流程跳过 ICNS 阶段，而不是报错。
    async fn is_available(&self) -> bool;

    /// 生成 ICNS 文件
    async fn create(&self, request: &IcnsRequest) -> Result<(), IcnsError>;
}

/// 外部工具配置
#[derive(Debug, Clone)]
pub struct IcnsToolConfig {
    /// 命令行，首个元素是可执行文件，其余是前置参数
    /// （例如 `python3 -m icnsutil`）
    pub command: Vec<String>,

    /// 单次调用超时
    pub timeout: Duration,
}

impl Default for IcnsToolConfig {
    fn default() -> Self {
        Self {
            command: vec![crate::shared::defaults::DEFAULT_ICNS_TOOL.to_string()],
            timeout: Duration::from_secs(crate::shared::defaults::DEFAULT_TOOL_TIMEOUT_SECS),
        }
    }
}

/// 按类型创建后端，`None` 类型返回 `Ok(None)`
pub fn build_backend(
    kind: IcnsBackendKind,
    tool: &IcnsToolConfig,
) -> Result<Option<Box<dyn IcnsBackend>>, IcnsError> {
    let backend = match kind {
        IcnsBackendKind::External => {
            Box::new(ExternalIcnsTool::from_config(tool)?) as Box<dyn IcnsBackend>
        }
        IcnsBackendKind::Native => Box::new(NativeIcnsWriter::new()) as Box<dyn IcnsBackend>,
        IcnsBackendKind::None => return Ok(None),
    };
    Ok(Some(backend))
}

/// ICNS 错误类型
#[derive(Debug, thiserror::Error)]
pub enum IcnsError {
    #[error("Unknown ICNS backend: {0}")]
    UnknownBackend(String),

    #[error("Empty ICNS tool command")]
    EmptyCommand,

    #[error("{0} not available")]
    Unavailable(String),

    #[error("{program} exited with status {code:?}: {stderr}")]
    ToolFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("{program} timed out after {secs}s")]
    Timeout { program: String, secs: u64 },

    #[error("No frames usable for ICNS")]
    NoFrames,

    #[error("Malformed ICNS: {0}")]
    Malformed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_kind_parse() {
        assert_eq!("external".parse::<IcnsBackendKind>().unwrap(), IcnsBackendKind::External);
        assert_eq!("native".parse::<IcnsBackendKind>().unwrap(), IcnsBackendKind::Native);
        assert_eq!("none".parse::<IcnsBackendKind>().unwrap(), IcnsBackendKind::None);
        assert!(matches!(
            "iconutil".parse::<IcnsBackendKind>(),
            Err(IcnsError::UnknownBackend(_))
        ));
    }

    #[test]
    fn test_build_backend() {
        let tool = IcnsToolConfig::default();

        let external = build_backend(IcnsBackendKind::External, &tool).unwrap().unwrap();
        assert_eq!(external.name(), "icnsutil");

        let native = build_backend(IcnsBackendKind::Native, &tool).unwrap().unwrap();
        assert_eq!(native.name(), "native");

        assert!(build_backend(IcnsBackendKind::None, &tool).unwrap().is_none());
    }

    #[test]
    fn test_build_external_with_empty_command() {
        let tool = IcnsToolConfig {
            command: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(
            build_backend(IcnsBackendKind::External, &tool),
            Err(IcnsError::EmptyCommand)
        ));
    }
}
