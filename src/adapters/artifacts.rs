use crate::core::{ArtifactSource, ContractFactory};
use crate::utils::error::{DeployError, Result};
use alloy::primitives::{hex, Bytes};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const BUILD_INFO_DIR: &str = "build-info";

/// 編譯輸出的合約 artifact (Hardhat 或 Foundry 格式)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactFile {
    contract_name: Option<String>,
    source_name: Option<String>,
    #[serde(default)]
    abi: serde_json::Value,
    bytecode: Option<BytecodeField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BytecodeField {
    Hex(String),
    Object { object: String },
}

impl BytecodeField {
    fn as_hex(&self) -> &str {
        match self {
            BytecodeField::Hex(hex) => hex,
            BytecodeField::Object { object } => object,
        }
    }
}

/// Looks up contract templates in a compiled artifacts directory.
#[derive(Debug, Clone)]
pub struct HardhatArtifacts {
    root: PathBuf,
}

impl HardhatArtifacts {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn locate(&self, name: &str) -> Result<PathBuf> {
        if !self.root.is_dir() {
            return Err(DeployError::template_not_found(
                name,
                format!(
                    "artifacts directory '{}' does not exist",
                    self.root.display()
                ),
            ));
        }

        // 完整名稱 `contracts/Foo.sol:Foo` 直接對應到檔案路徑
        if let Some((source, contract)) = name.rsplit_once(':') {
            let path = self.root.join(source).join(format!("{}.json", contract));
            return if path.is_file() {
                Ok(path)
            } else {
                Err(DeployError::template_not_found(
                    name,
                    format!("no artifact at '{}'", path.display()),
                ))
            };
        }

        let file_name = format!("{}.json", name);
        let mut matches = Vec::new();
        collect_matches(&self.root, &file_name, &mut matches).map_err(|e| {
            DeployError::template_not_found(
                name,
                format!("cannot scan '{}': {}", self.root.display(), e),
            )
        })?;

        match matches.len() {
            0 => Err(DeployError::template_not_found(
                name,
                format!("no artifact named '{}' under '{}'", file_name, self.root.display()),
            )),
            1 => Ok(matches.remove(0)),
            _ => {
                matches.sort();
                let candidates = matches
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                Err(DeployError::template_not_found(
                    name,
                    format!(
                        "multiple artifacts match, use a fully qualified name: {}",
                        candidates
                    ),
                ))
            }
        }
    }
}

fn collect_matches(dir: &Path, file_name: &str, matches: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            if entry.file_name() == BUILD_INFO_DIR {
                continue;
            }
            collect_matches(&path, file_name, matches)?;
        } else if entry.file_name().to_str() == Some(file_name) {
            matches.push(path);
        }
    }
    Ok(())
}

fn decode_bytecode(name: &str, raw: &str) -> Result<Bytes> {
    let hex_str = raw.strip_prefix("0x").unwrap_or(raw);

    if hex_str.is_empty() {
        return Err(DeployError::template_not_found(
            name,
            "artifact has no bytecode (abstract contract or interface)",
        ));
    }

    if hex_str.contains("__") {
        return Err(DeployError::template_not_found(
            name,
            "bytecode contains unlinked library placeholders",
        ));
    }

    hex::decode(hex_str)
        .map(Bytes::from)
        .map_err(|e| DeployError::template_not_found(name, format!("invalid bytecode: {}", e)))
}

impl ArtifactSource for HardhatArtifacts {
    fn contract_factory(&self, name: &str) -> Result<ContractFactory> {
        let path = self.locate(name)?;
        tracing::debug!("Reading artifact {}", path.display());

        let content = fs::read(&path).map_err(|e| {
            DeployError::template_not_found(
                name,
                format!("cannot read artifact '{}': {}", path.display(), e),
            )
        })?;
        let artifact: ArtifactFile = serde_json::from_slice(&content).map_err(|e| {
            DeployError::template_not_found(
                name,
                format!("malformed artifact '{}': {}", path.display(), e),
            )
        })?;

        let raw = artifact.bytecode.as_ref().map(BytecodeField::as_hex).unwrap_or("");
        let bytecode = decode_bytecode(name, raw)?;

        let bare_name = name.rsplit_once(':').map(|(_, c)| c).unwrap_or(name);

        Ok(ContractFactory {
            name: artifact.contract_name.unwrap_or_else(|| bare_name.to_string()),
            source_name: artifact.source_name,
            abi: artifact.abi,
            bytecode,
        })
    }
}
