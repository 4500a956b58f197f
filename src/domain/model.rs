use alloy::primitives::{Address, Bytes, TxHash};

/// 可部署的合約模板：名稱加上編譯後的 creation bytecode
#[derive(Debug, Clone)]
pub struct ContractFactory {
    pub name: String,
    /// e.g. `contracts/Social.sol`
    pub source_name: Option<String>,
    pub abi: serde_json::Value,
    pub bytecode: Bytes,
}

impl ContractFactory {
    pub fn fully_qualified_name(&self) -> String {
        match &self.source_name {
            Some(source) => format!("{}:{}", source, self.name),
            None => self.name.clone(),
        }
    }
}

/// 已送出、尚未確認的部署交易
#[derive(Debug, Clone)]
pub struct PendingDeployment {
    pub contract_name: String,
    pub tx_hash: TxHash,
    pub deployer: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedContract {
    pub contract_name: String,
    pub address: Address,
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
}
