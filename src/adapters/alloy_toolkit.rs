use crate::config::NetworkSettings;
use crate::core::{
    ArtifactSource, ContractFactory, DeployedContract, DeploymentToolkit, PendingDeployment,
};
use crate::utils::error::{DeployError, Result};
use alloy::{
    network::{EthereumWallet, TransactionBuilder},
    primitives::Address,
    providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
};
use async_trait::async_trait;
use url::Url;

/// [`DeploymentToolkit`] over a JSON-RPC node, with templates coming from an
/// [`ArtifactSource`].
pub struct AlloyToolkit<A: ArtifactSource> {
    provider: DynProvider,
    artifacts: A,
    signer: Option<Address>,
    settings: NetworkSettings,
}

impl<A: ArtifactSource> AlloyToolkit<A> {
    /// Builds the provider. No request is sent until the first deployment.
    pub fn connect(settings: NetworkSettings, artifacts: A) -> Result<Self> {
        let url = Url::parse(&settings.url).map_err(|e| DeployError::InvalidConfigValueError {
            field: format!("networks.{}.url", settings.name),
            value: settings.url.clone(),
            reason: e.to_string(),
        })?;

        let (provider, signer) = match settings.accounts.first() {
            Some(key) => {
                let signer: PrivateKeySigner =
                    key.parse().map_err(|_| DeployError::InvalidConfigValueError {
                        field: format!("networks.{}.accounts[0]", settings.name),
                        value: "<redacted>".to_string(),
                        reason: "not a valid secp256k1 private key".to_string(),
                    })?;
                let address = signer.address();
                let provider = ProviderBuilder::new()
                    .wallet(EthereumWallet::from(signer))
                    .connect_http(url)
                    .erased();
                (provider, Some(address))
            }
            None => (ProviderBuilder::new().connect_http(url).erased(), None),
        };

        tracing::debug!(
            network = %settings.name,
            signer = ?signer,
            "Provider ready"
        );

        Ok(Self {
            provider,
            artifacts,
            signer,
            settings,
        })
    }

    /// 有設定私鑰就用它，否則用節點的第一個解鎖帳號
    async fn deployer(&self, contract: &str) -> Result<Address> {
        if let Some(address) = self.signer {
            return Ok(address);
        }

        let accounts = self
            .provider
            .get_accounts()
            .await
            .map_err(|e| DeployError::submission(contract, format!("eth_accounts failed: {}", e)))?;

        accounts.first().copied().ok_or_else(|| {
            DeployError::submission(
                contract,
                format!(
                    "network '{}' has no unlocked accounts and none are configured",
                    self.settings.name
                ),
            )
        })
    }

    async fn check_chain_id(&self, contract: &str) -> Result<()> {
        let Some(expected) = self.settings.chain_id else {
            return Ok(());
        };

        let actual = self
            .provider
            .get_chain_id()
            .await
            .map_err(|e| DeployError::submission(contract, format!("eth_chainId failed: {}", e)))?;

        if actual != expected {
            return Err(DeployError::submission(
                contract,
                format!(
                    "network '{}' expects chain id {} but the node reports {}",
                    self.settings.name, expected, actual
                ),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl<A: ArtifactSource> DeploymentToolkit for AlloyToolkit<A> {
    async fn contract_factory(&self, name: &str) -> Result<ContractFactory> {
        self.artifacts.contract_factory(name)
    }

    async fn deploy(&self, factory: ContractFactory) -> Result<PendingDeployment> {
        let contract = factory.name;
        self.check_chain_id(&contract).await?;
        let deployer = self.deployer(&contract).await?;

        let mut tx = TransactionRequest::default()
            .with_from(deployer)
            .with_deploy_code(factory.bytecode);
        if let Some(gas_limit) = self.settings.gas_limit {
            tx = tx.with_gas_limit(gas_limit);
        }
        if let Some(gas_price) = self.settings.gas_price {
            tx = tx.with_gas_price(gas_price);
        }

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| DeployError::submission(&contract, e.to_string()))?;

        Ok(PendingDeployment {
            contract_name: contract,
            tx_hash: *pending.tx_hash(),
            deployer,
        })
    }

    async fn wait_deployed(&self, pending: PendingDeployment) -> Result<DeployedContract> {
        let contract = pending.contract_name;
        tracing::info!(
            "⏳ Waiting for {} confirmation(s) of {}",
            self.settings.confirmations,
            pending.tx_hash
        );

        let receipt = PendingTransactionBuilder::new(self.provider.root().clone(), pending.tx_hash)
            .with_required_confirmations(self.settings.confirmations)
            .with_timeout(self.settings.timeout)
            .get_receipt()
            .await
            .map_err(|e| DeployError::confirmation(&contract, e.to_string()))?;

        if !receipt.status() {
            return Err(DeployError::confirmation(
                &contract,
                format!("transaction {} reverted", receipt.transaction_hash),
            ));
        }

        let address = receipt.contract_address.ok_or_else(|| {
            DeployError::confirmation(
                &contract,
                format!(
                    "receipt of {} carries no contract address",
                    receipt.transaction_hash
                ),
            )
        })?;

        Ok(DeployedContract {
            contract_name: contract,
            address,
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
        })
    }
}
