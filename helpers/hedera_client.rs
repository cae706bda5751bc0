//! [`LedgerClient`] backed by the Hedera SDK

use std::str::FromStr;

use async_trait::async_trait;
use hedera::{
    AccountId, Client, ContractCreateTransaction, ContractFunctionParameters,
    FileCreateTransaction, FileId, Hbar, PrivateKey,
};
use tracing::debug;

use crate::{
    config::{ClientSettings, Network, OperatorCredential},
    error::{ConfigurationError, TransactionError, TransactionKind},
    ledger::{
        ConstructorParam, ContractCreateRequest, ContractIdentifier, FileCreateRequest,
        FileIdentifier, LedgerClient, LedgerConnector,
    },
};

/// Connects to a public Hedera network
#[derive(Debug, Clone, Copy, Default)]
pub struct HederaConnector;

pub struct HederaClient {
    client: Client,
    operator_key: PrivateKey,
}

impl LedgerConnector for HederaConnector {
    type Client = HederaClient;

    fn connect(
        &self,
        operator: &OperatorCredential,
        settings: &ClientSettings,
    ) -> Result<HederaClient, ConfigurationError> {
        let account_id = AccountId::from_str(&operator.account_id).map_err(|e| {
            ConfigurationError::InvalidAccountId {
                account_id: operator.account_id.clone(),
                reason: e.to_string(),
            }
        })?;
        let operator_key = PrivateKey::from_str_ecdsa(&operator.private_key)
            .map_err(|e| ConfigurationError::InvalidPrivateKey(e.to_string()))?;

        let client = match settings.network {
            Network::Testnet => Client::for_testnet(),
            Network::Previewnet => Client::for_previewnet(),
            Network::Mainnet => Client::for_mainnet(),
        };
        // The operator pays the fees of every transaction made with this client
        client.set_operator(account_id, operator_key.clone());
        client.set_default_max_transaction_fee(Hbar::new(settings.max_transaction_fee_hbar));
        client.set_default_max_query_payment(Hbar::new(settings.max_query_payment_hbar));

        debug!(network = %settings.network, account = %operator.account_id, "hedera client ready");
        Ok(HederaClient {
            client,
            operator_key,
        })
    }
}

fn transaction_error(kind: TransactionKind, error: hedera::Error) -> TransactionError {
    match error {
        hedera::Error::TransactionPreCheckStatus { status, .. }
        | hedera::Error::ReceiptStatus { status, .. } => TransactionError::Rejected {
            kind,
            status: format!("{status:?}"),
        },
        other => TransactionError::Failed {
            kind,
            message: other.to_string(),
        },
    }
}

#[async_trait]
impl LedgerClient for HederaClient {
    type Signer = PrivateKey;

    fn operator_signer(&self) -> &PrivateKey {
        &self.operator_key
    }

    async fn submit_file(
        &self,
        request: FileCreateRequest,
        signer: &PrivateKey,
    ) -> Result<FileIdentifier, TransactionError> {
        let kind = TransactionKind::FileCreate;

        // Freeze before signing: the signature covers the frozen body bytes
        let mut transaction = FileCreateTransaction::new();
        transaction
            .contents(request.contents)
            .freeze_with(&self.client)
            .map_err(|e| transaction_error(kind, e))?
            .sign(signer.clone());

        let response = transaction
            .execute(&self.client)
            .await
            .map_err(|e| transaction_error(kind, e))?;
        let receipt = response
            .get_receipt(&self.client)
            .await
            .map_err(|e| transaction_error(kind, e))?;

        receipt
            .file_id
            .map(|id| FileIdentifier(id.to_string()))
            .ok_or(TransactionError::MissingReceiptField {
                kind,
                field: "file id",
            })
    }

    async fn submit_contract(
        &self,
        request: ContractCreateRequest,
    ) -> Result<ContractIdentifier, TransactionError> {
        let kind = TransactionKind::ContractCreate;

        let file_id = FileId::from_str(&request.bytecode_file_id.0).map_err(|e| {
            TransactionError::Failed {
                kind,
                message: format!("invalid bytecode file id {}: {e}", request.bytecode_file_id),
            }
        })?;

        let mut parameters = ContractFunctionParameters::new();
        for param in request.constructor_args.params() {
            match param {
                ConstructorParam::String(value) => {
                    parameters.add_string(value.as_str());
                }
            }
        }

        let mut transaction = ContractCreateTransaction::new();
        transaction
            .bytecode_file_id(file_id)
            .gas(request.gas)
            .constructor_parameters(parameters.to_bytes(None));

        let response = transaction
            .execute(&self.client)
            .await
            .map_err(|e| transaction_error(kind, e))?;
        let receipt = response
            .get_receipt(&self.client)
            .await
            .map_err(|e| transaction_error(kind, e))?;

        receipt
            .contract_id
            .map(|id| ContractIdentifier(id.to_string()))
            .ok_or(TransactionError::MissingReceiptField {
                kind,
                field: "contract id",
            })
    }
}
