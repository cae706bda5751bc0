use helpers::{
    ClientSettings, ConfigurationError, HederaConnector, LedgerConnector, OperatorCredential,
};
use tests::OPERATOR_ID;

#[tokio::test]
async fn test_malformed_operator_rejected_before_network() {
    let credential = OperatorCredential {
        account_id: "not-an-id".into(),
        private_key: "not-a-key".into(),
    };
    let err = HederaConnector
        .connect(&credential, &ClientSettings::default())
        .err()
        .expect("malformed account id must not connect");
    assert!(matches!(err, ConfigurationError::InvalidAccountId { .. }));

    let credential = OperatorCredential {
        account_id: OPERATOR_ID.into(),
        private_key: "not-a-key".into(),
    };
    let err = HederaConnector
        .connect(&credential, &ClientSettings::default())
        .err()
        .expect("non-ECDSA key must not connect");
    assert!(matches!(err, ConfigurationError::InvalidPrivateKey(_)));
}
