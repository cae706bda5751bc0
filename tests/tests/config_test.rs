use helpers::{deploy, ConfigurationError, DeployError, OPERATOR_ACCOUNT_ID, OPERATOR_ACCOUNT_PRIVATE_KEY};
use tests::{artifact_json, setup_artifact, vars, MockConnector, BYTECODE, OPERATOR_ID, OPERATOR_KEY};

#[tokio::test]
async fn test_missing_credentials_abort_before_network() -> anyhow::Result<()> {
    let setup = setup_artifact(&artifact_json(BYTECODE))?;

    // every missing/empty combination of the two required variables
    let cases: Vec<(Vec<(&str, &str)>, &str)> = vec![
        (vec![], OPERATOR_ACCOUNT_ID),
        (vec![(OPERATOR_ACCOUNT_PRIVATE_KEY, OPERATOR_KEY)], OPERATOR_ACCOUNT_ID),
        (vec![(OPERATOR_ACCOUNT_ID, OPERATOR_ID)], OPERATOR_ACCOUNT_PRIVATE_KEY),
        (
            vec![(OPERATOR_ACCOUNT_ID, ""), (OPERATOR_ACCOUNT_PRIVATE_KEY, OPERATOR_KEY)],
            OPERATOR_ACCOUNT_ID,
        ),
        (
            vec![(OPERATOR_ACCOUNT_ID, OPERATOR_ID), (OPERATOR_ACCOUNT_PRIVATE_KEY, "")],
            OPERATOR_ACCOUNT_PRIVATE_KEY,
        ),
        (
            vec![(OPERATOR_ACCOUNT_ID, ""), (OPERATOR_ACCOUNT_PRIVATE_KEY, "")],
            OPERATOR_ACCOUNT_ID,
        ),
        (vec![(OPERATOR_ACCOUNT_ID, "")], OPERATOR_ACCOUNT_ID),
        (vec![(OPERATOR_ACCOUNT_PRIVATE_KEY, "")], OPERATOR_ACCOUNT_ID),
    ];

    for (pairs, expected_missing) in cases {
        let connector = MockConnector::accepting();
        let mut out: Vec<u8> = Vec::new();

        let err = deploy(vars(&pairs), &setup.artifact_path, &connector, &mut out)
            .await
            .expect_err("deployment must fail without credentials");

        match err {
            DeployError::Configuration(ConfigurationError::MissingVariable(name)) => {
                assert_eq!(name, expected_missing, "case {pairs:?}")
            }
            other => panic!("expected configuration error for {pairs:?}, got {other}"),
        }

        let calls = connector.calls();
        assert_eq!(calls.connects, 0, "case {pairs:?}");
        assert_eq!(calls.file_submissions, 0, "case {pairs:?}");
        assert_eq!(calls.contract_submissions, 0, "case {pairs:?}");
        assert!(out.is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn test_unknown_network_is_configuration_error() -> anyhow::Result<()> {
    let setup = setup_artifact(&artifact_json(BYTECODE))?;
    let connector = MockConnector::accepting();
    let lookup = vars(&[
        (OPERATOR_ACCOUNT_ID, OPERATOR_ID),
        (OPERATOR_ACCOUNT_PRIVATE_KEY, OPERATOR_KEY),
        (helpers::HEDERA_NETWORK, "localnet"),
    ]);

    let err = deploy(lookup, &setup.artifact_path, &connector, &mut Vec::<u8>::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DeployError::Configuration(ConfigurationError::UnknownNetwork(_))
    ));
    assert_eq!(connector.calls().connects, 0);
    Ok(())
}
