//! Params file to verification decision, end to end

#![allow(
    unused_crate_dependencies,
    reason = "test dependencies shared across test suite"
)]

use std::fs;

use integration_tests::harness::MultisigScenario;
use msig_config::{load_params, ParamsError, VerifierParams};
use msig_crypto::{predicate::MultisigPredicate, threshold_signature::ThresholdSignatureError};

#[test]
fn test_toml_params_drive_verification() {
    let scenario = MultisigScenario::new(3, 2).with_placeholder(2);
    let signers = scenario.config().signers().to_vec();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("verifier.toml");
    fs::write(
        &path,
        format!(
            "threshold = 2\nsigners = [\"{}\", \"{}\", \"{}\"]\n",
            signers[0], signers[1], signers[2]
        ),
    )
    .unwrap();

    let params = load_params(&path).unwrap();
    let predicate = MultisigPredicate::new(params.to_config().unwrap());

    assert!(predicate.evaluate(&scenario.digest(), &scenario.witnesses(&[0, 1])));
    assert!(!predicate.evaluate(&scenario.digest(), &scenario.witnesses(&[0, 2])));
}

#[test]
fn test_json_params_roundtrip_through_file() {
    let scenario = MultisigScenario::new(4, 3);
    let params = VerifierParams::from_config(&scenario.config());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("verifier.json");
    fs::write(&path, serde_json::to_string_pretty(&params).unwrap()).unwrap();

    let loaded = load_params(&path).unwrap();
    assert_eq!(loaded, params);
    assert_eq!(loaded.to_config().unwrap(), scenario.config());
}

#[test]
fn test_duplicate_signer_in_params_is_rejected() {
    let scenario = MultisigScenario::new(2, 1);
    let a = scenario.signer(0).address;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("verifier.toml");
    fs::write(&path, format!("threshold = 1\nsigners = [\"{a}\", \"{a}\"]\n")).unwrap();

    assert!(matches!(
        load_params(&path),
        Err(ParamsError::Invalid(ThresholdSignatureError::DuplicateSigner {
            first: 0,
            second: 1,
            ..
        }))
    ));
}

#[test]
fn test_missing_params_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_params(&dir.path().join("absent.toml")),
        Err(ParamsError::Io { .. })
    ));
}
