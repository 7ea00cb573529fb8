//! End-to-end threshold verification scenarios
//!
//! Each test builds a signer set with [`MultisigScenario`], signs the scenario
//! digest with some of the signers and checks the decision and trace.

#![allow(
    unused_crate_dependencies,
    reason = "test dependencies shared across test suite"
)]

use integration_tests::harness::MultisigScenario;
use msig_crypto::{
    keys::SignerAddress,
    predicate::AuthorizationError,
    test_utils::garbage_witness,
    threshold_signature::{
        verify_threshold_witnesses, OutcomeKind, ThresholdConfig, ThresholdSignatureError,
        WitnessSet,
    },
};

// ============================================================================
// Signer set [X, Y, Z], threshold 2
// ============================================================================

#[test]
fn test_two_of_three_with_two_signatures() {
    let scenario = MultisigScenario::new(3, 2);
    let witnesses = scenario.witnesses(&[0, 1]);

    assert!(scenario.verify(&witnesses));
    assert!(scenario.predicate().authorize(&scenario.digest(), &witnesses).is_ok());
}

#[test]
fn test_two_of_three_with_one_signature() {
    let scenario = MultisigScenario::new(3, 2);
    let witnesses = scenario.witnesses(&[0]);

    assert!(!scenario.verify(&witnesses));
    assert_eq!(
        scenario.predicate().authorize(&scenario.digest(), &witnesses),
        Err(AuthorizationError::InsufficientSignatures {
            matched: 1,
            required: 2
        })
    );
}

#[test]
fn test_two_of_three_with_no_witnesses() {
    let scenario = MultisigScenario::new(3, 2);
    let trace = scenario.trace(&WitnessSet::empty());

    assert!(!trace.authorized);
    assert!(trace.outcomes.is_empty());
    assert_eq!(trace.matched_count(), 0);
}

#[test]
fn test_garbage_witness_does_not_block_valid_ones() {
    let scenario = MultisigScenario::new(3, 2);
    let witnesses: WitnessSet = vec![garbage_witness(0x5a), scenario.sign(1), scenario.sign(2)]
        .into_iter()
        .collect();

    let trace = scenario.trace(&witnesses);
    assert!(trace.authorized);
    assert!(matches!(
        trace.outcomes[0].kind,
        OutcomeKind::RecoveryFailed | OutcomeKind::Unauthorized { .. }
    ));
    assert_eq!(trace.matched_signers, vec![1, 2]);
}

#[test]
fn test_placeholder_slot_is_never_satisfied() {
    let scenario = MultisigScenario::new(3, 2).with_placeholder(1);
    assert_eq!(scenario.config().signers()[1], SignerAddress::ZERO);

    assert!(scenario.verify(&scenario.witnesses(&[0, 2])));

    // The key that used to own slot 1 no longer counts.
    let trace = scenario.trace(&scenario.witnesses(&[0, 1]));
    assert!(!trace.authorized);
    assert_eq!(
        trace.outcomes[1].kind,
        OutcomeKind::Unauthorized {
            recovered: scenario.signer(1).address
        }
    );
}

// ============================================================================
// Duplicates and ordering
// ============================================================================

#[test]
fn test_repeated_signature_counts_once() {
    let scenario = MultisigScenario::new(3, 2);
    let witnesses = scenario.witnesses(&[2, 2, 2]);

    let trace = scenario.trace(&witnesses);
    assert!(!trace.authorized);
    assert_eq!(trace.matched_signers, vec![2]);
    assert_eq!(
        trace.outcomes[1].kind,
        OutcomeKind::Duplicate {
            recovered: scenario.signer(2).address,
            signer_index: 2
        }
    );
}

#[test]
fn test_witness_order_does_not_matter() {
    let scenario = MultisigScenario::new(5, 3);

    let forward = scenario.trace(&scenario.witnesses(&[0, 2, 4]));
    let backward = scenario.trace(&scenario.witnesses(&[4, 2, 0]));

    assert!(forward.authorized);
    assert!(backward.authorized);
    assert_eq!(forward.matched_count(), backward.matched_count());
}

#[test]
fn test_more_witnesses_than_signers() {
    let scenario = MultisigScenario::new(2, 2);
    let witnesses = scenario.witnesses(&[0, 0, 1, 1, 0]);

    let trace = scenario.trace(&witnesses);
    assert!(trace.authorized);
    assert_eq!(trace.matched_count(), 2);
    assert_eq!(trace.outcomes.len(), 5);
}

// ============================================================================
// Digest binding
// ============================================================================

#[test]
fn test_witnesses_are_bound_to_the_digest() {
    let scenario = MultisigScenario::new(3, 2);
    let witnesses = scenario.witnesses(&[0, 1]);

    let other = scenario.clone().with_message(b"a different transaction");
    assert!(!other.verify(&witnesses));

    let flipped = scenario.digest().with_flipped_bit(0);
    assert!(!verify_threshold_witnesses(
        &scenario.config(),
        &flipped,
        &witnesses
    ));
}

// ============================================================================
// Host-reported witness data
// ============================================================================

#[test]
fn test_raw_witnesses_beyond_reported_count_are_ignored() {
    let scenario = MultisigScenario::new(3, 2);
    let raw = vec![
        scenario.sign(0).to_bytes().to_vec(),
        scenario.sign(1).to_bytes().to_vec(),
    ];

    assert!(!scenario.verify(&WitnessSet::from_raw(1, &raw)));
    assert!(scenario.verify(&WitnessSet::from_raw(2, &raw)));
}

#[test]
fn test_valid_witnesses_after_long_garbage_prefix() {
    let scenario = MultisigScenario::new(3, 2);
    let garbage: Vec<_> = (0..300).map(|_| garbage_witness(0x5a)).collect();

    let front: WitnessSet = [scenario.sign(0), scenario.sign(1)]
        .into_iter()
        .chain(garbage.iter().copied())
        .collect();
    let back: WitnessSet = garbage
        .iter()
        .copied()
        .chain([scenario.sign(0), scenario.sign(1)])
        .collect();

    assert!(scenario.verify(&front));
    assert!(scenario.verify(&back));

    let raw: Vec<Vec<u8>> = back.witnesses().map(|w| w.as_bytes().to_vec()).collect();
    let trace = scenario.trace(&WitnessSet::from_raw(raw.len(), &raw));
    assert!(trace.authorized);
    assert_eq!(trace.outcomes.len(), 302);
    assert_eq!(trace.matched_signers, vec![0, 1]);
}

#[test]
fn test_raw_malformed_and_absent_entries() {
    let scenario = MultisigScenario::new(3, 2);
    let raw = vec![
        vec![0u8; 10],
        scenario.sign(0).to_bytes().to_vec(),
        scenario.sign(2).to_bytes().to_vec(),
    ];

    let trace = scenario.trace(&WitnessSet::from_raw(5, &raw));
    assert!(trace.authorized);
    assert_eq!(trace.outcomes[0].kind, OutcomeKind::Malformed { len: 10 });
    assert_eq!(trace.outcomes[3].kind, OutcomeKind::Absent);
    assert_eq!(trace.outcomes[4].kind, OutcomeKind::Absent);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_invalid_configurations_are_rejected() {
    let scenario = MultisigScenario::new(3, 2);
    let addresses: Vec<_> = scenario.config().signers().to_vec();

    assert_eq!(
        ThresholdConfig::try_new(vec![], 1),
        Err(ThresholdSignatureError::EmptySignerSet)
    );
    assert_eq!(
        ThresholdConfig::try_new(addresses.clone(), 0),
        Err(ThresholdSignatureError::ZeroThreshold)
    );
    assert_eq!(
        ThresholdConfig::try_new(addresses, 4),
        Err(ThresholdSignatureError::InvalidThreshold {
            threshold: 4,
            total_signers: 3
        })
    );
}

#[test]
fn test_trace_serializes_for_offline_debugging() {
    let scenario = MultisigScenario::new(3, 2);
    let trace = scenario.trace(&scenario.witnesses(&[0, 0]));

    let json = serde_json::to_value(&trace).unwrap();
    assert_eq!(json["authorized"], false);
    assert_eq!(json["outcomes"][0]["outcome"], "matched");
    assert_eq!(json["outcomes"][1]["outcome"], "duplicate");
    assert_eq!(json["outcomes"][1]["signer_index"], 0);
}
