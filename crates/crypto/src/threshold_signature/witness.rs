//! Witness types: candidate signatures supplied with a transaction.

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use tracing::debug;

use crate::encoding::impl_hex_bytes;

/// Length of a [`Witness`] in bytes.
pub const WITNESS_LEN: usize = 64;

/// Mask of the recovery parity bit inside the first byte of `s`.
const PARITY_MASK: u8 = 0x80;

/// A 64-byte compact recoverable ECDSA signature.
///
/// Layout is `r || s'` where `s'` is the low-s value with the recovery
/// parity stored in its most significant bit (the EIP-2098 compact form).
#[derive(Clone, Copy, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize, Arbitrary)]
pub struct Witness([u8; WITNESS_LEN]);

impl_hex_bytes!(Witness, WITNESS_LEN);

impl Witness {
    /// Wraps raw witness bytes.
    pub const fn new(bytes: [u8; WITNESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Packs a recovery id and a 64-byte `r || s` signature into the compact form.
    ///
    /// Only the parity (low bit) of the recovery id is representable.
    pub fn from_recoverable_parts(recovery_id: u8, compact: [u8; 64]) -> Self {
        let mut bytes = compact;
        if recovery_id & 1 == 1 {
            bytes[32] |= PARITY_MASK;
        }
        Self(bytes)
    }

    /// Get the r component (bytes 0-31).
    pub fn r(&self) -> &[u8; 32] {
        self.0[..32]
            .try_into()
            .expect("witness[..32] is always 32 bytes")
    }

    /// Get the s component with the parity bit cleared.
    pub fn s(&self) -> [u8; 32] {
        let mut s: [u8; 32] = self.0[32..]
            .try_into()
            .expect("witness[32..] is always 32 bytes");
        s[0] &= !PARITY_MASK;
        s
    }

    /// Get the recovery id (0 or 1) encoded in the top bit of `s`.
    pub fn recovery_id(&self) -> u8 {
        (self.0[32] & PARITY_MASK) >> 7
    }

    /// Get the standard `r || s` signature without the parity bit.
    pub fn compact(&self) -> [u8; 64] {
        let mut compact = self.0;
        compact[32] &= !PARITY_MASK;
        compact
    }
}

/// One position of a witness list as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WitnessEntry {
    /// A well-formed 64-byte witness.
    Present(Witness),
    /// Data was supplied but had the wrong length.
    Malformed {
        /// Length of the supplied data.
        len: usize,
    },
    /// The host reported this position but supplied no data for it.
    Absent,
}

impl WitnessEntry {
    /// Returns the witness if the entry is well-formed.
    pub fn witness(&self) -> Option<&Witness> {
        match self {
            WitnessEntry::Present(witness) => Some(witness),
            _ => None,
        }
    }
}

/// An ordered list of witness positions for a single verification.
///
/// The number of entries is the authoritative witness count; the verifier
/// never looks past it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WitnessSet {
    entries: Vec<WitnessEntry>,
}

impl WitnessSet {
    /// Create a set of well-formed witnesses.
    pub fn new(witnesses: Vec<Witness>) -> Self {
        Self {
            entries: witnesses.into_iter().map(WitnessEntry::Present).collect(),
        }
    }

    /// Create an empty witness set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from raw host witness data.
    ///
    /// Positions `0..reported_count` are read from `raw`. A 64-byte entry
    /// is present, an entry of any other length is malformed and a position
    /// past the end of `raw` is absent. Entries of `raw` at or beyond
    /// `reported_count` are ignored. Every reported position is kept.
    pub fn from_raw<T: AsRef<[u8]>>(reported_count: usize, raw: &[T]) -> Self {
        if reported_count > raw.len() {
            debug!(
                %reported_count,
                supplied = raw.len(),
                "reported witness count exceeds supplied witnesses"
            );
        }

        let entries = (0..reported_count)
            .map(|position| match raw.get(position) {
                None => WitnessEntry::Absent,
                Some(data) => {
                    let data = data.as_ref();
                    match Witness::from_slice(data) {
                        Ok(witness) => WitnessEntry::Present(witness),
                        Err(_) => WitnessEntry::Malformed { len: data.len() },
                    }
                }
            })
            .collect();

        Self { entries }
    }

    /// Get the entries.
    pub fn entries(&self) -> &[WitnessEntry] {
        &self.entries
    }

    /// Get the number of reported positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set has no positions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the well-formed witnesses.
    pub fn witnesses(&self) -> impl Iterator<Item = &Witness> + '_ {
        self.entries.iter().filter_map(WitnessEntry::witness)
    }
}

impl From<Vec<Witness>> for WitnessSet {
    fn from(witnesses: Vec<Witness>) -> Self {
        Self::new(witnesses)
    }
}

impl FromIterator<Witness> for WitnessSet {
    fn from_iter<I: IntoIterator<Item = Witness>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
