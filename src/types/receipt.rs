//! Settlement receipt for a single quarter's payout.
//!
//! The receipt pins down who is paid, how much, and for which checkpoint of
//! which board. Its digest lets the settlement process recognise a payout it
//! has already sent.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::types::Quarter;

/// Summary of one quarter's winner payout.
///
/// ## Digest
///
/// The 32-byte digest is a SHA-256 hash over the board id, quarter tag,
/// winning square index, winner address and normalized payout amount.
/// `25` and `25.00` hash identically.
///
/// ## Example
///
/// ```
/// use rust_decimal::Decimal;
/// use squares_calculator::types::{Quarter, SettlementReceipt};
///
/// let receipt = SettlementReceipt::new(
///     Some("board-1"),
///     Quarter::Q2,
///     74,
///     "winner_wallet",
///     Decimal::from(25),
/// );
/// assert_eq!(receipt.digest_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementReceipt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_id: Option<String>,

    pub quarter: Quarter,

    pub winning_square_index: usize,

    pub winner_address: String,

    pub payout_amount: Decimal,

    /// SHA-256 over the fields above, hex encoded on the wire
    #[serde(serialize_with = "serialize_digest")]
    pub digest: [u8; 32],
}

impl SettlementReceipt {
    /// Create a receipt, computing its digest
    pub fn new(
        board_id: Option<&str>,
        quarter: Quarter,
        winning_square_index: usize,
        winner_address: &str,
        payout_amount: Decimal,
    ) -> Self {
        let digest = Self::compute_digest(
            board_id,
            quarter,
            winning_square_index,
            winner_address,
            payout_amount,
        );
        Self {
            board_id: board_id.map(str::to_string),
            quarter,
            winning_square_index,
            winner_address: winner_address.to_string(),
            payout_amount,
            digest,
        }
    }

    /// Compute the SHA-256 digest of a settlement
    pub fn compute_digest(
        board_id: Option<&str>,
        quarter: Quarter,
        winning_square_index: usize,
        winner_address: &str,
        payout_amount: Decimal,
    ) -> [u8; 32] {
        let mut hasher = Sha256::new();
        // Fields are separated so adjacent values cannot run together
        hasher.update(board_id.unwrap_or_default().as_bytes());
        hasher.update([0u8]);
        hasher.update(quarter.as_str().as_bytes());
        hasher.update([0u8]);
        hasher.update((winning_square_index as u64).to_le_bytes());
        hasher.update(winner_address.as_bytes());
        hasher.update([0u8]);
        hasher.update(payout_amount.normalize().to_string().as_bytes());

        let mut digest = [0u8; 32];
        digest.copy_from_slice(&hasher.finalize());
        digest
    }

    /// Get the digest as a hex string
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    /// Recompute the digest and compare it with the stored one
    pub fn verify(&self) -> bool {
        let expected = Self::compute_digest(
            self.board_id.as_deref(),
            self.quarter,
            self.winning_square_index,
            &self.winner_address,
            self.payout_amount,
        );
        expected == self.digest
    }
}

fn serialize_digest<S: Serializer>(digest: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(digest))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn receipt(amount: Decimal) -> SettlementReceipt {
        SettlementReceipt::new(Some("board-1"), Quarter::Q2, 74, "winner_wallet", amount)
    }

    #[test]
    fn test_receipt_new() {
        let r = receipt(dec!(25));
        assert_eq!(r.board_id.as_deref(), Some("board-1"));
        assert_eq!(r.quarter, Quarter::Q2);
        assert_eq!(r.winning_square_index, 74);
        assert_eq!(r.winner_address, "winner_wallet");
        assert_ne!(r.digest, [0u8; 32]);
        assert!(r.verify());
    }

    #[test]
    fn test_digest_determinism() {
        assert_eq!(receipt(dec!(25)).digest, receipt(dec!(25)).digest);
        // Scale does not change the digest
        assert_eq!(receipt(dec!(25)).digest, receipt(dec!(25.000)).digest);
        assert_ne!(receipt(dec!(25)).digest, receipt(dec!(25.01)).digest);
    }

    #[test]
    fn test_digest_covers_every_field() {
        let base = receipt(dec!(25)).digest;
        let other_board =
            SettlementReceipt::new(Some("board-2"), Quarter::Q2, 74, "winner_wallet", dec!(25));
        let other_quarter =
            SettlementReceipt::new(Some("board-1"), Quarter::Q3, 74, "winner_wallet", dec!(25));
        let other_square =
            SettlementReceipt::new(Some("board-1"), Quarter::Q2, 47, "winner_wallet", dec!(25));
        let other_wallet =
            SettlementReceipt::new(Some("board-1"), Quarter::Q2, 74, "someone_else", dec!(25));

        for other in [other_board, other_quarter, other_square, other_wallet] {
            assert_ne!(other.digest, base);
        }
    }

    #[test]
    fn test_tampered_receipt_fails_verify() {
        let mut r = receipt(dec!(25));
        r.payout_amount = dec!(250);
        assert!(!r.verify());
    }

    #[test]
    fn test_digest_hex() {
        let r = receipt(dec!(25));
        let hex = r.digest_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));

        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["digest"], hex);
        assert_eq!(value["winnerAddress"], "winner_wallet");
        assert_eq!(value["quarter"], "Q2");
    }
}
