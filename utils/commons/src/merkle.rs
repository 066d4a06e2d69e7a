//! Allowlist membership proofs.
//!
//! The allowlist is committed to as the root of a Keccak-256 merkle tree whose
//! leaves are the digests of the serialized eligible addresses. Inner nodes
//! hash their two children in ascending byte order, so a proof is just the
//! list of sibling digests from the leaf up to the root. A level with an odd
//! number of nodes promotes its last node unchanged.
//!
//! Everything in this module is pure: verification never looks at contract
//! state.
use crate::types::Hash256;
use concordium_std::*;
use sha3::{Digest, Keccak256};

/// Digest of an allowlist entry.
pub fn hash_leaf(address: &Address) -> Hash256 {
    let mut hasher = Keccak256::new();
    hasher.update(to_bytes(address));
    finalize(hasher)
}

/// Hash two sibling nodes, smaller one first.
pub fn hash_pair(a: &Hash256, b: &Hash256) -> Hash256 {
    let (left, right) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = Keccak256::new();
    hasher.update(left);
    hasher.update(right);
    finalize(hasher)
}

fn finalize(hasher: Keccak256) -> Hash256 {
    let mut output = [0u8; 32];
    output.copy_from_slice(&hasher.finalize());
    output
}

/// Fold a proof over a leaf, producing the root it commits to.
pub fn process_proof(leaf: Hash256, proof: &[Hash256]) -> Hash256 {
    proof
        .iter()
        .fold(leaf, |current, sibling| hash_pair(&current, sibling))
}

/// Check that `claimant` is part of the allowlist committed to by `root`.
///
/// An empty proof never verifies.
pub fn verify(claimant: &Address, proof: &[Hash256], root: &Hash256) -> bool {
    if proof.is_empty() {
        return false;
    }
    process_proof(hash_leaf(claimant), proof) == *root
}

/// Compute the root over a list of leaves.
///
/// Returns the zero digest for an empty list.
pub fn compute_root(leaves: &[Hash256]) -> Hash256 {
    if leaves.is_empty() {
        return [0u8; 32];
    }

    let mut level = leaves.to_vec();
    while level.len() > 1 {
        level = next_level(&level);
    }
    level[0]
}

/// Build the proof for the leaf at `index`, or `None` if it is out of range.
pub fn build_proof(leaves: &[Hash256], index: usize) -> Option<Vec<Hash256>> {
    if index >= leaves.len() {
        return None;
    }

    let mut proof = Vec::new();
    let mut level = leaves.to_vec();
    let mut index = index;
    while level.len() > 1 {
        let sibling = index ^ 1;
        if sibling < level.len() {
            proof.push(level[sibling]);
        }
        level = next_level(&level);
        index /= 2;
    }
    Some(proof)
}

fn next_level(level: &[Hash256]) -> Vec<Hash256> {
    level
        .chunks(2)
        .map(|pair| match pair {
            [left, right] => hash_pair(left, right),
            [single] => *single,
            _ => unreachable!(),
        })
        .collect()
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    fn account(n: u8) -> Address {
        Address::Account(AccountAddress([n; 32]))
    }

    fn leaves(addresses: &[Address]) -> Vec<Hash256> {
        addresses.iter().map(hash_leaf).collect()
    }

    #[concordium_test]
    fn test_pair_hash_is_commutative() {
        let a = hash_leaf(&account(1));
        let b = hash_leaf(&account(2));
        claim_eq!(hash_pair(&a, &b), hash_pair(&b, &a));
        claim!(hash_pair(&a, &b) != hash_pair(&a, &a));
    }

    #[concordium_test]
    fn test_leaf_depends_on_address_kind() {
        let account_leaf = hash_leaf(&Address::Account(AccountAddress([0; 32])));
        let contract_leaf = hash_leaf(&Address::Contract(ContractAddress {
            index: 0,
            subindex: 0,
        }));
        claim!(account_leaf != contract_leaf);
    }

    #[concordium_test]
    fn test_every_member_verifies() {
        for size in 2..=9u8 {
            let members: Vec<Address> = (1..=size).map(account).collect();
            let tree = leaves(&members);
            let root = compute_root(&tree);

            for (index, member) in members.iter().enumerate() {
                let proof = build_proof(&tree, index).expect_report("Index is in range");
                claim!(verify(member, &proof, &root));
            }
        }
    }

    #[concordium_test]
    fn test_outsider_is_rejected() {
        let members = [account(1), account(2), account(3), account(4)];
        let tree = leaves(&members);
        let root = compute_root(&tree);
        let proof = build_proof(&tree, 0).expect_report("Index is in range");

        // Another member's proof does not work for an outsider
        claim!(!verify(&account(5), &proof, &root));
        // Nor for a different member
        claim!(!verify(&account(2), &proof, &root));
    }

    #[concordium_test]
    fn test_stale_root_is_rejected() {
        let old_tree = leaves(&[account(1), account(2)]);
        let new_tree = leaves(&[account(1), account(3)]);
        let proof = build_proof(&old_tree, 0).expect_report("Index is in range");

        claim!(verify(&account(1), &proof, &compute_root(&old_tree)));
        claim!(!verify(&account(1), &proof, &compute_root(&new_tree)));
    }

    #[concordium_test]
    fn test_empty_or_tampered_proof_is_rejected() {
        let single = leaves(&[account(1)]);
        let root = compute_root(&single);
        // A one-entry tree has the leaf as root, but an empty proof is refused
        claim_eq!(root, single[0]);
        claim!(!verify(&account(1), &[], &root));

        let tree = leaves(&[account(1), account(2), account(3)]);
        let root = compute_root(&tree);
        let mut proof = build_proof(&tree, 2).expect_report("Index is in range");
        proof[0][0] ^= 0xFF;
        claim!(!verify(&account(3), &proof, &root));
    }

    #[concordium_test]
    fn test_build_proof_out_of_range() {
        let tree = leaves(&[account(1), account(2)]);
        claim!(build_proof(&tree, 2).is_none());
        claim_eq!(compute_root(&[]), [0u8; 32]);
    }
}
