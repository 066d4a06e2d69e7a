//! A capped NFT drop implementing the Concordium Token Standard CIS2 events.
//!
//! # Description
//! Every token is unique and identified by a sequential token ID starting at
//! 1. Tokens are issued through three minting paths:
//! - `mint`, a public sale where the caller pays `cost` per token;
//! - `whiteListMint`, a priced sale restricted to addresses that can prove
//!   membership of an allowlist merkle tree, usable once per address;
//! - `zeroCostMint`, a free mint to any address reserved for the owner.
//!
//! All paths share the global supply ceiling and the per-call mint ceiling,
//! and all of them are closed while the contract is paused. The owner
//! configures the sale through dedicated setters and withdraws the collected
//! CCD with `withdraw`.
//!
//! The metadata URL of a token is the configured prefix, followed by the
//! decimal token ID and the configured suffix.
//!
//! Note: The word 'address' refers to either an account address or a
//! contract address.

#![cfg_attr(not(feature = "std"), no_std)]
use crate::{events::*, external::*, ledger::*, metadata::*, state::*};
use commons::*;
use concordium_cis2::*;
use concordium_std::*;

mod allowlist;
mod contract;
mod events;
mod external;
mod ledger;
mod metadata;
mod pricing;
mod state;
