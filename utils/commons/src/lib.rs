//! It exposes all common types, errors and helpers shared by the drop contracts.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{constants::*, errors::*, merkle::*, ownership::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

mod constants;
mod errors;
mod merkle;
mod ownership;
mod types;
