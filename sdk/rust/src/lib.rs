//! Client SDK for the Coin Tracker HTTP API.

pub mod client;

pub use client::{Registration, SdkError, TrackerClient, WalletDetails, WalletList};
