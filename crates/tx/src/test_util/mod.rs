//! Test utilities for `txcodec-tx`.
//!
//! The EIP-155 vector is the example transaction published with EIP-155. The remaining vectors
//! were computed with an independent Keccak-256 and RLP implementation.

use crate::{AccessListItem, Transaction, TxAccessList, TxDynamicFee, TxLegacy};
use alloc::{string::ToString, vec};
use alloy_primitives::{bytes, Bytes};

pub(crate) use self::tracing::{CollectingLayer, TraceStorage};

/// The EIP-155 example transaction, as returned by `eth_getTransactionByHash`.
pub(crate) const LEGACY_TX_JSON: &str = r#"{
    "hash": "0x33469b22e9f636356c4160a87eb19df52b7412e8eac32a4a55ffe88ea8350788",
    "from": "0x9d8a62f656a8d1615c1294fd71e9cfb3e4855a4f",
    "nonce": "0x9",
    "gasPrice": "0x4a817c800",
    "gas": "0x5208",
    "to": "0x3535353535353535353535353535353535353535",
    "value": "0xde0b6b3a7640000",
    "input": "0x",
    "v": "0x25",
    "r": "0x28ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276",
    "s": "0x67cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83"
}"#;

pub(crate) const EIP155_TX_RLP: Bytes = bytes!("f86c098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a76400008025a028ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276a067cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83");
pub(crate) const EIP155_TX_HASH: &str =
    "0x33469b22e9f636356c4160a87eb19df52b7412e8eac32a4a55ffe88ea8350788";

/// [eip155_tx] with its nonce set to zero.
pub(crate) const ZERO_NONCE_TX_RLP: Bytes = bytes!("f86c808504a817c800825208943535353535353535353535353535353535353535880de0b6b3a76400008025a028ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276a067cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83");
pub(crate) const ZERO_NONCE_TX_HASH: &str =
    "0xc587c4e00d511c7a269684e36c0196ae40d3df8d3e2be487c2e364d73c738fc8";

pub(crate) const ACCESS_LIST_TX_JSON: &str = r#"{
    "type": "0x1",
    "chainId": "0x1",
    "nonce": "0x7",
    "gasPrice": "0x3b9aca00",
    "gas": "0x7530",
    "to": "0xdf0a88b2b68c673713a8ec826003676f272e3573",
    "value": "0x0",
    "input": "0x",
    "accessList": [
        {
            "address": "0x0000000000000000000000000000000000001337",
            "storageKeys": [
                "0x0000000000000000000000000000000000000000000000000000000000000000",
                "0x00000000000000000000000000000000000000000000000000000000000000ff"
            ]
        }
    ],
    "v": "0x1",
    "yParity": "0x1",
    "r": "0x294ac94077b35057971e6b4b06dfdf55a6fbed819133a6c1d31e187f1bca938d",
    "s": "0xbe950468ba1c25a5cb50e9f6d8aa13c8cd21f24ba909402775b262ac76d374d"
}"#;

pub(crate) const ACCESS_LIST_TX_RLP: Bytes = bytes!("01f8c10107843b9aca0082753094df0a88b2b68c673713a8ec826003676f272e35738080f85bf859940000000000000000000000000000000000001337f842a00000000000000000000000000000000000000000000000000000000000000000a000000000000000000000000000000000000000000000000000000000000000ff01a0294ac94077b35057971e6b4b06dfdf55a6fbed819133a6c1d31e187f1bca938da00be950468ba1c25a5cb50e9f6d8aa13c8cd21f24ba909402775b262ac76d374d");
pub(crate) const ACCESS_LIST_TX_HASH: &str =
    "0xce62e5edccfdbf3d031df6712358e0f165b6e2cbdad65fcc11a2a5de80a85537";

pub(crate) const DYNAMIC_FEE_TX_JSON: &str = r#"{
    "type": "0x2",
    "chainId": "0x1",
    "nonce": "0x2a",
    "maxPriorityFeePerGas": "0x3b9aca00",
    "maxFeePerGas": "0x2540be400",
    "gasPrice": "0x2540be400",
    "gas": "0xc350",
    "to": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
    "value": "0x0",
    "input": "0xa9059cbb000000000000000000000000f39fd6e51aad88f6f4ce6ab8827279cfffb92266000000000000000000000000000000000000000000000000000000003b9aca00",
    "accessList": [],
    "v": "0x0",
    "yParity": "0x0",
    "r": "0x6d3c2f8c2ec4f5b1a2b0d8e6b0c6a1c0e6b9b6b1b2c0f5e8d1a2b3c4d5e6f708",
    "s": "0x1a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f80"
}"#;

pub(crate) const DYNAMIC_FEE_TX_RLP: Bytes = bytes!("02f8b0012a843b9aca008502540be40082c35094a0b86991c6218b36c1d19d4a2e9eb0ce3606eb4880b844a9059cbb000000000000000000000000f39fd6e51aad88f6f4ce6ab8827279cfffb92266000000000000000000000000000000000000000000000000000000003b9aca00c080a06d3c2f8c2ec4f5b1a2b0d8e6b0c6a1c0e6b9b6b1b2c0f5e8d1a2b3c4d5e6f708a001a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f80");
pub(crate) const DYNAMIC_FEE_TX_HASH: &str =
    "0x14999f083cd2eaa25b3e943b40f35cd6e09c8e194bfba38cec6ce29663b59e80";

pub(crate) const CONTRACT_CREATION_TX_RLP: Bytes =
    bytes!("d501843b9aca00830186a080808560806040521b0102");
pub(crate) const CONTRACT_CREATION_TX_HASH: &str =
    "0x5924e9f985ca75bee07533461631eef4d9b7cfd41819a8b87eb8e77f5c94bafc";

/// The EIP-155 example transaction.
pub(crate) fn eip155_tx() -> Transaction {
    TxLegacy {
        nonce: "0x9".to_string(),
        gas_price: "0x4a817c800".to_string(),
        gas_limit: "0x5208".to_string(),
        to: Some("0x3535353535353535353535353535353535353535".to_string()),
        value: "0xde0b6b3a7640000".to_string(),
        input: "0x".to_string(),
        v: "0x25".to_string(),
        r: "0x28ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276".to_string(),
        s: "0x67cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83".to_string(),
    }
    .into()
}

pub(crate) fn access_list_tx() -> Transaction {
    TxAccessList {
        chain_id: "0x1".to_string(),
        nonce: "0x7".to_string(),
        gas_price: "0x3b9aca00".to_string(),
        gas_limit: "0x7530".to_string(),
        to: Some("0xdf0a88b2b68c673713a8ec826003676f272e3573".to_string()),
        value: "0x0".to_string(),
        input: "0x".to_string(),
        access_list: vec![AccessListItem {
            address: "0x0000000000000000000000000000000000001337".to_string(),
            storage_keys: vec![
                "0x0000000000000000000000000000000000000000000000000000000000000000".to_string(),
                "0x00000000000000000000000000000000000000000000000000000000000000ff".to_string(),
            ],
        }],
        v: "0x1".to_string(),
        r: "0x294ac94077b35057971e6b4b06dfdf55a6fbed819133a6c1d31e187f1bca938d".to_string(),
        s: "0xbe950468ba1c25a5cb50e9f6d8aa13c8cd21f24ba909402775b262ac76d374d".to_string(),
    }
    .into()
}

pub(crate) fn dynamic_fee_tx() -> Transaction {
    TxDynamicFee {
        chain_id: "0x1".to_string(),
        nonce: "0x2a".to_string(),
        max_priority_fee_per_gas: "0x3b9aca00".to_string(),
        max_fee_per_gas: "0x2540be400".to_string(),
        gas_limit: "0xc350".to_string(),
        to: Some("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".to_string()),
        value: "0x0".to_string(),
        input: "0xa9059cbb000000000000000000000000f39fd6e51aad88f6f4ce6ab8827279cfffb92266000000000000000000000000000000000000000000000000000000003b9aca00".to_string(),
        access_list: vec![],
        v: "0x0".to_string(),
        r: "0x6d3c2f8c2ec4f5b1a2b0d8e6b0c6a1c0e6b9b6b1b2c0f5e8d1a2b3c4d5e6f708".to_string(),
        s: "0x1a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f80".to_string(),
    }
    .into()
}

/// A legacy contract deployment without EIP-155 replay protection.
pub(crate) fn contract_creation_tx() -> Transaction {
    TxLegacy {
        nonce: "0x1".to_string(),
        gas_price: "0x3b9aca00".to_string(),
        gas_limit: "0x186a0".to_string(),
        to: None,
        value: "0x0".to_string(),
        input: "0x6080604052".to_string(),
        v: "0x1b".to_string(),
        r: "0x1".to_string(),
        s: "0x2".to_string(),
    }
    .into()
}
