//! Avalanche X-chain networks.

use wk_crypto::cb58_encode;
use wk_types::NetworkId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Network {
    pub network_id: u32,
    /// bech32 human-readable part of X-chain addresses.
    pub hrp: &'static str,
    /// Chain label shown before an address, as in `X-avax1…`.
    pub label: &'static str,
    pub blockchain_id: [u8; 32],
    pub avax_asset_id: [u8; 32],
}

pub const MAINNET: Network = Network {
    network_id: 1,
    hrp: "avax",
    label: "X-",
    blockchain_id: [
        0xed, 0x5f, 0x38, 0x34, 0x1e, 0x43, 0x6e, 0x5d, 0x46, 0xe2, 0xbb, 0x00, 0xb4, 0x5d, 0x62,
        0xae, 0x97, 0xd1, 0xb0, 0x50, 0xc6, 0x4b, 0xc6, 0x34, 0xae, 0x10, 0x62, 0x67, 0x39, 0xe3,
        0x5c, 0x4b,
    ],
    avax_asset_id: [
        0x21, 0xe6, 0x73, 0x17, 0xcb, 0xc4, 0xbe, 0x2a, 0xeb, 0x00, 0x67, 0x7a, 0xd6, 0x46, 0x27,
        0x78, 0xa8, 0xf5, 0x22, 0x74, 0xb9, 0xd6, 0x05, 0xdf, 0x25, 0x91, 0xb2, 0x30, 0x27, 0xa8,
        0x7d, 0xff,
    ],
};

pub const FUJI: Network = Network {
    network_id: 5,
    hrp: "fuji",
    label: "X-",
    blockchain_id: [
        0xab, 0x68, 0xeb, 0x1e, 0xe1, 0x42, 0xa0, 0x5c, 0xfe, 0x76, 0x8c, 0x36, 0xe1, 0x1f, 0x0b,
        0x59, 0x6d, 0xb5, 0xa3, 0xc6, 0xc7, 0x7a, 0xab, 0xe6, 0x65, 0xda, 0xd9, 0xe6, 0x38, 0xca,
        0x94, 0xf7,
    ],
    avax_asset_id: [
        0x3d, 0x9b, 0xda, 0xc0, 0xed, 0x1d, 0x76, 0x13, 0x30, 0xcf, 0x68, 0x0e, 0xfd, 0xeb, 0x1a,
        0x42, 0x15, 0x9e, 0xb3, 0x87, 0xd6, 0xd2, 0x95, 0x0c, 0x96, 0xf7, 0xd2, 0x8f, 0x61, 0xbb,
        0xe2, 0xaa,
    ],
};

impl Network {
    pub fn for_id(id: NetworkId) -> &'static Network {
        match id {
            NetworkId::Mainnet => &MAINNET,
            NetworkId::Testnet => &FUJI,
        }
    }

    pub fn blockchain_id_string(&self) -> String {
        cb58_encode(&self.blockchain_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blockchain_ids_in_cb58() {
        assert_eq!(
            MAINNET.blockchain_id_string(),
            "2oYMBNV4eNHyqk2fjjV5nVQLDbtmNJzq5s3qs3Lo6ftnC6FByM"
        );
        assert_eq!(
            FUJI.blockchain_id_string(),
            "2JVSBoinj9C2J33VntvzYtVJNZdN2NKiwwKjcumHUWEb5DbBrm"
        );
    }

    #[test]
    fn lookup_by_network_id() {
        assert_eq!(Network::for_id(NetworkId::Mainnet).hrp, "avax");
        assert_eq!(Network::for_id(NetworkId::Testnet).network_id, 5);
    }
}
