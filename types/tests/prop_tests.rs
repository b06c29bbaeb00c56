use proptest::prelude::*;

use nite_types::{Address, PublicKey, RecoveryPhrase, Signature, Transaction};

proptest! {
    /// Signature serde roundtrip preserves every byte.
    #[test]
    fn signature_serde_roundtrip(bytes in prop::collection::vec(any::<u8>(), 64)) {
        let arr: [u8; 64] = bytes.try_into().unwrap();
        let sig = Signature(arr);
        let encoded = serde_json::to_vec(&sig).unwrap();
        let decoded: Signature = serde_json::from_slice(&encoded).unwrap();
        prop_assert_eq!(decoded, sig);
    }

    /// PublicKey serde roundtrip preserves every byte.
    #[test]
    fn public_key_serde_roundtrip(bytes in prop::collection::vec(any::<u8>(), 65)) {
        let arr: [u8; 65] = bytes.try_into().unwrap();
        let pk = PublicKey(arr);
        let encoded = serde_json::to_vec(&pk).unwrap();
        let decoded: PublicKey = serde_json::from_slice(&encoded).unwrap();
        prop_assert_eq!(decoded, pk);
    }

    /// Address roundtrips through its string form unchanged.
    #[test]
    fn address_string_roundtrip(raw in "[1-9A-HJ-NP-Za-km-z]{1,40}") {
        let addr = Address::new(raw.clone());
        prop_assert_eq!(addr.as_str(), raw.as_str());
        prop_assert_eq!(addr.to_string(), raw);
    }

    /// Transaction serialization is deterministic and roundtrips.
    #[test]
    fn transaction_serde_roundtrip(
        from in "[0-9a-f]{1,64}",
        to in "[0-9a-f]{1,64}",
        gas_price in "[0-9]{1,30}",
        gas in "[0-9]{1,10}",
        value in "[0-9]{1,30}",
        data in "[0-9a-f]{0,64}",
    ) {
        let tx = Transaction { from, to, gas_price, gas, value, data };
        let a = serde_json::to_vec(&tx).unwrap();
        let b = serde_json::to_vec(&tx).unwrap();
        prop_assert_eq!(&a, &b);
        let decoded: Transaction = serde_json::from_slice(&a).unwrap();
        prop_assert_eq!(decoded, tx);
    }

    /// A 24-word phrase preserves word order.
    #[test]
    fn phrase_preserves_order(words in prop::collection::vec("[a-z]{3,8}", 24)) {
        let phrase = RecoveryPhrase::new(words.clone());
        prop_assert_eq!(phrase.words(), words.as_slice());
    }
}
