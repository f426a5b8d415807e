#![allow(clippy::unwrap_used)]

use crate::bls::{aggregate_public_keys, aggregate_signatures, keypair_from_rng};
use crate::*;
use hex_literal::hex;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const MSG: &[u8] = b"two glass eyes";

fn test_rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(7)
}

fn sk_from_hex(s: &str) -> SecretKey {
    let mut bytes = [0u8; 32];
    let raw = hex::decode(s).unwrap();
    bytes[32 - raw.len()..].copy_from_slice(&raw);
    SecretKey::from_bytes(&bytes).unwrap()
}

fn fixed_keypair() -> (SecretKey, PublicKey) {
    let sk = sk_from_hex("1a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f809");
    let pk = sk.public_key();
    (sk, pk)
}

mod bls_scheme {
    use super::*;

    const EXPECTED_PK: [u8; 128] = hex!(
        "4077e7aaebe6ea04ed6a4cbb3505962ba7afcab7442dc815d6b990aafb949972"
        "373c9e5c68645a5f52808d80bfb6b01114134515a41535a9f9d68c43fef377b1"
        "7b925cfc19bb6b4e6a259b4702e9571b57c524e3c806b15ebf0d28b0f39439f6"
        "8996aa0fd7e25951580a14cf91c6efb7258ab7b5ec22acde9306fe95eb6e6042"
    );
    const EXPECTED_SIG: [u8; 64] = hex!(
        "1fa2cf2da0f07b77028ff17101dfe16200f3512b73666c7dc59569d617ed9a20"
        "7e8da9e210773694516bf954effe0dce07b608a546ee595bf30633343baaeae4"
    );

    #[test]
    fn fixed_key_encoding_is_stable() {
        let (_, pk) = fixed_keypair();
        assert_eq!(pk.to_bytes(), EXPECTED_PK);
    }

    #[test]
    fn fixed_signature_is_stable() {
        let (sk, _) = fixed_keypair();
        assert_eq!(sk.sign(MSG).to_bytes(), EXPECTED_SIG);
    }

    #[test]
    fn sign_and_verify() {
        let mut rng = test_rng();
        let (sk, pk) = keypair_from_rng(&mut rng);
        let sig = sk.sign(MSG);
        assert_eq!(pk.verify(MSG, &sig), Ok(()));
    }

    #[test]
    fn verify_rejects_wrong_message() {
        let mut rng = test_rng();
        let (sk, pk) = keypair_from_rng(&mut rng);
        let sig = sk.sign(MSG);
        assert_eq!(pk.verify(b"other message", &sig), Err(BlsError::InvalidSignature));
    }

    #[test]
    fn verify_rejects_wrong_key() {
        let mut rng = test_rng();
        let (sk, _) = keypair_from_rng(&mut rng);
        let (_, other_pk) = keypair_from_rng(&mut rng);
        let sig = sk.sign(MSG);
        assert_eq!(other_pk.verify(MSG, &sig), Err(BlsError::InvalidSignature));
    }

    #[test]
    fn key_and_signature_encodings_round_trip() {
        let mut rng = test_rng();
        let (sk, pk) = keypair_from_rng(&mut rng);
        let sig = sk.sign(MSG);
        assert_eq!(SecretKey::from_bytes(&sk.to_bytes()).unwrap().to_bytes(), sk.to_bytes());
        assert_eq!(PublicKey::from_bytes(&pk.to_bytes()).unwrap(), pk);
        assert_eq!(Signature::from_bytes(&sig.to_bytes()).unwrap(), sig);
        assert_eq!(
            PublicKey::from_bytes(&[1u8; 128]),
            Err(BlsError::MalformedEncoding)
        );
    }

    #[test]
    fn plain_aggregation_of_trusted_keys() {
        let mut rng = test_rng();
        let (sk1, pk1) = keypair_from_rng(&mut rng);
        let (sk2, pk2) = keypair_from_rng(&mut rng);
        let agg_sig = aggregate_signatures(&[sk1.sign(MSG), sk2.sign(MSG)]).unwrap();
        let agg_pk = aggregate_public_keys(&[pk1, pk2]).unwrap();
        assert_eq!(agg_pk.verify(MSG, &agg_sig), Ok(()));
    }

    #[test]
    fn empty_aggregation_is_rejected() {
        assert_eq!(aggregate_signatures(&[]), Err(BlsError::EmptyAggregation));
        assert_eq!(aggregate_public_keys(&[]), Err(BlsError::EmptyAggregation));
    }
}

mod bdn_scheme {
    use super::*;

    fn two_key_mask() -> (SecretKey, SecretKey, Mask) {
        let sk1 = sk_from_hex("1a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f809");
        let sk2 = sk_from_hex("00000000000000000000000000000000000000000000000000000000deadbeef");
        let mut mask = Mask::new(vec![sk1.public_key(), sk2.public_key()]).unwrap();
        mask.set_bit(0, true).unwrap();
        mask.set_bit(1, true).unwrap();
        (sk1, sk2, mask)
    }

    #[test]
    fn coefficients_are_stable() {
        let (_, _, mask) = two_key_mask();
        let coefs = bdn::hash_public_keys(mask.publics());
        assert_eq!(
            hex::encode(&coefs[0].to_bytes()[16..]),
            "9ef0e905274739b058cb8d7cb2ecc1f1"
        );
        assert_eq!(
            hex::encode(&coefs[1].to_bytes()[16..]),
            "74b468d77f63e059d8cff453bb3faa2e"
        );
    }

    #[test]
    fn aggregate_encodings_are_stable() {
        let (sk1, sk2, mask) = two_key_mask();
        let agg_pk = bdn::aggregate_public_keys(&mask).unwrap();
        let expected_pk = hex!(
            "1cd99394cef51340b2f1ce04b60e0f89bc03b96ffffb5598c326ecc1fe8e6f38"
            "2e2167c38c6d96a8a3df1f0425c5fe08038775a7898ae8d7de901cb313bc289d"
            "1d80df72227d9ccf893b7bdebf52ef37d3539697abdfb04df565f8a1e0d13666"
            "31d7a1583373ba22b0f25c58436b83ddcccb51be3f232ccea79105ef051e1329"
        );
        assert_eq!(agg_pk.to_bytes(), expected_pk);

        let agg_sig =
            bdn::aggregate_signatures(&[sk1.sign(MSG), sk2.sign(MSG)], &mask).unwrap();
        let expected_sig = hex!(
            "76e8297b2413cd441b406ed3393cc7bf0c39a8ac604bd660f58a8cd40aaf5a60"
            "04edcd15d57634b082833dc080fc7fb846b9c868f74f8f460d3c43007bba2a31"
        );
        assert_eq!(agg_sig.to_bytes(), expected_sig);
    }

    #[test]
    fn aggregate_signature_verifies() {
        let (sk1, sk2, mask) = two_key_mask();
        let agg_sig =
            bdn::aggregate_signatures(&[bdn::sign(&sk1, MSG), bdn::sign(&sk2, MSG)], &mask)
                .unwrap();
        assert_eq!(bdn::verify(&mask, MSG, &agg_sig), Ok(()));
    }

    #[test]
    fn coefficients_depend_on_roster_order() {
        let mut rng = test_rng();
        let (_, pk1) = keypair_from_rng(&mut rng);
        let (_, pk2) = keypair_from_rng(&mut rng);
        let forward = bdn::hash_public_keys(&[pk1.clone(), pk2.clone()]);
        let backward = bdn::hash_public_keys(&[pk2, pk1]);
        assert_ne!(forward[0], backward[1]);
    }

    #[test]
    fn mismatched_signature_count_is_rejected() {
        let (sk1, _, mask) = two_key_mask();
        assert_eq!(
            bdn::aggregate_signatures(&[sk1.sign(MSG)], &mask),
            Err(BlsError::InvalidMaskLength)
        );
    }

    #[test]
    fn rogue_key_attack_fails() {
        // The attacker knows sk_t and registers target - pk1 as its own
        // key, so the plain sum of the two roster keys collapses to the
        // target key the attacker controls.
        let (_, pk1) = fixed_keypair();
        let target_sk = sk_from_hex("0000000000000000000000000000000000000000000000000000000000031337");
        let target_pk = target_sk.public_key();
        let rogue = PublicKey::from_point(
            target_pk.point().add(&pk1.point().neg()),
        );

        let forged = target_sk.sign(MSG);

        // Plain aggregation accepts the forgery without participation of
        // the honest signer.
        let naive = aggregate_public_keys(&[pk1.clone(), rogue.clone()]).unwrap();
        assert_eq!(naive.verify(MSG, &forged), Ok(()));

        // The weighted aggregate does not.
        let mut mask = Mask::new(vec![pk1, rogue]).unwrap();
        mask.set_bit(0, true).unwrap();
        mask.set_bit(1, true).unwrap();
        assert_eq!(bdn::verify(&mask, MSG, &forged), Err(BlsError::InvalidSignature));
    }
}

mod masks {
    use super::*;

    fn roster(n: usize) -> Vec<PublicKey> {
        let mut rng = test_rng();
        (0..n).map(|_| keypair_from_rng(&mut rng).1).collect()
    }

    #[test]
    fn starts_all_disabled() {
        let mask = Mask::new(roster(9)).unwrap();
        assert_eq!(mask.len(), 9);
        assert_eq!(mask.mask_bytes().len(), 2);
        assert_eq!(mask.count_enabled(), 0);
        assert!(mask.aggregate_public_key().point().is_infinity());
    }

    #[test]
    fn toggling_bits_tracks_the_aggregate() {
        let keys = roster(4);
        let mut mask = Mask::new(keys.clone()).unwrap();
        mask.set_bit(0, true).unwrap();
        mask.set_bit(2, true).unwrap();
        assert_eq!(mask.indices_enabled(), vec![0, 2]);

        let expected = keys[0].point().add(keys[2].point());
        assert_eq!(mask.aggregate_public_key().point(), &expected);

        // Re-enabling an enabled bit must not double-count.
        mask.set_bit(0, true).unwrap();
        assert_eq!(mask.aggregate_public_key().point(), &expected);

        mask.set_bit(2, false).unwrap();
        assert_eq!(mask.indices_enabled(), vec![0]);
        assert_eq!(mask.aggregate_public_key().point(), keys[0].point());
    }

    #[test]
    fn set_mask_replaces_the_bitset() {
        let keys = roster(4);
        let mut mask = Mask::new(keys.clone()).unwrap();
        mask.set_bit(3, true).unwrap();
        mask.set_mask(&[0b0000_0011]).unwrap();
        assert_eq!(mask.indices_enabled(), vec![0, 1]);
        let expected = keys[0].point().add(keys[1].point());
        assert_eq!(mask.aggregate_public_key().point(), &expected);
    }

    #[test]
    fn participants_follow_roster_order() {
        let keys = roster(3);
        let mut mask = Mask::new(keys.clone()).unwrap();
        mask.set_bit(2, true).unwrap();
        mask.set_bit(0, true).unwrap();
        assert_eq!(mask.participants(), vec![keys[0].clone(), keys[2].clone()]);
    }

    #[test]
    fn empty_roster_is_rejected() {
        assert!(matches!(Mask::new(vec![]), Err(BlsError::EmptyRoster)));
    }

    #[test]
    fn key_lookup() {
        let keys = roster(3);
        let mut mask = Mask::new(keys.clone()).unwrap();
        assert_eq!(mask.index_of(&keys[1]), Ok(1));
        mask.set_key(&keys[1], true).unwrap();
        assert_eq!(mask.bit(1), Ok(true));

        let mut rng = ChaCha20Rng::seed_from_u64(99);
        let (_, stranger) = keypair_from_rng(&mut rng);
        assert_eq!(mask.index_of(&stranger), Err(BlsError::KeyNotFound));
        assert_eq!(mask.set_key(&stranger, true), Err(BlsError::KeyNotFound));
    }

    #[test]
    fn toggling_twice_restores_the_mask() {
        let keys = roster(5);
        let mut mask = Mask::new(keys).unwrap();
        mask.set_mask(&[0b0001_0101]).unwrap();
        let bytes_before = mask.mask_bytes().to_vec();
        let agg_before = mask.aggregate_public_key();
        mask.set_bit(1, true).unwrap();
        mask.set_bit(1, false).unwrap();
        assert_eq!(mask.mask_bytes(), &bytes_before[..]);
        assert_eq!(mask.aggregate_public_key(), agg_before);
    }

    #[test]
    fn out_of_range_and_bad_lengths_are_rejected() {
        let mut mask = Mask::new(roster(4)).unwrap();
        assert_eq!(mask.set_bit(4, true), Err(BlsError::IndexOutOfRange));
        assert_eq!(mask.bit(4), Err(BlsError::IndexOutOfRange));
        assert_eq!(mask.set_mask(&[0, 0]), Err(BlsError::InvalidMaskLength));
    }
}

mod policies {
    use super::*;

    fn enabled_mask(n: usize, enabled: usize) -> Mask {
        let mut rng = test_rng();
        let keys: Vec<_> = (0..n).map(|_| keypair_from_rng(&mut rng).1).collect();
        let mut mask = Mask::new(keys).unwrap();
        for i in 0..enabled {
            mask.set_bit(i, true).unwrap();
        }
        mask
    }

    #[test]
    fn byzantine_threshold_values() {
        assert_eq!(byzantine_threshold(0), 0);
        assert_eq!(byzantine_threshold(1), 1);
        assert_eq!(byzantine_threshold(4), 3);
        assert_eq!(byzantine_threshold(7), 5);
        assert_eq!(byzantine_threshold(10), 7);
    }

    #[test]
    fn complete_policy_requires_everyone() {
        assert_eq!(CompletePolicy.check(&enabled_mask(4, 4)), Ok(()));
        assert_eq!(
            CompletePolicy.check(&enabled_mask(4, 3)),
            Err(BlsError::NotEnoughParticipants)
        );
    }

    #[test]
    fn threshold_policy_tolerates_the_byzantine_third() {
        let policy = ThresholdPolicy::byzantine(4);
        assert_eq!(policy.threshold(), 3);
        assert_eq!(policy.check(&enabled_mask(4, 3)), Ok(()));
        assert_eq!(policy.check(&enabled_mask(4, 4)), Ok(()));
        assert_eq!(
            policy.check(&enabled_mask(4, 2)),
            Err(BlsError::NotEnoughParticipants)
        );
    }
}
