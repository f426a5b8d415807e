#![allow(clippy::unwrap_used)]

use crate::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn test_rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(4891)
}

mod wire_format {
    use super::*;

    #[test]
    fn tags_are_eight_ascii_bytes() {
        assert_eq!(Group::Bn256G1.wire_tag(), b"bn256.g1");
        assert_eq!(Group::Bn256G2.wire_tag(), b"bn256.pt");
        assert_eq!(Group::Ed25519.wire_tag(), b"ed25519\0");
    }

    #[test]
    fn marshal_prefixes_the_tag() {
        let p = Point::generator(Group::Bn256G1);
        let bytes = p.marshal();
        assert_eq!(&bytes[..8], b"bn256.g1");
        assert_eq!(bytes.len(), 72);

        let q = Point::generator(Group::Bn256G2);
        assert_eq!(&q.marshal()[..8], b"bn256.pt");
        assert_eq!(q.marshal().len(), 136);

        let e = Point::generator(Group::Ed25519);
        assert_eq!(&e.marshal()[..8], b"ed25519\0");
        assert_eq!(e.marshal().len(), 40);
    }

    #[test]
    fn points_round_trip_through_the_factory() {
        let mut rng = test_rng();
        for group in [Group::Bn256G1, Group::Bn256G2, Group::Ed25519] {
            let k = Scalar::random(group, &mut rng);
            let p = Point::generator(group).mul(&k).unwrap();
            let back = Point::unmarshal(&p.marshal()).unwrap();
            assert_eq!(back, p);
            assert_eq!(back.group(), group);
        }
    }

    #[test]
    fn unknown_tags_fail_closed() {
        let mut bytes = Point::generator(Group::Bn256G1).marshal();
        bytes[..8].copy_from_slice(b"bn256.gX");
        assert_eq!(Point::unmarshal(&bytes), Err(SuiteError::UnknownPointType));
        assert_eq!(Point::unmarshal(b"short"), Err(SuiteError::UnknownPointType));
    }

    #[test]
    fn wrong_length_payloads_are_rejected() {
        let mut bytes = Point::generator(Group::Bn256G1).marshal();
        bytes.pop();
        assert_eq!(Point::unmarshal(&bytes), Err(SuiteError::MalformedPoint));
    }

    #[test]
    fn tampered_points_fail_decoding() {
        let mut bytes = Point::generator(Group::Bn256G2).marshal();
        let last = bytes.len() - 1;
        bytes[last] ^= 1;
        assert_eq!(Point::unmarshal(&bytes), Err(SuiteError::MalformedPoint));
    }

    #[test]
    fn identity_points_round_trip() {
        for group in [Group::Bn256G1, Group::Bn256G2, Group::Ed25519] {
            let id = Point::identity(group);
            assert_eq!(Point::unmarshal(&id.marshal()).unwrap(), id);
        }
    }
}

mod scalars {
    use super::*;

    #[test]
    fn bn256_scalars_serialize_big_endian() {
        let one = Scalar::one(Group::Bn256G1);
        let bytes = one.serialize();
        assert_eq!(bytes[31], 1);
        assert_eq!(bytes[0], 0);
    }

    #[test]
    fn ed25519_scalars_serialize_little_endian() {
        let one = Scalar::one(Group::Ed25519);
        let bytes = one.serialize();
        assert_eq!(bytes[0], 1);
        assert_eq!(bytes[31], 0);
    }

    #[test]
    fn encodings_round_trip() {
        let mut rng = test_rng();
        for group in [Group::Bn256G1, Group::Ed25519] {
            let s = Scalar::random(group, &mut rng);
            assert_eq!(Scalar::deserialize(group, &s.serialize()).unwrap(), s);
        }
    }

    #[test]
    fn non_canonical_encodings_are_rejected() {
        assert_eq!(
            Scalar::deserialize(Group::Ed25519, &[0xff; 32]),
            Err(SuiteError::MalformedScalar)
        );
        assert_eq!(
            Scalar::deserialize(Group::Bn256G1, &[0xff; 32]),
            Err(SuiteError::MalformedScalar)
        );
        assert_eq!(
            Scalar::deserialize(Group::Bn256G1, &[0u8; 31]),
            Err(SuiteError::MalformedScalar)
        );
    }

    #[test]
    fn arithmetic_stays_in_family() {
        let mut rng = test_rng();
        let a = Scalar::random(Group::Bn256G1, &mut rng);
        let b = Scalar::random(Group::Ed25519, &mut rng);
        assert_eq!(a.add(&b), Err(SuiteError::CurveMismatch));
        assert_eq!(a.mul(&b), Err(SuiteError::CurveMismatch));
    }

    #[test]
    fn inversion() {
        let mut rng = test_rng();
        for group in [Group::Bn256G1, Group::Ed25519] {
            let s = Scalar::random(group, &mut rng);
            let inv = s.invert().unwrap();
            assert_eq!(s.mul(&inv).unwrap(), Scalar::one(group));
            assert_eq!(
                Scalar::zero(group).invert(),
                Err(SuiteError::NotInvertible)
            );
        }
    }
}

mod points {
    use super::*;

    #[test]
    fn cross_family_operations_are_rejected() {
        let g1 = Point::generator(Group::Bn256G1);
        let ed = Point::generator(Group::Ed25519);
        let mut rng = test_rng();
        let k = Scalar::random(Group::Ed25519, &mut rng);

        assert_eq!(g1.add(&ed), Err(SuiteError::CurveMismatch));
        assert_eq!(g1.sub(&ed), Err(SuiteError::CurveMismatch));
        assert_eq!(g1.mul(&k), Err(SuiteError::CurveMismatch));
    }

    #[test]
    fn group_law_holds_per_family() {
        let mut rng = test_rng();
        for group in [Group::Bn256G1, Group::Bn256G2, Group::Ed25519] {
            let a = Scalar::random(group, &mut rng);
            let b = Scalar::random(group, &mut rng);
            let g = Point::generator(group);
            let lhs = g.mul(&a).unwrap().add(&g.mul(&b).unwrap()).unwrap();
            let rhs = g.mul(&a.add(&b).unwrap()).unwrap();
            assert_eq!(lhs, rhs);
            assert_eq!(g.sub(&g).unwrap(), Point::identity(group));
        }
    }

    #[test]
    fn base_mul_picks_the_scalar_family() {
        let mut rng = test_rng();
        let bn = Scalar::random(Group::Bn256G1, &mut rng);
        assert_eq!(Point::base_mul(&bn).group(), Group::Bn256G1);
        let ed = Scalar::random(Group::Ed25519, &mut rng);
        assert_eq!(Point::base_mul(&ed).group(), Group::Ed25519);
    }
}

mod schnorr_scheme {
    use super::*;

    #[test]
    fn sign_and_verify() {
        let mut rng = test_rng();
        let (sk, pk) = schnorr::keypair_from_rng(&mut rng);
        let sig = schnorr::sign(&mut rng, &sk, b"attack at dawn").unwrap();
        assert_eq!(sig.len(), schnorr::SIGNATURE_BYTES);
        assert_eq!(schnorr::verify(&pk, b"attack at dawn", &sig), Ok(true));
    }

    #[test]
    fn tampering_fails_verification_not_parsing() {
        let mut rng = test_rng();
        let (sk, pk) = schnorr::keypair_from_rng(&mut rng);
        let sig = schnorr::sign(&mut rng, &sk, b"attack at dawn").unwrap();
        assert_eq!(schnorr::verify(&pk, b"attack at dusk", &sig), Ok(false));
    }

    #[test]
    fn wrong_key_fails_verification() {
        let mut rng = test_rng();
        let (sk, _) = schnorr::keypair_from_rng(&mut rng);
        let (_, other_pk) = schnorr::keypair_from_rng(&mut rng);
        let sig = schnorr::sign(&mut rng, &sk, b"msg").unwrap();
        assert_eq!(schnorr::verify(&other_pk, b"msg", &sig), Ok(false));
    }

    #[test]
    fn malformed_inputs_are_errors_not_false() {
        let mut rng = test_rng();
        let (sk, pk) = schnorr::keypair_from_rng(&mut rng);
        let sig = schnorr::sign(&mut rng, &sk, b"msg").unwrap();

        assert_eq!(
            schnorr::verify(&pk, b"msg", &sig[..32]),
            Err(SuiteError::MalformedSignature)
        );
        let mut bad = sig.clone();
        bad[32..].copy_from_slice(&[0xff; 32]);
        assert_eq!(
            schnorr::verify(&pk, b"msg", &bad),
            Err(SuiteError::MalformedSignature)
        );

        let bn_key = Point::generator(Group::Bn256G1);
        assert_eq!(
            schnorr::verify(&bn_key, b"msg", &sig),
            Err(SuiteError::CurveMismatch)
        );
        let bn_sk = Scalar::random(Group::Bn256G1, &mut rng);
        assert_eq!(
            schnorr::sign(&mut rng, &bn_sk, b"msg"),
            Err(SuiteError::CurveMismatch)
        );
    }
}

mod dispatch {
    use super::*;
    use byzcoin_crypto_bls::bls;

    #[test]
    fn schnorr_keys_dispatch_to_schnorr() {
        let mut rng = test_rng();
        let (sk, pk) = schnorr::keypair_from_rng(&mut rng);
        let sig = schnorr::sign(&mut rng, &sk, b"payload").unwrap();
        assert_eq!(verify_signature(&pk, b"payload", &sig), Ok(true));
        assert_eq!(verify_signature(&pk, b"other", &sig), Ok(false));
    }

    #[test]
    fn bls_keys_dispatch_to_bls() {
        let mut rng = test_rng();
        let (sk, pk) = bls::keypair_from_rng(&mut rng);
        let sig = sk.sign(b"payload").to_bytes();
        let pk = Point::unmarshal(
            &[b"bn256.pt".as_slice(), pk.to_bytes().as_slice()].concat(),
        )
        .unwrap();
        assert_eq!(verify_signature(&pk, b"payload", &sig), Ok(true));
        assert_eq!(verify_signature(&pk, b"other", &sig), Ok(false));
        assert_eq!(
            verify_signature(&pk, b"payload", &sig[..10]),
            Err(SuiteError::MalformedSignature)
        );
    }

    #[test]
    fn g1_points_are_not_verification_keys() {
        let g1 = Point::generator(Group::Bn256G1);
        assert_eq!(
            verify_signature(&g1, b"msg", &[0u8; 64]),
            Err(SuiteError::CurveMismatch)
        );
    }
}

mod serde_round_trips {
    use super::*;

    #[test]
    fn points() {
        let mut rng = test_rng();
        for group in [Group::Bn256G1, Group::Bn256G2, Group::Ed25519] {
            let k = Scalar::random(group, &mut rng);
            let p = Point::generator(group).mul(&k).unwrap();
            let json = serde_json::to_string(&p).unwrap();
            let back: Point = serde_json::from_str(&json).unwrap();
            assert_eq!(back, p);
        }
    }

    #[test]
    fn scalars() {
        let mut rng = test_rng();
        for group in [Group::Bn256G1, Group::Ed25519] {
            let s = Scalar::random(group, &mut rng);
            let json = serde_json::to_string(&s).unwrap();
            let back: Scalar = serde_json::from_str(&json).unwrap();
            assert_eq!(back, s);
        }
    }
}
