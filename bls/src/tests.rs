use super::*;
use curve::{BaseField, CurveError, Fp2, G1Affine, G2Affine, ScalarField};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

const MSG: &[u8] = b"test message";

// r and r - 1, big-endian
const ORDER_HEX: &str = "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001";
const ORDER_MINUS_ONE_HEX: &str =
    "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000000";
// p, big-endian
const BASE_MODULUS_HEX: &str = "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47";

fn be_bytes(hex_str: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&hex::decode(hex_str).expect("hex"));
    out
}

// a += b over big-endian bytes; the sum must fit.
fn add_be(a: &mut [u8], b: &[u8; 32]) {
    let mut carry = 0u16;
    for (x, y) in a.iter_mut().rev().zip(b.iter().rev()) {
        let sum = u16::from(*x) + u16::from(*y) + carry;
        *x = sum as u8;
        carry = sum >> 8;
    }
    assert_eq!(carry, 0);
}

fn five() -> SecretKey {
    SecretKey::from_scalar(ScalarField::from_canonical_u64(5)).expect("nonzero")
}

#[test]
fn test_sign_verify() {
    let mut rng = StdRng::seed_from_u64(42);
    let config = SchemeConfig::default();
    let keypair = Keypair::generate(&mut rng).expect("keygen");

    let sig = keypair.sign(&config, MSG).expect("sign");
    let ok = keypair.public.verify(&config, MSG, &sig).expect("verify");
    assert!(ok);
    assert!(verify(&config, &keypair.public.g2, MSG, &sig).expect("verify"));
}

#[test]
fn test_verify_rejects_wrong_message() {
    let mut rng = StdRng::seed_from_u64(42);
    let config = SchemeConfig::default();
    let keypair = Keypair::generate(&mut rng).expect("keygen");
    let sig = keypair.sign(&config, MSG).expect("sign");

    let ok = keypair
        .verify(&config, b"test messagf", &sig)
        .expect("verify");
    assert!(!ok);
}

#[test]
fn test_verify_rejects_wrong_key() {
    let mut rng = StdRng::seed_from_u64(42);
    let config = SchemeConfig::default();
    let keypair = Keypair::generate(&mut rng).expect("keygen");
    let sig = keypair.sign(&config, MSG).expect("sign");

    let other = Keypair::generate(&mut rng).expect("keygen");
    let ok = other.public.verify(&config, MSG, &sig).expect("verify");
    assert!(!ok);
}

#[test]
fn test_verify_rejects_random_signature() {
    let mut rng = StdRng::seed_from_u64(7);
    let config = SchemeConfig::default();
    let keypair = Keypair::generate(&mut rng).expect("keygen");

    let point = G1Affine::generator() * ScalarField::random_nonzero(&mut rng);
    let forged = Signature(point);
    let ok = keypair.public.verify(&config, MSG, &forged).expect("verify");
    assert!(!ok);
}

#[test]
fn test_identity_key_and_signature_rejected() {
    let config = SchemeConfig::default();
    let sk = five();
    let sig = sk.sign(&config, MSG).expect("sign");

    let identity_sig = Signature(G1Affine::INFINITY);
    assert_eq!(
        verify(&config, &sk.public_key().g2, MSG, &identity_sig),
        Ok(false)
    );
    assert_eq!(verify(&config, &G2Affine::INFINITY, MSG, &sig), Ok(false));
}

#[test]
fn test_fixed_key_vectors() {
    let config = SchemeConfig::default();
    let sk = five();
    let pk = sk.public_key();

    let pk1 = G1Affine::from_decimal(
        "10744596414106452074759370245733544594153395043370666422502510773307029471145",
        "848677436511517736191562425154572367705380862894644942948681172815252343932",
    )
    .expect("valid point");
    let pk2 = G2Affine::from_decimal(
        [
            "20954117799226682825035885491234530437475518021362091509513177301640194298072",
            "4540444681147253467785307942530223364530218361853237193970751657229138047649",
        ],
        [
            "21508930868448350162258892668132814424284302804699005394342512102884055673846",
            "11631839690097995216017572651900167465857396346217730511548857041925508482915",
        ],
    )
    .expect("valid point");
    assert_eq!(pk.g1, pk1);
    assert_eq!(pk.g2, pk2);

    let h = config.hash_to_curve.hash(MSG).expect("hash");
    assert_eq!(
        h.to_string(),
        "(18521112453352730579645358173921106118252889045846003563531873900220182176793, \
         12220611982697050695278792018747974293998452760543899595396661668417277566823)"
    );

    let sig = sk.sign(&config, MSG).expect("sign");
    let expected_sig = G1Affine::from_decimal(
        "12358593106317096658271777943447289735395390228058147304418624907471105332413",
        "8129488696150512428890588575761457163061813068414904243698960286928444354881",
    )
    .expect("valid point");
    assert_eq!(sig, Signature(expected_sig));
    assert_eq!(pk.verify(&config, MSG, &sig), Ok(true));
}

#[test]
fn test_scalar_multiply_strategy_round_trip() {
    let config = SchemeConfig::new(HashToCurve::ScalarMultiply);
    let sk = five();
    let sig = sk.sign(&config, MSG).expect("sign");

    let pk = sk.public_key();
    assert_eq!(pk.verify(&config, MSG, &sig), Ok(true));
    // Signatures do not carry over between strategies.
    assert_eq!(pk.verify(&SchemeConfig::default(), MSG, &sig), Ok(false));
}

#[test]
fn test_hash_is_deterministic() {
    let strategy = HashToCurve::default();
    let a = strategy.hash(MSG).expect("hash");
    let b = strategy.hash(MSG).expect("hash");
    assert_eq!(a, b);
    assert!(a.is_on_curve());

    let other = strategy.hash(b"different message").expect("hash");
    let expected = G1Affine::from_decimal(
        "8823446526903122534826047940781800456984820900363829944010863181459995138988",
        "3564845137074077252294897632706102668771451631221418474545192832528263730370",
    )
    .expect("valid point");
    assert_eq!(other, expected);
    assert_ne!(a, other);
}

#[test]
fn test_hash_terminates_on_random_messages() {
    let mut rng = StdRng::seed_from_u64(2024);
    let strategy = HashToCurve::default();
    for _ in 0..300 {
        let len = rng.random_range(0..64);
        let mut msg = vec![0u8; len];
        rng.fill(&mut msg[..]);

        let h = strategy.hash(&msg).expect("hash within bound");
        assert!(h.is_on_curve());
        assert!(!h.is_infinity());
    }
}

#[test]
fn test_exhausted_bound_propagates_from_sign() {
    let config = SchemeConfig::new(HashToCurve::TryAndIncrement { max_attempts: 3 });
    assert_eq!(
        five().sign(&config, b"message 7"),
        Err(BlsError::HashToCurveExhausted { attempts: 3 })
    );
}

#[test]
fn test_zero_attempt_config_rejected() {
    let config = SchemeConfig::new(HashToCurve::TryAndIncrement { max_attempts: 0 });
    assert!(matches!(config.validate(), Err(BlsError::InvalidConfig(_))));

    let sk = five();
    assert!(matches!(sk.sign(&config, MSG), Err(BlsError::InvalidConfig(_))));

    let sig = sk.sign(&SchemeConfig::default(), MSG).expect("sign");
    assert!(matches!(
        verify(&config, &sk.public_key().g2, MSG, &sig),
        Err(BlsError::InvalidConfig(_))
    ));
}

#[test]
fn test_secret_key_range() {
    assert_eq!(
        SecretKey::from_scalar(ScalarField::ZERO).err(),
        Some(BlsError::ScalarOutOfRange)
    );
    assert_eq!(
        SecretKey::from_be_bytes(&[0u8; 32]).err(),
        Some(BlsError::ScalarOutOfRange)
    );
    assert_eq!(
        SecretKey::from_be_bytes(&be_bytes(ORDER_HEX)).err(),
        Some(BlsError::ScalarOutOfRange)
    );
    assert_eq!(
        SecretKey::from_be_bytes(&[0xff; 32]).err(),
        Some(BlsError::ScalarOutOfRange)
    );

    let max = SecretKey::from_be_bytes(&be_bytes(ORDER_MINUS_ONE_HEX)).expect("r - 1 is valid");
    assert_eq!(max.to_be_bytes(), be_bytes(ORDER_MINUS_ONE_HEX));
    // (r - 1) * G = -G
    assert_eq!(max.public_key().g1, -G1Affine::generator());
}

#[test]
fn test_secret_key_bytes_round_trip() {
    let mut rng = StdRng::seed_from_u64(3);
    let sk = SecretKey::random(&mut rng);
    let restored = SecretKey::from_be_bytes(&sk.to_be_bytes()).expect("in range");
    assert_eq!(sk, restored);
    assert_eq!(sk.public_key(), PublicKey::from(&restored));
}

#[test]
fn test_secret_key_debug_is_redacted() {
    let keypair = Keypair::from_secret(five()).expect("keypair");
    let printed = format!("{keypair:?}");
    assert!(printed.contains("SecretKey(<redacted>)"));
    assert!(!printed.contains("scalar"));
}

#[test]
fn test_off_curve_inputs_rejected() {
    let config = SchemeConfig::default();
    let sk = five();
    let pk = sk.public_key();
    let sig = sk.sign(&config, MSG).expect("sign");

    let bad_sig = Signature(G1Affine::new(BaseField::ONE, BaseField::ONE));
    assert_eq!(
        pk.verify(&config, MSG, &bad_sig),
        Err(BlsError::CurveMembership(CurveError::NotOnCurve { group: "G1" }))
    );

    let bad_pk2 = G2Affine::new(pk.g2.x, pk.g2.y + Fp2::ONE);
    assert_eq!(
        verify(&config, &bad_pk2, MSG, &sig),
        Err(BlsError::CurveMembership(CurveError::NotOnCurve { group: "G2" }))
    );

    let bad_pk = PublicKey {
        g1: G1Affine::new(pk.g1.x, pk.g1.y.double()),
        g2: pk.g2,
    };
    assert!(matches!(bad_pk.validate(), Err(BlsError::CurveMembership(_))));
}

#[test]
fn test_public_key_components_match() {
    let mut rng = StdRng::seed_from_u64(11);
    let a = Keypair::generate(&mut rng).expect("keygen");
    let b = Keypair::generate(&mut rng).expect("keygen");

    assert!(a.public.has_matching_components());
    let mixed = PublicKey {
        g1: a.public.g1,
        g2: b.public.g2,
    };
    assert!(!mixed.has_matching_components());
    assert_eq!(a.public.validate(), Ok(()));
    assert_eq!(mixed.validate(), Err(BlsError::MismatchedPublicKey));

    // Decoding does not vouch for the key either.
    let bytes = bincode::serialize(&mixed).expect("serialize");
    let decoded: PublicKey = bincode::deserialize(&bytes).expect("deserialize");
    assert_eq!(decoded.validate(), Err(BlsError::MismatchedPublicKey));
}

#[test]
fn test_serde_round_trip() {
    let config = SchemeConfig::default();
    let keypair = Keypair::from_secret(five()).expect("keypair");
    let sig = keypair.sign(&config, MSG).expect("sign");

    let bytes = bincode::serialize(&sig).expect("serialize");
    let decoded: Signature = bincode::deserialize(&bytes).expect("deserialize");
    assert_eq!(decoded, sig);

    let bytes = bincode::serialize(&keypair.public).expect("serialize");
    let decoded: PublicKey = bincode::deserialize(&bytes).expect("deserialize");
    assert_eq!(decoded, keypair.public);
    assert_eq!(decoded.validate(), Ok(()));

    let bytes = bincode::serialize(&config).expect("serialize");
    let decoded: SchemeConfig = bincode::deserialize(&bytes).expect("deserialize");
    assert_eq!(decoded, config);
}

#[test]
fn test_non_canonical_encodings_rejected() {
    let config = SchemeConfig::default();
    let sk = five();
    let pk = sk.public_key();
    let sig = sk.sign(&config, MSG).expect("sign");
    let p = be_bytes(BASE_MODULUS_HEX);

    let bytes = bincode::serialize(&sig).expect("serialize");
    assert_eq!(&bytes[..32], &sig.point().x.to_be_bytes()[..]);

    // x + p is the same residue as x, so it must not decode to a second signature.
    let mut shifted = bytes.clone();
    add_be(&mut shifted[..32], &p);
    assert!(bincode::deserialize::<Signature>(&shifted).is_err());

    let mut flagged = bytes.clone();
    flagged[64] = 1;
    assert!(bincode::deserialize::<Signature>(&flagged).is_err());

    let decoded: Signature = bincode::deserialize(&bytes).expect("deserialize");
    assert_eq!(pk.verify(&config, MSG, &decoded), Ok(true));

    // Same for the first coordinate of pk2, which follows the 65-byte pk1.
    let bytes = bincode::serialize(&pk).expect("serialize");
    let mut shifted = bytes.clone();
    add_be(&mut shifted[65..97], &p);
    assert!(bincode::deserialize::<PublicKey>(&shifted).is_err());
}

#[test]
fn test_parallel_sign_verify() {
    let config = SchemeConfig::default();
    let keypair = Keypair::from_secret(five()).expect("keypair");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let keypair = &keypair;
                let config = &config;
                scope.spawn(move || {
                    let msg = format!("parallel message {i}");
                    let sig = keypair.sign(config, msg.as_bytes()).expect("sign");
                    keypair.verify(config, msg.as_bytes(), &sig).expect("verify")
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().expect("thread panicked"));
        }
    });
}
