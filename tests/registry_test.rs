use std::collections::HashSet;

use apksig_registry::{
    find_by_id, sdk, ContentDigestAlgorithm, HashAlgorithm, KeyAlgorithm, MaskGeneration,
    PssParameters, RegistryError, SignatureAlgorithm, SignatureScheme,
};

#[test]
fn test_every_id_round_trips() {
    for alg in SignatureAlgorithm::all() {
        let found = find_by_id(alg.id()).expect("catalog id must resolve");
        assert_eq!(found, alg);
        assert_eq!(found.id(), alg.id());
        assert_eq!(alg.descriptor().algorithm(), alg);
        assert_eq!(alg.descriptor().id(), alg.id());
    }
}

#[test]
fn test_wire_ids_are_fixed() {
    let expected = [
        (0x0101, SignatureAlgorithm::RsaPssWithSha256),
        (0x0102, SignatureAlgorithm::RsaPssWithSha512),
        (0x0103, SignatureAlgorithm::RsaPkcs1V15WithSha256),
        (0x0104, SignatureAlgorithm::RsaPkcs1V15WithSha512),
        (0x0201, SignatureAlgorithm::EcdsaWithSha256),
        (0x0202, SignatureAlgorithm::EcdsaWithSha512),
        (0x0301, SignatureAlgorithm::DsaWithSha256),
        (0x0421, SignatureAlgorithm::VerityRsaPkcs1V15WithSha256),
        (0x0423, SignatureAlgorithm::VerityEcdsaWithSha256),
        (0x0425, SignatureAlgorithm::VerityDsaWithSha256),
    ];
    assert_eq!(SignatureAlgorithm::ALL.len(), expected.len());
    for (id, alg) in expected {
        assert_eq!(alg.id(), id);
        assert_eq!(find_by_id(id), Some(alg));
    }
}

#[test]
fn test_unknown_ids_are_absent() {
    for id in [0x0000, 0x0100, 0x0105, 0x0203, 0x0422, 0x0424, 0xFFFF, 0xFFFF_FFFF] {
        assert_eq!(find_by_id(id), None, "id {:#x} must not resolve", id);
    }
    // The high half is not ignored.
    assert_eq!(find_by_id(0x0001_0101), None);
}

#[test]
fn test_try_from_reports_unknown_id() {
    assert_eq!(
        SignatureAlgorithm::try_from(0x0201).ok(),
        Some(SignatureAlgorithm::EcdsaWithSha256)
    );
    match SignatureAlgorithm::try_from(0xFFFF_FFFF) {
        Err(RegistryError::UnknownAlgorithm(id)) => assert_eq!(id, 0xFFFF_FFFF),
        other => panic!("expected UnknownAlgorithm, got {:?}", other),
    }
}

#[test]
fn test_ids_are_unique() {
    let ids: HashSet<u32> = SignatureAlgorithm::all().map(|a| a.id()).collect();
    assert_eq!(ids.len(), SignatureAlgorithm::ALL.len());

    let names: HashSet<&str> = SignatureAlgorithm::all().map(|a| a.name()).collect();
    assert_eq!(names.len(), SignatureAlgorithm::ALL.len());
}

#[test]
fn test_pss_salt_matches_digest_length() {
    let mut pss_entries = 0;
    for alg in SignatureAlgorithm::all() {
        if let SignatureScheme::RsaPss(p) = alg.signature_scheme() {
            pss_entries += 1;
            assert_eq!(p.salt_len, p.digest.output_len(), "{}", alg);
            assert_eq!(p.mgf, MaskGeneration::Mgf1(p.digest), "{}", alg);
            assert_eq!(p.trailer, 0xbc);
            assert_eq!(p.trailer_field(), 1);
            assert_eq!(*p, PssParameters::for_hash(p.digest));
        }
    }
    assert_eq!(pss_entries, 2);
    assert_eq!(HashAlgorithm::Sha256.output_len(), 32);
    assert_eq!(HashAlgorithm::Sha512.output_len(), 64);
}

#[test]
fn test_output_len_agrees_with_ring() {
    for hash in [HashAlgorithm::Sha256, HashAlgorithm::Sha512] {
        assert_eq!(hash.output_len(), hash.ring_algorithm().output_len());
        let digest = ring::digest::digest(hash.ring_algorithm(), b"apk");
        assert_eq!(digest.as_ref().len(), hash.output_len());
    }
}

#[test]
fn test_non_pss_schemes_carry_no_parameters() {
    for alg in SignatureAlgorithm::all() {
        let scheme = alg.signature_scheme();
        let (_, params) = alg.jca_signature_algorithm_and_params();
        match scheme {
            SignatureScheme::RsaPss(_) => assert!(params.is_some(), "{}", alg),
            SignatureScheme::RsaPkcs1V15(_) | SignatureScheme::Ecdsa(_) | SignatureScheme::Dsa(_) => {
                assert!(params.is_none(), "{}", alg);
                assert!(scheme.parameters().is_none());
            }
        }
    }
}

#[test]
fn test_scheme_matches_key_family_and_digest() {
    for alg in SignatureAlgorithm::all() {
        let scheme = alg.signature_scheme();
        assert_eq!(scheme.key_algorithm(), alg.key_algorithm(), "{}", alg);
        assert_eq!(scheme.hash(), alg.content_digest_algorithm().hash(), "{}", alg);
    }
}

#[test]
fn test_verity_entries_need_newer_platform() {
    for verity in SignatureAlgorithm::all().filter(|a| a.is_verity()) {
        let chunked = SignatureAlgorithm::all()
            .filter(|a| !a.is_verity())
            .find(|a| {
                a.key_algorithm() == verity.key_algorithm()
                    && a.content_digest_algorithm().hash() == verity.content_digest_algorithm().hash()
            })
            .expect("every verity entry has a 1 MB chunked counterpart");
        assert!(verity.min_sdk_version() >= chunked.min_sdk_version());
        assert!(verity.min_sdk_version() > chunked.min_sdk_version());
    }
}

#[test]
fn test_rsa_pss_sha256_descriptor() {
    let alg = find_by_id(0x0101).unwrap();
    assert_eq!(alg.key_algorithm(), KeyAlgorithm::Rsa);
    assert_eq!(alg.jca_key_algorithm(), "RSA");
    assert_eq!(alg.content_digest_algorithm(), ContentDigestAlgorithm::ChunkedSha256);
    assert_eq!(alg.min_sdk_version(), sdk::N);

    let scheme = alg.signature_scheme();
    assert_eq!(scheme.name(), "RSA-PSS");
    let params = scheme.parameters().unwrap();
    assert_eq!(params.digest, HashAlgorithm::Sha256);
    assert_eq!(params.mgf, MaskGeneration::Mgf1(HashAlgorithm::Sha256));
    assert_eq!(params.salt_len, 32);
    assert_eq!(params.trailer, 0xBC);

    let (jca, jca_params) = alg.jca_signature_algorithm_and_params();
    assert_eq!(jca, "SHA256withRSA/PSS");
    assert_eq!(jca_params, Some(params));
}

#[test]
fn test_rsa_pss_sha512_descriptor() {
    let alg = SignatureAlgorithm::RsaPssWithSha512;
    assert_eq!(alg.content_digest_algorithm(), ContentDigestAlgorithm::ChunkedSha512);
    let params = alg.signature_scheme().parameters().unwrap();
    assert_eq!(params.digest, HashAlgorithm::Sha512);
    assert_eq!(params.salt_len, 64);
    assert_eq!(alg.jca_signature_algorithm_and_params().0, "SHA512withRSA/PSS");
}

#[test]
fn test_ecdsa_sha256_descriptor() {
    let alg = find_by_id(0x0201).unwrap();
    assert_eq!(alg.key_algorithm(), KeyAlgorithm::Ec);
    assert_eq!(alg.jca_key_algorithm(), "EC");
    assert_eq!(alg.content_digest_algorithm(), ContentDigestAlgorithm::ChunkedSha256);
    assert_eq!(*alg.signature_scheme(), SignatureScheme::Ecdsa(HashAlgorithm::Sha256));
    assert_eq!(alg.signature_scheme().name(), "ECDSA");
    assert_eq!(
        alg.jca_signature_algorithm_and_params(),
        ("SHA256withECDSA", None)
    );
}

#[test]
fn test_verity_ecdsa_descriptor() {
    let alg = find_by_id(0x0423).unwrap();
    assert_eq!(alg.key_algorithm(), KeyAlgorithm::Ec);
    assert_eq!(
        alg.content_digest_algorithm(),
        ContentDigestAlgorithm::VerityChunkedSha256
    );
    assert_eq!(alg.signature_scheme().name(), "ECDSA");
    assert!(alg.signature_scheme().parameters().is_none());
    assert_eq!(alg.min_sdk_version(), sdk::P);
    assert!(alg.min_sdk_version() > SignatureAlgorithm::EcdsaWithSha256.min_sdk_version());
}

#[test]
fn test_verity_rsa_pkcs1_descriptor() {
    let alg = find_by_id(0x0421).unwrap();
    assert_eq!(alg, SignatureAlgorithm::VerityRsaPkcs1V15WithSha256);
    assert_eq!(alg.jca_key_algorithm(), "RSA");
    assert_eq!(alg.signature_scheme().name(), "RSA-PKCS1v1.5");
    assert_eq!(alg.jca_signature_algorithm_and_params(), ("SHA256withRSA", None));
}

#[test]
fn test_dsa_descriptors() {
    for id in [0x0301, 0x0425] {
        let alg = find_by_id(id).unwrap();
        assert_eq!(alg.key_algorithm(), KeyAlgorithm::Dsa);
        assert_eq!(alg.jca_key_algorithm(), "DSA");
        assert_eq!(alg.jca_signature_algorithm_and_params(), ("SHA256withDSA", None));
    }
}

#[test]
fn test_content_digest_kinds() {
    let chunked = ContentDigestAlgorithm::ChunkedSha256;
    assert_eq!(chunked.id(), 1);
    assert_eq!(chunked.chunk_size(), 1024 * 1024);
    assert_eq!(chunked.chunk_digest_output_size(), 32);
    assert_eq!(chunked.jca_message_digest_algorithm(), "SHA-256");

    let chunked512 = ContentDigestAlgorithm::ChunkedSha512;
    assert_eq!(chunked512.id(), 2);
    assert_eq!(chunked512.chunk_digest_output_size(), 64);
    assert_eq!(chunked512.jca_message_digest_algorithm(), "SHA-512");

    let verity = ContentDigestAlgorithm::VerityChunkedSha256;
    assert_eq!(verity.id(), 3);
    assert_eq!(verity.chunk_size(), 4096);
    assert!(verity.is_verity());
    assert_eq!(verity.to_string(), "VERITY_CHUNKED_SHA256");

    for kind in ContentDigestAlgorithm::ALL {
        assert_eq!(ContentDigestAlgorithm::find_by_id(kind.id()), Some(kind));
    }
    assert_eq!(ContentDigestAlgorithm::find_by_id(0), None);
}

#[test]
fn test_parse_names_and_ids() {
    assert_eq!(
        "RSA_PSS_WITH_SHA256".parse::<SignatureAlgorithm>().unwrap(),
        SignatureAlgorithm::RsaPssWithSha256
    );
    assert_eq!(
        "verity_dsa_with_sha256".parse::<SignatureAlgorithm>().unwrap(),
        SignatureAlgorithm::VerityDsaWithSha256
    );
    assert_eq!(
        "0x0423".parse::<SignatureAlgorithm>().unwrap(),
        SignatureAlgorithm::VerityEcdsaWithSha256
    );
    assert_eq!(
        "259".parse::<SignatureAlgorithm>().unwrap(),
        SignatureAlgorithm::RsaPkcs1V15WithSha256
    );

    for alg in SignatureAlgorithm::all() {
        assert_eq!(alg.to_string().parse::<SignatureAlgorithm>().unwrap(), alg);
    }

    assert!(matches!(
        "0x0999".parse::<SignatureAlgorithm>(),
        Err(RegistryError::UnknownAlgorithm(0x0999))
    ));
    assert!(matches!(
        "SHA1withRSA".parse::<SignatureAlgorithm>(),
        Err(RegistryError::Parse(_))
    ));
    assert!(matches!("".parse::<SignatureAlgorithm>(), Err(RegistryError::Parse(_))));
}

#[test]
fn test_sdk_codenames() {
    assert_eq!(sdk::codename(sdk::N), Some("N"));
    assert_eq!(sdk::codename(sdk::P), Some("P"));
    assert_eq!(sdk::codename(25), None);
    assert_eq!(sdk::level_for_codename("p"), Some(28));
    assert_eq!(sdk::describe(24), "24 (N)");
    assert_eq!(sdk::describe(25), "25");
}

#[test]
fn test_concurrent_lookups() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                SignatureAlgorithm::all()
                    .map(|a| find_by_id(a.id()).map(|f| f.descriptor() as *const _ as usize))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for r in &results {
        assert_eq!(r, &results[0]);
    }
}
