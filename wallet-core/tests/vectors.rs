// End-to-end derivation vectors: BIP-32, SLIP-0010 and known wallet outputs.

use hdwallet_core::crypto::{
    CurveType, DerivationPaths, Ed25519Deriver, KeyDeriver, Secp256k1Deriver,
};
use hdwallet_core::{DerivationPath, Wallet};

fn path(s: &str) -> DerivationPath {
    DerivationPath::parse(s).unwrap()
}

// =============================================================================
// secp256k1
// =============================================================================

#[test]
fn test_evm_default_key_from_mnemonic() {
    let mut wallet = Wallet::from_mnemonic(
        "night faint enjoy portion appear movie busy waste report circle giant hungry",
        "",
    )
    .unwrap();

    let key = wallet.derive_ecdsa(&path("m/44'/60'/0'/0/0")).unwrap();
    assert_eq!(
        hex::encode(key.to_bytes()),
        "695e0bbbe84b57d4f7d3d14c0e05a406f42cd73bb15d0161f6261c1ce6ddd1ec"
    );

    let same = wallet.derive_ecdsa(&DerivationPaths::evm_default()).unwrap();
    assert_eq!(same.to_bytes(), key.to_bytes());

    wallet.erase();
    assert!(wallet.is_erased());
}

#[test]
fn test_bip32_vector_1() {
    // https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki#test-vector-1
    let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let cases = [
        ("m", "e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35"),
        ("m/0H", "edb2e14f9ee77d26dd93b4ecede8d16ed408ce149b6cd80b0715a2d911a0afea"),
        ("m/0H/1", "3c6cb8d0f6a264c91ea8b5030fadaa8e538b020f0a387421a12de9319dc93368"),
        ("m/0H/1/2H", "cbce0d719ecf7431d88e6a89fa1483e02e35092af60c042b1df2ff59fa424dca"),
        ("m/0H/1/2H/2", "0f479245fb19a38a1954c5c7c0ebab2f9bdfd96a17563ef28a6a4b1a2a764ef4"),
        (
            "m/0H/1/2H/2/1000000000",
            "471b76e389e528d6de6d816857e012c5455051cad6660850e58372a6c3e6e7c8",
        ),
    ];

    for (chain, expected) in cases {
        let key = Secp256k1Deriver::derive_bytes(&seed, &path(chain)).unwrap();
        assert_eq!(hex::encode(*key), expected, "private key mismatch at {chain}");
    }
}

// =============================================================================
// ed25519
// =============================================================================

#[test]
fn test_solana_default_key_from_12_words() {
    let wallet = Wallet::from_mnemonic(
        "elder sign digital common crumble else express festival menu surge price lawsuit",
        "",
    )
    .unwrap();
    assert_eq!(
        hex::encode(wallet.seed()),
        "15572a9ce08615becf26dcc73da42cec3d20853ce1027b65f22050fa439e205321fa5559e076548d8e856538fcf599a245cf7edac4db5d3c93c04dc21131babb"
    );

    let key = wallet.derive_ed25519(&path("m/44'/501'/0'/0'")).unwrap();
    assert_eq!(
        hex::encode(key.verifying_key().to_bytes()),
        "33b021058c8da2a09734396e93c10403b0213219a679dba6051be68adec3a9ad"
    );
}

#[test]
fn test_solana_default_key_from_24_words() {
    let wallet = Wallet::from_mnemonic(
        "seminar gadget common sing coral blood turkey quit bike veteran glimpse invite setup million vapor eight left detail donkey gun train olympic sad alone",
        "",
    )
    .unwrap();

    let key = wallet.derive_ed25519(&DerivationPaths::solana_default()).unwrap();
    assert_eq!(
        hex::encode(key.verifying_key().to_bytes()),
        "376024eec8627dced706cc72efd4b4bf4a5050788af96eacbb983a539893b4e0"
    );
}

#[test]
fn test_slip0010_ed25519_vector_1() {
    // https://github.com/satoshilabs/slips/blob/master/slip-0010.md#test-vector-1-for-ed25519
    let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();

    let (key, chain) = Ed25519Deriver::derive_chain(&seed, &path("m/0H"));
    assert_eq!(
        hex::encode(*key),
        "68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3"
    );
    assert_eq!(
        hex::encode(*chain),
        "8b59aa11380b624e81507a27fedda59fea6d0b779a778918a2fd3590e16e9c69"
    );
    let public = ed25519_dalek::SigningKey::from_bytes(&key).verifying_key();
    assert_eq!(
        hex::encode(public.to_bytes()),
        "8c8a13df77a28f3445213a0f432fde644acaa215fc72dcdf300d5efaa85d350c"
    );

    let cases = [
        ("m/0H/1H", "b1d0bad404bf35da785a64ca1ac54b2617211d2777696fbffaf208f746ae84f2"),
        ("m/0H/1H/2H", "92a5b23c0b8a99e37d07df3fb9966917f5d06e02ddbd909c7e184371463e9fc9"),
        ("m/0H/1H/2H/2H", "30d1dc7e5fc04c31219ab25a27ae00b50f6fd66622f6e9c913253d6511d1e662"),
        (
            "m/0H/1H/2H/2H/1000000000H",
            "8f94d394a8e8fd6b1bc2f3f49f5c47e385281d5c17e65324b0f62483e37e8793",
        ),
    ];
    for (chain, expected) in cases {
        let (key, _) = Ed25519Deriver::derive_chain(&seed, &path(chain));
        assert_eq!(hex::encode(*key), expected, "private key mismatch at {chain}");
    }
}

// =============================================================================
// unified entry point
// =============================================================================

#[test]
fn test_unified_deriver_matches_wallet() {
    let wallet = Wallet::from_mnemonic(
        "elder sign digital common crumble else express festival menu surge price lawsuit",
        "",
    )
    .unwrap();
    let sol = DerivationPaths::solana_default();
    let evm = DerivationPaths::evm_default();

    let ed = KeyDeriver::derive(wallet.seed(), &sol, CurveType::Ed25519).unwrap();
    assert_eq!(*ed.private_key, wallet.derive_ed25519(&sol).unwrap().to_bytes());

    let secp = KeyDeriver::derive(wallet.seed(), &evm, CurveType::Secp256k1).unwrap();
    let expected: [u8; 32] = wallet.derive_ecdsa(&evm).unwrap().to_bytes().into();
    assert_eq!(*secp.private_key, expected);
}
