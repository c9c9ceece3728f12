use trbod_consensus::{decode_hex, profile_for, Network};
use trbod_primitives::script::{p2pkh_script, p2sh_script};
use trbod_primitives::{
    address_to_script_pubkey, base58check_decode, pubkey_to_address, script_pubkey_to_address,
    secret_key_to_wif, wif_to_secret_key, AddressError,
};

#[test]
fn wif_roundtrips_mainnet() {
    let prefixes = profile_for(Network::Main).base58_prefixes;
    let secret = [0x11u8; 32];

    let wif_uncompressed = secret_key_to_wif(&secret, &prefixes, false);
    let (decoded, compressed) =
        wif_to_secret_key(&wif_uncompressed, &prefixes).expect("decode mainnet wif");
    assert_eq!(decoded, secret);
    assert!(!compressed);

    let wif_compressed = secret_key_to_wif(&secret, &prefixes, true);
    let (decoded, compressed) =
        wif_to_secret_key(&wif_compressed, &prefixes).expect("decode mainnet wif");
    assert_eq!(decoded, secret);
    assert!(compressed);
}

#[test]
fn wif_rejects_wrong_network() {
    let main = profile_for(Network::Main).base58_prefixes;
    let test = profile_for(Network::Test).base58_prefixes;
    let wif = secret_key_to_wif(&[0x33u8; 32], &main, false);
    assert_eq!(wif_to_secret_key(&wif, &test), Err(AddressError::UnknownPrefix));

    let testnet_wif = secret_key_to_wif(&[0x22u8; 32], &test, true);
    assert_eq!(
        wif_to_secret_key(&testnet_wif, &test).expect("decode"),
        ([0x22u8; 32], true)
    );
}

#[test]
fn mixing_dummy_address_uses_mainnet_pubkey_prefix() {
    let main = profile_for(Network::Main);
    let dummy = main.governance.obfuscation_pool_dummy_address;

    let payload = base58check_decode(dummy).expect("valid base58check");
    assert_eq!(payload.len(), 21);
    assert_eq!(payload[0], 65);

    let script = address_to_script_pubkey(dummy, &main.base58_prefixes).expect("p2pkh");
    assert_eq!(script.len(), 25);
    assert_eq!(
        script_pubkey_to_address(&script, &main.base58_prefixes).as_deref(),
        Some(dummy)
    );

    let test = profile_for(Network::Test);
    assert_eq!(
        address_to_script_pubkey(dummy, &test.base58_prefixes),
        Err(AddressError::UnknownPrefix)
    );
}

#[test]
fn genesis_output_address() {
    let main = profile_for(Network::Main);
    let pubkey = decode_hex(main.genesis.output_pubkey).expect("pubkey");
    assert_eq!(
        pubkey_to_address(&pubkey, &main.base58_prefixes),
        "TEQ6SRUbhfZMpRom5hBp3EvvPhk2rmaxyY"
    );
}

#[test]
fn script_hash_addresses_roundtrip() {
    let prefixes = profile_for(Network::Regtest).base58_prefixes;
    let hash = [0x5au8; 20];

    let p2sh = p2sh_script(&hash);
    let address = script_pubkey_to_address(&p2sh, &prefixes).expect("p2sh address");
    assert_eq!(address_to_script_pubkey(&address, &prefixes), Ok(p2sh));

    let p2pkh = p2pkh_script(&hash);
    let address = script_pubkey_to_address(&p2pkh, &prefixes).expect("p2pkh address");
    assert_eq!(address_to_script_pubkey(&address, &prefixes), Ok(p2pkh));

    assert_eq!(script_pubkey_to_address(&[0x6a], &prefixes), None);
}
