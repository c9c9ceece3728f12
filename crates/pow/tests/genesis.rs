use trbod_consensus::{hash256_from_hex, hash256_to_hex, profile_for, GenesisParams, Network};
use trbod_pow::difficulty::{compact_to_target, hash_meets_target};
use trbod_pow::genesis::{build_genesis_block, search_genesis, verify_genesis, GenesisError};
use trbod_pow::validation::{validate_pow_header, PowError};

const MERKLE: &str = "679bbc54b19f91f7f5e06c5db31c3330f44fd79ca1a34da46a8224151aff7faa";

fn regtest_genesis() -> GenesisParams {
    profile_for(Network::Regtest).genesis
}

#[test]
fn every_profile_reproduces_its_genesis() {
    for network in Network::ALL {
        let profile = profile_for(network);
        let block = verify_genesis(&profile.genesis).expect("genesis verifies");
        assert_eq!(block.hash(), profile.genesis.expected_hash, "{network}");
        assert_eq!(hash256_to_hex(&block.header.merkle_root), MERKLE);
        assert_eq!(block.header.prev_block, [0u8; 32]);
        assert_eq!(block.header.version, 1);
        assert_eq!(block.transactions.len(), 1);
        assert!(block.transactions[0].is_coinbase());
        assert_eq!(block.transactions[0].vout[0].value, 0);
    }
}

#[test]
fn wrong_nonce_is_a_hash_mismatch() {
    let main = profile_for(Network::Main).genesis;
    let tampered = GenesisParams {
        nonce: main.nonce + 1,
        ..main.clone()
    };
    let actual = build_genesis_block(&tampered).expect("build").hash();
    assert_eq!(
        verify_genesis(&tampered),
        Err(GenesisError::HashMismatch {
            expected: main.expected_hash,
            actual,
        })
    );
}

#[test]
fn changed_message_is_a_merkle_mismatch() {
    let tampered = GenesisParams {
        timestamp_message: "a different headline".into(),
        ..profile_for(Network::Main).genesis
    };
    assert!(matches!(
        verify_genesis(&tampered),
        Err(GenesisError::MerkleMismatch { .. })
    ));
}

#[test]
fn search_easy_targets() {
    let solution = search_genesis(&regtest_genesis(), 0).expect("solution");
    assert_eq!(solution.time, 1_524_873_600);
    assert_eq!(solution.nonce, 1);
    assert_eq!(
        hash256_to_hex(&solution.hash),
        "4574af42965af4a787d01457fdcd8571472bc0c5c9fe93966c0444d0c1b27d5f"
    );
    assert_eq!(hash256_to_hex(&solution.merkle_root), MERKLE);

    let at_main_time = GenesisParams {
        time: 1_559_765_647,
        ..regtest_genesis()
    };
    let solution = search_genesis(&at_main_time, 0).expect("solution");
    assert_eq!(solution.nonce, 0);
    assert_eq!(
        hash256_to_hex(&solution.hash),
        "3b6da487d5f95b4a55485ed628391bcff4898827258383de7bbeb09f5ad540f1"
    );
}

#[test]
fn search_harder_targets() {
    let params = GenesisParams {
        bits: 0x1f7f_ffff,
        ..regtest_genesis()
    };
    let solution = search_genesis(&params, 0).expect("solution");
    assert_eq!((solution.time, solution.nonce), (1_524_873_600, 81));
    assert_eq!(
        hash256_to_hex(&solution.hash),
        "0000c4bcc0b60031841f2754975455c724767aedd7881d2cdf8106b5074fb48c"
    );

    let params = GenesisParams {
        bits: 0x1f00_ffff,
        ..regtest_genesis()
    };
    let solution = search_genesis(&params, 0).expect("solution");
    assert_eq!((solution.time, solution.nonce), (1_524_873_600, 157_766));
    assert_eq!(
        hash256_to_hex(&solution.hash),
        "0000fdcc2ad180e57175817d8e2de060c29a3b7c24c7b86b4d44b21f099734fc"
    );

    // Resuming from a found nonce returns it again.
    assert_eq!(search_genesis(&params, 157_766), Ok(solution));
}

#[test]
fn searched_solution_verifies() {
    let params = GenesisParams {
        bits: 0x1f00_ffff,
        ..regtest_genesis()
    };
    let solution = search_genesis(&params, 0).expect("solution");
    let target = compact_to_target(params.bits).expect("target");
    assert!(hash_meets_target(&solution.hash, &target));

    let solved = GenesisParams {
        time: solution.time,
        nonce: solution.nonce,
        expected_hash: solution.hash,
        expected_merkle_root: solution.merkle_root,
        ..params
    };
    let block = verify_genesis(&solved).expect("searched genesis verifies");
    assert_eq!(block.hash(), solution.hash);
    assert_eq!(block.header.nonce, 157_766);
    assert_eq!(block.header.bits, 0x1f00_ffff);
}

#[test]
fn nonce_wrap_advances_time() {
    let solution = search_genesis(&regtest_genesis(), u32::MAX).expect("solution");
    assert_eq!(solution.time, 1_524_873_601);
    assert_eq!(solution.nonce, 1);
    assert_eq!(
        hash256_to_hex(&solution.hash),
        "2e33c89b337db68f2a26fc070cede2f528f67c74be48b5269bea15d6552def26"
    );
}

#[test]
fn genesis_header_pow_depends_on_skip_flag() {
    let main = profile_for(Network::Main);
    let block = verify_genesis(&main.genesis).expect("genesis");
    assert!(main.flags.skip_proof_of_work_check);
    assert_eq!(validate_pow_header(&block.header, &main), Ok(()));

    let mut strict = main.clone();
    strict.flags.skip_proof_of_work_check = false;
    assert_eq!(
        validate_pow_header(&block.header, &strict),
        Err(PowError::HashMismatch)
    );
}

#[test]
fn pow_header_target_bounds() {
    let regtest = profile_for(Network::Regtest);
    let mut strict = regtest.clone();
    strict.flags.skip_proof_of_work_check = false;

    let mut header = verify_genesis(&regtest.genesis).expect("genesis").header;
    let solved = search_genesis(&regtest.genesis, 0).expect("solution");
    header.nonce = solved.nonce;
    assert_eq!(validate_pow_header(&header, &strict), Ok(()));

    header.bits = 0;
    assert_eq!(
        validate_pow_header(&header, &strict),
        Err(PowError::InvalidBits("pow target is zero"))
    );

    // One size byte above the regtest limit.
    header.bits = 0x2100_ffff;
    assert_eq!(
        validate_pow_header(&header, &regtest),
        Err(PowError::InvalidBits("pow target above limit"))
    );

    let pow_limit = hash256_from_hex(
        "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    )
    .expect("limit");
    assert_eq!(regtest.consensus.pow_limit, pow_limit);
}
