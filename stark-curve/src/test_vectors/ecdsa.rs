//! ECDSA test vectors.

use hex_literal::hex;

/// Signing test vector: key pair, digest, extra entropy, and the expected nonce and signature.
pub struct TestVector {
    /// Private key.
    pub d: &'static [u8; 32],

    /// Public key x-coordinate.
    pub q_x: &'static [u8; 32],

    /// Public key y-coordinate.
    pub q_y: &'static [u8; 32],

    /// Message digest.
    pub m: &'static [u8; 32],

    /// Extra entropy mixed into the nonce derivation; zero for none.
    pub seed: &'static [u8; 32],

    /// Deterministic nonce.
    pub k: &'static [u8; 32],

    /// Signature `r` component.
    pub r: &'static [u8; 32],

    /// Signature `s` component.
    pub s: &'static [u8; 32],
}

/// Verification test vector against an x-only ("stark key") public key.
pub struct VerifyVector {
    /// Public key x-coordinate.
    pub stark_key: &'static [u8; 32],

    /// Message digest.
    pub m: &'static [u8; 32],

    /// Signature `r` component.
    pub r: &'static [u8; 32],

    /// Signature `s` component.
    pub s: &'static [u8; 32],

    /// Whether the signature is valid.
    pub valid: bool,
}

/// Deterministic signatures, the last five taken from the chain's RFC 6979 vectors.
pub const ECDSA_TEST_VECTORS: &[TestVector] = &[
    TestVector {
        d: &hex!("03c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc"),
        q_x: &hex!("077a3b314db07c45076d11f62b6f9e748a39790441823307743cf00d6597ea43"),
        q_y: &hex!("054d7beec5ec728223671c627557efc5c9a6508425dc6c900b7741bf60afec06"),
        m: &hex!("0000000000000000000000000000000000000000000000000000000000000002"),
        seed: &hex!("0000000000000000000000000000000000000000000000000000000000000000"),
        k: &hex!("07717ba6a96d629411313d2a33015d8d966e0af2a95d43a219b261af08ded0c3"),
        r: &hex!("03f8852c3010ca93d70ff7590903d4d140f04b17b41d7f7f360ddbe7118ff8ac"),
        s: &hex!("026c7f26e90d79d8a3464f8667cf04059d08f56e978db60f50c830b48fc1d39a"),
    },
    TestVector {
        d: &hex!("03c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc"),
        q_x: &hex!("077a3b314db07c45076d11f62b6f9e748a39790441823307743cf00d6597ea43"),
        q_y: &hex!("054d7beec5ec728223671c627557efc5c9a6508425dc6c900b7741bf60afec06"),
        m: &hex!("0397e76d1667c4454bfb83514e120583af836f8e32a516765497823eabe16a3f"),
        seed: &hex!("0000000000000000000000000000000000000000000000000000000000000000"),
        k: &hex!("050a50e20a9fb5b33f618ce4ddec8df60f40d3ac3018453bcc002cee71140cd4"),
        r: &hex!("0173fd03d8b008ee7432977ac27d1e9d1a1f6c98b1a2f05fa84a21c84c44e882"),
        s: &hex!("04b6d75385aed025aa222f28a0adc6d58db78ff17e51c3f59e259b131cd5a1cc"),
    },
    TestVector {
        d: &hex!("03c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc"),
        q_x: &hex!("077a3b314db07c45076d11f62b6f9e748a39790441823307743cf00d6597ea43"),
        q_y: &hex!("054d7beec5ec728223671c627557efc5c9a6508425dc6c900b7741bf60afec06"),
        m: &hex!("0800000000000011000000000000000000000000000000000000000000000000"),
        seed: &hex!("0000000000000000000000000000000000000000000000000000000000000000"),
        k: &hex!("03fe20b80b8fae11bc228c7574758855b9d0d9726f87510d2f175bf468c80a28"),
        r: &hex!("062a607a69b633585fca83873dbd73e8dbe91b1af64a4e17a1ace3da27a6e8ab"),
        s: &hex!("07738121e485d52be46b1897c28ee1e064468a30f2c60cdc76ab5654a5934024"),
    },
    TestVector {
        d: &hex!("03c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc"),
        q_x: &hex!("077a3b314db07c45076d11f62b6f9e748a39790441823307743cf00d6597ea43"),
        q_y: &hex!("054d7beec5ec728223671c627557efc5c9a6508425dc6c900b7741bf60afec06"),
        m: &hex!("0000000000000000000000000000000000000000000000000000000000000002"),
        seed: &hex!("0000000000000000000000000000000000000000000000000000000000010203"),
        k: &hex!("0461fbd596cc2b36099642662c28337d422abf68ec3a675f5776c31c937c1066"),
        r: &hex!("046c5bf5d332f1777cb5951b72119265151446dbacfab1438ba850705d1e375a"),
        s: &hex!("0284ffff45802f32ae8d65d86d827af54d04261469cb4f68a01eb5bb9e8e1cc2"),
    },
    TestVector {
        d: &hex!("03fa56dcdbe2fb6769a83786469faf589a3d1e31c66db8b0432f741a38cdeed1"),
        q_x: &hex!("06eff472b207df30a886ec3cbd8866e93078875f0faa1adb18fe8abd014a562d"),
        q_y: &hex!("02ef2e36640b3a625b407d35ea798a6919d296e01bd4b99622787890efe795f7"),
        m: &hex!("0080977da1148412a7976215729d396b72aec9e955498757a7b859281354b4b1"),
        seed: &hex!("0776cc1aa4c66417a4923768b9d4a7cfca731e862e4972ed930d8f2ad45d352b"),
        k: &hex!("0013480c97bb5861404aa16e1f97a99411ba8f4039b2d54de839dea5c9f0af47"),
        r: &hex!("03427be0196212452d428706ec4c567655ed7a0e310363e10700592c2af5c9fa"),
        s: &hex!("01db99eb747596c3650d7f8d85e48fa9f358ed765541a844ee979c37f8d24edf"),
    },
    TestVector {
        d: &hex!("06ad6342c62315862f51722808d2764a60824f9c5894105dffbb6478cfb06a95"),
        q_x: &hex!("0498f1feec11f6cfc5683bdd4a13969b2c6ce54a681c482d1f000b4ec4302823"),
        q_y: &hex!("03d884a6fb0ee95d256fe8c4ee8f755411848fa16461127e962fabdeb2cdcbb0"),
        m: &hex!("00acf1ce22cb1f49d4fc7a6df93cd290d28f4c5a27888c9624b07cfa193de992"),
        seed: &hex!("01314de4fcf69889ea0cdf4aefd1cc7732d1dfbdc6476066e3132c1609756bd0"),
        k: &hex!("0687b462764b919fabefcb84fe77a4eae838f45b97f49b2d24fec995ff482c04"),
        r: &hex!("05769ef2415b1a1c029d2b5182db24502fd77fd836cf58921745bec5e8eb18aa"),
        s: &hex!("02c2fc7c49a8a0b01b19ac782b76e6a30c07a4db5630a7ea4b397e192a873f19"),
    },
    TestVector {
        d: &hex!("06e18a4a890962776c397e3ddf659b07275995a341e32bb75cd5a3bff55cfe7b"),
        q_x: &hex!("008e192b089d1c2d061e4b1c6a81adbb1c1b48a2de174c7e967bc5d6f72d3772"),
        q_y: &hex!("036ffb5cfdb0ff1c94028ea8a3306b690da958131bdb11c6bfaae7965e78574f"),
        m: &hex!("0020791e67f0d6083d406a3a0fdaf8f4008fc1c6616dc97c1e1fdda352030e2f"),
        seed: &hex!("0506b182cf3d46d6a7918ed4dfcced8f46c09a44c68067b3b40f2d82bee65e1a"),
        k: &hex!("02cc9d2484afa0569b44487cf1705906db0a4cb78d9f73426efaaa572a5d47bb"),
        r: &hex!("04c5f99e3b693815ced0eb0001d2ef0e37102813d32fa72b5a41e6a834f50f53"),
        s: &hex!("06675ca5e123ace48d857f2bcddbe17e73a766dc9207f52b7ccf6eb47cc2157d"),
    },
    TestVector {
        d: &hex!("07e3184f4bef18f371bc53fc412dff1b30dbc94f758490fb8e2349bae647a642"),
        q_x: &hex!("0637c373da51b4dffca0b0ae19d7c3a5df7f15a1256c526f140a8dd45b6ae123"),
        q_y: &hex!("0194b360991d530f5d3bd7144e17c8a90e7413ee94e5aee7416f01c86fcebdee"),
        m: &hex!("010b559a3b4dc1b7137d90521cb413b397ff07963214d128a92d65aec7182f68"),
        seed: &hex!("03fe27199aaad4e700559e2436a919f4de70def585a6deb2f4c087fdf6a27c1b"),
        k: &hex!("00514de5048c11bf01f3dc98a131e0a3fde03d6269cdfab69d944c8281149184"),
        r: &hex!("078a641e973d8f9d096fda4306fb6aafe5f757484beb595e7203d19436fcb702"),
        s: &hex!("04959d6dfccde57ad1f7865d08c48c948acc528ee47cca52ca3aab6846d1dfff"),
    },
    TestVector {
        d: &hex!("00efacf45682998e4748e853f13a789b4729be197353eb1b8063fd425e0576f8"),
        q_x: &hex!("013ac7ee64f7d14e7fd60a38c4eead00f0cd18f1d85b35346b09b15dcd859b58"),
        q_y: &hex!("042d942d26adaf60680e7c059aef367f3090f245fe6766dd534f7d15c9934ad4"),
        m: &hex!("058a8fc2bed05af3ae202f0ea4f6e724b6d3b1034382c7a2e1a3a06bd48bf7ea"),
        seed: &hex!("05a595cc1e2dcdb26e2ee3964aaa55090bff0c02be6980f098669bc8c87fb994"),
        k: &hex!("0610bd4aec3a26b00331daee8baefc2ad9c94eab42d21384851a1c4fcd5c0483"),
        r: &hex!("05a3c0381bfc51493a21eda8f79503f1360a6377ede14a95fec795ff1c557c25"),
        s: &hex!("030f111205417d7930f1ca749121f8163f33dbffd1291fdc180ce458a09f8e4f"),
    },
];

/// Verification against stark keys.
pub const VERIFY_TEST_VECTORS: &[VerifyVector] = &[
    VerifyVector {
        stark_key: &hex!("01ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca"),
        m: &hex!("0000000000000000000000000000000000000000000000000000000000000002"),
        r: &hex!("0411494b501a98abd8262b0da1351e17899a0c4ef23dd2f96fec5ba847310b20"),
        s: &hex!("0405c3191ab3883ef2b763af35bc5f5d15b3b4e99461d70e84c654a351a7c81b"),
        valid: true,
    },
    VerifyVector {
        stark_key: &hex!("077a4b314db07c45076d11f62b6f9e748a39790441823307743cf00d6597ea43"),
        m: &hex!("0397e76d1667c4454bfb83514e120583af836f8e32a516765497823eabe16a3f"),
        r: &hex!("0173fd03d8b008ee7432977ac27d1e9d1a1f6c98b1a2f05fa84a21c84c44e882"),
        s: &hex!("01f2c44a7798f55192f153b4c48ea5c1241fbb69e6132cc8a0da9c5b62a4286e"),
        valid: false,
    },
    VerifyVector {
        stark_key: &hex!("03ee9bffffffffff26ffffffff60ffffffffffffffffffffffffffff004accff"),
        m: &hex!("0000000000000000000000000000000000000000000000000000000000000002"),
        r: &hex!("0411494b501a98abd8262b0da1351e17899a0c4ef23dd2f96fec5ba847310b20"),
        s: &hex!("0405c3191ab3883ef2b763af35bc5f5d15b3b4e99461d70e84c654a351a7c81b"),
        valid: false,
    },
];
