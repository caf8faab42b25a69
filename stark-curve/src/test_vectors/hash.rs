//! Poseidon, Pedersen and snKeccak test vectors.
//!
//! Values are big-endian hex without a `0x` prefix.

/// Poseidon `hash(x, y)`: `(x, y, digest)`.
pub const POSEIDON_HASH_VECTORS: &[(&str, &str, &str)] = &[
    (
        "0000000000000000000000000000000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000000",
        "0293d3e8a80f400daaaffdd5932e2bcc8814bab8f414a75dcacf87318f8b14c5",
    ),
    (
        "0000000000000000000000000000000000000000000000000000000000000001",
        "0000000000000000000000000000000000000000000000000000000000000002",
        "05d44a3decb2b2e0cc71071f7b802f45dd792d064f0fc7316c46514f70f9891a",
    ),
    (
        "000b662f9017fa7956fd70e26129b1833e10ad000fd37b4d9f4e0ce6884b7bbe",
        "001fe356bf76102cdae1bfbdc173602ead228b12904c00dad9cf16e035468bea",
        "075540825a6ecc5dc7d7c2f5f868164182742227f1367d66c43ee51ec7937a81",
    ),
];

/// Poseidon `hash_single(x)`: `(x, digest)`.
pub const POSEIDON_HASH_SINGLE_VECTORS: &[(&str, &str)] = &[
    (
        "0000000000000000000000000000000000000000000000000000000000000000",
        "060009f680a43e6f760790f76214b26243464cdd4f31fdc460baf66d32897c1b",
    ),
    (
        "0000000000000000000000000000000000000000000000000000000000000001",
        "06d226d4c804cd74567f5ac59c6a4af1fe2a6eced19fb7560a9124579877da25",
    ),
    (
        "009dad5d6f502ccbcb6d34ede04f0337df3b98936aaf782f4cc07d147e3a4fd6",
        "011222854783f17f1c580ff64671bc3868de034c236f956216e8ed4ab7533455",
    ),
];

/// Poseidon `hash_many(msgs)`: `(msgs, digest)`.
pub const POSEIDON_HASH_MANY_VECTORS: &[(&[&str], &str)] = &[
    (
        &[],
        "02272be0f580fd156823304800919530eaa97430e972d7213ee13f4fbf7a5dbc",
    ),
    (
        &["01"],
        "00579e8877c7755365d5ec1ec7d3a94a457eff5d1f40482bbe9729c064cdead2",
    ),
    (
        &["01", "02"],
        "0371cb6995ea5e7effcd2e174de264b5b407027a75a231a70c2c8d196107f0e7",
    ),
    (
        &["01", "02", "03"],
        "02f0d8840bcf3bc629598d8a6cc80cb7c0d9e52d93dab244bbf9cd0dca0ad082",
    ),
    (
        &[
            "009bf52404586087391c5fbb42538692e7ca2149bac13c145ae4230a51a6fc47",
            "0040304159ee9d2d611120fbd7c7fb8020cc8f7a599bfa108e0e085222b862c0",
            "0046286e4f3c450761d960d6a151a9c0988f9e16f8a48d4c0a85817c009f806a",
        ],
        "01ec38b38dc88bac7b0ed6ff6326f975a06a59ac601b417745fd412a5d38e4f7",
    ),
];

/// Pedersen `hash(a, b)`: `(a, b, digest)`.
pub const PEDERSEN_HASH_VECTORS: &[(&str, &str, &str)] = &[
    (
        "0000000000000000000000000000000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000000",
        "049ee3eba8c1600700ee1b87eb599f16716b0b1022947733551fde4050ca6804",
    ),
    (
        "0000000000000000000000000000000000000000000000000000000000000001",
        "0000000000000000000000000000000000000000000000000000000000000002",
        "05bb9440e27889a364bcb678b1f679ecd1347acdedcbf36e83494f857cc58026",
    ),
    (
        "03d937c035c878245caf64531a5756109c53068da139362728feb561405371cb",
        "0208a0a10250e382e1e4bbe2880906c2791bf6275695e02fbbc6aeff9cd8b31a",
        "030e480bed5fe53fa909cc0f8c4d99b8f9f2c016be4c41e13a4848797979c662",
    ),
    (
        "058f580910a6ca59b28927c08fe6c43e2e303ca384badc365795fc645d479d45",
        "078734f65a067be9bdb39de18434d71e79f7b6466a4b66bbd979ab9e7515fe0b",
        "068cc0b76cddd1dd4ed2301ada9b7c872b23875d5ff837b3a87993e0d9996b87",
    ),
    (
        "0800000000000011000000000000000000000000000000000000000000000000",
        "0800000000000011000000000000000000000000000000000000000000000000",
        "07258fccaf3371fad51b117471d9d888a1786c5694c3e6099160477b593a576e",
    ),
];

/// Pedersen `hash_array(msgs)`: `(msgs, digest)`.
pub const PEDERSEN_HASH_ARRAY_VECTORS: &[(&[&str], &str)] = &[
    (
        &[],
        "049ee3eba8c1600700ee1b87eb599f16716b0b1022947733551fde4050ca6804",
    ),
    (
        &["01", "02", "03"],
        "00f9d95fbf356fbeda26538c92f7040abe51bf142350f73c9ee5ba7c660bae71",
    ),
    (
        &["0123", "0456"],
        "03401dbc58e0e8d6351c8772ac4df9026e793bdbb930f72abb326cd27942c0f5",
    ),
];

/// snKeccak of entry point names: `(name, selector)`.
pub const SELECTOR_VECTORS: &[(&str, &str)] = &[
    (
        "transfer",
        "0083afd3f4caedc6eebf44246fe54e38c95e3179a5ec9ea81740eca5b482d12e",
    ),
    (
        "__execute__",
        "015d40a3d6ca2ac30f4031e42be28da9b056fef9bb7357ac5e85627ee876e5ad",
    ),
    (
        "balanceOf",
        "02e4263afad30923c891518314c3c95dbe830a16874e8abc5777a9a20b54c76e",
    ),
];
