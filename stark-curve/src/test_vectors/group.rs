//! Group arithmetic test vectors.

use hex_literal::hex;

/// Repeated addition of the generator.
///
/// These are the first 5 test vectors, `[1]G` through `[5]G`.
pub const ADD_TEST_VECTORS: &[([u8; 32], [u8; 32])] = &[
    (
        hex!("01ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca"),
        hex!("005668060aa49730b7be4801df46ec62de53ecd11abe43a32873000c36e8dc1f"),
    ),
    (
        hex!("0759ca09377679ecd535a81e83039658bf40959283187c654c5416f439403cf5"),
        hex!("06f524a3400e7708d5c01a28598ad272e7455aa88778b19f93b562d7a9646c41"),
    ),
    (
        hex!("0411494b501a98abd8262b0da1351e17899a0c4ef23dd2f96fec5ba847310b20"),
        hex!("07e1b3ebac08924d2c26f409549191fcf94f3bf6f301ed3553e22dfb802f0686"),
    ),
    (
        hex!("00a7da05a4d664859ccd6e567b935cdfbfe3018c7771cb980892ef38878ae9bc"),
        hex!("0584b0c2bc833a4c88d62b387e0ef868cae2eaaa288f4ca7b34c84b46ca031b6"),
    ),
    (
        hex!("0788435d61046d3eec54d77d25bd194525f4fa26ebe6575536bc6f656656b74c"),
        hex!("013926386b9e5e908c359519eaa68c44a2430f4b4ca5d0dbdcb4231f031eb18b"),
    ),
];

/// Scalar multiplication with the generator: `(k, x, y)` with `(x, y) = [k]G`.
pub const MUL_TEST_VECTORS: &[([u8; 32], [u8; 32], [u8; 32])] = &[
    (
        hex!("03c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc"),
        hex!("077a3b314db07c45076d11f62b6f9e748a39790441823307743cf00d6597ea43"),
        hex!("054d7beec5ec728223671c627557efc5c9a6508425dc6c900b7741bf60afec06"),
    ),
    (
        hex!("0000000000000000000000000000000000000000000000000000000000000012"),
        hex!("019661066e96a8b9f06a1d136881ee924dfb6a885239caa5fd3f87a54c6b25c4"),
        hex!("05c857697280a06cbd3e29ece3dc730f5ce700e9276a83b8bd38b1e199044689"),
    ),
    (
        hex!("0800000000000010ffffffffffffffffb781126dcae7b2321e66a241adc64d2e"),
        hex!("01ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca"),
        hex!("07a997f9f55b68e04841b7fe20b9139d21ac132ee541bc5cd78cfff3c91723e2"),
    ),
    (
        hex!("0400000000000008800000000000000000000000000000000000000000000000"),
        hex!("0533d51b023829d1085736143e0fdc9edc29690e4e1d761e1b7d92dbc214ed37"),
        hex!("03f86f2efe5d84c0dbaba14c71ed3ec81c2d6dd542d102dd010dc7268fe05715"),
    ),
];
