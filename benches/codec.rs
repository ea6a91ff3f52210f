#![feature(test)]

extern crate test;

use rand_chacha::{rand_core::RngCore, rand_core::SeedableRng, ChaCha8Rng};
use rfc4648::{Base16, Base32, Base32Hex, Base64, Base64Url, Encoding};
use test::Bencher;

const INPUT_LEN: usize = 16 * 1024;

fn input() -> Vec<u8> {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let mut bytes = vec![0u8; INPUT_LEN];
    rng.fill_bytes(&mut bytes);
    bytes
}

macro_rules! bench_codec {
    ($encode:ident, $decode:ident, $validate:ident, $codec:ty) => {
        #[bench]
        fn $encode(b: &mut Bencher) {
            let bytes = input();
            let mut buf = vec![0u8; <$codec>::encoded_len(&bytes)];
            b.bytes = bytes.len() as u64;

            b.iter(|| {
                let encoded = <$codec>::encode(&bytes, &mut buf).unwrap();
                test::black_box(encoded.len());
            });
        }

        #[bench]
        fn $decode(b: &mut Bencher) {
            let encoded = <$codec>::encode_string(&input());
            let mut buf = vec![0u8; <$codec>::decoded_len_max(encoded.len())];
            b.bytes = encoded.len() as u64;

            b.iter(|| {
                let decoded = <$codec>::decode(&encoded, &mut buf).unwrap();
                test::black_box(decoded.len());
            });
        }

        #[bench]
        fn $validate(b: &mut Bencher) {
            let encoded = <$codec>::encode_string(&input());
            b.bytes = encoded.len() as u64;

            b.iter(|| test::black_box(<$codec>::is_valid(&encoded)));
        }
    };
}

bench_codec!(bench_base64_encode, bench_base64_decode, bench_base64_validate, Base64);
bench_codec!(
    bench_base64url_encode,
    bench_base64url_decode,
    bench_base64url_validate,
    Base64Url
);
bench_codec!(bench_base32_encode, bench_base32_decode, bench_base32_validate, Base32);
bench_codec!(
    bench_base32hex_encode,
    bench_base32hex_decode,
    bench_base32hex_validate,
    Base32Hex
);
bench_codec!(bench_base16_encode, bench_base16_decode, bench_base16_validate, Base16);

#[bench]
fn bench_base64_decode_u128(b: &mut Bencher) {
    let encoded = Base64::encode_int_string(u128::MAX / 3);

    b.iter(|| test::black_box(Base64::decode_int::<u128>(&encoded).unwrap()));
}
