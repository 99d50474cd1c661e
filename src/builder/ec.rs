use num_traits::{One, Zero};

use crate::common::galois::G;

// ECC: Error Correction Codeword generator
//------------------------------------------------------------------------------

/// Generator polynomial ∏(x + α^i) for i in 0..degree, highest degree first.
/// The leading coefficient is always 1.
pub fn generator_polynomial(degree: usize) -> Vec<u8> {
    let mut poly = Vec::with_capacity(degree + 1);
    poly.push(G::one());
    for i in 0..degree {
        let root = G::gen_pow(i);
        poly.push(G::zero());
        for j in (1..poly.len()).rev() {
            let prev = poly[j - 1];
            poly[j] += prev * root;
        }
    }
    poly.into_iter().map(u8::from).collect()
}

// Performs polynomial long division of the data polynomial by the generator
// polynomial with a running remainder. The remainder coefficients are the ecc.
pub fn ecc(data: &[u8], ecc_count: usize) -> Vec<u8> {
    if ecc_count == 0 {
        return Vec::new();
    }

    let gen_poly = generator_polynomial(ecc_count);
    debug_assert_eq!(gen_poly[0], 1, "Generator polynomial must be monic");

    let mut rem = vec![G::zero(); ecc_count];
    for &b in data {
        let factor = G(b) + rem[0];
        rem.rotate_left(1);
        rem[ecc_count - 1] = G::zero();
        if factor.is_zero() {
            continue;
        }
        for (r, &g) in rem.iter_mut().zip(gen_poly[1..].iter()) {
            *r += G(g) * factor;
        }
    }

    rem.into_iter().map(u8::from).collect()
}

#[cfg(test)]
mod ec_tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use super::{ecc, generator_polynomial};
    use crate::common::{
        codec::encode,
        galois::{G, LOG_TABLE},
        metadata::EC_CODEWORDS,
    };

    // Horner evaluation, coefficients highest degree first
    fn eval_poly(poly: &[u8], x: G) -> G {
        poly.iter().fold(G::zero(), |acc, &c| acc * x + G(c))
    }

    fn assert_is_codeword(data: &[u8], ecc: &[u8]) {
        let codeword = [data, ecc].concat();
        for i in 0..ecc.len() {
            assert_eq!(eval_poly(&codeword, G::gen_pow(i)), G::zero(), "Nonzero syndrome {i}");
        }
    }

    #[test]
    fn test_generator_polynomial_small() {
        // (x + 1)(x + 2) = x^2 + 3x + 2
        assert_eq!(generator_polynomial(2), [1, 3, 2]);
    }

    #[test]
    fn test_generator_polynomial_degree_20() {
        // Exponents of α for the degree 20 generator listed in ISO/IEC 18004 Annex A
        let exp_log = [
            0, 17, 60, 79, 50, 61, 163, 26, 187, 202, 180, 221, 225, 83, 239, 156, 164, 212, 212,
            188, 190,
        ];
        let poly = generator_polynomial(20);
        let log = poly.iter().map(|&c| LOG_TABLE[c as usize]).collect::<Vec<_>>();
        assert_eq!(log, exp_log);
    }

    #[test]
    fn test_generator_roots() {
        let poly = generator_polynomial(EC_CODEWORDS);
        for i in 0..EC_CODEWORDS {
            assert_eq!(eval_poly(&poly, G::gen_pow(i)), G::zero());
        }
    }

    #[test]
    fn test_poly_mod_1() {
        let res = ecc(b" [\x0bx\xd1r\xdcMC@\xec\x11\xec\x11\xec\x11", 10);
        assert_eq!(&*res, b"\xc4#'w\xeb\xd7\xe7\xe2]\x17");
    }

    #[test]
    fn test_poly_mod_2() {
        let res = ecc(b" [\x0bx\xd1r\xdcMC@\xec\x11\xec", 13);
        assert_eq!(&*res, b"\xa8H\x16R\xd96\x9c\x00.\x0f\xb4z\x10");
    }

    #[test]
    fn test_poly_mod_3() {
        let res = ecc(b"CUF\x86W&U\xc2w2\x06\x12\x06g&", 18);
        assert_eq!(&*res, b"\xd5\xc7\x0b-s\xf7\xf1\xdf\xe5\xf8\x9au\x9aoV\xa1o'");
    }

    #[test]
    fn test_ecc_without_ec_codewords() {
        assert!(ecc(&[1, 2, 3], 0).is_empty());
        assert!(ecc(&[], 0).is_empty());
    }

    #[test]
    fn test_ecc_of_zero_data_is_zero() {
        assert_eq!(ecc(&[0; 80], EC_CODEWORDS), vec![0; EC_CODEWORDS]);
    }

    #[test]
    fn test_ecc_encoded_segment() {
        let data = encode("sputnik-dao.near").unwrap();
        let res = ecc(&data, EC_CODEWORDS);
        assert_eq!(res.len(), EC_CODEWORDS);
        assert_eq!(res, ecc(&data, EC_CODEWORDS));
        assert_is_codeword(&data, &res);
    }

    proptest! {
        #[test]
        fn proptest_ecc_yields_codeword(data in prop::collection::vec(any::<u8>(), 1..=80)) {
            let res = ecc(&data, EC_CODEWORDS);
            prop_assert_eq!(res.len(), EC_CODEWORDS);
            assert_is_codeword(&data, &res);
        }
    }
}
