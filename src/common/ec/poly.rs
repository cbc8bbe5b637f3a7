use std::ops::Deref;

use super::galois::{gexp, glog, gmul};
use crate::common::error::QRResult;

// Polynomial over GF(256), highest degree coefficient first
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Polynomial {
    coeffs: Vec<u8>,
}

impl Deref for Polynomial {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.coeffs
    }
}

impl Polynomial {
    /// Builds `coeffs * x^shift`. Leading zeros are stripped; an all zero input
    /// collapses to the zero polynomial `[0]`.
    pub fn new(coeffs: &[u8], shift: usize) -> Self {
        let offset = coeffs.iter().take_while(|&&c| c == 0).count();
        if offset == coeffs.len() {
            return Self::zero();
        }
        let mut res = Vec::with_capacity(coeffs.len() - offset + shift);
        res.extend_from_slice(&coeffs[offset..]);
        res.resize(coeffs.len() - offset + shift, 0);
        Self { coeffs: res }
    }

    pub fn zero() -> Self {
        Self { coeffs: vec![0] }
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs == [0]
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        let mut res = vec![0; self.len() + other.len() - 1];
        for (i, &a) in self.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.iter().enumerate() {
                res[i + j] ^= gmul(a, b);
            }
        }
        Polynomial::new(&res, 0)
    }

    /// Remainder of the long division of `self` by `other`. Fails with
    /// `LogOfZero` when `other` is the zero polynomial.
    pub fn modulo(&self, other: &Polynomial) -> QRResult<Polynomial> {
        let mut rem = self.clone();
        while !rem.is_zero() && rem.len() >= other.len() {
            let ratio = glog(rem[0])? as i32 - glog(other[0])? as i32;
            let mut coeffs = rem.coeffs;
            for (c, &o) in coeffs.iter_mut().zip(other.iter()) {
                if o != 0 {
                    *c ^= gexp(glog(o)? as i32 + ratio);
                }
            }
            debug_assert_eq!(coeffs[0], 0, "Leading coefficient must cancel");
            rem = Polynomial::new(&coeffs, 0);
        }
        Ok(rem)
    }

    /// Reed-Solomon generator `(x - 2^0)(x - 2^1)...(x - 2^(degree - 1))`.
    pub fn generator(degree: usize) -> Polynomial {
        (0..degree).fold(Polynomial::new(&[1], 0), |acc, i| {
            acc.multiply(&Polynomial::new(&[1, gexp(i as i32)], 0))
        })
    }
}

#[cfg(test)]
mod poly_tests {
    use super::Polynomial;
    use crate::common::ec::galois::gexp;
    use crate::common::error::QRError;

    #[test]
    fn test_new_strips_leading_zeros() {
        let p = Polynomial::new(&[0, 0, 3, 0, 1], 2);
        assert_eq!(&*p, &[3, 0, 1, 0, 0]);
        assert_eq!(p.degree(), 4);
        assert!(Polynomial::new(&[0, 0], 5).is_zero());
        assert!(Polynomial::new(&[], 0).is_zero());
    }

    #[test]
    fn test_multiply_by_zero() {
        let p = Polynomial::new(&[5, 7, 9], 0);
        assert!(p.multiply(&Polynomial::zero()).is_zero());
    }

    #[test]
    fn test_generator_22() {
        let mut poly = Polynomial::new(&[1], 0);
        for i in 0..22 {
            poly = poly.multiply(&Polynomial::new(&[1, gexp(i)], 0));
        }
        assert_eq!(poly.len(), 23);
        assert_eq!(
            &*poly,
            &[
                1, 89, 179, 131, 176, 182, 244, 19, 189, 69, 40, 28, 137, 29, 123, 67, 253, 86, 218,
                230, 26, 145, 245
            ]
        );
        assert_eq!(poly, Polynomial::generator(22));
    }

    #[test]
    fn test_modulo_lower_degree_is_identity() {
        let a = Polynomial::new(&[4, 2], 0);
        let b = Polynomial::new(&[1, 2, 3], 0);
        assert_eq!(a.modulo(&b).unwrap(), a);
    }

    #[test]
    fn test_modulo_by_zero() {
        let a = Polynomial::new(&[4, 2], 0);
        assert_eq!(a.modulo(&Polynomial::zero()), Err(QRError::LogOfZero));
    }

    #[test]
    fn test_modulo_exact_division() {
        let a = Polynomial::new(&[3, 1, 4, 1], 0);
        let g = Polynomial::generator(4);
        let prod = a.multiply(&g);
        assert!(prod.modulo(&g).unwrap().is_zero());
    }
}
