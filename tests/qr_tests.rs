use qrcraft::{Drawable, Symbol};

// Renders the symbol with a quiet zone and scans it back
fn scan(symbol: &Symbol) -> (rqrr::MetaData, String) {
    let (scale, quiet_zone) = (4, 4);
    let w = symbol.module_count();
    let img_w = (w + 2 * quiet_zone) * scale;

    let mut img = rqrr::PreparedImage::prepare_from_greyscale(img_w, img_w, |x, y| {
        let (r, c) = (y / scale, x / scale);
        let inside = (quiet_zone..quiet_zone + w).contains(&r)
            && (quiet_zone..quiet_zone + w).contains(&c);
        if inside && symbol.is_dark(r - quiet_zone, c - quiet_zone) {
            0
        } else {
            255
        }
    });
    let grids = img.detect_grids();
    assert_eq!(grids.len(), 1, "Expected exactly one symbol");
    grids[0].decode().expect("Failed to read QR")
}

#[cfg(test)]
mod qr_proptests {
    use proptest::prelude::*;

    use super::scan;
    use qrcraft::{encode, ECLevel, EncodeOptions};

    pub fn ec_level_strategy() -> BoxedStrategy<ECLevel> {
        prop_oneof![Just(ECLevel::L), Just(ECLevel::M), Just(ECLevel::Q), Just(ECLevel::H)].boxed()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn proptest_printable(ecl in ec_level_strategy(), data in "[ -~]{0,200}") {
            let options = EncodeOptions { ec_level: ecl, ..Default::default() };
            let symbol = encode(&data, &options).unwrap();

            let (meta, decoded) = scan(&symbol);
            prop_assert_eq!(meta.version.0, *symbol.version());
            prop_assert_eq!(data, decoded);
        }

        #[test]
        fn proptest_unicode(data in "\\PC{1,40}") {
            let symbol = encode(&data, &EncodeOptions::default()).unwrap();
            let (_meta, decoded) = scan(&symbol);
            prop_assert_eq!(data, decoded);
        }
    }
}

#[cfg(test)]
mod qr_tests {
    use test_case::test_case;

    use super::scan;
    use qrcraft::{
        encode, Drawable, ECLevel, EncodeOptions, MaskPattern, QRBuilder, QRError, Version,
    };

    #[test_case("Hello, world!🌎".to_string(), 1, ECLevel::L; "test_qr_1")]
    #[test_case("TEST".to_string(), 1, ECLevel::M; "test_qr_2")]
    #[test_case("12345".to_string(), 1, ECLevel::Q; "test_qr_3")]
    #[test_case("OK".to_string(), 1, ECLevel::H; "test_qr_4")]
    #[test_case("B3@j🎮#Z%8v🍣K!🔑3zC^8📖&r💾F9*🔐b6🌼".repeat(3), 7, ECLevel::L; "test_qr_5")]
    #[test_case("A11111111111111".repeat(8), 7, ECLevel::M; "test_qr_6")]
    #[test_case("aAAAAAA1111111111111AAAAAAa".repeat(3), 7, ECLevel::Q; "test_qr_7")]
    #[test_case("1234567890".repeat(6), 7, ECLevel::H; "test_qr_8")]
    #[test_case("B3@j🎮#Z%8v🍣K!🔑3zC^8📖&r💾F9*🔐b6🌼".repeat(5), 10, ECLevel::L; "test_qr_9")]
    #[test_case("1234567890".repeat(11), 10, ECLevel::H; "test_qr_10")]
    #[test_case("B3@j🎮#Z%8v🍣K!🔑3zC^8📖&r💾F9*🔐b6🌼".repeat(28), 27, ECLevel::L; "test_qr_11")]
    #[test_case("1234567890".repeat(62), 27, ECLevel::H; "test_qr_12")]
    #[test_case("B3@j🎮#Z%8v🍣K!🔑3zC^8📖&r💾F9*🔐b6🌼".repeat(57), 40, ECLevel::L; "test_qr_13")]
    #[test_case("1234567890".repeat(127), 40, ECLevel::H; "test_qr_14")]
    fn test_qr(data: String, ver: usize, ecl: ECLevel) {
        let version = Version::new(ver).unwrap();
        let symbol = QRBuilder::new(&data).version(version).ec_level(ecl).build().unwrap();
        assert_eq!(symbol.module_count(), version.width());

        let (meta, decoded) = scan(&symbol);
        assert_eq!(meta.version.0, ver);
        assert_eq!(meta.ecc_level as u32, ecl.format_bits());
        assert_eq!(meta.mask as u8, *symbol.mask());
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_qrcode_high() {
        let symbol = encode("QRCode", &EncodeOptions::default()).unwrap();
        assert_eq!(*symbol.version(), 1);
        assert_eq!(symbol.ec_level(), ECLevel::H);
        assert_eq!(symbol.module_count(), 21);
        assert!(symbol.is_dark(0, 0));
        assert_eq!(scan(&symbol).1, "QRCode");
    }

    #[test]
    fn test_empty_text() {
        let symbol = encode("", &EncodeOptions::default()).unwrap();
        assert_eq!(*symbol.version(), 1);
        assert_eq!(scan(&symbol).1, "");
    }

    #[test]
    fn test_capacity_boundary() {
        let options = EncodeOptions::default();
        let symbol = encode(&"a".repeat(1273), &options).unwrap();
        assert_eq!(*symbol.version(), 40);
        assert_eq!(encode(&"a".repeat(1274), &options), Err(QRError::DataTooLong));
    }

    #[test]
    fn test_capacity_boundary_low() {
        let options = EncodeOptions { ec_level: ECLevel::L, ..Default::default() };
        assert!(encode(&"a".repeat(2953), &options).is_ok());
        assert_eq!(encode(&"a".repeat(2954), &options), Err(QRError::DataTooLong));
    }

    // Each globe is 4 bytes. Version 3-H holds 24 bytes, version 4-H holds 34
    #[test_case(6, 3; "fills_version_3")]
    #[test_case(7, 4; "overflows_version_3")]
    fn test_multibyte_counts_bytes(count: usize, exp: usize) {
        let text = "🌎".repeat(count);
        let symbol = encode(&text, &EncodeOptions::default()).unwrap();
        assert_eq!(*symbol.version(), exp);
        assert_eq!(scan(&symbol).1, text);
    }

    #[test]
    fn test_idempotent() {
        let options = EncodeOptions { ec_level: ECLevel::M, ..Default::default() };
        let a = encode("https://www.rust-lang.org", &options).unwrap();
        let b = encode("https://www.rust-lang.org", &options).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_forced_options() {
        let options = EncodeOptions {
            ec_level: ECLevel::Q,
            version: Some(Version::new(12).unwrap()),
            mask: Some(MaskPattern::new(6).unwrap()),
        };
        let symbol = encode("Hello", &options).unwrap();
        assert_eq!(symbol.metadata().to_string(), "{ Version: 12, Ec level: Q, Mask: 6 }");

        let (meta, decoded) = scan(&symbol);
        assert_eq!(meta.version.0, 12);
        assert_eq!(meta.mask, 6);
        assert_eq!(decoded, "Hello");
    }

    #[test]
    fn test_invalid_options() {
        assert_eq!(Version::new(0), Err(QRError::InvalidVersion));
        assert_eq!(Version::new(41), Err(QRError::InvalidVersion));
        assert_eq!(MaskPattern::new(8), Err(QRError::InvalidMaskingPattern));
    }
}

#[cfg(test)]
mod concurrency_tests {
    use rayon::prelude::*;

    use qrcraft::{encode, ECLevel, EncodeOptions};

    #[test]
    fn test_parallel_encodes_match_sequential() {
        let texts = (0..64).map(|i| format!("Message #{i} ").repeat(i % 9 + 1)).collect::<Vec<_>>();
        let options = EncodeOptions { ec_level: ECLevel::Q, ..Default::default() };

        let sequential =
            texts.iter().map(|t| encode(t, &options).unwrap()).collect::<Vec<_>>();
        let parallel =
            texts.par_iter().map(|t| encode(t, &options).unwrap()).collect::<Vec<_>>();
        assert_eq!(sequential, parallel);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use qrcraft::{ECLevel, EncodeOptions, MaskPattern, Version};

    #[test]
    fn test_options_from_json() {
        let options: EncodeOptions =
            serde_json::from_str(r#"{ "ec_level": "L", "version": 3, "mask": 5 }"#).unwrap();
        assert_eq!(options.ec_level, ECLevel::L);
        assert_eq!(options.version, Some(Version::new(3).unwrap()));
        assert_eq!(options.mask, Some(MaskPattern::new(5).unwrap()));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let options: EncodeOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, EncodeOptions::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let res = serde_json::from_str::<EncodeOptions>(r#"{ "palette": "poly" }"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(serde_json::from_str::<EncodeOptions>(r#"{ "version": 41 }"#).is_err());
        assert!(serde_json::from_str::<EncodeOptions>(r#"{ "mask": 8 }"#).is_err());
    }
}
