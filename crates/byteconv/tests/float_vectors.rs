use byteconv::{ByteOrder, checked};

struct Case {
    double: [u8; 8],
    single: [u8; 4],
    half: [u8; 2],
    value: f64,
    half_value: f64,
}

fn notable_cases() -> Vec<Case> {
    vec![
        Case {
            double: [64, 9, 33, 251, 84, 68, 45, 24],
            single: [64, 73, 15, 219],
            half: [66, 72],
            value: std::f64::consts::PI,
            half_value: 3.140625,
        },
        Case {
            double: [127, 240, 0, 0, 0, 0, 0, 0],
            single: [127, 128, 0, 0],
            half: [124, 0],
            value: f64::INFINITY,
            half_value: f64::INFINITY,
        },
        Case {
            double: [255, 240, 0, 0, 0, 0, 0, 0],
            single: [255, 128, 0, 0],
            half: [252, 0],
            value: f64::NEG_INFINITY,
            half_value: f64::NEG_INFINITY,
        },
        Case {
            double: [128, 0, 0, 0, 0, 0, 0, 0],
            single: [128, 0, 0, 0],
            half: [128, 0],
            value: -0.0,
            half_value: -0.0,
        },
        // smallest number > 1
        Case {
            double: [63, 240, 0, 0, 0, 0, 0, 1],
            single: [63, 128, 0, 1],
            half: [60, 1],
            value: 1.0000000000000002,
            half_value: 1.0009765625,
        },
        // largest number < 1
        Case {
            double: [63, 239, 255, 255, 255, 255, 255, 255],
            single: [63, 127, 255, 255],
            half: [59, 255],
            value: 0.9999999999999999,
            half_value: 0.99951171875,
        },
        // smallest positive subnormal
        Case {
            double: [0, 0, 0, 0, 0, 0, 0, 1],
            single: [0, 0, 0, 1],
            half: [0, 1],
            value: 4.9406564584124654e-324,
            half_value: 5.960464477539063e-8,
        },
        // largest subnormal
        Case {
            double: [0, 15, 255, 255, 255, 255, 255, 255],
            single: [0, 127, 255, 255],
            half: [3, 255],
            value: 2.2250738585072009e-308,
            half_value: 0.00006097555160522461,
        },
        // smallest positive normal
        Case {
            double: [0, 16, 0, 0, 0, 0, 0, 0],
            single: [0, 128, 0, 0],
            half: [4, 0],
            value: 2.2250738585072014e-308,
            half_value: 0.00006103515625,
        },
        // largest normal
        Case {
            double: [127, 239, 255, 255, 255, 255, 255, 255],
            single: [127, 127, 255, 255],
            half: [123, 255],
            value: f64::MAX,
            half_value: 65504.0,
        },
    ]
}

fn reversed<const N: usize>(mut bytes: [u8; N]) -> [u8; N] {
    bytes.reverse();
    bytes
}

fn assert_same(actual: f64, expected: f64) {
    assert_eq!(actual.to_bits(), expected.to_bits(), "{actual} != {expected}");
}

#[test]
fn notable_values_big_endian() {
    for case in notable_cases() {
        let double = checked::decode_float64(&case.double, 0, ByteOrder::BigEndian).unwrap();
        assert_same(double, case.value);

        let single = checked::decode_float32(&case.single, 0, ByteOrder::BigEndian).unwrap();
        assert_eq!(single.to_bits(), f32::from_be_bytes(case.single).to_bits());

        let half = checked::decode_float16(&case.half, 0, ByteOrder::BigEndian).unwrap();
        assert_same(half, case.half_value);
    }
}

#[test]
fn notable_values_little_endian() {
    for case in notable_cases() {
        let double =
            checked::decode_float64(&reversed(case.double), 0, ByteOrder::LittleEndian).unwrap();
        assert_same(double, case.value);

        let single =
            checked::decode_float32(&reversed(case.single), 0, ByteOrder::LittleEndian).unwrap();
        assert_eq!(single.to_bits(), f32::from_be_bytes(case.single).to_bits());

        let half =
            checked::decode_float16(&reversed(case.half), 0, ByteOrder::LittleEndian).unwrap();
        assert_same(half, case.half_value);
    }
}

#[test]
fn negative_zero_is_distinguishable() {
    let zero = checked::decode_float64(&[0x80, 0, 0, 0, 0, 0, 0, 0], 0, ByteOrder::BigEndian)
        .unwrap();
    assert_eq!(zero, 0.0);
    assert_eq!(1.0 / zero, f64::NEG_INFINITY);
}

#[test]
fn nan_for_any_payload() {
    let doubles = [
        [127, 240, 0, 0, 0, 0, 0, 1],
        [127, 248, 0, 0, 0, 0, 0, 1],
    ];
    for bytes in doubles {
        assert!(checked::decode_float64(&bytes, 0, ByteOrder::BigEndian).unwrap().is_nan());
        assert!(
            checked::decode_float64(&reversed(bytes), 0, ByteOrder::LittleEndian)
                .unwrap()
                .is_nan()
        );
    }

    for bytes in [[255, 192, 0, 1], [255, 128, 0, 1]] {
        assert!(checked::decode_float32(&bytes, 0, ByteOrder::BigEndian).unwrap().is_nan());
        assert!(
            checked::decode_float32(&reversed(bytes), 0, ByteOrder::LittleEndian)
                .unwrap()
                .is_nan()
        );
    }

    for bytes in [[124, 1], [124, 123]] {
        assert!(checked::decode_float16(&bytes, 0, ByteOrder::BigEndian).unwrap().is_nan());
        assert!(
            checked::decode_float16(&reversed(bytes), 0, ByteOrder::LittleEndian)
                .unwrap()
                .is_nan()
        );
    }
}

#[test]
fn single_precision_widening_is_not_a_bug() {
    // 21.9f32 widens to 21.899999618530273, same as a native cast
    let single = checked::decode_float32(&[0x41, 0xAF, 0x33, 0x33], 0, ByteOrder::BigEndian)
        .unwrap();
    assert_eq!(f64::from(single), f64::from(21.9f32));
    assert_ne!(f64::from(single), 21.9);
}
