use avro_order_macros::dec;

// Require using for reexportable feature
#[cfg(feature = "reexportable")]
use avro_order::Decimal;

#[test]
fn it_can_parse_standard_decimal() {
    let tests = [
        (dec!(0.000), "0.000"),
        (dec!(1.00), "1.00"),
        (dec!(-1.23), "-1.23"),
        (dec!(1234567.890), "1234567.890"),
        (dec!(1_000_000), "1000000"),
        (dec!(-0.005), "-0.005"),
    ];
    for (a, b) in tests {
        assert_eq!(a.to_string(), b);
    }
}

#[test]
fn it_keeps_the_written_scale() {
    assert_eq!(dec!(1.5).scale(), 1);
    assert_eq!(dec!(1.500).scale(), 3);
    assert_eq!(dec!(1.5), dec!(1.500));
}

#[test]
fn it_handles_the_full_i128_range() {
    let max = dec!(170141183460469231731687303715884105727);
    assert_eq!(max.mantissa(), Some(i128::MAX));
    let min = dec!(-17014118346046923173168730371588410572.7);
    assert_eq!(min.mantissa(), Some(-i128::MAX));
    assert_eq!(min.scale(), 1);
}
