use super::*;

#[test]
fn dimensions_reject_zero_sides() {
    assert!(Dimensions::new(0, 4).is_err());
    assert!(Dimensions::new(4, 0).is_err());
    assert!(Dimensions::new(4, 4).is_ok());
}

#[test]
fn sample_len_counts_rgb_triples() {
    let dims = Dimensions::new(3, 2).unwrap();
    assert_eq!(dims.pixel_count(), 6);
    assert_eq!(dims.sample_len(), 18);
}

#[test]
fn spp_orders_numerically() {
    assert!(Spp(15) < Spp(16));
    assert!(Spp(17) >= Spp(16));
    assert_eq!(Spp(16), Spp(16));
}
