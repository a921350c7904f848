use super::*;

#[test]
fn variant_default_is_primary() {
    assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
}

#[test]
fn variant_classes_share_base_and_differ_by_modifier() {
    let classes = [ButtonVariant::Primary.class(), ButtonVariant::Secondary.class(), ButtonVariant::Ghost.class()];
    for class in classes {
        assert!(class.starts_with("btn btn--"));
    }
    assert_ne!(classes[0], classes[1]);
    assert_ne!(classes[1], classes[2]);
    assert_ne!(classes[0], classes[2]);
}
