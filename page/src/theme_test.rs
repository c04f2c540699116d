use super::*;

#[test]
fn absent_attribute_reads_as_light() {
    assert_eq!(Theme::from_attr(None), Theme::Light);
}

#[test]
fn dark_attribute_reads_as_dark() {
    assert_eq!(Theme::from_attr(Some("dark")), Theme::Dark);
}

#[test]
fn unknown_values_read_as_light() {
    assert_eq!(Theme::from_attr(Some("")), Theme::Light);
    assert_eq!(Theme::from_attr(Some("Dark")), Theme::Light);
    assert_eq!(Theme::from_attr(Some("solarized")), Theme::Light);
}

#[test]
fn toggled_flips_between_the_two_values() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn as_str_matches_attribute_tokens() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn as_str_round_trips_through_from_attr() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_attr(Some(theme.as_str())), theme);
    }
}
