use rstest::rstest;
use signdesk::formatting::{
    format_file_size, format_megabytes, format_tax_id, is_cnpj, is_cpf, unformat_tax_id, Country,
    PhoneField,
};
use signdesk::locale::Language;

#[rstest]
#[case(Country::Brazil, "11987654321", "(11) 98765-4321")]
#[case(Country::Brazil, "1187654321", "(11) 8765-4321")]
#[case(Country::Brazil, "119", "(11) 9")]
#[case(Country::UnitedStates, "2125550123", "(212) 555-0123")]
#[case(Country::Portugal, "912345678", "912 345 678")]
#[case(Country::Spain, "6123", "612 3")]
#[case(Country::France, "0612345678", "06 12 34 56 78")]
#[case(Country::UnitedKingdom, "0201234567", "0201 234567")]
#[case(Country::Argentina, "1123456789", "1123-456789")]
#[case(Country::Chile, "912345678", "9 1234 5678")]
fn test_phone_masks(#[case] country: Country, #[case] input: &str, #[case] expected: &str) {
    assert_eq!(country.format_phone(input), expected);
}

#[rstest]
#[case(Country::Brazil, "+55 (11) 98765-4321 0000", "(55) 11987-6543")]
#[case(Country::UnitedStates, "212-555-0123-999", "(212) 555-0123")]
#[case(Country::France, "06123456789999", "06 12 34 56 78")]
fn test_phone_extra_digits_are_dropped(
    #[case] country: Country,
    #[case] input: &str,
    #[case] expected: &str,
) {
    assert_eq!(country.format_phone(input), expected);
}

#[rstest]
fn test_phone_mask_is_idempotent(
    #[values(
        Country::Brazil,
        Country::UnitedStates,
        Country::Portugal,
        Country::France,
        Country::UnitedKingdom,
        Country::Argentina,
        Country::Chile
    )]
    country: Country,
    #[values("1", "12345", "123456789", "123456789012345")] input: &str,
) {
    let once = country.format_phone(input);
    assert_eq!(country.format_phone(&once), once);
}

#[test]
fn test_empty_phone_stays_empty() {
    for country in Country::ALL {
        assert_eq!(country.format_phone("abc"), "");
    }
}

#[test]
fn test_phone_field_switching_country() {
    let mut field = PhoneField::new(Country::Brazil);
    assert_eq!(field.input("11987654321"), "(11) 98765-4321");

    let language = field.set_country(Country::UnitedStates);
    assert_eq!(language, Language::En);
    assert_eq!(field.value(), "");
    assert_eq!(field.input("2125550123"), "(212) 555-0123");
}

#[test]
fn test_country_lookup_by_name() {
    assert_eq!(Country::from_name("Espanha"), Some(Country::Spain));
    assert_eq!(Country::from_name("Atlântida"), None);
    assert_eq!(Country::from_name_or_default("Atlântida"), Country::Brazil);
}

#[rstest]
#[case("12345678901", "123.456.789-01")]
#[case("123.456.789-01", "123.456.789-01")]
#[case("1234", "123.4")]
#[case("12345678000195", "12.345.678/0001-95")]
#[case("123456789012", "12.345.678/9012")]
#[case("12.345.678/0001-95 99", "12.345.678/0001-95")]
fn test_tax_id_shapes(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(format_tax_id(input), expected);
}

#[test]
fn test_tax_id_kind() {
    assert!(is_cpf("123.456.789-01"));
    assert!(!is_cnpj("123.456.789-01"));
    assert!(is_cnpj("12.345.678/0001-95"));
    assert_eq!(unformat_tax_id("12.345.678/0001-95"), "12345678000195");
}

#[rstest]
#[case(0, "0 B")]
#[case(1536, "1.5 KB")]
#[case(5 * 1024 * 1024, "5 MB")]
fn test_file_size_display(#[case] bytes: u64, #[case] expected: &str) {
    assert_eq!(format_file_size(bytes), expected);
}

#[test]
fn test_megabytes_display() {
    assert_eq!(format_megabytes(1_572_864), "1.5 MB");
}
