use crate::PersonName;

#[test]
fn test_split_two_tokens() {
    let name = PersonName::split("Ada Lovelace");

    assert_eq!(name.first, "Ada");
    assert_eq!(name.last, "Lovelace");
}

#[test]
fn test_split_single_token_has_empty_last_name() {
    let name = PersonName::split("Ada");

    assert_eq!(name.first, "Ada");
    assert_eq!(name.last, "");
}

#[test]
fn test_split_only_on_first_space() {
    let name = PersonName::split("Mary Ann Evans");

    assert_eq!(name.first, "Mary");
    assert_eq!(name.last, "Ann Evans");
}

#[test]
fn test_split_keeps_extra_spaces_in_last_name() {
    let name = PersonName::split("Ada  Lovelace");

    assert_eq!(name.first, "Ada");
    assert_eq!(name.last, " Lovelace");
}
