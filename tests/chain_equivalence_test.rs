use idiom_recipe::chain::{
    country_code, country_code_bound, country_code_flat_mapped, country_code_imperative,
    country_code_ref, Chain,
};
use idiom_recipe::model::{Address, Country, HumanPerson};
use proptest::option;
use proptest::prelude::*;

fn country() -> impl Strategy<Value = Country> {
    option::of("[A-Z]{2}").prop_map(Country::new)
}

fn address() -> impl Strategy<Value = Address> {
    (any::<u32>(), option::of(country())).prop_map(|(id, country)| Address::new(id, country))
}

fn person() -> impl Strategy<Value = HumanPerson> {
    ("[a-z]{1,8}", option::of(address())).prop_map(|(name, address)| HumanPerson::new(name, address))
}

/// Direct field access, used as the reference answer.
fn direct(root: &Option<HumanPerson>) -> Option<String> {
    match root {
        Some(HumanPerson {
            address:
                Some(Address {
                    country: Some(Country { code: Some(code) }),
                    ..
                }),
            ..
        }) => Some(code.clone()),
        _ => None,
    }
}

proptest! {
    #[test]
    fn test_all_styles_agree(root in option::of(person())) {
        let expected = country_code_bound(root.clone());

        prop_assert_eq!(&country_code_imperative(root.clone()), &expected);
        prop_assert_eq!(&country_code_flat_mapped(root.clone()), &expected);
        prop_assert_eq!(&country_code(root.clone()), &expected);
        if let Some(person) = &root {
            prop_assert_eq!(country_code_ref(person).map(str::to_string), expected.clone());
        }
        prop_assert_eq!(expected, direct(&root));
    }

    #[test]
    fn test_full_chain_matches_direct_access(name in "[a-z]{1,8}", id in any::<u32>(), code in "[A-Z]{2}") {
        let person = HumanPerson::located(name, id, code.clone());
        prop_assert_eq!(country_code(Some(person)), Some(code));
    }

    #[test]
    fn test_absent_link_wins_over_later_links(name in "[a-z]{1,8}", id in any::<u32>(), code in "[A-Z]{2}") {
        // The country is missing, so the code that would follow is irrelevant.
        let person = HumanPerson::new(name, Some(Address::new(id, None)));
        let chain = Chain::new(Some(person.clone()))
            .step(|p| p.address)
            .step(|a| a.country)
            .step(|_| Some(code));
        prop_assert_eq!(chain.absent_at(), Some(2));
        prop_assert_eq!(chain.resolve(), None);
        prop_assert_eq!(country_code(Some(person)), None);
    }
}

#[test]
fn test_uk_scenario() {
    let root = Some(HumanPerson::new(
        "bobby",
        Some(Address::new(3, Some(Country::new(Some("UK".into()))))),
    ));
    assert_eq!(country_code(root), Some("UK".to_string()));
}

#[test]
fn test_absent_address_scenario() {
    let root = Some(HumanPerson::new("bobby", None));
    assert_eq!(country_code(root), None);
}
