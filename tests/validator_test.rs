//! Integration tests for Validator and nested Validate types.

use std::convert::Infallible;

use stillwater::Validation;
use validates::error::{messages, SimpleError};
use validates::{is_present, on, ErrorTree, Path, Validate, Validator};

fn path(s: &str) -> Path {
    Path::parse(s).unwrap()
}

struct Phone {
    number: String,
}

impl Validate for Phone {
    type Error = Infallible;

    fn validate(&self, is: &mut Validator) -> Result<(), Infallible> {
        is.with_field("number", |is| {
            if is.required(is_present(&self.number)) {
                is.length_between(&self.number, 7, 15);
            }
        });
        Ok(())
    }
}

struct Person {
    name: String,
    email: String,
    age: i64,
    phones: Vec<Phone>,
}

impl Validate for Person {
    type Error = Infallible;

    fn validate(&self, is: &mut Validator) -> Result<(), Infallible> {
        is.with_field("name", |is| is.required(is_present(&self.name)));
        is.with_field("email", |is| is.email(&self.email));
        is.with_field("age", |is| is.between(self.age, 0, 150));
        is.valid_each("phones", &self.phones)
    }
}

fn valid_person() -> Person {
    Person {
        name: "Zoey".to_string(),
        email: "zoey@example.com".to_string(),
        age: 9,
        phones: vec![Phone {
            number: "5551234567".to_string(),
        }],
    }
}

#[test]
fn test_valid_structure_has_no_errors() {
    let is = on(&valid_person()).unwrap();
    assert!(!is.has_errors());
    assert!(is.is_empty());
    assert!(is.error_tree().is_none());
    assert!(!is.errors().has_errors());
    assert!(is.errors().fields().next().is_none());
    assert!(is.finish().is_success());
}

#[test]
fn test_errors_land_at_their_paths() {
    let person = Person {
        name: String::new(),
        email: "zoey".to_string(),
        age: 9,
        phones: vec![
            Phone {
                number: "5551234567".to_string(),
            },
            Phone {
                number: String::new(),
            },
            Phone {
                number: "123".to_string(),
            },
        ],
    };

    let is = on(&person).unwrap();
    assert_eq!(is.len(), 4);
    assert!(is.current_path().is_root());

    let root = is.errors();
    assert!(root.is_error_at(&path("/name"), &messages::SHOULD_BE_PRESENT));
    assert!(root.is_error_at(&path("/email"), &messages::SHOULD_BE_EMAIL));
    assert!(!root.has_error_at(&path("/age")));
    assert!(!root.has_error_at(&path("/phones[0]/number")));
    assert!(root.is_error_at(&path("/phones[1]/number"), &messages::SHOULD_BE_PRESENT));
    assert!(root.is_error_at(
        &path("/phones[2]/number"),
        &messages::should_be_between(7usize, 15usize).prefixed(messages::LENGTH_PREFIX)
    ));
}

#[test]
fn test_result_matches_expected_tree() {
    let mut person = valid_person();
    person.age = -1;
    person.phones.push(Phone {
        number: String::new(),
    });

    let mut expected = ErrorTree::new();
    expected.add_at(&path("/age"), messages::should_be_between(0i64, 150i64));
    expected.add_at(&path("/phones[1]/number"), messages::SHOULD_BE_PRESENT);

    match on(&person).unwrap().finish() {
        Validation::Failure(actual) => assert!(actual.is_equal(&expected)),
        Validation::Success(_) => panic!("Expected failure"),
    }
}

#[derive(Debug, PartialEq)]
struct LookupFailed(&'static str);

struct Account {
    owner: &'static str,
}

impl Validate for Account {
    type Error = LookupFailed;

    fn validate(&self, is: &mut Validator) -> Result<(), LookupFailed> {
        is.with_field("owner", |is| {
            is.not_empty(self.owner);
            if self.owner == "offline" {
                return Err(LookupFailed("directory unavailable"));
            }
            Ok(())
        })
    }
}

#[test]
fn test_valid_each_stops_at_first_abnormal_error() {
    let accounts = [
        Account { owner: "" },
        Account { owner: "offline" },
        Account { owner: "" },
    ];

    let mut is = Validator::new();
    let result = is.valid_each("accounts", &accounts);

    assert_eq!(result, Err(LookupFailed("directory unavailable")));
    assert!(is.current_path().is_root());
    assert_eq!(is.len(), 1);
    assert!(is.errors().has_error_at(&path("/accounts[0]/owner")));
    assert!(!is.errors().has_error_at(&path("/accounts[2]/owner")));
}

#[test]
fn test_valid_field_and_index() {
    let mut is = Validator::new();
    is.valid_field("primary", &Phone {
        number: String::new(),
    })
    .unwrap();
    is.with_field("backup", |is| {
        is.valid_index(3, &Phone {
            number: String::new(),
        })
    })
    .unwrap();

    assert!(is.errors().has_error_at(&path("/primary/number")));
    assert!(is.errors().has_error_at(&path("/backup[3]/number")));
}

#[test]
fn test_validator_at_reports_under_offset() {
    let mut is = Validator::at(path("/batch[4]"));
    valid_person().validate(&mut is).unwrap();
    is.with_field("name", |is| is.invalid(SimpleError::new("taken")));

    assert_eq!(is.current_path(), &path("/batch[4]"));
    assert!(is.errors().has_error_at(&path("/batch[4]/name")));
}

#[test]
fn test_into_errors_without_failures_is_empty_tree() {
    let tree = Validator::new().into_errors();
    assert!(!tree.has_errors());
    assert_eq!(tree, ErrorTree::new());
}
