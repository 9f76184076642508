#![cfg(feature = "derive")]
//! Tests for the `Source` and `Destination` derive macros.
//!
//! - `#[derive(Source)]`: exposes fields by declared name
//! - `#[derive(Destination)]`: builds the field table and hands out fields
//!   by index

use assign::{Assigner, Destination, Kind, Source, Value};
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

/// Struct exercising every field attribute
#[derive(Debug, Default, PartialEq, Source, Destination)]
struct Account {
    #[assign(rename = "ID", tag(json = "id", yaml = ""))]
    id: u64,
    #[assign(skip)]
    cache: Vec<u8>,
    r#type: String,
}

/// Generic struct with a bound per field type
#[derive(Debug, Default, PartialEq, Source, Destination)]
struct Wrapper<T> {
    inner: T,
    count: u8,
}

/// Struct holding borrowed data
#[derive(Source)]
struct Borrowing<'a> {
    name: &'a str,
    values: &'a [i16],
}

/// Unit struct
#[derive(Debug, Default, PartialEq, Source, Destination)]
struct Marker;

// =============================================================================
// Destination Derive Tests
// =============================================================================

#[rstest]
fn test_destination_reports_struct_kind() {
    assert_eq!(Destination::kind(&Account::default()), Kind::Struct);
    assert_eq!(Destination::kind(&Marker), Kind::Struct);
}

#[rstest]
fn test_field_table_follows_declaration_order() {
    let account = Account::default();
    let names: Vec<&str> = account.fields().iter().map(|field| field.name()).collect();
    assert_eq!(names, vec!["id", "cache", "type"]);
}

#[rstest]
fn test_field_table_carries_tags() {
    let account = Account::default();
    let id = &account.fields()[0];
    assert_eq!(id.tag("assign"), Some("ID"));
    assert_eq!(id.tag("json"), Some("id"));
    assert_eq!(id.tag("yaml"), None);
    assert_eq!(id.tag("toml"), None);
    assert!(account.fields()[2].tags().is_empty());
}

#[rstest]
fn test_skipped_field_is_unsettable() {
    let mut account = Account::default();
    assert!(!account.fields()[1].is_settable());
    assert!(account.field_mut(1).is_none());
    assert!(account.field_mut(0).is_some());
    assert!(account.field_mut(2).is_some());
    assert!(account.field_mut(3).is_none());
}

#[rstest]
fn test_unit_struct_has_no_fields() {
    let mut marker = Marker;
    assert!(marker.fields().is_empty());
    assert!(marker.field_mut(0).is_none());
}

// =============================================================================
// Source Derive Tests
// =============================================================================

#[rstest]
fn test_field_by_name_uses_declared_names() {
    let account = Account {
        id: 3,
        cache: vec![1],
        r#type: "admin".to_string(),
    };
    assert_eq!(account.field_by_name("id").value(), Value::U64(3));
    assert_eq!(account.field_by_name("type").value(), Value::from("admin"));
    assert_eq!(account.field_by_name("ID").kind(), Kind::Invalid);
    assert!(account.field_by_name("cache").skip());
}

#[rstest]
#[case(Account::default(), true)]
#[case(Account { cache: vec![1], ..Account::default() }, true)]
#[case(Account { id: 1, ..Account::default() }, false)]
fn test_struct_is_skipped_when_every_field_is(#[case] account: Account, #[case] expected: bool) {
    assert_eq!(Source::skip(&account), expected);
}

#[rstest]
fn test_unit_struct_source_is_skipped() {
    assert!(Source::skip(&Marker));
    assert_eq!(Source::kind(&Marker), Kind::Struct);
}

#[rstest]
fn test_borrowed_fields_are_readable() {
    let values = [4, 5];
    let borrowing = Borrowing {
        name: "borrowed",
        values: &values,
    };
    assert_eq!(borrowing.field_by_name("name").value(), Value::from("borrowed"));
    assert_eq!(Source::len(&*borrowing.field_by_name("values")), 2);
}

// =============================================================================
// Derived Types in Assignment
// =============================================================================

#[rstest]
fn test_generic_structs_assign_between_instantiations() {
    let source = Wrapper {
        inner: vec![1_i32, 2],
        count: 2,
    };
    let mut destination: Wrapper<Option<Vec<i64>>> = Wrapper::default();
    Assigner::new(&source).to(&mut destination).unwrap();
    assert_eq!(
        destination,
        Wrapper {
            inner: Some(vec![1, 2]),
            count: 2,
        }
    );
}

#[rstest]
fn test_rename_and_raw_identifier_in_assignment() {
    #[derive(Source)]
    struct Row<'a> {
        #[assign(rename = "ignored")]
        #[allow(non_snake_case)]
        ID: u64,
        r#type: &'a str,
        cache: Vec<u8>,
    }

    let row = Row {
        ID: 9,
        r#type: "guest",
        cache: vec![1, 2],
    };
    let mut account = Account::default();
    Assigner::new(&row).to(&mut account).unwrap();
    assert_eq!(
        account,
        Account {
            id: 9,
            cache: Vec::new(),
            r#type: "guest".to_string(),
        }
    );
}

#[rstest]
fn test_borrowed_source_into_generic_destination() {
    let values = [4_i16, 0, 6];
    let borrowing = Borrowing {
        name: "",
        values: &values,
    };

    #[derive(Debug, Default, PartialEq, Destination)]
    struct Target {
        name: Option<String>,
        values: [u8; 3],
    }

    let mut target = Target::default();
    Assigner::new(&borrowing).to(&mut target).unwrap();
    assert_eq!(
        target,
        Target {
            name: None,
            values: [4, 0, 6],
        }
    );
}
