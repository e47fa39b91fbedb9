//! End-to-end exercise of the status field: definition block in, storage
//! predicates out.

use std::collections::HashSet;

use dk_modelfields_db::fields::{ModelField, StatusField, StatusValue};
use dk_modelfields_db::value::Value;

fn sale_status_field() -> StatusField {
    StatusField::new(
        "
        @start-saleStatusdef
        =========== =================================== =======================
        status      verbose explanation (for web)       category
        =========== =================================== =======================
        new         Ordren er opprettet                 # [init]
        sale        Ordren er fakturert                 # [done]
        cancelled   Ordren er kansellert                # [done]
        error       Det har oppstått en feil            # [err]
        credit      Ordren er kreditert                 # [done]
        =========== =================================== =======================
        @end-saleStatusdef
    ",
    )
}

fn list_as_set(value: &Value) -> HashSet<&str> {
    value
        .as_list()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect()
}

#[test]
fn parses_description_and_verbose_labels() {
    let sf = sale_status_field();
    assert_eq!(sf.description(), "Status field");
    let sale = sf.to_python(Value::from("sale")).unwrap();
    assert_eq!(sale.as_status().unwrap().verbose(), "Ordren er fakturert");
}

#[test]
fn in_lookup_expands_a_category_to_its_member_statuses() {
    let sf = sale_status_field();
    let res = sf.get_prep_lookup("in", Value::from("done")).unwrap();
    assert_eq!(
        list_as_set(&res),
        HashSet::from(["cancelled", "credit", "sale"])
    );
}

#[test]
fn in_lookup_accepts_already_converted_status_values() {
    let sf = sale_status_field();
    let sv = StatusValue::new("cancelled", "Ordren er kansellert", ["done"]);
    let res = sf
        .get_prep_lookup("in", Value::List(vec![Value::Status(sv)]))
        .unwrap();
    assert_eq!(res, Value::List(vec![Value::from("cancelled")]));
}

#[test]
fn non_in_lookups_pass_the_value_through() {
    let sf = sale_status_field();
    assert_eq!(
        sf.get_prep_lookup("", Value::from("init")).unwrap(),
        Value::from("init")
    );
}

#[test]
fn column_is_sized_to_the_longest_status_name() {
    let sf = sale_status_field();
    assert_eq!(sf.max_length(), Some(9));
    assert_eq!(sf.db_type(), "VARCHAR(9)");
}

#[test]
fn choices_come_out_in_declaration_order() {
    let sf = sale_status_field();
    let choices = sf.choices().unwrap();
    let names: Vec<&str> = choices.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["new", "sale", "cancelled", "error", "credit"]);
}

#[test]
fn storage_roundtrip_preserves_every_status() {
    let sf = sale_status_field();
    for name in ["new", "sale", "cancelled", "error", "credit"] {
        let domain = sf.to_python(Value::from(name)).unwrap();
        let stored = sf.get_prep_value(domain.clone()).unwrap();
        assert_eq!(sf.from_storage(stored).unwrap(), domain);
    }
}
