use chrono::{NaiveDate, NaiveTime};
use provmeta_domain::Record;

#[test]
fn empty_record_serializes_with_fixed_key_order() {
    let json = serde_json::to_string(&Record::new()).expect("serializes");
    assert_eq!(json, r#"{"inputs":[],"outputs":[],"parameters":[],"date":null,"time":null}"#);
}

#[test]
fn date_and_time_serialize_as_iso_strings() {
    let mut record = Record::new();
    record.set_date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    record.set_time(NaiveTime::from_hms_opt(13, 45, 10).unwrap());

    let value = serde_json::to_value(&record).expect("serializes");
    assert_eq!(value["date"], "2024-05-01");
    assert_eq!(value["time"], "13:45:10");
}

#[test]
fn unchecksummed_entries_omit_sha1() {
    let mut record = Record::new();
    record.add_input("a.txt");

    let value = serde_json::to_value(&record).expect("serializes");
    assert_eq!(value["inputs"][0], serde_json::json!({"path": "a.txt"}));
}
