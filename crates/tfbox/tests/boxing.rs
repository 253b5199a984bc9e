//! Fixture tests
//!
//! Each tests/fixtures/*.json holds an `object`, optional `unknown` and `sensitive` overlays and
//! the `expected` boxed result in its serialized form.

use pretty_assertions::assert_eq;
use tfbox::{load, native, path, BoxedValue, Overlay};

#[test]
fn fixtures() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("TFBOX_LOG"))
        .with_writer(std::io::stderr)
        .try_init();

    insta::glob!("fixtures/*.json", |fixture_path| {
        let fixture = load::load_file(fixture_path, None).expect("fixture must be valid json");
        let field = |name: &str| fixture.get(&path![name]).cloned();

        let object = field("object").expect("fixture must have an object");
        let boxed = tfbox::box_native(&object, field("unknown"), field("sensitive"))
            .expect("fixture overlays must be valid");
        let expected = field("expected").expect("fixture must have an expected result");

        assert_eq!(
            serde_json::to_value(&boxed).unwrap(),
            serde_json::to_value(&expected).unwrap()
        );
    });
}

#[test]
fn serialized_sparse_list() {
    let boxed = tfbox::box_native(&native!([]), Some(native!([false, true])), None).unwrap();

    insta::assert_json_snapshot!(boxed, @r###"
    {
      "kind": "list",
      "items": [
        {
          "kind": "omitted"
        },
        {
          "kind": "unknown",
          "sensitive": false
        }
      ],
      "sensitive": false
    }
    "###);
}

#[test]
fn tfvars_with_json_overlays() {
    let object = load::parse_str(
        r#"
        region   = "eu-west-1"
        db_users = ["admin", "reader"]
        "#,
        load::InputFormat::Hcl,
    )
    .unwrap();
    let unknown = Overlay::try_from(
        load::parse_str(r#"{ "db_users": [false, true] }"#, load::InputFormat::Json).unwrap(),
    )
    .unwrap();
    let sensitive = Overlay::try_from(
        load::parse_str("db_users:\n  - true\n", load::InputFormat::Yaml).unwrap(),
    )
    .unwrap();

    let boxed = tfbox::box_value(&object, &unknown, &sensitive);

    assert_eq!(
        boxed.get(&path!["db_users", 0]),
        Some(&BoxedValue::known("admin", true))
    );
    assert_eq!(
        boxed.get(&path!["db_users", 1]),
        Some(&BoxedValue::unknown(false))
    );
    assert_eq!(
        boxed.get(&path!["region"]),
        Some(&BoxedValue::known("eu-west-1", false))
    );
    assert_eq!(boxed.unknown_paths(), vec![path!["db_users", 1]]);
    assert_eq!(boxed.sensitive_paths(), vec![path!["db_users", 0]]);
}

#[test]
fn boxing_does_not_touch_inputs() {
    let object = native!({ "a": [1, 2] });
    let unknown = Overlay::Tree(native!({ "a": [true] }));
    let before = (object.clone(), unknown.clone());

    let first = tfbox::box_value(&object, &unknown, &Overlay::Absent);
    let second = tfbox::box_value(&object, &unknown, &Overlay::Absent);

    assert_eq!(first, second);
    assert_eq!((object, unknown), before);
}
