use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{Method, Request};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use structbind::{bind, bind_request, BindOptions, Binder, Error, ErrorPolicy, Record, Values};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Record)]
struct Form {
    #[serde(rename = "t_int")]
    #[record(required)]
    int: isize,
    #[serde(rename = "t_int8")]
    #[record(required)]
    int8: i8,
    #[serde(rename = "t_int16")]
    #[record(required)]
    int16: i16,
    #[serde(rename = "t_int32")]
    #[record(required)]
    int32: i32,
    #[serde(rename = "t_int64")]
    #[record(required)]
    int64: i64,
    #[serde(rename = "t_float32")]
    #[record(required)]
    float32: f32,
    #[serde(rename = "t_float64")]
    #[record(required)]
    float64: f64,
    #[serde(rename = "t_bool")]
    #[record(required)]
    flag: bool,
    #[serde(rename = "t_string")]
    #[record(required)]
    text: String,
    #[serde(rename = "t_unsupported")]
    #[record(required)]
    unsupported: u64,
    #[serde(rename = "t_after")]
    after: i32,
}

fn bound(query: &str) -> Form {
    let mut form = Form::default();
    bind(&Values::parse(query), &mut form).unwrap();
    form
}

fn request(method: Method, uri: &str, body: &'static str) -> Request<Bytes> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn binds_every_scalar_kind() {
    assert_eq!(bound("t_int=123").int, 123);
    assert_eq!(bound("t_int8=123").int8, 123);
    assert_eq!(bound("t_int16=123").int16, 123);
    assert_eq!(bound("t_int32=123").int32, 123);
    assert_eq!(bound("t_int64=123").int64, 123);
    assert_eq!(bound("t_float32=123.221").float32, 123.221);
    assert_eq!(bound("t_float64=123.223841").float64, 123.223841);
    assert_eq!(bound("t_string=123.223841").text, "123.223841");
}

#[test]
fn booleans_accept_only_one_and_true() {
    assert!(bound("t_bool=true").flag);
    assert!(bound("t_bool=1").flag);
    assert!(!bound("t_bool=false").flag);
    assert!(!bound("t_bool=").flag);
    assert!(!bound("t_bool=TRUE").flag);
    assert!(!bound("t_bool=yes").flag);
}

#[test]
fn numbers_cross_between_ints_and_floats() {
    assert_eq!(bound("t_int8=123.223841").int8, 123);
    assert_eq!(bound("t_int64=123192733.22338723841").int64, 123192733);
    assert_eq!(bound("t_float64=123192733").float64, 123192733.0);
    assert_eq!(bound("t_int32=abc").int32, 0);
}

#[test]
fn narrow_ints_lose_precision_through_f32() {
    assert_eq!(bound("t_int=123456789").int, 123456792);
    assert_eq!(bound("t_int64=123456789").int64, 123456789);
}

#[test]
fn only_the_first_value_is_used() {
    assert_eq!(bound("t_int=1&t_int=2").int, 1);
}

#[test]
fn unsupported_kind_stops_binding() {
    let mut form = Form {
        after: 5,
        ..Form::default()
    };
    let source = Values::parse("t_string=kept&t_unsupported=123.223841&t_after=9");

    let err = bind(&source, &mut form).unwrap_err();
    assert_eq!(
        err.to_string(),
        "u64 type is not supported. You can skip this binding by changing the field key to `-`"
    );
    assert_eq!(err.key(), Some("t_unsupported"));
    assert!(matches!(err, Error::UnsupportedFieldType { .. }));
    assert_eq!(form.text, "kept");
    assert_eq!(form.after, 5);
}

#[test_log::test]
fn get_binds_the_query_string() {
    let mut form = Form::default();
    let req = request(Method::GET, "http://localhost:9000/?t_string=123456&t_int=4", "");

    bind_request(&req, &mut form).unwrap();
    assert_eq!(form.text, "123456");
    assert_eq!(form.int, 4);
}

#[test_log::test]
fn post_decodes_the_json_body() {
    let cases: [(&str, fn(&Form) -> bool); 6] = [
        (r#"{"t_int8" : 123 }"#, |f| f.int8 == 123),
        (r#"{"t_int64" : 93934123 }"#, |f| f.int64 == 93934123),
        (r#"{"t_bool" : true }"#, |f| f.flag),
        (r#"{"t_bool" : false }"#, |f| !f.flag),
        (r#"{"t_float32" : 123.3223 }"#, |f| f.float32 == 123.3223),
        (r#"{"t_string" : "123.3223" }"#, |f| f.text == "123.3223"),
    ];
    for (body, check) in cases {
        let mut form = Form::default();
        bind_request(&request(Method::POST, "/", body), &mut form).unwrap();
        assert!(check(&form), "body {body} decoded as {form:?}");
    }
}

#[test]
fn post_merges_into_the_target() {
    let mut form = Form {
        text: "keep".to_string(),
        int: 9,
        ..Form::default()
    };
    bind_request(&request(Method::POST, "/?t_int=5", r#"{"t_int8": 1}"#), &mut form).unwrap();

    assert_eq!(
        form,
        Form {
            int8: 1,
            int: 9,
            text: "keep".to_string(),
            ..Form::default()
        }
    );
}

#[test]
fn post_merges_nested_objects_without_serde_defaults() {
    #[derive(Debug, Default, PartialEq, Serialize, Deserialize, Record)]
    struct Address {
        #[record(key = "city")]
        city: String,
        #[record(key = "zip")]
        zip: i32,
    }

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize, Record)]
    struct Profile {
        #[record(key = "name")]
        name: String,
        #[record(key = "address")]
        address: Address,
    }

    let mut profile = Profile {
        name: "Arya".to_string(),
        address: Address {
            city: "Winterfell".to_string(),
            zip: 1,
        },
    };
    let strict = Binder::new(BindOptions::default().with_body_errors(ErrorPolicy::Propagate));
    strict
        .bind_request(
            &request(Method::POST, "/", r#"{"address": {"zip": 2}, "unknown": 1}"#),
            &mut profile,
        )
        .unwrap();

    assert_eq!(profile.name, "Arya");
    assert_eq!(profile.address.city, "Winterfell");
    assert_eq!(profile.address.zip, 2);
}

#[test]
fn mistyped_body_values_follow_policy() {
    let req = request(Method::POST, "/", r#"{"t_int8": "many", "t_int": 4}"#);
    let mut form = Form::default();

    bind_request(&req, &mut form).unwrap();
    assert_eq!(form, Form::default());

    let strict = Binder::new(BindOptions::default().with_body_errors(ErrorPolicy::Propagate));
    let err = strict.bind_request(&req, &mut form).unwrap_err();
    assert!(matches!(err, Error::BodyDecode(_)));
}

#[test_log::test]
fn undecodable_body_follows_policy() {
    let req = request(Method::POST, "/", "{not json");

    let mut form = Form {
        int: 3,
        ..Form::default()
    };
    bind_request(&req, &mut form).unwrap();
    assert_eq!(form.int, 3);

    let strict = Binder::new(BindOptions::default().with_body_errors(ErrorPolicy::Propagate));
    let err = strict.bind_request(&req, &mut form).unwrap_err();
    assert!(matches!(err, Error::BodyDecode(_)));
    assert_eq!(form.int, 3);
}

#[test]
fn form_bodies_bind_for_put_and_patch() {
    for method in [Method::PUT, Method::PATCH] {
        let req = Request::builder()
            .method(method)
            .uri("/?t_int=9&t_string=query")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded; charset=utf-8")
            .body(Bytes::from_static(b"t_int=7"))
            .unwrap();

        let mut form = Form::default();
        bind_request(&req, &mut form).unwrap();
        assert_eq!(form.int, 7);
        assert_eq!(form.text, "query");
    }
}

#[test]
fn configured_body_methods_decode_json() {
    let binder = Binder::new(BindOptions::default().with_body_methods([Method::PUT]));
    let mut form = Form::default();

    binder
        .bind_request(&request(Method::PUT, "/", r#"{"t_int16": 12}"#), &mut form)
        .unwrap();
    assert_eq!(form.int16, 12);

    binder
        .bind_request(&request(Method::POST, "/?t_int32=8", "{}"), &mut form)
        .unwrap();
    assert_eq!(form.int32, 8);
    assert_eq!(form.int16, 12);
}
