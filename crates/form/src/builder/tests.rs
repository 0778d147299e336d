/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use super::*;
use crate::control::{ButtonMode, Choices, ValueControl};
use crate::input::MapInput;
use crate::messages::Locale;
use serde_json::json;
use std::collections::HashMap;

fn builder() -> FormBuilder {
    FormBuilder::new(FormConfig::new("http://h/", "http://cdn/"))
}

#[test]
fn test_action_is_resolved_against_base_url() {
    let mut form = builder();
    form.action("/save");
    assert_eq!(form.action_url(), "http://h/save");

    form.action("https://other/x");
    assert_eq!(form.action_url(), "https://other/x");
}

#[test]
fn test_empty_required_field_fails_with_required_message() {
    let mut form = builder();
    form.add(Text::new("name").label("Name").not_empty());

    let input = MapInput::new().field("n_name", "");
    assert!(!form.handle(&input));
    assert!(!form.is_success());

    let control = form.get("name").unwrap();
    assert_eq!(control.field().unwrap().error_type(), "not_empty");
    assert_eq!(control.error_message(), "Required");

    let html = form.build().unwrap();
    assert!(html.contains("has-error"));
    assert!(html.contains("<div class=\"help-block\">Required</div>"));
}

#[test]
fn test_dotted_key_binds_into_nested_data() {
    let mut form = builder();
    form.set_data(json!({"user": {"age": 30}}));
    form.add(Text::new("user.name"));

    let input = MapInput::new().field("n_user_-_name", "Ann");
    assert!(form.handle(&input));

    assert_eq!(
        form.data().to_value(),
        json!({"user": {"age": 30, "name": "Ann"}})
    );
    assert_eq!(form.data_get("user"), Some(&json!({"age": 30, "name": "Ann"})));
}

#[test]
fn test_invalid_values_are_still_bound() {
    let mut form = builder();
    form.add(Text::new("age").integer_value());

    let input = MapInput::new().field("n_age", "abc");
    assert!(!form.handle(&input));
    assert_eq!(form.data().lookup("age"), Some(&json!("abc")));

    let html = form.build().unwrap();
    assert!(html.contains("value=\"abc\""));
    assert!(html.contains("Must be an integer"));
}

#[test]
fn test_missing_field_binds_empty_string() {
    let mut form = builder();
    form.add(Text::new("nickname"));
    assert!(form.handle(&MapInput::new()));
    assert_eq!(form.data().lookup("nickname"), Some(&json!("")));
}

#[test]
fn test_checkbox_binds_joined_values() {
    let mut form = builder();
    form.add(Checkbox::new("tags").option("a", "A").option("b", "B").option("c", "C"));

    let input = MapInput::new().field("n_tags", "a").field("n_tags", "c");
    assert!(form.handle(&input));
    assert_eq!(form.data().lookup("tags"), Some(&json!("a,c")));

    let html = form.build().unwrap();
    assert_eq!(html.matches("checked=\"checked\"").count(), 2);
}

#[test]
fn test_callback_errors_fail_the_submission() {
    let mut form = builder();
    form.add(Text::new("email").label("Email"));

    let input = MapInput::new().field("n_email", "taken@example.com");
    let ok = form.handle_with(&input, |has_error, data| {
        assert!(!has_error);
        assert_eq!(data.lookup_text("email").as_deref(), Some("taken@example.com"));
        vec![("email", "Already registered")]
    });
    assert!(!ok);
    assert!(!form.is_success());
    assert_eq!(form.get("email").unwrap().error_message(), "Already registered");
    assert_eq!(
        form.errors(),
        vec![("email".to_string(), "Already registered".to_string())]
    );
}

#[test]
fn test_callback_without_errors_keeps_success() {
    let mut form = builder();
    form.add(Text::new("title"));

    let input = MapInput::new().field("n_title", "Hello");
    let ok = form.handle_with(&input, |_, _| HashMap::<String, String>::new());
    assert!(ok);
    assert!(form.errors().is_empty());
}

#[test]
fn test_callback_error_for_unknown_key_still_fails() {
    let mut form = builder();
    form.add(Text::new("title"));

    let ok = form.handle_with(&MapInput::new(), |_, _| vec![("nope", "bad")]);
    assert!(!ok);
    assert!(!form.get("title").unwrap().has_error());
}

#[test]
fn test_add_error_reports_match() {
    let mut form = builder();
    form.add(Text::new("a"));
    assert!(form.add_error("a", "wrong"));
    assert!(!form.add_error("b", "wrong"));
    assert_eq!(form.get("a").unwrap().error_message(), "wrong");
}

#[test]
fn test_callback_error_annotates_every_control_with_the_key() {
    let mut form = builder();
    form.add(Text::new("a")).add(Hidden::new("a")).add(Text::new("b"));

    let ok = form.handle_with(&MapInput::new(), |_, _| vec![("a", "taken")]);
    assert!(!ok);

    let annotated: Vec<_> = form
        .controls()
        .iter()
        .filter(|c| c.key() == Some("a"))
        .map(Control::error_message)
        .collect();
    assert_eq!(annotated, vec!["taken".to_string(), "taken".to_string()]);
    assert!(!form.get("b").unwrap().has_error());
    assert_eq!(form.errors().len(), 2);
}

#[test]
fn test_handle_resets_previous_outcome() {
    let mut form = builder();
    form.add(Text::new("name").not_empty());

    assert!(!form.handle(&MapInput::new()));
    assert!(form.handle(&MapInput::new().field("n_name", "Bo")));
    assert!(form.is_success());
    assert!(!form.get("name").unwrap().has_error());
}

#[test]
fn test_build_layout_order() {
    let mut form = builder();
    form.action("/save")
        .add(Button::new("Save").primary())
        .add(Text::new("title").label("Title"))
        .add(Hidden::new("id").value("7"))
        .add(Html::new("<hr/>"));

    let html = form.build().unwrap();
    assert!(html.starts_with("<form action=\"http://h/save\" method=\"post\"> \n"));
    assert!(html.ends_with("</div> \n</form> \n"));

    let hidden = html.find("name=\"n_id\"").unwrap();
    let referer = html.find("name=\"referer\"").unwrap();
    let well = html.find("<div class=\"well\">").unwrap();
    let title = html.find("name=\"n_title\"").unwrap();
    let rule = html.find("<hr/>").unwrap();
    let button = html.find("btn-primary").unwrap();
    assert!(hidden < referer);
    assert!(referer < well);
    assert!(well < title);
    assert!(title < rule);
    assert!(rule < button);
}

#[test]
fn test_build_uses_referer_from_submission() {
    let mut form = builder();
    form.add(Text::new("title"));

    let input = MapInput::new()
        .field("n_title", "x")
        .with_referer("http://h/list?page=2");
    form.handle(&input);

    let html = form.build().unwrap();
    assert!(html.contains(
        "<input type=\"hidden\" name=\"referer\" value=\"http://h/list?page=2\" /> \n"
    ));
}

#[test]
fn test_explicit_referer_field_suppresses_synthesized_one() {
    let mut form = builder();
    form.referer("http://h/back").add(Hidden::new("referer").value("mine"));

    let html = form.build().unwrap();
    assert_eq!(html.matches("referer").count(), 1);
    assert!(html.contains("name=\"n_referer\" value=\"mine\""));
}

#[test]
fn test_build_takes_values_from_data() {
    let mut form = builder();
    form.set_data(json!({"profile": {"city": "Oslo", "zip": 150}}))
        .set_data_value("title", json!("From data"))
        .add(Text::new("title").value("Preset"))
        .add(Text::new("profile.city"))
        .add(Text::new("profile.zip"))
        .add(Text::new("untouched").value("Keep me"));

    let html = form.build().unwrap();
    assert!(html.contains("value=\"From data\""));
    assert!(html.contains("value=\"Oslo\""));
    assert!(html.contains("value=\"150\""));
    assert!(html.contains("value=\"Keep me\""));
    assert!(!html.contains("Preset"));
}

#[test]
fn test_build_reads_literal_dotted_key() {
    let mut form = builder();
    form.set_data(json!({"a.b": "flat"}))
        .add(Text::new("a.b"));
    let html = form.build().unwrap();
    assert!(html.contains("value=\"flat\""));
}

#[test]
fn test_set_data_non_object_empties_bag() {
    let mut form = builder();
    form.set_data_value("x", json!(1));
    form.set_data(json!([1, 2]));
    assert!(form.data().is_empty());
}

#[test]
fn test_submitted_value_round_trips_escaped() {
    let mut form = builder();
    form.add(Text::new("q"));
    form.handle(&MapInput::new().field("n_q", "a \"b\" <c>"));

    let html = form.build().unwrap();
    assert!(html.contains("value=\"a &quot;b&quot; &lt;c&gt;\""));
}

#[test]
fn test_get_finds_first_control_by_key() {
    let mut form = builder();
    form.add(Text::new("a").label("first"))
        .add(Text::new("a").label("second"))
        .add(Html::new("x"));

    assert_eq!(form.get("a").unwrap().field().unwrap().label, "first");
    assert!(form.get("missing").is_none());

    if let Some(Control::Text(text)) = form.get_mut("a") {
        text.field_mut().label = "changed".to_string();
    }
    assert_eq!(form.get("a").unwrap().field().unwrap().label, "changed");
    assert_eq!(form.controls().len(), 3);
}

#[test]
fn test_button_link_resolves_against_base_url() {
    let mut form = builder();
    form.add(Button::new("Back").link("/list"));

    let html = form.build().unwrap();
    assert!(html.contains("href=\"http://h/list\""));
    match &form.controls()[0] {
        Control::Button(button) => assert!(matches!(button.mode, ButtonMode::Link(_))),
        other => panic!("unexpected control {other:?}"),
    }
}

#[test]
fn test_errors_follow_configured_locale() {
    let mut form = FormBuilder::new(FormConfig::default().with_locale(Locale::ZhCn));
    form.add(Text::new("name").not_empty());
    form.handle(&MapInput::new());

    let errors = form.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].1, Locale::ZhCn.field_error(&crate::error::FieldError::RequiredMissing, 0, 0));
}

#[test]
fn test_factories_produce_matching_controls() {
    let mut form = builder();
    form.add(FormBuilder::new_text("t"))
        .add(FormBuilder::new_textarea("ta"))
        .add(FormBuilder::new_date("d"))
        .add(FormBuilder::new_select("s"))
        .add(FormBuilder::new_radio("r"))
        .add(FormBuilder::new_checkbox("c"))
        .add(FormBuilder::new_hidden("h"))
        .add(FormBuilder::new_image("img"))
        .add(FormBuilder::new_button("Go"))
        .add(FormBuilder::new_html("<p>hi</p>"))
        .add(FormBuilder::new_script("init();"));

    assert!(matches!(form.get("t"), Some(Control::Text(_))));
    assert!(matches!(form.get("ta"), Some(Control::Textarea(_))));
    assert!(matches!(form.get("d"), Some(Control::Date(_))));
    assert!(matches!(form.get("s"), Some(Control::Select(_))));
    assert!(matches!(form.get("r"), Some(Control::Radio(_))));
    assert!(matches!(form.get("c"), Some(Control::Checkbox(_))));
    assert!(matches!(form.get("h"), Some(Control::Hidden(_))));
    assert!(matches!(form.get("img"), Some(Control::Upload(_))));

    let html = form.build().unwrap();
    assert!(html.contains("<p>hi</p>"));
    assert!(html.contains("init();"));
}

#[test]
fn test_set_urls_after_construction() {
    let mut form = FormBuilder::default();
    form.set_base_url("http://a/").set_cdn_url("http://c");
    form.action("save");
    assert_eq!(form.action_url(), "http://a/save");
    assert_eq!(form.config().cdn_url, "http://c/");
}

#[test]
fn test_error_message_follows_configured_locale() {
    let mut form = FormBuilder::new(FormConfig::default().with_locale(Locale::ZhCn));
    form.add(Text::new("name").not_empty());
    assert!(!form.handle(&MapInput::new().field("n_name", "")));

    let expected = Locale::ZhCn.field_error(&crate::error::FieldError::RequiredMissing, 0, 0);
    assert_eq!(form.error_message("name"), Some(expected.clone()));
    assert_eq!(form.error_message("missing"), None);

    let html = form.build().unwrap();
    assert!(html.contains(&expected));
}

#[test]
fn test_build_survives_oversized_upload() {
    let mut form = builder();
    form.add(Upload::images("pics").width(u32::MAX))
        .add(Upload::files("docs").width(u32::MAX));

    let html = form.build().unwrap();
    assert!(html.contains(&format!("width:{}px", u32::MAX)));
}
