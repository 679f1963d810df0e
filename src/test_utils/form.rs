//! Assertions about the forms rendered for transactions and categories.

use scraper::{ElementRef, Html, Selector};

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|error| panic!("bad selector {css:?}: {error}"))
}

/// The first form in `html`.
#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&selector("form"))
        .next()
        .expect("want a form in the HTML, got none")
}

/// Asserts that `form` sends its htmx request to `endpoint` via `attribute`, e.g. `hx-post`.
#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let got = form.value().attr(attribute);

    assert_eq!(
        got,
        Some(endpoint),
        "want form with {attribute}=\"{endpoint}\", got {got:?}"
    );
}

/// The required input named `name`, checked to have `type_`.
#[track_caller]
fn required_input<'a>(form: &ElementRef<'a>, name: &str, type_: &str) -> ElementRef<'a> {
    let input = form
        .select(&selector("input"))
        .find(|input| input.value().attr("name") == Some(name))
        .unwrap_or_else(|| panic!("want an input named {name:?}, got none"));

    let got_type = input.value().attr("type").unwrap_or_default();
    assert_eq!(got_type, type_, "input {name:?} has the wrong type");
    assert!(
        input.value().attr("required").is_some(),
        "want input {name:?} to be required"
    );

    input
}

#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    required_input(form, name, type_);
}

#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    let input = required_input(form, name, type_);

    let got_value = input.value().attr("value").unwrap_or_default();
    assert_eq!(got_value, value, "input {name:?} has the wrong value");
}

#[track_caller]
fn submit_button<'a>(form: &ElementRef<'a>) -> ElementRef<'a> {
    let button = form
        .select(&selector("button"))
        .next()
        .expect("want a button in the form, got none");

    assert_eq!(
        button.value().attr("type"),
        Some("submit"),
        "want the first button to submit the form"
    );

    button
}

#[track_caller]
pub(crate) fn assert_form_submit_button(form: &ElementRef<'_>) {
    submit_button(form);
}

#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let label = submit_button(form).text().collect::<String>();

    assert_eq!(label.trim(), text);
}

/// Asserts that the first paragraph in `form` is the validation message.
#[track_caller]
pub(crate) fn assert_form_error_message(form: &ElementRef<'_>, want_error_message: &str) {
    let message = form
        .select(&selector("p"))
        .next()
        .expect("want an error message in the form, got none")
        .text()
        .collect::<String>();

    assert_eq!(message.trim(), want_error_message);
}
