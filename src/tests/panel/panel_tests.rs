use super::*;
use crate::model::TemplateDraft;
use crate::notify::NoticeKind;
use crate::testing::{Call, FakeApi, Failure, session_with_key, template};

fn panel_with_key() -> Panel {
    Panel::new(session_with_key(Some("k1")))
}

fn last_message(panel: &Panel) -> (NoticeKind, String) {
    let n = panel.notices().latest().expect("a notice");
    (n.kind, n.message.clone())
}

#[test]
fn startup_without_key_does_not_touch_network() {
    let api = FakeApi::default();
    let mut panel = Panel::new(session_with_key(None));
    panel.startup(&api);
    assert!(api.calls().is_empty());
    assert_eq!(panel.listing(), &Listing::NotLoaded);
    assert!(panel.notices().is_empty());
}

#[test]
fn startup_with_stored_key_loads_templates() {
    let api = FakeApi::with_templates(vec![template(1, "Invoice", "<p>Hi</p>")]);
    let mut panel = panel_with_key();
    panel.startup(&api);
    assert_eq!(api.calls(), vec![Call::List]);
    assert_eq!(api.keys.borrow().as_slice(), ["k1".to_string()]);
    assert_eq!(panel.listing().templates().len(), 1);
}

#[test]
fn empty_api_key_is_rejected_locally() {
    let api = FakeApi::default();
    let mut panel = Panel::new(session_with_key(None));
    panel.set_api_key(&api, "   ");
    assert!(api.calls().is_empty());
    assert!(!panel.session().has_api_key());
    assert_eq!(
        last_message(&panel),
        (NoticeKind::Error, "Please enter an API key".to_string())
    );
}

#[test]
fn setting_api_key_persists_and_reloads() {
    let api = FakeApi::with_templates(vec![template(3, "Letter", "x")]);
    let mut panel = Panel::new(session_with_key(None));
    panel.set_api_key(&api, "secret");
    assert_eq!(panel.session().api_key(), Some("secret"));
    assert_eq!(api.calls(), vec![Call::List]);
    assert_eq!(api.keys.borrow()[0], "secret");
    assert_eq!(
        last_message(&panel),
        (
            NoticeKind::Success,
            "API key has been set successfully".to_string()
        )
    );
}

#[test]
fn empty_collection_shows_placeholder() {
    let api = FakeApi::default();
    let mut panel = panel_with_key();
    panel.load_templates(&api);
    assert_eq!(panel.listing(), &Listing::Empty);
    assert_eq!(panel.listing().placeholder(), Some(EMPTY_LIST_MESSAGE));
}

#[test]
fn failed_load_uses_server_message_and_failure_placeholder() {
    let api = FakeApi::with_templates(vec![template(1, "a", "b")]);
    let mut panel = panel_with_key();
    panel.load_templates(&api);
    assert!(matches!(panel.listing(), Listing::Loaded(_)));

    api.fail_with(Failure::Status(401, Some("Invalid API key".to_string())));
    panel.load_templates(&api);
    assert_eq!(panel.listing(), &Listing::Failed);
    assert_eq!(panel.listing().placeholder(), Some(FAILED_LIST_MESSAGE));
    assert_eq!(
        last_message(&panel),
        (NoticeKind::Error, "Invalid API key".to_string())
    );
}

#[test]
fn failed_load_without_body_uses_generic_message() {
    let api = FakeApi::default();
    api.fail_with(Failure::Status(500, None));
    let mut panel = panel_with_key();
    panel.load_templates(&api);
    assert_eq!(
        last_message(&panel),
        (NoticeKind::Error, FAILED_LIST_MESSAGE.to_string())
    );
}

#[test]
fn listing_twice_without_mutation_yields_same_set() {
    let api = FakeApi::with_templates(vec![template(1, "a", "x"), template(2, "b", "y")]);
    let mut panel = panel_with_key();
    panel.load_templates(&api);
    let first = panel.listing().clone();
    panel.load_templates(&api);
    assert_eq!(panel.listing(), &first);
}

#[test]
fn view_toggles_and_keeps_at_most_one_expanded() {
    let api = FakeApi::with_templates(vec![template(1, "a", "<b>x</b>"), template(2, "b", "y")]);
    let mut panel = panel_with_key();
    panel.load_templates(&api);

    panel.view_template(&api, TemplateId(1));
    assert!(panel.is_expanded(TemplateId(1)));
    assert_eq!(panel.expanded().map(|t| t.html_content.as_str()), Some("<b>x</b>"));

    panel.view_template(&api, TemplateId(2));
    assert!(panel.is_expanded(TemplateId(2)));
    assert!(!panel.is_expanded(TemplateId(1)));

    let before = api.calls().len();
    panel.view_template(&api, TemplateId(2));
    assert!(panel.expanded().is_none());
    assert_eq!(api.calls().len(), before, "collapsing must not fetch");
}

#[test]
fn view_failure_reports_server_message() {
    let api = FakeApi::default();
    let mut panel = panel_with_key();
    panel.view_template(&api, TemplateId(9));
    assert!(panel.expanded().is_none());
    assert_eq!(
        last_message(&panel),
        (
            NoticeKind::Error,
            "Failed to load template details: Template not found".to_string()
        )
    );
}

#[test]
fn create_requires_name_and_html() {
    let api = FakeApi::default();
    let mut panel = panel_with_key();
    panel.form_mut().name = "Invoice".to_string();
    panel.create_template(&api);
    assert!(api.calls().is_empty());
    assert_eq!(
        last_message(&panel),
        (
            NoticeKind::Error,
            "Name and HTML content are required".to_string()
        )
    );
}

#[test]
fn whitespace_only_name_is_sent_to_the_server() {
    let api = FakeApi::default();
    let mut panel = panel_with_key();
    panel.form_mut().name = " ".to_string();
    panel.form_mut().html_content = "<p>Hi</p>".to_string();

    assert!(panel.create_template(&api));

    assert_eq!(
        api.calls()[0],
        Call::Create(TemplateDraft {
            name: " ".to_string(),
            description: String::new(),
            html_content: "<p>Hi</p>".to_string(),
        })
    );
}

#[test]
fn create_sends_empty_description_and_reloads_once() {
    let api = FakeApi::default();
    let mut panel = panel_with_key();
    panel.form_mut().name = "Invoice".to_string();
    panel.form_mut().html_content = "<p>Hi</p>".to_string();

    panel.submit(&api);

    assert_eq!(
        api.calls(),
        vec![
            Call::Create(TemplateDraft {
                name: "Invoice".to_string(),
                description: String::new(),
                html_content: "<p>Hi</p>".to_string(),
            }),
            Call::List,
        ]
    );
    assert_eq!(api.list_calls(), 1);
    assert_eq!(panel.form(), &TemplateForm::default());
    assert_eq!(panel.listing().templates().len(), 1);
    assert!(
        panel
            .notices()
            .iter()
            .any(|n| n.message == "Template created successfully")
    );
}

#[test]
fn create_failure_keeps_form() {
    let api = FakeApi::default();
    api.fail_with(Failure::Status(400, Some("name taken".to_string())));
    let mut panel = panel_with_key();
    panel.form_mut().name = "Invoice".to_string();
    panel.form_mut().html_content = "<p>Hi</p>".to_string();
    panel.create_template(&api);
    assert_eq!(panel.form().name, "Invoice");
    assert_eq!(api.list_calls(), 0);
    assert_eq!(
        last_message(&panel),
        (
            NoticeKind::Error,
            "Failed to create template: name taken".to_string()
        )
    );
}

#[test]
fn create_decode_error_is_reported_as_error() {
    let api = FakeApi::default();
    api.fail_with(Failure::Decode);
    let mut panel = panel_with_key();
    panel.form_mut().name = "n".to_string();
    panel.form_mut().html_content = "h".to_string();
    panel.create_template(&api);
    let (kind, msg) = last_message(&panel);
    assert_eq!(kind, NoticeKind::Error);
    assert!(msg.starts_with("Error creating template: "), "{}", msg);
}

#[test]
fn edit_then_update_returns_to_create() {
    let mut t = template(7, "Old", "<p>old</p>");
    t.description = None;
    let api = FakeApi::with_templates(vec![t]);
    let mut panel = panel_with_key();
    panel.load_templates(&api);

    panel.edit_template(&api, TemplateId(7));
    assert_eq!(panel.mode(), FormMode::Update(TemplateId(7)));
    assert_eq!(panel.focus(), Focus::Form);
    assert_eq!(panel.form().name, "Old");
    assert_eq!(panel.form().description, "");
    assert_eq!(panel.form().html_content, "<p>old</p>");

    panel.form_mut().name = "New".to_string();
    let lists_before = api.list_calls();
    panel.submit(&api);

    assert_eq!(panel.mode(), FormMode::Create);
    assert_eq!(panel.form(), &TemplateForm::default());
    assert_eq!(api.list_calls(), lists_before + 1);
    assert_eq!(panel.listing().templates()[0].name, "New");
    assert!(api.calls().contains(&Call::Update(
        TemplateId(7),
        TemplateDraft {
            name: "New".to_string(),
            description: String::new(),
            html_content: "<p>old</p>".to_string(),
        }
    )));
}

#[test]
fn edit_failure_leaves_mode_unchanged() {
    let api = FakeApi::default();
    let mut panel = panel_with_key();
    panel.edit_template(&api, TemplateId(5));
    assert_eq!(panel.mode(), FormMode::Create);
    assert_eq!(panel.focus(), Focus::Templates);
    assert_eq!(
        last_message(&panel),
        (
            NoticeKind::Error,
            "Error loading template for editing: Template not found".to_string()
        )
    );
}

#[test]
fn update_failure_keeps_form_and_mode_for_retry() {
    let api = FakeApi::with_templates(vec![template(7, "Old", "x")]);
    let mut panel = panel_with_key();
    panel.edit_template(&api, TemplateId(7));
    panel.form_mut().name = "New".to_string();

    api.fail_with(Failure::Status(500, None));
    panel.submit(&api);
    assert_eq!(panel.mode(), FormMode::Update(TemplateId(7)));
    assert_eq!(panel.form().name, "New");
    assert_eq!(
        last_message(&panel),
        (
            NoticeKind::Error,
            "Failed to update template: HTTP 500 Internal Server Error".to_string()
        )
    );

    api.recover();
    panel.submit(&api);
    assert_eq!(panel.mode(), FormMode::Create);
}

#[test]
fn cancel_edit_resets_without_request() {
    let api = FakeApi::with_templates(vec![template(7, "Old", "x")]);
    let mut panel = panel_with_key();
    panel.edit_template(&api, TemplateId(7));
    let calls = api.calls().len();
    panel.cancel_edit();
    assert_eq!(panel.mode(), FormMode::Create);
    assert_eq!(panel.form(), &TemplateForm::default());
    assert_eq!(api.calls().len(), calls);
}

#[test]
fn declined_delete_sends_nothing() {
    let api = FakeApi::with_templates(vec![template(1, "a", "x")]);
    let mut panel = panel_with_key();
    panel.load_templates(&api);
    let before = panel.listing().clone();
    let calls = api.calls().len();

    panel.delete_template(&api, TemplateId(1), Confirmation::Declined);

    assert_eq!(api.calls().len(), calls);
    assert_eq!(panel.listing(), &before);
}

#[test]
fn accepted_delete_reloads_list() {
    let api = FakeApi::with_templates(vec![template(1, "a", "x")]);
    let mut panel = panel_with_key();
    panel.load_templates(&api);

    panel.delete_template(&api, TemplateId(1), Confirmation::Accepted);

    let calls = api.calls();
    assert_eq!(calls[calls.len() - 2], Call::Delete(TemplateId(1)));
    assert_eq!(calls[calls.len() - 1], Call::List);
    assert_eq!(panel.listing(), &Listing::Empty);
}

#[test]
fn operations_without_key_fail_locally() {
    let api = FakeApi::with_templates(vec![template(1, "a", "x")]);
    let mut panel = Panel::new(session_with_key(None));
    panel.load_templates(&api);
    panel.view_template(&api, TemplateId(1));
    panel.delete_template(&api, TemplateId(1), Confirmation::Accepted);
    assert!(api.calls().is_empty());
    assert_eq!(panel.notices().len(), 3);
    assert!(
        panel
            .notices()
            .iter()
            .all(|n| n.message == "Please set an API key first")
    );
}

#[test]
fn reload_collapses_open_detail() {
    let api = FakeApi::with_templates(vec![template(1, "a", "x")]);
    let mut panel = panel_with_key();
    panel.load_templates(&api);
    panel.view_template(&api, TemplateId(1));
    assert!(panel.expanded().is_some());
    panel.load_templates(&api);
    assert!(panel.expanded().is_none());
}
