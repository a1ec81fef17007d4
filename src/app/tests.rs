// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Trackademic-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trackademic and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cell::RefCell;
use std::rc::Rc;

use rstest::rstest;

use super::{App, Effect};
use crate::api::{ApiClient, ApiError, SearchRecord, StatsSnapshot};
use crate::model::{Document, Element, Key, NodeId, PageEvent, Rect, Viewport};

#[derive(Debug, Default)]
struct ApiLog {
    stats_calls: usize,
    search_queries: Vec<String>,
}

struct FakeApi {
    log: Rc<RefCell<ApiLog>>,
    stats: Result<StatsSnapshot, ApiError>,
    results: Result<Vec<SearchRecord>, ApiError>,
}

impl FakeApi {
    fn new() -> (Self, Rc<RefCell<ApiLog>>) {
        let log = Rc::new(RefCell::new(ApiLog::default()));
        let api = Self {
            log: Rc::clone(&log),
            stats: Ok(StatsSnapshot::default()),
            results: Ok(Vec::new()),
        };
        (api, log)
    }

    fn with_stats(mut self, metrics: Vec<f64>) -> Self {
        self.stats = Ok(StatsSnapshot { metrics });
        self
    }

    fn with_stats_error(mut self) -> Self {
        self.stats = Err(ApiError::Status(503));
        self
    }

    fn with_results(mut self, results: Vec<SearchRecord>) -> Self {
        self.results = Ok(results);
        self
    }
}

impl ApiClient for FakeApi {
    fn realtime_stats(&self) -> Result<StatsSnapshot, ApiError> {
        self.log.borrow_mut().stats_calls += 1;
        self.stats.clone()
    }

    fn search(&self, query: &str) -> Result<Vec<SearchRecord>, ApiError> {
        self.log.borrow_mut().search_queries.push(query.to_owned());
        self.results.clone()
    }
}

/// Standard page fixture: sidebar with nav links and toggle, main content with
/// stat cards, a validated form, a search box, a modal pair, tooltip triggers
/// and reveal targets.
fn fixture_doc(width: f32) -> Document {
    let mut doc = Document::new(Viewport::new(width, 720.0));
    let body = doc.body();

    let sidebar = doc.append(
        body,
        Element::new("aside").with_class("sidebar").with_rect(Rect::new(0.0, 0.0, 240.0, 720.0)),
    );
    doc.append(
        sidebar,
        Element::new("a")
            .with_class("nav-link")
            .with_attr("href", "/")
            .with_attr("data-tooltip", "Inicio")
            .with_rect(Rect::new(16.0, 40.0, 180.0, 32.0)),
    );
    doc.append(
        sidebar,
        Element::new("a").with_class("nav-link").with_attr("href", "/cursos"),
    );
    doc.append(
        sidebar,
        Element::new("a").with_class("nav-link").with_attr("href", "/informes/"),
    );

    doc.append(body, Element::new("button").with_class("sidebar-toggle"));

    let main = doc.append(body, Element::new("main").with_class("main-content"));
    for initial in ["10.00", "250.00", "0.00"] {
        doc.append(main, Element::new("span").with_class("stats-value").with_text(initial));
    }

    let form = doc.append(main, Element::new("form").with_attr("data-validate", ""));
    let name_group = doc.append(form, Element::new("div"));
    doc.append(
        name_group,
        Element::new("input").with_id("nombre").with_attr("required", ""),
    );
    let email_group = doc.append(form, Element::new("div"));
    doc.append(
        email_group,
        Element::new("input").with_id("correo").with_attr("type", "email"),
    );
    let bio_group = doc.append(form, Element::new("div"));
    doc.append(
        bio_group,
        Element::new("textarea").with_id("bio").with_attr("data-min-length", "5"),
    );

    doc.append(main, Element::new("input").with_class("search-input"));

    doc.append(
        main,
        Element::new("a").with_id("ir-resumen").with_attr("href", "#resumen"),
    );
    doc.append(
        main,
        Element::new("section")
            .with_id("resumen")
            .with_class("animate-on-scroll")
            .with_rect(Rect::new(0.0, 2000.0, 800.0, 400.0)),
    );

    doc.append(
        body,
        Element::new("button").with_attr("data-modal-target", "confirmar-baja"),
    );
    let modal = doc.append(body, Element::new("div").with_id("confirmar-baja").with_class("modal"));
    doc.append(modal, Element::new("button").with_class("modal-close"));

    doc
}

fn app_at(width: f32, path: &str) -> App {
    let (api, _) = FakeApi::new();
    App::new(fixture_doc(width), path.to_owned(), Box::new(api), 0)
}

fn app_with_api(width: f32, path: &str, api: FakeApi) -> App {
    App::new(fixture_doc(width), path.to_owned(), Box::new(api), 0)
}

fn sidebar(app: &App) -> NodeId {
    app.doc().first_by_class("sidebar").expect("sidebar")
}

fn main_content(app: &App) -> NodeId {
    app.doc().first_by_class("main-content").expect("main content")
}

fn toggle(app: &App) -> NodeId {
    app.doc().first_by_class("sidebar-toggle").expect("toggle")
}

fn click(app: &mut App, target: NodeId) {
    app.handle_event(PageEvent::Click { target });
}

fn classes_of(app: &App, node: NodeId) -> Vec<String> {
    app.doc()
        .element(node)
        .map(|el| el.classes().map(str::to_owned).collect())
        .unwrap_or_default()
}

// ---- sidebar ---------------------------------------------------------------

#[test]
fn mobile_toggle_flips_mobile_open_only() {
    let mut app = app_at(500.0, "/");
    let before_main = classes_of(&app, main_content(&app));

    let t = toggle(&app);
    click(&mut app, t);
    assert!(app.doc().has_class(sidebar(&app), "mobile-open"));
    assert_eq!(classes_of(&app, main_content(&app)), before_main);

    let t = toggle(&app);
    click(&mut app, t);
    assert!(!app.doc().has_class(sidebar(&app), "mobile-open"));
}

#[test]
fn tablet_toggle_pairs_expanded_with_compressed() {
    let mut app = app_at(900.0, "/");
    let t = toggle(&app);
    click(&mut app, t);

    assert!(app.doc().has_class(sidebar(&app), "expanded"));
    assert!(app.doc().has_class(main_content(&app), "compressed"));
    assert!(!app.doc().has_class(sidebar(&app), "mobile-open"));
    assert!(!app.doc().has_class(sidebar(&app), "collapsed"));
}

#[test]
fn desktop_toggle_pairs_collapsed_with_expanded() {
    let mut app = app_at(1300.0, "/");
    let t = toggle(&app);
    click(&mut app, t);

    assert!(app.doc().has_class(sidebar(&app), "collapsed"));
    assert!(app.doc().has_class(main_content(&app), "expanded"));
    assert!(!app.doc().has_class(sidebar(&app), "expanded"));
}

#[test]
fn outside_click_closes_mobile_sidebar_only_at_mobile_width() {
    let mut app = app_at(500.0, "/");
    let t = toggle(&app);
    click(&mut app, t);
    assert!(app.doc().has_class(sidebar(&app), "mobile-open"));

    let outside = main_content(&app);
    click(&mut app, outside);
    assert!(!app.doc().has_class(sidebar(&app), "mobile-open"));

    // At tablet width the same outside click leaves tablet state alone.
    let mut app = app_at(900.0, "/");
    let t = toggle(&app);
    click(&mut app, t);
    let outside = main_content(&app);
    click(&mut app, outside);
    assert!(app.doc().has_class(sidebar(&app), "expanded"));
}

#[test]
fn clicks_inside_the_sidebar_do_not_close_it() {
    let mut app = app_at(500.0, "/");
    let t = toggle(&app);
    click(&mut app, t);

    let link = app.doc().all_by_class("nav-link")[1];
    click(&mut app, link);
    assert!(app.doc().has_class(sidebar(&app), "mobile-open"));
}

#[test]
fn resize_above_breakpoints_clears_stale_state() {
    let mut app = app_at(500.0, "/");
    let t = toggle(&app);
    click(&mut app, t);
    assert!(app.doc().has_class(sidebar(&app), "mobile-open"));

    app.handle_event(PageEvent::Resize { width: 900.0, height: 720.0 });
    assert!(!app.doc().has_class(sidebar(&app), "mobile-open"));

    let t = toggle(&app);
    click(&mut app, t);
    assert!(app.doc().has_class(sidebar(&app), "expanded"));

    app.handle_event(PageEvent::Resize { width: 1300.0, height: 720.0 });
    assert!(!app.doc().has_class(sidebar(&app), "expanded"));
    assert!(!app.doc().has_class(main_content(&app), "compressed"));
}

#[test]
fn missing_sidebar_markup_degrades_to_a_no_op() {
    let (api, _) = FakeApi::new();
    let doc = Document::new(Viewport::new(500.0, 720.0));
    let mut app = App::new(doc, "/".to_owned(), Box::new(api), 0);

    let body = app.doc().body();
    click(&mut app, body);
    app.toggle_sidebar();
}

// ---- navigation ------------------------------------------------------------

#[rstest]
#[case("/cursos/123", "/cursos", true)]
#[case("/cursos/123", "/", false)]
#[case("/", "/", true)]
#[case("/informes/mensual", "/informes/", true)]
#[case("/perfil", "/cursos", false)]
fn active_navigation_marks_contained_hrefs(
    #[case] path: &str,
    #[case] href: &str,
    #[case] active: bool,
) {
    let app = app_at(1300.0, path);
    let link = app
        .doc()
        .select(|el| el.has_class("nav-link") && el.attr("href") == Some(href))
        .into_iter()
        .next()
        .expect("nav link");
    assert_eq!(app.doc().has_class(link, "active"), active);
}

#[test]
fn anchor_click_scrolls_to_the_fragment_target() {
    let mut app = app_at(1300.0, "/");
    let anchor = app.doc().by_id("ir-resumen").expect("anchor");
    let dest = app.doc().by_id("resumen").expect("target");

    click(&mut app, anchor);

    assert_eq!(app.doc().scroll_y(), 2000.0);
    assert_eq!(app.take_effects(), vec![Effect::ScrollTo { target: dest }]);
    // Scrolling there revealed the section.
    assert!(app.doc().has_class(dest, "animate-in"));
}

#[test]
fn empty_fragment_anchor_is_consumed_without_scrolling() {
    let mut app = app_at(1300.0, "/");
    let body = app.doc().body();
    let anchor = app.doc_mut().append(body, Element::new("a").with_attr("href", "#"));

    click(&mut app, anchor);
    assert_eq!(app.doc().scroll_y(), 0.0);
    assert!(app.take_effects().is_empty());
}

// ---- reveal ----------------------------------------------------------------

#[test]
fn reveal_is_one_shot_at_ten_percent_visibility() {
    let mut app = app_at(1300.0, "/");
    let section = app.doc().by_id("resumen").expect("section");
    assert!(!app.doc().has_class(section, "animate-in"));

    // 40 px of the 400 px section visible: exactly the 10 % threshold.
    app.handle_event(PageEvent::Scroll { y: 1320.0 });
    assert!(app.doc().has_class(section, "animate-in"));

    // Scrolling away never takes the class back.
    app.handle_event(PageEvent::Scroll { y: 0.0 });
    assert!(app.doc().has_class(section, "animate-in"));
}

// ---- modal -----------------------------------------------------------------

#[test]
fn modal_trigger_opens_and_close_control_closes_all() {
    let mut app = app_at(1300.0, "/");
    let trigger = app
        .doc()
        .first(|el| el.has_attr("data-modal-target"))
        .expect("trigger");
    let modal = app.doc().by_id("confirmar-baja").expect("modal");

    click(&mut app, trigger);
    assert!(app.doc().has_class(modal, "show"));
    assert!(app.doc().has_class(app.doc().body(), "modal-open"));

    let close = app.doc().first_by_class("modal-close").expect("close");
    click(&mut app, close);
    assert!(!app.doc().has_class(modal, "show"));
    assert!(!app.doc().has_class(app.doc().body(), "modal-open"));
}

#[test]
fn escape_closes_every_open_modal() {
    let mut app = app_at(1300.0, "/");
    app.open_modal("confirmar-baja");
    assert!(app.doc().has_class(app.doc().body(), "modal-open"));

    app.handle_event(PageEvent::KeyDown { key: Key::Escape });
    let modal = app.doc().by_id("confirmar-baja").expect("modal");
    assert!(!app.doc().has_class(modal, "show"));
    assert!(!app.doc().has_class(app.doc().body(), "modal-open"));
}

#[test]
fn unknown_modal_target_is_ignored() {
    let mut app = app_at(1300.0, "/");
    app.open_modal("no-existe");
    assert!(!app.doc().has_class(app.doc().body(), "modal-open"));
}

// ---- forms -----------------------------------------------------------------

fn field_error_text(app: &App, field: NodeId) -> Option<String> {
    let parent = app.doc().parent(field)?;
    let error = app
        .doc()
        .select(|el| el.has_class("field-error"))
        .into_iter()
        .find(|node| app.doc().contains(parent, *node))?;
    app.doc().text(error).map(str::to_owned)
}

#[rstest]
#[case("nombre", "", Some("Este campo es requerido"))]
#[case("nombre", "   ", Some("Este campo es requerido"))]
#[case("nombre", "Ada", None)]
#[case("correo", "bad", Some("Ingrese un email v\u{e1}lido"))]
#[case("correo", "ada@uni.edu", None)]
#[case("correo", "", None)]
#[case("bio", "abcd", Some("M\u{ed}nimo 5 caracteres"))]
#[case("bio", "abcde", None)]
#[case("bio", "", None)]
fn field_rules_fire_in_order_with_one_message(
    #[case] field_id: &str,
    #[case] value: &str,
    #[case] expected: Option<&str>,
) {
    let mut app = app_at(1300.0, "/");
    let field = app.doc().by_id(field_id).expect("field");
    app.handle_event(PageEvent::Input { field, value: value.to_owned() });
    app.handle_event(PageEvent::Blur { field });

    assert_eq!(field_error_text(&app, field).as_deref(), expected);
    assert_eq!(app.doc().has_class(field, "error"), expected.is_some());
}

#[test]
fn unparseable_min_length_never_fails() {
    let mut app = app_at(1300.0, "/");
    let field = app.doc().by_id("bio").expect("field");
    app.doc_mut().element_mut(field).expect("element").set_attr("data-min-length", "muchos");

    app.handle_event(PageEvent::Input { field, value: "ab".to_owned() });
    app.handle_event(PageEvent::Blur { field });
    assert_eq!(field_error_text(&app, field), None);
}

#[test]
fn revalidation_replaces_the_previous_error() {
    let mut app = app_at(1300.0, "/");
    let field = app.doc().by_id("correo").expect("field");

    app.handle_event(PageEvent::Input { field, value: "bad".to_owned() });
    app.handle_event(PageEvent::Blur { field });
    assert!(field_error_text(&app, field).is_some());

    app.handle_event(PageEvent::Input { field, value: "ada@uni.edu".to_owned() });
    app.handle_event(PageEvent::Blur { field });
    assert_eq!(field_error_text(&app, field), None);
    assert_eq!(app.doc().all_by_class("field-error").len(), 0);
}

#[test]
fn invalid_form_suppresses_the_submit_effect() {
    let mut app = app_at(1300.0, "/");
    let form = app.doc().first(|el| el.tag() == "form").expect("form");

    app.handle_event(PageEvent::Submit { form });
    assert_eq!(app.take_effects(), vec![]);
    // Every failing field got its message in the same pass.
    let name = app.doc().by_id("nombre").expect("name");
    assert!(field_error_text(&app, name).is_some());
}

#[test]
fn valid_form_submits_and_carries_no_errors() {
    let mut app = app_at(1300.0, "/");
    let form = app.doc().first(|el| el.tag() == "form").expect("form");
    for (id, value) in [("nombre", "Ada"), ("correo", "ada@uni.edu"), ("bio", "me gusta leer")] {
        let field = app.doc().by_id(id).expect("field");
        app.handle_event(PageEvent::Input { field, value: value.to_owned() });
    }

    app.handle_event(PageEvent::Submit { form });
    assert_eq!(app.take_effects(), vec![Effect::SubmitForm { form }]);
    assert!(app.doc().all_by_class("field-error").is_empty());
}

// ---- search ----------------------------------------------------------------

#[test]
fn search_debounce_sends_one_query_with_the_last_value() {
    let (api, log) = FakeApi::new();
    let mut app = app_with_api(1300.0, "/", api.with_results(vec![serde_json::json!({"id": 1})]));
    let input = app.doc().first_by_class("search-input").expect("search input");

    for (at, text) in [(0, "m"), (60, "ma"), (120, "mat"), (180, "mate"), (240, "mates")] {
        app.advance_to(at);
        app.handle_event(PageEvent::Input { field: input, value: text.to_owned() });
    }
    app.advance_to(539);
    assert!(log.borrow().search_queries.is_empty());

    app.advance_to(540);
    assert_eq!(log.borrow().search_queries, vec!["mates".to_owned()]);
    assert_eq!(
        app.take_effects(),
        vec![Effect::SearchResults { records: vec![serde_json::json!({"id": 1})] }]
    );
}

#[test]
fn short_queries_are_never_sent() {
    let (api, log) = FakeApi::new();
    let mut app = app_with_api(1300.0, "/", api);
    let input = app.doc().first_by_class("search-input").expect("search input");

    app.handle_event(PageEvent::Input { field: input, value: "  a  ".to_owned() });
    app.advance_to(1_000);

    assert!(log.borrow().search_queries.is_empty());
    assert!(app.take_effects().is_empty());
}

#[test]
fn search_failures_are_swallowed() {
    let (mut api, log) = FakeApi::new();
    api.results = Err(ApiError::Transport("connection refused".to_owned()));
    let mut app = app_with_api(1300.0, "/", api);
    let input = app.doc().first_by_class("search-input").expect("search input");

    app.handle_event(PageEvent::Input { field: input, value: "mates".to_owned() });
    app.advance_to(1_000);

    assert_eq!(log.borrow().search_queries.len(), 1);
    assert!(app.take_effects().is_empty());
}

// ---- stats -----------------------------------------------------------------

#[test]
fn stats_poll_is_armed_only_on_reports_routes() {
    let (api, log) = FakeApi::new();
    let mut app = app_with_api(1300.0, "/informes/", api.with_stats(vec![15.0]));
    app.advance_to(300_000);
    assert_eq!(log.borrow().stats_calls, 1);

    let (api, log) = FakeApi::new();
    let mut app = app_with_api(1300.0, "/cursos", api);
    app.advance_to(300_000);
    assert_eq!(log.borrow().stats_calls, 0);
    drop(app);
}

#[test]
fn stats_failures_keep_the_poll_alive() {
    let (api, log) = FakeApi::new();
    let mut app = app_with_api(1300.0, "/informes/", api.with_stats_error());

    app.advance_to(300_000);
    app.advance_to(600_000);
    assert_eq!(log.borrow().stats_calls, 2);
}

#[test]
fn animate_number_converges_exactly_and_stops() {
    let mut app = app_at(1300.0, "/");
    let card = app.doc().all_by_class("stats-value")[0];
    assert_eq!(app.doc().text(card), Some("10.00"));

    app.animate_number(card, 20.0);
    let mut now = 0;
    for _ in 0..25 {
        now += 50;
        app.advance_to(now);
    }

    assert_eq!(app.doc().text(card), Some("20.00"));
    // The interval is gone; more time changes nothing.
    app.advance_to(now + 10_000);
    assert_eq!(app.doc().text(card), Some("20.00"));
}

#[test]
fn animate_number_counts_down_too() {
    let mut app = app_at(1300.0, "/");
    let card = app.doc().all_by_class("stats-value")[1];

    app.animate_number(card, 100.0);
    let mut now = 0;
    for _ in 0..25 {
        now += 50;
        app.advance_to(now);
    }
    assert_eq!(app.doc().text(card), Some("100.00"));
}

#[test]
fn equal_target_writes_once_without_a_timer() {
    let mut app = app_at(1300.0, "/");
    let card = app.doc().all_by_class("stats-value")[0];

    app.animate_number(card, 10.0);
    assert_eq!(app.doc().text(card), Some("10.00"));
    app.advance_to(10_000);
    assert_eq!(app.doc().text(card), Some("10.00"));
}

#[test]
fn zero_metric_is_applied_not_skipped() {
    let (api, _) = FakeApi::new();
    let mut app = app_with_api(1300.0, "/informes/", api.with_stats(vec![0.0]));
    let card = app.doc().all_by_class("stats-value")[0];

    app.refresh_stats();
    let mut now = app.now_ms();
    for _ in 0..25 {
        now += 50;
        app.advance_to(now);
    }
    assert_eq!(app.doc().text(card), Some("0.00"));
}

#[test]
fn animation_stops_when_the_card_leaves_the_document() {
    let mut app = app_at(1300.0, "/");
    let card = app.doc().all_by_class("stats-value")[0];

    app.animate_number(card, 20.0);
    app.advance_to(100);
    app.doc_mut().remove(card);
    // Remaining steps are dropped silently.
    app.advance_to(5_000);
    assert!(app.doc().element(card).is_none());
}

#[test]
fn extra_metrics_beyond_the_cards_are_ignored() {
    let (api, _) = FakeApi::new();
    let mut app =
        app_with_api(1300.0, "/informes/", api.with_stats(vec![1.0, 2.0, 3.0, 4.0, 5.0]));
    app.refresh_stats();
    let mut now = app.now_ms();
    for _ in 0..25 {
        now += 50;
        app.advance_to(now);
    }
    let cards = app.doc().all_by_class("stats-value");
    assert_eq!(cards.len(), 3);
    assert_eq!(app.doc().text(cards[2]), Some("3.00"));
}

// ---- tooltip ---------------------------------------------------------------

fn tooltip_trigger(app: &App) -> NodeId {
    app.doc().first(|el| el.has_attr("data-tooltip")).expect("tooltip trigger")
}

#[test]
fn tooltip_appears_above_the_trigger_and_shows_after_a_beat() {
    let mut app = app_at(1300.0, "/");
    let trigger = tooltip_trigger(&app);

    app.handle_event(PageEvent::HoverEnter { target: trigger });
    let tip = app.doc().first_by_class("tooltip-modern").expect("tooltip");
    assert_eq!(app.doc().text(tip), Some("Inicio"));
    assert!(!app.doc().has_class(tip, "show"));

    app.advance_to(10);
    assert!(app.doc().has_class(tip, "show"));

    let trigger_rect = app.doc().element(trigger).expect("trigger").rect();
    let tip_rect = app.doc().element(tip).expect("tooltip").rect();
    assert!((tip_rect.center_x() - trigger_rect.center_x()).abs() < 0.01);
    assert_eq!(tip_rect.bottom(), trigger_rect.y - 8.0);
}

#[test]
fn tooltip_fades_out_after_hover_leave() {
    let mut app = app_at(1300.0, "/");
    let trigger = tooltip_trigger(&app);

    app.handle_event(PageEvent::HoverEnter { target: trigger });
    app.advance_to(10);
    app.handle_event(PageEvent::HoverLeave { target: trigger });

    let tip = app.doc().first_by_class("tooltip-modern").expect("tooltip");
    assert!(!app.doc().has_class(tip, "show"));
    app.advance_to(209);
    assert!(app.doc().element(tip).is_some());
    app.advance_to(210);
    assert!(app.doc().element(tip).is_none());
}

#[test]
fn reentering_during_the_fade_never_duplicates_the_tooltip() {
    let mut app = app_at(1300.0, "/");
    let trigger = tooltip_trigger(&app);

    app.handle_event(PageEvent::HoverEnter { target: trigger });
    app.advance_to(10);
    app.handle_event(PageEvent::HoverLeave { target: trigger });
    app.advance_to(100);
    app.handle_event(PageEvent::HoverEnter { target: trigger });
    app.advance_to(400);

    assert_eq!(app.doc().all_by_class("tooltip-modern").len(), 1);
    let tip = app.doc().first_by_class("tooltip-modern").expect("tooltip");
    assert!(app.doc().has_class(tip, "show"));
}

// ---- notifications ---------------------------------------------------------

#[test]
fn at_most_one_notification_node_exists() {
    let mut app = app_at(1300.0, "/");
    app.show_notification("guardado", "success", 5_000);
    app.show_notification("segundo aviso", "warning", 5_000);

    let nodes = app.doc().all_by_class("notification");
    assert_eq!(nodes.len(), 1);
    let message = app.doc().first_by_class("notification-message").expect("message");
    assert_eq!(app.doc().text(message), Some("segundo aviso"));
}

#[test]
fn unknown_severity_falls_back_to_the_info_icon_but_keeps_its_class() {
    let mut app = app_at(1300.0, "/");
    app.show_notification("hola", "celebracion", 5_000);

    let node = app.doc().first_by_class("notification").expect("notification");
    assert!(app.doc().has_class(node, "notification-celebracion"));
    let icon = app.doc().first_by_class("notification-icon").expect("icon");
    assert_eq!(app.doc().text(icon), Some("fa-info-circle"));
}

#[test]
fn notification_auto_dismisses_after_fade() {
    let mut app = app_at(1300.0, "/");
    app.show_notification("hola", "info", 5_000);

    app.advance_to(5_000);
    let node = app.doc().first_by_class("notification").expect("notification");
    assert!(app.doc().has_class(node, "fade-out"));

    app.advance_to(5_300);
    assert!(app.doc().all_by_class("notification").is_empty());
}

#[test]
fn manual_dismiss_and_timer_do_not_double_remove() {
    let mut app = app_at(1300.0, "/");
    app.show_notification("hola", "info", 5_000);
    let close = app.doc().first_by_class("notification-close").expect("close");

    app.advance_to(100);
    click(&mut app, close);
    // Clicking again mid-fade changes nothing.
    click(&mut app, close);

    app.advance_to(400);
    assert!(app.doc().all_by_class("notification").is_empty());

    // The original auto-dismiss deadline passes without effect.
    app.advance_to(6_000);
    assert!(app.doc().all_by_class("notification").is_empty());
}

#[test]
fn a_new_notification_cancels_the_pending_dismissal_of_the_old() {
    let mut app = app_at(1300.0, "/");
    app.show_notification("primero", "info", 1_000);
    app.advance_to(900);
    app.show_notification("segundo", "info", 1_000);

    // The first notification's deadline passes; the second must stay.
    app.advance_to(1_400);
    let nodes = app.doc().all_by_class("notification");
    assert_eq!(nodes.len(), 1);
    assert!(!app.doc().has_class(nodes[0], "fade-out"));
}
