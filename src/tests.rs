use super::*;
use std::cell::RefCell;
use std::rc::Rc;

const ANALYSIS_PAGE_HTML: &str = r#"
    <form id="analysis-form" action="/analyze">
      <select id="parameter" name="parameter">
        <option value="" selected>Choose...</option>
        <option value="price" data-bins="50">Price Distribution</option>
        <option value="area" data-bins="30">Area Distribution</option>
        <option value="rooms" data-bins="10">Room Count Distribution</option>
        <option value="seller_rating" data-bins="20">Seller Rating Distribution</option>
        <option value="views" data-bins="30">View Count Distribution</option>
        <option value="unknown_param">Mystery Distribution</option>
      </select>
      <p class="parameter-description">Select a parameter to analyze</p>
      <input id="bins" name="bins" type="number" value="30">
      <button id="reset-bins" type="button">Reset</button>
      <button id="analyze-button" type="submit">Analyze</button>
    </form>
    <div id="analysis-status" class="alert hidden">Analysis is running</div>
    "#;

#[test]
fn parse_builds_elements_and_indexes_ids() -> Result<()> {
    let page = Page::from_html(
        r#"
        <div id="outer" class="wrap">
          <p id="inner">hello</p>
        </div>
        "#,
    )?;
    page.assert_exists("#outer")?;
    page.assert_exists("div.wrap > p#inner")?;
    page.assert_text("#inner", "hello")?;
    Ok(())
}

#[test]
fn parse_decodes_character_references_in_text_and_attrs() -> Result<()> {
    let page = Page::from_html(
        r#"
        <p id="msg">a &amp; b &lt;c&gt; &#33;</p>
        <a id="link" href="/q?a=1&amp;b=2">go</a>
        "#,
    )?;
    page.assert_text("#msg", "a & b <c> !")?;
    page.assert_attr("#link", "href", "/q?a=1&b=2")?;
    Ok(())
}

#[test]
fn void_elements_do_not_swallow_siblings() -> Result<()> {
    let page = Page::from_html(
        r#"
        <input id="field">
        <p id="after">visible</p>
        "#,
    )?;
    page.assert_text("#after", "visible")?;
    assert!(!page.exists("input p")?);
    Ok(())
}

#[test]
fn mismatched_close_tags_recover() -> Result<()> {
    let page = Page::from_html(
        r#"
        <div id="a"><span id="b">x</div>
        <p id="c">y</p>
        "#,
    )?;
    page.assert_text("#b", "x")?;
    page.assert_text("#c", "y")?;
    assert!(!page.exists("div p")?);
    Ok(())
}

#[test]
fn unterminated_comment_is_a_parse_error() {
    match Page::from_html("<div><!-- nope</div>") {
        Ok(_) => panic!("unterminated comment must fail to parse"),
        Err(err) => assert!(matches!(err, Error::HtmlParse(_))),
    }
}

#[test]
fn script_content_is_kept_opaque() -> Result<()> {
    let page = Page::from_html(
        r#"
        <script>if (a < b) { render(); }</script>
        <p id="after">ok</p>
        "#,
    )?;
    page.assert_text("#after", "ok")?;
    assert!(!page.exists("script p")?);
    Ok(())
}

#[test]
fn textarea_value_is_initialized_from_text() -> Result<()> {
    let page = Page::from_html(r#"<textarea id="bio">draft</textarea>"#)?;
    page.assert_value("#bio", "draft")?;
    Ok(())
}

#[test]
fn select_value_syncs_from_selected_attribute() -> Result<()> {
    let page = Page::from_html(
        r#"
        <select id="pick">
          <option value="a">A</option>
          <option value="b" selected>B</option>
        </select>
        "#,
    )?;
    page.assert_value("#pick", "b")?;
    Ok(())
}

#[test]
fn select_value_defaults_to_first_option() -> Result<()> {
    let page = Page::from_html(
        r#"
        <select id="pick">
          <option value="a">A</option>
          <option value="b">B</option>
        </select>
        "#,
    )?;
    page.assert_value("#pick", "a")?;
    Ok(())
}

#[test]
fn option_without_value_attr_uses_its_text() -> Result<()> {
    let page = Page::from_html(
        r#"
        <select id="pick">
          <option>first</option>
        </select>
        "#,
    )?;
    page.assert_value("#pick", "first")?;
    Ok(())
}

#[test]
fn select_option_marks_selection_and_fires_change() -> Result<()> {
    let mut page = Page::from_html(
        r#"
        <select id="pick">
          <option value="a">A</option>
          <option value="b">B</option>
        </select>
        <p id="log"></p>
        "#,
    )?;
    page.on("#pick", "change", |page, _| {
        let value = page.value("#pick")?;
        let log = page.select_one("#log")?;
        page.dom.set_text_content(log, &value)
    })?;

    page.select_option("#pick", "b")?;
    page.assert_value("#pick", "b")?;
    page.assert_text("#log", "b")?;
    page.assert_attr("select option[value=b]", "selected", "true")?;
    Ok(())
}

#[test]
fn select_option_with_same_value_does_not_fire_change() -> Result<()> {
    let mut page = Page::from_html(
        r#"
        <select id="pick">
          <option value="a" selected>A</option>
        </select>
        <p id="log">untouched</p>
        "#,
    )?;
    page.on("#pick", "change", |page, _| {
        let log = page.select_one("#log")?;
        page.dom.set_text_content(log, "changed")
    })?;

    page.select_option("#pick", "a")?;
    page.assert_text("#log", "untouched")?;
    Ok(())
}

#[test]
fn set_inner_html_replaces_children_and_reindexes_ids() -> Result<()> {
    let mut page = Page::from_html(r#"<div id="box"><p id="old">old</p></div>"#)?;
    let target = page.select_one("#box")?;
    page.dom
        .set_inner_html(target, r#"<span id="fresh">new</span>"#)?;
    page.assert_text("#fresh", "new")?;
    assert!(!page.exists("#old")?);
    Ok(())
}

#[test]
fn id_selector_takes_index_fast_path_after_attr_rewrite() -> Result<()> {
    let mut page = Page::from_html(r#"<div id="one">x</div>"#)?;
    let target = page.select_one("#one")?;
    page.dom.set_attr(target, "id", "two")?;
    assert!(!page.exists("#one")?);
    page.assert_text("#two", "x")?;
    Ok(())
}

#[test]
fn attribute_conditions_match() -> Result<()> {
    let page = Page::from_html(
        r#"
        <a id="a1" href="https://example.com/x" data-kind="demo link">one</a>
        <a id="a2" href="/local" lang="en-US">two</a>
        "#,
    )?;
    page.assert_exists(r#"a[href^="https://"]"#)?;
    page.assert_exists(r#"a[href$="/x"]"#)?;
    page.assert_exists(r#"a[href*="example"]"#)?;
    page.assert_exists(r#"a[data-kind~="demo"]"#)?;
    page.assert_exists(r#"a[lang|="en"]"#)?;
    assert!(!page.exists(r#"a[data-kind~="dem"]"#)?);
    Ok(())
}

#[test]
fn selector_groups_and_child_combinator() -> Result<()> {
    let page = Page::from_html(
        r#"
        <ul id="list"><li id="first">1</li></ul>
        <p id="loose">2</p>
        "#,
    )?;
    page.assert_exists("ul > li")?;
    page.assert_exists("#missing, #loose")?;
    assert!(!page.exists("p > li")?);
    Ok(())
}

#[test]
fn sibling_combinators_and_pseudo_classes_are_unsupported() -> Result<()> {
    let page = Page::from_html("<p id='a'>x</p>")?;
    assert!(matches!(
        page.exists("p + p"),
        Err(Error::UnsupportedSelector(_))
    ));
    assert!(matches!(
        page.exists("p:first-child"),
        Err(Error::UnsupportedSelector(_))
    ));
    Ok(())
}

#[test]
fn click_bubbles_from_target_to_ancestor() -> Result<()> {
    let mut page = Page::from_html(
        r#"
        <div id="outer"><button id="btn" type="button">go</button></div>
        "#,
    )?;
    let order = Rc::new(RefCell::new(Vec::new()));
    {
        let order = Rc::clone(&order);
        page.on("#btn", "click", move |_, _| {
            order.borrow_mut().push("target");
            Ok(())
        })?;
    }
    {
        let order = Rc::clone(&order);
        page.on("#outer", "click", move |_, _| {
            order.borrow_mut().push("ancestor");
            Ok(())
        })?;
    }

    page.click("#btn")?;
    assert_eq!(*order.borrow(), vec!["target", "ancestor"]);
    Ok(())
}

#[test]
fn stop_propagation_blocks_ancestor_listener() -> Result<()> {
    let mut page = Page::from_html(
        r#"
        <div id="outer"><button id="btn" type="button">go</button></div>
        <p id="log"></p>
        "#,
    )?;
    page.on("#btn", "click", |_, event| {
        event.stop_propagation();
        Ok(())
    })?;
    page.on("#outer", "click", |page, _| {
        let log = page.select_one("#log")?;
        page.dom.set_text_content(log, "reached")
    })?;

    page.click("#btn")?;
    page.assert_text("#log", "")?;
    Ok(())
}

#[test]
fn prevent_default_blocks_anchor_navigation() -> Result<()> {
    let mut page = Page::from_html(r#"<a id="link" href="/away">go</a>"#)?;
    page.on("#link", "click", |_, event| {
        event.prevent_default();
        Ok(())
    })?;

    page.click("#link")?;
    assert!(page.navigations().is_empty());
    Ok(())
}

#[test]
fn unprevented_anchor_click_records_navigation() -> Result<()> {
    let mut page = Page::from_html(r#"<a id="link" href="/away">go</a>"#)?;
    page.click("#link")?;
    assert_eq!(page.navigations(), ["/away"]);
    Ok(())
}

#[test]
fn focus_does_not_bubble_but_focusin_does() -> Result<()> {
    let mut page = Page::from_html(
        r#"
        <div id="outer"><input id="field"></div>
        <p id="log"></p>
        "#,
    )?;
    page.on("#outer", "focus", |page, _| {
        let log = page.select_one("#log")?;
        page.dom.set_text_content(log, "focus bubbled")
    })?;
    page.on("#outer", "focusin", |page, _| {
        let log = page.select_one("#log")?;
        page.dom.set_text_content(log, "focusin bubbled")
    })?;

    page.focus("#field")?;
    page.assert_text("#log", "focusin bubbled")?;
    assert_eq!(page.focused_id().as_deref(), Some("field"));
    Ok(())
}

#[test]
fn submit_button_click_submits_owning_form() -> Result<()> {
    let mut page = Page::from_html(
        r#"
        <form id="f" action="/save">
          <button id="send" type="submit">Send</button>
        </form>
        "#,
    )?;
    page.click("#send")?;
    assert_eq!(page.form_submissions(), ["/save"]);
    Ok(())
}

#[test]
fn prevented_submit_is_not_recorded() -> Result<()> {
    let mut page = Page::from_html(
        r#"
        <form id="f" action="/save">
          <button id="send" type="submit">Send</button>
        </form>
        "#,
    )?;
    page.on("#f", "submit", |_, event| {
        event.prevent_default();
        Ok(())
    })?;

    page.click("#send")?;
    assert!(page.form_submissions().is_empty());
    Ok(())
}

#[test]
fn disabled_button_ignores_clicks() -> Result<()> {
    let mut page = Page::from_html(
        r#"
        <form id="f" action="/save">
          <button id="send" type="submit" disabled>Send</button>
        </form>
        "#,
    )?;
    page.click("#send")?;
    assert!(page.form_submissions().is_empty());
    Ok(())
}

#[test]
fn checkbox_click_toggles_and_fires_change() -> Result<()> {
    let mut page = Page::from_html(
        r#"
        <input id="flag" type="checkbox">
        <p id="log"></p>
        "#,
    )?;
    page.on("#flag", "change", |page, _| {
        let flag = page.select_one("#flag")?;
        let log = page.select_one("#log")?;
        let state = if page.dom.checked(flag)? { "on" } else { "off" };
        page.dom.set_text_content(log, state)
    })?;

    page.click("#flag")?;
    page.assert_text("#log", "on")?;
    page.click("#flag")?;
    page.assert_text("#log", "off")?;
    Ok(())
}

#[test]
fn radio_click_unchecks_rest_of_group() -> Result<()> {
    let mut page = Page::from_html(
        r#"
        <form id="f">
          <input id="r1" type="radio" name="mode" checked>
          <input id="r2" type="radio" name="mode">
        </form>
        "#,
    )?;
    page.click("#r2")?;
    let r1 = page.select_one("#r1")?;
    let r2 = page.select_one("#r2")?;
    assert!(!page.dom.checked(r1)?);
    assert!(page.dom.checked(r2)?);
    Ok(())
}

#[test]
fn type_text_updates_value_and_fires_input() -> Result<()> {
    let mut page = Page::from_html(
        r#"
        <input id="name">
        <p id="log"></p>
        "#,
    )?;
    page.on("#name", "input", |page, _| {
        let value = page.value("#name")?;
        let log = page.select_one("#log")?;
        page.dom.set_text_content(log, &value)
    })?;

    page.type_text("#name", "Mira")?;
    page.assert_value("#name", "Mira")?;
    page.assert_text("#log", "Mira")?;
    Ok(())
}

#[test]
fn type_text_rejects_non_form_elements() -> Result<()> {
    let mut page = Page::from_html("<p id='msg'>x</p>")?;
    let err = page.type_text("#msg", "y").expect_err("must fail");
    assert!(matches!(err, Error::TypeMismatch { .. }));
    Ok(())
}

#[test]
fn trace_logs_capture_events_when_enabled() -> Result<()> {
    let mut page = Page::from_html(r#"<button id="btn" type="button">go</button>"#)?;
    page.enable_trace(true);
    page.set_trace_stderr(false);
    page.on("#btn", "click", |_, _| Ok(()))?;
    page.click("#btn")?;

    let logs = page.take_trace_logs();
    assert!(logs.iter().any(|line| line.contains("[event] click")));
    assert!(logs.iter().any(|line| line.contains("button#btn")));
    Ok(())
}

#[test]
fn trace_logs_stay_empty_when_disabled() -> Result<()> {
    let mut page = Page::from_html(r#"<button id="btn" type="button">go</button>"#)?;
    page.set_trace_stderr(false);
    page.click("#btn")?;
    assert!(page.take_trace_logs().is_empty());
    Ok(())
}

#[test]
fn trace_log_limit_keeps_latest_entries() -> Result<()> {
    let mut page = Page::from_html(r#"<button id="btn" type="button">go</button>"#)?;
    page.enable_trace(true);
    page.set_trace_stderr(false);
    page.set_trace_log_limit(2)?;
    page.on("#btn", "click", |_, _| Ok(()))?;
    for _ in 0..5 {
        page.click("#btn")?;
    }

    let logs = page.take_trace_logs();
    assert_eq!(logs.len(), 2);
    Ok(())
}

#[test]
fn binder_install_lines_appear_in_trace() -> Result<()> {
    let mut page = Page::from_html(ANALYSIS_PAGE_HTML)?;
    page.enable_trace(true);
    page.set_trace_stderr(false);
    bind_page_behaviors(&mut page)?;

    let logs = page.take_trace_logs();
    assert!(logs.iter().any(|line| line.contains("[bind] parameter change")));
    assert!(logs.iter().any(|line| line.contains("[bind] bins reset")));
    Ok(())
}

#[test]
fn scraping_submit_reveals_status_and_disables_button_together() -> Result<()> {
    let mut page = Page::open(
        r#"
        <form id="scraping-form" action="/scrape">
          <input id="url" name="url">
          <button id="scrape-button" type="submit">Start Scraping</button>
        </form>
        <div id="scraping-status" class="alert hidden">Scraping in progress</div>
        "#,
    )?;
    page.assert_class("#scraping-status", "hidden", true)?;
    page.assert_disabled("#scrape-button", false)?;

    page.click("#scrape-button")?;

    page.assert_class("#scraping-status", "hidden", false)?;
    page.assert_class("#scraping-status", "alert", true)?;
    page.assert_disabled("#scrape-button", true)?;
    let busy = page.inner_html("#scrape-button")?;
    assert!(busy.contains("Scraping..."));
    assert!(busy.contains(r#"class="spinner""#));
    assert_eq!(page.form_submissions(), ["/scrape"]);
    Ok(())
}

#[test]
fn scraping_submit_without_status_region_still_disables_button() -> Result<()> {
    let mut page = Page::open(
        r#"
        <form id="scraping-form" action="/scrape">
          <button id="scrape-button" type="submit">Start Scraping</button>
        </form>
        "#,
    )?;
    page.submit("#scraping-form")?;
    page.assert_disabled("#scrape-button", true)?;
    Ok(())
}

#[test]
fn analysis_submit_uses_analyzing_label() -> Result<()> {
    let mut page = Page::open(ANALYSIS_PAGE_HTML)?;
    page.click("#analyze-button")?;

    page.assert_class("#analysis-status", "hidden", false)?;
    page.assert_disabled("#analyze-button", true)?;
    let busy = page.inner_html("#analyze-button")?;
    assert!(busy.contains("Analyzing..."));
    assert_eq!(page.form_submissions(), ["/analyze"]);
    Ok(())
}

#[test]
fn parameter_change_updates_bins_and_description_for_known_keys() -> Result<()> {
    let expected_bins = [
        (ParameterKind::Price, "50"),
        (ParameterKind::Area, "30"),
        (ParameterKind::Rooms, "10"),
        (ParameterKind::SellerRating, "20"),
        (ParameterKind::Views, "30"),
    ];

    for (kind, bins) in expected_bins {
        let mut page = Page::open(ANALYSIS_PAGE_HTML)?;
        page.select_option("#parameter", kind.value())?;
        page.assert_value("#bins", bins)?;
        page.assert_text(".parameter-description", kind.description())?;
    }
    Ok(())
}

#[test]
fn parameter_change_unknown_key_falls_back_to_generic_description() -> Result<()> {
    let mut page = Page::open(ANALYSIS_PAGE_HTML)?;
    page.select_option("#parameter", "area")?;
    page.assert_value("#bins", "30")?;
    page.assert_text(
        ".parameter-description",
        "Analyze distribution of property sizes in square meters",
    )?;

    page.select_option("#parameter", "unknown_param")?;
    page.assert_value("#bins", &DEFAULT_BIN_COUNT.to_string())?;
    page.assert_text(".parameter-description", GENERIC_PARAMETER_DESCRIPTION)?;
    Ok(())
}

#[test]
fn parameter_change_with_garbage_bins_attr_falls_back() -> Result<()> {
    let mut page = Page::open(
        r#"
        <select id="parameter">
          <option value="" selected>Choose...</option>
          <option value="price" data-bins="lots">Price</option>
        </select>
        <p class="parameter-description">Select a parameter</p>
        <input id="bins" type="number" value="7">
        "#,
    )?;
    page.select_option("#parameter", "price")?;
    page.assert_value("#bins", "30")?;
    Ok(())
}

#[test]
fn reset_restores_default_after_manual_edit() -> Result<()> {
    let mut page = Page::open(ANALYSIS_PAGE_HTML)?;
    page.select_option("#parameter", "rooms")?;
    page.assert_value("#bins", "10")?;

    page.type_text("#bins", "99")?;
    page.assert_value("#bins", "99")?;

    page.click("#reset-bins")?;
    page.assert_value("#bins", "10")?;
    Ok(())
}

#[test]
fn reset_does_not_touch_description() -> Result<()> {
    let mut page = Page::open(ANALYSIS_PAGE_HTML)?;
    page.select_option("#parameter", "views")?;
    page.type_text("#bins", "3")?;
    page.click("#reset-bins")?;

    page.assert_value("#bins", "30")?;
    page.assert_text(
        ".parameter-description",
        "Analyze distribution of listing view counts",
    )?;
    Ok(())
}

#[test]
fn reset_with_no_selected_bins_attr_uses_default_constant() -> Result<()> {
    let mut page = Page::open(ANALYSIS_PAGE_HTML)?;
    page.type_text("#bins", "123")?;
    page.click("#reset-bins")?;
    page.assert_value("#bins", &DEFAULT_BIN_COUNT.to_string())?;
    Ok(())
}

#[test]
fn binder_skips_every_missing_element_silently() -> Result<()> {
    let mut page = Page::open("<p id='lonely'>nothing to bind</p>")?;
    page.assert_text("#lonely", "nothing to bind")?;
    Ok(())
}

#[test]
fn parameter_binding_requires_all_three_elements() -> Result<()> {
    let mut page = Page::open(
        r#"
        <select id="parameter">
          <option value="" selected>Choose...</option>
          <option value="price" data-bins="50">Price</option>
        </select>
        <input id="bins" type="number" value="30">
        "#,
    )?;
    page.select_option("#parameter", "price")?;
    page.assert_value("#bins", "30")?;
    Ok(())
}

#[test]
fn example_link_fills_url_scrolls_and_focuses_without_navigation() -> Result<()> {
    let mut page = Page::open(
        r##"
        <a class="example-url" id="ex1" href="#" data-url="https://market.local/listing/42">sample</a>
        <form id="scraping-form" action="/scrape">
          <input id="url" name="url">
        </form>
        "##,
    )?;
    page.click("#ex1")?;

    page.assert_value("#url", "https://market.local/listing/42")?;
    assert!(page.navigations().is_empty());
    assert_eq!(page.last_scrolled_id().as_deref(), Some("url"));
    assert_eq!(page.focused_id().as_deref(), Some("url"));
    Ok(())
}

#[test]
fn example_links_are_inert_without_url_input() -> Result<()> {
    let mut page = Page::open(
        r#"
        <a class="example-url" id="ex1" href="/listing/42" data-url="https://market.local/listing/42">sample</a>
        "#,
    )?;
    page.click("#ex1")?;
    assert_eq!(page.navigations(), ["/listing/42"]);
    Ok(())
}

#[test]
fn example_link_without_url_attr_clears_input() -> Result<()> {
    let mut page = Page::open(
        r##"
        <a class="example-url" id="ex1" href="#">sample</a>
        <input id="url" value="stale">
        "##,
    )?;
    page.click("#ex1")?;
    page.assert_value("#url", "")?;
    Ok(())
}

#[test]
fn password_toggle_alternates_between_exactly_two_states() -> Result<()> {
    let mut page = Page::open(
        r#"
        <input id="api-key" type="password" value="secret">
        <button id="reveal" class="toggle-password" data-target="api-key" type="button">
          <i class="icon icon-eye"></i>
        </button>
        "#,
    )?;

    page.click("#reveal")?;
    page.assert_attr("#api-key", "type", "text")?;
    assert!(page.inner_html("#reveal")?.contains("icon-eye-slash"));

    page.click("#reveal")?;
    page.assert_attr("#api-key", "type", "password")?;
    let icon = page.inner_html("#reveal")?;
    assert!(icon.contains("icon-eye"));
    assert!(!icon.contains("icon-eye-slash"));

    for _ in 0..4 {
        page.click("#reveal")?;
    }
    page.assert_attr("#api-key", "type", "password")?;
    Ok(())
}

#[test]
fn password_toggle_with_missing_target_is_a_noop() -> Result<()> {
    let mut page = Page::open(
        r#"
        <button id="reveal" class="toggle-password" data-target="ghost" type="button">
          <i class="icon icon-eye"></i>
        </button>
        "#,
    )?;
    page.click("#reveal")?;
    assert!(page.inner_html("#reveal")?.contains("icon-eye"));
    Ok(())
}

#[test]
fn tooltip_shows_on_hover_and_hides_on_leave() -> Result<()> {
    let mut page = Page::open(
        r#"
        <button id="help" data-toggle="tooltip" title="Paste a listing URL" type="button">?</button>
        "#,
    )?;
    assert!(!page.exists(".tooltip")?);

    page.hover("#help")?;
    page.assert_text(".tooltip", "Paste a listing URL")?;
    page.assert_attr(".tooltip", "role", "tooltip")?;

    page.unhover("#help")?;
    assert!(!page.exists(".tooltip")?);
    Ok(())
}

#[test]
fn tooltip_shows_on_focus_and_hides_on_blur() -> Result<()> {
    let mut page = Page::open(
        r#"
        <button id="help" data-toggle="tooltip" data-title="Between 1 and 100" type="button">?</button>
        "#,
    )?;
    page.focus("#help")?;
    page.assert_text(".tooltip", "Between 1 and 100")?;

    page.blur("#help")?;
    assert!(!page.exists(".tooltip")?);
    Ok(())
}

#[test]
fn tooltip_does_not_duplicate_on_repeated_hover() -> Result<()> {
    let mut page = Page::open(
        r#"
        <button id="help" data-toggle="tooltip" title="hint" type="button">?</button>
        "#,
    )?;
    page.hover("#help")?;
    page.hover("#help")?;
    let target = page.dom.query_selector_all(".tooltip")?;
    assert_eq!(target.len(), 1);
    Ok(())
}

#[test]
fn tooltip_without_title_never_creates_a_bubble() -> Result<()> {
    let mut page = Page::open(
        r#"
        <button id="help" data-toggle="tooltip" type="button">?</button>
        "#,
    )?;
    page.hover("#help")?;
    assert!(!page.exists(".tooltip")?);
    Ok(())
}

#[test]
fn tooltip_attach_by_selector_reports_trigger_count() -> Result<()> {
    let mut page = Page::from_html(
        r#"
        <span class="hinted" title="one">a</span>
        <span class="hinted" title="two">b</span>
        "#,
    )?;
    let count = Tooltip::attach(&mut page, ".hinted")?;
    assert_eq!(count, 2);
    Ok(())
}

#[test]
fn parameter_description_mapping_is_total_with_fallback() {
    for kind in ParameterKind::ALL {
        assert_eq!(parameter_description(kind.value()), kind.description());
        assert_eq!(ParameterKind::from_value(kind.value()), Some(kind));
    }
    assert_eq!(parameter_description("floor"), GENERIC_PARAMETER_DESCRIPTION);
    assert_eq!(parameter_description(""), GENERIC_PARAMETER_DESCRIPTION);
}
