use super::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const DEFAULT_BIN_COUNT: u32 = 30;
pub const GENERIC_PARAMETER_DESCRIPTION: &str = "Analyze distribution of the selected parameter";

const HIDDEN_CLASS: &str = "hidden";
const SPINNER_HTML: &str = r#"<span class="spinner" role="status" aria-hidden="true"></span>"#;

const SCRAPING_FORM_ID: &str = "scraping-form";
const SCRAPING_STATUS_ID: &str = "scraping-status";
const SCRAPE_BUTTON_ID: &str = "scrape-button";
const SCRAPING_BUSY_LABEL: &str = "Scraping...";

const ANALYSIS_FORM_ID: &str = "analysis-form";
const ANALYSIS_STATUS_ID: &str = "analysis-status";
const ANALYZE_BUTTON_ID: &str = "analyze-button";
const ANALYSIS_BUSY_LABEL: &str = "Analyzing...";

const PARAMETER_SELECT_ID: &str = "parameter";
const PARAMETER_DESCRIPTION_SELECTOR: &str = ".parameter-description";
const BINS_INPUT_ID: &str = "bins";
const RESET_BINS_ID: &str = "reset-bins";
const BINS_ATTR: &str = "data-bins";

const EXAMPLE_URL_SELECTOR: &str = ".example-url";
const URL_INPUT_ID: &str = "url";
const URL_ATTR: &str = "data-url";

const TOOLTIP_TRIGGER_SELECTOR: &str = r#"[data-toggle="tooltip"]"#;

const PASSWORD_TOGGLE_SELECTOR: &str = ".toggle-password";
const TOGGLE_TARGET_ATTR: &str = "data-target";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    Price,
    Area,
    Rooms,
    SellerRating,
    Views,
}

impl ParameterKind {
    pub const ALL: [Self; 5] = [
        Self::Price,
        Self::Area,
        Self::Rooms,
        Self::SellerRating,
        Self::Views,
    ];

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "price" => Some(Self::Price),
            "area" => Some(Self::Area),
            "rooms" => Some(Self::Rooms),
            "seller_rating" => Some(Self::SellerRating),
            "views" => Some(Self::Views),
            _ => None,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Area => "area",
            Self::Rooms => "rooms",
            Self::SellerRating => "seller_rating",
            Self::Views => "views",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Price => "Analyze distribution of property prices with statistical metrics",
            Self::Area => "Analyze distribution of property sizes in square meters",
            Self::Rooms => "Analyze distribution of room counts in properties",
            Self::SellerRating => "Analyze distribution of seller ratings",
            Self::Views => "Analyze distribution of listing view counts",
        }
    }
}

pub fn parameter_description(value: &str) -> &'static str {
    ParameterKind::from_value(value)
        .map(ParameterKind::description)
        .unwrap_or(GENERIC_PARAMETER_DESCRIPTION)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PasswordVisibility {
    Masked,
    Revealed,
}

impl PasswordVisibility {
    fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::Revealed,
            Self::Revealed => Self::Masked,
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            Self::Masked => "password",
            Self::Revealed => "text",
        }
    }

    fn icon_html(self) -> &'static str {
        match self {
            Self::Masked => r#"<i class="icon icon-eye"></i>"#,
            Self::Revealed => r#"<i class="icon icon-eye-slash"></i>"#,
        }
    }
}

pub fn bind_page_behaviors(page: &mut Page) -> Result<()> {
    bind_submit_feedback(
        page,
        SCRAPING_FORM_ID,
        SCRAPING_STATUS_ID,
        SCRAPE_BUTTON_ID,
        SCRAPING_BUSY_LABEL,
    )?;
    bind_submit_feedback(
        page,
        ANALYSIS_FORM_ID,
        ANALYSIS_STATUS_ID,
        ANALYZE_BUTTON_ID,
        ANALYSIS_BUSY_LABEL,
    )?;
    bind_parameter_change(page)?;
    bind_bins_reset(page)?;
    bind_example_links(page)?;
    bind_tooltips(page)?;
    bind_password_toggles(page)?;
    Ok(())
}

fn bind_submit_feedback(
    page: &mut Page,
    form_id: &str,
    status_id: &str,
    button_id: &str,
    busy_label: &'static str,
) -> Result<()> {
    let Some(form) = page.dom.by_id(form_id) else {
        return Ok(());
    };
    let status = page.dom.by_id(status_id);
    let button = page.dom.by_id(button_id);
    page.trace_bind_line(format!("[bind] submit feedback on #{form_id}"));

    let handler: Handler = Rc::new(move |page: &mut Page, _: &mut EventState| {
        if let Some(status) = status {
            page.dom.class_remove(status, HIDDEN_CLASS)?;
        }
        if let Some(button) = button {
            page.dom.set_disabled(button, true)?;
            page.dom
                .set_inner_html(button, &format!("{SPINNER_HTML} {busy_label}"))?;
        }
        Ok(())
    });
    page.on_node(form, "submit", handler);
    Ok(())
}

fn bind_parameter_change(page: &mut Page) -> Result<()> {
    let select = page.dom.by_id(PARAMETER_SELECT_ID);
    let description = page.dom.query_selector(PARAMETER_DESCRIPTION_SELECTOR)?;
    let bins = page.dom.by_id(BINS_INPUT_ID);
    let (Some(select), Some(description), Some(bins)) = (select, description, bins) else {
        return Ok(());
    };
    page.trace_bind_line(format!("[bind] parameter change on #{PARAMETER_SELECT_ID}"));

    let handler: Handler = Rc::new(move |page: &mut Page, _: &mut EventState| {
        let default_bins = selected_bin_count(&page.dom, select)?;
        page.dom.set_value(bins, &default_bins.to_string())?;

        let value = page.dom.value(select)?;
        page.dom
            .set_text_content(description, parameter_description(&value))?;
        Ok(())
    });
    page.on_node(select, "change", handler);
    Ok(())
}

fn bind_bins_reset(page: &mut Page) -> Result<()> {
    let reset = page.dom.by_id(RESET_BINS_ID);
    let select = page.dom.by_id(PARAMETER_SELECT_ID);
    let bins = page.dom.by_id(BINS_INPUT_ID);
    let (Some(reset), Some(select), Some(bins)) = (reset, select, bins) else {
        return Ok(());
    };
    page.trace_bind_line(format!("[bind] bins reset on #{RESET_BINS_ID}"));

    let handler: Handler = Rc::new(move |page: &mut Page, _: &mut EventState| {
        let default_bins = selected_bin_count(&page.dom, select)?;
        page.dom.set_value(bins, &default_bins.to_string())?;
        Ok(())
    });
    page.on_node(reset, "click", handler);
    Ok(())
}

fn bind_example_links(page: &mut Page) -> Result<()> {
    let links = page.dom.query_selector_all(EXAMPLE_URL_SELECTOR)?;
    if links.is_empty() {
        return Ok(());
    }
    let Some(url_input) = page.dom.by_id(URL_INPUT_ID) else {
        return Ok(());
    };
    page.trace_bind_line(format!("[bind] {} example link(s)", links.len()));

    for link in links {
        let handler: Handler = Rc::new(move |page: &mut Page, event: &mut EventState| {
            event.prevent_default();
            let url = page.dom.attr(link, URL_ATTR).unwrap_or_default();
            page.dom.set_value(url_input, &url)?;
            page.scroll_into_view(url_input);
            page.focus_node(url_input)?;
            Ok(())
        });
        page.on_node(link, "click", handler);
    }
    Ok(())
}

fn bind_tooltips(page: &mut Page) -> Result<()> {
    let triggers = page.dom.query_selector_all(TOOLTIP_TRIGGER_SELECTOR)?;
    if !triggers.is_empty() {
        page.trace_bind_line(format!("[bind] {} tooltip trigger(s)", triggers.len()));
    }
    for trigger in triggers {
        Tooltip::attach_node(page, trigger);
    }
    Ok(())
}

fn bind_password_toggles(page: &mut Page) -> Result<()> {
    let toggles = page.dom.query_selector_all(PASSWORD_TOGGLE_SELECTOR)?;
    if toggles.is_empty() {
        return Ok(());
    }
    page.trace_bind_line(format!("[bind] {} password toggle(s)", toggles.len()));

    let states: Rc<RefCell<HashMap<NodeId, PasswordVisibility>>> =
        Rc::new(RefCell::new(HashMap::new()));
    for button in toggles {
        let states = Rc::clone(&states);
        let handler: Handler = Rc::new(move |page: &mut Page, _: &mut EventState| {
            let Some(target_id) = page.dom.attr(button, TOGGLE_TARGET_ATTR) else {
                return Ok(());
            };
            let Some(input) = page.dom.by_id(&target_id) else {
                return Ok(());
            };

            let next = states
                .borrow()
                .get(&button)
                .copied()
                .unwrap_or(PasswordVisibility::Masked)
                .toggled();
            states.borrow_mut().insert(button, next);

            page.dom.set_attr(input, "type", next.input_type())?;
            page.dom.set_inner_html(button, next.icon_html())?;
            Ok(())
        });
        page.on_node(button, "click", handler);
    }
    Ok(())
}

fn selected_bin_count(dom: &Dom, select: NodeId) -> Result<u32> {
    let Some(option) = dom.selected_option(select)? else {
        return Ok(DEFAULT_BIN_COUNT);
    };
    Ok(dom
        .attr(option, BINS_ATTR)
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .unwrap_or(DEFAULT_BIN_COUNT))
}
