use super::*;
use crate::events::event_bubbles;
use std::rc::Rc;

pub struct Page {
    pub(crate) dom: Dom,
    pub(crate) listeners: ListenerStore,
    active_element: Option<NodeId>,
    navigations: Vec<String>,
    submissions: Vec<String>,
    scrolls: Vec<NodeId>,
    trace: bool,
    trace_events: bool,
    trace_logs: Vec<String>,
    trace_log_limit: usize,
    trace_to_stderr: bool,
}

impl Page {
    pub fn from_html(html: &str) -> Result<Self> {
        let dom = parse_html(html)?;
        Ok(Self {
            dom,
            listeners: ListenerStore::default(),
            active_element: None,
            navigations: Vec::new(),
            submissions: Vec::new(),
            scrolls: Vec::new(),
            trace: false,
            trace_events: true,
            trace_logs: Vec::new(),
            trace_log_limit: 10_000,
            trace_to_stderr: true,
        })
    }

    pub fn open(html: &str) -> Result<Self> {
        let mut page = Self::from_html(html)?;
        bind_page_behaviors(&mut page)?;
        Ok(page)
    }

    pub fn enable_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    pub fn take_trace_logs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.trace_logs)
    }

    pub fn set_trace_stderr(&mut self, enabled: bool) {
        self.trace_to_stderr = enabled;
    }

    pub fn set_trace_events(&mut self, enabled: bool) {
        self.trace_events = enabled;
    }

    pub fn set_trace_log_limit(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(Error::DomOp(
                "set_trace_log_limit requires at least 1 entry".into(),
            ));
        }
        self.trace_log_limit = max_entries;
        while self.trace_logs.len() > self.trace_log_limit {
            self.trace_logs.remove(0);
        }
        Ok(())
    }

    pub fn exists(&self, selector: &str) -> Result<bool> {
        Ok(self.dom.query_selector(selector)?.is_some())
    }

    pub fn on<F>(&mut self, selector: &str, event: &str, handler: F) -> Result<usize>
    where
        F: Fn(&mut Page, &mut EventState) -> Result<()> + 'static,
    {
        let targets = self.dom.query_selector_all(selector)?;
        let handler: Handler = Rc::new(handler);
        for target in &targets {
            self.on_node(*target, event, handler.clone());
        }
        Ok(targets.len())
    }

    pub(crate) fn on_node(&mut self, node: NodeId, event: &str, handler: Handler) {
        self.listeners.add(
            node,
            event.to_string(),
            Listener {
                capture: false,
                handler,
            },
        );
    }

    pub fn type_text(&mut self, selector: &str, text: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        if self.dom.disabled(target) {
            return Ok(());
        }
        if self.dom.readonly(target) {
            return Ok(());
        }

        let tag = self
            .dom
            .tag_name(target)
            .ok_or_else(|| Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "input or textarea".into(),
                actual: "non-element".into(),
            })?
            .to_ascii_lowercase();

        if tag != "input" && tag != "textarea" {
            return Err(Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "input or textarea".into(),
                actual: tag,
            });
        }

        self.dom.set_value(target, text)?;
        self.dispatch_event(target, "input")?;
        Ok(())
    }

    pub fn set_checked(&mut self, selector: &str, checked: bool) -> Result<()> {
        let target = self.select_one(selector)?;
        if self.dom.disabled(target) {
            return Ok(());
        }
        let tag = self
            .dom
            .tag_name(target)
            .unwrap_or_default()
            .to_ascii_lowercase();
        if tag != "input" {
            return Err(Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "input[type=checkbox|radio]".into(),
                actual: tag,
            });
        }

        let kind = self
            .dom
            .attr(target, "type")
            .unwrap_or_else(|| "text".into())
            .to_ascii_lowercase();
        if kind != "checkbox" && kind != "radio" {
            return Err(Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "input[type=checkbox|radio]".into(),
                actual: format!("input[type={kind}]"),
            });
        }

        let current = self.dom.checked(target)?;
        if current != checked {
            if kind == "radio" && checked {
                self.uncheck_other_radios_in_group(target)?;
            }
            self.dom.set_checked(target, checked)?;
            self.dispatch_event(target, "input")?;
            self.dispatch_event(target, "change")?;
        }

        Ok(())
    }

    pub fn select_option(&mut self, selector: &str, value: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        if self.dom.disabled(target) {
            return Ok(());
        }
        let tag = self
            .dom
            .tag_name(target)
            .unwrap_or_default()
            .to_ascii_lowercase();
        if tag != "select" {
            return Err(Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "select".into(),
                actual: tag,
            });
        }

        let current = self.dom.value(target)?;
        self.dom.set_select_value(target, value)?;
        if self.dom.value(target)? != current {
            self.dispatch_event(target, "input")?;
            self.dispatch_event(target, "change")?;
        }
        Ok(())
    }

    pub fn click(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        if self.dom.disabled(target) {
            return Ok(());
        }
        stacker::grow(32 * 1024 * 1024, || self.click_node(target))
    }

    fn click_node(&mut self, target: NodeId) -> Result<()> {
        let click_outcome = self.dispatch_event(target, "click")?;
        if click_outcome.default_prevented {
            return Ok(());
        }

        if is_checkbox_input(&self.dom, target) {
            let current = self.dom.checked(target)?;
            self.dom.set_checked(target, !current)?;
            self.dispatch_event(target, "input")?;
            self.dispatch_event(target, "change")?;
        }

        if is_radio_input(&self.dom, target) {
            let current = self.dom.checked(target)?;
            if !current {
                self.uncheck_other_radios_in_group(target)?;
                self.dom.set_checked(target, true)?;
                self.dispatch_event(target, "input")?;
                self.dispatch_event(target, "change")?;
            }
        }

        if self
            .dom
            .tag_name(target)
            .map(|tag| tag.eq_ignore_ascii_case("a"))
            .unwrap_or(false)
        {
            if let Some(href) = self.dom.attr(target, "href") {
                self.navigations.push(href);
            }
        }

        if is_submit_control(&self.dom, target) {
            if let Some(form_id) = self.resolve_form_for_submit(target) {
                self.submit_form(form_id)?;
            }
        }

        Ok(())
    }

    pub fn submit(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;

        let form = if self
            .dom
            .tag_name(target)
            .map(|tag| tag.eq_ignore_ascii_case("form"))
            .unwrap_or(false)
        {
            Some(target)
        } else {
            self.resolve_form_for_submit(target)
        };

        if let Some(form_id) = form {
            stacker::grow(32 * 1024 * 1024, || self.submit_form(form_id))?;
        }

        Ok(())
    }

    fn submit_form(&mut self, form: NodeId) -> Result<()> {
        let outcome = self.dispatch_event(form, "submit")?;
        if !outcome.default_prevented {
            let destination = self
                .dom
                .attr(form, "action")
                .or_else(|| self.dom.attr(form, "id"))
                .unwrap_or_else(|| "<form>".into());
            self.submissions.push(destination);
        }
        Ok(())
    }

    pub fn dispatch(&mut self, selector: &str, event: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        stacker::grow(32 * 1024 * 1024, || {
            self.dispatch_event(target, event).map(|_| ())
        })
    }

    pub fn focus(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.focus_node(target)
    }

    pub fn blur(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.blur_node(target)
    }

    pub fn hover(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.dispatch_event(target, "mouseenter")?;
        Ok(())
    }

    pub fn unhover(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.dispatch_event(target, "mouseleave")?;
        Ok(())
    }

    pub fn text(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(self.dom.text_content(target))
    }

    pub fn value(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        self.dom.value(target)
    }

    pub fn attr(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let target = self.select_one(selector)?;
        Ok(self.dom.attr(target, name))
    }

    pub fn has_class(&self, selector: &str, class_name: &str) -> Result<bool> {
        let target = self.select_one(selector)?;
        self.dom.class_contains(target, class_name)
    }

    pub fn is_disabled(&self, selector: &str) -> Result<bool> {
        let target = self.select_one(selector)?;
        Ok(self.dom.disabled(target))
    }

    pub fn inner_html(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        self.dom.inner_html(target)
    }

    pub fn focused_id(&self) -> Option<String> {
        self.active_element
            .and_then(|node| self.dom.attr(node, "id"))
    }

    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    pub fn form_submissions(&self) -> &[String] {
        &self.submissions
    }

    pub fn last_scrolled_id(&self) -> Option<String> {
        self.scrolls
            .last()
            .and_then(|node| self.dom.attr(*node, "id"))
    }

    pub fn assert_text(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.text_content(target);
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual,
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_value(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.value(target)?;
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual,
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_attr(&self, selector: &str, name: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.attr(target, name);
        if actual.as_deref() != Some(expected) {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: format!("{name}={expected}"),
                actual: actual
                    .map(|value| format!("{name}={value}"))
                    .unwrap_or_else(|| format!("{name} missing")),
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_class(&self, selector: &str, class_name: &str, expected: bool) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.class_contains(target, class_name)?;
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: format!("class {class_name} present: {expected}"),
                actual: format!("class {class_name} present: {actual}"),
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_disabled(&self, selector: &str, expected: bool) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.disabled(target);
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: format!("disabled: {expected}"),
                actual: format!("disabled: {actual}"),
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_exists(&self, selector: &str) -> Result<()> {
        if self.dom.query_selector(selector)?.is_none() {
            return Err(Error::SelectorNotFound(selector.to_string()));
        }
        Ok(())
    }

    pub fn dump_dom(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(self.dom.dump_node(target))
    }

    pub(crate) fn select_one(&self, selector: &str) -> Result<NodeId> {
        self.dom
            .query_selector(selector)?
            .ok_or_else(|| Error::SelectorNotFound(selector.to_string()))
    }

    fn node_snippet(&self, node_id: NodeId) -> String {
        truncate_chars(&self.dom.dump_node(node_id), 200)
    }

    fn resolve_form_for_submit(&self, target: NodeId) -> Option<NodeId> {
        if self
            .dom
            .tag_name(target)
            .map(|tag| tag.eq_ignore_ascii_case("form"))
            .unwrap_or(false)
        {
            return Some(target);
        }
        self.dom.find_ancestor_by_tag(target, "form")
    }

    fn uncheck_other_radios_in_group(&mut self, target: NodeId) -> Result<()> {
        let Some(name) = self.dom.attr(target, "name") else {
            return Ok(());
        };
        let scope = self
            .dom
            .find_ancestor_by_tag(target, "form")
            .unwrap_or(self.dom.root);

        let mut group = Vec::new();
        self.dom.collect_elements_dfs(scope, &mut group);
        for node in group {
            if node == target {
                continue;
            }
            if is_radio_input(&self.dom, node)
                && self.dom.attr(node, "name").as_deref() == Some(name.as_str())
            {
                self.dom.set_checked(node, false)?;
            }
        }
        Ok(())
    }

    pub(crate) fn scroll_into_view(&mut self, node: NodeId) {
        self.scrolls.push(node);
    }

    pub(crate) fn focus_node(&mut self, node: NodeId) -> Result<()> {
        if self.dom.disabled(node) {
            return Ok(());
        }
        if self.active_element == Some(node) {
            return Ok(());
        }

        if let Some(current) = self.active_element {
            self.blur_node(current)?;
        }

        self.active_element = Some(node);
        self.dispatch_event(node, "focusin")?;
        self.dispatch_event(node, "focus")?;
        Ok(())
    }

    pub(crate) fn blur_node(&mut self, node: NodeId) -> Result<()> {
        if self.active_element != Some(node) {
            return Ok(());
        }

        self.dispatch_event(node, "focusout")?;
        self.dispatch_event(node, "blur")?;
        self.active_element = None;
        Ok(())
    }

    pub(crate) fn dispatch_event(
        &mut self,
        target: NodeId,
        event_type: &str,
    ) -> Result<EventState> {
        let mut event = EventState::new(event_type, target);

        if !event_bubbles(event_type) {
            event.current_target = target;
            self.invoke_listeners(target, &mut event, true)?;
            if !event.propagation_stopped {
                self.invoke_listeners(target, &mut event, false)?;
            }
            self.trace_event_done(&event, "completed");
            return Ok(event);
        }

        let mut path = Vec::new();
        let mut cursor = Some(target);
        while let Some(node) = cursor {
            path.push(node);
            cursor = self.dom.parent(node);
        }
        path.reverse();

        if path.is_empty() {
            self.trace_event_done(&event, "empty_path");
            return Ok(event);
        }

        // Capture phase.
        if path.len() >= 2 {
            for node in &path[..path.len() - 1] {
                event.current_target = *node;
                self.invoke_listeners(*node, &mut event, true)?;
                if event.propagation_stopped {
                    self.trace_event_done(&event, "propagation_stopped");
                    return Ok(event);
                }
            }
        }

        // Target phase: capture listeners first.
        event.current_target = target;
        self.invoke_listeners(target, &mut event, true)?;
        if event.propagation_stopped {
            self.trace_event_done(&event, "propagation_stopped");
            return Ok(event);
        }

        // Target phase: bubble listeners.
        self.invoke_listeners(target, &mut event, false)?;
        if event.propagation_stopped {
            self.trace_event_done(&event, "propagation_stopped");
            return Ok(event);
        }

        // Bubble phase.
        if path.len() >= 2 {
            for node in path[..path.len() - 1].iter().rev() {
                event.current_target = *node;
                self.invoke_listeners(*node, &mut event, false)?;
                if event.propagation_stopped {
                    self.trace_event_done(&event, "propagation_stopped");
                    return Ok(event);
                }
            }
        }

        self.trace_event_done(&event, "completed");
        Ok(event)
    }

    fn invoke_listeners(
        &mut self,
        node_id: NodeId,
        event: &mut EventState,
        capture: bool,
    ) -> Result<()> {
        let listeners = self.listeners.get(node_id, &event.event_type, capture);
        for listener in listeners {
            if self.trace {
                let phase = if capture { "capture" } else { "bubble" };
                let target_label = self.trace_node_label(event.target);
                let current_label = self.trace_node_label(event.current_target);
                self.trace_event_line(format!(
                    "[event] {} target={} current={} phase={} default_prevented={}",
                    event.event_type, target_label, current_label, phase, event.default_prevented
                ));
            }
            (listener.handler)(self, event)?;
            if event.immediate_propagation_stopped {
                break;
            }
        }
        Ok(())
    }

    fn trace_event_done(&mut self, event: &EventState, outcome: &str) {
        if !(self.trace && self.trace_events) {
            return;
        }
        let target_label = self.trace_node_label(event.target);
        let current_label = self.trace_node_label(event.current_target);
        self.trace_event_line(format!(
            "[event] done {} target={} current={} outcome={} default_prevented={} propagation_stopped={}",
            event.event_type,
            target_label,
            current_label,
            outcome,
            event.default_prevented,
            event.propagation_stopped
        ));
    }

    fn trace_node_label(&self, node: NodeId) -> String {
        match self.dom.tag_name(node) {
            Some(tag) => match self.dom.attr(node, "id") {
                Some(id) => format!("{tag}#{id}"),
                None => tag,
            },
            None => "#document".into(),
        }
    }

    fn trace_event_line(&mut self, line: String) {
        if self.trace && self.trace_events {
            self.trace_line(line);
        }
    }

    pub(crate) fn trace_bind_line(&mut self, line: String) {
        if self.trace {
            self.trace_line(line);
        }
    }

    fn trace_line(&mut self, line: String) {
        if self.trace_to_stderr {
            eprintln!("{line}");
        }
        self.trace_logs.push(line);
        while self.trace_logs.len() > self.trace_log_limit {
            self.trace_logs.remove(0);
        }
    }
}

fn is_checkbox_input(dom: &Dom, node_id: NodeId) -> bool {
    input_type(dom, node_id).as_deref() == Some("checkbox")
}

fn is_radio_input(dom: &Dom, node_id: NodeId) -> bool {
    input_type(dom, node_id).as_deref() == Some("radio")
}

fn input_type(dom: &Dom, node_id: NodeId) -> Option<String> {
    let tag = dom.tag_name(node_id)?;
    if !tag.eq_ignore_ascii_case("input") {
        return None;
    }
    Some(
        dom.attr(node_id, "type")
            .unwrap_or_else(|| "text".into())
            .to_ascii_lowercase(),
    )
}

fn is_submit_control(dom: &Dom, node_id: NodeId) -> bool {
    let Some(tag) = dom.tag_name(node_id) else {
        return false;
    };
    if tag.eq_ignore_ascii_case("button") {
        let kind = dom
            .attr(node_id, "type")
            .unwrap_or_else(|| "submit".into())
            .to_ascii_lowercase();
        return kind == "submit";
    }
    if tag.eq_ignore_ascii_case("input") {
        let kind = dom
            .attr(node_id, "type")
            .unwrap_or_else(|| "text".into())
            .to_ascii_lowercase();
        return kind == "submit" || kind == "image";
    }
    false
}
