use super::*;
use std::cell::RefCell;
use std::rc::Rc;

const BUBBLE_CLASS: &str = "tooltip";

pub struct Tooltip;

impl Tooltip {
    pub fn attach(page: &mut Page, selector: &str) -> Result<usize> {
        let triggers = page.dom.query_selector_all(selector)?;
        for trigger in &triggers {
            Self::attach_node(page, *trigger);
        }
        Ok(triggers.len())
    }

    pub(crate) fn attach_node(page: &mut Page, trigger: NodeId) {
        let bubble: Rc<RefCell<Option<NodeId>>> = Rc::new(RefCell::new(None));

        let show: Handler = {
            let bubble = Rc::clone(&bubble);
            Rc::new(move |page: &mut Page, _: &mut EventState| {
                if bubble.borrow().is_some() {
                    return Ok(());
                }
                let title = page
                    .dom
                    .attr(trigger, "data-title")
                    .or_else(|| page.dom.attr(trigger, "title"))
                    .unwrap_or_default();
                if title.is_empty() {
                    return Ok(());
                }

                let node = page.dom.create_detached_element("div");
                page.dom.set_attr(node, "class", BUBBLE_CLASS)?;
                page.dom.set_attr(node, "role", "tooltip")?;
                page.dom.set_text_content(node, &title)?;
                let root = page.dom.root;
                page.dom.append_child(root, node)?;
                *bubble.borrow_mut() = Some(node);
                Ok(())
            })
        };

        let hide: Handler = {
            let bubble = Rc::clone(&bubble);
            Rc::new(move |page: &mut Page, _: &mut EventState| {
                if let Some(node) = bubble.borrow_mut().take() {
                    page.dom.remove_node(node)?;
                }
                Ok(())
            })
        };

        page.on_node(trigger, "mouseenter", Rc::clone(&show));
        page.on_node(trigger, "focus", show);
        page.on_node(trigger, "mouseleave", Rc::clone(&hide));
        page.on_node(trigger, "blur", hide);
    }
}
