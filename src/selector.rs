use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SelectorAttrCondition {
    Exists { key: String },
    Eq { key: String, value: String },
    StartsWith { key: String, value: String },
    EndsWith { key: String, value: String },
    Contains { key: String, value: String },
    Includes { key: String, value: String },
    DashMatch { key: String, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SelectorStep {
    pub(crate) tag: Option<String>,
    pub(crate) universal: bool,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attrs: Vec<SelectorAttrCondition>,
}

impl SelectorStep {
    pub(crate) fn id_only(&self) -> Option<&str> {
        if !self.universal && self.tag.is_none() && self.classes.is_empty() && self.attrs.is_empty()
        {
            self.id.as_deref()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SelectorCombinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SelectorPart {
    pub(crate) step: SelectorStep,
    // Relation to previous (left) selector part.
    pub(crate) combinator: Option<SelectorCombinator>,
}

pub(crate) fn parse_selector_groups(selector: &str) -> Result<Vec<Vec<SelectorPart>>> {
    let mut groups = Vec::new();
    for group in split_top_level_commas(selector)? {
        groups.push(parse_selector_chain(&group)?);
    }
    if groups.is_empty() {
        return Err(Error::UnsupportedSelector(selector.into()));
    }
    Ok(groups)
}

fn split_top_level_commas(selector: &str) -> Result<Vec<String>> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut bracket_depth = 0usize;
    let mut quote: Option<char> = None;

    for ch in selector.chars() {
        match (quote, ch) {
            (Some(q), _) if ch == q => {
                quote = None;
                current.push(ch);
            }
            (Some(_), _) => current.push(ch),
            (None, '\'') | (None, '"') => {
                quote = Some(ch);
                current.push(ch);
            }
            (None, '[') => {
                bracket_depth += 1;
                current.push(ch);
            }
            (None, ']') => {
                bracket_depth = bracket_depth.saturating_sub(1);
                current.push(ch);
            }
            (None, ',') if bracket_depth == 0 => {
                if current.trim().is_empty() {
                    return Err(Error::UnsupportedSelector(selector.into()));
                }
                out.push(std::mem::take(&mut current));
            }
            (None, _) => current.push(ch),
        }
    }

    if quote.is_some() || bracket_depth != 0 || current.trim().is_empty() {
        return Err(Error::UnsupportedSelector(selector.into()));
    }
    out.push(current);
    Ok(out)
}

pub(crate) fn parse_selector_chain(selector: &str) -> Result<Vec<SelectorPart>> {
    let selector = selector.trim();
    if selector.is_empty() {
        return Err(Error::UnsupportedSelector(selector.into()));
    }

    let tokens = tokenize_selector(selector)?;
    let mut parts: Vec<SelectorPart> = Vec::new();
    let mut pending_combinator: Option<SelectorCombinator> = None;

    for token in tokens {
        if token == ">" || token == "+" || token == "~" {
            if token != ">" {
                return Err(Error::UnsupportedSelector(selector.into()));
            }
            if pending_combinator.is_some() || parts.is_empty() {
                return Err(Error::UnsupportedSelector(selector.into()));
            }
            pending_combinator = Some(SelectorCombinator::Child);
            continue;
        }

        let step = parse_selector_step(&token)?;
        let combinator = if parts.is_empty() {
            None
        } else {
            Some(
                pending_combinator
                    .take()
                    .unwrap_or(SelectorCombinator::Descendant),
            )
        };
        parts.push(SelectorPart { step, combinator });
    }

    if pending_combinator.is_some() || parts.is_empty() {
        return Err(Error::UnsupportedSelector(selector.into()));
    }
    Ok(parts)
}

fn tokenize_selector(selector: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut bracket_depth = 0usize;
    let mut quote: Option<char> = None;

    for ch in selector.chars() {
        match (quote, ch) {
            (Some(q), _) if ch == q => {
                quote = None;
                current.push(ch);
            }
            (Some(_), _) => current.push(ch),
            (None, '\'') | (None, '"') => {
                quote = Some(ch);
                current.push(ch);
            }
            (None, '[') => {
                bracket_depth += 1;
                current.push(ch);
            }
            (None, ']') => {
                bracket_depth = bracket_depth.saturating_sub(1);
                current.push(ch);
            }
            (None, '>') | (None, '+') | (None, '~') if bracket_depth == 0 => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                tokens.push(ch.to_string());
            }
            (None, _) if ch.is_whitespace() && bracket_depth == 0 => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            (None, _) => current.push(ch),
        }
    }

    if quote.is_some() || bracket_depth != 0 {
        return Err(Error::UnsupportedSelector(selector.into()));
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}

fn parse_selector_step(token: &str) -> Result<SelectorStep> {
    let mut step = SelectorStep::default();
    let chars = token.chars().collect::<Vec<_>>();
    let mut i = 0usize;

    if chars.get(i) == Some(&'*') {
        step.universal = true;
        i += 1;
    } else if matches!(chars.get(i), Some(ch) if is_name_char(*ch)) {
        let mut tag = String::new();
        while matches!(chars.get(i), Some(ch) if is_name_char(*ch)) {
            tag.push(chars[i]);
            i += 1;
        }
        step.tag = Some(tag.to_ascii_lowercase());
    }

    while i < chars.len() {
        match chars[i] {
            '#' => {
                i += 1;
                let mut id = String::new();
                while matches!(chars.get(i), Some(ch) if is_name_char(*ch)) {
                    id.push(chars[i]);
                    i += 1;
                }
                if id.is_empty() {
                    return Err(Error::UnsupportedSelector(token.into()));
                }
                step.id = Some(id);
            }
            '.' => {
                i += 1;
                let mut class = String::new();
                while matches!(chars.get(i), Some(ch) if is_name_char(*ch)) {
                    class.push(chars[i]);
                    i += 1;
                }
                if class.is_empty() {
                    return Err(Error::UnsupportedSelector(token.into()));
                }
                step.classes.push(class);
            }
            '[' => {
                let Some(close) = chars[i..].iter().position(|ch| *ch == ']') else {
                    return Err(Error::UnsupportedSelector(token.into()));
                };
                let inner = chars[i + 1..i + close].iter().collect::<String>();
                step.attrs.push(parse_attr_condition(&inner, token)?);
                i += close + 1;
            }
            _ => {
                return Err(Error::UnsupportedSelector(token.into()));
            }
        }
    }

    if !step.universal
        && step.tag.is_none()
        && step.id.is_none()
        && step.classes.is_empty()
        && step.attrs.is_empty()
    {
        return Err(Error::UnsupportedSelector(token.into()));
    }
    Ok(step)
}

fn parse_attr_condition(inner: &str, token: &str) -> Result<SelectorAttrCondition> {
    let inner = inner.trim();
    let Some(eq_pos) = inner.find('=') else {
        let key = inner.trim();
        if key.is_empty() || !key.chars().all(is_name_char) {
            return Err(Error::UnsupportedSelector(token.into()));
        }
        return Ok(SelectorAttrCondition::Exists {
            key: key.to_string(),
        });
    };

    let (raw_key, op) = match inner[..eq_pos].chars().last() {
        Some('^') => (&inner[..eq_pos - 1], '^'),
        Some('$') => (&inner[..eq_pos - 1], '$'),
        Some('*') => (&inner[..eq_pos - 1], '*'),
        Some('~') => (&inner[..eq_pos - 1], '~'),
        Some('|') => (&inner[..eq_pos - 1], '|'),
        _ => (&inner[..eq_pos], '='),
    };

    let key = raw_key.trim();
    if key.is_empty() || !key.chars().all(is_name_char) {
        return Err(Error::UnsupportedSelector(token.into()));
    }
    let key = key.to_string();

    let mut value = inner[eq_pos + 1..].trim();
    if (value.starts_with('"') && value.ends_with('"') && value.len() >= 2)
        || (value.starts_with('\'') && value.ends_with('\'') && value.len() >= 2)
    {
        value = &value[1..value.len() - 1];
    }
    let value = value.to_string();

    Ok(match op {
        '^' => SelectorAttrCondition::StartsWith { key, value },
        '$' => SelectorAttrCondition::EndsWith { key, value },
        '*' => SelectorAttrCondition::Contains { key, value },
        '~' => SelectorAttrCondition::Includes { key, value },
        '|' => SelectorAttrCondition::DashMatch { key, value },
        _ => SelectorAttrCondition::Eq { key, value },
    })
}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}

impl Dom {
    pub(crate) fn matches_selector_chain(&self, candidate: NodeId, parts: &[SelectorPart]) -> bool {
        let Some((last, prefix)) = parts.split_last() else {
            return false;
        };
        if !self.matches_selector_step(candidate, &last.step) {
            return false;
        }
        if prefix.is_empty() {
            return true;
        }

        match last.combinator.unwrap_or(SelectorCombinator::Descendant) {
            SelectorCombinator::Child => self
                .parent(candidate)
                .map(|parent| self.matches_selector_chain(parent, prefix))
                .unwrap_or(false),
            SelectorCombinator::Descendant => {
                let mut cursor = self.parent(candidate);
                while let Some(current) = cursor {
                    if self.matches_selector_chain(current, prefix) {
                        return true;
                    }
                    cursor = self.parent(current);
                }
                false
            }
        }
    }

    fn matches_selector_step(&self, node_id: NodeId, step: &SelectorStep) -> bool {
        let Some(element) = self.element(node_id) else {
            return false;
        };

        if let Some(tag) = &step.tag {
            if !element.tag_name.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &step.id {
            if element.attrs.get("id") != Some(id) {
                return false;
            }
        }
        for class in &step.classes {
            if !has_class(element, class) {
                return false;
            }
        }
        for condition in &step.attrs {
            if !matches_attr_condition(element, condition) {
                return false;
            }
        }
        true
    }
}

fn matches_attr_condition(element: &Element, condition: &SelectorAttrCondition) -> bool {
    match condition {
        SelectorAttrCondition::Exists { key } => element.attrs.contains_key(key),
        SelectorAttrCondition::Eq { key, value } => {
            element.attrs.get(key).map(String::as_str) == Some(value.as_str())
        }
        SelectorAttrCondition::StartsWith { key, value } => element
            .attrs
            .get(key)
            .map(|actual| !value.is_empty() && actual.starts_with(value))
            .unwrap_or(false),
        SelectorAttrCondition::EndsWith { key, value } => element
            .attrs
            .get(key)
            .map(|actual| !value.is_empty() && actual.ends_with(value))
            .unwrap_or(false),
        SelectorAttrCondition::Contains { key, value } => element
            .attrs
            .get(key)
            .map(|actual| !value.is_empty() && actual.contains(value))
            .unwrap_or(false),
        SelectorAttrCondition::Includes { key, value } => element
            .attrs
            .get(key)
            .map(|actual| actual.split_whitespace().any(|token| token == value))
            .unwrap_or(false),
        SelectorAttrCondition::DashMatch { key, value } => element
            .attrs
            .get(key)
            .map(|actual| actual == value || actual.starts_with(&format!("{value}-")))
            .unwrap_or(false),
    }
}
