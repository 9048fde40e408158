//! The selector subset the simulated DOM understands.
//!
//! Comma-separated compound selectors built from an optional tag (or `*`),
//! `.class`, `#id`, `[attr]`, `[attr="v"]` and `[attr^="v"]`. Combinators
//! and pseudo-classes are rejected.

use crate::error::SproutError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrOp {
    Exists,
    Equals(String),
    Prefix(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatch {
    name: String,
    op: AttrOp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

/// What a selector needs to know about an element.
pub(crate) trait Matchable {
    fn tag(&self) -> &str;
    fn has_class(&self, class: &str) -> bool;
    fn attr(&self, name: &str) -> Option<String>;
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SelectorList(Vec<Compound>);

impl SelectorList {
    pub(crate) fn parse(source: &str) -> Result<Self, SproutError> {
        let invalid = || SproutError::InvalidSelector(source.to_owned());
        let compounds = source
            .split(',')
            .map(|part| parse_compound(part.trim()).ok_or_else(invalid))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(compounds))
    }

    pub(crate) fn matches(&self, el: &impl Matchable) -> bool {
        self.0.iter().any(|c| c.matches(el))
    }
}

impl Compound {
    fn matches(&self, el: &impl Matchable) -> bool {
        if let Some(tag) = &self.tag {
            if !el.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.attr("id").as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|c| el.has_class(c))
            && self.attrs.iter().all(|a| {
                let value = el.attr(&a.name);
                match &a.op {
                    AttrOp::Exists => value.is_some(),
                    AttrOp::Equals(v) => value.as_deref() == Some(v.as_str()),
                    AttrOp::Prefix(p) => {
                        value.is_some_and(|value| value.starts_with(p.as_str()))
                    }
                }
            })
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !is_ident_char(c)).unwrap_or(s.len());
    s.split_at(end)
}

fn parse_compound(part: &str) -> Option<Compound> {
    let mut compound = Compound::default();
    let (tag, mut rest) = take_ident(part);
    let universal = if tag.is_empty() {
        if let Some(r) = rest.strip_prefix('*') {
            rest = r;
            true
        } else {
            false
        }
    } else {
        compound.tag = Some(tag.to_ascii_lowercase());
        false
    };

    while let Some(first) = rest.chars().next() {
        match first {
            '.' | '#' => {
                let (name, r) = take_ident(&rest[1..]);
                if name.is_empty() {
                    return None;
                }
                if first == '.' {
                    compound.classes.push(name.to_owned());
                } else {
                    compound.id = Some(name.to_owned());
                }
                rest = r;
            }
            '[' => {
                let end = rest.find(']')?;
                compound.attrs.push(parse_attr(&rest[1..end])?);
                rest = &rest[end + 1..];
            }
            _ => return None,
        }
    }

    if compound == Compound::default() && !universal {
        return None;
    }
    Some(compound)
}

fn parse_attr(inner: &str) -> Option<AttrMatch> {
    let (name, op) = if let Some((name, value)) = inner.split_once("^=") {
        (name, AttrOp::Prefix(unquote(value)?))
    } else if let Some((name, value)) = inner.split_once('=') {
        (name, AttrOp::Equals(unquote(value)?))
    } else {
        (inner, AttrOp::Exists)
    };
    let name = name.trim();
    let (ident, rest) = take_ident(name);
    if ident.is_empty() || !rest.is_empty() {
        return None;
    }
    Some(AttrMatch {
        name: ident.to_owned(),
        op,
    })
}

fn unquote(value: &str) -> Option<String> {
    let value = value.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return Some(inner.to_owned());
        }
    }
    let (ident, rest) = take_ident(value);
    (!ident.is_empty() && rest.is_empty()).then(|| ident.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct El {
        tag: &'static str,
        classes: &'static [&'static str],
        attrs: &'static [(&'static str, &'static str)],
    }

    impl Matchable for El {
        fn tag(&self) -> &str {
            self.tag
        }
        fn has_class(&self, class: &str) -> bool {
            self.classes.contains(&class)
        }
        fn attr(&self, name: &str) -> Option<String> {
            self.attrs
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| (*v).to_owned())
        }
    }

    const ANCHOR: El = El {
        tag: "a",
        classes: &["nav-link"],
        attrs: &[("href", "#impact"), ("id", "top")],
    };

    #[test]
    fn class_and_tag() {
        assert!(SelectorList::parse(".nav-link").unwrap().matches(&ANCHOR));
        assert!(SelectorList::parse("a.nav-link").unwrap().matches(&ANCHOR));
        assert!(!SelectorList::parse("div.nav-link").unwrap().matches(&ANCHOR));
        assert!(!SelectorList::parse(".card").unwrap().matches(&ANCHOR));
    }

    #[test]
    fn selector_lists_match_any() {
        let list = SelectorList::parse(".card, .nav-link").unwrap();
        assert!(list.matches(&ANCHOR));
    }

    #[test]
    fn attribute_forms() {
        assert!(SelectorList::parse(r##"a[href^="#"]"##).unwrap().matches(&ANCHOR));
        assert!(SelectorList::parse("[href='#impact']").unwrap().matches(&ANCHOR));
        assert!(SelectorList::parse("[href]").unwrap().matches(&ANCHOR));
        assert!(!SelectorList::parse("[src]").unwrap().matches(&ANCHOR));
        assert!(!SelectorList::parse(r#"[href^="http"]"#).unwrap().matches(&ANCHOR));
    }

    #[test]
    fn id_and_universal() {
        assert!(SelectorList::parse("#top").unwrap().matches(&ANCHOR));
        assert!(SelectorList::parse("*").unwrap().matches(&ANCHOR));
    }

    #[test]
    fn rejects_combinators_and_garbage() {
        for bad in [".a .b", "div > p", "a:hover", "", ".", "[", "a,"] {
            assert!(
                matches!(SelectorList::parse(bad), Err(SproutError::InvalidSelector(_))),
                "{bad:?}"
            );
        }
    }
}
