//! Document helpers shared by the site extractors.
//!
//! The structural walks ("label text → parent → next sibling") live here as
//! named functions returning `Option`, so each one can be tested against a
//! fixture on its own.

use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose text never counts as visible page text.
const HIDDEN_TEXT_TAGS: [&str; 3] = ["script", "style", "template"];

/// Elements the HTML parser keeps as one raw text node. Their content is
/// markup, so only the text inside that markup counts.
const RAW_TEXT_TAGS: [&str; 5] = ["noscript", "iframe", "noembed", "noframes", "xmp"];

fn is_element_in(node: &Node, tags: &[&str]) -> bool {
    node.as_element().is_some_and(|el| tags.contains(&el.name()))
}

/// All visible text of the document, in document order, without separators.
pub fn visible_text(doc: &Html) -> String {
    let mut out = String::new();
    push_visible_text(doc, &mut out);
    out
}

fn push_visible_text(doc: &Html, out: &mut String) {
    for node in doc.tree.root().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        if node
            .ancestors()
            .any(|a| is_element_in(a.value(), &HIDDEN_TEXT_TAGS))
        {
            continue;
        }
        let raw = node
            .parent()
            .is_some_and(|p| is_element_in(p.value(), &RAW_TEXT_TAGS));
        if raw {
            push_visible_text(&Html::parse_fragment(text), out);
        } else {
            out.push_str(text);
        }
    }
}

/// Text of an element with every text node trimmed and empty pieces dropped,
/// joined with `sep`.
pub fn stripped_text(el: ElementRef<'_>, sep: &str) -> String {
    el.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// The element's only string: its sole child when that child is text, or the
/// only string of its sole child element. Mixed content has none.
pub fn single_string<'a>(el: ElementRef<'a>) -> Option<&'a str> {
    let mut children = el.children();
    let only = children.next()?;
    if children.next().is_some() {
        return None;
    }
    match only.value() {
        Node::Text(text) => Some(&**text),
        Node::Element(_) => ElementRef::wrap(only).and_then(single_string),
        _ => None,
    }
}

pub fn first<'a>(doc: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    doc.select(selector).next()
}

/// First element matching `selector` whose single string matches `pattern`.
pub fn find_by_own_text<'a>(
    doc: &'a Html,
    selector: &Selector,
    pattern: &Regex,
) -> Option<ElementRef<'a>> {
    doc.select(selector)
        .find(|el| single_string(*el).is_some_and(|s| pattern.is_match(s)))
}

pub fn parent_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}

pub fn next_sibling_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// Find the first text node matching `label`, step up to the element holding it
/// and return that element's next sibling element.
///
/// Purely positional: the value is wherever the markup puts the next element.
pub fn value_after_label<'a>(doc: &'a Html, label: &Regex) -> Option<ElementRef<'a>> {
    let text_node = doc.tree.root().descendants().find(|node| {
        node.value()
            .as_text()
            .is_some_and(|text| label.is_match(text))
    })?;
    let holder = text_node.parent().and_then(ElementRef::wrap)?;
    next_sibling_element(holder)
}

/// Element labelled `label` (matched against the label's own string) →
/// its parent → the parent's next sibling → first `target` inside it.
pub fn nested_value_after_label<'a>(
    doc: &'a Html,
    label_selector: &Selector,
    label: &Regex,
    target: &Selector,
) -> Option<ElementRef<'a>> {
    let label_el = find_by_own_text(doc, label_selector, label)?;
    let parent = parent_element(label_el)?;
    let value_block = next_sibling_element(parent)?;
    value_block.select(target).next()
}
