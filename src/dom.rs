//! Small pure predicates over the parsed markup tree.
//!
//! Nothing here keeps state, so the locator's recursion can be tested
//! against any fragment in isolation.

use scraper::ElementRef;

/// Direct element children in document order (text and comment nodes skipped)
pub fn child_elements<'a>(node: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    node.children().filter_map(ElementRef::wrap).collect()
}

/// Number of direct element children
pub fn child_element_count(node: ElementRef<'_>) -> usize {
    node.children().filter_map(ElementRef::wrap).count()
}

/// Parent of `node` if that parent is an element.
///
/// The document node sitting above `<html>` is not an element, so reaching it
/// reads as "no parent".
pub fn parent_element<'a>(node: ElementRef<'a>) -> Option<ElementRef<'a>> {
    node.parent().and_then(ElementRef::wrap)
}

/// All descendant text concatenated, whitespace collapsed and trimmed
pub fn rendered_text(node: ElementRef<'_>) -> String {
    node.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether the node renders any non-whitespace text
pub fn has_text(node: ElementRef<'_>) -> bool {
    node.text().any(|t| !t.trim().is_empty())
}

/// Whether the node is, or contains, a hyperlink
pub fn contains_link(node: ElementRef<'_>) -> bool {
    node.descendants()
        .filter_map(ElementRef::wrap)
        .any(|el| el.value().name() == "a")
}

/// Whether `target` is `node` itself or sits somewhere below it
pub fn contains_node(node: ElementRef<'_>, target: ElementRef<'_>) -> bool {
    node.id() == target.id() || target.ancestors().any(|a| a.id() == node.id())
}

/// Whether two references point at the same node
pub fn same_node(a: ElementRef<'_>, b: ElementRef<'_>) -> bool {
    a.id() == b.id()
}
