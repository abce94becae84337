//! Finds a result's description without relying on class names.
//!
//! The only fixed points are the result block itself and its headline link.
//! Starting at the link, the search zooms out one branching level at a time
//! and looks for a sibling branch that holds plain prose (text without links).

use crate::dom;
use crate::error::{ExtractError, Result};
use scraper::ElementRef;

/// Walks up from `node` to the nearest ancestor with more than one element child.
///
/// `root` is a hard stop: it is returned when it branches, and the search ends
/// (`Ok(None)`) when the walk reaches a non-branching root. A `node` outside
/// `root`'s subtree is a caller bug and is reported as detached.
pub fn widen<'a>(node: ElementRef<'a>, root: ElementRef<'a>) -> Result<Option<ElementRef<'a>>> {
    if !dom::contains_node(root, node) {
        return Err(ExtractError::DetachedNode {
            tag: node.value().name().to_string(),
        });
    }

    let mut current = node;
    loop {
        if dom::same_node(current, root) {
            if dom::child_element_count(root) > 1 {
                return Ok(Some(root));
            }
            return Ok(None);
        }

        // `node` is under `root`, so every step below root has an element parent
        let Some(candidate) = dom::parent_element(current) else {
            return Err(ExtractError::DetachedNode {
                tag: node.value().name().to_string(),
            });
        };

        if dom::child_element_count(candidate) > 1 {
            return Ok(Some(candidate));
        }
        current = candidate;
    }
}

/// Direct children of `scope` that render text, minus the branch holding `anchor`.
pub fn collect_text_siblings<'a>(scope: ElementRef<'a>, anchor: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    dom::child_elements(scope)
        .into_iter()
        .filter(|child| !dom::contains_node(*child, anchor))
        .filter(|child| dom::has_text(*child))
        .collect()
}

/// Picks the description candidate among `candidates`.
///
/// A link-free node with text is taken as is. A node with text that also holds
/// a link is searched through its children instead. Later qualifying
/// candidates replace earlier ones.
///
/// Last-wins means the answer is the first hit of a depth-first walk run from
/// the back, so the walk uses an explicit stack and stops there. Nesting depth
/// of the markup does not grow the call stack.
pub fn select_favored<'a>(candidates: &[ElementRef<'a>]) -> Option<ElementRef<'a>> {
    let mut pending: Vec<ElementRef<'a>> = candidates.to_vec();

    while let Some(candidate) = pending.pop() {
        if !dom::has_text(candidate) {
            continue;
        }

        if !dom::contains_link(candidate) {
            return Some(candidate);
        }

        // a bare link has no children and drops out here
        pending.extend(dom::child_elements(candidate));
    }

    None
}

/// Locates the description node of the result block `root`, given its main link.
///
/// Returns `Ok(None)` when the whole block was scanned without finding prose.
pub fn locate<'a>(root: ElementRef<'a>, anchor: ElementRef<'a>) -> Result<Option<ElementRef<'a>>> {
    locate_with_levels(root, anchor).map(|(found, _)| found)
}

/// [`locate`], also reporting how many scopes were scanned
fn locate_with_levels<'a>(
    root: ElementRef<'a>,
    anchor: ElementRef<'a>,
) -> Result<(Option<ElementRef<'a>>, usize)> {
    let mut current = anchor;
    let mut level = 0usize;

    loop {
        let Some(scope) = widen(current, root)? else {
            ::log::debug!("Description search failed: block root does not branch");
            return Ok((None, level));
        };
        level += 1;

        let siblings = collect_text_siblings(scope, anchor);
        ::log::trace!(
            "Scanning <{}> at level {}: {} text sibling(s)",
            scope.value().name(),
            level,
            siblings.len()
        );

        if let Some(found) = select_favored(&siblings) {
            ::log::debug!(
                "Description found in <{}> after {} level(s)",
                found.value().name(),
                level
            );
            return Ok((Some(found), level));
        }

        if dom::same_node(scope, root) {
            ::log::debug!("Description search failed: block root exhausted");
            return Ok((None, level));
        }
        current = scope;
    }
}
