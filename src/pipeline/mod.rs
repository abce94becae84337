pub mod locator;

#[cfg(test)]
mod tests;

use crate::config::CompiledSelectors;
use crate::dom;
use crate::error::Result;
use crate::links;
use crate::results::{ResultCollection, ResultRecord};
use scraper::{ElementRef, Html};
use url::Url;

/// Output of one extraction run
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Valid records in document order
    pub collection: ResultCollection,
    /// Markup of every block that produced a record, links normalized
    pub preview: Vec<String>,
}

/// The three anchors of a result block, before validation
struct BlockParts<'a> {
    headline: Option<ElementRef<'a>>,
    anchor: Option<ElementRef<'a>>,
    description: Option<ElementRef<'a>>,
}

/// Extracts result records from every candidate block in `document`.
///
/// Blocks missing a headline, a main link or a description are skipped. The
/// document is only read, so blocks are visited in document order and the
/// collection comes out in that order.
pub fn extract(document: &Html, selectors: &CompiledSelectors, base: &Url) -> Result<Extraction> {
    let container = document
        .select(&selectors.container)
        .next()
        .unwrap_or_else(|| {
            ::log::debug!("Results container not found, using the document root");
            document.root_element()
        });

    let blocks: Vec<_> = dom::child_elements(container)
        .into_iter()
        .filter(|child| selectors.block.matches(child))
        .collect();
    ::log::debug!("Found {} candidate result block(s)", blocks.len());

    let mut extraction = Extraction::default();

    for (index, block) in blocks.into_iter().enumerate() {
        let parts = locate_parts(block, selectors)?;

        let headline = parts
            .headline
            .map(dom::rendered_text)
            .filter(|t| !t.is_empty());
        let link = parts
            .anchor
            .and_then(|a| a.value().attr("href"))
            .and_then(|href| links::resolve_link(href, base));
        let description = parts.description.map(dom::rendered_text);

        let missing = [
            ("headline", headline.is_none()),
            ("link", link.is_none()),
            ("description", description.is_none()),
        ]
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(field, _)| *field)
        .collect::<Vec<_>>();

        match ResultRecord::new(headline, link, description) {
            Some(record) => {
                ::log::trace!("Block {} yielded: {}", index, record.headline);
                extraction.preview.push(links::rewrite_hrefs(&block.html()));
                extraction.collection.push(record);
            }
            None => {
                ::log::debug!("Dropping block {} (missing {})", index, missing.join(", "));
            }
        }
    }

    ::log::info!(
        "Extracted {} result(s) from the page",
        extraction.collection.len()
    );
    Ok(extraction)
}

/// Looks up the headline link directly and the description heuristically
fn locate_parts<'a>(block: ElementRef<'a>, selectors: &CompiledSelectors) -> Result<BlockParts<'a>> {
    let main = block.select(&selectors.anchor).find_map(|anchor| {
        anchor
            .select(&selectors.headline)
            .next()
            .map(|headline| (anchor, headline))
    });

    let Some((anchor, headline)) = main else {
        return Ok(BlockParts {
            headline: None,
            anchor: None,
            description: None,
        });
    };

    let description = locator::locate(block, anchor)?;

    Ok(BlockParts {
        headline: Some(headline),
        anchor: Some(anchor),
        description,
    })
}
