use crate::config::SelectorConfig;
use crate::pipeline::extract;
use scraper::Html;
use url::Url;

#[cfg(test)]
mod block_filtering_tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.google.com/").unwrap()
    }

    fn result_block(href: &str, headline: &str, description: &str) -> String {
        format!(
            "<div><div><div><a href=\"{href}\"><h3><div>{headline}</div></h3><div>site</div></a></div>\
             <div><div><div>{description}</div></div></div></div></div>"
        )
    }

    fn page(blocks: &[String]) -> Html {
        Html::parse_document(&format!(
            "<html><body><div id=\"main\">{}</div></body></html>",
            blocks.concat()
        ))
    }

    #[test]
    fn test_output_follows_document_order() {
        let doc = page(&[
            result_block("/url?q=https://one.example", "One", "First description."),
            "<div><div><a href=\"/url?q=https://broken.example\"><h3>Broken</h3></a><div><a href=\"#\">only links</a></div></div></div>".to_string(),
            result_block("/url?q=https://two.example", "Two", "Second description."),
            result_block("/url?q=https://three.example", "Three", "Third description."),
        ]);
        let selectors = SelectorConfig::default().compile().unwrap();

        let extraction = extract(&doc, &selectors, &base()).unwrap();
        let headlines: Vec<_> = extraction
            .collection
            .results
            .iter()
            .map(|r| r.headline.as_str())
            .collect();

        assert_eq!(headlines, vec!["One", "Two", "Three"]);
        assert_eq!(extraction.preview.len(), 3);
    }

    #[test]
    fn test_block_without_headline_is_dropped() {
        let doc = page(&[
            "<div><div><a href=\"/url?q=https://nohead.example\">No heading</a><p>Some text.</p></div></div>".to_string(),
            result_block("/url?q=https://kept.example", "Kept", "Kept description."),
        ]);
        let selectors = SelectorConfig::default().compile().unwrap();

        let extraction = extract(&doc, &selectors, &base()).unwrap();
        assert_eq!(extraction.collection.len(), 1);
        assert_eq!(extraction.collection.results[0].link, "https://kept.example");
    }

    #[test]
    fn test_non_matching_container_children_are_ignored() {
        let doc = page(&[
            "<footer><a href=\"/url?q=https://footer.example\"><h3>Footer</h3></a><p>Footer text.</p></footer>".to_string(),
            result_block("/url?q=https://kept.example", "Kept", "Kept description."),
        ]);
        let selectors = SelectorConfig::default().compile().unwrap();

        let extraction = extract(&doc, &selectors, &base()).unwrap();
        assert_eq!(extraction.collection.len(), 1);
        assert_eq!(extraction.collection.results[0].headline, "Kept");
    }

    #[test]
    fn test_relative_links_are_made_absolute() {
        let doc = page(&[result_block("/search?q=related", "Related", "Related searches.")]);
        let selectors = SelectorConfig::default().compile().unwrap();

        let extraction = extract(&doc, &selectors, &base()).unwrap();
        assert_eq!(
            extraction.collection.results[0].link,
            "https://www.google.com/search?q=related"
        );
    }

    #[test]
    fn test_preview_has_normalized_links_only_for_kept_blocks() {
        let doc = page(&[
            result_block("/url?q=https://kept.example", "Kept", "Kept description."),
            "<div><a href=\"/url?q=https://gone.example\"><h3>Gone</h3></a></div>".to_string(),
        ]);
        let selectors = SelectorConfig::default().compile().unwrap();

        let extraction = extract(&doc, &selectors, &base()).unwrap();
        assert_eq!(extraction.preview.len(), 1);
        assert!(extraction.preview[0].contains("href=\"https://kept.example\""));
        assert!(!extraction.preview[0].contains("/url?q="));
        assert!(extraction.preview.iter().all(|p| !p.contains("Gone")));
    }

    #[test]
    fn test_custom_container_selector() {
        let doc = Html::parse_document(&format!(
            "<html><body><section id=\"results\">{}</section><div id=\"main\"></div></body></html>",
            result_block("/url?q=https://custom.example", "Custom", "Custom description.")
        ));
        let selectors = SelectorConfig {
            container: "#results".to_string(),
            ..SelectorConfig::default()
        }
        .compile()
        .unwrap();

        let extraction = extract(&doc, &selectors, &base()).unwrap();
        assert_eq!(extraction.collection.len(), 1);
        assert_eq!(extraction.collection.results[0].link, "https://custom.example");
    }

    #[test]
    fn test_each_run_starts_empty() {
        let doc = page(&[result_block("/url?q=https://once.example", "Once", "Only once.")]);
        let selectors = SelectorConfig::default().compile().unwrap();

        let first = extract(&doc, &selectors, &base()).unwrap();
        let second = extract(&doc, &selectors, &base()).unwrap();
        assert_eq!(first.collection, second.collection);
        assert_eq!(second.collection.len(), 1);
    }
}
