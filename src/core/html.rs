// src/core/html.rs
// Small helpers over `scraper` for reading text and links out of known blocks.

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;

/// Element text with whitespace collapsed.
pub fn text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Element text, only trimmed. Commentary offsets depend on inner spacing.
pub fn raw_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

pub fn texts(root: ElementRef<'_>, sel: &Selector) -> Vec<String> {
    root.select(sel).map(text).collect()
}

pub fn first_text(root: ElementRef<'_>, sel: &Selector) -> Option<String> {
    root.select(sel).next().map(text)
}

pub fn href<'a>(el: ElementRef<'a>) -> Option<&'a str> {
    el.value().attr("href")
}

/// `https://…/jogador/_/id/123/nome` with prefix `https://…/jogador/_/id/` → `123`
pub fn id_from_href(href: &str, prefix: &str) -> String {
    let rest = href.replace(prefix, "");
    rest.split('/').next().unwrap_or_default().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn text_collapses_whitespace() {
        let doc = Html::parse_fragment("<div class=x>  Allianz \n  <b>Parque</b> </div>");
        let sel = Selector::parse("div.x").unwrap();
        assert_eq!(first_text(doc.root_element(), &sel).as_deref(), Some("Allianz Parque"));
    }

    #[test]
    fn ids_are_trimmed_at_next_segment() {
        let p = "https://www.espn.com.br/futebol/jogador/_/id/";
        assert_eq!(id_from_href("https://www.espn.com.br/futebol/jogador/_/id/229016/raphael-veiga", p), "229016");
        assert_eq!(id_from_href("https://www.espn.com.br/futebol/jogador/_/id/229016", p), "229016");
        assert_eq!(id_from_href("/futebol/time/_/id/2029/palmeiras", "/futebol/time/_/id/"), "2029");
    }
}
