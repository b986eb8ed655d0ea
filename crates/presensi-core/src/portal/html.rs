//! Markup extraction for SSO forms and portal pages.
//!
//! Everything here is synchronous and returns owned data: `scraper::Html` is not
//! `Send`, so a parsed document must never live across an `.await`.

use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;
use tracing::warn;

use crate::metrics;

pub const AUTH_STATE_FIELD: &str = "AuthState";
pub const SAML_RESPONSE_FIELD: &str = "SAMLResponse";

static AUTH_STATE_INPUT: OnceLock<Selector> = OnceLock::new();
static SAML_RESPONSE_INPUT: OnceLock<Selector> = OnceLock::new();
static SESSION_BLOCK: OnceLock<Selector> = OnceLock::new();
static PARAGRAPH: OnceLock<Selector> = OnceLock::new();
static SMALL: OnceLock<Selector> = OnceLock::new();
static ANCHOR: OnceLock<Selector> = OnceLock::new();
static BLOCK_ANCHOR: OnceLock<Selector> = OnceLock::new();

fn selector(cell: &'static OnceLock<Selector>, css: &'static str) -> &'static Selector {
    cell.get_or_init(|| Selector::parse(css).expect("static selector is valid"))
}

/// One `div[style]` entry of the overview page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionBlock {
    pub course_name: String,
    pub time_slot: String,
    pub lecturer_name: String,
    /// `href` of the block's first link; present only for pending sessions
    pub detail_href: Option<String>,
}

/// `value` of the login form's `AuthState` input.
pub fn auth_state(html: &str) -> Option<String> {
    input_value(html, selector(&AUTH_STATE_INPUT, "input[name='AuthState']"))
}

/// `value` of the SSO hand-off form's `SAMLResponse` input.
pub fn saml_response(html: &str) -> Option<String> {
    input_value(html, selector(&SAML_RESPONSE_INPUT, "input[name='SAMLResponse']"))
}

fn input_value(html: &str, input: &Selector) -> Option<String> {
    let document = Html::parse_document(html);
    document
        .select(input)
        .next()
        .and_then(|el| el.value().attr("value"))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Every session block of the overview page, in document order.
///
/// Missing sub-elements become empty strings; each one is logged and counted so
/// that markup drift on the portal shows up in metrics rather than silently.
pub fn session_blocks(html: &str) -> Vec<SessionBlock> {
    let document = Html::parse_document(html);
    document
        .select(selector(&SESSION_BLOCK, "div[style]"))
        .enumerate()
        .map(|(index, block)| read_block(index, block))
        .collect()
}

fn read_block(index: usize, block: ElementRef<'_>) -> SessionBlock {
    let paragraph = selector(&PARAGRAPH, "p");
    let small = selector(&SMALL, "small");
    let anchor = selector(&ANCHOR, "a");

    let course_name = block.select(paragraph).next().map(element_text);
    let time_slot = block.select(small).next().map(element_text);
    let lecturer_name = block.select(small).last().map(element_text);
    let detail_href = block
        .select(anchor)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string);

    SessionBlock {
        course_name: or_blank(index, "namaMatkul", course_name),
        time_slot: or_blank(index, "waktuMatkul", time_slot),
        lecturer_name: or_blank(index, "namaDosen", lecturer_name),
        detail_href,
    }
}

/// `href` of the first link inside a `div[style]` of a detail page.
pub fn detail_action_href(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    document
        .select(selector(&BLOCK_ANCHOR, "div[style] a"))
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string)
}

/// Prefix a portal-relative `href` with `origin`.
///
/// Absolute hrefs are returned untouched and protocol-relative ones (`//host/...`)
/// take the origin's scheme, so neither gets the origin prepended.
pub fn join_origin(origin: &str, href: &str) -> String {
    if url::Url::parse(href).is_ok() {
        return href.to_string();
    }
    if href.starts_with("//") {
        if let Ok(joined) = url::Url::parse(origin).and_then(|base| base.join(href)) {
            return joined.to_string();
        }
    }
    format!("{origin}{href}")
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn or_blank(index: usize, field: &'static str, value: Option<String>) -> String {
    value.unwrap_or_else(|| {
        warn!(block = index, field, "session block has no element for field, using empty string");
        metrics::record_blank_field(field);
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const OVERVIEW: &str = r#"
        <html><body>
          <div class="container">
            <div style="margin: 4px">
              <p> Basis Data </p>
              <small>13:00 - 15:30</small>
              <small>Ir. Sari</small>
              <a href="/presensi-online-mahasiswa/kuliah/77">Presensi</a>
            </div>
            <div style="margin: 4px">
              <p>Sistem Operasi</p>
              <small> 07:30 - 10:00 </small>
              <small>  Dr. Wibowo
              </small>
            </div>
          </div>
        </body></html>
    "#;

    #[test]
    fn test_auth_state_is_extracted() {
        let html = r#"<form><input type="hidden" name="AuthState" value="_abc:123"></form>"#;
        assert_eq!(auth_state(html).as_deref(), Some("_abc:123"));
    }

    #[test]
    fn test_missing_or_empty_form_value_is_none() {
        assert_eq!(auth_state("<form><input name='username'></form>"), None);
        assert_eq!(saml_response(r#"<input name="SAMLResponse" value="">"#), None);
    }

    #[test]
    fn test_saml_response_is_extracted() {
        let html = r#"<form method="post"><input type="hidden" name="SAMLResponse" value="PHNhbWw+"/></form>"#;
        assert_eq!(saml_response(html).as_deref(), Some("PHNhbWw+"));
    }

    #[test]
    fn test_session_blocks_in_document_order() {
        let blocks = session_blocks(OVERVIEW);
        assert_eq!(blocks.len(), 2);

        assert_eq!(blocks[0].course_name, "Basis Data");
        assert_eq!(blocks[0].time_slot, "13:00 - 15:30");
        assert_eq!(blocks[0].lecturer_name, "Ir. Sari");
        assert_eq!(
            blocks[0].detail_href.as_deref(),
            Some("/presensi-online-mahasiswa/kuliah/77")
        );

        assert_eq!(blocks[1].course_name, "Sistem Operasi");
        assert_eq!(blocks[1].time_slot, "07:30 - 10:00");
        assert_eq!(blocks[1].lecturer_name, "Dr. Wibowo");
        assert_eq!(blocks[1].detail_href, None);
    }

    #[test]
    fn test_single_small_fills_time_and_lecturer() {
        let blocks = session_blocks(r#"<div style="x"><p>Kalkulus</p><small>08:00</small></div>"#);
        assert_eq!(blocks[0].time_slot, "08:00");
        assert_eq!(blocks[0].lecturer_name, "08:00");
    }

    #[test]
    fn test_empty_block_yields_blank_fields() {
        let blocks = session_blocks(r#"<div style="color: red"></div>"#);
        assert_eq!(blocks, vec![SessionBlock::default()]);
    }

    #[test]
    fn test_blank_fields_are_counted_by_field() {
        let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        ::metrics::with_local_recorder(&recorder, || {
            session_blocks(r#"<div style="x"></div><div style="y"><p>Kimia</p></div>"#)
        });

        let rendered = handle.render();
        assert!(rendered.contains(r#"presensi_blank_fields_total{field="namaMatkul"} 1"#));
        assert!(rendered.contains(r#"presensi_blank_fields_total{field="waktuMatkul"} 2"#));
        assert!(rendered.contains(r#"presensi_blank_fields_total{field="namaDosen"} 2"#));
    }

    #[test]
    fn test_unstyled_divs_are_ignored() {
        let blocks = session_blocks("<div><p>Header</p><a href='/x'>x</a></div>");
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_anchor_without_href_is_not_a_link() {
        let blocks = session_blocks(r#"<div style="x"><p>Fisika</p><a name="top">top</a></div>"#);
        assert_eq!(blocks[0].detail_href, None);
    }

    #[test]
    fn test_detail_action_href() {
        let html = r#"
            <a href="/logout">Keluar</a>
            <div style="padding: 8px"><a href="/presensi/submit/42">Isi presensi</a></div>
            <div style="padding: 8px"><a href="/presensi/submit/43">Lain</a></div>
        "#;
        assert_eq!(detail_action_href(html).as_deref(), Some("/presensi/submit/42"));
        assert_eq!(detail_action_href("<div style='x'>Tidak ada</div>"), None);
    }

    #[test]
    fn test_join_origin() {
        let origin = "https://ocw.uns.ac.id";
        assert_eq!(join_origin(origin, "/presensi/1"), "https://ocw.uns.ac.id/presensi/1");
        assert_eq!(join_origin(origin, ""), "https://ocw.uns.ac.id");
        assert_eq!(
            join_origin(origin, "https://ocw.uns.ac.id/presensi/1"),
            "https://ocw.uns.ac.id/presensi/1"
        );
        assert_eq!(join_origin(origin, "//cdn.example/x"), "https://cdn.example/x");
    }
}
