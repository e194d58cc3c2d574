use gloo::console;
use pullcord_core::{SiteConfig, CONFIG_ELEMENT_ID};
use web_sys::Document;

/// Reads the inline JSON config block, falling back to defaults when it is
/// absent or unusable.
pub fn load_site_config(document: &Document) -> SiteConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return SiteConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return SiteConfig::default();
    }
    match SiteConfig::from_json(&raw) {
        Ok(config) => {
            console::log!("config: loaded from", format!("#{CONFIG_ELEMENT_ID}"));
            config
        }
        Err(err) => {
            console::warn!("config: using defaults", err.to_string());
            SiteConfig::default()
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn with_config_block<F: FnOnce(&Document)>(raw: &str, check: F) {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let script = document.create_element("script").expect("create script");
        script.set_id(CONFIG_ELEMENT_ID);
        script
            .set_attribute("type", "application/json")
            .expect("set type");
        script.set_text_content(Some(raw));
        document
            .body()
            .expect("body available")
            .append_child(&script)
            .expect("append script");
        check(&document);
        script.remove();
    }

    #[wasm_bindgen_test]
    fn inline_block_overrides_defaults() {
        with_config_block(r#"{"gallery": {"page_id": "photos"}}"#, |document| {
            let config = load_site_config(document);
            assert_eq!(config.gallery.page_id, "photos");
            assert_eq!(config.theme, SiteConfig::default().theme);
        });
    }

    #[wasm_bindgen_test]
    fn invalid_block_falls_back() {
        with_config_block(r#"{"eyes": {"distance_scale": 0}}"#, |document| {
            assert_eq!(load_site_config(document), SiteConfig::default());
        });
    }
}
