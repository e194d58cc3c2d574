//! Publishes the install report once setup finishes: a console line always, and
//! the report as a plain object to `window.__PULLCORD_BOOT(report)` when the
//! page defines that function.

use gloo::console;
use pullcord_core::InstallReport;
use wasm_bindgen::{JsCast, JsValue};

use crate::dom::js_detail;

const HOOK_NAME: &str = "__PULLCORD_BOOT";

pub(crate) fn announce(report: &InstallReport) {
    console::log!("pullcord:", report.summary());
    if let Err(err) = call_page_hook(report) {
        console::warn!("pullcord: boot hook failed", err);
    }
}

fn call_page_hook(report: &InstallReport) -> Result<(), String> {
    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let hook = js_sys::Reflect::get(&window, &JsValue::from_str(HOOK_NAME))
        .map_err(|err| js_detail(&err))?;
    let Some(hook) = hook.dyn_ref::<js_sys::Function>() else {
        return Ok(());
    };
    let json = serde_json::to_string(report).map_err(|err| err.to_string())?;
    let payload = js_sys::JSON::parse(&json).map_err(|err| js_detail(&err))?;
    hook.call1(&JsValue::NULL, &payload).map_err(|err| js_detail(&err))?;
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn set_hook(source: Option<&str>) {
        let window = web_sys::window().expect("window");
        let value: JsValue = match source {
            Some(body) => js_sys::Function::new_with_args("report", body).into(),
            None => JsValue::UNDEFINED,
        };
        js_sys::Reflect::set(&window, &JsValue::from_str(HOOK_NAME), &value).expect("set hook");
    }

    fn global(name: &str) -> JsValue {
        let window = web_sys::window().expect("window");
        js_sys::Reflect::get(&window, &JsValue::from_str(name)).expect("read global")
    }

    #[wasm_bindgen_test]
    fn hook_receives_report_object() {
        set_hook(Some(concat!(
            "window.__pullcordSeen = ",
            "report.installed.join(',') + '|' + report.skipped[0].behavior;",
        )));
        let mut report = InstallReport::new();
        report.record_installed("theme toggle");
        report.record_installed("counters");
        report.record_skipped("eyes", "no element matches '.eye'");
        announce(&report);
        assert_eq!(
            global("__pullcordSeen").as_string().as_deref(),
            Some("theme toggle,counters|eyes")
        );
        set_hook(None);
    }

    #[wasm_bindgen_test]
    fn missing_or_throwing_hook_is_not_fatal() {
        set_hook(None);
        assert_eq!(call_page_hook(&InstallReport::new()), Ok(()));
        set_hook(Some("throw new Error('boom');"));
        let err = call_page_hook(&InstallReport::new()).expect_err("hook threw");
        assert!(err.contains("boom"), "unexpected error {err}");
        set_hook(None);
    }
}
