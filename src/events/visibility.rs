use crate::constants::REVEAL_THRESHOLD;
use crate::reveal::{ClassChange, RevealPolicy};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observe `elements` and apply `class` according to `policy` as they scroll in and out.
pub fn observe_reveal(
    elements: &[web::Element],
    class: &'static str,
    policy: RevealPolicy,
) -> anyhow::Result<()> {
    if elements.is_empty() {
        return Ok(());
    }
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let cl = entry.target().class_list();
                match policy.change(entry.is_intersecting()) {
                    Some(ClassChange::Add) => {
                        _ = cl.add_1(class);
                    }
                    Some(ClassChange::Remove) => {
                        _ = cl.remove_1(class);
                    }
                    None => {}
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    for el in elements {
        observer.observe(el);
    }
    log::info!(
        "[reveal] observing {} elements for .{}",
        elements.len(),
        class
    );
    Ok(())
}
