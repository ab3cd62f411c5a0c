//! Reveal comparator component
//!
//! Renders the processed image full-bleed with the original laid over
//! it, clipped to the left of the split boundary. The geometry lives in
//! `craterscan_core::comparator`; this component feeds it slider input
//! and container measurements and renders the derived boundary.

use std::cell::RefCell;
use std::rc::Rc;

use craterscan_core::comparator::ComparatorState;
use sycamore::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlInputElement};

#[component(inline_props)]
pub fn Comparator(original: String, processed: String) -> View {
    let geometry = create_signal(ComparatorState::new());
    let container_ref = create_node_ref();

    // Re-measure the container and recompute the boundary from the
    // existing percentage. Runs on mount and on every window resize.
    let measure = move || {
        if let Some(node) = container_ref.try_get() {
            if let Some(element) = node.dyn_ref::<HtmlElement>() {
                let width = f64::from(element.client_width());
                geometry.update(|state| state.set_container_width(width));
            }
        }
    };

    // The resize listener is the only persistent subscription; it is
    // detached when the comparator unmounts.
    let resize_handler: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
        Rc::new(RefCell::new(None));

    on_mount({
        let resize_handler = resize_handler.clone();
        move || {
            measure();
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut()>::new(move || measure());
            let attached = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                .is_ok();
            if attached {
                *resize_handler.borrow_mut() = Some(closure);
            } else {
                log::warn!("failed to attach resize listener");
            }
        }
    });

    on_cleanup(move || {
        if let (Some(window), Some(closure)) =
            (web_sys::window(), resize_handler.borrow_mut().take())
        {
            let _ = window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
    });

    let on_slide = move |event: Event| {
        let Some(input) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        // The range input clamps to 0..=100; the geometry does not
        if let Ok(percent) = input.value().parse::<u8>() {
            geometry.update(|state| state.set_split_percent(percent));
        }
    };

    view! {
        div(class="comparator") {
            div(class="comparator-heading") {
                h3 { "Image Comparison" }
                p { "Drag the slider to compare original and processed images" }
            }

            div(class="comparator-frame", r#ref=container_ref) {
                img(
                    class="comparator-image",
                    src=processed,
                    alt="Processed lunar surface with crater detection"
                )
                div(
                    class="comparator-clip",
                    style=move || {
                        format!("clip-path: inset(0 {:.2}px 0 0)", geometry.get().right_inset())
                    }
                ) {
                    img(
                        class="comparator-image",
                        src=original,
                        alt="Original lunar surface"
                    )
                }
                div(
                    class="comparator-divider",
                    style=move || format!("left: {:.2}px", geometry.get().clip_boundary())
                )
                div(class="comparator-label label-left") { "Original" }
                div(class="comparator-label label-right") { "Crater Detection" }
            }

            div(class="comparator-slider") {
                input(
                    r#type="range",
                    min="0",
                    max="100",
                    step="1",
                    value="50",
                    on:input=on_slide
                )
                div(class="slider-captions") {
                    span { "Original Image" }
                    span { (format!("{}%", geometry.get().split_percent())) }
                    span { "Processed Image" }
                }
            }
        }
    }
}
