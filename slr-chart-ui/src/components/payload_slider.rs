//! Two-handle payload range slider.

use crate::state::AppState;
use dioxus::prelude::*;
use slr_dash::layout::RangeSliderSpec;

#[derive(Props, Clone, PartialEq)]
pub struct PayloadSliderProps {
    pub spec: RangeSliderSpec,
}

/// Payload range slider with marks.
/// The handles snap to the slider step and cannot cross each other.
#[component]
pub fn PayloadSlider(props: PayloadSliderProps) -> Element {
    let mut state = use_context::<AppState>();
    let spec = props.spec.clone();
    let range = (state.payload_range)().unwrap_or(spec.value);
    let low = range.low();
    let high = range.high();

    let low_spec = spec.clone();
    let on_low = move |evt: Event<FormData>| {
        if let Ok(raw) = evt.value().parse::<f64>() {
            let current = (*state.payload_range.peek()).unwrap_or(low_spec.value);
            state
                .payload_range
                .set(Some(current.with_low(low_spec.snap(raw))));
        }
    };

    let high_spec = spec.clone();
    let on_high = move |evt: Event<FormData>| {
        if let Ok(raw) = evt.value().parse::<f64>() {
            let current = (*state.payload_range.peek()).unwrap_or(high_spec.value);
            state
                .payload_range
                .set(Some(current.with_high(high_spec.snap(raw))));
        }
    };

    rsx! {
        div {
            id: "{spec.id}",
            style: "margin: 8px 0;",
            p {
                style: "margin: 0 0 4px 0;",
                "Payload range (Kg): {low} - {high}"
            }
            div {
                style: "display: flex; flex-direction: column; gap: 4px;",
                input {
                    r#type: "range",
                    min: "{spec.min}",
                    max: "{spec.max}",
                    step: "{spec.step}",
                    value: "{low}",
                    oninput: on_low,
                }
                input {
                    r#type: "range",
                    min: "{spec.min}",
                    max: "{spec.max}",
                    step: "{spec.step}",
                    value: "{high}",
                    oninput: on_high,
                }
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 11px; color: #888;",
                for mark in spec.marks.iter() {
                    span { key: "{mark.value}", "{mark.label}" }
                }
            }
        }
    }
}
