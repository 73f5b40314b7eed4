//! The hidden measurement element.
//!
//! Browsers expose the safe area only through CSS inset functions, so the
//! probe binds an invisible element's paddings to them and reads the
//! *computed* style back, using transition completion as the signal that the
//! values have settled.

use core::fmt;
use std::rc::Rc;
use std::sync::OnceLock;

use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use waterline::reactive::WatcherGuard;
use waterline::{EdgeInsets, SafeAreaEvent};
use web_sys::{CssStyleDeclaration, Document, HtmlElement, Window};

use crate::error::WebError;

/// The inset-query spelling the platform understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsetFunction {
    /// The standard `env(..)` spelling.
    Env,
    /// The `constant(..)` spelling of the earliest notched devices.
    Constant,
}

impl InsetFunction {
    const fn keyword(self) -> &'static str {
        match self {
            Self::Env => "env",
            Self::Constant => "constant",
        }
    }
}

/// Vendor transition properties and the completion event each implies,
/// probed in order against a throwaway element's style interface.
const TRANSITION_EVENTS: [(&str, &str); 5] = [
    ("WebkitTransition", "webkitTransitionEnd"),
    ("Transition", "transitionEnd"),
    ("MozTransition", "transitionend"),
    ("MSTransition", "msTransitionEnd"),
    ("OTransition", "oTransitionEnd"),
];

const FALLBACK_TRANSITION_EVENT: &str = "transitionEnd";

/// Styles keeping the probe element out of layout flow and paint.
///
/// The transition duration is load-bearing: anything faster than 0.05s and
/// the completion event fires before the inset values have settled.
const PROBE_STYLES: [(&str, &str); 11] = [
    ("position", "fixed"),
    ("left", "0"),
    ("top", "0"),
    ("width", "0"),
    ("height", "0"),
    ("z-index", "-1"),
    ("overflow", "hidden"),
    ("visibility", "hidden"),
    ("transition-duration", "0.05s"),
    ("transition-property", "padding"),
    ("transition-delay", "0s"),
];

const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

fn inset_expression(function: InsetFunction, side: &str) -> String {
    format!("{}(safe-area-inset-{side})", function.keyword())
}

/// Returns the inset-query spelling this surface supports, detected once per
/// process.
fn supported_inset_function(document: &Document) -> InsetFunction {
    static SUPPORTED: OnceLock<InsetFunction> = OnceLock::new();
    *SUPPORTED.get_or_init(|| detect_inset_function(document).unwrap_or(InsetFunction::Env))
}

fn detect_inset_function(document: &Document) -> Result<InsetFunction, WebError> {
    // Engines drop declarations they cannot parse, so writing the legacy
    // spelling and reading it back doubles as support detection.
    let element = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|e| WebError::from(JsValue::from(e)))?;
    let style = element.style();
    style.set_property("top", "constant(safe-area-inset-top)")?;
    let readback = style.get_property_value("top")?;
    Ok(if readback.contains("constant") {
        InsetFunction::Constant
    } else {
        InsetFunction::Env
    })
}

/// Returns the completion-event name this surface fires for transitions,
/// detected once per process.
fn supported_transition_event(document: &Document) -> &'static str {
    static SUPPORTED: OnceLock<&'static str> = OnceLock::new();
    *SUPPORTED
        .get_or_init(|| detect_transition_event(document).unwrap_or(FALLBACK_TRANSITION_EVENT))
}

fn detect_transition_event(document: &Document) -> Result<&'static str, WebError> {
    let element = document
        .create_element("invalidtype")?
        .dyn_into::<HtmlElement>()
        .map_err(|e| WebError::from(JsValue::from(e)))?;
    let style = element.style();
    for (property, event) in TRANSITION_EVENTS {
        if js_sys::Reflect::has(style.as_ref(), &JsValue::from_str(property))? {
            return Ok(event);
        }
    }
    Ok(FALLBACK_TRANSITION_EVENT)
}

fn create_probe_element(document: &Document) -> Result<HtmlElement, WebError> {
    let element = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|e| WebError::from(JsValue::from(e)))?;
    let style = element.style();
    for (property, value) in PROBE_STYLES {
        style.set_property(property, value)?;
    }
    let function = supported_inset_function(document);
    for side in SIDES {
        style.set_property(&format!("padding-{side}"), &inset_expression(function, side))?;
    }
    Ok(element)
}

fn read_insets(window: &Window, element: &HtmlElement) -> EdgeInsets {
    window
        .get_computed_style(element)
        .ok()
        .flatten()
        .map_or(EdgeInsets::ZERO, |style| EdgeInsets {
            top: read_padding(&style, "padding-top"),
            right: read_padding(&style, "padding-right"),
            bottom: read_padding(&style, "padding-bottom"),
            left: read_padding(&style, "padding-left"),
        })
}

fn read_padding(style: &CssStyleDeclaration, property: &str) -> f32 {
    style
        .get_property_value(property)
        .map_or(0.0, |value| parse_px(&value))
}

/// Parses the leading integer of a computed length, clamping to zero.
///
/// Computed paddings read back as strings like `"44px"`. A missing or
/// unparseable value is a zero inset, never an error or NaN.
fn parse_px(value: &str) -> f32 {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 || negative {
        return 0.0;
    }
    rest[..digits].parse().unwrap_or(0.0)
}

/// The mounted probe: one hidden element plus its completion listener.
///
/// Every completion event re-reads the computed paddings and emits a fresh
/// [`SafeAreaEvent::Insets`]; one reading is emitted synchronously at mount
/// so owners have a value even if no transition ever fires. Dropping the
/// probe removes the listener and the element; nothing is emitted afterward.
pub struct InsetProbe {
    element: HtmlElement,
    listener: Closure<dyn Fn()>,
    event: &'static str,
}

impl InsetProbe {
    /// Builds the probe element, starts listening, and emits an initial
    /// reading.
    ///
    /// # Errors
    ///
    /// [`WebError::DomUnavailable`] when there is no window, document, or
    /// body to probe, and [`WebError::Js`] when the platform rejects the
    /// element construction.
    pub fn mount(on_event: impl Fn(SafeAreaEvent) + 'static) -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::DomUnavailable)?;
        let document = window.document().ok_or(WebError::DomUnavailable)?;
        let body = document.body().ok_or(WebError::DomUnavailable)?;

        let element = create_probe_element(&document)?;
        body.append_child(&element)?;

        let emit: Rc<dyn Fn()> = Rc::new({
            let window = window.clone();
            let element = element.clone();
            move || on_event(SafeAreaEvent::Insets(read_insets(&window, &element)))
        });

        let listener = Closure::<dyn Fn()>::new({
            let emit = Rc::clone(&emit);
            move || emit()
        });
        let event = supported_transition_event(&document);
        element.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
        debug!(completion_event = event, "safe area probe mounted");

        // Initial reading, so a snapshot exists even when the insets are
        // already settled and no transition will fire.
        emit();

        Ok(Self {
            element,
            listener,
            event,
        })
    }
}

impl Drop for InsetProbe {
    fn drop(&mut self) {
        if let Err(error) = self
            .element
            .remove_event_listener_with_callback(self.event, self.listener.as_ref().unchecked_ref())
        {
            warn!(?error, "failed to remove the probe's completion listener");
        }
        self.element.remove();
    }
}

impl WatcherGuard for InsetProbe {}

impl fmt::Debug for InsetProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsetProbe")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_expressions_name_each_side() {
        assert_eq!(
            inset_expression(InsetFunction::Env, "top"),
            "env(safe-area-inset-top)"
        );
        assert_eq!(
            inset_expression(InsetFunction::Constant, "left"),
            "constant(safe-area-inset-left)"
        );
    }

    #[test]
    fn candidate_table_pairs_vendor_properties_with_events() {
        assert_eq!(
            TRANSITION_EVENTS[0],
            ("WebkitTransition", "webkitTransitionEnd")
        );
        assert!(
            TRANSITION_EVENTS
                .iter()
                .any(|&(property, event)| property == "MozTransition" && event == "transitionend")
        );
    }

    #[test]
    fn computed_lengths_parse_to_whole_pixels() {
        assert_eq!(parse_px("44px"), 44.0);
        assert_eq!(parse_px("12.9px"), 12.0);
        assert_eq!(parse_px("+8px"), 8.0);
        assert_eq!(parse_px("0px"), 0.0);
    }

    #[test]
    fn missing_or_garbage_values_read_zero() {
        assert_eq!(parse_px(""), 0.0);
        assert_eq!(parse_px("auto"), 0.0);
        assert_eq!(parse_px("px44"), 0.0);
    }

    #[test]
    fn negative_lengths_clamp_to_zero() {
        assert_eq!(parse_px("-12px"), 0.0);
    }
}
