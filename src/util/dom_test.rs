use super::*;

#[test]
fn timeout_error_names_delay_and_reason() {
    let err = DomError::Timeout { delay_ms: 2500, reason: "JsValue(undefined)".to_owned() };
    assert_eq!(err.to_string(), "failed to schedule timeout of 2500ms: JsValue(undefined)");
}

#[test]
#[cfg(not(feature = "csr"))]
fn no_preference_signal_outside_browser() {
    assert_eq!(prefers_dark(), None);
}

#[test]
#[cfg(not(feature = "csr"))]
fn no_section_elements_outside_browser() {
    for section in SectionId::ALL {
        assert_eq!(DomSectionGeometry.bounds(section), None);
    }
}
