//! Page-wide styling owned by the game view while it is mounted.

const BACKGROUND_PROPERTIES: [&str; 3] = [
    "background-image",
    "background-size",
    "background-position",
];

/// Body background set on mount. [`BodyBackground::restore`] puts back
/// whatever was there before.
pub(super) struct BodyBackground {
    previous: Vec<(&'static str, String)>,
}

impl BodyBackground {
    pub(super) fn apply(image_url: &str) -> Option<Self> {
        let body = body()?;
        let style = body.style();

        let values = [
            format!("url('{image_url}')"),
            "cover".to_string(),
            "center center".to_string(),
        ];

        let mut previous = Vec::with_capacity(BACKGROUND_PROPERTIES.len());
        for (prop, value) in BACKGROUND_PROPERTIES.into_iter().zip(values) {
            let before = style.get_property_value(prop).unwrap_or_default();
            if style.set_property(prop, &value).is_ok() {
                previous.push((prop, before));
            }
        }
        Some(Self { previous })
    }

    pub(super) fn restore(self) {
        let Some(body) = body() else {
            return;
        };
        let style = body.style();
        for (prop, before) in self.previous {
            if before.is_empty() {
                let _ = style.remove_property(prop);
            } else {
                let _ = style.set_property(prop, &before);
            }
        }
    }
}

fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window()?.document()?.body()
}
