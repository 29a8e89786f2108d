use leptos::prelude::*;

/// An image that removes itself from layout when it fails to load, leaving
/// whatever the container draws behind it.
///
/// Server-rendered images can fail before hydration attaches `on:error`, so
/// the element is also checked once it is live in the browser.
#[component]
pub fn HideOnErrorImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(into)] class: String,
) -> impl IntoView {
    let hidden = RwSignal::new(false);
    let image_ref = NodeRef::<leptos::html::Img>::new();

    // Only runs on the client after hydration
    Effect::new(move |_| {
        if let Some(img) = image_ref.get() {
            if load_failed(img.complete(), img.natural_width()) {
                hidden.set(true);
            }
        }
    });

    view! {
        <img
            node_ref=image_ref
            src=src
            alt=alt
            class=class
            style:display={move || if hidden.get() { "none" } else { "" }}
            on:error=move |_| hidden.set(true)
        />
    }
}

/// A finished image with no intrinsic width never decoded.
fn load_failed(complete: bool, natural_width: u32) -> bool {
    complete && natural_width == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finished_without_width_counts_as_failed() {
        assert!(load_failed(true, 0));
    }

    #[test]
    fn loaded_or_pending_images_stay_visible() {
        assert!(!load_failed(true, 640));
        assert!(!load_failed(false, 0));
    }
}
