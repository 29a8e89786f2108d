use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, MessageBar, MessageBarIntent};

/// Error banner with an optional retry action.
#[component]
pub fn ErrorView(
    message: Option<String>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-container">
            <MessageBar intent=MessageBarIntent::Error>
                {format!(
                    "⚠️ {}",
                    message.unwrap_or_else(|| "An error occurred. Please try again.".to_string()),
                )}
            </MessageBar>
            {on_retry.map(|on_retry| view! {
                <Button
                    class="error-retry-btn"
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_retry.run(())
                >
                    "Retry"
                </Button>
            })}
        </div>
    }
}
