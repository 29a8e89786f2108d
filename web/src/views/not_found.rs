use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// 404 page with a way back to the two real destinations.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div style="min-height: 100vh; background: radial-gradient(ellipse at bottom, #1b2735 0%, #090a0f 100%); display: flex; align-items: center; justify-content: center; padding: 1rem;">
            <div style="max-width: 600px; width: 100%; text-align: center;">

                <div style="margin-bottom: 2rem; position: relative;">
                    <div style="font-size: 8rem; font-weight: 900; color: transparent; background: linear-gradient(135deg, #7f5af0, #2cb1bc); background-clip: text; -webkit-background-clip: text; margin: 0; line-height: 1;">
                        "404"
                    </div>
                    <div style="position: absolute; top: 0; right: -20px; font-size: 3rem; animation: drift 6s ease-in-out infinite;">
                        "🛰️"
                    </div>
                </div>

                <div style="background: rgba(255,255,255,0.06); border: 1px solid rgba(255,255,255,0.12); border-radius: 20px; padding: 3rem 2rem; margin-bottom: 2rem;">
                    <h1 style="font-size: 2.5rem; font-weight: 700; color: #fffffe; margin: 0 0 1rem 0;">
                        "Lost in Space"
                    </h1>

                    <p style="font-size: 1.2rem; color: #a7a9be; margin: 0 0 2rem 0; line-height: 1.6;">
                        "This page drifted out of orbit. It doesn't exist or may have been moved."
                    </p>

                    <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1rem;">
                        <button
                            on:click={
                                let navigate = navigate.clone();
                                move |_| {
                                    navigate("/", Default::default());
                                }
                            }
                            style="background: linear-gradient(135deg, #7f5af0, #6246ea); color: white; padding: 1rem 1.5rem; border-radius: 12px; border: none; font-size: 1rem; font-weight: 600; cursor: pointer;">
                            "🚀 Back to Launch Pad"
                        </button>

                        <button
                            on:click={
                                let navigate = navigate.clone();
                                move |_| {
                                    navigate("/search", Default::default());
                                }
                            }
                            style="background: transparent; color: #2cb1bc; padding: 1rem 1.5rem; border: 2px solid #2cb1bc; border-radius: 12px; font-size: 1rem; font-weight: 600; cursor: pointer;">
                            "🔭 Search the Cosmos"
                        </button>
                    </div>
                </div>

                <button
                    on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            if let Ok(history) = window.history() {
                                let _ = history.back();
                            }
                        }
                    }
                    style="background: none; border: none; color: #a7a9be; font-weight: 500; font-size: 0.9rem; cursor: pointer;">
                    "⬅️ Go Back"
                </button>
            </div>
        </div>

        <style>
            {r#"
            @keyframes drift {
                0%, 100% {
                    transform: translate(0, 0) rotate(-10deg);
                }
                50% {
                    transform: translate(-8px, -12px) rotate(10deg);
                }
            }
            "#}
        </style>
    }
}
