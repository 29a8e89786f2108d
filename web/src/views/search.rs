use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::format::{
    format_date, result_count_label, truncate_description, DESCRIPTION_LIMIT,
};
use shared_types::{PageRequest, SearchState, SpaceImage};

use crate::{
    components::{ErrorView, LoadingView, SearchIcon},
    server::{error_message, search_images},
};

/// Shown in place of a preview that fails to load.
pub const NO_IMAGE_PLACEHOLDER: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'%3E%3Crect fill='%231a1a2e' width='100' height='100'/%3E%3Ctext x='50' y='55' text-anchor='middle' fill='%234a4a6a' font-size='12'%3ENo Image%3C/text%3E%3C/svg%3E";

#[component]
pub fn SearchPage() -> impl IntoView {
    let input = RwSignal::new(String::new());
    let state = RwSignal::new(SearchState::new());

    let run = move |request: PageRequest| {
        spawn_local(async move {
            match search_images(request.query.clone(), request.page).await {
                Ok(page) => {
                    state.update(|s| {
                        s.complete(&request, page);
                    });
                }
                Err(e) => {
                    let message = error_message(&e);
                    leptos::logging::error!("Fetch error: {}", message);
                    state.update(|s| {
                        s.fail(&request, message);
                    });
                }
            }
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = state.write().submit(&input.get_untracked());
        if let Some(request) = request {
            run(request);
        }
    };

    let on_load_more = move |_| {
        let request = state.write().load_more();
        if let Some(request) = request {
            run(request);
        }
    };

    let on_retry = Callback::new(move |_: ()| {
        let request = state.write().retry();
        if let Some(request) = request {
            run(request);
        }
    });

    let is_loading = Memo::new(move |_| state.with(|s| s.is_loading()));
    let revision = Memo::new(move |_| state.with(|s| s.revision()));
    let submit_disabled =
        Signal::derive(move || is_loading.get() || input.with(|q| q.trim().is_empty()));

    view! {
        <div class="search-page-container">
            <div class="search-page-stars"></div>
            <div class="search-page-stars2"></div>

            <header class="search-page-header">
                <h1 class="search-page-title">"Explore the Cosmos"</h1>
                <p class="search-page-subtitle">"Search NASA's image library"</p>

                <form on:submit=on_submit class="search-page-form">
                    <div class="search-page-input-wrapper">
                        <SearchIcon class="search-page-input-icon"/>
                        <input
                            type="text"
                            class="search-page-input"
                            placeholder="Search for galaxies, planets, nebulae..."
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            class="search-page-btn"
                            disabled=move || submit_disabled.get()
                        >
                            {move || if is_loading.get() { "Searching..." } else { "Search" }}
                        </button>
                    </div>
                </form>
            </header>

            {move || {
                state
                    .with(|s| s.error().map(str::to_string))
                    .map(|message| {
                        view! {
                            <div class="search-page-error">
                                <ErrorView message=Some(message) on_retry=on_retry/>
                            </div>
                        }
                    })
            }}

            <Show when=move || state.with(|s| s.result_count() > 0)>
                <p class="search-page-results-count">
                    {move || state.with(|s| result_count_label(s.result_count()))}
                </p>
            </Show>

            <div class="search-page-grid">
                <For
                    each=move || {
                        revision.track();
                        state.with_untracked(|s| card_entries(s.images()))
                    }
                    key=|(index, image)| (*index, image.nasa_id.clone())
                    children=move |(_, image): (usize, SpaceImage)| view! { <ImageCard image=image/> }
                />
            </div>

            <Show when=move || state.with(|s| s.is_empty())>
                <EmptyState searched=Signal::derive(move || state.with(|s| s.has_searched()))/>
            </Show>

            <Show when=move || is_loading.get()>
                <div class="search-page-loading">
                    <LoadingView message="Searching the cosmos..."/>
                </div>
            </Show>

            <Show when=move || state.with(|s| s.can_load_more())>
                <div class="search-page-load-more">
                    <button class="search-page-load-more-btn" on:click=on_load_more>
                        "Load More"
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// Results only grow by appending or are replaced wholesale, so the position
/// keeps keys unique even when the service repeats an id across pages.
fn card_entries(images: &[SpaceImage]) -> Vec<(usize, SpaceImage)> {
    images.iter().cloned().enumerate().collect()
}

#[component]
fn EmptyState(searched: Signal<bool>) -> impl IntoView {
    view! {
        <div class="search-page-empty">
            <div class="search-page-empty-icon">
                {move || if searched.get() { "🔭" } else { "🚀" }}
            </div>
            <p>
                {move || {
                    if searched.get() {
                        "No images found. Try a different search term!"
                    } else {
                        "Enter a search term to explore NASA's image library"
                    }
                }}
            </p>
        </div>
    }
}

#[component]
fn ImageCard(image: SpaceImage) -> impl IntoView {
    let SpaceImage {
        nasa_id,
        title,
        description,
        preview_url,
        date_created,
    } = image;

    let date = format_date(date_created.as_deref());
    let description = description
        .filter(|text| !text.is_empty())
        .map(|text| truncate_description(&text, DESCRIPTION_LIMIT).into_owned());

    let preview = match preview_url {
        Some(url) => {
            let failed = RwSignal::new(false);
            view! {
                <img
                    src={move || {
                        if failed.get() { NO_IMAGE_PLACEHOLDER.to_string() } else { url.clone() }
                    }}
                    alt=title.clone()
                    class="search-page-card-image"
                    loading="lazy"
                    on:error=move |_| failed.set(true)
                />
            }
            .into_any()
        }
        None => view! {
            <div class="search-page-card-placeholder">
                <span>"No Preview"</span>
            </div>
        }
        .into_any(),
    };

    view! {
        <article class="search-page-card">
            <div class="search-page-card-image-wrapper">
                {preview}
                <div class="search-page-card-overlay">
                    <span class="search-page-card-date">{date}</span>
                </div>
            </div>
            <div class="search-page-card-content">
                <h3 class="search-page-card-title">{title}</h3>
                {description.map(|text| view! {
                    <p class="search-page-card-description">{text}</p>
                })}
                <span class="search-page-card-id">"ID: " {nasa_id}</span>
            </div>
        </article>
    }
}
