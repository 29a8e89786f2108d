use leptos::prelude::*;
use leptos::server;
use shared_types::SearchPage;

#[cfg(feature = "ssr")]
use crate::{api::fetch_page, config::search_config};
#[cfg(feature = "ssr")]
use shared_types::PAGE_SIZE;

/// Relays one page of an image search to the upstream service.
#[server]
pub async fn search_images(query: String, page: u32) -> Result<SearchPage, ServerFnError> {
    let page = page.max(1);

    match fetch_page(search_config(), &query, page, PAGE_SIZE).await {
        Ok(result) => {
            tracing::debug!(
                query = %query,
                page,
                returned = result.returned,
                images = result.images.len(),
                "image search page loaded"
            );
            Ok(result)
        }
        Err(e) => {
            tracing::warn!(query = %query, page, error = %e, "image search failed");
            Err(ServerFnError::new(e.to_string()))
        }
    }
}

/// Message for the error banner, without the server function prefix.
pub fn error_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}
