use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::icons::SearchIcon;

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Destinations",
        href: "#destinations",
    },
    NavLink {
        label: "Packages",
        href: "#packages",
    },
    NavLink {
        label: "About Us",
        href: "#about",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

#[component]
pub fn Navbar() -> impl IntoView {
    let mobile_open = RwSignal::new(false);

    view! {
        <nav class="navbar-container">
            <A href="/" attr:class="navbar-logo" attr:aria-label="Home">
                <svg viewBox="0 0 40 40" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <path
                        d="M20 4C15 4 10 8 8 14C6 20 8 28 14 32C12 28 12 22 14 18C16 14 20 12 24 12C22 16 22 22 24 26C26 22 26 16 24 12C28 14 30 18 30 24C30 28 28 32 24 34C30 32 34 26 34 20C34 12 28 4 20 4Z"
                        fill="white"
                    />
                </svg>
            </A>

            <ul class="navbar-links">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.href class="navbar-link">
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div class="navbar-actions">
                <A href="/search" attr:class="navbar-search-btn" attr:aria-label="Search">
                    <SearchIcon/>
                </A>
                <button
                    class="navbar-menu-btn"
                    aria-label="Menu"
                    aria-expanded=move || mobile_open.get().to_string()
                    on:click=move |_| mobile_open.update(|open| *open = !*open)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>

        <div class="navbar-mobile-menu" class:navbar-mobile-open=move || mobile_open.get()>
            <ul class="navbar-mobile-links">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a
                                    href=link.href
                                    class="navbar-mobile-link"
                                    on:click=move |_| mobile_open.set(false)
                                >
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
