use leptos::prelude::*;
use shared_types::format::launch_number;

use crate::components::{ArrowIcon, HideOnErrorImage};

struct Launch {
    id: u32,
    name: &'static str,
}

struct Experience {
    id: u32,
    title: &'static str,
    description: &'static str,
    image: &'static str,
}

const LAUNCHES: [Launch; 3] = [
    Launch {
        id: 1,
        name: "Earth Orbit Experience",
    },
    Launch {
        id: 2,
        name: "Lunar Landing Adventure",
    },
    Launch {
        id: 3,
        name: "Zero-G Simulation",
    },
];

const EXPERIENCES: [Experience; 2] = [
    Experience {
        id: 1,
        title: "Moon Adventures",
        description: "Set foot on the Moon and explore its endless craters.",
        image: "/images/moon-adventure.jpg",
    },
    Experience {
        id: 2,
        title: "Space Station",
        description: "Live aboard the orbital station.",
        image: "/images/space-station.jpg",
    },
];

const CAROUSEL_DOTS: usize = 5;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="homepage-container">
            <section class="homepage-hero">
                <div class="homepage-title-section">
                    <h1 class="homepage-title">
                        "YOUR JOURNEY"
                        <br/>
                        <span class="homepage-title-highlight">"STARTS HERE"</span>
                    </h1>
                </div>

                <div class="homepage-content">
                    <div class="homepage-launches" id="packages">
                        <h2 class="homepage-section-title">"Upcoming Launches"</h2>
                        <div class="homepage-launch-list">
                            {LAUNCHES
                                .iter()
                                .map(|launch| {
                                    view! {
                                        <div class="homepage-launch-item" data-launch-id={launch.id.to_string()}>
                                            <div class="homepage-launch-info">
                                                <span class="homepage-launch-number">
                                                    {launch_number(launch.id)}
                                                </span>
                                                <span class="homepage-launch-name">{launch.name}</span>
                                            </div>
                                            <div class="homepage-launch-arrow">
                                                <ArrowIcon/>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    // The gradient behind the photo doubles as the globe if it fails to load
                    <div class="homepage-globe-section" id="destinations">
                        <div class="homepage-globe">
                            <HideOnErrorImage
                                src="/images/earth.jpg"
                                alt="Earth"
                                class="homepage-globe-img"
                            />
                        </div>
                    </div>

                    <div class="homepage-experiences" id="about">
                        <h2 class="homepage-section-title">"Next-Level Travel Experiences"</h2>
                        <div class="homepage-cards-container">
                            {EXPERIENCES
                                .iter()
                                .map(|exp| {
                                    view! {
                                        <div class="homepage-card" data-experience-id={exp.id.to_string()}>
                                            <HideOnErrorImage
                                                src=exp.image
                                                alt=exp.title
                                                class="homepage-card-img"
                                            />
                                            <div class="homepage-card-arrow">
                                                <ArrowIcon/>
                                            </div>
                                            <div class="homepage-card-content">
                                                <h3 class="homepage-card-title">{exp.title}</h3>
                                                <p class="homepage-card-desc">{exp.description}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="homepage-carousel-dots">
                            {(0..CAROUSEL_DOTS)
                                .map(|index| {
                                    view! {
                                        <span class="homepage-dot" class:homepage-dot-active={index == 0}></span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="homepage-bottom-logo" id="contact">
                    <svg viewBox="0 0 60 60" fill="none" xmlns="http://www.w3.org/2000/svg">
                        <path d="M10 50L30 10L50 50H10Z" fill="none" stroke="white" stroke-width="3"/>
                        <path d="M30 10L30 35" stroke="white" stroke-width="3"/>
                    </svg>
                </div>
            </section>
        </div>
    }
}
