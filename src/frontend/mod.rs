mod decor;
mod dom;
#[cfg(test)]
mod test_support;
mod toast;
mod widgets;

use gloo::console;
use gloo::events::EventListener;
use web_sys::window;
use yew::prelude::*;

use crate::config::{chat_widget_src, SITE_OWNER};
use crate::menu::{scroll_top_visible, MenuState, ScrollMotion};
use crate::scroll_spy::{current_section, link_is_active};
use crate::selectors::{
    ACTIVE_CLASS, APP_ROOT_ID, MENU_BUTTON_ID, MENU_OPEN_ICON_CLASS, NAVBAR_CLASS, NAV_OPEN_CLASS,
    SCROLL_TOP_ID,
};
use decor::{HorizontalScroll, NoiseOverlay, Parallax};
use toast::ToastProvider;
use widgets::{ContactFormView, CopyButton, ExternalLink};

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const NAV_ITEMS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("work", "Work"),
    ("experience", "Experience"),
    ("contact", "Contact"),
];

const CONTACT_EMAIL: &str = "hello@jordanreyes.dev";
const CONTACT_PHONE: &str = "+1 (555) 013-2048";

struct Project {
    name: &'static str,
    summary: &'static str,
    stack: &'static str,
    href: &'static str,
}

const PROJECTS: [Project; 4] = [
    Project {
        name: "Tidewatch",
        summary: "Realtime buoy telemetry dashboard with alerting for coastal surf conditions.",
        stack: "Rust, Axum, WebSockets",
        href: "https://github.com/jordanreyes/tidewatch",
    },
    Project {
        name: "Ledgerly",
        summary: "Offline-first budgeting app that syncs through a CRDT document store.",
        stack: "TypeScript, IndexedDB",
        href: "https://github.com/jordanreyes/ledgerly",
    },
    Project {
        name: "Pinecone Trails",
        summary: "Trail-condition reports aggregated from park feeds and hiker check-ins.",
        stack: "Python, PostGIS",
        href: "https://github.com/jordanreyes/pinecone-trails",
    },
    Project {
        name: "Glyphsmith",
        summary: "Command-line tool that subsets web fonts to the glyphs a site actually uses.",
        stack: "Rust, HarfBuzz",
        href: "https://github.com/jordanreyes/glyphsmith",
    },
];

const PROJECT_CARD_WIDTH: f64 = 420.0;

#[function_component(App)]
fn app() -> Html {
    let menu = use_state_eq(MenuState::default);
    let active_section = use_state_eq(|| None::<String>);
    let show_scroll_top = use_state_eq(|| false);

    use_effect_with((), |_| {
        let listeners: Vec<EventListener> = [
            dom::install_visibility_handler(),
            dom::install_devtools_blocker(),
            dom::install_smooth_scroll(),
        ]
        .into_iter()
        .flatten()
        .collect();

        if let Some(src) = chat_widget_src() {
            dom::load_chat_widget(src);
        }

        move || drop(listeners)
    });

    {
        let menu = menu.clone();
        let active_section = active_section.clone();
        let show_scroll_top = show_scroll_top.clone();
        use_effect_with((), move |_| {
            let motion = ScrollMotion::default();
            let watch = dom::watch_scroll(move || {
                let scroll_y = dom::scroll_y();
                let sections = dom::section_bounds();
                if let Some(id) = current_section(scroll_y, &sections) {
                    active_section.set(Some(id.to_string()));
                }
                if motion.moved(scroll_y) {
                    menu.set(MenuState::closed());
                }
                show_scroll_top.set(scroll_top_visible(scroll_y));
            });
            move || drop(watch)
        });
    }

    let on_menu_toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set((*menu).toggled()))
    };

    let on_nav_click = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(MenuState::closed()))
    };

    let nav_links = NAV_ITEMS.iter().map(|(id, label)| {
        let href = format!("#{id}");
        let is_active = active_section
            .as_deref()
            .is_some_and(|active| link_is_active(&href, active));
        html! {
            <li>
                <a
                    href={href}
                    class={classes!(is_active.then_some(ACTIVE_CLASS))}
                    onclick={on_nav_click.clone()}
                >
                    {*label}
                </a>
            </li>
        }
    });

    html! {
        <ToastProvider>
            <a class="skip-link" href="#home">{"Skip to main content"}</a>
            <header>
                <a href="#home" class="logo">{SITE_OWNER}</a>
                <div
                    id={MENU_BUTTON_ID}
                    class={classes!("fas", "fa-bars", menu.open.then_some(MENU_OPEN_ICON_CLASS))}
                    role="button"
                    aria-label="Toggle navigation"
                    aria-expanded={menu.open.to_string()}
                    onclick={on_menu_toggle}
                ></div>
                <nav class={classes!(NAVBAR_CLASS, menu.open.then_some(NAV_OPEN_CLASS))}>
                    <ul>{ for nav_links }</ul>
                </nav>
            </header>

            <main>
                <section class="home" id="home">
                    <Parallax speed={-0.2} class={classes!("home-backdrop")}>
                        <div class="orb orb-a"></div>
                        <div class="orb orb-b"></div>
                    </Parallax>
                    <div class="content">
                        <h2>{"Hi there, I'm "}<span>{SITE_OWNER}</span></h2>
                        <p>{"I build reliable backend systems and quiet, fast interfaces."}</p>
                        <a href="#about" class="btn">
                            <span>{"About Me"}</span>
                            <i class="fas fa-arrow-circle-down" aria-hidden="true"></i>
                        </a>
                    </div>
                </section>

                <section class="about" id="about">
                    <h2 class="heading">{"About "}<span>{"Me"}</span></h2>
                    <div class="row">
                        <div class="content">
                            <h3>{"Software engineer"}</h3>
                            <p>
                                {"I work across the stack with a bias toward the server side: data pipelines, \
                                  HTTP services and the tooling that keeps them observable. Outside work I \
                                  maintain a few small open-source utilities."}
                            </p>
                            <div class="box-container">
                                <div class="box">
                                    <p>
                                        <span>{"email : "}</span>{CONTACT_EMAIL}
                                        <CopyButton text={CONTACT_EMAIL} label="Email" />
                                    </p>
                                    <p><span>{"place : "}</span>{"Portland, Oregon"}</p>
                                </div>
                            </div>
                            <div class="resumebtn">
                                <ExternalLink href="https://github.com/jordanreyes" label="GitHub" />
                            </div>
                        </div>
                    </div>
                </section>

                <section class="skills" id="skills">
                    <h2 class="heading">{"Skills & "}<span>{"Abilities"}</span></h2>
                    <ul class="skill-list">
                        { for ["Rust", "TypeScript", "Python", "PostgreSQL", "Docker", "Kubernetes", "WebAssembly", "Linux"]
                            .iter()
                            .map(|skill| html! { <li class="bar">{*skill}</li> }) }
                    </ul>
                </section>

                <section class="work" id="work">
                    <h2 class="heading">{"Projects "}<span>{"Made"}</span></h2>
                    <HorizontalScroll track_width={PROJECT_CARD_WIDTH * PROJECTS.len() as f64}>
                        { for PROJECTS.iter().map(|project| html! {
                            <article class="project-card">
                                <h3>{project.name}</h3>
                                <p>{project.summary}</p>
                                <p class="muted">{project.stack}</p>
                                <ExternalLink href={project.href} label="Code" />
                            </article>
                        }) }
                    </HorizontalScroll>
                </section>

                <section class="experience" id="experience">
                    <h2 class="heading">{"Experience"}</h2>
                    <div class="timeline">
                        <div class="container right">
                            <div class="content">
                                <h3>{"Backend Engineer | Harborline"}</h3>
                                <p>{"2022 - present"}</p>
                            </div>
                        </div>
                        <div class="container left">
                            <div class="content">
                                <h3>{"Software Developer Intern | Northfield Labs"}</h3>
                                <p>{"2021"}</p>
                            </div>
                        </div>
                    </div>
                </section>

                <section class="contact" id="contact">
                    <h2 class="heading">{"Get in "}<span>{"Touch"}</span></h2>
                    <div class="container">
                        <p class="contact-line">
                            <span>{"phone : "}</span>{CONTACT_PHONE}
                            <CopyButton text={CONTACT_PHONE} label="Phone" />
                        </p>
                        <ContactFormView />
                    </div>
                </section>
            </main>

            <a
                href="#home"
                id={SCROLL_TOP_ID}
                class={classes!("fas", "fa-angle-up", show_scroll_top.then_some(ACTIVE_CLASS))}
                aria-label="Back to top"
            ></a>
            <NoiseOverlay />
        </ToastProvider>
    }
}

pub fn run() {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(APP_ROOT_ID))
    else {
        console::error!(format!("missing #{APP_ROOT_ID} mount point"));
        return;
    };

    yew::Renderer::<App>::with_root(root).render();
}
