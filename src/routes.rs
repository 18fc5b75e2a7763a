use dioxus::prelude::*;
use dioxus_router::{Link, Routable, Router};

use crate::config::{use_runtime_config, RuntimeConfig};
use crate::contact::ContactSection;
use crate::content::{ABOUT_PARAGRAPHS, ACHIEVEMENTS, PROJECTS, SKILL_CATEGORIES, TIMELINE};
use crate::nav::Navbar;
use crate::reveal::{Reveal, SkillBar};
use crate::scroll::{scroll_to_section, use_parallax};
use crate::typing::TypingText;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const BODY_LOADED_DELAY_MS: u32 = 100;

#[component]
pub fn App() -> Element {
    let config_resource = use_runtime_config();
    let config = match config_resource() {
        None => {
            return rsx! {
                document::Title { "Portfolio" }
                div { class: "page loading",
                    p { "Loading..." }
                }
            }
        }
        Some(Ok(config)) => config,
        Some(Err(message)) => {
            tracing::warn!("{message}; using built-in config");
            RuntimeConfig::default()
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "description", content: "Portfolio of {config.owner_name}" }
        ConfiguredRouter { config }
    }
}

/// Shell shared by every route, the not-found page included.
#[component]
fn ConfiguredRouter(config: RuntimeConfig) -> Element {
    use_context_provider(|| config.clone());

    #[cfg(target_arch = "wasm32")]
    use_effect(mark_body_loaded);

    rsx! {
        Router::<Route> {}
    }
}

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[cfg(target_arch = "wasm32")]
fn mark_body_loaded() {
    spawn(async move {
        crate::dom::sleep_ms(BODY_LOADED_DELAY_MS).await;
        let marked = crate::dom::body().and_then(|body| {
            body.class_list()
                .add_1("loaded")
                .map_err(|_| "body class update failed".to_string())
        });
        match marked {
            Ok(()) => tracing::info!("portfolio loaded"),
            Err(err) => tracing::warn!("{err}"),
        }
    });
}

#[component]
fn Home() -> Element {
    let config = use_context::<RuntimeConfig>();

    rsx! {
        document::Title { "{config.owner_name} | Portfolio" }
        a { class: "skip-link", href: "#main-content", "Skip to main content" }
        Navbar { brand: config.owner_name.clone(), default_theme: config.default_theme }
        main {
            Hero { owner_name: config.owner_name.clone(), roles: config.typing_roles.clone() }
            AboutSection {}
            SkillsSection {}
            ProjectsSection {}
            ExperienceSection {}
            AchievementsSection {}
            ContactSection {}
        }
        footer { class: "footer",
            div { class: "container",
                p { "© {config.owner_name}. Built with Rust and Dioxus." }
            }
        }
    }
}

#[component]
pub fn SectionTitle(#[props(into)] title: String) -> Element {
    rsx! {
        Reveal { class: "section-header",
            h2 { class: "section-title", "{title}" }
        }
    }
}

#[component]
fn Hero(owner_name: String, roles: Vec<String>) -> Element {
    let parallax = use_parallax();
    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-background", style: "transform: translateY({parallax}px)" }
            div { id: "main-content", tabindex: "-1" }
            div { class: "container hero-content",
                h1 { class: "hero-title",
                    "Hi, I'm "
                    span { class: "hero-name", "{owner_name}" }
                }
                p { class: "hero-subtitle", TypingText { roles } }
                div { class: "hero-actions",
                    a {
                        class: "btn btn--primary",
                        href: "#projects",
                        onclick: move |event| {
                            event.prevent_default();
                            scroll_to_section("projects");
                        },
                        "View My Work"
                    }
                    a {
                        class: "btn btn--outline",
                        href: "#contact",
                        onclick: move |event| {
                            event.prevent_default();
                            scroll_to_section("contact");
                        },
                        "Get In Touch"
                    }
                }
            }
        }
    }
}

#[component]
fn AboutSection() -> Element {
    rsx! {
        section { id: "about", class: "about section",
            div { class: "container",
                SectionTitle { title: "About Me" }
                Reveal { class: "about-content",
                    for paragraph in ABOUT_PARAGRAPHS {
                        p { class: "about-text", "{paragraph}" }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillsSection() -> Element {
    rsx! {
        section { id: "skills", class: "skills section",
            div { class: "container",
                SectionTitle { title: "Skills" }
                div { class: "skills-grid",
                    for category in SKILL_CATEGORIES {
                        Reveal { key: "{category.title}", class: "skill-category",
                            h3 { class: "skill-category-title", "{category.title}" }
                            for skill in category.skills {
                                SkillBar { key: "{skill.name}", name: skill.name, percent: skill.percent }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectsSection() -> Element {
    rsx! {
        section { id: "projects", class: "projects section",
            div { class: "container",
                SectionTitle { title: "Projects" }
                div { class: "projects-grid",
                    for project in PROJECTS {
                        Reveal { key: "{project.title}", class: "project-card",
                            h3 { class: "project-title", "{project.title}" }
                            p { class: "project-description", "{project.description}" }
                            div { class: "project-tags",
                                for tag in project.tags {
                                    span { class: "project-tag", "{tag}" }
                                }
                            }
                            a {
                                class: "project-link",
                                href: project.source_url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "Source"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ExperienceSection() -> Element {
    rsx! {
        section { id: "experience", class: "experience section",
            div { class: "container",
                SectionTitle { title: "Experience" }
                div { class: "timeline",
                    for entry in TIMELINE {
                        Reveal { key: "{entry.period}", class: "timeline-item",
                            span { class: "timeline-period", "{entry.period}" }
                            h3 { class: "timeline-role", "{entry.role}" }
                            p { class: "timeline-place", "{entry.place}" }
                            p { class: "timeline-summary", "{entry.summary}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AchievementsSection() -> Element {
    rsx! {
        section { id: "achievements", class: "achievements section",
            div { class: "container",
                SectionTitle { title: "Achievements" }
                div { class: "achievements-grid",
                    for achievement in ACHIEVEMENTS {
                        Reveal { key: "{achievement.title}", class: "achievement-card",
                            span { class: "achievement-icon", "{achievement.icon}" }
                            h3 { class: "achievement-title", "{achievement.title}" }
                            p { class: "achievement-detail", "{achievement.detail}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        document::Title { "Not Found | Portfolio" }
        div { class: "page not-found",
            h1 { "404" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, class: "btn btn--primary", "Back home" }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn root_path_is_home() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Home {}));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(
            "/nope/deeper".parse::<Route>().ok(),
            Some(Route::NotFound {
                route: vec!["nope".to_string(), "deeper".to_string()],
            })
        );
    }
}
