use crate::browser::{LocalStore, RainHandle};
use crate::config::PageConfig;
use crate::content::{
    career_timeline, has_connector, skills_in, SkillCategory, EDUCATION, PROFILE, REFERENCES,
};
use crate::log::Logger;
use crate::rain::RainConfig;
use crate::theme::{Theme, ThemeController};
use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlCanvasElement};
use yew::prelude::*;

fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    // The browser calls this after the current frame is captured, so it must outlive this scope.
    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition
        .call1(&document_js, &callback)
        .is_err()
    {
        apply_theme(theme);
    }
}

#[derive(Properties, PartialEq)]
struct RainBackgroundProps {
    config: RainConfig,
    logger: Logger,
}

#[function_component(RainBackground)]
fn rain_background(props: &RainBackgroundProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let config = props.config;
        let logger = props.logger;
        use_effect_with((), move |_| {
            let handle = canvas_ref
                .cast::<HtmlCanvasElement>()
                .and_then(|canvas| RainHandle::mount(canvas, config, logger));

            move || {
                if let Some(mut handle) = handle {
                    handle.teardown();
                }
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} class="rain-canvas" aria-hidden="true" />
    }
}

#[function_component(InfoPanel)]
fn info_panel() -> Html {
    let career_bar = format!("width: {}%;", PROFILE.career_bar_percent);

    html! {
        <section class="panel info-panel" aria-labelledby="info-heading">
            <div class="panel-head">
                <h2 id="info-heading" class="panel-title">{"NODE: INFORMATION"}</h2>
                <p class="panel-caption">{PROFILE.name}</p>
                <p class="panel-caption">{PROFILE.headline}</p>
            </div>
            <div class="panel-head">
                <div class="badge-row">
                    <span class="badge badge-glow">
                        {"LEVEL "}<strong>{PROFILE.level}</strong>{format!(" / {}", PROFILE.level_title)}
                    </span>
                    <span class="badge">
                        {"XP: "}<strong class="xp">{format!("{}%", PROFILE.xp_percent)}</strong>{" → NEXT UPGRADE"}
                    </span>
                </div>
                <div class="locale">
                    <div>{format!("LOCATION: {}", PROFILE.location)}</div>
                    <div>{format!("LANGUAGE: {}", PROFILE.languages)}</div>
                </div>
            </div>
            <div class="profile">
                <img
                    class="portrait"
                    src={PROFILE.portrait}
                    alt={format!("Portrait of {}", PROFILE.display_name)}
                    width="96"
                    height="96"
                />
                <p class="summary">{PROFILE.summary}</p>
            </div>
            <div class="career-xp">
                <div class="career-xp-label">
                    <span>{"CAREER_XP"}</span>
                    <span>{PROFILE.career_span}</span>
                </div>
                <div class="career-xp-track">
                    <div class="career-xp-fill" style={career_bar} />
                </div>
            </div>
            <div class="contacts">
                { for PROFILE.contacts.iter().map(|contact| html! {
                    <a
                        key={contact.label}
                        class="contact"
                        href={contact.href}
                        target={contact.external.then_some("_blank")}
                        rel={contact.external.then_some("noopener noreferrer")}
                    >
                        <span class="contact-label">{contact.label}</span>
                        <span class={classes!("contact-value", contact.external.then_some("is-link"))}>
                            {contact.display}
                        </span>
                    </a>
                }) }
            </div>
        </section>
    }
}

#[function_component(QuestLog)]
fn quest_log() -> Html {
    let total = career_timeline().len();

    html! {
        <section class="panel" aria-labelledby="quest-heading">
            <h2 id="quest-heading" class="panel-title">{"QUEST_LOG // CAREER"}</h2>
            <p class="panel-caption">{"INDUSTRIAL EXPOSURE & EXPERIENCE"}</p>
            <ol class="timeline">
                { for career_timeline().enumerate().map(|(index, employer)| html! {
                    <li key={employer.company} class="timeline-entry">
                        <div class="timeline-dot" />
                        if has_connector(index, total) {
                            <div class="timeline-connector" />
                        }
                        <div class="timeline-head">
                            <span class="company">{employer.company}</span>
                            <span class="period">{employer.overall_period}</span>
                        </div>
                        <div class="roles">
                            { for employer.roles.iter().map(|role| html! {
                                <div key={format!("{}{}", role.title, role.period)} class="role">
                                    <div class="role-head">
                                        <span class="role-title">{role.title}</span>
                                        if role.highlight {
                                            <span class="promoted">{"PROMOTED"}</span>
                                        }
                                        <span class="period">{role.period}</span>
                                    </div>
                                    <p class="role-summary">{role.summary}</p>
                                </div>
                            }) }
                        </div>
                    </li>
                }) }
            </ol>
        </section>
    }
}

#[function_component(SkillTree)]
fn skill_tree() -> Html {
    html! {
        <section class="panel" aria-labelledby="skills-heading">
            <h2 id="skills-heading" class="panel-title">{"SKILL_TREE // PROGRAMMING"}</h2>
            <p class="panel-caption">{"LANGUAGES & FRAMEWORKS"}</p>
            <div class="skill-grid">
                { for skills_in(SkillCategory::Programming).map(|skill| html! {
                    <div key={skill.name} class={classes!("skill-card", skill.level.badge_class())}>
                        <div class="skill-name">{skill.name}</div>
                        <div class="skill-level">{format!("{} MASTERY", skill.level.label())}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Inventory)]
fn inventory() -> Html {
    html! {
        <section class="panel" aria-labelledby="tools-heading">
            <h2 id="tools-heading" class="panel-title">{"INVENTORY // TOOLS"}</h2>
            <p class="panel-caption">{"DATABASES · DEVOPS · CLOUD"}</p>
            <div class="tool-list">
                { for skills_in(SkillCategory::Tools).map(|skill| html! {
                    <span key={skill.name} class={classes!("tool-chip", skill.level.badge_class())}>
                        {skill.name}
                    </span>
                }) }
            </div>
        </section>
    }
}

#[function_component(CvOverview)]
fn cv_overview() -> Html {
    html! {
        <section class="panel cv-overview" aria-labelledby="cv-heading">
            <div class="cv-head">
                <div>
                    <h2 id="cv-heading" class="panel-title">{"CV_OVERVIEW"}</h2>
                    <p class="panel-caption">{"SNAPSHOT OF EDUCATION & REFERENCES"}</p>
                </div>
                <div class="badge-row">
                    { for PROFILE.focus_tags.iter().map(|tag| html! {
                        <span key={*tag} class="badge">{*tag}</span>
                    }) }
                </div>
            </div>
            <div class="cv-columns">
                <div>
                    <h3 class="subheading">{"CAREER_OBJECTIVE"}</h3>
                    <p class="summary">{PROFILE.objective}</p>

                    <h3 class="subheading">{"EDUCATION"}</h3>
                    <ul class="education">
                        { for EDUCATION.iter().map(|entry| html! {
                            <li key={entry.institution}>
                                <div class="education-head">
                                    <span>{entry.institution}</span>
                                    <span>{entry.period}</span>
                                </div>
                                <div class="education-title">{entry.title}</div>
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h3 class="subheading">{"REFERENCES"}</h3>
                    <div class="references">
                        { for REFERENCES.iter().map(|reference| html! {
                            <div key={reference.name} class="reference">
                                <div class="reference-name">{reference.name}</div>
                                <div class="reference-role">{reference.role}</div>
                                <div class="reference-line">{format!("Phone: {}", reference.phone)}</div>
                                <div class="reference-line">{format!("Email: {}", reference.email)}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: PageConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let logger = Logger::new(props.config.log_level);
    let controller = use_mut_ref(move || ThemeController::new(LocalStore, logger));
    let theme = use_state(|| None::<Theme>);

    {
        let controller = controller.clone();
        let theme = theme.clone();
        use_effect_with((), move |_| {
            let current = controller.borrow_mut().initialize();
            apply_theme(current);
            theme.set(Some(current));
            || ()
        });
    }

    let on_toggle = {
        let controller = controller.clone();
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = controller.borrow_mut().toggle();
            apply_theme_with_transition(next);
            theme.set(Some(next));
        })
    };

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            if let Some(current) = *theme {
                if current.shows_rain() {
                    <RainBackground config={props.config.rain} logger={logger} />
                }
            }
            <div class="page-shell">
                <header class="site-header">
                    <span class="prompt">{"root@resume:~$ whoami"}</span>
                    if let Some(current) = *theme {
                        <button
                            class="theme-toggle"
                            type="button"
                            aria-label={current.toggle_label()}
                            aria-pressed={current.pressed().to_string()}
                            onclick={on_toggle}
                        >
                            <span aria-hidden="true">{current.icon()}</span>
                        </button>
                    }
                </header>

                <main id="content">
                    <div class="grid grid-info">
                        <InfoPanel />
                        <QuestLog />
                    </div>
                    <div class="grid grid-skills">
                        <SkillTree />
                        <Inventory />
                    </div>
                    <CvOverview />
                </main>

                <footer class="site-footer">
                    <span>{format!("© 2020 {}", PROFILE.display_name)}</span>
                    <span>{"Rendered with Yew · THE MATRIX HAS YOU"}</span>
                </footer>
            </div>
        </>
    }
}

pub fn run() {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");
    let config = PageConfig::from_element(&root);

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
