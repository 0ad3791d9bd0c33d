use leptos::{either::EitherOf4, prelude::*};

use crate::{
    content::{Education, Experience, Feedback, Profile},
    state::{TabController, TabKey},
};

use super::{
    icons::LogoMark,
    portfolio::PortfolioSection,
    profile::{BLUE, GREEN},
    stats::Stars,
};

#[component]
pub fn ProfileTabs(profile: &'static Profile) -> impl IntoView {
    let tabs = RwSignal::new(TabController::new());

    view! {
        <div class="rounded-[22px] border border-zinc-200 bg-white">
            <div
                role="tablist"
                aria-label="Profile tabs"
                class="strip relative flex gap-4 overflow-x-auto whitespace-nowrap border-b border-zinc-200 px-3 sm:gap-6 sm:px-4 md:overflow-x-visible md:px-5"
            >
                {TabKey::ALL
                    .into_iter()
                    .map(|key| {
                        let active = move || tabs.with(|t| t.is_active(key));
                        view! {
                            <button
                                type="button"
                                role="tab"
                                id=key.tab_id()
                                aria-selected=move || active().to_string()
                                aria-controls=key.panel_id()
                                tabindex=move || if active() { "0" } else { "-1" }
                                on:click=move |_| {
                                    tabs.update(|t| {
                                        t.select(key);
                                    });
                                }
                                class=move || {
                                    if active() {
                                        "relative -mb-px whitespace-nowrap px-1.5 py-3 text-sm font-semibold text-zinc-900 sm:px-2"
                                    } else {
                                        "relative -mb-px whitespace-nowrap px-1.5 py-3 text-sm text-zinc-500 hover:text-zinc-800 sm:px-2"
                                    }
                                }
                            >
                                {key.label()}
                                <Show when=active>
                                    <span
                                        class="tab-underline absolute inset-x-0 -bottom-px h-0.5"
                                        style=format!("background: {BLUE}")
                                    />
                                </Show>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <TabPanels profile tabs />
        </div>
    }
}

/// The active tab's panel. The others are not mounted.
#[component]
fn TabPanels(profile: &'static Profile, tabs: RwSignal<TabController>) -> impl IntoView {
    let rating_max = profile.stats.rating_max;
    move || match tabs.with(TabController::active) {
        TabKey::About => EitherOf4::A(view! { <AboutPanel profile /> }),
        TabKey::Experience => EitherOf4::B(view! { <ExperiencePanel items=&profile.experience /> }),
        TabKey::Education => EitherOf4::C(view! { <EducationPanel items=&profile.education /> }),
        TabKey::Feedback => {
            EitherOf4::D(view! { <FeedbackPanel items=&profile.feedback rating_max /> })
        }
    }
}

#[component]
fn TabPanel(tab: TabKey, children: Children) -> impl IntoView {
    view! {
        <div
            id=tab.panel_id()
            role="tabpanel"
            aria-labelledby=tab.tab_id()
            class="tab-panel p-4 sm:p-5 md:p-6"
        >
            {children()}
        </div>
    }
}

#[component]
fn AboutPanel(profile: &'static Profile) -> impl IntoView {
    let about = &profile.about;
    view! {
        <TabPanel tab=TabKey::About>
            <section>
                <h4 class="text-sm font-semibold text-zinc-900">"About Me"</h4>
                <p class="mt-1 text-sm text-zinc-700">{about.summary.clone()}</p>
                <ul class="mt-3 list-disc space-y-1 pl-5 text-sm text-zinc-700">
                    {about.bullets.iter().map(|b| view! { <li>{b.clone()}</li> }).collect_view()}
                </ul>
            </section>

            <div class="fade-up mt-4 rounded-[22px] border border-emerald-200 bg-white p-5">
                <div class="flex items-center gap-2">
                    <span class="inline-flex h-5 w-5 items-center justify-center rounded-full bg-emerald-100 text-[12px]">
                        "✦"
                    </span>
                    <h3 class="text-sm font-semibold" style=format!("color: {GREEN}")>
                        "AI Review Highlights"
                    </h3>
                </div>
                <ul class="mt-3 list-disc space-y-1 pl-5 text-sm text-zinc-700">
                    {about.highlights.iter().map(|h| view! { <li>{h.clone()}</li> }).collect_view()}
                </ul>
            </div>

            <PortfolioSection images=&profile.portfolio />
        </TabPanel>
    }
}

#[component]
fn ExperiencePanel(items: &'static [Experience]) -> impl IntoView {
    view! {
        <TabPanel tab=TabKey::Experience>
            <h4 class="text-sm font-semibold text-zinc-900">"Work Experience"</h4>
            <p class="mt-1 text-sm text-zinc-600">
                "A timeline of roles with scope, impact, and key outcomes."
            </p>
            <div class="stagger mt-3 grid grid-cols-1 gap-4 md:grid-cols-2">
                {items
                    .iter()
                    .map(|e| {
                        view! {
                            <div class="rounded-xl border border-zinc-200 bg-white p-4">
                                <div class="flex min-w-0 items-start gap-3">
                                    <div class="flex h-10 w-10 shrink-0 items-center justify-center rounded-lg border border-zinc-200 bg-zinc-50 text-lg">
                                        <LogoMark logo=&e.logo />
                                    </div>
                                    <div class="min-w-0">
                                        <p class="truncate text-sm font-semibold text-zinc-900">{e.role.clone()}</p>
                                        <p class="truncate text-sm text-zinc-700">{e.company.clone()}</p>
                                        <p class="text-xs text-zinc-500">{e.when.clone()}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </TabPanel>
    }
}

#[component]
fn EducationPanel(items: &'static [Education]) -> impl IntoView {
    view! {
        <TabPanel tab=TabKey::Education>
            <h4 class="text-sm font-semibold text-zinc-900">"Education"</h4>
            <div class="mt-3 space-y-4">
                {items
                    .iter()
                    .map(|e| {
                        view! {
                            <div class="rounded-xl border border-zinc-200 bg-white p-4">
                                <div class="flex items-start justify-between gap-3">
                                    <div class="min-w-0">
                                        <p class="truncate text-sm font-semibold text-zinc-900">{e.school.clone()}</p>
                                        <p class="truncate text-sm text-zinc-700">{e.degree.clone()}</p>
                                        <p class="truncate text-xs text-zinc-500">{e.location.clone()}</p>
                                    </div>
                                    <span class="shrink-0 text-xs text-zinc-500">{e.period.clone()}</span>
                                </div>
                                {(!e.details.is_empty())
                                    .then(|| {
                                        view! {
                                            <ul class="mt-3 list-disc space-y-1 pl-4 text-sm text-zinc-700">
                                                {e
                                                    .details
                                                    .iter()
                                                    .map(|d| view! { <li>{d.clone()}</li> })
                                                    .collect_view()}
                                            </ul>
                                        }
                                    })}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </TabPanel>
    }
}

#[component]
fn FeedbackPanel(items: &'static [Feedback], rating_max: u8) -> impl IntoView {
    view! {
        <TabPanel tab=TabKey::Feedback>
            <section>
                <h4 class="text-sm font-semibold text-zinc-900">"Feedback"</h4>
                <ul class="mt-3 space-y-3">
                    {items
                        .iter()
                        .map(|f| {
                            view! {
                                <li class="rounded-xl border border-zinc-200 bg-white p-4">
                                    <div class="flex flex-wrap items-center justify-between gap-2">
                                        <p class="break-words text-sm font-semibold text-zinc-900">{f.from.clone()}</p>
                                        <div class="flex items-center gap-2">
                                            <Stars rating=f64::from(f.rating) max=rating_max />
                                            <time
                                                class="text-xs text-zinc-500"
                                                datetime=f.date.format("%Y-%m-%d").to_string()
                                            >
                                                {f.date.format("%b %e, %Y").to_string()}
                                            </time>
                                        </div>
                                    </div>
                                    <p class="mt-2 text-sm text-zinc-700">{f.text.clone()}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </TabPanel>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::profile;
    use leptos::tachys::view::RenderHtml;

    fn render_panels(select: Option<TabKey>) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let profile = profile().expect("embedded profile should be valid");
            let tabs = RwSignal::new(TabController::new());
            if let Some(key) = select {
                tabs.update(|t| {
                    t.select(key);
                });
            }
            view! { <TabPanels profile tabs /> }.to_html()
        })
    }

    #[test]
    fn test_default_renders_about_panel_only() {
        let html = render_panels(None);
        assert_eq!(html.matches(r#"role="tabpanel""#).count(), 1);
        assert!(html.contains(r#"id="panel-about""#));
    }

    #[test]
    fn test_third_tab_is_the_only_rendered_panel() {
        let html = render_panels(Some(TabKey::ALL[2]));
        assert_eq!(html.matches(r#"role="tabpanel""#).count(), 1);
        assert!(html.contains(r#"id="panel-education""#));
        assert!(!html.contains(r#"id="panel-about""#));
        assert!(!html.contains(r#"id="panel-experience""#));
        assert!(!html.contains(r#"id="panel-feedback""#));
    }
}
