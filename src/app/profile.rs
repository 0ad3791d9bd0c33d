use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_use::use_media_query;

use crate::content::{profile, Link, Profile};

use super::{
    icons::{CheckIcon, LogoMark, PinIcon, SocialGlyph},
    stats::StatsRibbon,
    tabs::ProfileTabs,
    ContentErrorCard,
};

pub const BLUE: &str = "#124C98";
pub const GREEN: &str = "#059669";

#[component]
pub fn ProfilePage() -> impl IntoView {
    match profile() {
        Ok(p) => Either::Left(view! {
            <Title text=p.name.clone() />
            <section class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 pb-10">
                <Banner image=p.banner_image.as_deref() />
                <IdentityCard profile=p />
                <div class="mt-6 grid grid-cols-12 gap-6">
                    <Sidebar profile=p />
                    <div class="col-span-12 lg:col-span-8 xl:col-span-9 min-w-0 space-y-6">
                        <ProfileTabs profile=p />
                    </div>
                </div>
            </section>
        }),
        Err(error) => Either::Right(view! { <ContentErrorCard error /> }),
    }
}

/// Neutral spacer by default, a cover image when one is configured.
#[component]
fn Banner(image: Option<&'static str>) -> impl IntoView {
    match image {
        Some(src) => Either::Left(view! {
            <div class="relative mt-6 h-24 overflow-hidden rounded-[28px] sm:h-36">
                <img src=src alt="Banner" class="absolute inset-0 h-full w-full object-cover" loading="lazy" />
            </div>
        }),
        None => Either::Right(view! { <div class="relative h-16 overflow-hidden rounded-[28px] sm:h-20 md:h-24" /> }),
    }
}

#[component]
fn IdentityCard(profile: &'static Profile) -> impl IntoView {
    // hover tilt only where a fine pointer can hover
    let can_hover = use_media_query("(hover: hover) and (pointer: fine)");

    view! {
        <div class=move || {
            let base = "fade-up relative z-10 -mt-8 sm:-mt-10 md:-mt-14 rounded-[22px] border border-zinc-200 bg-white p-4 sm:p-5 md:p-6 shadow-[0_20px_60px_-28px_rgba(2,6,23,0.25)]";
            if can_hover.get() { format!("{base} card-tilt") } else { base.to_string() }
        }>
            <div class="grid min-w-0 gap-5 sm:gap-6 md:grid-cols-[minmax(0,1fr)_auto] md:items-start">
                <div class="flex min-w-0 gap-3 sm:gap-4">
                    <div class="relative h-20 w-20 shrink-0 overflow-hidden rounded-2xl border-4 border-white bg-zinc-100 shadow sm:h-24 sm:w-24 md:h-28 md:w-28 lg:h-32 lg:w-32">
                        <img
                            src=profile.avatar.clone()
                            alt="Profile photo"
                            class="h-full w-full object-cover"
                            loading="lazy"
                        />
                    </div>
                    <div class="min-w-0 max-w-full">
                        <h1 class="truncate text-base font-semibold text-zinc-900 sm:text-lg md:text-xl">
                            {profile.name.clone()}
                        </h1>
                        <p class="mt-0.5 flex flex-wrap items-center gap-1 text-xs text-zinc-600 sm:text-sm">
                            {profile.headline.clone()}
                            <span class="text-zinc-400">"@"</span>
                            {profile.company_logo.as_ref().map(|logo| view! { <LogoMark logo /> })}
                            {profile.company.clone()}
                        </p>
                        <div class="mt-2 flex flex-wrap gap-2 sm:mt-3">
                            {profile
                                .skills
                                .iter()
                                .map(|s| {
                                    view! {
                                        <span class="rounded-lg border border-zinc-200 bg-zinc-50 px-2.5 py-1 text-[12px] text-zinc-700 break-words">
                                            {s.clone()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="mt-2 inline-flex items-center gap-2 rounded-xl border border-zinc-200 bg-zinc-50 px-2.5 py-1.5 text-xs text-zinc-700 sm:text-sm">
                            <PinIcon />
                            <span class="truncate">{profile.location.clone()}</span>
                        </div>
                    </div>
                </div>
                <div class="hidden min-w-0 md:flex md:flex-col md:items-end md:gap-2">
                    <div class="w-[230px]">
                        <Cta link=&profile.ctas.primary color=BLUE />
                    </div>
                    <div class="w-[230px]">
                        <Cta link=&profile.ctas.secondary color=GREEN />
                    </div>
                </div>
            </div>

            <div class="mt-4 pl-0 sm:pl-5">
                <p class="mb-2 text-xs font-semibold text-zinc-600">"Social Profiles"</p>
                <div
                    aria-label="Social profiles and summary"
                    class="strip flex w-full items-center gap-3 overflow-x-auto overflow-y-hidden whitespace-nowrap py-1 snap-x snap-mandatory sm:gap-4"
                >
                    {profile
                        .socials
                        .iter()
                        .map(|s| {
                            view! {
                                <a
                                    href=s.href.clone()
                                    title=s.name.clone()
                                    aria-label=s.name.clone()
                                    class="social-chip group relative inline-flex h-10 w-10 shrink-0 snap-start items-center justify-center rounded-full border border-zinc-200 bg-white shadow-sm"
                                >
                                    <span class="h-5 w-5" style=format!("color: {}", s.color)>
                                        <SocialGlyph icon=s.icon />
                                    </span>
                                </a>
                            }
                        })
                        .collect_view()}
                    <span class="h-10 w-px shrink-0 snap-start bg-zinc-200" />
                    <StatsRibbon stats=&profile.stats />
                </div>
            </div>

            <div class="mt-4 space-y-3 md:hidden">
                <Cta link=&profile.ctas.primary color=BLUE />
                <Cta link=&profile.ctas.secondary color=GREEN />
            </div>
        </div>
    }
}

#[component]
fn Cta(link: &'static Link, color: &'static str) -> impl IntoView {
    view! {
        <a
            href=link.href.clone()
            class="inline-flex h-10 w-full items-center justify-center rounded-xl px-6 text-sm font-bold text-white shadow-sm transition hover:opacity-95 focus:outline-none focus-visible:ring-2 focus-visible:ring-offset-2"
            style=format!("background-color: {color}")
        >
            {link.label.clone()}
        </a>
    }
}

#[component]
fn Sidebar(profile: &'static Profile) -> impl IntoView {
    view! {
        <aside class="col-span-12 min-w-0 space-y-6 self-start lg:sticky lg:top-24 lg:col-span-4 xl:col-span-3">
            <div class="earnings-card relative overflow-hidden rounded-[22px] border border-zinc-200 bg-white p-5 shadow-sm">
                <div class="absolute -right-8 -top-8 h-24 w-24 rounded-full bg-blue-100 opacity-20" />
                <p class="text-xs font-semibold uppercase tracking-widest" style=format!("color: {BLUE}")>
                    {profile.earnings.label.clone()}
                </p>
                <p class="mt-1 bg-gradient-to-r from-blue-500 to-blue-700 bg-clip-text text-3xl font-extrabold text-transparent">
                    {profile.earnings.amount.clone()}
                </p>
                <p class="mt-1 text-[12px]" style=format!("color: {BLUE}CC")>
                    {profile.earnings.basis.clone()}
                </p>
            </div>

            <div class="rounded-[22px] border border-zinc-200 bg-white p-5">
                <h3 class="text-sm font-semibold text-zinc-900">"Portfolio Links"</h3>
                <div class="mt-4 flex items-center gap-3 sm:gap-4">
                    {profile
                        .portfolio_links
                        .iter()
                        .map(|p| {
                            view! {
                                <a
                                    href=p.href.clone()
                                    aria-label=p.label.clone()
                                    title=p.label.clone()
                                    class="inline-flex h-11 w-11 items-center justify-center rounded-full border border-zinc-200 bg-white text-sm font-semibold shadow-sm transition hover:-translate-y-0.5"
                                >
                                    {p.abbr.clone()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="rounded-[22px] border border-zinc-200 bg-white p-5">
                <h3 class="text-sm font-semibold text-zinc-900">"Verifications"</h3>
                <ul class="mt-3 space-y-3">
                    {profile
                        .verifications
                        .iter()
                        .map(|v| {
                            view! {
                                <li class="flex items-center justify-between">
                                    <span class="break-words text-sm text-zinc-700">{v.label.clone()}</span>
                                    <span class="inline-flex items-center gap-2">
                                        {v
                                            .action
                                            .clone()
                                            .map(|action| {
                                                view! {
                                                    <a
                                                        href="#"
                                                        class="rounded-lg border border-zinc-200 px-2.5 py-1 text-xs font-medium text-zinc-700 hover:bg-zinc-50"
                                                    >
                                                        {action}
                                                    </a>
                                                }
                                            })}
                                        <CheckIcon ok=v.ok />
                                    </span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>

            <div class="rounded-[22px] border border-zinc-200 bg-white p-5">
                <h3 class="text-sm font-semibold text-zinc-900">"Proficiency"</h3>
                <div class="mt-4 space-y-4">
                    {profile
                        .proficiency
                        .iter()
                        .map(|p| {
                            view! {
                                <div>
                                    <div class="mb-1 flex items-center justify-between">
                                        <span class="text-sm text-zinc-700">{p.label.clone()}</span>
                                        <span class="text-xs text-zinc-500">{format!("{}%", p.pct)}</span>
                                    </div>
                                    <div
                                        class="h-2 w-full overflow-hidden rounded-full bg-zinc-100"
                                        role="progressbar"
                                        aria-label=p.label.clone()
                                        aria-valuenow=p.pct.to_string()
                                        aria-valuemin="0"
                                        aria-valuemax="100"
                                    >
                                        <div
                                            class="grow-bar h-2 rounded-full"
                                            style=format!("width: {}%; background: {GREEN}", p.pct)
                                        />
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </aside>
    }
}
