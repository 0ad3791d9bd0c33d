use leptos::prelude::*;

use crate::content::FooterConfig;

use super::icons::SocialGlyph;

#[component]
pub fn Footer(footer: &'static FooterConfig) -> impl IntoView {
    let brand = footer.brand.trim_end_matches('.');

    view! {
        <footer class="relative mt-auto overflow-hidden bg-[#0B1220] text-zinc-300" data-build=env!("BUILD_TIME")>
            <div class="relative z-10 mx-auto max-w-7xl px-4 py-12 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 gap-10 md:grid-cols-12">
                    <div class="md:col-span-4">
                        <p class="text-lg font-semibold tracking-wide text-white">{footer.brand.clone()}</p>
                        <p class="mt-3 max-w-sm text-sm text-zinc-400">{footer.blurb.clone()}</p>
                        <div class="mt-5 flex items-center gap-3">
                            {footer
                                .socials
                                .iter()
                                .map(|s| {
                                    view! {
                                        <a
                                            href=s.href.clone()
                                            aria-label=s.name.clone()
                                            title=s.name.clone()
                                            class="inline-flex h-9 w-9 items-center justify-center rounded-full bg-white/10 text-white transition hover:bg-white/20"
                                        >
                                            <SocialGlyph icon=s.icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-8 sm:grid-cols-3 md:col-span-8">
                        {footer
                            .columns
                            .iter()
                            .map(|col| {
                                view! {
                                    <div>
                                        <h4 class="text-sm font-semibold text-white">{col.title.clone()}</h4>
                                        <ul class="mt-4 space-y-2 text-sm">
                                            {col
                                                .links
                                                .iter()
                                                .map(|l| {
                                                    view! {
                                                        <li>
                                                            <a href=l.href.clone() class="text-zinc-400 transition hover:text-white">
                                                                {l.label.clone()}
                                                            </a>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="my-8 h-px bg-gradient-to-r from-transparent via-white/15 to-transparent" />

                <div class="flex flex-col items-start justify-between gap-4 text-xs text-zinc-500 sm:flex-row sm:items-center">
                    <p>{format!("© {} {brand}. All rights reserved.", env!("BUILD_YEAR"))}</p>
                    <nav class="flex flex-wrap gap-x-5 gap-y-2">
                        {footer
                            .legal
                            .iter()
                            .map(|l| {
                                view! {
                                    <a href=l.href.clone() class="transition hover:text-zinc-300">
                                        {l.label.clone()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>

            <p
                class="animate-gradient pointer-events-none absolute -bottom-6 left-1/2 -translate-x-1/2 select-none whitespace-nowrap bg-gradient-to-r from-white/5 via-white/10 to-white/5 bg-clip-text text-[18vw] font-black leading-none text-transparent"
                aria-hidden="true"
            >
                {brand.to_uppercase()}
            </p>
        </footer>
    }
}
