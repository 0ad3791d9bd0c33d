use leptos::prelude::*;
use leptos_use::{use_media_query, use_raf_fn, utils::Pausable, UseRafFnCallbackArgs};

use crate::{
    content::Stats,
    ribbon::{compact_number, count_up, star_fill, Sparkline},
};

use super::{
    icons::{BookmarkIcon, JobsIcon, StarIcon},
    profile::{BLUE, GREEN},
};

const COUNT_UP_MS: f64 = 800.0;

#[component]
pub fn StatsRibbon(stats: &'static Stats) -> impl IntoView {
    let can_hover = use_media_query("(hover: hover) and (pointer: fine)");
    let card_class = move || {
        if can_hover.get() {
            "metric-card metric-card-hover"
        } else {
            "metric-card"
        }
    };

    view! {
        <div class="flex items-center gap-3">
            <div class=card_class>
                <IconBubble from=GREEN to="#22c55e">
                    <span class="block h-4 w-4"><StarIcon filled=true /></span>
                </IconBubble>
                <div class="flex flex-col leading-tight">
                    <span class="text-xs text-zinc-500">"Rating"</span>
                    <span class="flex items-center gap-1">
                        <Stars rating=stats.rating max=stats.rating_max />
                        <span class="text-[13px] font-semibold tabular-nums text-zinc-800">
                            {format!("{:.1}", stats.rating)}
                        </span>
                    </span>
                </div>
            </div>

            <span class="ribbon-separator" aria-hidden="true" />

            <div class=card_class>
                <IconBubble from=BLUE to="#60a5fa">
                    <BookmarkIcon />
                </IconBubble>
                <div class="flex flex-col leading-tight">
                    <span class="text-xs text-zinc-500">"Bookmarks"</span>
                    <span class="whitespace-nowrap text-[13px] font-semibold text-zinc-800">
                        {compact_number(stats.bookmarks)}
                    </span>
                </div>
            </div>

            <span class="ribbon-separator" aria-hidden="true" />

            <div class=move || format!("{} pr-2", card_class())>
                <IconBubble from=GREEN to="#22c55e">
                    <JobsIcon />
                </IconBubble>
                <div class="flex flex-col leading-tight">
                    <span class="text-xs text-zinc-500">"Jobs"</span>
                    <span class="flex items-center gap-1">
                        <JobsCounter target=stats.jobs />
                        <TrendLine data=stats.trend.as_slice() stroke=BLUE />
                    </span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn IconBubble(from: &'static str, to: &'static str, children: Children) -> impl IntoView {
    view! {
        <span
            class="icon-bubble relative flex h-7 w-7 items-center justify-center rounded-full text-white shadow-sm"
            style=format!("background: linear-gradient(135deg, {from}, {to})")
        >
            <span class="relative z-10">{children()}</span>
        </span>
    }
}

/// Row of stars, the last partially filled for fractional ratings.
#[component]
pub fn Stars(rating: f64, max: u8) -> impl IntoView {
    view! {
        <span class="flex items-center gap-[2px]" role="img" aria-label=format!("{rating} out of {max}")>
            {star_fill(rating, max)
                .into_iter()
                .map(|fill| {
                    view! {
                        <span class="relative inline-block h-3.5 w-3.5 text-amber-400">
                            <StarIcon />
                            <span
                                class="absolute inset-0 overflow-hidden"
                                style=format!("width: {:.0}%", fill * 100.0)
                            >
                                <span class="block h-3.5 w-3.5">
                                    <StarIcon filled=true />
                                </span>
                            </span>
                        </span>
                    }
                })
                .collect_view()}
        </span>
    }
}

/// Counts up to `target` once hydrated.
#[component]
fn JobsCounter(target: u32) -> impl IntoView {
    let (shown, set_shown) = signal(0u32);
    let (done, set_done) = signal(false);
    let elapsed = StoredValue::new(0.0f64);

    let Pausable { pause, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        elapsed.update_value(|e| *e += args.delta);
        let ms = elapsed.get_value();
        set_shown.set(count_up(target, ms, COUNT_UP_MS));
        if ms >= COUNT_UP_MS {
            set_done.set(true);
        }
    });

    Effect::watch(
        move || done.get(),
        move |done, _, _| {
            if *done {
                pause();
            }
        },
        false,
    );

    view! {
        <span class="whitespace-nowrap text-[13px] font-semibold tabular-nums text-zinc-800">
            {move || shown.get()}
        </span>
    }
}

#[component]
fn TrendLine(data: &'static [f64], stroke: &'static str) -> impl IntoView {
    Sparkline::new(data, 60.0, 20.0).map(|line| {
        let (cx, cy) = line.last();
        view! {
            <svg viewBox="0 0 60 20" width="40" height="14" class="overflow-visible opacity-80" aria-hidden="true">
                <path d=line.path() fill="none" stroke=stroke stroke-width="2" />
                <circle cx=format!("{cx:.2}") cy=format!("{cy:.2}") r="2" fill=stroke />
            </svg>
        }
    })
}
