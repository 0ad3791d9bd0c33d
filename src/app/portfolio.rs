use leptos::{either::Either, prelude::*};

use crate::state::{Lightbox, LightboxState};

use super::{icons::CloseIcon, keyboard::use_scoped_keys};

#[component]
pub fn PortfolioSection(images: &'static [String]) -> impl IntoView {
    let lightbox = match Lightbox::new(images.len()) {
        Ok(lightbox) => RwSignal::new(lightbox),
        Err(e) => {
            log::warn!("portfolio not rendered: {e}");
            return Either::Left(());
        }
    };

    Either::Right(view! {
        <section class="mt-6">
            <h3 class="text-sm font-semibold text-zinc-900">"Portfolio"</h3>
            <div class="mt-3 grid grid-cols-2 gap-3 sm:grid-cols-3 lg:grid-cols-4">
                {images
                    .iter()
                    .enumerate()
                    .map(|(i, src)| {
                        view! {
                            <button
                                type="button"
                                aria-label=format!("Open image {} of {}", i + 1, images.len())
                                class="group relative aspect-[4/3] overflow-hidden rounded-xl border border-zinc-200 bg-zinc-100 focus:outline-none focus-visible:ring-2 focus-visible:ring-blue-500"
                                on:click=move |_| {
                                    lightbox.update(|lb| {
                                        if let Err(e) = lb.open(i) {
                                            log::error!("{e}");
                                        }
                                    });
                                }
                            >
                                <img
                                    src=src.clone()
                                    alt=format!("Portfolio image {}", i + 1)
                                    loading="lazy"
                                    class="h-full w-full object-cover transition duration-300 group-hover:scale-105"
                                />
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show when=move || lightbox.with(Lightbox::is_open)>
                <LightboxDialog images lightbox />
            </Show>
        </section>
    })
}

/// Full-screen viewer. Mounted only while open, which scopes its key listener.
#[component]
fn LightboxDialog(images: &'static [String], lightbox: RwSignal<Lightbox>) -> impl IntoView {
    use_scoped_keys(move |key| lightbox.try_update(|lb| lb.handle_key(key)).unwrap_or(false));

    let current = move || match lightbox.with(Lightbox::state) {
        LightboxState::Open(i) => images.get(i).cloned(),
        LightboxState::Closed => None,
    };

    view! {
        <div
            role="dialog"
            aria-modal="true"
            aria-label="Portfolio image viewer"
            class="lightbox fixed inset-0 z-50 flex items-center justify-center bg-black/80 p-4"
            on:click=move |_| lightbox.update(Lightbox::close)
        >
            <div class="relative max-h-full max-w-5xl" on:click=|ev| ev.stop_propagation()>
                <img
                    src=current
                    alt=move || format!("Portfolio image {}", lightbox.with(Lightbox::counter))
                    class="max-h-[80vh] w-auto rounded-xl object-contain shadow-2xl"
                />
                <button
                    type="button"
                    aria-label="Close viewer"
                    class="absolute -top-3 -right-3 rounded-full bg-white p-2 text-zinc-700 shadow hover:text-zinc-900"
                    on:click=move |_| lightbox.update(Lightbox::close)
                >
                    <CloseIcon />
                </button>
                <button
                    type="button"
                    aria-label="Previous image"
                    class="absolute left-2 top-1/2 -translate-y-1/2 rounded-full bg-white/90 px-3 py-2 text-lg text-zinc-800 shadow hover:bg-white"
                    on:click=move |_| lightbox.update(Lightbox::previous)
                >
                    "‹"
                </button>
                <button
                    type="button"
                    aria-label="Next image"
                    class="absolute right-2 top-1/2 -translate-y-1/2 rounded-full bg-white/90 px-3 py-2 text-lg text-zinc-800 shadow hover:bg-white"
                    on:click=move |_| lightbox.update(Lightbox::next)
                >
                    "›"
                </button>
                <p class="mt-3 text-center text-sm tabular-nums text-white/80" aria-live="polite">
                    {move || lightbox.with(Lightbox::counter)}
                </p>
            </div>
        </div>
    }
}
