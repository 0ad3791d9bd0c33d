use leptos::{either::Either, html, prelude::*};
use leptos_router::{components::*, hooks::use_location};

use crate::{
    content::{Link, NavConfig, NavVariant},
    state::{Drawer, Key},
};

use super::{
    icons::{CloseIcon, MenuIcon},
    keyboard::use_scoped_keys,
};

const ACCENT: &str = "#e61d88";

fn accent_style(active: bool) -> String {
    if active {
        format!("color: {ACCENT}")
    } else {
        String::new()
    }
}

#[component]
pub fn Navbar(nav: &'static NavConfig) -> impl IntoView {
    let drawer = RwSignal::new(Drawer::new());
    let pathname = use_location().pathname;
    let is_active = move |href: &str| pathname.with(|p| p == href);

    view! {
        <header class="bg-white">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <div class="flex h-16 items-center justify-between border-b border-gray-300">
                    <A href="/" attr:class="text-lg font-semibold tracking-wide">
                        {nav.brand.clone()}
                    </A>

                    <nav class="hidden items-center gap-8 md:flex">
                        {nav
                            .links
                            .iter()
                            .map(move |link| {
                                let href: &'static str = &link.href;
                                let active = move || is_active(href);
                                view! {
                                    <a
                                        href=link.href.clone()
                                        class=move || {
                                            if active() {
                                                "nav-link relative group font-medium text-md"
                                            } else {
                                                "nav-link relative group font-medium text-sm text-gray-700 hover:text-black"
                                            }
                                        }
                                        style=move || accent_style(active())
                                        aria-current=move || active().then_some("page")
                                    >
                                        {link.label.clone()}
                                        <span class=move || {
                                            if active() {
                                                "nav-underline nav-underline-active"
                                            } else {
                                                "nav-underline"
                                            }
                                        } />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="hidden items-center gap-4 font-medium md:flex">
                        <a href=nav.sign_up.href.clone() class="text-gray-700 transition-colors hover:text-black">
                            {nav.sign_up.label.clone()}
                        </a>
                        <a
                            href=nav.log_in.href.clone()
                            class="rounded-full border border-gray-400 px-4 py-1 transition-colors hover:bg-gray-100"
                        >
                            {nav.log_in.label.clone()}
                        </a>
                    </div>

                    <button
                        type="button"
                        class="p-2 md:hidden"
                        aria-label="Open menu"
                        aria-expanded=move || drawer.with(Drawer::is_open).to_string()
                        on:click=move |_| match nav.variant {
                            NavVariant::Dropdown => drawer.update(Drawer::toggle),
                            NavVariant::Drawer => drawer.update(Drawer::open),
                        }
                    >
                        <MenuIcon />
                    </button>
                </div>
            </div>
            {match nav.variant {
                NavVariant::Dropdown => Either::Left(view! { <DropdownMenu nav drawer /> }),
                NavVariant::Drawer => {
                    Either::Right(
                        view! {
                            <Show when=move || drawer.with(Drawer::is_open)>
                                <DrawerPanel nav drawer />
                            </Show>
                        },
                    )
                }
            }}
        </header>
    }
}

#[component]
fn DropdownMenu(nav: &'static NavConfig, drawer: RwSignal<Drawer>) -> impl IntoView {
    let menu_ref = NodeRef::<html::Nav>::new();

    view! {
        <div class=move || {
            if drawer.with(Drawer::is_open) {
                "md:hidden overflow-hidden bg-white transition-all duration-300 ease-in-out max-h-96 opacity-100"
            } else {
                "md:hidden overflow-hidden bg-white transition-all duration-300 ease-in-out max-h-0 opacity-0"
            }
        }>
            <nav
                node_ref=menu_ref
                tabindex="-1"
                aria-label="Mobile navigation"
                class="flex flex-col gap-3 p-4 font-medium focus:outline-none"
            >
                <MenuLinks nav drawer item_class="transition-colors text-gray-700 hover:text-black" />
            </nav>
            <Show when=move || drawer.with(Drawer::is_open)>
                <OpenDropdown drawer menu_ref />
            </Show>
        </div>
    }
}

/// Holds the dropdown's key listener and focus hand-off while it is open.
#[component]
fn OpenDropdown(drawer: RwSignal<Drawer>, menu_ref: NodeRef<html::Nav>) -> impl IntoView {
    use_open_menu(drawer, move || menu_ref.get().map(|menu| menu.focus().is_ok()));
}

/// Side drawer. Mounted only while open, which scopes its Escape listener.
#[component]
fn DrawerPanel(nav: &'static NavConfig, drawer: RwSignal<Drawer>) -> impl IntoView {
    let panel_ref = NodeRef::<html::Aside>::new();

    use_open_menu(drawer, move || panel_ref.get().map(|panel| panel.focus().is_ok()));

    let close = move |_| drawer.update(Drawer::close);

    view! {
        <div class="drawer-overlay fixed inset-0 z-40 bg-black/40 backdrop-blur-sm" on:click=close />
        <aside
            node_ref=panel_ref
            role="dialog"
            aria-modal="true"
            aria-label="Mobile navigation"
            tabindex="-1"
            class="drawer-panel fixed left-0 top-0 z-50 h-dvh w-[19rem] overflow-y-auto rounded-r-2xl bg-white shadow-2xl ring-1 ring-black/5 focus:outline-none"
        >
            <div class="flex items-center justify-between px-5 py-4">
                <div class="leading-tight">
                    <p class="text-base font-semibold">{nav.brand.trim_end_matches('.').to_string()}</p>
                    <p class="text-xs text-gray-500">"Menu"</p>
                </div>
                <button
                    type="button"
                    aria-label="Close menu"
                    class="rounded-xl p-2 text-gray-600 transition hover:bg-gray-100 hover:text-gray-900"
                    on:click=close
                >
                    <CloseIcon />
                </button>
            </div>
            <div class="mx-5 mb-3 h-px bg-gradient-to-r from-transparent via-gray-200 to-transparent" />
            <nav class="flex flex-col gap-1 px-3">
                <MenuLinks
                    nav
                    drawer
                    item_class="rounded-xl px-3 py-3 text-sm font-medium text-gray-700 transition hover:bg-gray-50 hover:text-gray-900"
                />
            </nav>
        </aside>
    }
}

/// Escape closes the menu and a pending focus request moves focus to its
/// root. Call from a component that is mounted only while the menu is open.
///
/// `focus_root` returns `None` until the root is mounted, otherwise whether
/// focusing it succeeded.
fn use_open_menu<F>(drawer: RwSignal<Drawer>, focus_root: F)
where
    F: Fn() -> Option<bool> + 'static,
{
    use_scoped_keys(close_on_escape(drawer));
    Effect::new(move |_| {
        focus_if_requested(drawer, &focus_root);
    });
}

fn close_on_escape(drawer: RwSignal<Drawer>) -> impl Fn(Key) -> bool + Copy + 'static {
    move |key| drawer.try_update(|d| d.handle_key(key)).unwrap_or(false)
}

/// Consumes the focus request once the root exists. Returns whether it did.
fn focus_if_requested(drawer: RwSignal<Drawer>, focus_root: impl FnOnce() -> Option<bool>) -> bool {
    if !drawer.with_untracked(Drawer::focus_requested) {
        return false;
    }
    let Some(focused) = focus_root() else {
        return false;
    };
    if !focused {
        log::warn!("couldn't focus navigation menu");
    }
    drawer.update_untracked(|d| {
        d.take_focus_request();
    });
    true
}

/// Navigation plus account links. Following any of them closes the menu.
#[component]
fn MenuLinks(
    nav: &'static NavConfig,
    drawer: RwSignal<Drawer>,
    item_class: &'static str,
) -> impl IntoView {
    let pathname = use_location().pathname;
    let render = move |link: &'static Link| {
        let href: &'static str = &link.href;
        view! {
            <a
                href=href
                class=item_class
                style=move || accent_style(pathname.with(|p| p == href))
                on:click=move |_| drawer.update(Drawer::close)
            >
                {link.label.clone()}
            </a>
        }
    };
    view! {
        {nav.links.iter().map(render).collect_view()}
        {render(&nav.sign_up)}
        {render(&nav.log_in)}
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_escape_closes_toggled_dropdown() {
        Owner::new().with(|| {
            let drawer = RwSignal::new(Drawer::new());
            drawer.update(Drawer::toggle);
            assert!(drawer.with(Drawer::is_open));

            let on_key = close_on_escape(drawer);
            assert!(!on_key(Key::ArrowLeft));
            assert!(drawer.with(Drawer::is_open));
            assert!(on_key(Key::Escape));
            assert!(!drawer.with(Drawer::is_open));
            assert!(!on_key(Key::Escape));
        });
    }

    #[test]
    fn test_focus_request_taken_once_root_is_mounted() {
        Owner::new().with(|| {
            let drawer = RwSignal::new(Drawer::new());
            drawer.update(Drawer::open);

            // root not mounted yet, request stays pending
            assert!(!focus_if_requested(drawer, || None));
            assert!(drawer.with(Drawer::focus_requested));

            let mut calls = 0;
            assert!(focus_if_requested(drawer, || {
                calls += 1;
                Some(true)
            }));
            assert_eq!(calls, 1);
            assert!(!drawer.with(Drawer::focus_requested));

            assert!(!focus_if_requested(drawer, || panic!("focused twice")));
        });
    }

    #[test]
    fn test_failed_focus_still_consumes_request() {
        Owner::new().with(|| {
            let drawer = RwSignal::new(Drawer::new());
            drawer.update(Drawer::toggle);
            assert!(focus_if_requested(drawer, || Some(false)));
            assert!(!drawer.with(Drawer::focus_requested));
        });
    }
}
