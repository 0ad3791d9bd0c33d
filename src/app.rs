mod footer;
mod icons;
mod keyboard;
mod navbar;
mod portfolio;
mod profile;
mod stats;
mod tabs;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{profile, ContentError};
use footer::Footer;
use navbar::Navbar;
use profile::ProfilePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/skillnode.css" />
                <MetaTags />
            </head>
            <body class="bg-zinc-50 text-zinc-900 antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("SKILLNODE - {title}") />
        <Meta name="description" content="Freelancer profile, portfolio and client feedback." />
        <Router>
            <div class="flex flex-col min-h-screen">{site()}</div>
        </Router>
    }
}

/// Page chrome around the routes. Runs inside the router.
fn site() -> impl IntoView {
    match profile() {
        Ok(p) => Either::Left(view! {
            <Navbar nav=&p.nav />
            <main class="flex-grow w-full">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ProfilePage />
                </Routes>
            </main>
            <Footer footer=&p.footer />
        }),
        Err(error) => Either::Right(view! { <ContentErrorCard error /> }),
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page not found" />
        <section class="mx-auto max-w-7xl px-4 py-24 text-center">
            <p class="text-sm font-semibold text-[#124C98]">"404"</p>
            <h1 class="mt-2 text-2xl font-semibold">"Page not found."</h1>
            <A href="/" attr:class="mt-6 inline-block text-sm text-zinc-600 hover:underline">
                "Back to the profile"
            </A>
        </section>
    }
}

#[component]
fn ContentErrorCard(error: ContentError) -> impl IntoView {
    view! {
        <Title text="Unavailable" />
        <section class="mx-auto max-w-xl px-4 py-24">
            <div class="rounded-[22px] border border-red-200 bg-white p-6 shadow-sm">
                <h1 class="text-base font-semibold text-red-700">"This profile is unavailable"</h1>
                <p class="mt-2 text-sm text-zinc-600">{error.to_string()}</p>
            </div>
        </section>
    }
}
