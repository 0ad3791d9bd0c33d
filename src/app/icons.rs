use leptos::{
    either::{Either, EitherOf4},
    prelude::*,
};

use crate::content::{Logo, SocialIcon};

#[component]
pub fn SocialGlyph(icon: SocialIcon) -> impl IntoView {
    let path = match icon {
        SocialIcon::X => EitherOf4::A(view! {
            <path
                fill="currentColor"
                d="M17.21 3H20.21L14.42 9.93L21.35 21H15.93L11.56 14.57L6.56 21H3.56L9.73 13.57L3.1 3H8.65L12.64 8.82L17.21 3ZM16.45 19H17.93L7.57 5H6.01L16.45 19Z"
            />
        }),
        SocialIcon::LinkedIn => EitherOf4::B(view! {
            <path
                fill="currentColor"
                d="M19 3A2 2 0 0 1 21 5V19A2 2 0 0 1 19 21H5A2 2 0 0 1 3 19V5A2 2 0 0 1 5 3H19M8.5 17V10.5H6V17H8.5M7.25 9.28A1.28 1.28 0 1 0 7.25 6.72A1.28 1.28 0 0 0 7.25 9.28M18 17V13.21C18 11.24 16.43 10.5 15.03 10.5C14.14 10.5 13.36 10.96 13 11.58H12.96V10.5H10.5V17H13V13.5C13 12.84 13.5 12.5 14.1 12.5C14.68 12.5 15 12.88 15 13.5V17H18Z"
            />
        }),
        SocialIcon::Dribbble => EitherOf4::C(view! {
            <path
                fill="currentColor"
                d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20Zm6.6 4.6a8.5 8.5 0 0 1 1.9 5.3 20 20 0 0 0-5.9-.3l-.5-1.1c2-.8 3.6-2.1 4.5-3.9ZM12 3.5c2.1 0 4 .8 5.5 2-.8 1.6-2.3 2.8-4.2 3.5A40 40 0 0 0 10 4a8.6 8.6 0 0 1 2-.5ZM8.5 4.5a38 38 0 0 1 3.3 5 32 32 0 0 1-8.2 1.1 8.5 8.5 0 0 1 4.9-6.1ZM3.5 12v-.1c3.2 0 6.3-.5 9-1.3l.5 1c-3.4 1.1-6 3.3-7.5 6A8.5 8.5 0 0 1 3.5 12Zm8.5 8.5a8.4 8.4 0 0 1-5.3-1.9c1.3-2.5 3.6-4.4 6.8-5.4a35 35 0 0 1 1.8 6.6 8.4 8.4 0 0 1-3.3.7Zm4.8-1.5a36 36 0 0 0-1.7-6.2 18 18 0 0 1 5.2.3 8.5 8.5 0 0 1-3.5 5.9Z"
            />
        }),
        SocialIcon::GitHub => EitherOf4::D(view! {
            <path
                fill="currentColor"
                d="M12,2A10,10 0 0,0 2,12C2,16.42 4.87,20.17 8.84,21.5C9.34,21.58 9.5,21.27 9.5,21V19.07C6.73,19.68 6.14,17.92 6.14,17.92C5.68,16.81 5.03,16.5 5.03,16.5C4.12,15.88 5.1,15.9 5.1,15.9C6.1,15.97 6.63,16.93 6.63,16.93C7.5,18.4 8.97,17.96 9.54,17.73C9.63,17.08 9.89,16.65 10.17,16.42C7.95,16.19 5.62,15.27 5.62,11.44C5.62,10.39 6,9.55 6.66,8.85C6.55,8.62 6.17,7.39 6.75,5.76C6.75,5.76 7.67,5.5 9.5,6.85C10.37,6.61 11.3,6.5 12.22,6.5C13.14,6.5 14.07,6.61 14.94,6.85C16.77,5.5 17.69,5.76 17.69,5.76C18.27,7.39 17.89,8.62 17.78,8.85C18.44,9.55 18.82,10.39 18.82,11.44C18.82,15.28 16.5,16.19 14.27,16.41C14.64,16.73 15,17.39 15,18.42V21C15,21.27 15.16,21.59 15.67,21.5C19.63,20.17 22.5,16.42 22.5,12A10,10 0 0,0 12,2Z"
            />
        }),
    };
    view! {
        <svg viewBox="0 0 24 24" class="h-5 w-5" aria-hidden="true">
            {path}
        </svg>
    }
}

#[component]
pub fn GoogleGlyph() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" class="h-4 w-4" aria-hidden="true">
            <path
                fill="#EA4335"
                d="M12 10.2v3.8h5.4c-.24 1.26-.97 2.33-2.07 3.04l3.35 2.6C20.37 18.3 21.2 16.3 21.2 14c0-.78-.07-1.34-.2-1.8H12Z"
            />
            <path fill="#34A853" d="M6.65 14.32a6.97 6.97 0 0 0 0-4.64L3.3 7.08a11.5 11.5 0 0 0 0 9.84l3.35-2.6Z" />
            <path
                fill="#4A90E2"
                d="M12 22c2.97 0 5.46-.98 7.28-2.66l-3.35-2.6c-.93.6-2.12.96-3.93.96-3.01 0-5.57-2.03-6.45-4.78l-3.5 2.7C3.9 19.67 7.62 22 12 22Z"
            />
            <path
                fill="#FBBC05"
                d="M12 2C7.62 2 3.9 4.33 1.95 7.38l3.5 2.7C6.33 7.33 8.99 5.3 12 5.3c1.64 0 3.12.56 4.28 1.64l3.2-3.2C17.46 2.66 14.97 2 12 2Z"
            />
        </svg>
    }
}

#[component]
pub fn LogoMark(logo: &'static Logo) -> impl IntoView {
    match logo {
        Logo::Google => Either::Left(view! { <GoogleGlyph /> }),
        Logo::Text(text) => Either::Right(view! { <span>{text.clone()}</span> }),
    }
}

#[component]
pub fn CheckIcon(ok: bool) -> impl IntoView {
    view! {
        <svg
            viewBox="0 0 24 24"
            class=if ok { "h-5 w-5 text-emerald-600" } else { "h-5 w-5 text-zinc-300" }
            aria-hidden="true"
        >
            <path fill="currentColor" d="M9 16.2 4.8 12l-1.4 1.4L9 19 21 7l-1.4-1.4z" />
        </svg>
    }
}

#[component]
pub fn PinIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" class="h-4 w-4" aria-hidden="true">
            <path
                fill="currentColor"
                d="M12 2a7 7 0 0 0-7 7c0 4.28 7 13 7 13s7-8.72 7-13a7 7 0 0 0-7-7Zm0 9.5a2.5 2.5 0 1 1 0-5 2.5 2.5 0 0 1 0 5Z"
            />
        </svg>
    }
}

#[component]
pub fn MenuIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" class="h-6 w-6" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path stroke-linecap="round" d="M4 6h16M4 12h16M4 18h16" />
        </svg>
    }
}

#[component]
pub fn CloseIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" class="h-5 w-5" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path stroke-linecap="round" d="M6 6l12 12M18 6 6 18" />
        </svg>
    }
}

/// Outline star; `filled` paints it solid.
#[component]
pub fn StarIcon(#[prop(optional)] filled: bool) -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" class="h-full w-full" aria-hidden="true">
            <path
                d="M12 3.4l2.47 5.01 5.53.8-4 3.9.94 5.5L12 16.9l-4.94 2.7.94-5.5-4-3.9 5.53-.8L12 3.4z"
                fill=if filled { "currentColor" } else { "none" }
                stroke="currentColor"
                stroke-width="1.2"
            />
        </svg>
    }
}

#[component]
pub fn BookmarkIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" class="h-4 w-4" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path stroke-linejoin="round" d="M6 3h12v18l-6-4-6 4z" />
        </svg>
    }
}

#[component]
pub fn JobsIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" class="h-4 w-4" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" d="M1 12l5 5L17 6M10 16l1 1L22 6" />
        </svg>
    }
}
