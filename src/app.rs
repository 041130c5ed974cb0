mod about;
mod ambient;
mod contact;
mod footer;
mod header;
mod hero;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::content::{DEVICON_STYLESHEET, OWNER};

use about::AboutPage;
use ambient::provide_ambient;
use contact::ContactPage;
use footer::Footer;
use header::Header;
use hero::HomePage;
use projects::ProjectsPage;
use skills::SkillsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=OWNER.tagline />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" href=DEVICON_STYLESHEET />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_ambient();

    view! {
        <Title formatter=|title| format!("{} - {title}", OWNER.name) />

        <Router>
            <div class=move || {
                format!("{} flex flex-col min-h-screen", theme.theme.get().class())
            }>
                <div class="flex flex-col flex-grow bg-white dark:bg-black text-zinc-900 dark:text-zinc-100">
                    <Header />
                    <main class="flex-grow">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=path!("/") view=HomePage />
                            <Route path=path!("/about") view=AboutPage />
                            <Route path=path!("/skills") view=SkillsPage />
                            <Route path=path!("/projects") view=ProjectsPage />
                            <Route path=path!("/contact") view=ContactPage />
                        </Routes>
                    </main>
                    <Footer />
                </div>
            </div>
        </Router>
    }
}

/// Grid and glow layers behind each content page.
#[component]
fn Ambience(
    /// Tailwind classes for the two glow blobs.
    glows: [&'static str; 2],
) -> impl IntoView {
    let [first, second] = glows;
    view! {
        <div class="fixed inset-0 pointer-events-none z-0">
            <div class="absolute inset-0 bg-grid" />
            <div class=format!("absolute w-[600px] h-[600px] blur-[120px] {first}") />
            <div class=format!("absolute w-[500px] h-[500px] blur-[120px] {second}") />
        </div>
    }
}

/// Small pill above each page heading.
#[component]
fn Eyebrow(
    label: &'static str,
    /// Ping and dot background classes for a live indicator.
    #[prop(optional)]
    pulse: Option<[&'static str; 2]>,
    #[prop(optional)] icon: Option<crate::content::Icon>,
) -> impl IntoView {
    view! {
        <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-zinc-100 dark:bg-zinc-900 border border-zinc-200 dark:border-zinc-800 mb-8">
            {pulse
                .map(|[ping, dot]| {
                    view! {
                        <span class="relative flex h-2 w-2">
                            <span class=format!(
                                "animate-ping absolute inline-flex h-full w-full rounded-full opacity-75 {ping}",
                            ) />
                            <span class=format!("relative inline-flex rounded-full h-2 w-2 {dot}") />
                        </span>
                    }
                })}
            {icon.map(|icon| view! { <i class=format!("{} text-xs text-zinc-500", icon.class()) /> })}
            <span class="text-zinc-600 dark:text-zinc-400 text-xs font-semibold tracking-wide uppercase">
                {label}
            </span>
        </div>
    }
}
