use leptos::prelude::*;
use leptos_router::components::*;

use crate::content::{Icon, NAV_LINKS, OWNER};

const LINK_CLASS: &str = "text-sm text-zinc-500 dark:text-zinc-400 hover:text-zinc-900 dark:hover:text-zinc-100 transition-colors flex items-center gap-2";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative bg-zinc-50 dark:bg-zinc-900 border-t border-zinc-200 dark:border-zinc-800 pt-16 pb-8">
            <div class="container mx-auto px-6">
                <div class="grid md:grid-cols-4 gap-12 mb-16">
                    <div class="col-span-1 md:col-span-2 space-y-4">
                        <A href="/" attr:class="inline-flex items-center gap-2 group">
                            <div class="w-8 h-8 rounded-lg bg-zinc-900 dark:bg-zinc-100 flex items-center justify-center text-white dark:text-zinc-900 font-bold text-sm group-hover:scale-105 transition-transform">
                                {OWNER.initials}
                            </div>
                            <span class="font-semibold text-zinc-900 dark:text-zinc-100 text-lg tracking-tight">
                                {OWNER.name}
                            </span>
                        </A>
                        <p class="text-zinc-500 dark:text-zinc-400 max-w-sm text-sm leading-relaxed">
                            {OWNER.tagline}
                        </p>
                    </div>

                    <div class="space-y-4">
                        <h4 class="text-sm font-semibold text-zinc-900 dark:text-zinc-100 uppercase tracking-wider">
                            "Navigation"
                        </h4>
                        <ul class="space-y-3">
                            {NAV_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <A
                                                href=link.href
                                                attr:class="text-sm text-zinc-500 dark:text-zinc-400 hover:text-zinc-900 dark:hover:text-zinc-100 transition-colors flex items-center gap-1 group"
                                            >
                                                {link.name}
                                                <i class=format!(
                                                    "{} text-xs opacity-0 group-hover:opacity-100 transition-opacity",
                                                    Icon::ArrowUpRight.class(),
                                                ) />
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="space-y-4">
                        <h4 class="text-sm font-semibold text-zinc-900 dark:text-zinc-100 uppercase tracking-wider">
                            "Connect"
                        </h4>
                        <ul class="space-y-3">
                            <li>
                                <a href=OWNER.mailto() class=LINK_CLASS>
                                    <i class=Icon::Mail.class() />
                                    <span>"Email"</span>
                                </a>
                            </li>
                            <li>
                                <a
                                    href=OWNER.github
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=LINK_CLASS
                                >
                                    <i class=Icon::Github.class() />
                                    <span>"GitHub"</span>
                                </a>
                            </li>
                            <li>
                                <a href=OWNER.tel() class=LINK_CLASS>
                                    <i class=Icon::Phone.class() />
                                    <span>{OWNER.phone_display}</span>
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="pt-8 border-t border-zinc-200 dark:border-zinc-800 flex flex-col md:flex-row items-center justify-between gap-4">
                    <p class="text-xs text-zinc-500 text-center md:text-left">
                        {format!("© {} {}. All rights reserved.", env!("BUILD_YEAR"), OWNER.name)}
                    </p>
                    <p class="text-xs text-zinc-400 dark:text-zinc-600 flex items-center gap-1">
                        "Built with Leptos & Tailwind"
                    </p>
                </div>
            </div>
        </footer>
    }
}
