//! The header bar shared by the dashboard and categories pages.

use maud::{Markup, html};

use crate::endpoints;

/// The pages reachable from the header, as `(url, title)` pairs.
const PAGES: [(&str, &str); 2] = [
    (endpoints::DASHBOARD_VIEW, "Dashboard"),
    (endpoints::CATEGORIES_VIEW, "Categories"),
];

const CURRENT_PAGE_STYLE: &str = "rounded-lg px-3 py-2 bg-blue-50 text-blue-700 \
    dark:bg-blue-900/30 dark:text-blue-200";

const OTHER_PAGE_STYLE: &str = "rounded-lg px-3 py-2 text-gray-600 hover:bg-gray-100 \
    hover:text-blue-700 dark:text-gray-300 dark:hover:bg-gray-800";

/// The header bar with the page at `active_endpoint` highlighted.
pub struct NavBar<'a> {
    active_endpoint: &'a str,
}

impl NavBar<'_> {
    /// Highlights the page whose URL equals `active_endpoint`, if any.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        NavBar { active_endpoint }
    }

    pub fn into_html(self) -> Markup {
        html!(
            header class="bg-white border-b border-gray-200 dark:bg-gray-900 dark:border-gray-700"
            {
                nav
                    class="max-w-screen-xl mx-auto flex flex-wrap items-center
                    justify-between gap-2 p-4"
                    aria-label="Primary"
                {
                    a
                        href=(endpoints::ROOT)
                        class="text-2xl font-semibold whitespace-nowrap dark:text-white"
                    {
                        "Cashflow"
                    }

                    ul class="flex gap-2 text-sm font-medium"
                    {
                        @for (url, title) in PAGES {
                            @let is_current = url == self.active_endpoint;
                            li {
                                a
                                    href=(url)
                                    class=(if is_current { CURRENT_PAGE_STYLE } else { OTHER_PAGE_STYLE })
                                    aria-current=[is_current.then_some("page")]
                                {
                                    (title)
                                }
                            }
                        }
                    }
                }
            }
        )
    }
}
