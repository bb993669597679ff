//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::HttpChatSource;
use crate::pages::chat_viewer::ChatViewerPage;
use crate::util::logger::AppLogger;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the logger and chat source every loader reads from context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(AppLogger::console());
    provide_context(HttpChatSource::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/chat-viewer.css"/>
        <Title text="Chats"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatViewerPage/>
            </Routes>
        </Router>
    }
}
