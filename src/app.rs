use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::api::{CorrectionsLoader, ExternalUpdateTable, FetchTransport, PageLoader, Renderer, TableState};
use crate::components::sidebar::Sidebar;
use crate::config::{ClientConfig, RendererKind};
use crate::pages::corrections::CorrectionsPage;
use crate::pages::home::HomePage;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let table = TableState::new();
    let renderer = match config.renderer {
        RendererKind::Builtin => Renderer::Builtin(table),
        RendererKind::External => Renderer::External(ExternalUpdateTable),
    };
    let loader: PageLoader = CorrectionsLoader::new(config.endpoint.clone(), FetchTransport, renderer);
    tracing::info!(endpoint = %config.endpoint, renderer = ?config.renderer, "Corrections client started");

    provide_context(table);
    provide_context(loader);
    provide_context(config);

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/corrections") view=CorrectionsPage />
                        <Route path=path!("/corrections/") view=CorrectionsPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
