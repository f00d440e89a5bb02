use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"Corrections"</h1>
                <p class="sidebar-subtitle">"Schedule correction system"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Home"</a>
                </li>
                <li class="nav-item">
                    <a href="/corrections/" class="nav-link">"Corrections table"</a>
                </li>
                <li class="nav-item">
                    <a href="/upload/" rel="external" class="nav-link">"Upload schedule"</a>
                </li>
                <li class="nav-item">
                    <a href="/admin/" rel="external" class="nav-link">"Admin"</a>
                </li>
                <li class="nav-item">
                    <a href="/export/corrections/" rel="external" class="nav-link">"Export corrections"</a>
                </li>
                <li class="nav-item">
                    <a href="/export/schedule/" rel="external" class="nav-link">"Export schedule"</a>
                </li>
            </ul>
        </nav>
    }
}
