use corrections_ui::app::App;
use corrections_ui::config::ClientConfig;
use corrections_ui::logging;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, warnings) = ClientConfig::from_document();
    logging::init(&config.log_filter);
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
