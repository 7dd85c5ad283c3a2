use dioxus::prelude::*;

use crate::pages::Notes;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Release notes list
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Notes {},
}

/// Root application component.
///
/// Provides global styles and routing.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
