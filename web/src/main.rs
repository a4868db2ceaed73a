use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    Dashboard, ForgotPassword, Invite, Login, RecordDetail, Records, Register, ResetPassword,
    Settings,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/reset-password?:token&:email")]
    ResetPassword { token: String, email: String },
    #[route("/dashboard")]
    Dashboard {},
    #[route("/records")]
    Records {},
    #[route("/record/:record_id")]
    RecordDetail { record_id: i64 },
    #[route("/invite")]
    Invite {},
    #[route("/settings")]
    Settings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/dashboard`; the guard bounces unauthenticated
/// visitors on to `/login` from there.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
