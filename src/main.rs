mod config;
mod contact;
mod content;
mod dom;
mod nav;
mod reveal;
mod routes;
mod scroll;
mod theme;
mod typing;

fn main() {
    dioxus::launch(routes::App);
}
