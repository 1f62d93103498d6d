use varex_web::App;

fn main() {
    dioxus::launch(App);
}
